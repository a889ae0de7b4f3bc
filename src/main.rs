//! Bunny Bridge entry point
//!
//! Headless demo driver: runs the simulation core with a scripted input
//! sequence and logs what the rules engine decides. A real front end would
//! replace this loop, sampling input and drawing from the same state
//! surface.

use bunny_bridge::hud::HudModel;
use bunny_bridge::sim::{Direction, GameState, LevelError, TickInput, tick};
use bunny_bridge::tuning::Tuning;

/// Run `ticks` frames of the same input at a fixed 16 ms delta
fn run(state: &mut GameState, input: TickInput, ticks: u32) {
    for _ in 0..ticks {
        tick(state, &input, 16.0);
    }
}

fn main() -> Result<(), LevelError> {
    env_logger::init();

    let tuning = match std::env::var("BUNNY_BRIDGE_TUNING") {
        Ok(json) => match Tuning::from_json(&json) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("ignoring bad tuning blob: {e}");
                Tuning::default()
            }
        },
        Err(_) => Tuning::default(),
    };

    let mut state = GameState::new(tuning)?;
    println!("{}", HudModel::from_state(&state).status);

    // Walk the bunny down onto the first pond's row, then east until the
    // water blocks it
    run(
        &mut state,
        TickInput {
            bunny_dir: Some(Direction::Down),
            ..TickInput::default()
        },
        44,
    );
    let east = TickInput {
        bunny_dir: Some(Direction::Right),
        ..TickInput::default()
    };
    run(&mut state, east, 80);
    println!(
        "bunny parked at ({:.0},{:.0}) in state {:?}",
        state.bunny.pos.x, state.bunny.pos.y, state.bunny.state
    );

    // Toggle bridge mode (single held frame = one rising edge)
    run(
        &mut state,
        TickInput {
            bridge_held: true,
            ..TickInput::default()
        },
        1,
    );

    // Bring the chain down to the bunny's row
    run(
        &mut state,
        TickInput {
            snake_dir: Some(Direction::Down),
            ..TickInput::default()
        },
        30,
    );

    // Extend east while the bunny follows: the chain cannot span the pond,
    // so the bridge walks with the bunny, the tail evicting behind it
    run(
        &mut state,
        TickInput {
            bunny_dir: Some(Direction::Right),
            snake_dir: Some(Direction::Right),
            ..TickInput::default()
        },
        400,
    );

    let hud = HudModel::from_state(&state);
    println!(
        "bridge: {}/{} segments (bridging={})",
        hud.segments, hud.max_segments, hud.bridging
    );
    println!(
        "bunny crossed to ({:.0},{:.0}), hearts {}",
        state.bunny.pos.x,
        state.bunny.pos.y,
        hud.score_line()
    );
    println!("{}", hud.status);

    Ok(())
}
