//! End-to-end session tests driven through the public tick API

use bunny_bridge::sim::{
    Direction, GamePhase, GameState, LevelError, MotionState, Snake, TickInput, tick,
};
use bunny_bridge::tuning::Tuning;
use glam::Vec2;

fn new_session() -> GameState {
    GameState::new(Tuning::default()).expect("builtin catalog")
}

fn run(state: &mut GameState, input: TickInput, ticks: u32, dt: f32) {
    for _ in 0..ticks {
        tick(state, &input, dt);
    }
}

fn east() -> TickInput {
    TickInput {
        bunny_dir: Some(Direction::Right),
        ..TickInput::default()
    }
}

/// The teamwork loop of level 1: bunny is stopped by the pond, the snake
/// bridges down to its row, and the pair walk east together with the chain
/// evicting behind the bunny as it extends ahead.
#[test]
fn bunny_crosses_level_one_pond_on_walking_bridge() {
    let mut s = new_session();

    // Walk the bunny from (50,50) down onto the pond's row, then east
    // until pond 1 (x 200..350, y 150..230) stops it
    run(
        &mut s,
        TickInput {
            bunny_dir: Some(Direction::Down),
            ..TickInput::default()
        },
        44,
        16.0,
    );
    assert_eq!(s.bunny.pos, Vec2::new(50.0, 160.0));
    run(&mut s, east(), 80, 16.0);
    assert_eq!(s.bunny.state, MotionState::Blocked);
    assert_eq!(s.bunny.pos, Vec2::new(175.0, 160.0));
    assert_eq!(s.terrain.water_overlap_count(&s.bunny.bounds()), 0);

    // Bridge up and bring the chain down from (100,100) to the row
    run(
        &mut s,
        TickInput {
            bridge_held: true,
            ..TickInput::default()
        },
        1,
        16.0,
    );
    assert!(s.snake.bridging);
    run(
        &mut s,
        TickInput {
            snake_dir: Some(Direction::Down),
            ..TickInput::default()
        },
        30,
        16.0,
    );
    assert_eq!(s.snake.head(), Vec2::new(100.0, 164.0));

    // Walk east together; the chain is too short to span the pond at once,
    // so coverage travels with the pair
    let together = TickInput {
        bunny_dir: Some(Direction::Right),
        snake_dir: Some(Direction::Right),
        ..TickInput::default()
    };
    run(&mut s, together, 60, 16.0);
    // Mid-crossing: the bunny is standing on water, which only the bridge
    // makes legal
    assert!(s.terrain.water_overlap_count(&s.bunny.bounds()) > 0);
    assert!(s.snake.bridging);

    run(&mut s, together, 340, 16.0);
    // Crossed: back on dry land east of the pond, heart on the way picked up
    assert!(s.bunny.pos.x > 350.0);
    assert_eq!(s.terrain.water_overlap_count(&s.bunny.bounds()), 0);
    assert_eq!(s.score, 1);
    assert_eq!(s.collected_count(), 1);
}

#[test]
fn load_failure_leaves_session_running() {
    let mut s = new_session();
    run(&mut s, east(), 5, 16.0);
    let pos = s.bunny.pos;
    let phase = s.phase;

    assert_eq!(s.load_level(42), Err(LevelError::NotFound(42)));
    assert_eq!(s.bunny.pos, pos);
    assert_eq!(s.phase, phase);
    assert_eq!(s.level_id(), 1);

    // The simulation keeps ticking on prior state
    run(&mut s, east(), 5, 16.0);
    assert!(s.bunny.pos.x > pos.x);
}

/// Spec scenario: a full 8-segment bridging chain moved once more keeps
/// length 8, loses its pre-move tail, and gains a head one step ahead.
#[test]
fn chain_at_capacity_evicts_fifo_through_tick() {
    let mut s = new_session();
    s.snake = Snake::new(Vec2::new(400.0, 100.0), s.tuning.snake_max_segments);

    // Toggle bridging, then step the chain once per tick (dt = move delay)
    run(
        &mut s,
        TickInput {
            bridge_held: true,
            ..TickInput::default()
        },
        1,
        16.0,
    );
    let grow = TickInput {
        snake_dir: Some(Direction::Right),
        ..TickInput::default()
    };
    run(&mut s, grow, 5, 100.0);
    assert_eq!(s.snake.len(), 8);

    let head_before = s.snake.head();
    let tail_before = s.snake.segment_bounds().last().unwrap();

    run(&mut s, grow, 1, 100.0);
    assert_eq!(s.snake.len(), 8);
    assert_eq!(
        s.snake.head(),
        head_before + Vec2::new(s.tuning.snake_step(), 0.0)
    );
    assert!(
        s.snake
            .segment_bounds()
            .all(|b| (b.x, b.y) != (tail_before.x, tail_before.y))
    );
}

#[test]
fn full_session_reaches_game_complete_and_restarts() {
    let mut s = new_session();

    for level in 1..=4u32 {
        assert_eq!(s.level_id(), level);
        assert_eq!(s.phase, GamePhase::Playing);

        // Ferry the bunny onto each heart until the threshold fires
        let spots = s.level().collectibles.clone();
        for pos in spots {
            if s.phase != GamePhase::Playing {
                break;
            }
            s.bunny.pos = pos;
            tick(&mut s, &TickInput::idle(), 16.0);
        }
        assert_eq!(s.phase, GamePhase::LevelComplete, "level {level}");
        s.advance_level().unwrap();
    }

    assert_eq!(s.phase, GamePhase::GameComplete);

    s.restart().unwrap();
    assert_eq!(s.level_id(), 1);
    assert_eq!(s.score, 0);
    assert_eq!(s.phase, GamePhase::Playing);
    assert_eq!(s.collected_count(), 0);
}

#[test]
fn reset_mid_level_rewinds_everything_but_keeps_level() {
    let mut s = new_session();
    s.load_level(2).unwrap();

    // Make a mess: collect a heart, move, bridge up
    s.bunny.pos = s.level().collectibles[0];
    tick(&mut s, &TickInput::idle(), 16.0);
    run(
        &mut s,
        TickInput {
            bridge_held: true,
            ..TickInput::default()
        },
        1,
        16.0,
    );
    assert_eq!(s.score, 1);
    assert!(s.snake.bridging);

    s.reset_level();
    assert_eq!(s.level_id(), 2);
    assert_eq!(s.score, 0);
    assert_eq!(s.collected_count(), 0);
    assert!(!s.snake.bridging);
    assert_eq!(s.snake.len(), 3);
    assert_eq!(s.bunny.pos, s.level().bunny_start);
    assert_eq!(s.phase, GamePhase::Playing);
}

#[test]
fn pause_freezes_and_resumes() {
    let mut s = new_session();
    run(&mut s, east(), 4, 16.0);
    let pos = s.bunny.pos;

    s.toggle_pause();
    run(&mut s, east(), 20, 16.0);
    assert_eq!(s.bunny.pos, pos);
    assert_eq!(s.phase, GamePhase::Paused);

    s.toggle_pause();
    run(&mut s, east(), 4, 16.0);
    assert!(s.bunny.pos.x > pos.x);
}
