//! Per-frame simulation tick
//!
//! The external frame scheduler calls [`tick`] once per rendered frame with
//! the sampled input and the frame delta. Update order: snake (bridge
//! toggle, then chain movement), bunny (validated step), collection, win
//! check. Everything completes synchronously within the tick.

use super::entity::{Direction, MotionState};
use super::movement;
use super::state::{GamePhase, GameState};
use crate::consts::{FALLBACK_FRAME_DELTA_MS, MAX_FRAME_DELTA_MS};

/// Input sampled for one tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Bunny step direction, if any
    pub bunny_dir: Option<Direction>,
    /// Snake chain direction; only effective while bridging
    pub snake_dir: Option<Direction>,
    /// Bridge trigger held this frame (toggle fires on the rising edge)
    pub bridge_held: bool,
}

impl TickInput {
    pub fn idle() -> Self {
        Self::default()
    }
}

/// Clamp a frame delta to a sane range.
///
/// Negative or implausibly large deltas (suspended tab, clock jump) fall
/// back to a nominal 60 Hz frame so a single bad delta cannot teleport
/// entities past collision checks.
pub fn clamp_delta(dt_ms: f32) -> f32 {
    if dt_ms >= 0.0 && dt_ms <= MAX_FRAME_DELTA_MS {
        dt_ms
    } else {
        FALLBACK_FRAME_DELTA_MS
    }
}

/// Advance the simulation by one frame
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f32) {
    let dt = clamp_delta(dt_ms);

    if state.phase != GamePhase::Playing {
        return;
    }
    state.elapsed_ms += dt;

    update_snake(state, input, dt);
    update_bunny(state, input);
    resolve_collection(state);
    state.check_level_complete();
}

fn update_snake(state: &mut GameState, input: &TickInput, dt: f32) {
    state.snake.update_bridge_trigger(input.bridge_held);

    if !state.snake.bridging {
        state.snake.state = MotionState::Idle;
        return;
    }
    // Chain steps are rate-limited so a held key extends the bridge at a
    // readable cadence rather than once per frame
    if !state
        .snake
        .tick_move_delay(dt, state.tuning.snake_move_delay_ms)
    {
        return;
    }

    match input.snake_dir {
        Some(dir) => {
            let step = state.tuning.snake_step();
            if state.snake.advance(dir, step, &state.terrain) {
                state.snake.state = MotionState::Moving;
            }
        }
        None => state.snake.state = MotionState::Idle,
    }
}

fn update_bunny(state: &mut GameState, input: &TickInput) {
    let Some(dir) = input.bunny_dir else {
        state.bunny.state = MotionState::Idle;
        return;
    };

    let proposed = state.bunny.proposed_bounds(dir, state.tuning.bunny_speed);

    // Canvas bounds always win, before any terrain rule
    if !state.terrain.in_bounds(&proposed) {
        state.bunny.state = MotionState::Blocked;
        return;
    }

    let current = state.bunny.bounds();
    if movement::can_bunny_move_to(&current, &proposed, &state.snake, &state.terrain) {
        state.bunny.pos = proposed.pos();
        state.bunny.state = MotionState::Moving;
    } else {
        state.bunny.state = MotionState::Blocked;
    }
}

/// Pick up at most one collectible per tick: first uncollected overlap in
/// list order wins, and marking it synchronously makes collection
/// idempotent within the tick.
fn resolve_collection(state: &mut GameState) {
    let bunny_bounds = state.bunny.bounds();
    for collectible in state.collectibles.iter_mut() {
        if !collectible.collected && collectible.bounds().overlaps(&bunny_bounds) {
            collectible.collected = true;
            state.score += 1;
            state.bunny.state = MotionState::Collecting;
            log::debug!("heart collected, score {}", state.score);
            break;
        }
    }
}
