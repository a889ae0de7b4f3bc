//! Bunny Bridge - a cooperative bunny-and-snake puzzle game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain rules, movement, game state)
//! - `tuning`: Data-driven game balance
//! - `hud`: Read-only status projection for the UI collaborator
//!
//! Rendering, input capture, and frame scheduling are external
//! collaborators: they feed [`sim::TickInput`] in and draw from the
//! read-only state surface.

pub mod hud;
pub mod sim;
pub mod tuning;

pub use hud::HudModel;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Canvas width the built-in levels are authored against
    pub const CANVAS_WIDTH: f32 = 800.0;
    /// Canvas height the built-in levels are authored against
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Bunny bounding-box edge length
    pub const BUNNY_SIZE: f32 = 25.0;
    /// Bunny step length per tick, pixels
    pub const BUNNY_SPEED: f32 = 2.5;

    /// Snake segment bounding-box edge length
    pub const SNAKE_SEGMENT_SIZE: f32 = 18.0;
    /// Base snake speed, pixels
    pub const SNAKE_SPEED: f32 = 2.0;
    /// Chain steps cover speed * multiplier pixels at once
    pub const SNAKE_STEP_MULTIPLIER: f32 = 8.0;
    /// Hard cap on chain length - the strategic constraint
    pub const SNAKE_MAX_SEGMENTS: usize = 8;
    /// Chain length at level start
    pub const SNAKE_INITIAL_SEGMENTS: usize = 3;
    /// Spacing between initial trailing segments
    pub const SNAKE_SEGMENT_SPACING: f32 = 20.0;
    /// Minimum time between chain steps while a direction is held
    pub const SNAKE_MOVE_DELAY_MS: f32 = 100.0;

    /// Collectible bounding-box edge length
    pub const COLLECTIBLE_SIZE: f32 = 20.0;

    /// Frame deltas above this are treated as bogus (suspended tab)
    pub const MAX_FRAME_DELTA_MS: f32 = 100.0;
    /// Substitute delta for bogus frames (~60 Hz)
    pub const FALLBACK_FRAME_DELTA_MS: f32 = 16.0;

    /// Sessions and restarts begin here
    pub const FIRST_LEVEL: u32 = 1;
}
