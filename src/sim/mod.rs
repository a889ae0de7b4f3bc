//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One synchronous tick per frame, no internal threads
//! - Stable iteration order (collectibles in authored order)
//! - No rendering or platform dependencies

pub mod entity;
pub mod geom;
pub mod level;
pub mod movement;
pub mod state;
pub mod terrain;
pub mod tick;

pub use entity::{Bunny, Collectible, Direction, MotionState, Snake};
pub use geom::Rect;
pub use level::{LevelCatalog, LevelData, LevelError};
pub use movement::can_bunny_move_to;
pub use state::{GamePhase, GameState};
pub use terrain::{Terrain, TerrainKind};
pub use tick::{TickInput, clamp_delta, tick};
