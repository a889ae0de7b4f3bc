//! Game entities: bunny, snake, collectibles
//!
//! Plain per-kind structs sharing a small `MotionState` vocabulary instead
//! of a class hierarchy. Entities hold no references to shared systems —
//! the tick passes terrain and peer state in explicitly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use super::terrain::Terrain;
use crate::consts::*;

/// Discrete axis direction from the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector in canvas coordinates (y grows downward)
    #[inline]
    pub fn as_vec(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }
}

/// What an entity did this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MotionState {
    #[default]
    Idle,
    Moving,
    Blocked,
    Collecting,
}

/// The collector character. Land-bound unless a bridge covers the water.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bunny {
    pub pos: Vec2,
    pub state: MotionState,
}

impl Bunny {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            state: MotionState::Idle,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::at(self.pos, BUNNY_SIZE)
    }

    /// Bounds the bunny would occupy after stepping in `dir`
    pub fn proposed_bounds(&self, dir: Direction, speed: f32) -> Rect {
        Rect::at(self.pos + dir.as_vec() * speed, BUNNY_SIZE)
    }
}

/// The bridge character: an ordered chain of fixed-size segments, head first.
///
/// The chain is append-to-head / drop-from-tail only. Once capacity is
/// reached every accepted step evicts the oldest tail segment, so extending
/// the bridge in one place withdraws coverage somewhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snake {
    segments: Vec<Vec2>,
    pub bridging: bool,
    pub state: MotionState,
    max_segments: usize,
    /// Rising-edge latch for the bridge toggle trigger
    trigger_held: bool,
    /// Time since the chain last advanced
    move_cooldown_ms: f32,
}

impl Snake {
    /// Initial chain: head at `pos` with two segments trailing left
    pub fn new(pos: Vec2, max_segments: usize) -> Self {
        let segments = (0..SNAKE_INITIAL_SEGMENTS)
            .map(|i| Vec2::new(pos.x - i as f32 * SNAKE_SEGMENT_SPACING, pos.y))
            .collect();
        Self {
            segments,
            bridging: false,
            state: MotionState::Idle,
            max_segments,
            trigger_held: false,
            move_cooldown_ms: 0.0,
        }
    }

    #[inline]
    pub fn head(&self) -> Vec2 {
        self.segments[0]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn max_segments(&self) -> usize {
        self.max_segments
    }

    /// Per-segment bounds for collision and rendering
    pub fn segment_bounds(&self) -> impl Iterator<Item = Rect> + '_ {
        self.segments.iter().map(|&p| Rect::at(p, SNAKE_SEGMENT_SIZE))
    }

    /// Feed the current trigger-held state; toggles bridge mode on the
    /// rising edge only, so holding the trigger does not retoggle.
    pub fn update_bridge_trigger(&mut self, held: bool) -> bool {
        let toggled = held && !self.trigger_held;
        if toggled {
            self.bridging = !self.bridging;
        }
        self.trigger_held = held;
        toggled
    }

    /// Advance the move-delay accumulator; returns true when a chain step
    /// is allowed this tick.
    pub fn tick_move_delay(&mut self, dt_ms: f32, delay_ms: f32) -> bool {
        self.move_cooldown_ms += dt_ms;
        self.move_cooldown_ms >= delay_ms
    }

    /// Step the head in `dir`, prepending a segment and evicting the tail
    /// past capacity. Out-of-bounds steps are silently dropped. Terrain is
    /// never consulted — the snake swims.
    pub fn advance(&mut self, dir: Direction, step: f32, terrain: &Terrain) -> bool {
        let new_head = self.head() + dir.as_vec() * step;
        if !terrain.in_bounds(&Rect::at(new_head, SNAKE_SEGMENT_SIZE)) {
            return false;
        }

        self.segments.insert(0, new_head);
        if self.segments.len() > self.max_segments {
            self.segments.pop();
        }
        self.move_cooldown_ms = 0.0;
        true
    }

    /// Bridge coverage test: false unless bridging, else true iff any
    /// segment overlaps the queried bounds.
    pub fn supports(&self, bounds: &Rect) -> bool {
        self.bridging && self.segment_bounds().any(|s| s.overlaps(bounds))
    }
}

/// A heart carrot waiting to be picked up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub pos: Vec2,
    pub collected: bool,
}

impl Collectible {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            collected: false,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::at(self.pos, COLLECTIBLE_SIZE)
    }
}
