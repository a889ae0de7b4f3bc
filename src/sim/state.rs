//! Game state and level lifecycle
//!
//! One owned value holds everything the simulation mutates: current level
//! record, terrain, both characters, collectibles, phase, and score. Level
//! loads build the full replacement entity set first and then swap, so a
//! failed load leaves prior state untouched.

use serde::{Deserialize, Serialize};

use super::entity::{Bunny, Collectible, Snake};
use super::level::{LevelCatalog, LevelData, LevelError};
use super::terrain::Terrain;
use crate::consts::FIRST_LEVEL;
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay; entities update each tick
    Playing,
    /// Entity updates suspended until unpause
    Paused,
    /// Threshold reached; waiting for an explicit advance
    LevelComplete,
    /// Final level cleared; terminal until restart
    GameComplete,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    catalog: LevelCatalog,
    level: LevelData,
    pub terrain: Terrain,
    pub bunny: Bunny,
    pub snake: Snake,
    pub collectibles: Vec<Collectible>,
    pub phase: GamePhase,
    /// Hearts collected this run of the current level
    pub score: u32,
    /// Time spent in `Playing`, milliseconds
    pub elapsed_ms: f32,
}

impl GameState {
    /// Start a session on the first catalog level
    pub fn new(tuning: Tuning) -> Result<Self, LevelError> {
        let catalog = LevelCatalog::builtin();
        let level = catalog
            .get(FIRST_LEVEL)
            .ok_or(LevelError::NotFound(FIRST_LEVEL))?
            .clone();
        let (terrain, bunny, snake, collectibles) = build_entities(&level, &tuning);
        log::info!("session started on level {} ({})", level.id, level.name);
        Ok(Self {
            tuning,
            catalog,
            level,
            terrain,
            bunny,
            snake,
            collectibles,
            phase: GamePhase::Playing,
            score: 0,
            elapsed_ms: 0.0,
        })
    }

    /// Replace the running level with the given catalog entry.
    ///
    /// All-or-nothing: an unknown id returns `Err` and changes nothing.
    pub fn load_level(&mut self, id: u32) -> Result<(), LevelError> {
        let level = match self.catalog.get(id) {
            Some(level) => level.clone(),
            None => {
                let err = LevelError::NotFound(id);
                log::warn!("load rejected: {err}");
                return Err(err);
            }
        };
        let (terrain, bunny, snake, collectibles) = build_entities(&level, &self.tuning);
        log::info!("loaded level {} ({})", level.id, level.name);
        self.level = level;
        self.terrain = terrain;
        self.bunny = bunny;
        self.snake = snake;
        self.collectibles = collectibles;
        self.phase = GamePhase::Playing;
        Ok(())
    }

    /// Put the current level back to its authored start: collectibles
    /// uncollected, characters at start positions, snake back to the
    /// initial chain with bridging off. Zeroes the displayed score.
    pub fn reset_level(&mut self) {
        let (terrain, bunny, snake, collectibles) = build_entities(&self.level, &self.tuning);
        self.terrain = terrain;
        self.bunny = bunny;
        self.snake = snake;
        self.collectibles = collectibles;
        self.score = 0;
        self.phase = GamePhase::Playing;
        log::info!("level {} reset", self.level.id);
    }

    /// Advance past a completed level; loads the next catalog entry or, if
    /// none remains, ends the game.
    pub fn advance_level(&mut self) -> Result<(), LevelError> {
        if self.phase != GamePhase::LevelComplete {
            log::debug!("advance ignored in phase {:?}", self.phase);
            return Ok(());
        }
        let next = self.level.id + 1;
        if self.catalog.get(next).is_some() {
            self.load_level(next)
        } else {
            self.phase = GamePhase::GameComplete;
            log::info!("all {} levels complete", self.catalog.len());
            Ok(())
        }
    }

    /// Restart the whole session from level 1 with a zeroed score
    pub fn restart(&mut self) -> Result<(), LevelError> {
        self.score = 0;
        self.elapsed_ms = 0.0;
        self.load_level(FIRST_LEVEL)?;
        log::info!("session restarted");
        Ok(())
    }

    /// Toggle between `Playing` and `Paused`; no effect in end phases
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
            other => other,
        };
    }

    /// Flip to `LevelComplete` the moment the threshold is met; fires at
    /// most once per level run since the phase leaves `Playing`.
    pub(crate) fn check_level_complete(&mut self) {
        if self.phase == GamePhase::Playing && self.collected_count() >= self.level.required {
            self.phase = GamePhase::LevelComplete;
            log::info!(
                "level {} complete: {}/{} hearts",
                self.level.id,
                self.collected_count(),
                self.level.required
            );
        }
    }

    // --- read-only surface for the render/UI collaborators ---

    pub fn level(&self) -> &LevelData {
        &self.level
    }

    pub fn level_id(&self) -> u32 {
        self.level.id
    }

    pub fn level_name(&self) -> &str {
        &self.level.name
    }

    pub fn collected_count(&self) -> usize {
        self.collectibles.iter().filter(|c| c.collected).count()
    }

    pub fn required_count(&self) -> usize {
        self.level.required
    }

    pub fn total_count(&self) -> usize {
        self.collectibles.len()
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }
}

/// Build the full entity set for a level record
fn build_entities(
    level: &LevelData,
    tuning: &Tuning,
) -> (Terrain, Bunny, Snake, Vec<Collectible>) {
    let terrain = Terrain::new(
        level.water.clone(),
        tuning.canvas_width,
        tuning.canvas_height,
    );
    let bunny = Bunny::new(level.bunny_start);
    let snake = Snake::new(level.snake_start, tuning.snake_max_segments);
    let collectibles = level
        .collectibles
        .iter()
        .map(|&pos| Collectible::new(pos))
        .collect();
    (terrain, bunny, snake, collectibles)
}
