//! Level data model and the built-in catalog
//!
//! Levels are fixed, hand-authored records: terrain rectangles, collectible
//! positions, start positions, and the completion threshold. The catalog is
//! a pure data source with no behavior beyond lookup.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;

/// One level's authored data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelData {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub bunny_start: Vec2,
    pub snake_start: Vec2,
    pub water: Vec<Rect>,
    /// Collectible spawn positions (top-left corners)
    pub collectibles: Vec<Vec2>,
    /// Collected count needed to finish the level (≤ total, allowing
    /// partial-completion level design)
    pub required: usize,
    /// Hint lines surfaced by the UI collaborator at level start
    pub tips: Vec<String>,
}

/// Level lookup failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    NotFound(u32),
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::NotFound(id) => write!(f, "level {id} not found in catalog"),
        }
    }
}

impl std::error::Error for LevelError {}

/// Fixed set of levels keyed by 1-based id
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<LevelData>,
}

impl LevelCatalog {
    /// The four built-in levels
    pub fn builtin() -> Self {
        Self {
            levels: builtin_levels(),
        }
    }

    pub fn get(&self, id: u32) -> Option<&LevelData> {
        self.levels.iter().find(|l| l.id == id)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Whether another level follows the given id
    pub fn has_next(&self, id: u32) -> bool {
        self.get(id + 1).is_some()
    }
}

impl Default for LevelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn tips(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

fn builtin_levels() -> Vec<LevelData> {
    vec![
        LevelData {
            id: 1,
            name: "First Steps".into(),
            description: "Learn to work together! Snake creates bridges for bunny.".into(),
            bunny_start: Vec2::new(50.0, 50.0),
            snake_start: Vec2::new(100.0, 100.0),
            water: vec![
                Rect::new(200.0, 150.0, 150.0, 80.0),
                Rect::new(450.0, 300.0, 120.0, 100.0),
            ],
            collectibles: vec![
                Vec2::new(280.0, 160.0),
                Vec2::new(500.0, 320.0),
                Vec2::new(650.0, 500.0),
            ],
            required: 3,
            tips: tips(&[
                "Activate bridge mode before crossing water",
                "Bunny cannot enter water alone",
                "Work together to reach all hearts",
            ]),
        },
        LevelData {
            id: 2,
            name: "Strategic Thinking".into(),
            description: "Plan your moves! Snake length is limited.".into(),
            bunny_start: Vec2::new(30.0, 30.0),
            snake_start: Vec2::new(80.0, 80.0),
            water: vec![
                Rect::new(150.0, 100.0, 100.0, 150.0),
                Rect::new(300.0, 200.0, 80.0, 80.0),
                Rect::new(500.0, 100.0, 120.0, 200.0),
                Rect::new(200.0, 400.0, 300.0, 80.0),
            ],
            collectibles: vec![
                Vec2::new(180.0, 120.0),
                Vec2::new(420.0, 150.0),
                Vec2::new(650.0, 200.0),
                Vec2::new(350.0, 420.0),
                Vec2::new(700.0, 50.0),
            ],
            required: 5,
            tips: tips(&[
                "Snake has limited length!",
                "Plan your bridge path carefully",
                "Snake can reposition by moving backward",
            ]),
        },
        LevelData {
            id: 3,
            name: "Master Challenge".into(),
            description: "The ultimate test of cooperation and strategy!".into(),
            bunny_start: Vec2::new(40.0, 300.0),
            snake_start: Vec2::new(40.0, 200.0),
            water: vec![
                Rect::new(100.0, 100.0, 200.0, 60.0),
                Rect::new(200.0, 200.0, 60.0, 200.0),
                Rect::new(350.0, 150.0, 180.0, 100.0),
                Rect::new(580.0, 300.0, 100.0, 200.0),
                Rect::new(100.0, 450.0, 400.0, 60.0),
            ],
            collectibles: vec![
                Vec2::new(180.0, 110.0),
                Vec2::new(220.0, 250.0),
                Vec2::new(420.0, 170.0),
                Vec2::new(620.0, 350.0),
                Vec2::new(280.0, 470.0),
                Vec2::new(750.0, 100.0),
            ],
            required: 4,
            tips: tips(&[
                "Only 4 hearts needed out of 6!",
                "Choose your path wisely",
                "Snake management is crucial",
            ]),
        },
        LevelData {
            id: 4,
            name: "The Great Flood".into(),
            description: "Pure water challenge - the snake must bridge everything!".into(),
            bunny_start: Vec2::new(50.0, 250.0),
            snake_start: Vec2::new(100.0, 280.0),
            water: vec![
                Rect::new(120.0, 0.0, 680.0, 600.0),
                Rect::new(0.0, 0.0, 800.0, 120.0),
                Rect::new(0.0, 480.0, 800.0, 120.0),
            ],
            collectibles: vec![
                Vec2::new(200.0, 200.0),
                Vec2::new(400.0, 350.0),
                Vec2::new(600.0, 150.0),
                Vec2::new(750.0, 300.0),
            ],
            required: 3,
            tips: tips(&[
                "Everything is flooded!",
                "Snake must bridge ALL movements",
                "Plan your 8-segment snake path carefully!",
                "Only 3 hearts needed out of 4",
            ]),
        },
    ]
}
