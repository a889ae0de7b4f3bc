//! Read-only HUD projection for the UI collaborator
//!
//! Everything the status bar needs in one snapshot, so the UI never reaches
//! into sim internals.

use serde::Serialize;

use crate::sim::{GamePhase, GameState};

/// One frame's worth of HUD data
#[derive(Debug, Clone, Serialize)]
pub struct HudModel {
    pub level_id: u32,
    pub level_name: String,
    pub score: u32,
    pub collected: usize,
    pub required: usize,
    pub total: usize,
    /// Segment meter: current chain length / cap
    pub segments: usize,
    pub max_segments: usize,
    pub bridging: bool,
    pub phase: GamePhase,
    /// Human-readable status line
    pub status: String,
}

impl HudModel {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            level_id: state.level_id(),
            level_name: state.level_name().to_string(),
            score: state.score,
            collected: state.collected_count(),
            required: state.required_count(),
            total: state.total_count(),
            segments: state.snake.len(),
            max_segments: state.snake.max_segments(),
            bridging: state.snake.bridging,
            phase: state.phase,
            status: status_line(state),
        }
    }

    /// Heart counter: collected/total, or collected/required with the
    /// total in parentheses when partial completion is allowed
    pub fn score_line(&self) -> String {
        if self.required == self.total {
            format!("{}/{}", self.collected, self.total)
        } else {
            format!("{}/{} ({} total)", self.collected, self.required, self.total)
        }
    }
}

fn status_line(state: &GameState) -> String {
    match state.phase {
        GamePhase::Playing => format!(
            "Level {}: {} - collect {} hearts, bridge the water together",
            state.level_id(),
            state.level_name(),
            state.required_count()
        ),
        GamePhase::Paused => "Paused - unpause to resume".to_string(),
        GamePhase::LevelComplete => {
            let collected = state.collected_count();
            if collected > state.required_count() {
                format!(
                    "Level {} complete! Perfect score: {}/{} hearts - advance when ready",
                    state.level_id(),
                    collected,
                    state.total_count()
                )
            } else {
                format!(
                    "Level {} complete! {}/{} hearts collected - advance when ready",
                    state.level_id(),
                    collected,
                    state.required_count()
                )
            }
        }
        GamePhase::GameComplete => {
            "Congratulations! All levels complete - restart to play again from level 1".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_snapshot_reflects_state() {
        let state = GameState::new(Tuning::default()).unwrap();
        let hud = HudModel::from_state(&state);
        assert_eq!(hud.level_id, 1);
        assert_eq!(hud.level_name, "First Steps");
        assert_eq!(hud.segments, 3);
        assert_eq!(hud.max_segments, 8);
        assert!(!hud.bridging);
        assert_eq!(hud.score_line(), "0/3");
        assert!(hud.status.starts_with("Level 1: First Steps"));
    }

    #[test]
    fn test_partial_threshold_score_line() {
        let mut state = GameState::new(Tuning::default()).unwrap();
        state.load_level(3).unwrap();
        state.collectibles[0].collected = true;
        let hud = HudModel::from_state(&state);
        assert_eq!(hud.score_line(), "1/4 (6 total)");
    }

    #[test]
    fn test_completion_status_variants() {
        let mut state = GameState::new(Tuning::default()).unwrap();
        state.load_level(3).unwrap();
        // Clear 5 of 6 with a threshold of 4: beats the requirement
        for c in state.collectibles.iter_mut().take(5) {
            c.collected = true;
        }
        state.check_level_complete();
        let hud = HudModel::from_state(&state);
        assert_eq!(hud.phase, GamePhase::LevelComplete);
        assert!(hud.status.contains("Perfect score: 5/6"));
    }

    #[test]
    fn test_paused_and_complete_status() {
        let mut state = GameState::new(Tuning::default()).unwrap();
        state.toggle_pause();
        assert!(HudModel::from_state(&state).status.contains("Paused"));

        state.phase = GamePhase::GameComplete;
        assert!(
            HudModel::from_state(&state)
                .status
                .contains("All levels complete")
        );
    }
}
