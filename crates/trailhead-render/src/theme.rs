use trailhead_core::Difficulty;

/// Difficulty → fill color. A presentation parameter, not a layout
/// invariant; defaults are the reference dashboard's palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyPalette {
    pub beginner: String,
    pub intermediate: String,
    pub advanced: String,
    /// Used for unknown/other difficulties.
    pub fallback: String,
}

impl Default for DifficultyPalette {
    fn default() -> Self {
        Self {
            beginner: "#10b981".to_string(),
            intermediate: "#f59e0b".to_string(),
            advanced: "#ef4444".to_string(),
            fallback: "#6b7280".to_string(),
        }
    }
}

impl DifficultyPalette {
    pub fn color_for(&self, difficulty: Difficulty) -> &str {
        match difficulty {
            Difficulty::Beginner => &self.beginner,
            Difficulty::Intermediate => &self.intermediate,
            Difficulty::Advanced => &self.advanced,
            Difficulty::Unknown => &self.fallback,
        }
    }
}
