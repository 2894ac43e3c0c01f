//! Search configuration

use crate::constants::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of the fixed-depth minimax search
///
/// Passed explicitly to every search; there is no global depth setting.
///
/// # Examples
///
/// ```rust,ignore
/// let config = SearchConfig::default().with_depth(2);
/// let scored = search_root(&position, Color::White, &config);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Plies searched below the root, at least 1
    pub depth: usize,
    /// Multiplier applied to the opponent's evaluation at the leaves
    pub opponent_weight: f64,
    /// Score of a line that captures a king
    pub king_capture_score: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_SEARCH_DEPTH,
            opponent_weight: DEFAULT_OPPONENT_WEIGHT,
            king_capture_score: KING_CAPTURE_SCORE,
        }
    }
}

impl SearchConfig {
    /// Same configuration searching `depth` plies; zero is raised to one
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth.max(1);
        self
    }
}
