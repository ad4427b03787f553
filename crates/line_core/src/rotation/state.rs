use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Everything undo needs to restore: two offsets and two counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RotationState {
    /// Lines played so far; selects the pattern.
    pub line_index: u32,
    /// 1-based number of the point about to be played.
    pub point_number: u32,
    /// Per-category offsets, indexed by [`Category::index`].
    pub cursors: [usize; 2],
}

impl RotationState {
    pub fn initial() -> Self {
        Self { line_index: 0, point_number: 1, cursors: [0, 0] }
    }

    pub fn cursor(&self, category: Category) -> usize {
        self.cursors[category.index()]
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::initial()
    }
}
