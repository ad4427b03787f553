use serde::{Deserialize, Serialize};

use crate::models::TeamSide;
use crate::rotation::RotationState;

/// Rotation state captured just before a scoring advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub state: RotationState,
    pub scoring_team: TeamSide,
}

/// Undo stack. Depth equals the number of score increments not yet undone.
#[derive(Debug, Clone, Default)]
pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
}

impl HistoryStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: RotationState, scoring_team: TeamSide) {
        self.entries.push(HistoryEntry { state, scoring_team });
    }

    /// `None` when there is nothing to undo.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn peek(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}
