//! Rotation engine
//!
//! Keeps one rotation sequence of player ids per category and a
//! [`RotationState`] holding an offset into each. Advancing a line moves the
//! offsets; the sequences only change when the roster changes, through
//! [`RotationEngine::reconcile`]. Undo is therefore a plain value copy of the
//! state, and previewing any future line is a pure computation.
//!
//! ## Roster merge rules
//! - Added players are inserted at the category cursor: they play next.
//! - Removed players are excised; a removal before the cursor pulls the
//!   cursor back by one so the same player stays next.
//! - A reorder replaces the sequence and keeps the cursor as a position.

use serde::{Deserialize, Serialize};

use super::queue::{advance_cursor, normalize, rotate_left, window};
use super::state::RotationState;
use crate::models::{Category, Player, PlayerId};
use crate::pattern::{LinePattern, RatioPolicy};
use crate::roster::{RosterChange, RosterStore};

/// Players assigned to one point, open category first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Composition the policy asked for.
    pub pattern: LinePattern,
    pub players: Vec<Player>,
}

impl Line {
    /// Composition actually fielded.
    pub fn breakdown(&self) -> LinePattern {
        let open = self.players.iter().filter(|p| p.category == Category::Open).count();
        LinePattern { open: open as u8, women: (self.players.len() - open) as u8 }
    }

    /// True when a category had fewer players than the pattern requires.
    pub fn is_short(&self) -> bool {
        self.breakdown() != self.pattern
    }

    pub fn ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RotationEngine {
    state: RotationState,
    queues: [Vec<PlayerId>; 2],
}

impl RotationEngine {
    /// Start a game: sequences follow the canonical roster order, cursors at 0.
    pub fn new(roster: &RosterStore) -> Self {
        Self {
            state: RotationState::initial(),
            queues: [
                roster.ids_by_category(Category::Open),
                roster.ids_by_category(Category::Women),
            ],
        }
    }

    pub fn reset(&mut self, roster: &RosterStore) {
        *self = Self::new(roster);
    }

    pub fn state(&self) -> &RotationState {
        &self.state
    }

    pub fn line_index(&self) -> u32 {
        self.state.line_index
    }

    pub fn point_number(&self) -> u32 {
        self.state.point_number
    }

    /// Rotation sequence for `category`, independent of the cursor.
    pub fn queue(&self, category: Category) -> &[PlayerId] {
        &self.queues[category.index()]
    }

    /// Cursor for `category`, always a valid offset into its sequence.
    pub fn cursor(&self, category: Category) -> usize {
        normalize(self.state.cursor(category), self.queue(category).len())
    }

    /// The sequence as seen from the cursor: who plays next comes first.
    pub fn upcoming(&self, category: Category) -> Vec<PlayerId> {
        rotate_left(self.queue(category), self.cursor(category))
    }

    pub fn current_pattern(&self, policy: RatioPolicy) -> LinePattern {
        policy.resolve(self.state.line_index)
    }

    pub fn current_line(&self, roster: &RosterStore, policy: RatioPolicy) -> Line {
        self.preview(roster, policy, 0)
    }

    pub fn next_line(&self, roster: &RosterStore, policy: RatioPolicy) -> Line {
        self.preview(roster, policy, 1)
    }

    /// Line that would be played `ahead` advances from now. Does not mutate.
    pub fn preview(&self, roster: &RosterStore, policy: RatioPolicy, ahead: u32) -> Line {
        let mut cursors = [self.cursor(Category::Open), self.cursor(Category::Women)];
        for step in 0..ahead {
            let pattern = policy.resolve(self.state.line_index.wrapping_add(step));
            for category in Category::ALL {
                let len = self.queue(category).len();
                let slot = &mut cursors[category.index()];
                *slot = advance_cursor(*slot, pattern.count(category), len);
            }
        }

        let pattern = policy.resolve(self.state.line_index.wrapping_add(ahead));
        let players = Category::ALL
            .iter()
            .flat_map(|&category| {
                window(self.queue(category), cursors[category.index()], pattern.count(category))
            })
            .filter_map(|id| roster.get(id).cloned())
            .collect();

        Line { pattern, players }
    }

    /// Consume the current line. Returns the pattern that was played.
    pub fn advance(&mut self, policy: RatioPolicy) -> LinePattern {
        let pattern = self.current_pattern(policy);
        for category in Category::ALL {
            let len = self.queue(category).len();
            let slot = &mut self.state.cursors[category.index()];
            *slot = advance_cursor(*slot, pattern.count(category), len);
        }
        self.state.line_index += 1;
        self.state.point_number += 1;

        log::debug!(
            "Advanced to line {} (point {}), cursors {:?}",
            self.state.line_index,
            self.state.point_number,
            self.state.cursors
        );
        pattern
    }

    /// Replace the whole rotation state verbatim. Used by undo.
    pub fn rewind(&mut self, target: RotationState) {
        log::debug!("Rewound line {} -> {}", self.state.line_index, target.line_index);
        self.state = target;
    }

    /// Merge a roster mutation into the rotation sequences.
    pub fn reconcile(&mut self, roster: &RosterStore, change: &RosterChange) {
        match *change {
            RosterChange::Added { id, category } => self.insert_at_cursor(id, category),
            RosterChange::Removed { id, category } => self.excise(id, category),
            RosterChange::Reordered { category } => {
                let cursor = self.cursor(category);
                let queue = roster.ids_by_category(category);
                self.state.cursors[category.index()] = normalize(cursor, queue.len());
                self.queues[category.index()] = queue;
                log::debug!("Reconciled reorder of {} at cursor {}", category, self.cursor(category));
            }
        }

        let consistent = self.is_consistent_with(roster);
        debug_assert!(consistent, "rotation sequences diverged from roster after {:?}", change);
        if !consistent {
            log::error!("Rotation sequences diverged from roster after {:?}", change);
            self.resync(roster);
        }
    }

    /// Same membership per category as the roster, order aside.
    pub fn is_consistent_with(&self, roster: &RosterStore) -> bool {
        Category::ALL.iter().all(|&category| {
            let mut queue = self.queue(category).to_vec();
            let mut members = roster.ids_by_category(category);
            queue.sort();
            members.sort();
            queue == members
        })
    }

    fn insert_at_cursor(&mut self, id: PlayerId, category: Category) {
        if self.queue(category).contains(&id) {
            return;
        }
        let cursor = self.cursor(category);
        self.queues[category.index()].insert(cursor, id);
        self.state.cursors[category.index()] = cursor;
        log::debug!("Inserted {} into {} rotation at {}", id, category, cursor);
    }

    fn excise(&mut self, id: PlayerId, category: Category) {
        let Some(idx) = self.queue(category).iter().position(|q| *q == id) else {
            return;
        };
        let mut cursor = self.cursor(category);
        self.queues[category.index()].remove(idx);
        if idx < cursor {
            cursor -= 1;
        }
        self.state.cursors[category.index()] = normalize(cursor, self.queue(category).len());
        log::debug!("Removed {} from {} rotation, cursor {}", id, category, self.cursor(category));
    }

    /// Drop unknown ids and append missing members in roster order.
    fn resync(&mut self, roster: &RosterStore) {
        for category in Category::ALL {
            let members = roster.ids_by_category(category);
            let queue = &mut self.queues[category.index()];
            queue.retain(|id| members.contains(id));
            for id in members {
                if !queue.contains(&id) {
                    queue.push(id);
                }
            }
            let len = queue.len();
            let slot = &mut self.state.cursors[category.index()];
            *slot = normalize(*slot, len);
        }
    }
}
