//! Canonical roster: who exists, in which category, in what display order.
//!
//! The roster owns identity and display numbering. It is never touched by
//! rotation; every mutation reports a [`RosterChange`] that the caller must
//! hand to `RotationEngine::reconcile` before the next line query.

use std::collections::HashSet;

use crate::config::SeedPlayer;
use crate::error::{LineError, Result};
use crate::models::{Category, Player, PlayerId};

/// What a roster mutation did, for the rotation engine to merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterChange {
    Added { id: PlayerId, category: Category },
    Removed { id: PlayerId, category: Category },
    Reordered { category: Category },
}

#[derive(Debug, Clone)]
pub struct RosterStore {
    seed: Vec<SeedPlayer>,
    lists: [Vec<Player>; 2],
}

impl RosterStore {
    /// Build from a seed configuration. The seed is kept and reused by [`reset`](Self::reset).
    pub fn new(seed: Vec<SeedPlayer>) -> Self {
        let mut store = Self { seed, lists: [Vec::new(), Vec::new()] };
        store.reset();
        store
    }

    /// Drop every edit and rebuild from the seed, minting fresh identities.
    pub fn reset(&mut self) {
        self.lists = [Vec::new(), Vec::new()];
        for seed in &self.seed {
            self.lists[seed.category.index()].push(Player::new(seed.name.trim(), seed.category));
        }
        for category in Category::ALL {
            self.renumber(category);
        }
    }

    pub fn seed(&self) -> &[SeedPlayer] {
        &self.seed
    }

    pub fn players_by_category(&self, category: Category) -> &[Player] {
        &self.lists[category.index()]
    }

    pub fn ids_by_category(&self, category: Category) -> Vec<PlayerId> {
        self.lists[category.index()].iter().map(|p| p.id).collect()
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.get(id).is_some()
    }

    /// All players, open category first.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.lists.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn add_player(&mut self, name: &str, category: Category) -> Result<(Player, RosterChange)> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LineError::EmptyName);
        }

        let player = Player::new(name, category);
        let id = player.id;
        self.lists[category.index()].push(player);
        self.renumber(category);

        log::info!("Added {} to {} roster", name, category);
        let player = self.get(id).cloned().ok_or(LineError::PlayerNotFound(id))?;
        Ok((player, RosterChange::Added { id, category }))
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<(Player, RosterChange)> {
        for category in Category::ALL {
            let list = &mut self.lists[category.index()];
            if let Some(idx) = list.iter().position(|p| p.id == id) {
                let removed = list.remove(idx);
                self.renumber(category);
                log::info!("Removed {} from {} roster", removed.name, category);
                return Ok((removed, RosterChange::Removed { id, category }));
            }
        }

        log::warn!("Remove requested for unknown player {}", id);
        Err(LineError::PlayerNotFound(id))
    }

    /// Display names are mutable; identity and order are not affected.
    pub fn rename_player(&mut self, id: PlayerId, name: &str) -> Result<&Player> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LineError::EmptyName);
        }
        let player = self
            .lists
            .iter_mut()
            .flatten()
            .find(|p| p.id == id)
            .ok_or(LineError::PlayerNotFound(id))?;
        player.name = name.to_string();
        Ok(player)
    }

    /// Replace a category's order with a permutation of its current members.
    pub fn reorder(&mut self, category: Category, new_order: &[PlayerId]) -> Result<RosterChange> {
        let list = &self.lists[category.index()];

        if new_order.len() != list.len() {
            return Err(self.reject(
                category,
                format!("expected {} players, got {}", list.len(), new_order.len()),
            ));
        }

        let mut seen = HashSet::with_capacity(new_order.len());
        for id in new_order {
            if !seen.insert(*id) {
                return Err(self.reject(category, format!("duplicate player {}", id)));
            }
            if !list.iter().any(|p| p.id == *id) {
                return Err(self.reject(category, format!("{} is not a member", id)));
            }
        }

        let mut reordered = Vec::with_capacity(list.len());
        for id in new_order {
            if let Some(player) = list.iter().find(|p| p.id == *id) {
                reordered.push(player.clone());
            }
        }
        self.lists[category.index()] = reordered;
        self.renumber(category);

        log::debug!("Reordered {} roster", category);
        Ok(RosterChange::Reordered { category })
    }

    fn reject(&self, category: Category, reason: String) -> LineError {
        log::warn!("Rejected reorder of {} roster: {}", category, reason);
        LineError::InvalidReorder { category, reason }
    }

    fn renumber(&mut self, category: Category) {
        for (idx, player) in self.lists[category.index()].iter_mut().enumerate() {
            player.number = idx as u16 + 1;
        }
    }
}
