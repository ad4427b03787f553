//! Game aggregate
//!
//! Owns the roster, the rotation engine, the undo history and the score.
//! Every mutation runs to completion before returning, and every roster edit
//! is reconciled into rotation in the same call, so line queries always see
//! a consistent state. Scoring transitions live in `score_sync`.

use crate::config::{DecrementPolicy, GameConfig};
use crate::error::Result;
use crate::history::HistoryStack;
use crate::models::{Category, Player, PlayerId, Score, TeamSide};
use crate::pattern::{LinePattern, RatioPolicy};
use crate::roster::RosterStore;
use crate::rotation::{Line, RotationEngine, RotationState};

#[derive(Debug, Clone)]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) roster: RosterStore,
    pub(crate) engine: RotationEngine,
    pub(crate) history: HistoryStack,
    pub(crate) score: Score,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let roster = RosterStore::new(config.roster.clone());
        let engine = RotationEngine::new(&roster);
        log::info!(
            "New game {} vs {}: {} open / {} women, policy {}",
            config.home_name,
            config.away_name,
            roster.players_by_category(Category::Open).len(),
            roster.players_by_category(Category::Women).len(),
            config.ratio_policy
        );
        Ok(Self { config, roster, engine, history: HistoryStack::new(), score: Score::default() })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn roster(&self) -> &RosterStore {
        &self.roster
    }

    pub fn engine(&self) -> &RotationEngine {
        &self.engine
    }

    pub fn rotation_state(&self) -> &RotationState {
        self.engine.state()
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn team_name(&self, side: TeamSide) -> &str {
        match side {
            TeamSide::Home => &self.config.home_name,
            TeamSide::Away => &self.config.away_name,
        }
    }

    pub fn ratio_policy(&self) -> RatioPolicy {
        self.config.ratio_policy
    }

    pub fn decrement_policy(&self) -> DecrementPolicy {
        self.config.decrement_policy
    }

    /// Takes effect from the current line on; rotation state is kept.
    pub fn set_ratio_policy(&mut self, policy: RatioPolicy) {
        if policy != self.config.ratio_policy {
            log::info!("Ratio policy {} -> {}", self.config.ratio_policy, policy);
            self.config.ratio_policy = policy;
        }
    }

    pub fn current_pattern(&self) -> LinePattern {
        self.engine.current_pattern(self.config.ratio_policy)
    }

    pub fn current_line(&self) -> Line {
        self.engine.current_line(&self.roster, self.config.ratio_policy)
    }

    pub fn next_line(&self) -> Line {
        self.engine.next_line(&self.roster, self.config.ratio_policy)
    }

    pub fn preview(&self, ahead: u32) -> Line {
        self.engine.preview(&self.roster, self.config.ratio_policy, ahead)
    }

    /// Players of `category` in the order they will next be called.
    pub fn upcoming(&self, category: Category) -> Vec<&Player> {
        self.engine.upcoming(category).into_iter().filter_map(|id| self.roster.get(id)).collect()
    }

    // ========================
    // Roster editing
    // ========================

    pub fn add_player(&mut self, name: &str, category: Category) -> Result<Player> {
        let (player, change) = self.roster.add_player(name, category)?;
        self.engine.reconcile(&self.roster, &change);
        Ok(player)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player> {
        let (player, change) = self.roster.remove_player(id)?;
        self.engine.reconcile(&self.roster, &change);
        Ok(player)
    }

    pub fn rename_player(&mut self, id: PlayerId, name: &str) -> Result<Player> {
        self.roster.rename_player(id, name).cloned()
    }

    pub fn reorder(&mut self, category: Category, new_order: &[PlayerId]) -> Result<()> {
        let change = self.roster.reorder(category, new_order)?;
        self.engine.reconcile(&self.roster, &change);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SeedPlayer;

    fn game() -> Game {
        let roster = vec![
            SeedPlayer::new("O1", Category::Open),
            SeedPlayer::new("O2", Category::Open),
            SeedPlayer::new("O3", Category::Open),
            SeedPlayer::new("O4", Category::Open),
            SeedPlayer::new("O5", Category::Open),
            SeedPlayer::new("W1", Category::Women),
            SeedPlayer::new("W2", Category::Women),
            SeedPlayer::new("W3", Category::Women),
            SeedPlayer::new("W4", Category::Women),
        ];
        Game::new(GameConfig::default().with_roster(roster)).unwrap()
    }

    #[test]
    fn test_new_game_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.away_name.clear();
        assert!(Game::new(config).is_err());
    }

    #[test]
    fn test_initial_lines() {
        let game = game();
        assert_eq!(game.current_line().names(), ["O1", "O2", "O3", "O4", "W1", "W2", "W3"]);
        assert_eq!(game.next_line().names(), ["O5", "O1", "O2", "W4", "W1", "W2", "W3"]);
        assert_eq!(game.rotation_state(), &RotationState::initial());
    }

    #[test]
    fn test_policy_switch_keeps_rotation() {
        let mut game = game();
        game.set_ratio_policy(RatioPolicy::ThreeFour);
        assert_eq!(game.current_pattern(), LinePattern::B);
        assert_eq!(game.current_line().names(), ["O1", "O2", "O3", "W1", "W2", "W3", "W4"]);
        assert_eq!(game.rotation_state(), &RotationState::initial());
    }

    #[test]
    fn test_roster_edits_reconcile() {
        let mut game = game();
        let added = game.add_player("W5", Category::Women).unwrap();
        assert_eq!(added.number, 5);
        assert!(game.engine().is_consistent_with(game.roster()));
        assert_eq!(game.current_line().names()[4], "W5");

        let o1 = game.roster().players_by_category(Category::Open)[0].id;
        game.remove_player(o1).unwrap();
        assert!(game.engine().is_consistent_with(game.roster()));
        assert_eq!(game.current_line().names()[..4], ["O2", "O3", "O4", "O5"]);

        let renamed = game.rename_player(added.id, "Wendy").unwrap();
        assert_eq!(renamed.name, "Wendy");
        assert_eq!(game.current_line().names()[4], "Wendy");
    }

    #[test]
    fn test_rejected_edit_leaves_state() {
        let mut game = game();
        let before = game.current_line();
        assert!(game.reorder(Category::Open, &[]).is_err());
        assert!(game.remove_player(PlayerId::new()).is_err());
        assert_eq!(game.current_line(), before);
    }

    #[test]
    fn test_upcoming_order() {
        let game = game();
        let upcoming = game.upcoming(Category::Women);
        let names: Vec<&str> = upcoming.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["W1", "W2", "W3", "W4"]);
    }
}
