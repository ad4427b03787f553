//! Score synchronization
//!
//! Scoring events are the only thing that moves rotation. Each increment
//! snapshots the rotation state, advances one line and bumps the score; undo
//! pops the snapshot and reverses both.
//!
//! ## Transitions
//! - increment(team): push(state, team), advance, score[team] += 1
//! - decrement(team): clamp at zero; rotation follows [`DecrementPolicy`]
//! - undo: pop, rewind, score[team] -= 1 (clamped); `NoHistory` when empty
//! - reset: seed roster, initial rotation, empty history, 0-0

use crate::config::DecrementPolicy;
use crate::error::{LineError, Result};
use crate::game::Game;
use crate::models::TeamSide;

impl Game {
    /// A point was scored by `team`. Returns the team's new score.
    pub fn on_score_increment(&mut self, team: TeamSide) -> u32 {
        self.history.push(*self.engine.state(), team);
        let played = self.engine.advance(self.config.ratio_policy);
        let score = self.score.increment(team);

        log::debug!(
            "{} scored ({}-{}), line played {}/{}",
            self.team_name(team),
            self.score.home,
            self.score.away,
            played.open,
            played.women
        );
        score
    }

    /// Operator lowered a score by hand. Returns the team's new score.
    pub fn on_score_decrement_direct(&mut self, team: TeamSide) -> u32 {
        if self.config.decrement_policy == DecrementPolicy::RewindIfLatest
            && self.history.peek().map(|e| e.scoring_team) == Some(team)
        {
            if let Ok(undone) = self.on_undo() {
                return self.score.get(undone);
            }
        }

        let score = self.score.decrement(team);
        log::debug!("{} score corrected to {}, rotation kept", self.team_name(team), score);
        score
    }

    /// Reverse the latest score increment. Returns the team whose point was undone.
    pub fn on_undo(&mut self) -> Result<TeamSide> {
        let Some(entry) = self.history.pop() else {
            log::warn!("Undo requested with no history");
            return Err(LineError::NoHistory);
        };

        self.engine.rewind(entry.state);
        self.score.decrement(entry.scoring_team);

        log::info!(
            "Undid point for {}, back to line {} ({}-{})",
            self.team_name(entry.scoring_team),
            entry.state.line_index,
            self.score.home,
            self.score.away
        );
        Ok(entry.scoring_team)
    }

    /// Back to the seed roster and a fresh rotation. The ratio policy in force is kept.
    pub fn on_reset(&mut self) {
        self.roster.reset();
        self.engine.reset(&self.roster);
        self.history.clear();
        self.score = Default::default();
        log::info!("Game reset to seed roster ({} players)", self.roster.len());
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{DecrementPolicy, GameConfig, SeedPlayer};
    use crate::error::LineError;
    use crate::game::Game;
    use crate::models::{Category, Score, TeamSide};
    use crate::rotation::RotationState;

    fn game_with(policy: DecrementPolicy) -> Game {
        let mut roster = Vec::new();
        for i in 1..=5 {
            roster.push(SeedPlayer::new(format!("A{}", i), Category::Open));
            roster.push(SeedPlayer::new(format!("B{}", i), Category::Women));
        }
        let mut config = GameConfig::default().with_roster(roster);
        config.decrement_policy = policy;
        Game::new(config).unwrap()
    }

    fn game() -> Game {
        game_with(DecrementPolicy::KeepRotation)
    }

    #[test]
    fn test_full_undo_sequence() {
        let mut game = game();
        assert_eq!(game.history().len(), 0);

        game.on_score_increment(TeamSide::Home);
        assert_eq!(game.score(), Score { home: 1, away: 0 });
        assert_eq!(game.rotation_state().line_index, 1);
        assert_eq!(game.history().len(), 1);

        game.on_score_increment(TeamSide::Away);
        assert_eq!(game.score(), Score { home: 1, away: 1 });
        assert_eq!(game.rotation_state().line_index, 2);
        assert_eq!(game.history().len(), 2);

        assert_eq!(game.on_undo().unwrap(), TeamSide::Away);
        assert_eq!(game.score(), Score { home: 1, away: 0 });
        assert_eq!(game.rotation_state().line_index, 1);
        assert_eq!(game.rotation_state().point_number, 2);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_undo_restores_lines() {
        let mut game = game();
        let before = game.current_line();
        let before_next = game.next_line();
        game.on_score_increment(TeamSide::Home);
        assert_eq!(game.current_line(), before_next);
        game.on_undo().unwrap();
        assert_eq!(game.current_line(), before);
        assert_eq!(game.rotation_state(), &RotationState::initial());
    }

    #[test]
    fn test_undo_without_history() {
        let mut game = game();
        assert!(matches!(game.on_undo(), Err(LineError::NoHistory)));
        assert_eq!(game.score(), Score::default());
        assert_eq!(game.rotation_state(), &RotationState::initial());
    }

    #[test]
    fn test_direct_decrement_keeps_rotation() {
        let mut game = game();
        game.on_score_increment(TeamSide::Home);
        let state = *game.rotation_state();

        assert_eq!(game.on_score_decrement_direct(TeamSide::Home), 0);
        assert_eq!(game.on_score_decrement_direct(TeamSide::Home), 0);
        assert_eq!(game.rotation_state(), &state);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_rewind_if_latest_decrement() {
        let mut game = game_with(DecrementPolicy::RewindIfLatest);
        game.on_score_increment(TeamSide::Home);
        game.on_score_increment(TeamSide::Away);

        // Latest point is Away's: home decrement only touches the score
        assert_eq!(game.on_score_decrement_direct(TeamSide::Home), 0);
        assert_eq!(game.rotation_state().line_index, 2);
        assert_eq!(game.history().len(), 2);

        assert_eq!(game.on_score_decrement_direct(TeamSide::Away), 0);
        assert_eq!(game.rotation_state().line_index, 1);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_reset() {
        let mut game = game();
        game.on_score_increment(TeamSide::Home);
        game.on_score_increment(TeamSide::Home);
        game.add_player("A6", Category::Open).unwrap();

        game.on_reset();
        assert_eq!(game.score(), Score::default());
        assert!(game.history().is_empty());
        assert_eq!(game.rotation_state(), &RotationState::initial());
        assert_eq!(game.roster().len(), 10);
        assert_eq!(game.current_line().names(), ["A1", "A2", "A3", "A4", "B1", "B2", "B3"]);
        assert!(game.engine().is_consistent_with(game.roster()));
    }
}
