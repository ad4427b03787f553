//! Board view for display layers
//!
//! A read-only, serializable snapshot of everything a scoreboard renders:
//! teams and scores, point number, the current and next line, and the order
//! in which each category will be called.

use serde::{Deserialize, Serialize};

use super::SCHEMA_VERSION;
use crate::error::Result;
use crate::game::Game;
use crate::models::{Category, Player, PlayerId, TeamSide};
use crate::pattern::{LinePattern, RatioPolicy};
use crate::rotation::Line;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub name: String,
    pub category: Category,
    pub number: u16,
    pub label: String,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            category: player.category,
            number: player.number,
            label: player.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineView {
    pub pattern: LinePattern,
    pub breakdown: LinePattern,
    pub short: bool,
    pub players: Vec<PlayerView>,
}

impl From<&Line> for LineView {
    fn from(line: &Line) -> Self {
        Self {
            pattern: line.pattern,
            breakdown: line.breakdown(),
            short: line.is_short(),
            players: line.players.iter().map(PlayerView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamView {
    pub name: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub schema_version: u8,
    pub home: TeamView,
    pub away: TeamView,
    pub point_number: u32,
    pub line_index: u32,
    pub ratio_policy: RatioPolicy,
    pub pattern_label: String,
    pub current_line: LineView,
    pub next_line: LineView,
    pub upcoming_open: Vec<PlayerView>,
    pub upcoming_women: Vec<PlayerView>,
    pub history_depth: usize,
}

impl BoardView {
    pub fn from_game(game: &Game) -> Self {
        let team = |side| TeamView {
            name: game.team_name(side).to_string(),
            score: game.score().get(side),
        };
        let upcoming = |category| {
            game.upcoming(category).into_iter().map(PlayerView::from).collect::<Vec<_>>()
        };
        let state = game.rotation_state();

        Self {
            schema_version: SCHEMA_VERSION,
            home: team(TeamSide::Home),
            away: team(TeamSide::Away),
            point_number: state.point_number,
            line_index: state.line_index,
            ratio_policy: game.ratio_policy(),
            pattern_label: game.ratio_policy().label(state.line_index).to_string(),
            current_line: LineView::from(&game.current_line()),
            next_line: LineView::from(&game.next_line()),
            upcoming_open: upcoming(Category::Open),
            upcoming_women: upcoming(Category::Women),
            history_depth: game.history().len(),
        }
    }
}

pub fn board_json(game: &Game) -> Result<String> {
    Ok(serde_json::to_string(&BoardView::from_game(game))?)
}
