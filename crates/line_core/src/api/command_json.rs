//! JSON command API
//!
//! Control surfaces (score buttons, undo, roster editor, settings) send one
//! [`Command`] at a time and get the refreshed [`BoardView`] back.
//!
//! ```json
//! {"command": "score", "team": "home"}
//! {"command": "add_player", "name": "Nathalie", "category": "W"}
//! {"command": "reorder", "category": "O", "order": ["<uuid>", "<uuid>"]}
//! ```

use serde::{Deserialize, Serialize};

use super::board_json::BoardView;
use super::SCHEMA_VERSION;
use crate::error::{LineError, Result};
use crate::game::Game;
use crate::models::{Category, PlayerId, TeamSide};
use crate::pattern::RatioPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Score { team: TeamSide },
    Decrement { team: TeamSide },
    Undo,
    Reset,
    AddPlayer { name: String, category: Category },
    RemovePlayer { id: PlayerId },
    RenamePlayer { id: PlayerId, name: String },
    Reorder { category: Category, order: Vec<PlayerId> },
    SetRatioPolicy { policy: RatioPolicy },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl From<&LineError> for ApiError {
    fn from(err: &LineError) -> Self {
        Self { code: err.code().to_string(), message: err.to_string() }
    }
}

/// Envelope returned by [`apply_command_json`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: u8,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None, schema_version: SCHEMA_VERSION }
    }

    pub fn err(err: &LineError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError::from(err)),
            schema_version: SCHEMA_VERSION,
        }
    }
}

/// Apply one command. On error the game is unchanged.
pub fn apply_command(game: &mut Game, command: Command) -> Result<BoardView> {
    match command {
        Command::Score { team } => {
            game.on_score_increment(team);
        }
        Command::Decrement { team } => {
            game.on_score_decrement_direct(team);
        }
        Command::Undo => {
            game.on_undo()?;
        }
        Command::Reset => game.on_reset(),
        Command::AddPlayer { name, category } => {
            game.add_player(&name, category)?;
        }
        Command::RemovePlayer { id } => {
            game.remove_player(id)?;
        }
        Command::RenamePlayer { id, name } => {
            game.rename_player(id, &name)?;
        }
        Command::Reorder { category, order } => game.reorder(category, &order)?,
        Command::SetRatioPolicy { policy } => game.set_ratio_policy(policy),
    }
    Ok(BoardView::from_game(game))
}

/// String-in, string-out wrapper around [`apply_command`]. Never fails:
/// parse and domain errors come back inside the envelope.
pub fn apply_command_json(game: &mut Game, request: &str) -> String {
    let result = serde_json::from_str::<Command>(request)
        .map_err(LineError::from)
        .and_then(|command| apply_command(game, command));

    let response = match result {
        Ok(view) => ApiResponse::ok(view),
        Err(err) => {
            log::warn!("Command rejected: {}", err);
            ApiResponse::err(&err)
        }
    };

    serde_json::to_string(&response).unwrap_or_else(|e| {
        format!(
            r#"{{"success":false,"data":null,"error":{{"code":"PARSE_ERROR","message":"{}"}},"schema_version":{}}}"#,
            e, SCHEMA_VERSION
        )
    })
}
