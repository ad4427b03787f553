//! JSON API for display and control layers
//!
//! Lets non-Rust front ends render the board and drive the game with plain
//! JSON strings.

pub mod board_json;
pub mod command_json;

pub use board_json::{board_json, BoardView, LineView, PlayerView, TeamView};
pub use command_json::{apply_command, apply_command_json, ApiError, ApiResponse, Command};

/// Bumped whenever a view or command field changes shape.
pub const SCHEMA_VERSION: u8 = 1;
