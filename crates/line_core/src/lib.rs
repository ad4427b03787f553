//! # line_core - Gender-Ratio Line Rotation Engine
//!
//! Assigns players to per-point lines for a mixed team sport, rotating the
//! open and women pools fairly across a game.
//!
//! ## Features
//! - ABBA, 4-3 and 3-4 ratio policies
//! - Offset-based rotation: undo is a value copy, any future line is a pure preview
//! - Mid-game roster edits (add / remove / reorder / rename) merged without
//!   disturbing who has already played this cycle
//! - Score-driven advance with an undo history
//! - JSON API for non-Rust display layers
//!
//! ```
//! use line_core::{Category, Game, GameConfig, SeedPlayer, TeamSide};
//!
//! let roster = (1..=5)
//!     .flat_map(|i| {
//!         [SeedPlayer::new(format!("O{i}"), Category::Open), SeedPlayer::new(format!("W{i}"), Category::Women)]
//!     })
//!     .collect();
//! let mut game = Game::new(GameConfig::default().with_roster(roster)).unwrap();
//!
//! assert_eq!(game.current_line().names(), ["O1", "O2", "O3", "O4", "W1", "W2", "W3"]);
//! game.on_score_increment(TeamSide::Home);
//! assert_eq!(game.current_line().names(), ["O5", "O1", "O2", "W4", "W5", "W1", "W2"]);
//! game.on_undo().unwrap();
//! assert_eq!(game.rotation_state().line_index, 0);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod models;
pub mod pattern;
pub mod roster;
pub mod rotation;
pub mod score_sync;

pub use api::{apply_command, apply_command_json, board_json, BoardView, Command};
pub use config::{DecrementPolicy, GameConfig, SeedPlayer};
pub use error::{LineError, Result};
pub use game::Game;
pub use history::{HistoryEntry, HistoryStack};
pub use models::{Category, Player, PlayerId, Score, TeamSide};
pub use pattern::{resolve, LinePattern, RatioPolicy, LINE_SIZE};
pub use roster::{RosterChange, RosterStore};
pub use rotation::{Line, RotationEngine, RotationState};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
