pub mod player;
pub mod team;

pub use player::{Category, Player, PlayerId};
pub use team::{Score, TeamSide};
