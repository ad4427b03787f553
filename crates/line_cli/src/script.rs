//! Scripted game steps
//!
//! Scripts name players instead of ids, since ids are minted at load time:
//!
//! ```yaml
//! - { step: score, team: home }
//! - { step: add, name: Nathalie, category: W }
//! - { step: remove, name: Evan }
//! - { step: reorder, category: O, names: [Sam, Randy, Nathan] }
//! - { step: undo }
//! ```

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use line_core::{Category, Command, Game, PlayerId, RatioPolicy, TeamSide};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Score { team: TeamSide },
    Decrement { team: TeamSide },
    Undo,
    Reset,
    Add { name: String, category: Category },
    Remove { name: String },
    Rename { name: String, to: String },
    Reorder { category: Category, names: Vec<String> },
    Policy { policy: RatioPolicy },
}

pub fn parse_script(yaml: &str) -> Result<Vec<Step>> {
    serde_yaml::from_str(yaml).context("invalid script")
}

pub fn load_script(path: &Path) -> Result<Vec<Step>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))?;
    parse_script(&text)
}

/// Resolve player names against the live roster.
pub fn to_command(game: &Game, step: &Step) -> Result<Command> {
    Ok(match step {
        Step::Score { team } => Command::Score { team: *team },
        Step::Decrement { team } => Command::Decrement { team: *team },
        Step::Undo => Command::Undo,
        Step::Reset => Command::Reset,
        Step::Add { name, category } => {
            Command::AddPlayer { name: name.clone(), category: *category }
        }
        Step::Remove { name } => Command::RemovePlayer { id: find(game, name)? },
        Step::Rename { name, to } => Command::RenamePlayer { id: find(game, name)?, name: to.clone() },
        Step::Reorder { category, names } => Command::Reorder {
            category: *category,
            order: names.iter().map(|n| find(game, n)).collect::<Result<Vec<_>>>()?,
        },
        Step::Policy { policy } => Command::SetRatioPolicy { policy: *policy },
    })
}

/// First player with this display name, in roster order.
fn find(game: &Game, name: &str) -> Result<PlayerId> {
    let mut matches = game.roster().iter().filter(|p| p.name == name);
    let player = matches.next().ok_or_else(|| anyhow!("no player named {:?}", name))?;
    if matches.next().is_some() {
        bail!("player name {:?} is ambiguous", name);
    }
    Ok(player.id)
}
