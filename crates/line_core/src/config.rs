//! Game configuration
//!
//! The seed roster, team names and policies a game starts from. A reset
//! restores exactly this configuration.
//!
//! ```yaml
//! home_name: Disco Fever
//! away_name: Team 2
//! ratio_policy: ABBA
//! decrement_policy: keep_rotation
//! roster:
//!   - { name: Rhezie, category: W }
//!   - { name: Randy, category: O }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{LineError, Result};
use crate::models::Category;
use crate::pattern::RatioPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPlayer {
    pub name: String,
    pub category: Category,
}

impl SeedPlayer {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self { name: name.into(), category }
    }
}

/// What a direct (non-undo) score decrement does to rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecrementPolicy {
    /// Clamp the score only; rotation and history are untouched.
    #[default]
    KeepRotation,
    /// Behave like undo when the latest history entry is this team's point,
    /// otherwise clamp the score only.
    RewindIfLatest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub home_name: String,
    pub away_name: String,
    pub ratio_policy: RatioPolicy,
    pub decrement_policy: DecrementPolicy,
    pub roster: Vec<SeedPlayer>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            home_name: "Home".to_string(),
            away_name: "Away".to_string(),
            ratio_policy: RatioPolicy::default(),
            decrement_policy: DecrementPolicy::default(),
            roster: Vec::new(),
        }
    }
}

impl GameConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let config: GameConfig = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_roster(mut self, roster: Vec<SeedPlayer>) -> Self {
        self.roster = roster;
        self
    }

    pub fn with_policy(mut self, policy: RatioPolicy) -> Self {
        self.ratio_policy = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.home_name.trim().is_empty() || self.away_name.trim().is_empty() {
            return Err(LineError::InvalidConfig("team names must not be empty".to_string()));
        }
        if let Some(idx) = self.roster.iter().position(|p| p.name.trim().is_empty()) {
            return Err(LineError::InvalidConfig(format!("roster entry {} has no name", idx)));
        }
        Ok(())
    }

    pub fn count(&self, category: Category) -> usize {
        self.roster.iter().filter(|p| p.category == category).count()
    }
}
