//! Ratio policies and the per-line gender composition they require.
//!
//! A line always fields [`LINE_SIZE`] players. The policy decides how many of
//! them come from each [`Category`]:
//!
//! - `4-3` / `3-4`: fixed composition on every line.
//! - `ABBA`: period-4 cycle A, B, B, A where A = 4 open / 3 women and
//!   B = 3 open / 4 women, so every four consecutive lines use both
//!   categories 14 times in aggregate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LineError;
use crate::models::Category;

pub const LINE_SIZE: u8 = 7;

/// Required per-category composition of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinePattern {
    pub open: u8,
    pub women: u8,
}

impl LinePattern {
    /// Pattern "A": open-majority.
    pub const A: LinePattern = LinePattern { open: 4, women: 3 };
    /// Pattern "B": women-majority.
    pub const B: LinePattern = LinePattern { open: 3, women: 4 };

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Open => self.open as usize,
            Category::Women => self.women as usize,
        }
    }

    pub fn total(&self) -> usize {
        self.open as usize + self.women as usize
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioPolicy {
    #[default]
    #[serde(rename = "ABBA")]
    Abba,
    #[serde(rename = "4-3")]
    FourThree,
    #[serde(rename = "3-4")]
    ThreeFour,
}

impl RatioPolicy {
    pub fn code(&self) -> &'static str {
        match self {
            RatioPolicy::Abba => "ABBA",
            RatioPolicy::FourThree => "4-3",
            RatioPolicy::ThreeFour => "3-4",
        }
    }

    /// Composition for `line_index`. Total over all indices.
    pub fn resolve(&self, line_index: u32) -> LinePattern {
        match self {
            RatioPolicy::FourThree => LinePattern::A,
            RatioPolicy::ThreeFour => LinePattern::B,
            RatioPolicy::Abba => match line_index % 4 {
                0 | 3 => LinePattern::A,
                _ => LinePattern::B,
            },
        }
    }

    /// Short label shown next to the point number ("A"/"B" under ABBA).
    pub fn label(&self, line_index: u32) -> &'static str {
        match self {
            RatioPolicy::Abba if self.resolve(line_index) == LinePattern::A => "A",
            RatioPolicy::Abba => "B",
            other => other.code(),
        }
    }
}

impl fmt::Display for RatioPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for RatioPolicy {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ABBA" => Ok(RatioPolicy::Abba),
            "4-3" => Ok(RatioPolicy::FourThree),
            "3-4" => Ok(RatioPolicy::ThreeFour),
            other => Err(LineError::InvalidConfig(format!("unknown ratio policy: {}", other))),
        }
    }
}

/// Free-function form of [`RatioPolicy::resolve`].
pub fn resolve(line_index: u32, policy: RatioPolicy) -> LinePattern {
    policy.resolve(line_index)
}
