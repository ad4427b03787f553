use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable player identity, minted once at creation and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for PlayerId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// The two gender categories a ratio policy balances across.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Open / male-matching players (category A, listed first on a line)
    #[serde(rename = "O")]
    Open,
    /// Women / female-matching players (category B)
    #[serde(rename = "W")]
    Women,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Open, Category::Women];

    /// Slot in per-category arrays.
    pub fn index(self) -> usize {
        match self {
            Category::Open => 0,
            Category::Women => 1,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Category::Open => "O",
            Category::Women => "W",
        }
    }

    pub fn from_code(code: &str) -> Option<Category> {
        match code.trim().to_ascii_uppercase().as_str() {
            "O" | "OPEN" | "A" => Some(Category::Open),
            "W" | "WOMEN" | "B" => Some(Category::Women),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub category: Category,
    /// Display number, 1..N by position within the category. Derived, not authoritative.
    pub number: u16,
}

impl Player {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self { id: PlayerId::new(), name: name.into(), category, number: 0 }
    }

    /// e.g. "W3 Jen"
    pub fn label(&self) -> String {
        format!("{}{} {}", self.category.code(), self.number, self.name)
    }
}
