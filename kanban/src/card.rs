//! Card wire model.
//!
//! Field names follow the REST schema (`id`, `description`, `status`). The
//! legacy store spelled them `_id`, `desc` and `state`; those are accepted as
//! aliases on input so older payloads still decode.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Column a card belongs to. The only source of column membership.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// Fixed left-to-right column order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Wire slug, e.g. `"inprogress"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inprogress",
            Self::Done => "done",
        }
    }

    /// Human-readable column heading.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "todo" => Ok(Self::Todo),
            "inprogress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(ValidationError::InvalidStatus(other.to_owned())),
        }
    }
}

/// Card priority.
///
/// Serialized as a lowercase name. Decoding also accepts the legacy numeric
/// form, where `0`, `1` and `2` are low, medium and high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "PriorityRepr")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Either wire form of [`Priority`].
#[derive(Deserialize)]
#[serde(untagged)]
enum PriorityRepr {
    Name(String),
    Index(u64),
}

impl TryFrom<PriorityRepr> for Priority {
    type Error = ValidationError;

    fn try_from(repr: PriorityRepr) -> Result<Self, Self::Error> {
        match repr {
            PriorityRepr::Name(name) => name.to_ascii_lowercase().parse(),
            PriorityRepr::Index(n) => usize::try_from(n)
                .ok()
                .and_then(|i| Self::ALL.get(i).copied())
                .ok_or_else(|| ValidationError::InvalidPriority(n.to_string())),
        }
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ValidationError::InvalidPriority(other.to_owned())),
        }
    }
}

/// A task card as stored by the remote card store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Store-assigned identifier.
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, alias = "desc")]
    pub description: String,
    pub priority: Priority,
    #[serde(alias = "state")]
    pub status: Status,
}

/// Validated create payload for `POST /api/cards`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCard {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: Status,
}

impl NewCard {
    /// Attach a store-assigned id, producing the card the store would return.
    #[must_use]
    pub fn into_card(self, id: impl Into<String>) -> Card {
        Card {
            id: id.into(),
            title: self.title,
            description: self.description,
            priority: self.priority,
            status: self.status,
        }
    }
}
