//! Per-column "add card" form state.
//!
//! Drafts hold raw form text exactly as typed; nothing is parsed until
//! [`Draft::validate`] runs at submit time.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use crate::card::{NewCard, Priority, Status};
use crate::error::ValidationError;

/// Editable field of a [`Draft`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Description,
    Priority,
    Status,
}

/// Unsaved form input for a new card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
}

impl Draft {
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::Description => self.description = value,
            DraftField::Priority => self.priority = value,
            DraftField::Status => self.status = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Description => &self.description,
            DraftField::Priority => &self.priority,
            DraftField::Status => &self.status,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Turn the draft into a create payload.
    ///
    /// An empty status falls back to `column`, the status of the column whose
    /// form was submitted.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for a blank title, or for a priority or
    /// status outside the known values.
    pub fn validate(&self, column: Status) -> Result<NewCard, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let priority: Priority = self.priority.parse()?;
        let status = if self.status.trim().is_empty() {
            column
        } else {
            self.status.parse()?
        };
        Ok(NewCard {
            title: title.to_owned(),
            description: self.description.trim().to_owned(),
            priority,
            status,
        })
    }
}
