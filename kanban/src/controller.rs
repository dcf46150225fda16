//! Board operations and their reconciliation with the remote store.
//!
//! DESIGN
//! ======
//! Every operation awaits the store first and then applies its result as one
//! closure through [`StateCell::update`]. The closure runs against whatever
//! the state is when the response lands, never against a copy taken before
//! the await, so overlapping operations compose instead of overwriting each
//! other.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged, pushed to the state's notice list, and returned.
//! State is left exactly as it was before the failed operation, except for a
//! persisted move, which is rolled back.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::CardApi;
use crate::board::{BoardState, NoticeLevel};
use crate::card::{Card, Status};
use crate::draft::DraftField;
use crate::error::BoardError;

/// Owner of the single [`BoardState`] value.
///
/// Both methods return `None` when the state is no longer available (e.g. a
/// disposed UI signal), in which case the operation's result is dropped.
pub trait StateCell {
    fn read<R>(&self, f: impl FnOnce(&BoardState) -> R) -> Option<R>;
    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> Option<R>;
}

impl StateCell for RefCell<BoardState> {
    fn read<R>(&self, f: impl FnOnce(&BoardState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }

    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T: StateCell> StateCell for Rc<T> {
    fn read<R>(&self, f: impl FnOnce(&BoardState) -> R) -> Option<R> {
        (**self).read(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> Option<R> {
        (**self).update(f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerOptions {
    /// Send `PATCH /api/cards/{id}` after a cross-column move.
    pub persist_moves: bool,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self { persist_moves: true }
    }
}

/// Keeps a local board consistent with the remote card store.
#[derive(Clone, Debug)]
pub struct BoardController<A, S> {
    api: A,
    state: S,
    options: ControllerOptions,
}

impl<A: CardApi, S: StateCell> BoardController<A, S> {
    pub fn new(api: A, state: S) -> Self {
        Self { api, state, options: ControllerOptions::default() }
    }

    #[must_use]
    pub fn with_options(mut self, options: ControllerOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[must_use]
    pub fn options(&self) -> ControllerOptions {
        self.options
    }

    /// Fetch the whole collection and replace the local card set.
    ///
    /// Overlapping loads each replace the set as they land; `loading` stays
    /// set until the last one settles.
    ///
    /// # Errors
    ///
    /// Returns the store error; the previous card set is kept.
    pub async fn load(&self) -> Result<usize, BoardError> {
        self.state.update(BoardState::begin_load);
        match self.api.list_cards().await {
            Ok(cards) => {
                let count = cards.len();
                self.state.update(|s| {
                    s.finish_load();
                    s.replace_cards(cards);
                });
                tracing::debug!(count, "cards loaded");
                Ok(count)
            }
            Err(err) => {
                self.state.update(BoardState::finish_load);
                Err(self.report("load cards", err))
            }
        }
    }

    /// Submit the draft of `column`.
    ///
    /// On success the server card is appended. The column's draft is cleared
    /// and its popover closed only if the draft was not edited while the
    /// request was pending. On any failure the draft is kept.
    ///
    /// Returns `Ok(None)` without a request while an earlier submit for the
    /// same column is still pending.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] without contacting the store when
    /// the draft is invalid, otherwise the store error.
    pub async fn create(&self, column: Status) -> Result<Option<Card>, BoardError> {
        let Some(draft) = self
            .state
            .read(|s| (!s.submitting[column]).then(|| s.drafts[column].clone()))
            .flatten()
        else {
            tracing::debug!(%column, "submit ignored, create already pending");
            return Ok(None);
        };
        let new_card = draft
            .validate(column)
            .map_err(|e| self.report("add card", e.into()))?;

        self.state.update(|s| s.submitting[column] = true);
        let created = self.api.create_card(&new_card).await;
        self.state.update(|s| s.submitting[column] = false);
        let card = created.map_err(|e| self.report("add card", e))?;

        self.state.update(|s| {
            s.push_card(card.clone());
            if s.drafts[column] == draft {
                s.clear_draft(column);
                s.close_popover(column);
            }
        });
        tracing::debug!(id = %card.id, status = %card.status, "card created");
        Ok(Some(card))
    }

    /// Delete a card remotely, then locally once the store confirms.
    ///
    /// Returns whether a local card was removed; an id the board does not
    /// hold is a no-op even when the store reports success.
    ///
    /// # Errors
    ///
    /// Returns the store error; nothing is removed.
    pub async fn delete(&self, id: &str) -> Result<bool, BoardError> {
        self.api
            .delete_card(id)
            .await
            .map_err(|e| self.report("delete card", e))?;

        let removed = self
            .state
            .update(|s| s.remove_card(id).is_some())
            .unwrap_or(false);
        tracing::debug!(id, removed, "card deleted");
        Ok(removed)
    }

    /// Move card `(id, from)` into `to` at `position` within the target column.
    ///
    /// The local move is applied immediately. Returns `Ok(false)` without a
    /// request when no card with that id currently has status `from`.
    ///
    /// # Errors
    ///
    /// With `persist_moves`, returns the store error after rolling the card
    /// back to its former column position (if it has not moved since).
    pub async fn move_card(
        &self,
        id: &str,
        from: Status,
        to: Status,
        position: Option<usize>,
    ) -> Result<bool, BoardError> {
        let Some(former) = self
            .state
            .update(|s| s.move_card(id, from, to, position))
            .flatten()
        else {
            tracing::debug!(id, %from, %to, "stale move ignored");
            return Ok(false);
        };

        if !self.options.persist_moves || from == to {
            return Ok(true);
        }

        if let Err(err) = self.api.update_status(id, to).await {
            self.state.update(|s| s.move_card(id, to, from, Some(former)));
            return Err(self.report("move card", err));
        }
        tracing::debug!(id, %from, %to, "card moved");
        Ok(true)
    }

    pub fn edit_draft(&self, column: Status, field: DraftField, value: impl Into<String>) {
        self.state.update(|s| s.set_draft_field(column, field, value));
    }

    pub fn toggle_popover(&self, column: Status) {
        self.state.update(|s| s.toggle_popover(column));
    }

    pub fn dismiss_notice(&self, id: u64) {
        self.state.update(|s| s.dismiss_notice(id));
    }

    fn report(&self, action: &'static str, err: BoardError) -> BoardError {
        tracing::warn!(action, kind = err.kind(), error = %err, "board operation failed");
        self.state
            .update(|s| s.push_notice(NoticeLevel::Error, format!("Could not {action}: {err}")));
        err
    }
}
