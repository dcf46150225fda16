//! Board state: the card set plus per-column form and popover state.
//!
//! DESIGN
//! ======
//! Cards live in one ordered `Vec`; columns are filtered views over it keyed
//! by [`Status`]. A card therefore sits in exactly one column at all times and
//! the three views always partition the set. Column-scoped UI state uses
//! [`Columns`], indexed by status rather than by position.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::ops::{Index, IndexMut};

use crate::card::{Card, Status};
use crate::draft::{Draft, DraftField};

/// Maximum number of notices kept for display.
pub const NOTICE_CAP: usize = 5;

/// One value per column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Columns<T> {
    todo: T,
    in_progress: T,
    done: T,
}

impl<T> Columns<T> {
    pub fn from_fn(mut f: impl FnMut(Status) -> T) -> Self {
        Self {
            todo: f(Status::Todo),
            in_progress: f(Status::InProgress),
            done: f(Status::Done),
        }
    }

    /// Iterate in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Status, &T)> {
        Status::ALL.into_iter().map(move |status| (status, &self[status]))
    }
}

impl<T> Index<Status> for Columns<T> {
    type Output = T;

    fn index(&self, status: Status) -> &T {
        match status {
            Status::Todo => &self.todo,
            Status::InProgress => &self.in_progress,
            Status::Done => &self.done,
        }
    }
}

impl<T> IndexMut<Status> for Columns<T> {
    fn index_mut(&mut self, status: Status) -> &mut T {
        match status {
            Status::Todo => &mut self.todo,
            Status::InProgress => &mut self.in_progress,
            Status::Done => &mut self.done,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// User-visible toast message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Authoritative local copy of the board.
#[derive(Clone, Debug, Default)]
pub struct BoardState {
    cards: Vec<Card>,
    pub drafts: Columns<Draft>,
    pub popovers: Columns<bool>,
    /// A create request for the column's draft is in flight.
    pub submitting: Columns<bool>,
    pub notices: Vec<Notice>,
    /// At least one load request is in flight.
    pub loading: bool,
    /// At least one load has succeeded.
    pub loaded: bool,
    pending_loads: usize,
    next_notice_id: u64,
}

impl BoardState {
    #[must_use]
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self { cards, ..Self::default() }
    }

    /// Full card set in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Cards in one column, in board order.
    pub fn column(&self, status: Status) -> impl Iterator<Item = &Card> {
        self.cards.iter().filter(move |c| c.status == status)
    }

    /// Owned snapshot of one column, for rendering.
    #[must_use]
    pub fn column_cards(&self, status: Status) -> Vec<Card> {
        self.column(status).cloned().collect()
    }

    #[must_use]
    pub fn column_len(&self, status: Status) -> usize {
        self.column(status).count()
    }

    /// Number of load requests still in flight.
    #[must_use]
    pub fn pending_loads(&self) -> usize {
        self.pending_loads
    }

    pub fn begin_load(&mut self) {
        self.pending_loads += 1;
        self.loading = true;
    }

    /// Mark one load as settled; `loading` stays set while others are pending.
    pub fn finish_load(&mut self) {
        self.pending_loads = self.pending_loads.saturating_sub(1);
        self.loading = self.pending_loads > 0;
    }

    /// Replace the whole card set with a freshly loaded one.
    pub fn replace_cards(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.loaded = true;
    }

    /// Append a card. A card whose id is already present is replaced in place.
    pub fn push_card(&mut self, card: Card) {
        match self.cards.iter_mut().find(|c| c.id == card.id) {
            Some(existing) => *existing = card,
            None => self.cards.push(card),
        }
    }

    /// Remove the card with `id`. Missing ids are a no-op.
    pub fn remove_card(&mut self, id: &str) -> Option<Card> {
        let index = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Move the card `(id, from)` into `to`, inserting it before the card
    /// currently at `position` in the target column (end of column when `None`
    /// or out of range). Positions count the column as it is before the move,
    /// so a card dropped onto one further down its own column lands just above
    /// it.
    ///
    /// Matching on both id and current status makes a stale drag a no-op.
    /// Returns the card's former position within `from`, or `None` when no
    /// card matched.
    pub fn move_card(&mut self, id: &str, from: Status, to: Status, position: Option<usize>) -> Option<usize> {
        let index = self.cards.iter().position(|c| c.id == id && c.status == from)?;
        let former = self.cards[..index].iter().filter(|c| c.status == from).count();

        let mut card = self.cards.remove(index);
        card.status = to;
        let position = match position {
            Some(p) if from == to && p > former => Some(p - 1),
            other => other,
        };
        let at = position
            .and_then(|p| self.column_slot(to, p))
            .unwrap_or(self.cards.len());
        self.cards.insert(at, card);
        Some(former)
    }

    /// Index in `cards` of the `n`-th card with `status`.
    fn column_slot(&self, status: Status, n: usize) -> Option<usize> {
        self.cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.status == status)
            .nth(n)
            .map(|(i, _)| i)
    }

    pub fn set_draft_field(&mut self, column: Status, field: DraftField, value: impl Into<String>) {
        self.drafts[column].set(field, value);
    }

    pub fn clear_draft(&mut self, column: Status) {
        self.drafts[column] = Draft::default();
    }

    /// Flip the "add card" popover of one column; returns the new state.
    pub fn toggle_popover(&mut self, column: Status) -> bool {
        let open = &mut self.popovers[column];
        *open = !*open;
        *open
    }

    pub fn close_popover(&mut self, column: Status) {
        self.popovers[column] = false;
    }

    /// Queue a notice, evicting the oldest beyond [`NOTICE_CAP`]. Returns its id.
    pub fn push_notice(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        self.next_notice_id += 1;
        let id = self.next_notice_id;
        if self.notices.len() >= NOTICE_CAP {
            self.notices.remove(0);
        }
        self.notices.push(Notice { id, level, message: message.into() });
        id
    }

    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }
}
