//! Signal-backed owner of the board state.
//!
//! DESIGN
//! ======
//! `BoardStore` is the browser's `StateCell`: the controller's mutations run
//! as `RwSignal::try_update` closures, so each applies to the current value
//! and notifies dependent views once.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use kanban::{BoardController, BoardState, StateCell};
use leptos::prelude::*;

use crate::net::api::HttpCardApi;

/// Controller type shared through context.
pub type Controller = BoardController<HttpCardApi, BoardStore>;

/// Copyable handle to the reactive board state.
#[derive(Clone, Copy, Debug)]
pub struct BoardStore(RwSignal<BoardState>);

impl BoardStore {
    pub fn new() -> Self {
        Self(RwSignal::new(BoardState::default()))
    }

    /// Underlying signal, for tracked reads in views.
    pub fn signal(self) -> RwSignal<BoardState> {
        self.0
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateCell for BoardStore {
    fn read<R>(&self, f: impl FnOnce(&BoardState) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }

    fn update<R>(&self, f: impl FnOnce(&mut BoardState) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}
