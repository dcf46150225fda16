//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `board` wraps the single `kanban::BoardState` in a signal; `ui` holds
//! transient drag-and-drop chrome that never reaches the card store.

pub mod board;
pub mod ui;
