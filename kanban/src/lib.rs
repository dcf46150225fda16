//! Kanban board core shared by the browser client and the CLI.
//!
//! This crate owns the card wire model, draft validation, the error taxonomy,
//! and the `BoardController` that keeps a local card set in sync with the
//! remote card store. Transport and state ownership are injected through the
//! [`api::CardApi`] and [`controller::StateCell`] seams so the same logic runs
//! on `gloo-net` + Leptos signals and on `reqwest` + `RefCell`.

pub mod api;
pub mod board;
pub mod card;
pub mod controller;
pub mod draft;
pub mod error;

pub use api::CardApi;
pub use board::{BoardState, Columns, Notice, NoticeLevel};
pub use card::{Card, NewCard, Priority, Status};
pub use controller::{BoardController, ControllerOptions, StateCell};
pub use draft::{Draft, DraftField};
pub use error::{BoardError, ValidationError};
