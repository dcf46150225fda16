//! Routed pages.

pub mod board;
