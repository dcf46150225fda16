//! Browser helpers.

pub mod drag;
