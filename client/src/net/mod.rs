//! Networking for the card store REST API.

pub mod api;
