//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! only carries what the card proxy needs: a pooled HTTP client and the
//! upstream card store base URL.

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Base URL of the card store, without trailing slash.
    pub upstream_url: Arc<str>,
}

impl AppState {
    #[must_use]
    pub fn new(http: reqwest::Client, upstream_url: impl Into<Arc<str>>) -> Self {
        Self { http, upstream_url: upstream_url.into() }
    }
}
