//! REST client for the card store.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning a network error, since the board only
//! loads cards once hydrated in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and body-decoding failures map to `BoardError::Network`, non-2xx
//! responses to `BoardError::Rejected`. Nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use kanban::api::{card_endpoint, cards_endpoint};
#[cfg(feature = "hydrate")]
use kanban::api::{check_status, status_patch_body};
use kanban::{BoardError, Card, CardApi, NewCard, Status};

/// Card store reached over HTTP from the browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpCardApi {
    base_url: String,
}

impl HttpCardApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Base URL baked in at build time via `TRELLO_API_BASE`.
    ///
    /// Unset means same-origin: requests go to `/api/cards` on the host,
    /// which proxies them to the upstream store.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("TRELLO_API_BASE").unwrap_or_default())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cards_url(&self) -> String {
        cards_endpoint(&self.base_url)
    }

    pub fn card_url(&self, id: &str) -> String {
        card_endpoint(&self.base_url, id)
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::needless_pass_by_value)]
fn network(err: gloo_net::Error) -> BoardError {
    BoardError::Network(err.to_string())
}

#[cfg(not(feature = "hydrate"))]
fn not_available() -> BoardError {
    BoardError::Network("not available on server".to_owned())
}

impl CardApi for HttpCardApi {
    async fn list_cards(&self) -> Result<Vec<Card>, BoardError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.cards_url())
                .send()
                .await
                .map_err(network)?;
            check_status(resp.status())?;
            resp.json::<Vec<Card>>().await.map_err(network)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(not_available())
        }
    }

    async fn create_card(&self, card: &NewCard) -> Result<Card, BoardError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.cards_url())
                .json(card)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            check_status(resp.status())?;
            resp.json::<Card>().await.map_err(network)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = card;
            Err(not_available())
        }
    }

    async fn delete_card(&self, id: &str) -> Result<(), BoardError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::delete(&self.card_url(id))
                .send()
                .await
                .map_err(network)?;
            check_status(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            Err(not_available())
        }
    }

    async fn update_status(&self, id: &str, status: Status) -> Result<(), BoardError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::patch(&self.card_url(id))
                .json(&status_patch_body(status))
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            check_status(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, status);
            Err(not_available())
        }
    }
}
