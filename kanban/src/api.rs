//! Remote card store seam.
//!
//! `CardApi` is implemented over `gloo-net` in the browser client and over
//! `reqwest` in the CLI. Both build URLs with the helpers below so the
//! endpoint layout lives in one place.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::card::{Card, NewCard, Status};
use crate::error::BoardError;

/// Collection path relative to the API base.
pub const CARDS_PATH: &str = "/api/cards";

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Async access to the remote card collection.
///
/// Futures are not required to be `Send`; in the browser they run on the
/// single-threaded wasm executor.
#[allow(async_fn_in_trait)]
pub trait CardApi {
    /// `GET /api/cards`.
    async fn list_cards(&self) -> Result<Vec<Card>, BoardError>;

    /// `POST /api/cards`; the store assigns the id.
    async fn create_card(&self, card: &NewCard) -> Result<Card, BoardError>;

    /// `DELETE /api/cards/{id}`; the response body is ignored.
    async fn delete_card(&self, id: &str) -> Result<(), BoardError>;

    /// `PATCH /api/cards/{id}` with `{"status": ...}`.
    async fn update_status(&self, id: &str, status: Status) -> Result<(), BoardError>;
}

/// Collection URL for `base`, e.g. `https://host/api/cards`.
///
/// An empty base yields the relative path, which the host proxy serves.
#[must_use]
pub fn cards_endpoint(base: &str) -> String {
    format!("{}{CARDS_PATH}", base.trim_end_matches('/'))
}

/// Item URL for a single card. The id is percent-encoded as one path segment.
#[must_use]
pub fn card_endpoint(base: &str, id: &str) -> String {
    format!("{}/{}", cards_endpoint(base), utf8_percent_encode(id, PATH_SEGMENT))
}

/// JSON body for a status update.
#[must_use]
pub fn status_patch_body(status: Status) -> serde_json::Value {
    serde_json::json!({ "status": status })
}

/// Map an HTTP status to `Ok` for 2xx and [`BoardError::Rejected`] otherwise.
///
/// # Errors
///
/// Returns [`BoardError::Rejected`] carrying `status` when it is not 2xx.
pub fn check_status(status: u16) -> Result<(), BoardError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(BoardError::Rejected { status })
    }
}
