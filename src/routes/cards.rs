//! Same-origin proxy to the upstream card store.
//!
//! Requests are forwarded with their method and JSON body; the upstream
//! status, content type, and body are passed back unchanged. Only a transport
//! failure to the upstream is answered locally, with `502 Bad Gateway`.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kanban::api::{card_endpoint, cards_endpoint};
use reqwest::Method;

use crate::state::AppState;

/// `GET /api/cards`
pub async fn list_cards(State(state): State<AppState>) -> Response {
    let url = cards_endpoint(&state.upstream_url);
    forward(&state, Method::GET, url, None).await
}

/// `POST /api/cards`
pub async fn create_card(State(state): State<AppState>, body: Bytes) -> Response {
    let url = cards_endpoint(&state.upstream_url);
    forward(&state, Method::POST, url, Some(body)).await
}

/// `DELETE /api/cards/{id}`
pub async fn delete_card(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let url = card_endpoint(&state.upstream_url, &id);
    forward(&state, Method::DELETE, url, None).await
}

/// `PATCH /api/cards/{id}`
pub async fn update_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let url = card_endpoint(&state.upstream_url, &id);
    forward(&state, Method::PATCH, url, Some(body)).await
}

async fn forward(state: &AppState, method: Method, url: String, body: Option<Bytes>) -> Response {
    let mut request = state.http.request(method.clone(), &url);
    if let Some(body) = body {
        request = request.header(CONTENT_TYPE, "application/json").body(body);
    }

    let upstream = match request.send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "card upstream unreachable");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };

    let status = upstream_status(upstream.status().as_u16());
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = match upstream.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(%method, %url, error = %e, "card upstream body read failed");
            return StatusCode::BAD_GATEWAY.into_response();
        }
    };
    tracing::debug!(%method, %url, status = status.as_u16(), "card request proxied");

    let mut response = (status, bytes).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    response
}

/// Map an upstream status code, treating anything unrepresentable as a gateway error.
fn upstream_status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY)
}
