//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The card store proxy and Leptos SSR rendering share one Axum router. The
//! proxy keeps browser requests same-origin, so the client can call relative
//! `/api/cards` paths.

pub mod cards;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use kanban::api::CARDS_PATH;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Card proxy and health routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(CARDS_PATH, get(cards::list_cards).post(cards::create_card))
        .route(
            &format!("{CARDS_PATH}/{{id}}"),
            axum::routing::delete(cards::delete_card).patch(cards::update_card),
        )
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR pages + `/pkg` static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
