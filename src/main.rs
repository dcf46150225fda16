#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() {
    // A missing .env file is fine; real deployments set the environment directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::HostConfig::from_env().expect("invalid configuration");
    let http = reqwest::Client::builder()
        .timeout(config.upstream_timeout)
        .build()
        .expect("http client init failed");
    let state = state::AppState::new(http, config.upstream_url.clone());

    let app = match routes::app(state) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to assemble router");
            std::process::exit(1);
        }
    };
    let app = app
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, upstream = %config.upstream_url, "trello-board listening");
    axum::serve(listener, app).await.expect("server failed");
}
