//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the rendered page, the contact relay, the scene
//! data and the static assets. HTTP requests are traced and responses gzip
//! compressed when the client accepts it.

pub mod contact;
pub mod pages;
pub mod scene;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.assets_dir);

    Router::new()
        .route("/", get(pages::home))
        .route("/contact", post(contact::submit_form))
        .route("/api/send", post(contact::send))
        .route("/api/scene/globe", get(scene::globe))
        .route("/api/scene/globe/texture.png", get(scene::globe_texture))
        .route("/api/scene/stars", get(scene::stars))
        .route("/api/scene/network", get(scene::network))
        .route("/healthz", get(healthz))
        .nest_service("/assets", assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
