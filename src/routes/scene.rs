//! Decorative scene data for the browser renderer.
//!
//! Everything is generated at startup; these handlers only serialize it.

use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::state::AppState;

/// Scenes only change on restart.
const SCENE_CACHE: &str = "public, max-age=3600";

/// `GET /api/scene/globe`
pub async fn globe(State(state): State<AppState>) -> Response {
    json_response(&state.scenes.globe)
}

/// `GET /api/scene/globe/texture.png`
pub async fn globe_texture(State(state): State<AppState>) -> Response {
    ([(CONTENT_TYPE, "image/png"), (CACHE_CONTROL, SCENE_CACHE)], state.scenes.earth_png.clone()).into_response()
}

/// `GET /api/scene/stars`
pub async fn stars(State(state): State<AppState>) -> Response {
    json_response(&state.scenes.stars)
}

/// `GET /api/scene/network`
pub async fn network(State(state): State<AppState>) -> Response {
    json_response(&state.scenes.network)
}

fn json_response<T: Serialize>(value: &T) -> Response {
    match serde_json::to_vec(value) {
        Ok(body) => ([(CONTENT_TYPE, "application/json"), (CACHE_CONTROL, SCENE_CACHE)], body).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "scene serialization failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
#[path = "scene_test.rs"]
mod tests;
