//! Health check route
//!
//! | path | method | auth |
//! |------|--------|------|
//! | /    | GET    | none |

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// Health check route - public, no store round-trip
pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(health))
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    message: &'static str,
    version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        message: "restaurant api alive",
        version: env!("CARGO_PKG_VERSION"),
    })
}
