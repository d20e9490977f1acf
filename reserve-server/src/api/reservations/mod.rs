//! Reservation API module

mod handler;

pub use handler::{CancelResponse, ReservationCreated};

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/reservation", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/create", post(handler::create))
        .route("/cancel", post(handler::cancel))
}
