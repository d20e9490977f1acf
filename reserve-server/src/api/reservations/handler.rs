//! Reservation API Handlers
//!
//! Input validation lives here at the boundary; the matching core only ever
//! sees well-formed dates, times, and phones.

use axum::{Json, extract::State};
use serde::Serialize;
use shared::error::{AppResult, ErrorCode};
use shared::models::{ReservationCancel, ReservationCreate};

use crate::core::ServerState;
use crate::reservations::service;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_date, validate_optional_text, validate_party_size,
    validate_phone, validate_required_text, validate_time,
};

/// POST /reservation/create response
#[derive(Debug, Serialize)]
pub struct ReservationCreated {
    status: &'static str,
    message: &'static str,
    created_at: String,
}

/// POST /reservation/cancel response
///
/// Business-logic failures (not found, ambiguous) ride a 200 with
/// `status:"error"`: they are expected outcomes of human-entered data, not
/// system faults. Store and schema failures use transport-level 5xx.
#[derive(Debug, Serialize)]
pub struct CancelResponse {
    status: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cancelled_at: Option<String>,
}

/// POST /reservation/create
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<Json<ReservationCreated>> {
    validate_create(&payload)?;

    let created_at = service::create_reservation(state.store(), &payload).await?;

    Ok(Json(ReservationCreated {
        status: "ok",
        message: "reservation created",
        created_at,
    }))
}

/// POST /reservation/cancel
pub async fn cancel(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCancel>,
) -> AppResult<Json<CancelResponse>> {
    validate_cancel(&payload)?;

    match service::cancel_reservation(state.store(), &payload).await {
        Ok(outcome) => Ok(Json(CancelResponse {
            status: "ok",
            message: "reservation cancelled".to_string(),
            created_at: Some(outcome.created_at),
            cancelled_at: Some(outcome.cancelled_at),
        })),
        Err(err)
            if matches!(
                err.code,
                ErrorCode::ReservationNotFound | ErrorCode::AmbiguousMatch
            ) =>
        {
            Ok(Json(CancelResponse {
                status: "error",
                message: err.message,
                created_at: None,
                cancelled_at: None,
            }))
        }
        Err(err) => Err(err),
    }
}

fn validate_create(req: &ReservationCreate) -> AppResult<()> {
    validate_date(&req.date)?;
    validate_time(&req.time)?;
    validate_party_size(req.party_size)?;
    validate_required_text(&req.name, "name", MAX_NAME_LEN)?;
    validate_phone(&req.phone)?;
    validate_optional_text(&req.notes, "notes", MAX_NOTE_LEN)?;
    Ok(())
}

fn validate_cancel(req: &ReservationCancel) -> AppResult<()> {
    validate_date(&req.date)?;
    validate_time(&req.time)?;
    validate_phone(&req.phone)?;
    validate_optional_text(&req.name, "name", MAX_NAME_LEN)?;
    Ok(())
}
