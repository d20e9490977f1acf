//! Shared types for the Reserve service
//!
//! Common types used by the server and any future clients: error types,
//! reservation models, and wire payloads.

pub mod error;
pub mod models;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{ReservationCancel, ReservationCreate, ReservationStatus};
