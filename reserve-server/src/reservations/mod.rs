//! Reservation matching and cancellation resolution
//!
//! # Structure
//!
//! - [`phone`] - canonical phone comparison form
//! - [`timestamp`] - fixed-format store timestamps (UTC+9)
//! - [`columns`] - header row -> semantic column positions
//! - [`matcher`] - candidate filtering and disambiguation
//! - [`service`] - create / cancel operations against the store

pub mod columns;
pub mod matcher;
pub mod phone;
pub mod service;
pub mod timestamp;

pub use columns::ColumnMap;
pub use matcher::{CandidateRow, resolve_cancellation};
pub use service::{CancelOutcome, cancel_reservation, create_reservation};
