//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`reservations`] - reservation create / cancel endpoints

pub mod health;
pub mod reservations;
