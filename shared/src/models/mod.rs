//! Domain models

mod reservation;

pub use reservation::{ReservationCancel, ReservationCreate, ReservationStatus};
