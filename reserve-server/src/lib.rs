//! Reserve Server - restaurant reservation API
//!
//! # Architecture overview
//!
//! A small HTTP service in front of an external spreadsheet-style store:
//! one row per reservation, addressed by 1-based row/column. Creation
//! appends a row; cancellation is the interesting part, resolving a
//! partial, human-entered request to exactly one confirmed row before
//! flipping it to `CANCELLED`.
//!
//! # Module structure
//!
//! ```text
//! reserve-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── api/           # HTTP routes and handlers
//! ├── store/         # Reservation store client (external collaborator)
//! ├── reservations/  # Matching and cancellation resolution logic
//! └── utils/         # Logger, validation helpers
//! ```

pub mod api;
pub mod core;
pub mod reservations;
pub mod store;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    ____
   / __ \___  ________  ______   _____
  / /_/ / _ \/ ___/ _ \/ ___/ | / / _ \
 / _, _/  __(__  )  __/ /   | |/ /  __/
/_/ |_|\___/____/\___/_/    |___/\___/
    "#
    );
}
