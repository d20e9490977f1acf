//! Reservation store collaborator
//!
//! The store is an external spreadsheet-style service holding one row per
//! reservation. All addressing is 1-based (row 1 is the header), matching
//! common spreadsheet semantics. The service never deletes rows; creation
//! appends and cancellation mutates two cells in place.

mod memory;
mod sheets;

pub use memory::MemorySheetStore;
pub use sheets::SheetsClient;

use async_trait::async_trait;
use shared::error::AppResult;

/// Boundary trait for the external tabular store.
///
/// Implementations map their transport failures to `StoreReadFailed` /
/// `StoreWriteFailed`; callers only see [`shared::error::AppError`].
#[async_trait]
pub trait SheetStore: Send + Sync + std::fmt::Debug {
    /// Read the header row (store row 1).
    async fn read_header_row(&self) -> AppResult<Vec<String>>;

    /// Read the full table, header included, in row order.
    async fn read_all_rows(&self) -> AppResult<Vec<Vec<String>>>;

    /// Overwrite a single cell. `row` and `col` are 1-based.
    async fn write_cell(&self, row: u32, col: u32, value: &str) -> AppResult<()>;

    /// Append one row below the current table.
    async fn append_row(&self, values: &[String]) -> AppResult<()>;
}
