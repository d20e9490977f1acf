//! In-memory store used in tests

use async_trait::async_trait;
use shared::error::{AppError, AppResult};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use super::SheetStore;

/// In-memory [`SheetStore`] with the same 1-based semantics as the real
/// store. Row 1 is the header.
#[derive(Debug, Default)]
pub struct MemorySheetStore {
    rows: RwLock<Vec<Vec<String>>>,
    fail_writes: AtomicBool,
}

impl MemorySheetStore {
    /// Create a store seeded with the given table (header first).
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self {
            rows: RwLock::new(rows),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make subsequent writes fail with `StoreWriteFailed`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot the current table contents.
    pub async fn snapshot(&self) -> Vec<Vec<String>> {
        self.rows.read().await.clone()
    }

    /// Read one cell (1-based), empty string when out of range.
    pub async fn cell(&self, row: u32, col: u32) -> String {
        let rows = self.rows.read().await;
        rows.get(row as usize - 1)
            .and_then(|r| r.get(col as usize - 1))
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl SheetStore for MemorySheetStore {
    async fn read_header_row(&self) -> AppResult<Vec<String>> {
        let rows = self.rows.read().await;
        rows.first()
            .cloned()
            .ok_or_else(|| AppError::store_read("store has no header row"))
    }

    async fn read_all_rows(&self) -> AppResult<Vec<Vec<String>>> {
        Ok(self.rows.read().await.clone())
    }

    async fn write_cell(&self, row: u32, col: u32, value: &str) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::store_write("simulated write failure"));
        }
        let mut rows = self.rows.write().await;
        let row_idx = row as usize - 1;
        let col_idx = col as usize - 1;
        let row = rows
            .get_mut(row_idx)
            .ok_or_else(|| AppError::store_write(format!("row {} out of range", row_idx + 1)))?;
        if row.len() <= col_idx {
            row.resize(col_idx + 1, String::new());
        }
        row[col_idx] = value.to_string();
        Ok(())
    }

    async fn append_row(&self, values: &[String]) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::store_write("simulated write failure"));
        }
        self.rows.write().await.push(values.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Vec<String> {
        ["date", "time", "status"].iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_write_cell_extends_short_rows() {
        let store = MemorySheetStore::new(vec![header(), vec!["2025-11-25".into()]]);
        store.write_cell(2, 3, "CANCELLED").await.unwrap();
        assert_eq!(store.cell(2, 3).await, "CANCELLED");
        assert_eq!(store.cell(2, 2).await, "");
    }

    #[tokio::test]
    async fn test_write_cell_out_of_range_row_fails() {
        let store = MemorySheetStore::new(vec![header()]);
        assert!(store.write_cell(5, 1, "x").await.is_err());
    }

    #[tokio::test]
    async fn test_fail_writes_toggle() {
        let store = MemorySheetStore::new(vec![header()]);
        store.set_fail_writes(true);
        assert!(store.append_row(&["a".into()]).await.is_err());
        store.set_fail_writes(false);
        assert!(store.append_row(&["a".into()]).await.is_ok());
    }
}
