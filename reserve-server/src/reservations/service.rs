//! Create / cancel operations against the reservation store
//!
//! Stateless per request: every cancellation re-reads the full current
//! table, so freshness is guaranteed at the cost of a full scan (fine at
//! reservation-system scale). No cross-request locking; a concurrent
//! double-cancel of the same row is an idempotent cell overwrite.

use shared::error::AppResult;
use shared::models::{ReservationCancel, ReservationCreate, ReservationStatus};

use super::columns::ColumnMap;
use super::{matcher, timestamp};
use crate::store::SheetStore;

/// Result of a committed cancellation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOutcome {
    /// 1-based store row that was cancelled
    pub row: u32,
    /// The reservation's original `created_at` cell
    pub created_at: String,
    /// The cancellation timestamp that was written
    pub cancelled_at: String,
}

/// Append one reservation row with `status=CONFIRMED`.
///
/// Cell positions come from the live header, never from an assumed order.
/// Returns the `created_at` stamp written to the store.
pub async fn create_reservation(
    store: &dyn SheetStore,
    req: &ReservationCreate,
) -> AppResult<String> {
    let header = store.read_header_row().await?;
    let columns = ColumnMap::from_header(&header)?;
    let party_size_col = ColumnMap::require(columns.party_size, "party_size")?;
    let notes_col = ColumnMap::require(columns.notes, "notes")?;

    let created_at = timestamp::format_now();

    let mut row = vec![String::new(); columns.width];
    set_cell(&mut row, columns.date, req.date.clone());
    set_cell(&mut row, columns.time, req.time.clone());
    set_cell(&mut row, party_size_col, req.party_size.to_string());
    set_cell(&mut row, columns.name, req.name.clone());
    set_cell(&mut row, columns.phone, req.phone.clone());
    set_cell(&mut row, notes_col, req.notes.clone().unwrap_or_default());
    set_cell(&mut row, columns.created_at, created_at.clone());
    set_cell(
        &mut row,
        columns.status,
        ReservationStatus::Confirmed.as_str().to_string(),
    );
    // cancelled_at stays empty until cancellation

    store.append_row(&row).await?;

    tracing::info!(
        date = %req.date,
        time = %req.time,
        party_size = req.party_size,
        "reservation created"
    );
    Ok(created_at)
}

/// Resolve a cancellation request to exactly one row and commit the
/// transition.
///
/// The two cell writes (status, cancelled_at) form one logical unit from
/// the caller's perspective: if either fails the whole operation fails and
/// no partial success is claimed. The store offers no multi-cell commit, so
/// the row can be left inconsistent on a mid-flight failure; that is a
/// known limitation, and no automatic retry is attempted.
pub async fn cancel_reservation(
    store: &dyn SheetStore,
    req: &ReservationCancel,
) -> AppResult<CancelOutcome> {
    let header = store.read_header_row().await?;
    let columns = ColumnMap::from_header(&header)?;
    let rows = store.read_all_rows().await?;

    let target = matcher::resolve_cancellation(&rows, &columns, req)?;

    let cancelled_at = timestamp::format_now();
    store
        .write_cell(target.row, columns.status, ReservationStatus::Cancelled.as_str())
        .await?;
    store
        .write_cell(target.row, columns.cancelled_at, &cancelled_at)
        .await?;

    tracing::info!(row = target.row, "reservation cancelled");
    Ok(CancelOutcome {
        row: target.row,
        created_at: target.created_at,
        cancelled_at,
    })
}

fn set_cell(row: &mut [String], col: u32, value: String) {
    row[col as usize - 1] = value;
}
