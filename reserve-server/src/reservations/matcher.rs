//! Candidate filtering and disambiguation
//!
//! Resolves a cancellation request `{date, time, phone, name?}` to at most
//! one stored reservation row. Phone+date+time alone can collide (shared
//! household phone, walk-in duplicate bookings), so the name acts as a soft
//! secondary key and `created_at` recency is the last-resort tiebreak,
//! approximating "the most recent action the caller likely means".

use shared::error::{AppError, AppResult};
use shared::models::{ReservationCancel, ReservationStatus};

use super::columns::{ColumnMap, field};
use super::{phone, timestamp};

/// A resolved target row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateRow {
    /// 1-based store row number, assigned once at read time. All later
    /// writes address this number.
    pub row: u32,
    /// The row's original `created_at` cell, verbatim
    pub created_at: String,
}

/// Resolve a cancellation request against the full table.
///
/// `rows` is the store content as read, header included at index 0; data
/// row `rows[i]` lives at store row `i + 1`. Short rows behave as if
/// right-padded with empty cells.
///
/// A row qualifies as a candidate iff all of:
/// - status parses as `CONFIRMED` (trimmed, case-insensitive)
/// - `date` and `time` cells equal the request exactly
/// - canonical phones are equal
///
/// Disambiguation, in order: zero candidates fail as not-found; a single
/// candidate is selected; multiple candidates without a non-blank request
/// name fail as ambiguous; with a name, candidates are narrowed by exact
/// trimmed case-sensitive name equality, and if several true duplicates
/// remain the most recent valid `created_at` wins. Equal timestamps keep
/// the first-encountered row (scan order, strictly-newer replacement).
pub fn resolve_cancellation(
    rows: &[Vec<String>],
    columns: &ColumnMap,
    req: &ReservationCancel,
) -> AppResult<CandidateRow> {
    let want_phone = phone::normalize(&req.phone);

    let mut candidates: Vec<CandidateRow> = Vec::new();
    let mut names: Vec<String> = Vec::new();

    for (idx, row) in rows.iter().enumerate().skip(1) {
        if ReservationStatus::parse(field(row, columns.status))
            != Some(ReservationStatus::Confirmed)
        {
            continue;
        }
        if field(row, columns.date) != req.date || field(row, columns.time) != req.time {
            continue;
        }
        if phone::normalize(field(row, columns.phone)) != want_phone {
            continue;
        }

        candidates.push(CandidateRow {
            row: idx as u32 + 1,
            created_at: field(row, columns.created_at).to_string(),
        });
        names.push(field(row, columns.name).trim().to_string());
    }

    if candidates.is_empty() {
        return Err(AppError::reservation_not_found(
            "no matching confirmed reservation",
        ));
    }
    if candidates.len() == 1 {
        return Ok(candidates.remove(0));
    }

    let want_name = req.name.as_deref().map(str::trim).unwrap_or("");
    if want_name.is_empty() {
        return Err(AppError::ambiguous("multiple matches; name required")
            .with_detail("matches", candidates.len()));
    }

    let mut narrowed: Vec<CandidateRow> = candidates
        .into_iter()
        .zip(names)
        .filter(|(_, name)| name.as_str() == want_name)
        .map(|(c, _)| c)
        .collect();

    match narrowed.len() {
        0 => Err(AppError::ambiguous("name mismatch")),
        1 => Ok(narrowed.remove(0)),
        _ => {
            // True duplicate entries: latest valid created_at wins,
            // first-encountered kept on equal timestamps.
            let mut best = narrowed.remove(0);
            let mut best_ts = timestamp::parse(&best.created_at);
            for candidate in narrowed {
                let ts = timestamp::parse(&candidate.created_at);
                if ts > best_ts {
                    best = candidate;
                    best_ts = ts;
                }
            }
            Ok(best)
        }
    }
}
