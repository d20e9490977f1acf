//! Store timestamp codec
//!
//! The store keeps `created_at` / `cancelled_at` as fixed-width local-time
//! strings (`YYYY-MM-DD HH:MM`) in the restaurant's timezone, fixed at
//! UTC+9. Historical rows are hand-edited and occasionally corrupt, so
//! parsing never fails: a malformed value falls back to the epoch sentinel
//! and therefore sorts older than any valid timestamp during
//! disambiguation.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};

/// Fixed store timestamp format
pub const STORE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// The store's authoritative local timezone (UTC+9)
pub fn store_offset() -> FixedOffset {
    // 9 hours is always a valid offset
    FixedOffset::east_opt(9 * 3600).expect("valid fixed offset")
}

/// Epoch sentinel: `1970-01-01 00:00` at UTC+9
///
/// Returned for unparseable values so corrupt history sorts oldest.
pub fn epoch_sentinel() -> DateTime<FixedOffset> {
    let naive = NaiveDateTime::parse_from_str("1970-01-01 00:00", STORE_TIME_FORMAT)
        .expect("sentinel literal parses");
    naive
        .and_local_timezone(store_offset())
        .single()
        .expect("fixed offset is unambiguous")
}

/// Parse a stored timestamp string; epoch sentinel on any failure.
pub fn parse(s: &str) -> DateTime<FixedOffset> {
    match NaiveDateTime::parse_from_str(s.trim(), STORE_TIME_FORMAT) {
        Ok(naive) => naive
            .and_local_timezone(store_offset())
            .single()
            .unwrap_or_else(epoch_sentinel),
        Err(_) => epoch_sentinel(),
    }
}

/// Render the current instant in the store's format at UTC+9.
///
/// Callers always stamp with the server's current instant, never
/// client-supplied time.
pub fn format_now() -> String {
    Utc::now()
        .with_timezone(&store_offset())
        .format(STORE_TIME_FORMAT)
        .to_string()
}
