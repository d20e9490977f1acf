//! Input validation helpers
//!
//! Centralized field limits and boundary validators. Malformed input is
//! rejected here, before any store round-trip, so the matching core can
//! compare `date`/`time` by exact string equality.

use chrono::{NaiveDate, NaiveTime};
use shared::error::{AppError, AppResult, ErrorCode};

// ── Field limits ────────────────────────────────────────────────────

/// Guest names
pub const MAX_NAME_LEN: usize = 100;

/// Notes / special requests
pub const MAX_NOTE_LEN: usize = 500;

/// Free-form phone strings
pub const MIN_PHONE_LEN: usize = 5;
pub const MAX_PHONE_LEN: usize = 30;

/// Party size
pub const MIN_PARTY_SIZE: u32 = 1;
pub const MAX_PARTY_SIZE: u32 = 50;

// ── Validators ──────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(
            AppError::with_message(ErrorCode::RequiredField, format!("{field} must not be empty"))
                .with_detail("field", field),
        );
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(value: &Option<String>, field: &str, max_len: usize) -> AppResult<()> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a calendar date in canonical `YYYY-MM-DD` form.
///
/// chrono accepts `2025-1-5` for `%Y-%m-%d`, so the parsed value is
/// rendered back and compared to demand the padded canonical form the
/// store rows use.
pub fn validate_date(date: &str) -> AppResult<()> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("invalid date '{date}', expected YYYY-MM-DD"),
        )
    })?;
    if parsed.format("%Y-%m-%d").to_string() != date {
        return Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("invalid date '{date}', expected YYYY-MM-DD"),
        ));
    }
    Ok(())
}

/// Validate a 24h time in canonical `HH:MM` form.
pub fn validate_time(time: &str) -> AppResult<()> {
    let parsed = NaiveTime::parse_from_str(time, "%H:%M").map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("invalid time '{time}', expected HH:MM"),
        )
    })?;
    if parsed.format("%H:%M").to_string() != time {
        return Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("invalid time '{time}', expected HH:MM"),
        ));
    }
    Ok(())
}

/// Validate a free-form phone string by length.
pub fn validate_phone(phone: &str) -> AppResult<()> {
    let len = phone.trim().len();
    if !(MIN_PHONE_LEN..=MAX_PHONE_LEN).contains(&len) {
        return Err(AppError::validation(format!(
            "phone must be {MIN_PHONE_LEN}-{MAX_PHONE_LEN} chars, got {len}"
        ))
        .with_detail("field", "phone"));
    }
    Ok(())
}

/// Validate the party size range.
pub fn validate_party_size(party_size: u32) -> AppResult<()> {
    if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&party_size) {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("party_size must be {MIN_PARTY_SIZE}-{MAX_PARTY_SIZE}, got {party_size}"),
        )
        .with_detail("field", "party_size"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2025-11-25").is_ok());
        assert!(validate_date("2025-1-5").is_err());
        assert!(validate_date("25/11/2025").is_err());
        assert!(validate_date("2025-13-01").is_err());
        assert!(validate_date("").is_err());
    }

    #[test]
    fn test_validate_time() {
        assert!(validate_time("19:00").is_ok());
        assert!(validate_time("09:05").is_ok());
        assert!(validate_time("9:00").is_err());
        assert!(validate_time("25:00").is_err());
        assert!(validate_time("19:00:00").is_err());
    }

    #[test]
    fn test_validate_phone_length() {
        assert!(validate_phone("010-1111-2222").is_ok());
        assert!(validate_phone("123").is_err());
        assert!(validate_phone(&"9".repeat(31)).is_err());
    }

    #[test]
    fn test_validate_party_size_range() {
        assert!(validate_party_size(1).is_ok());
        assert!(validate_party_size(50).is_ok());
        assert!(validate_party_size(0).is_err());
        assert!(validate_party_size(51).is_err());
    }

    #[test]
    fn test_validate_required_text() {
        assert!(validate_required_text("Kim", "name", MAX_NAME_LEN).is_ok());
        assert!(validate_required_text("  ", "name", MAX_NAME_LEN).is_err());
        assert!(validate_required_text(&"x".repeat(101), "name", MAX_NAME_LEN).is_err());
    }

    #[test]
    fn test_validate_optional_text() {
        assert!(validate_optional_text(&None, "notes", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("window seat".into()), "notes", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(501)), "notes", MAX_NOTE_LEN).is_err());
    }
}
