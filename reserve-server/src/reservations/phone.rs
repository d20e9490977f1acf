//! Canonical phone form
//!
//! Phone numbers are free-form at entry ("010-1111-2222", "(82) 10 1111 2222").
//! Comparison strips everything but the digits, applied symmetrically to the
//! stored value and the request value so formatting differences never cause
//! false negatives.

/// Remove every non-digit character from a phone string.
///
/// Empty input yields empty output, which never matches a non-empty
/// canonical phone.
pub fn normalize(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}
