//! Header row -> semantic column positions
//!
//! The header row (store row 1) is the single source of truth for the
//! column layout. Nothing else in the service assumes a fixed order, so a
//! staff member reordering columns in the sheet does not silently corrupt
//! writes. A required column that cannot be found fails the request with a
//! schema mismatch instead of defaulting, since a guessed position risks
//! writing to the wrong column.

use shared::error::{AppError, AppResult};

/// 1-based column positions resolved from the store header.
///
/// `party_size` and `notes` are optional here because cancellation does not
/// touch them; the create path demands them via [`ColumnMap::require`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: u32,
    pub time: u32,
    pub name: u32,
    pub phone: u32,
    pub created_at: u32,
    pub status: u32,
    pub cancelled_at: u32,
    pub party_size: Option<u32>,
    pub notes: Option<u32>,
    /// Header width; short data rows are treated as padded to this width
    pub width: usize,
}

impl ColumnMap {
    /// Resolve semantic fields from the header row.
    ///
    /// Header names are matched after trimming, case-insensitively - the
    /// sheet is hand-edited and `Date ` must not break the service. Blank
    /// header cells are ignored.
    pub fn from_header(header: &[String]) -> AppResult<Self> {
        let find = |field: &str| -> Option<u32> {
            header.iter().enumerate().find_map(|(idx, cell)| {
                let cell = cell.trim();
                if !cell.is_empty() && cell.eq_ignore_ascii_case(field) {
                    Some(idx as u32 + 1)
                } else {
                    None
                }
            })
        };
        let require = |field: &str| find(field).ok_or_else(|| AppError::schema_mismatch(field));

        Ok(Self {
            date: require("date")?,
            time: require("time")?,
            name: require("name")?,
            phone: require("phone")?,
            created_at: require("created_at")?,
            status: require("status")?,
            cancelled_at: require("cancelled_at")?,
            party_size: find("party_size"),
            notes: find("notes"),
            width: header.len(),
        })
    }

    /// Demand an optional column (create path).
    pub fn require(col: Option<u32>, field: &str) -> AppResult<u32> {
        col.ok_or_else(|| AppError::schema_mismatch(field))
    }
}

/// Read a cell from a possibly-ragged row, 1-based.
///
/// Rows shorter than the header behave as if right-padded with empty
/// strings, so missing trailing fields never index out of bounds.
pub fn field(row: &[String], col: u32) -> &str {
    row.get(col as usize - 1).map(String::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_resolves_standard_layout() {
        let h = header(&[
            "date",
            "time",
            "party_size",
            "name",
            "phone",
            "notes",
            "created_at",
            "status",
            "cancelled_at",
        ]);
        let map = ColumnMap::from_header(&h).unwrap();
        assert_eq!(map.date, 1);
        assert_eq!(map.time, 2);
        assert_eq!(map.party_size, Some(3));
        assert_eq!(map.name, 4);
        assert_eq!(map.phone, 5);
        assert_eq!(map.notes, Some(6));
        assert_eq!(map.created_at, 7);
        assert_eq!(map.status, 8);
        assert_eq!(map.cancelled_at, 9);
        assert_eq!(map.width, 9);
    }

    #[test]
    fn test_order_does_not_matter() {
        let h = header(&[
            "status",
            "cancelled_at",
            "phone",
            "name",
            "created_at",
            "time",
            "date",
        ]);
        let map = ColumnMap::from_header(&h).unwrap();
        assert_eq!(map.status, 1);
        assert_eq!(map.date, 7);
        assert_eq!(map.party_size, None);
    }

    #[test]
    fn test_tolerates_case_whitespace_and_blank_cells() {
        let h = header(&[
            "Date ",
            "",
            "TIME",
            " name",
            "phone",
            "created_at",
            "Status",
            "cancelled_at",
        ]);
        let map = ColumnMap::from_header(&h).unwrap();
        assert_eq!(map.date, 1);
        assert_eq!(map.time, 3);
        assert_eq!(map.status, 7);
    }

    #[test]
    fn test_missing_required_column_is_schema_mismatch() {
        let h = header(&["date", "time", "name", "created_at", "status", "cancelled_at"]);
        let err = ColumnMap::from_header(&h).unwrap_err();
        assert_eq!(err.code, ErrorCode::SchemaMismatch);
        assert!(err.message.contains("phone"));
    }

    #[test]
    fn test_field_pads_short_rows() {
        let row = header(&["2025-11-25", "19:00"]);
        assert_eq!(field(&row, 1), "2025-11-25");
        assert_eq!(field(&row, 2), "19:00");
        assert_eq!(field(&row, 9), "");
    }

    #[test]
    fn test_require_optional_column() {
        assert_eq!(ColumnMap::require(Some(3), "party_size").unwrap(), 3);
        let err = ColumnMap::require(None, "party_size").unwrap_err();
        assert_eq!(err.code, ErrorCode::SchemaMismatch);
    }
}
