//! Cursor addressing utilities
//!
//! This module maps logical (column, row) cursor coordinates to absolute
//! DDRAM addresses.
//!
//! The ST7036 lays its display RAM out differently depending on how many
//! lines the panel has, so each row starts at a fixed base address:
//!
//! | Rows | Base addresses |
//! |------|----------------------|
//! | 1 | `0x00` |
//! | 2 | `0x00`, `0x40` |
//! | 3 | `0x00`, `0x10`, `0x20` |
//!
//! ## Example
//!
//! ```
//! use st7036::addressing::{cursor_address, row_offsets};
//!
//! assert_eq!(row_offsets(3), Some(&[0x00, 0x10, 0x20][..]));
//!
//! // Last visible column of the second line on a 16x2 panel
//! assert_eq!(cursor_address(15, 1, 16, 2), Some(0x4F));
//! ```

const ONE_ROW: [u8; 1] = [0x00];
const TWO_ROWS: [u8; 2] = [0x00, 0x40];
const THREE_ROWS: [u8; 3] = [0x00, 0x10, 0x20];

/// Base DDRAM address of every row for a panel with `rows` lines
///
/// Returns `None` for row counts the controller does not support.
pub fn row_offsets(rows: u8) -> Option<&'static [u8]> {
    match rows {
        1 => Some(&ONE_ROW),
        2 => Some(&TWO_ROWS),
        3 => Some(&THREE_ROWS),
        _ => None,
    }
}

/// Absolute DDRAM address of (`column`, `row`)
///
/// The bounds check is inclusive of the configured size: `column == columns`
/// is accepted and addresses the cell just past the visible line. A row must
/// also have a base address, so `row == rows` is rejected.
///
/// Returns `None` when the position is rejected.
pub fn cursor_address(column: u8, row: u8, columns: u8, rows: u8) -> Option<u8> {
    if column > columns || row > rows {
        return None;
    }
    let base = row_offsets(rows)?.get(usize::from(row))?;
    base.checked_add(column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_offsets_length_and_origin() {
        for rows in 1..=3 {
            let offsets = row_offsets(rows).unwrap();
            assert_eq!(offsets.len(), usize::from(rows));
            assert_eq!(offsets[0], 0x00);
        }
    }

    #[test]
    fn test_row_offsets_unsupported() {
        assert_eq!(row_offsets(0), None);
        assert_eq!(row_offsets(4), None);
    }

    #[test]
    fn test_two_row_addresses() {
        assert_eq!(cursor_address(0, 0, 16, 2), Some(0x00));
        assert_eq!(cursor_address(15, 1, 16, 2), Some(0x4F));
    }

    #[test]
    fn test_three_row_addresses() {
        assert_eq!(cursor_address(0, 1, 16, 3), Some(0x10));
        assert_eq!(cursor_address(5, 2, 16, 3), Some(0x25));
    }

    #[test]
    fn test_row_past_last_line_rejected() {
        assert_eq!(cursor_address(0, 2, 16, 2), None);
        assert_eq!(cursor_address(0, 3, 16, 2), None);
    }

    #[test]
    fn test_column_boundary_is_inclusive() {
        // One past the last visible column is accepted
        assert_eq!(cursor_address(16, 0, 16, 2), Some(0x10));
        assert_eq!(cursor_address(17, 0, 16, 2), None);
    }
}
