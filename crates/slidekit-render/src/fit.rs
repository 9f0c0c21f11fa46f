//! Degrade-to-fit table sizing.
//!
//! Tables get a fixed vertical pixel budget. When the desired row
//! height would overflow it, rows shrink to an even division of the
//! remaining space and the font scales down proportionally, with hard
//! floors so content stays legible. A linear degrade, not a layout
//! solver - the exact floor/max arithmetic is part of the visual
//! contract with exported output.

use crate::constants::{
    BASE_ROW_HEIGHT, BASE_TABLE_FONT, CITATION_ROW_HEIGHT, MIN_ROW_HEIGHT, MIN_TABLE_FONT,
    TABLE_BUDGET, TABLE_HEADER_HEIGHT,
};

/// Computed row height and font size for a table body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFit {
    /// Height of each body row in pixels
    pub row_height: u32,

    /// Body font size in pixels
    pub font_size: u32,

    /// Whether the table had to shrink below the desired row height
    pub degraded: bool,
}

/// Vertical budget left for header + rows, after the optional citation row
pub fn available_table_height(show_citation: bool) -> u32 {
    if show_citation {
        TABLE_BUDGET - CITATION_ROW_HEIGHT
    } else {
        TABLE_BUDGET
    }
}

/// Fit `row_count` rows into `available_height`.
///
/// If `header_height + row_count * min_row_height` fits, the desired
/// sizes are kept. Otherwise rows become
/// `max(28, floor(remaining / row_count))` and the font becomes
/// `max(9, floor(base_font * row_height / min_row_height))`.
pub fn fit_rows(
    available_height: u32,
    header_height: u32,
    min_row_height: u32,
    base_font_size: u32,
    row_count: usize,
) -> TableFit {
    if row_count == 0 {
        return TableFit {
            row_height: min_row_height,
            font_size: base_font_size,
            degraded: false,
        };
    }
    let rows = row_count as u32;
    let needed = header_height + rows * min_row_height;
    if needed <= available_height {
        return TableFit {
            row_height: min_row_height,
            font_size: base_font_size,
            degraded: false,
        };
    }
    let remaining = available_height.saturating_sub(header_height);
    let row_height = (remaining / rows).max(MIN_ROW_HEIGHT);
    let font_size = (base_font_size * row_height / min_row_height).max(MIN_TABLE_FONT);
    TableFit {
        row_height,
        font_size,
        degraded: true,
    }
}

/// Fit with the standard table constants
pub fn fit_table(row_count: usize, show_citation: bool) -> TableFit {
    fit_rows(
        available_table_height(show_citation),
        TABLE_HEADER_HEIGHT,
        BASE_ROW_HEIGHT,
        BASE_TABLE_FONT,
        row_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overflow_degrades_to_floors() {
        // 540 needed against a 396 budget
        let fit = fit_rows(396, 60, 40, 12, 12);
        assert!(fit.degraded);
        assert_eq!(fit.row_height, 28); // floor((396-60)/12)
        assert_eq!(fit.font_size, 9); // max(9, floor(12*28/40)) = max(9, 8)
    }

    #[test]
    fn test_fit_keeps_base_sizes() {
        // 9 rows: 60 + 360 = 420 <= 421
        let fit = fit_table(9, false);
        assert!(!fit.degraded);
        assert_eq!(fit.row_height, 40);
        assert_eq!(fit.font_size, 12);
    }

    #[test]
    fn test_tenth_row_triggers_degrade() {
        // 60 + 400 = 460 > 421: rows floor(361/10) = 36, font floor(12*36/40) = 10
        let fit = fit_table(10, false);
        assert!(fit.degraded);
        assert_eq!(fit.row_height, 36);
        assert_eq!(fit.font_size, 10);
    }

    #[test]
    fn test_citation_row_shrinks_budget() {
        assert_eq!(available_table_height(false), 421);
        assert_eq!(available_table_height(true), 396);
        // With the citation row, 9 rows no longer fit: 420 > 396
        let fit = fit_table(9, true);
        assert!(fit.degraded);
        assert_eq!(fit.row_height, (396 - 60) / 9);
    }

    #[test]
    fn test_zero_rows_is_identity() {
        let fit = fit_rows(421, 60, 40, 12, 0);
        assert!(!fit.degraded);
        assert_eq!(fit.row_height, 40);
        assert_eq!(fit.font_size, 12);
    }

    #[test]
    fn test_row_height_never_below_floor() {
        let fit = fit_rows(421, 60, 40, 12, 30);
        assert_eq!(fit.row_height, 28); // floor(361/30) = 12, clamped to 28
        assert_eq!(fit.font_size, 9);
    }
}
