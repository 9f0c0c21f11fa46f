//! Before/after pair grid geometry.
//!
//! Pairs tile a fixed content area. A layout mode picks the (cols,
//! rows) grid; each cell is split into two photo slots flanking an
//! arrow gutter of `arrow_size + 2 * padding`. The whole geometry is
//! recomputed from scratch on every pair-count change - there is no
//! incremental relayout to get out of sync.

use serde::{Deserialize, Serialize};

use crate::constants::{CELL_GAP, CONTENT_HEIGHT, CONTENT_WIDTH, CONTENT_X, CONTENT_Y, SLOT_PADDING};
use crate::tree::Rect;

/// Tiling mode for before/after pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PairLayoutMode {
    /// Two columns, two rows
    #[default]
    #[serde(rename = "2x2")]
    TwoByTwo,

    /// One column, two rows
    #[serde(rename = "1x2")]
    OneByTwo,

    /// Two columns, one row
    #[serde(rename = "2x1")]
    TwoByOne,

    /// Columns capped at 2, extra pairs wrap into further rows
    #[serde(rename = "freeform")]
    Freeform,
}

impl PairLayoutMode {
    /// Get the wire/tag form (e.g., "2x2")
    pub fn tag(&self) -> &'static str {
        match self {
            Self::TwoByTwo => "2x2",
            Self::OneByTwo => "1x2",
            Self::TwoByOne => "2x1",
            Self::Freeform => "freeform",
        }
    }

    /// Parse from the wire/tag form
    pub fn from_tag(s: &str) -> Option<Self> {
        match s {
            "2x2" => Some(Self::TwoByTwo),
            "1x2" => Some(Self::OneByTwo),
            "2x1" => Some(Self::TwoByOne),
            "freeform" => Some(Self::Freeform),
            _ => None,
        }
    }
}

/// Compute the (cols, rows) tiling for a mode and pair count
pub fn grid_dimensions(mode: PairLayoutMode, pair_count: usize) -> (usize, usize) {
    match mode {
        PairLayoutMode::TwoByTwo => (2, 2),
        PairLayoutMode::OneByTwo => (1, 2),
        PairLayoutMode::TwoByOne => (2, 1),
        PairLayoutMode::Freeform => {
            let cols = pair_count.clamp(1, 2);
            let rows = pair_count.div_ceil(cols).max(1);
            (cols, rows)
        }
    }
}

/// Geometry of one laid-out pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairCell {
    /// The full cell
    pub cell: Rect,

    /// Left (before) photo slot
    pub before: Rect,

    /// Right (after) photo slot
    pub after: Rect,

    /// The arrow glyph box, vertically centered in the gutter
    pub arrow: Rect,
}

/// Lay out `pair_count` pairs in the content area.
///
/// Fixed modes show at most `cols * rows` pairs; freeform wraps every
/// pair. Cell sizes divide the content area evenly after subtracting
/// the fixed inter-cell gaps.
pub fn layout_pairs(mode: PairLayoutMode, pair_count: usize, arrow_size: f32) -> Vec<PairCell> {
    if pair_count == 0 {
        return Vec::new();
    }
    let (cols, rows) = grid_dimensions(mode, pair_count);
    let shown = match mode {
        PairLayoutMode::Freeform => pair_count,
        _ => pair_count.min(cols * rows),
    };

    let cell_width = (CONTENT_WIDTH - (cols as f32 - 1.0) * CELL_GAP) / cols as f32;
    let cell_height = (CONTENT_HEIGHT - (rows as f32 - 1.0) * CELL_GAP) / rows as f32;
    let gutter = arrow_size + 2.0 * SLOT_PADDING;
    let slot_width = (cell_width - gutter) / 2.0;

    (0..shown)
        .map(|i| {
            let col = i % cols;
            let row = i / cols;
            let x = CONTENT_X + col as f32 * (cell_width + CELL_GAP);
            let y = CONTENT_Y + row as f32 * (cell_height + CELL_GAP);
            let cell = Rect::new(x, y, cell_width, cell_height);
            PairCell {
                cell,
                before: Rect::new(x, y, slot_width, cell_height),
                after: Rect::new(x + slot_width + gutter, y, slot_width, cell_height),
                arrow: Rect::new(
                    x + slot_width + SLOT_PADDING,
                    y + (cell_height - arrow_size) / 2.0,
                    arrow_size,
                    arrow_size,
                ),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_tags() {
        for mode in [
            PairLayoutMode::TwoByTwo,
            PairLayoutMode::OneByTwo,
            PairLayoutMode::TwoByOne,
            PairLayoutMode::Freeform,
        ] {
            assert_eq!(PairLayoutMode::from_tag(mode.tag()), Some(mode));
        }
        assert_eq!(PairLayoutMode::from_tag("3x3"), None);
    }

    #[test]
    fn test_freeform_caps_columns_and_wraps() {
        assert_eq!(grid_dimensions(PairLayoutMode::Freeform, 1), (1, 1));
        assert_eq!(grid_dimensions(PairLayoutMode::Freeform, 2), (2, 1));
        assert_eq!(grid_dimensions(PairLayoutMode::Freeform, 3), (2, 2));
        assert_eq!(grid_dimensions(PairLayoutMode::Freeform, 5), (2, 3));
    }

    #[test]
    fn test_two_by_two_cell_sizes() {
        let cells = layout_pairs(PairLayoutMode::TwoByTwo, 4, 24.0);
        assert_eq!(cells.len(), 4);
        // (880 - 8) / 2 = 436, (420 - 8) / 2 = 206
        assert_eq!(cells[0].cell.width, 436.0);
        assert_eq!(cells[0].cell.height, 206.0);
        // Second column starts after cell + gap
        assert_eq!(cells[1].cell.x, cells[0].cell.x + 436.0 + 8.0);
        // Second row below first + gap
        assert_eq!(cells[2].cell.y, cells[0].cell.y + 206.0 + 8.0);
    }

    #[test]
    fn test_slots_flank_arrow_gutter() {
        let cells = layout_pairs(PairLayoutMode::TwoByOne, 2, 24.0);
        let cell = &cells[0];
        let gutter = 24.0 + 2.0 * 4.0;
        assert_eq!(cell.before.width, (cell.cell.width - gutter) / 2.0);
        assert_eq!(cell.after.width, cell.before.width);
        assert_eq!(cell.after.x, cell.before.right() + gutter);
        // Arrow is inside the gutter, padded off the slots
        assert_eq!(cell.arrow.x, cell.before.right() + 4.0);
        assert_eq!(cell.arrow.width, 24.0);
    }

    #[test]
    fn test_fixed_mode_truncates_extra_pairs() {
        let cells = layout_pairs(PairLayoutMode::TwoByOne, 5, 24.0);
        assert_eq!(cells.len(), 2);
    }

    #[test]
    fn test_freeform_lays_out_every_pair() {
        let cells = layout_pairs(PairLayoutMode::Freeform, 5, 24.0);
        assert_eq!(cells.len(), 5);
        // Fifth pair sits in the third row, first column
        assert_eq!(cells[4].cell.y, cells[0].cell.y + 2.0 * (cells[0].cell.height + 8.0));
        assert_eq!(cells[4].cell.x, cells[0].cell.x);
    }

    #[test]
    fn test_zero_pairs_is_empty() {
        assert!(layout_pairs(PairLayoutMode::Freeform, 0, 24.0).is_empty());
    }
}
