//! Bar-chart geometry.
//!
//! Bars divide the plot width evenly with fixed gaps; heights scale
//! linearly against the largest value. All-zero (or empty) data yields
//! zero-height bars rather than a division error.

use crate::tree::Rect;

/// Horizontal gap between bars in pixels
pub const BAR_GAP: f32 = 16.0;

/// Compute one rect per value, bottom-aligned in the plot area
pub fn layout_bars(values: &[f64], plot: Rect) -> Vec<Rect> {
    if values.is_empty() {
        return Vec::new();
    }
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let n = values.len() as f32;
    let bar_width = (plot.width - (n - 1.0) * BAR_GAP) / n;

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let height = if max > 0.0 {
                ((value / max) as f32).max(0.0) * plot.height
            } else {
                0.0
            };
            Rect::new(
                plot.x + i as f32 * (bar_width + BAR_GAP),
                plot.bottom() - height,
                bar_width,
                height,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLOT: Rect = Rect::new(80.0, 100.0, 800.0, 360.0);

    #[test]
    fn test_tallest_bar_fills_plot() {
        let bars = layout_bars(&[10.0, 40.0, 20.0], PLOT);
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[1].height, 360.0);
        assert_eq!(bars[1].y, 100.0);
        // Others scale linearly
        assert_eq!(bars[0].height, 90.0);
        assert_eq!(bars[2].height, 180.0);
    }

    #[test]
    fn test_bars_divide_width_with_gaps() {
        let bars = layout_bars(&[1.0, 1.0, 1.0, 1.0], PLOT);
        let expected_width = (800.0 - 3.0 * BAR_GAP) / 4.0;
        assert_eq!(bars[0].width, expected_width);
        assert_eq!(bars[1].x, PLOT.x + expected_width + BAR_GAP);
    }

    #[test]
    fn test_all_zero_values_have_no_height() {
        let bars = layout_bars(&[0.0, 0.0], PLOT);
        assert!(bars.iter().all(|b| b.height == 0.0));
        assert!(bars.iter().all(|b| b.y == PLOT.bottom()));
    }

    #[test]
    fn test_negative_values_clamp_to_zero() {
        let bars = layout_bars(&[-5.0, 10.0], PLOT);
        assert_eq!(bars[0].height, 0.0);
        assert_eq!(bars[1].height, 360.0);
    }

    #[test]
    fn test_empty_is_empty() {
        assert!(layout_bars(&[], PLOT).is_empty());
    }
}
