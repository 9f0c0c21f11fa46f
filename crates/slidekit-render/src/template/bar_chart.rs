//! Bar chart template.

use slidekit_model::subdoc::{self, BarDatum};
use slidekit_model::{Language, Page};

use crate::chart;
use crate::constants::CAPTION_FONT;
use crate::resolve;
use crate::theme::RenderTheme;
use crate::tree::{Rect, VisualNode, VisualTree};

const PLOT: Rect = Rect::new(80.0, 120.0, 800.0, 320.0);
const VALUE_LABEL_HEIGHT: f32 = 18.0;

pub(super) fn render(page: &Page, lang: Language, theme: &RenderTheme) -> VisualTree {
    let mut tree = super::base_slide(page, lang, theme);
    let bars: Vec<BarDatum> = subdoc::decode_or_default(page.raw("bars").unwrap_or_default());

    if let Some(unit) = page.field("unit") {
        let text = resolve::field_text(unit, lang);
        if !text.is_empty() {
            tree.push(
                VisualNode::text(Rect::new(680.0, 90.0, 200.0, 20.0), text, CAPTION_FONT, theme.muted.clone())
                    .centered(),
            );
        }
    }

    let values: Vec<f64> = bars.iter().map(|b| b.value).collect();
    let rects = chart::layout_bars(&values, PLOT);

    for (bar, rect) in bars.iter().zip(&rects) {
        let fill = if bar.color.is_empty() {
            theme.accent.clone()
        } else {
            bar.color.clone()
        };
        tree.push(VisualNode::box_fill(*rect, fill));
        // Value above the bar
        tree.push(
            VisualNode::text(
                Rect::new(rect.x, rect.y - VALUE_LABEL_HEIGHT, rect.width, VALUE_LABEL_HEIGHT),
                format_value(bar.value),
                CAPTION_FONT,
                theme.text.clone(),
            )
            .centered(),
        );
        // Category label below the plot
        tree.push(
            VisualNode::text(
                Rect::new(rect.x, PLOT.bottom() + 6.0, rect.width, 32.0),
                resolve::local_text(&bar.label, lang),
                CAPTION_FONT,
                theme.muted.clone(),
            )
            .centered(),
        );
    }
    tree
}

/// Trim a trailing ".0" so whole numbers print as integers
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_model::{ContentValue, PageType};

    #[test]
    fn test_value_formatting() {
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(3.5), "3.5");
    }

    #[test]
    fn test_bars_get_value_and_category_labels() {
        let theme = RenderTheme::default();
        let mut page = Page::new(PageType::BarChart, 0);
        let bars = vec![
            BarDatum::with_value("Q1", 10.0),
            BarDatum::with_value("Q2", 25.0),
        ];
        page.content
            .insert("bars".into(), ContentValue::Raw(subdoc::encode(&bars)));

        let tree = render(&page, Language::En, &theme);
        let json = serde_json::to_string(&tree).unwrap();
        assert!(json.contains("Q1"));
        assert!(json.contains("25"));
        let bar_frames = tree
            .nodes
            .iter()
            .filter(|n| matches!(n, VisualNode::Frame { fill: Some(f), .. } if f == &theme.accent))
            .count();
        assert_eq!(bar_frames, 2);
    }
}
