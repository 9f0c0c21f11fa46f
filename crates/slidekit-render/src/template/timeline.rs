//! Timeline template.
//!
//! Entries sit on a horizontal axis, evenly spaced across the content
//! area, detail text below each marker.

use slidekit_model::subdoc::{self, TimelineEntry};
use slidekit_model::{Language, Page};

use crate::constants::{CAPTION_FONT, CONTENT_WIDTH, CONTENT_X};
use crate::resolve;
use crate::theme::RenderTheme;
use crate::tree::{Rect, VisualNode, VisualTree};

const AXIS_Y: f32 = 250.0;
const MARKER_SIZE: f32 = 14.0;
const LABEL_WIDTH: f32 = 150.0;

pub(super) fn render(page: &Page, lang: Language, theme: &RenderTheme) -> VisualTree {
    let mut tree = super::base_slide(page, lang, theme);
    let entries: Vec<TimelineEntry> =
        subdoc::decode_or_default(page.raw("entries").unwrap_or_default());
    if entries.is_empty() {
        return tree;
    }

    tree.push(VisualNode::Line {
        from: (CONTENT_X, AXIS_Y),
        to: (CONTENT_X + CONTENT_WIDTH, AXIS_Y),
        color: theme.muted.clone(),
        dashed: false,
    });

    let step = CONTENT_WIDTH / entries.len() as f32;
    for (i, entry) in entries.iter().enumerate() {
        let center_x = CONTENT_X + step * (i as f32 + 0.5);
        tree.push(VisualNode::box_fill(
            Rect::new(
                center_x - MARKER_SIZE / 2.0,
                AXIS_Y - MARKER_SIZE / 2.0,
                MARKER_SIZE,
                MARKER_SIZE,
            ),
            theme.accent.clone(),
        ));
        tree.push(
            VisualNode::text(
                Rect::new(center_x - LABEL_WIDTH / 2.0, AXIS_Y - 56.0, LABEL_WIDTH, 22.0),
                &entry.date,
                CAPTION_FONT,
                theme.muted.clone(),
            )
            .centered(),
        );
        tree.push(
            VisualNode::text(
                Rect::new(center_x - LABEL_WIDTH / 2.0, AXIS_Y + 22.0, LABEL_WIDTH, 24.0),
                resolve::local_text(&entry.heading, lang),
                16,
                theme.text.clone(),
            )
            .centered(),
        );
        tree.push(
            VisualNode::text(
                Rect::new(center_x - LABEL_WIDTH / 2.0, AXIS_Y + 50.0, LABEL_WIDTH, 60.0),
                resolve::local_text(&entry.detail, lang),
                CAPTION_FONT,
                theme.muted.clone(),
            )
            .centered(),
        );
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_model::{ContentValue, PageType};

    #[test]
    fn test_markers_are_evenly_spaced() {
        let theme = RenderTheme::default();
        let mut page = Page::new(PageType::Timeline, 0);
        let entries: Vec<TimelineEntry> = (0..4).map(|_| TimelineEntry::new()).collect();
        page.content.insert(
            "entries".into(),
            ContentValue::Raw(subdoc::encode(&entries)),
        );

        let tree = render(&page, Language::En, &theme);
        let marker_xs: Vec<f32> = tree
            .nodes
            .iter()
            .filter_map(|n| match n {
                VisualNode::Frame { rect, .. } if rect.width == MARKER_SIZE => Some(rect.x),
                _ => None,
            })
            .collect();
        assert_eq!(marker_xs.len(), 4);
        let step = marker_xs[1] - marker_xs[0];
        assert_eq!(marker_xs[2] - marker_xs[1], step);
        assert_eq!(marker_xs[3] - marker_xs[2], step);
    }

    #[test]
    fn test_no_entries_no_axis() {
        let theme = RenderTheme::default();
        let mut page = Page::new(PageType::Timeline, 0);
        page.content
            .insert("entries".into(), ContentValue::Raw("[]".into()));
        let tree = render(&page, Language::En, &theme);
        assert!(!tree.nodes.iter().any(|n| matches!(n, VisualNode::Line { .. })));
    }
}
