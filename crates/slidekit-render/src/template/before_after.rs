//! Before/after comparison template.
//!
//! Pairs tile the content area per the page's layout mode; each cell
//! holds two photo slots flanking an arrow gutter. Geometry comes from
//! [`crate::grid`] and is recomputed whole on every render.

use slidekit_model::subdoc::{self, BeforeAfterPair};
use slidekit_model::{Language, Page};

use crate::constants::{CAPTION_FONT, DEFAULT_ARROW_SIZE};
use crate::grid::{self, PairLayoutMode};
use crate::resolve;
use crate::theme::RenderTheme;
use crate::tree::{Rect, TextSpan, VisualNode, VisualTree};

const CAPTION_HEIGHT: f32 = 20.0;

fn photo_slot(slot: Rect, key: &str) -> VisualNode {
    VisualNode::Image {
        rect: Rect::new(slot.x, slot.y, slot.width, slot.height - CAPTION_HEIGHT),
        image_key: (!key.is_empty()).then(|| key.to_string()),
    }
}

pub(super) fn render(page: &Page, lang: Language, theme: &RenderTheme) -> VisualTree {
    let mut tree = super::base_slide(page, lang, theme);

    let pairs: Vec<BeforeAfterPair> =
        subdoc::decode_or_default(page.raw("pairs").unwrap_or_default());
    let mode = page
        .raw("layoutMode")
        .and_then(PairLayoutMode::from_tag)
        .unwrap_or_default();
    let arrow_size = page
        .raw("arrowSize")
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(DEFAULT_ARROW_SIZE);

    let cells = grid::layout_pairs(mode, pairs.len(), arrow_size);
    for (pair, cell) in pairs.iter().zip(&cells) {
        tree.push(photo_slot(cell.before, &pair.before_key));
        tree.push(photo_slot(cell.after, &pair.after_key));
        tree.push(VisualNode::Text {
            rect: cell.arrow,
            spans: vec![TextSpan::plain("\u{2192}")],
            font_size: arrow_size as u32,
            color: theme.accent.clone(),
            align: crate::tree::TextAlign::Center,
        });
        tree.push(
            VisualNode::text(
                Rect::new(
                    cell.cell.x,
                    cell.cell.bottom() - CAPTION_HEIGHT,
                    cell.cell.width,
                    CAPTION_HEIGHT,
                ),
                resolve::local_text(&pair.caption, lang),
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

    fn page_with_pairs(count: usize, mode: &str) -> Page {
        let mut page = Page::new(PageType::BeforeAfter, 0);
        let pairs: Vec<BeforeAfterPair> = (0..count).map(|_| BeforeAfterPair::new()).collect();
        page.content
            .insert("pairs".into(), ContentValue::Raw(subdoc::encode(&pairs)));
        page.content
            .insert("layoutMode".into(), ContentValue::Raw(mode.into()));
        page
    }

    fn image_count(tree: &VisualTree) -> usize {
        tree.nodes
            .iter()
            .filter(|n| matches!(n, VisualNode::Image { .. }))
            .count()
    }

    #[test]
    fn test_two_slots_per_pair() {
        let theme = RenderTheme::default();
        let tree = render(&page_with_pairs(3, "freeform"), Language::En, &theme);
        assert_eq!(image_count(&tree), 6);
    }

    #[test]
    fn test_fixed_mode_caps_pairs() {
        let theme = RenderTheme::default();
        let tree = render(&page_with_pairs(5, "2x1"), Language::En, &theme);
        assert_eq!(image_count(&tree), 4);
    }

    #[test]
    fn test_unknown_mode_falls_back_to_default() {
        let theme = RenderTheme::default();
        let tree = render(&page_with_pairs(1, "9x9"), Language::En, &theme);
        assert_eq!(image_count(&tree), 2);
    }
}
