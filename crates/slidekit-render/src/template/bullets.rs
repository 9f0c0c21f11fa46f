//! Bullet list template.

use slidekit_model::subdoc::{self, BulletItem};
use slidekit_model::{Language, Page};

use crate::constants::{BODY_FONT, CONTENT_WIDTH, CONTENT_X, CONTENT_Y};
use crate::markup;
use crate::resolve;
use crate::theme::RenderTheme;
use crate::tree::{Rect, VisualNode, VisualTree};

const LINE_HEIGHT: f32 = 36.0;
const MARKER_SIZE: f32 = 8.0;
const INDENT_STEP: f32 = 28.0;

pub(super) fn render(page: &Page, lang: Language, theme: &RenderTheme) -> VisualTree {
    let mut tree = super::base_slide(page, lang, theme);
    let bullets: Vec<BulletItem> =
        subdoc::decode_or_default(page.raw("bullets").unwrap_or_default());

    for (i, bullet) in bullets.iter().enumerate() {
        let y = CONTENT_Y + i as f32 * LINE_HEIGHT;
        let indent = bullet.indent as f32 * INDENT_STEP;
        tree.push(VisualNode::box_fill(
            Rect::new(
                CONTENT_X + indent,
                y + (LINE_HEIGHT - MARKER_SIZE) / 2.0,
                MARKER_SIZE,
                MARKER_SIZE,
            ),
            theme.accent.clone(),
        ));
        let text_x = CONTENT_X + indent + MARKER_SIZE + 12.0;
        tree.push(VisualNode::spans(
            Rect::new(text_x, y, CONTENT_WIDTH - (text_x - CONTENT_X), LINE_HEIGHT),
            markup::parse_bold_spans(resolve::local_text(&bullet.text, lang)),
            BODY_FONT,
            theme.text.clone(),
        ));
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_model::{ContentValue, PageType};

    #[test]
    fn test_bold_markup_reaches_spans() {
        let theme = RenderTheme::default();
        let mut page = Page::new(PageType::BulletList, 0);
        page.content.insert(
            "bullets".into(),
            ContentValue::Raw(subdoc::encode(&[BulletItem::with_en("a **key** point")])),
        );

        let tree = render(&page, Language::En, &theme);
        let bold_spans: Vec<_> = tree
            .nodes
            .iter()
            .filter_map(|n| match n {
                VisualNode::Text { spans, .. } => Some(spans),
                _ => None,
            })
            .flatten()
            .filter(|s| s.bold)
            .collect();
        assert_eq!(bold_spans.len(), 1);
        assert_eq!(bold_spans[0].text, "key");
    }

    #[test]
    fn test_indent_offsets_marker() {
        let theme = RenderTheme::default();
        let mut page = Page::new(PageType::BulletList, 0);
        let mut nested = BulletItem::with_en("nested");
        nested.indent = 1;
        page.content.insert(
            "bullets".into(),
            ContentValue::Raw(subdoc::encode(&[BulletItem::with_en("top"), nested])),
        );

        let tree = render(&page, Language::En, &theme);
        let markers: Vec<f32> = tree
            .nodes
            .iter()
            .filter_map(|n| match n {
                VisualNode::Frame { rect, fill: Some(_), .. } if rect.width == MARKER_SIZE => {
                    Some(rect.x)
                }
                _ => None,
            })
            .collect();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[1] - markers[0], INDENT_STEP);
    }
}
