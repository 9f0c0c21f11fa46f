//! Agenda slide template.

use slidekit_model::subdoc::{self, BulletItem};
use slidekit_model::{Language, Page};

use crate::constants::{CONTENT_WIDTH, CONTENT_X, CONTENT_Y, SUBTITLE_FONT};
use crate::resolve;
use crate::theme::RenderTheme;
use crate::tree::{Rect, VisualNode, VisualTree};

const LINE_HEIGHT: f32 = 42.0;
const NUMBER_WIDTH: f32 = 44.0;

pub(super) fn render(page: &Page, lang: Language, theme: &RenderTheme) -> VisualTree {
    let mut tree = super::base_slide(page, lang, theme);
    let items: Vec<BulletItem> =
        subdoc::decode_or_default(page.raw("items").unwrap_or_default());

    for (i, item) in items.iter().enumerate() {
        let y = CONTENT_Y + i as f32 * LINE_HEIGHT;
        tree.push(
            VisualNode::text(
                Rect::new(CONTENT_X, y, NUMBER_WIDTH, LINE_HEIGHT),
                format!("{:02}", i + 1),
                SUBTITLE_FONT,
                theme.accent.clone(),
            ),
        );
        tree.push(VisualNode::text(
            Rect::new(
                CONTENT_X + NUMBER_WIDTH,
                y,
                CONTENT_WIDTH - NUMBER_WIDTH,
                LINE_HEIGHT,
            ),
            resolve::local_text(&item.text, lang),
            SUBTITLE_FONT,
            theme.text.clone(),
        ));
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_model::PageType;

    #[test]
    fn test_items_are_numbered_down_the_page() {
        let theme = RenderTheme::default();
        let mut page = Page::new(PageType::Agenda, 0);
        let items = vec![
            BulletItem::with_en("Intro"),
            BulletItem::with_en("Findings"),
            BulletItem::with_en("Next steps"),
        ];
        page.content.insert(
            "items".into(),
            slidekit_model::ContentValue::Raw(subdoc::encode(&items)),
        );

        let tree = render(&page, Language::En, &theme);
        // Background + title + (number, text) per item
        let texts: Vec<_> = tree
            .nodes
            .iter()
            .filter(|n| matches!(n, VisualNode::Text { .. }))
            .collect();
        assert_eq!(texts.len(), 1 + items.len() * 2);
    }
}
