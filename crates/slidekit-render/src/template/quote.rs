//! Quote slide template.

use slidekit_model::{Language, Page};

use crate::markup;
use crate::resolve;
use crate::theme::RenderTheme;
use crate::tree::{Rect, VisualNode, VisualTree};

const MARK_RECT: Rect = Rect::new(80.0, 110.0, 80.0, 80.0);
const QUOTE_RECT: Rect = Rect::new(120.0, 190.0, 720.0, 160.0);
const ATTRIBUTION_RECT: Rect = Rect::new(120.0, 370.0, 720.0, 30.0);

pub(super) fn render(page: &Page, lang: Language, theme: &RenderTheme) -> VisualTree {
    let mut tree = VisualTree::canvas();
    tree.push(VisualNode::box_fill(
        Rect::new(0.0, 0.0, 960.0, 540.0),
        theme.background.clone(),
    ));
    tree.push(VisualNode::text(MARK_RECT, "\u{201C}", 96, theme.accent.clone()));
    tree.push(
        VisualNode::spans(
            QUOTE_RECT,
            markup::parse_bold_spans(&resolve::page_text(page, "quote", lang)),
            28,
            theme.text.clone(),
        )
        .centered(),
    );
    let attribution = resolve::page_text(page, "attribution", lang);
    if !attribution.is_empty() {
        tree.push(
            VisualNode::text(
                ATTRIBUTION_RECT,
                format!("\u{2014} {attribution}"),
                16,
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
    use slidekit_model::PageType;

    #[test]
    fn test_attribution_only_when_present() {
        let theme = RenderTheme::default();
        let page = Page::new(PageType::Quote, 0);
        let without = render(&page, Language::En, &theme).nodes.len();

        let mut page = page;
        page.content.insert(
            "attribution".into(),
            slidekit_model::ContentValue::Field(
                slidekit_model::TranslatableField::from_en("A. Reviewer"),
            ),
        );
        let with = render(&page, Language::En, &theme).nodes.len();
        assert_eq!(with, without + 1);
    }
}
