//! Section divider template.

use slidekit_model::{Language, Page};

use crate::resolve;
use crate::theme::RenderTheme;
use crate::tree::{Rect, VisualNode, VisualTree};

const NUMBER_RECT: Rect = Rect::new(80.0, 150.0, 800.0, 90.0);
const TITLE_RECT: Rect = Rect::new(80.0, 250.0, 800.0, 70.0);

pub(super) fn render(page: &Page, lang: Language, theme: &RenderTheme) -> VisualTree {
    let mut tree = VisualTree::canvas();
    // Dividers invert the palette: accent background, light text
    tree.push(VisualNode::box_fill(
        Rect::new(0.0, 0.0, 960.0, 540.0),
        theme.accent.clone(),
    ));

    if let Some(number) = page.raw("sectionNumber").filter(|n| !n.is_empty()) {
        tree.push(
            VisualNode::text(NUMBER_RECT, format!("{number:0>2}"), 64, "#FFFFFF").centered(),
        );
    }
    tree.push(
        VisualNode::text(
            TITLE_RECT,
            resolve::page_text(page, "title", lang),
            36,
            "#FFFFFF",
        )
        .centered(),
    );
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_model::PageType;

    #[test]
    fn test_section_number_is_zero_padded() {
        let theme = RenderTheme::default();
        let page = Page::new(PageType::SectionDivider, 0);
        let tree = render(&page, Language::En, &theme);
        let json = serde_json::to_string(&tree).unwrap();
        assert!(json.contains("01"));
    }
}
