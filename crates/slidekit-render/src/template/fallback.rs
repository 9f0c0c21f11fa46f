//! Fallback for page types without a wired template.
//!
//! A defined, non-crashing placeholder: a full-canvas box naming the
//! missing preview, never an error state.

use slidekit_model::Page;

use crate::constants::SUBTITLE_FONT;
use crate::theme::RenderTheme;
use crate::tree::{Rect, VisualNode, VisualTree};

pub(super) fn render(page: &Page, theme: &RenderTheme) -> VisualTree {
    let mut tree = VisualTree::canvas();
    tree.push(VisualNode::Frame {
        rect: Rect::new(0.0, 0.0, 960.0, 540.0),
        fill: Some(theme.surface.clone()),
        stroke: Some(theme.muted.clone()),
        children: vec![
            VisualNode::text(
                Rect::new(0.0, 250.0, 960.0, 40.0),
                format!("Preview not available for \"{}\"", page.page_type),
                SUBTITLE_FONT,
                theme.muted.clone(),
            )
            .centered(),
        ],
    });
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_model::PageType;

    #[test]
    fn test_placeholder_names_the_type() {
        let theme = RenderTheme::default();
        let page = Page::new(PageType::KpiSummary, 0);
        let tree = render(&page, &theme);
        let json = serde_json::to_string(&tree).unwrap();
        assert!(json.contains("kpi-summary"));
        assert!(json.contains("Preview not available"));
    }
}
