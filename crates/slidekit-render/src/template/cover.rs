//! Cover slide template.

use slidekit_model::{Language, Page};

use crate::constants::SUBTITLE_FONT;
use crate::resolve;
use crate::theme::RenderTheme;
use crate::tree::{Rect, VisualNode, VisualTree};

const TITLE_RECT: Rect = Rect::new(80.0, 186.0, 800.0, 80.0);
const SUBTITLE_RECT: Rect = Rect::new(80.0, 276.0, 800.0, 40.0);
const PRESENTER_RECT: Rect = Rect::new(80.0, 428.0, 800.0, 26.0);
const DATE_RECT: Rect = Rect::new(80.0, 458.0, 800.0, 22.0);
const LOGO_RECT: Rect = Rect::new(40.0, 32.0, 120.0, 56.0);

pub(super) fn render(page: &Page, lang: Language, theme: &RenderTheme) -> VisualTree {
    let mut tree = VisualTree::canvas();
    tree.push(VisualNode::box_fill(
        Rect::new(0.0, 0.0, 960.0, 540.0),
        theme.background.clone(),
    ));
    // Accent rule above the title block
    tree.push(VisualNode::box_fill(
        Rect::new(80.0, 170.0, 120.0, 6.0),
        theme.accent.clone(),
    ));

    tree.push(
        VisualNode::text(
            TITLE_RECT,
            resolve::page_text(page, "title", lang),
            44,
            theme.text.clone(),
        )
        .centered(),
    );
    tree.push(
        VisualNode::text(
            SUBTITLE_RECT,
            resolve::page_text(page, "subtitle", lang),
            22,
            theme.muted.clone(),
        )
        .centered(),
    );
    tree.push(
        VisualNode::text(
            PRESENTER_RECT,
            resolve::page_text(page, "presenter", lang),
            SUBTITLE_FONT,
            theme.text.clone(),
        )
        .centered(),
    );
    if let Some(date) = page.raw("date").filter(|d| !d.is_empty()) {
        tree.push(
            VisualNode::text(DATE_RECT, date, 14, theme.muted.clone()).centered(),
        );
    }
    if let Some(logo_key) = page.raw("logoKey").filter(|k| !k.is_empty()) {
        tree.push(VisualNode::Image {
            rect: LOGO_RECT,
            image_key: Some(logo_key.to_string()),
        });
    }
    tree
}
