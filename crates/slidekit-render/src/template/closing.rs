//! Closing slide template.

use slidekit_model::{Language, Page};

use crate::resolve;
use crate::theme::RenderTheme;
use crate::tree::{Rect, VisualNode, VisualTree};

const TITLE_RECT: Rect = Rect::new(80.0, 200.0, 800.0, 70.0);
const MESSAGE_RECT: Rect = Rect::new(80.0, 290.0, 800.0, 40.0);
const CONTACT_RECT: Rect = Rect::new(80.0, 440.0, 800.0, 24.0);

pub(super) fn render(page: &Page, lang: Language, theme: &RenderTheme) -> VisualTree {
    let mut tree = VisualTree::canvas();
    tree.push(VisualNode::box_fill(
        Rect::new(0.0, 0.0, 960.0, 540.0),
        theme.background.clone(),
    ));
    tree.push(
        VisualNode::text(
            TITLE_RECT,
            resolve::page_text(page, "title", lang),
            40,
            theme.text.clone(),
        )
        .centered(),
    );
    tree.push(
        VisualNode::text(
            MESSAGE_RECT,
            resolve::page_text(page, "message", lang),
            18,
            theme.muted.clone(),
        )
        .centered(),
    );
    tree.push(
        VisualNode::text(
            CONTACT_RECT,
            resolve::page_text(page, "contact", lang),
            14,
            theme.muted.clone(),
        )
        .centered(),
    );
    tree
}
