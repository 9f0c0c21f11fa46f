//! Photo gallery template.

use slidekit_model::subdoc::{self, GalleryPhoto};
use slidekit_model::{Language, Page};

use crate::constants::{CAPTION_FONT, CELL_GAP, CONTENT_HEIGHT, CONTENT_WIDTH, CONTENT_X, CONTENT_Y};
use crate::resolve;
use crate::theme::RenderTheme;
use crate::tree::{Rect, VisualNode, VisualTree};

const CAPTION_HEIGHT: f32 = 18.0;
const MAX_COLUMNS: usize = 4;

pub(super) fn render(page: &Page, lang: Language, theme: &RenderTheme) -> VisualTree {
    let mut tree = super::base_slide(page, lang, theme);
    let photos: Vec<GalleryPhoto> =
        subdoc::decode_or_default(page.raw("photos").unwrap_or_default());
    if photos.is_empty() {
        return tree;
    }

    let cols = photos.len().min(MAX_COLUMNS);
    let rows = photos.len().div_ceil(cols);
    let cell_width = (CONTENT_WIDTH - (cols as f32 - 1.0) * CELL_GAP) / cols as f32;
    let cell_height = (CONTENT_HEIGHT - (rows as f32 - 1.0) * CELL_GAP) / rows as f32;

    for (i, photo) in photos.iter().enumerate() {
        let col = i % cols;
        let row = i / cols;
        let x = CONTENT_X + col as f32 * (cell_width + CELL_GAP);
        let y = CONTENT_Y + row as f32 * (cell_height + CELL_GAP);
        tree.push(VisualNode::Image {
            rect: Rect::new(x, y, cell_width, cell_height - CAPTION_HEIGHT),
            image_key: (!photo.image_key.is_empty()).then(|| photo.image_key.clone()),
        });
        tree.push(
            VisualNode::text(
                Rect::new(x, y + cell_height - CAPTION_HEIGHT, cell_width, CAPTION_HEIGHT),
                resolve::local_text(&photo.caption, lang),
                CAPTION_FONT,
                theme.muted.clone(),
            )
            .centered(),
        );
    }
    tree
}
