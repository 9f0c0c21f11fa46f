//! Data table template.
//!
//! The table fits itself into a fixed vertical budget: when the row
//! count would overflow, row height and font degrade together per
//! [`crate::fit`]. Missing translations render the visible
//! `[no translation]` placeholder so gaps surface in review.

use slidekit_model::subdoc::{self, Footnote, TableColumn, TableRow};
use slidekit_model::{Language, Page};

use crate::constants::{
    CAPTION_FONT, CONTENT_WIDTH, CONTENT_X, CONTENT_Y, TABLE_HEADER_HEIGHT,
};
use crate::fit;
use crate::markup;
use crate::resolve;
use crate::theme::RenderTheme;
use crate::tree::{Rect, VisualNode, VisualTree};

const CELL_TEXT_INSET: f32 = 8.0;
const FOOTNOTE_LINE_HEIGHT: f32 = 16.0;

/// Split the content width into per-column widths by weight
fn column_widths(columns: &[TableColumn]) -> Vec<f32> {
    let weights: Vec<f32> = columns
        .iter()
        .map(|c| c.width.unwrap_or(1).max(1) as f32)
        .collect();
    let total: f32 = weights.iter().sum();
    weights
        .iter()
        .map(|w| w / total * CONTENT_WIDTH)
        .collect()
}

pub(super) fn render(page: &Page, lang: Language, theme: &RenderTheme) -> VisualTree {
    let mut tree = super::base_slide(page, lang, theme);

    let columns: Vec<TableColumn> =
        subdoc::decode_or_default(page.raw("columns").unwrap_or_default());
    let rows: Vec<TableRow> = subdoc::decode_or_default(page.raw("rows").unwrap_or_default());
    let footnotes: Vec<Footnote> =
        subdoc::decode_or_default(page.raw("footnotes").unwrap_or_default());
    let show_citation = page.raw("showCitation") == Some("true");

    if columns.is_empty() {
        return tree;
    }

    let table_fit = fit::fit_table(rows.len(), show_citation);
    let widths = column_widths(&columns);
    let header_height = TABLE_HEADER_HEIGHT as f32;
    let row_height = table_fit.row_height as f32;

    // Header row
    let mut x = CONTENT_X;
    for (column, width) in columns.iter().zip(&widths) {
        let cell = Rect::new(x, CONTENT_Y, *width, header_height);
        tree.push(VisualNode::box_fill(cell, theme.table.header_fill.clone()));
        tree.push(
            VisualNode::text(
                cell.inset(CELL_TEXT_INSET),
                resolve::local_text_or_placeholder(&column.heading, lang),
                table_fit.font_size,
                theme.table.header_text.clone(),
            )
            .centered(),
        );
        x += width;
    }

    // Body rows with alternating stripe
    let body_y = CONTENT_Y + header_height;
    for (r, row) in rows.iter().enumerate() {
        let y = body_y + r as f32 * row_height;
        if r % 2 == 1 {
            tree.push(VisualNode::box_fill(
                Rect::new(CONTENT_X, y, CONTENT_WIDTH, row_height),
                theme.table.row_stripe.clone(),
            ));
        }
        let mut x = CONTENT_X;
        for (c, width) in widths.iter().enumerate() {
            if let Some(cell) = row.cells.get(c) {
                let text = resolve::local_text_or_placeholder(cell, lang);
                let mut spans = markup::parse_bold_spans(text);
                if row.highlights.get(c).copied().unwrap_or(false) {
                    for span in &mut spans {
                        span.bold = true;
                    }
                }
                tree.push(VisualNode::spans(
                    Rect::new(x, y, *width, row_height).inset(CELL_TEXT_INSET),
                    spans,
                    table_fit.font_size,
                    theme.text.clone(),
                ));
            }
            x += width;
        }
    }

    // Citation row directly under the body
    let mut y = body_y + rows.len() as f32 * row_height;
    if show_citation {
        if let Some(citation) = page.field("citation") {
            tree.push(VisualNode::text(
                Rect::new(
                    CONTENT_X,
                    y,
                    CONTENT_WIDTH,
                    crate::constants::CITATION_ROW_HEIGHT as f32,
                ),
                resolve::field_text_or_placeholder(citation, lang),
                10,
                theme.muted.clone(),
            ));
        }
        y += crate::constants::CITATION_ROW_HEIGHT as f32;
    }

    // Footnotes
    for (i, footnote) in footnotes.iter().enumerate() {
        tree.push(VisualNode::text(
            Rect::new(
                CONTENT_X,
                y + i as f32 * FOOTNOTE_LINE_HEIGHT,
                CONTENT_WIDTH,
                FOOTNOTE_LINE_HEIGHT,
            ),
            format!("{}. {}", i + 1, resolve::local_text(&footnote.text, lang)),
            CAPTION_FONT,
            theme.muted.clone(),
        ));
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_model::{ContentValue, PageType};

    fn page_with_rows(row_count: usize) -> Page {
        let mut page = Page::new(PageType::DataTable, 0);
        let columns = vec![TableColumn::with_en("A"), TableColumn::with_en("B")];
        let rows: Vec<TableRow> = (0..row_count).map(|_| TableRow::blank(2)).collect();
        page.content.insert(
            "columns".into(),
            ContentValue::Raw(subdoc::encode(&columns)),
        );
        page.content
            .insert("rows".into(), ContentValue::Raw(subdoc::encode(&rows)));
        page
    }

    fn body_font_sizes(tree: &VisualTree) -> Vec<u32> {
        tree.nodes
            .iter()
            .filter_map(|n| match n {
                VisualNode::Text { font_size, .. } => Some(*font_size),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_nine_rows_keep_base_font() {
        let theme = RenderTheme::default();
        let tree = render(&page_with_rows(9), Language::En, &theme);
        assert!(body_font_sizes(&tree).contains(&12));
        assert!(!body_font_sizes(&tree).contains(&10));
    }

    #[test]
    fn test_ten_rows_degrade_font() {
        let theme = RenderTheme::default();
        let tree = render(&page_with_rows(10), Language::En, &theme);
        assert!(body_font_sizes(&tree).contains(&10));
    }

    #[test]
    fn test_missing_translation_placeholder_is_visible() {
        let theme = RenderTheme::default();
        let tree = render(&page_with_rows(2), Language::ZhTw, &theme);
        let json = serde_json::to_string(&tree).unwrap();
        assert!(json.contains(resolve::NO_TRANSLATION));
    }

    #[test]
    fn test_column_weights_divide_width() {
        let mut columns = vec![TableColumn::with_en("wide"), TableColumn::with_en("narrow")];
        columns[0].width = Some(3);
        let widths = column_widths(&columns);
        assert_eq!(widths[0], CONTENT_WIDTH * 0.75);
        assert_eq!(widths[1], CONTENT_WIDTH * 0.25);
    }

    #[test]
    fn test_empty_columns_render_title_only() {
        let theme = RenderTheme::default();
        let mut page = Page::new(PageType::DataTable, 0);
        page.content
            .insert("columns".into(), ContentValue::Raw("[]".into()));
        let tree = render(&page, Language::En, &theme);
        // Background only; default title is empty and the table is skipped
        assert_eq!(tree.nodes.len(), 1);
    }
}
