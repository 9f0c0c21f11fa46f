//! End-to-end render scenarios across model and renderer.

use slidekit_model::subdoc::{self, TableColumn, TableRow};
use slidekit_model::{ContentValue, Language, Page, PageType, Presentation};
use slidekit_render::constants::{BASE_TABLE_FONT, TABLE_HEADER_HEIGHT};
use slidekit_render::{fit_table, render_page, RenderTheme};

fn data_table_page(columns: usize, rows: usize) -> Page {
    let mut page = Page::new(PageType::DataTable, 1);
    let cols: Vec<TableColumn> = (0..columns).map(|_| TableColumn::new()).collect();
    let body: Vec<TableRow> = (0..rows).map(|_| TableRow::blank(columns)).collect();
    page.content
        .insert("columns".into(), ContentValue::Raw(subdoc::encode(&cols)));
    page.content
        .insert("rows".into(), ContentValue::Raw(subdoc::encode(&body)));
    page
}

/// The documented growth scenario: a deck with a cover page gains a
/// 5-column data table; at 9 rows the base font survives, the 10th row
/// tips the table into degrade.
#[test]
fn table_degrades_exactly_at_the_tenth_row() {
    let mut deck = Presentation::new("Quarterly", "business");
    assert_eq!(deck.pages.len(), 1);

    deck.pages.push(data_table_page(5, 9));
    assert!(deck.orders_are_dense());

    // 60 + 9 * 40 = 420 <= 421: no degrade
    let fit = fit_table(9, false);
    assert!(!fit.degraded);
    assert_eq!(fit.font_size, BASE_TABLE_FONT);

    // 60 + 10 * 40 = 460 > 421: floor(361/10) = 36, font floor(12*36/40) = 10
    let fit = fit_table(10, false);
    assert!(fit.degraded);
    assert_eq!(fit.row_height, 36);
    assert_eq!(fit.font_size, 10);

    // And the rendered tree uses the degraded sizes
    let theme = RenderTheme::default();
    let tree = render_page(&data_table_page(5, 10), Language::En, &theme);
    let fonts: Vec<u32> = tree
        .nodes
        .iter()
        .filter_map(|n| match n {
            slidekit_render::VisualNode::Text { font_size, .. } => Some(*font_size),
            _ => None,
        })
        .collect();
    assert!(fonts.contains(&10));
    assert!(!fonts.contains(&BASE_TABLE_FONT));
}

#[test]
fn header_band_height_is_fixed() {
    let theme = RenderTheme::default();
    let tree = render_page(&data_table_page(3, 3), Language::En, &theme);

    let header_heights: Vec<f32> = tree
        .nodes
        .iter()
        .filter_map(|n| match n {
            slidekit_render::VisualNode::Frame { rect, fill: Some(f), .. }
                if f == &theme.table.header_fill =>
            {
                Some(rect.height)
            }
            _ => None,
        })
        .collect();
    assert_eq!(header_heights.len(), 3);
    assert!(header_heights
        .iter()
        .all(|h| *h == TABLE_HEADER_HEIGHT as f32));
}

#[test]
fn render_is_pure_same_input_same_tree() {
    let theme = RenderTheme::default();
    let page = data_table_page(4, 6);
    let a = render_page(&page, Language::ZhCn, &theme);
    let b = render_page(&page, Language::ZhCn, &theme);
    assert_eq!(a, b);
}

#[test]
fn sub_document_round_trip_is_structurally_equal() {
    let rows: Vec<TableRow> = (0..3).map(|_| TableRow::blank(4)).collect();
    let json = subdoc::encode(&rows);
    let back: Vec<TableRow> = subdoc::decode_or_default(&json);
    assert_eq!(back, rows);
}
