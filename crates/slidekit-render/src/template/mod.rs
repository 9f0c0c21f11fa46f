//! Per-page-type slide templates.
//!
//! `render_page` dispatches on the page type. Roughly a dozen types
//! have a wired template; the rest fall through to a full-canvas
//! placeholder box so an unfinished deck still previews end to end.

use slidekit_model::{Language, Page, PageType};

use crate::constants::{TITLE_AREA, TITLE_FONT};
use crate::resolve;
use crate::theme::RenderTheme;
use crate::tree::{VisualNode, VisualTree};

mod agenda;
mod bar_chart;
mod before_after;
mod bullets;
mod closing;
mod comparison;
mod cover;
mod data_table;
mod divider;
mod fallback;
mod flowchart;
mod gallery;
mod quote;
mod timeline;

/// Render one page in one language against a theme
pub fn render_page(page: &Page, lang: Language, theme: &RenderTheme) -> VisualTree {
    match page.page_type {
        PageType::Cover => cover::render(page, lang, theme),
        PageType::Agenda => agenda::render(page, lang, theme),
        PageType::SectionDivider => divider::render(page, lang, theme),
        PageType::BulletList => bullets::render(page, lang, theme),
        PageType::DataTable => data_table::render(page, lang, theme),
        PageType::ComparisonTable => comparison::render(page, lang, theme),
        PageType::Timeline => timeline::render(page, lang, theme),
        PageType::FlowChart => flowchart::render(page, lang, theme),
        PageType::BeforeAfter => before_after::render(page, lang, theme),
        PageType::PhotoGallery => gallery::render(page, lang, theme),
        PageType::BarChart => bar_chart::render(page, lang, theme),
        PageType::Quote => quote::render(page, lang, theme),
        PageType::Closing => closing::render(page, lang, theme),
        _ => fallback::render(page, theme),
    }
}

/// Whether a page type has a dedicated template
pub fn has_template(page_type: PageType) -> bool {
    !matches!(
        page_type,
        PageType::TwoColumn
            | PageType::FullImage
            | PageType::KpiSummary
            | PageType::CardGrid
            | PageType::TeamIntro
            | PageType::ProcessSteps
            | PageType::Faq
            | PageType::MatrixChart
            | PageType::VideoEmbed
    )
}

/// A slide background plus the standard title strip, shared by most
/// templates. Returns the tree with the background already pushed.
fn base_slide(page: &Page, lang: Language, theme: &RenderTheme) -> VisualTree {
    let mut tree = VisualTree::canvas();
    tree.push(VisualNode::box_fill(
        crate::tree::Rect::new(0.0, 0.0, 960.0, 540.0),
        theme.background.clone(),
    ));
    let title = resolve::page_text(page, "title", lang);
    if !title.is_empty() {
        tree.push(VisualNode::text(
            TITLE_AREA,
            title,
            TITLE_FONT,
            theme.text.clone(),
        ));
    }
    tree
}
