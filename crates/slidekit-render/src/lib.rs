//! # slidekit-render
//!
//! Template renderers for slidekit. Every renderer is a pure function
//! `(page, language, theme) -> VisualTree`: no IO, no ambient state,
//! the same inputs always produce the same absolutely positioned
//! 960x540 layout. Exporters consume the identical resolved output.
//!
//! Behaviors with real algorithmic content live in dedicated modules
//! so they stay independently testable:
//!
//! - [`markup`]: the `**bold**` inline splitter (the only rich-text
//!   feature system-wide).
//! - [`fit`]: degrade-to-fit table row/font sizing.
//! - [`grid`]: before/after pair grid geometry.
//! - [`chart`]: bar-chart plot geometry.
//!
//! Page types without a wired template render a full-canvas
//! "Preview not available" box - a defined fallback, not an error.
//!
//! ## Example
//!
//! ```rust
//! use slidekit_model::{Language, Page, PageType};
//! use slidekit_render::{render_page, RenderTheme};
//!
//! let page = Page::new(PageType::Cover, 0);
//! let tree = render_page(&page, Language::En, &RenderTheme::default());
//! assert_eq!((tree.width, tree.height), (960, 540));
//! ```

pub mod chart;
pub mod error;
pub mod fit;
pub mod grid;
pub mod markup;
pub mod resolve;
pub mod template;
pub mod theme;
pub mod tree;

// Re-exports
pub use error::{RenderError, Result};
pub use fit::{fit_rows, fit_table, TableFit};
pub use grid::{grid_dimensions, layout_pairs, PairCell, PairLayoutMode};
pub use markup::parse_bold_spans;
pub use template::render_page;
pub use theme::{RenderTheme, TableTheme};
pub use tree::{Rect, TextAlign, TextSpan, VisualNode, VisualTree};

/// Layout constants shared by the templates
pub mod constants {
    use crate::tree::Rect;

    /// Canvas width in pixels
    pub const CANVAS_WIDTH: u32 = 960;

    /// Canvas height in pixels
    pub const CANVAS_HEIGHT: u32 = 540;

    /// Left edge of the standard content area
    pub const CONTENT_X: f32 = 40.0;

    /// Top edge of the standard content area
    pub const CONTENT_Y: f32 = 90.0;

    /// Width of the standard content area
    pub const CONTENT_WIDTH: f32 = 880.0;

    /// Height of the standard content area
    pub const CONTENT_HEIGHT: f32 = 420.0;

    /// The standard content area below the title strip
    pub const CONTENT_AREA: Rect =
        Rect::new(CONTENT_X, CONTENT_Y, CONTENT_WIDTH, CONTENT_HEIGHT);

    /// The title strip across the top of most layouts
    pub const TITLE_AREA: Rect = Rect::new(40.0, 24.0, 880.0, 48.0);

    /// Gap between grid cells
    pub const CELL_GAP: f32 = 8.0;

    /// Padding flanking the before/after arrow gutter
    pub const SLOT_PADDING: f32 = 4.0;

    /// Default before/after arrow glyph size
    pub const DEFAULT_ARROW_SIZE: f32 = 24.0;

    /// Vertical pixel budget for a table (header + body rows)
    pub const TABLE_BUDGET: u32 = 421;

    /// Fixed table header row height
    pub const TABLE_HEADER_HEIGHT: u32 = 60;

    /// Fixed citation row height, subtracted when a citation is shown
    pub const CITATION_ROW_HEIGHT: u32 = 25;

    /// Desired body row height before any degrade
    pub const BASE_ROW_HEIGHT: u32 = 40;

    /// Hard floor for degraded row height
    pub const MIN_ROW_HEIGHT: u32 = 28;

    /// Base table body font size
    pub const BASE_TABLE_FONT: u32 = 12;

    /// Hard floor for degraded font size
    pub const MIN_TABLE_FONT: u32 = 9;

    /// Slide title font size
    pub const TITLE_FONT: u32 = 28;

    /// Subtitle / section heading font size
    pub const SUBTITLE_FONT: u32 = 18;

    /// Body text font size
    pub const BODY_FONT: u32 = 16;

    /// Caption / footnote font size
    pub const CAPTION_FONT: u32 = 12;
}
