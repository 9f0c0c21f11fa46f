//! Visual tree data structures.
//!
//! A render produces a `VisualTree`: absolutely positioned nodes on the
//! fixed 960x540 canvas. The tree is the shared contract between the
//! preview path and the exporters - both consume the same resolved,
//! single-language output.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Shrink by `d` on every side
    pub fn inset(&self, d: f32) -> Self {
        Self {
            x: self.x + d,
            y: self.y + d,
            width: (self.width - 2.0 * d).max(0.0),
            height: (self.height - 2.0 * d).max(0.0),
        }
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// A run of text that is either plain or bold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    pub text: String,
    pub bold: bool,
}

impl TextSpan {
    /// Create a plain span
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// Create a bold span
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// One positioned element of a rendered slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum VisualNode {
    /// A filled and/or stroked box, optionally containing children
    Frame {
        rect: Rect,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fill: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        stroke: Option<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<VisualNode>,
    },

    /// A block of text made of plain/bold spans
    Text {
        rect: Rect,
        spans: Vec<TextSpan>,
        font_size: u32,
        color: String,
        #[serde(default)]
        align: TextAlign,
    },

    /// An image slot; `image_key` references the blob store
    Image {
        rect: Rect,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        image_key: Option<String>,
    },

    /// A straight connector line
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: String,
        #[serde(default)]
        dashed: bool,
    },
}

impl VisualNode {
    /// A single-span text node
    pub fn text(
        rect: Rect,
        text: impl Into<String>,
        font_size: u32,
        color: impl Into<String>,
    ) -> Self {
        Self::Text {
            rect,
            spans: vec![TextSpan::plain(text)],
            font_size,
            color: color.into(),
            align: TextAlign::Left,
        }
    }

    /// A text node from pre-parsed spans
    pub fn spans(
        rect: Rect,
        spans: Vec<TextSpan>,
        font_size: u32,
        color: impl Into<String>,
    ) -> Self {
        Self::Text {
            rect,
            spans,
            font_size,
            color: color.into(),
            align: TextAlign::Left,
        }
    }

    /// A plain filled box with no children
    pub fn box_fill(rect: Rect, fill: impl Into<String>) -> Self {
        Self::Frame {
            rect,
            fill: Some(fill.into()),
            stroke: None,
            children: Vec::new(),
        }
    }

    /// Set center alignment on a text node; other nodes pass through
    pub fn centered(mut self) -> Self {
        if let Self::Text { align, .. } = &mut self {
            *align = TextAlign::Center;
        }
        self
    }
}

/// A fully rendered slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualTree {
    pub width: u32,
    pub height: u32,
    pub nodes: Vec<VisualNode>,
}

impl VisualTree {
    /// An empty tree on the standard canvas
    pub fn canvas() -> Self {
        Self {
            width: crate::constants::CANVAS_WIDTH,
            height: crate::constants::CANVAS_HEIGHT,
            nodes: Vec::new(),
        }
    }

    /// Append a node
    pub fn push(&mut self, node: VisualNode) {
        self.nodes.push(node);
    }

    /// Total node count including nested frames
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[VisualNode]) -> usize {
            nodes
                .iter()
                .map(|n| match n {
                    VisualNode::Frame { children, .. } => 1 + count(children),
                    _ => 1,
                })
                .sum()
        }
        count(&self.nodes)
    }
}
