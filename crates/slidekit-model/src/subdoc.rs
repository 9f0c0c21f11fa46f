//! Sub-document record types.
//!
//! Page content stores list-shaped data (table rows, cards, timeline
//! entries, flow-chart nodes) as JSON-encoded arrays inside the content
//! dictionary. Every record carries a stable opaque `id` so editors can
//! address it independently of its position, and trilingual text via
//! [`LocalizedText`](crate::field::LocalizedText) without status
//! tracking.
//!
//! Decoding is permissive: a malformed array degrades to an empty
//! list rather than surfacing an error, so corrupt persisted state
//! never blocks editing.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::field::LocalizedText;

/// Generate a fresh opaque record id
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// A record stored inside a JSON-encoded sub-document array
pub trait SubdocRecord: Serialize + DeserializeOwned + Clone {
    /// Stable opaque identity of this record
    fn id(&self) -> &str;
}

/// Inclusive cardinality bounds for one sub-document list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

impl Bounds {
    pub const fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Whether a list of `len` records accepts one more
    pub fn can_add(&self, len: usize) -> bool {
        len < self.max
    }

    /// Whether a list of `len` records can lose one
    pub fn can_remove(&self, len: usize) -> bool {
        len > self.min
    }
}

/// Cardinality bounds per sub-document list
pub mod bounds {
    use super::Bounds;

    pub const AGENDA_ITEMS: Bounds = Bounds::new(1, 10);
    pub const BULLETS: Bounds = Bounds::new(1, 10);
    pub const TABLE_COLUMNS: Bounds = Bounds::new(1, 8);
    pub const TABLE_ROWS: Bounds = Bounds::new(1, 30);
    pub const FOOTNOTES: Bounds = Bounds::new(0, 6);
    pub const CARDS: Bounds = Bounds::new(1, 9);
    pub const TIMELINE_ENTRIES: Bounds = Bounds::new(2, 10);
    pub const FLOW_NODES: Bounds = Bounds::new(1, 12);
    pub const FLOW_ARROWS: Bounds = Bounds::new(0, 24);
    pub const LEGEND_ITEMS: Bounds = Bounds::new(0, 6);
    pub const PAIRS: Bounds = Bounds::new(1, 8);
    pub const PHOTOS: Bounds = Bounds::new(1, 16);
    pub const BARS: Bounds = Bounds::new(1, 12);
    pub const KPIS: Bounds = Bounds::new(1, 6);
    pub const TEAM_MEMBERS: Bounds = Bounds::new(1, 8);
    pub const PROCESS_STEPS: Bounds = Bounds::new(2, 8);
    pub const FAQ_ENTRIES: Bounds = Bounds::new(1, 8);
    pub const MATRIX_ITEMS: Bounds = Bounds::new(1, 12);
}

/// Decode a JSON-encoded sub-document array, degrading to empty.
///
/// Malformed JSON is logged and treated as an empty collection; it is
/// never an error. This is the single shared decode path for every
/// list-of-records consumer.
pub fn decode_or_default<T: DeserializeOwned>(json: &str) -> Vec<T> {
    if json.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str(json) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(%err, "malformed sub-document array, treating as empty");
            Vec::new()
        }
    }
}

/// Encode a sub-document array back to its JSON string form
pub fn encode<T: Serialize>(records: &[T]) -> String {
    serde_json::to_string(records).unwrap_or_else(|_| "[]".to_string())
}

macro_rules! impl_subdoc_record {
    ($($ty:ty),+ $(,)?) => {
        $(impl SubdocRecord for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })+
    };
}

/// A bullet line (also used for agenda items)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulletItem {
    pub id: String,
    pub text: LocalizedText,
    /// Nesting depth, 0 = top level
    #[serde(default)]
    pub indent: u8,
}

impl BulletItem {
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            text: LocalizedText::default(),
            indent: 0,
        }
    }

    pub fn with_en(text: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            text: LocalizedText::from_en(text),
            indent: 0,
        }
    }
}

impl Default for BulletItem {
    fn default() -> Self {
        Self::new()
    }
}

/// A data-table column heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub id: String,
    pub heading: LocalizedText,
    /// Relative width weight; `None` means evenly divided
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

impl TableColumn {
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            heading: LocalizedText::default(),
            width: None,
        }
    }

    pub fn with_en(heading: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            heading: LocalizedText::from_en(heading),
            width: None,
        }
    }
}

impl Default for TableColumn {
    fn default() -> Self {
        Self::new()
    }
}

/// A data-table body row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<LocalizedText>,
    /// Per-cell emphasis flags; empty means no highlights
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<bool>,
}

impl TableRow {
    /// A blank row with `columns` empty cells
    pub fn blank(columns: usize) -> Self {
        Self {
            id: new_record_id(),
            cells: vec![LocalizedText::default(); columns],
            highlights: Vec::new(),
        }
    }
}

/// A table footnote line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Footnote {
    pub id: String,
    pub text: LocalizedText,
}

impl Footnote {
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            text: LocalizedText::default(),
        }
    }
}

impl Default for Footnote {
    fn default() -> Self {
        Self::new()
    }
}

/// A content card (card grids, KPI-style callouts)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: String,
    pub heading: LocalizedText,
    pub body: LocalizedText,
    /// Accent color as a hex string, e.g. "#0F6CBD"
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl CardRecord {
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            heading: LocalizedText::default(),
            body: LocalizedText::default(),
            color: String::new(),
            icon: None,
        }
    }
}

impl Default for CardRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// A timeline entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub id: String,
    /// Display date/label, not parsed
    #[serde(default)]
    pub date: String,
    pub heading: LocalizedText,
    pub detail: LocalizedText,
}

impl TimelineEntry {
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            date: String::new(),
            heading: LocalizedText::default(),
            detail: LocalizedText::default(),
        }
    }
}

impl Default for TimelineEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// Shape of a flow-chart node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeShape {
    #[default]
    Rounded,
    Rect,
    Diamond,
}

/// A flow-chart node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
    pub id: String,
    pub label: LocalizedText,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub shape: NodeShape,
}

impl FlowNode {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            id: new_record_id(),
            label: LocalizedText::default(),
            x,
            y,
            width: 140.0,
            height: 56.0,
            color: String::new(),
            shape: NodeShape::default(),
        }
    }
}

/// Line style of a flow-chart arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArrowStyle {
    #[default]
    Solid,
    Dashed,
}

/// A flow-chart arrow connecting two nodes by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowArrow {
    pub id: String,
    /// Id of the node the arrow leaves from
    pub source_id: String,
    /// Id of the node the arrow points at
    pub target_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LocalizedText>,
    #[serde(default)]
    pub style: ArrowStyle,
}

impl FlowArrow {
    pub fn between(source_id: impl Into<String>, target_id: impl Into<String>) -> Self {
        Self {
            id: new_record_id(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            label: None,
            style: ArrowStyle::default(),
        }
    }

    /// Whether this arrow references the given node id at either end
    pub fn references(&self, node_id: &str) -> bool {
        self.source_id == node_id || self.target_id == node_id
    }
}

/// A flow-chart legend swatch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendItem {
    pub id: String,
    pub label: LocalizedText,
    #[serde(default)]
    pub color: String,
}

impl LegendItem {
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            label: LocalizedText::default(),
            color: String::new(),
        }
    }
}

impl Default for LegendItem {
    fn default() -> Self {
        Self::new()
    }
}

/// A before/after photo pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeforeAfterPair {
    pub id: String,
    /// Blob-store key of the "before" photo, empty until uploaded
    #[serde(default)]
    pub before_key: String,
    /// Blob-store key of the "after" photo, empty until uploaded
    #[serde(default)]
    pub after_key: String,
    pub caption: LocalizedText,
}

impl BeforeAfterPair {
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            before_key: String::new(),
            after_key: String::new(),
            caption: LocalizedText::default(),
        }
    }
}

impl Default for BeforeAfterPair {
    fn default() -> Self {
        Self::new()
    }
}

/// A gallery photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPhoto {
    pub id: String,
    #[serde(default)]
    pub image_key: String,
    pub caption: LocalizedText,
}

impl GalleryPhoto {
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            image_key: String::new(),
            caption: LocalizedText::default(),
        }
    }
}

impl Default for GalleryPhoto {
    fn default() -> Self {
        Self::new()
    }
}

/// One bar of a bar chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarDatum {
    pub id: String,
    pub label: LocalizedText,
    #[serde(default)]
    pub value: f64,
    #[serde(default)]
    pub color: String,
}

impl BarDatum {
    pub fn with_value(label_en: impl Into<String>, value: f64) -> Self {
        Self {
            id: new_record_id(),
            label: LocalizedText::from_en(label_en),
            value,
            color: String::new(),
        }
    }
}

/// A key-performance-indicator callout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiRecord {
    pub id: String,
    pub label: LocalizedText,
    /// Display value, e.g. "98.5%"
    #[serde(default)]
    pub value: String,
    /// Optional delta annotation, e.g. "+3.2"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<String>,
}

impl KpiRecord {
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            label: LocalizedText::default(),
            value: String::new(),
            delta: None,
        }
    }
}

impl Default for KpiRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// A team-intro member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    /// Person name, displayed verbatim in every language
    #[serde(default)]
    pub name: String,
    pub role: LocalizedText,
    #[serde(default)]
    pub photo_key: String,
}

impl TeamMember {
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            name: String::new(),
            role: LocalizedText::default(),
            photo_key: String::new(),
        }
    }
}

impl Default for TeamMember {
    fn default() -> Self {
        Self::new()
    }
}

/// A numbered process step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStep {
    pub id: String,
    pub heading: LocalizedText,
    pub detail: LocalizedText,
}

impl ProcessStep {
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            heading: LocalizedText::default(),
            detail: LocalizedText::default(),
        }
    }
}

impl Default for ProcessStep {
    fn default() -> Self {
        Self::new()
    }
}

/// A frequently-asked-question entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqEntry {
    pub id: String,
    pub question: LocalizedText,
    pub answer: LocalizedText,
}

impl FaqEntry {
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            question: LocalizedText::default(),
            answer: LocalizedText::default(),
        }
    }
}

impl Default for FaqEntry {
    fn default() -> Self {
        Self::new()
    }
}

/// A point placed on a 2x2 matrix chart, coordinates in 0..=1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixItem {
    pub id: String,
    pub label: LocalizedText,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
}

impl MatrixItem {
    pub fn new() -> Self {
        Self {
            id: new_record_id(),
            label: LocalizedText::default(),
            x: 0.5,
            y: 0.5,
        }
    }
}

impl Default for MatrixItem {
    fn default() -> Self {
        Self::new()
    }
}

impl_subdoc_record!(
    BulletItem,
    TableColumn,
    TableRow,
    Footnote,
    CardRecord,
    TimelineEntry,
    FlowNode,
    FlowArrow,
    LegendItem,
    BeforeAfterPair,
    GalleryPhoto,
    BarDatum,
    KpiRecord,
    TeamMember,
    ProcessStep,
    FaqEntry,
    MatrixItem,
);
