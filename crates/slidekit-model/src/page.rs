//! Pages and per-type default content.
//!
//! A page is a typed content dictionary: string keys map to either a
//! trilingual [`TranslatableField`] or a raw string (plain scalars,
//! mode flags, and JSON-encoded sub-document arrays). Factory functions
//! produce fully populated, well-shaped defaults for every page type so
//! consumers never see a missing required key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::field::TranslatableField;
use crate::subdoc::{
    self, BarDatum, BeforeAfterPair, BulletItem, CardRecord, FaqEntry, FlowArrow, FlowNode,
    Footnote, GalleryPhoto, KpiRecord, LegendItem, MatrixItem, ProcessStep, TableColumn, TableRow,
    TeamMember, TimelineEntry,
};

/// The kind of slide a page renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageType {
    Cover,
    Agenda,
    SectionDivider,
    BulletList,
    TwoColumn,
    DataTable,
    ComparisonTable,
    Timeline,
    FlowChart,
    BeforeAfter,
    PhotoGallery,
    FullImage,
    BarChart,
    KpiSummary,
    CardGrid,
    TeamIntro,
    Quote,
    ProcessSteps,
    Faq,
    MatrixChart,
    VideoEmbed,
    Closing,
}

impl PageType {
    /// Every page type, in palette order
    pub const ALL: [PageType; 22] = [
        PageType::Cover,
        PageType::Agenda,
        PageType::SectionDivider,
        PageType::BulletList,
        PageType::TwoColumn,
        PageType::DataTable,
        PageType::ComparisonTable,
        PageType::Timeline,
        PageType::FlowChart,
        PageType::BeforeAfter,
        PageType::PhotoGallery,
        PageType::FullImage,
        PageType::BarChart,
        PageType::KpiSummary,
        PageType::CardGrid,
        PageType::TeamIntro,
        PageType::Quote,
        PageType::ProcessSteps,
        PageType::Faq,
        PageType::MatrixChart,
        PageType::VideoEmbed,
        PageType::Closing,
    ];

    /// Get the wire/tag form (e.g., "data-table")
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Agenda => "agenda",
            Self::SectionDivider => "section-divider",
            Self::BulletList => "bullet-list",
            Self::TwoColumn => "two-column",
            Self::DataTable => "data-table",
            Self::ComparisonTable => "comparison-table",
            Self::Timeline => "timeline",
            Self::FlowChart => "flow-chart",
            Self::BeforeAfter => "before-after",
            Self::PhotoGallery => "photo-gallery",
            Self::FullImage => "full-image",
            Self::BarChart => "bar-chart",
            Self::KpiSummary => "kpi-summary",
            Self::CardGrid => "card-grid",
            Self::TeamIntro => "team-intro",
            Self::Quote => "quote",
            Self::ProcessSteps => "process-steps",
            Self::Faq => "faq",
            Self::MatrixChart => "matrix-chart",
            Self::VideoEmbed => "video-embed",
            Self::Closing => "closing",
        }
    }

    /// Parse from the wire/tag form
    pub fn from_tag(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.tag() == s)
    }
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for PageType {
    type Err = UnknownPageType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownPageType(s.to_string()))
    }
}

/// Error returned when parsing an unrecognized page-type tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPageType(pub String);

impl std::fmt::Display for UnknownPageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown page type: {}", self.0)
    }
}

impl std::error::Error for UnknownPageType {}

/// A value in a page's content dictionary.
///
/// `Field` carries trilingual text with translation statuses; `Raw`
/// carries everything else - plain scalars, enum-like mode flags, and
/// JSON-encoded sub-document arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentValue {
    Field(TranslatableField),
    Raw(String),
}

impl ContentValue {
    /// View as a translatable field, if it is one
    pub fn as_field(&self) -> Option<&TranslatableField> {
        match self {
            Self::Field(field) => Some(field),
            Self::Raw(_) => None,
        }
    }

    /// View as a raw string, if it is one
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Raw(raw) => Some(raw),
            Self::Field(_) => None,
        }
    }
}

impl From<TranslatableField> for ContentValue {
    fn from(field: TranslatableField) -> Self {
        Self::Field(field)
    }
}

impl From<String> for ContentValue {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<&str> for ContentValue {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

/// One page of a presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Opaque stable id
    pub id: String,

    /// 0-based position; always a dense permutation across the deck
    pub order: usize,

    /// The page's slide kind
    #[serde(rename = "type")]
    pub page_type: PageType,

    /// Content dictionary, fully populated by the type's factory
    pub content: BTreeMap<String, ContentValue>,
}

impl Page {
    /// Create a page of the given type with well-formed default content
    pub fn new(page_type: PageType, order: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            order,
            page_type,
            content: default_content(page_type),
        }
    }

    /// Get a content value by key
    pub fn get(&self, key: &str) -> Option<&ContentValue> {
        self.content.get(key)
    }

    /// Get a translatable field by key; `None` if absent or raw
    pub fn field(&self, key: &str) -> Option<&TranslatableField> {
        self.content.get(key).and_then(ContentValue::as_field)
    }

    /// Get a raw string by key; `None` if absent or a field
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.content.get(key).and_then(ContentValue::as_raw)
    }
}

fn field(en: &str) -> ContentValue {
    ContentValue::Field(TranslatableField::from_en(en))
}

fn empty_field() -> ContentValue {
    ContentValue::Field(TranslatableField::empty())
}

fn json<T: Serialize>(records: &[T]) -> ContentValue {
    ContentValue::Raw(subdoc::encode(records))
}

/// Build the default content dictionary for a page type.
///
/// Defaults are empty-but-well-shaped: every key a renderer or editor
/// reads exists, sub-document arrays hold the minimum viable records,
/// and nothing is left to be lazily initialized later.
pub fn default_content(page_type: PageType) -> BTreeMap<String, ContentValue> {
    let mut content = BTreeMap::new();
    match page_type {
        PageType::Cover => {
            content.insert("title".into(), empty_field());
            content.insert("subtitle".into(), empty_field());
            content.insert("presenter".into(), empty_field());
            content.insert("date".into(), ContentValue::Raw(String::new()));
            content.insert("logoKey".into(), ContentValue::Raw(String::new()));
        }
        PageType::Agenda => {
            content.insert("title".into(), field("Agenda"));
            content.insert("items".into(), json(&[BulletItem::new()]));
        }
        PageType::SectionDivider => {
            content.insert("title".into(), empty_field());
            content.insert("sectionNumber".into(), ContentValue::Raw("1".into()));
        }
        PageType::BulletList => {
            content.insert("title".into(), empty_field());
            content.insert("bullets".into(), json(&[BulletItem::new()]));
        }
        PageType::TwoColumn => {
            content.insert("title".into(), empty_field());
            content.insert("leftHeading".into(), empty_field());
            content.insert("rightHeading".into(), empty_field());
            content.insert("leftBullets".into(), json(&[BulletItem::new()]));
            content.insert("rightBullets".into(), json(&[BulletItem::new()]));
        }
        PageType::DataTable => {
            let columns = vec![TableColumn::new(), TableColumn::new(), TableColumn::new()];
            let rows = vec![
                TableRow::blank(columns.len()),
                TableRow::blank(columns.len()),
                TableRow::blank(columns.len()),
            ];
            content.insert("title".into(), empty_field());
            content.insert("columns".into(), json(&columns));
            content.insert("rows".into(), json(&rows));
            content.insert("footnotes".into(), json::<Footnote>(&[]));
            content.insert("showCitation".into(), ContentValue::Raw("false".into()));
            content.insert("citation".into(), empty_field());
        }
        PageType::ComparisonTable => {
            content.insert("title".into(), empty_field());
            content.insert("criterionLabel".into(), field("Criterion"));
            content.insert("leftLabel".into(), field("Option A"));
            content.insert("rightLabel".into(), field("Option B"));
            content.insert(
                "rows".into(),
                json(&[TableRow::blank(3), TableRow::blank(3)]),
            );
            content.insert("showCitation".into(), ContentValue::Raw("false".into()));
            content.insert("citation".into(), empty_field());
        }
        PageType::Timeline => {
            content.insert("title".into(), empty_field());
            content.insert(
                "entries".into(),
                json(&[TimelineEntry::new(), TimelineEntry::new()]),
            );
        }
        PageType::FlowChart => {
            let start = FlowNode::at(120.0, 220.0);
            let end = FlowNode::at(420.0, 220.0);
            let arrow = FlowArrow::between(start.id.clone(), end.id.clone());
            content.insert("title".into(), empty_field());
            content.insert("nodes".into(), json(&[start, end]));
            content.insert("arrows".into(), json(&[arrow]));
            content.insert("legend".into(), json::<LegendItem>(&[]));
        }
        PageType::BeforeAfter => {
            content.insert("title".into(), empty_field());
            content.insert("pairs".into(), json(&[BeforeAfterPair::new()]));
            content.insert("layoutMode".into(), ContentValue::Raw("2x2".into()));
            content.insert("arrowSize".into(), ContentValue::Raw("24".into()));
        }
        PageType::PhotoGallery => {
            content.insert("title".into(), empty_field());
            content.insert("photos".into(), json(&[GalleryPhoto::new()]));
        }
        PageType::FullImage => {
            content.insert("title".into(), empty_field());
            content.insert("imageKey".into(), ContentValue::Raw(String::new()));
            content.insert("caption".into(), empty_field());
        }
        PageType::BarChart => {
            content.insert("title".into(), empty_field());
            content.insert(
                "bars".into(),
                json(&[
                    BarDatum::with_value("A", 0.0),
                    BarDatum::with_value("B", 0.0),
                    BarDatum::with_value("C", 0.0),
                ]),
            );
            content.insert("unit".into(), empty_field());
        }
        PageType::KpiSummary => {
            content.insert("title".into(), empty_field());
            content.insert(
                "kpis".into(),
                json(&[KpiRecord::new(), KpiRecord::new(), KpiRecord::new()]),
            );
        }
        PageType::CardGrid => {
            content.insert("title".into(), empty_field());
            content.insert(
                "cards".into(),
                json(&[CardRecord::new(), CardRecord::new(), CardRecord::new()]),
            );
        }
        PageType::TeamIntro => {
            content.insert("title".into(), empty_field());
            content.insert("members".into(), json(&[TeamMember::new(), TeamMember::new()]));
        }
        PageType::Quote => {
            content.insert("quote".into(), empty_field());
            content.insert("attribution".into(), empty_field());
        }
        PageType::ProcessSteps => {
            content.insert("title".into(), empty_field());
            content.insert(
                "steps".into(),
                json(&[ProcessStep::new(), ProcessStep::new(), ProcessStep::new()]),
            );
        }
        PageType::Faq => {
            content.insert("title".into(), empty_field());
            content.insert("entries".into(), json(&[FaqEntry::new(), FaqEntry::new()]));
        }
        PageType::MatrixChart => {
            content.insert("title".into(), empty_field());
            content.insert("axisXLabel".into(), empty_field());
            content.insert("axisYLabel".into(), empty_field());
            content.insert("items".into(), json(&[MatrixItem::new()]));
        }
        PageType::VideoEmbed => {
            content.insert("title".into(), empty_field());
            content.insert("videoUrl".into(), ContentValue::Raw(String::new()));
            content.insert("caption".into(), empty_field());
        }
        PageType::Closing => {
            content.insert("title".into(), field("Thank you"));
            content.insert("message".into(), empty_field());
            content.insert("contact".into(), empty_field());
        }
    }
    content
}
