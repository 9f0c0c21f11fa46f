//! Presentation aggregate.
//!
//! A presentation is an ordered deck of typed pages plus a glossary and
//! bookkeeping metadata. Page `order` values always form a dense
//! `0..len` permutation; the mutating operation is responsible for
//! renumbering, never a deferred cleanup pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::field::LocalizedText;
use crate::page::{Page, PageType};

/// Fixed slide canvas size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// The one canvas size every template renders to
pub const CANVAS: Dimensions = Dimensions {
    width: 960,
    height: 540,
};

/// Creation/modification stamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationMeta {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PresentationMeta {
    fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }
}

/// A glossary term shared across the deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub id: String,
    pub term: LocalizedText,
    pub note: LocalizedText,
}

impl GlossaryEntry {
    pub fn new(term: LocalizedText) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            term,
            note: LocalizedText::default(),
        }
    }
}

/// A complete presentation document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub id: String,
    pub name: String,
    pub category: String,
    pub dimensions: Dimensions,
    pub pages: Vec<Page>,
    #[serde(default)]
    pub glossary: Vec<GlossaryEntry>,
    pub metadata: PresentationMeta,
}

impl Presentation {
    /// Create a presentation with a single cover page
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            category: category.into(),
            dimensions: CANVAS,
            pages: vec![Page::new(PageType::Cover, 0)],
            glossary: Vec::new(),
            metadata: PresentationMeta::now(),
        }
    }

    /// Refresh `updated_at`; called by every content-mutating operation
    pub fn touch(&mut self) {
        self.metadata.updated_at = Utc::now();
    }

    /// Find a page by id
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Find a page's index by id
    pub fn page_index(&self, id: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.id == id)
    }

    /// Whether `order` values are the dense permutation `0..len`.
    ///
    /// Pages are kept sorted by order, so dense means `pages[i].order == i`.
    pub fn orders_are_dense(&self) -> bool {
        self.pages.iter().enumerate().all(|(i, p)| p.order == i)
    }
}
