//! The content mutation store.
//!
//! Single source of truth for one open presentation. Every mutation is
//! copy-on-write: a changed page is a freshly built `Page` value and
//! the deck's page list is a freshly built `Vec`, never an in-place
//! edit. After each mutation the store stamps `updated_at` (for
//! content-mutating operations), persists best-effort, and notifies
//! subscribers with the new snapshot.

use serde::{Deserialize, Serialize};

use slidekit_model::{ContentValue, Direction, Language, Page, PageType, Presentation};

use crate::observer::StoreSubscriber;
use crate::persist::{PersistError, StatePersistence};

/// The full persisted store snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub presentation: Presentation,
    pub selected_page_id: Option<String>,
    pub preview_language: Language,
}

impl StoreState {
    /// A fresh untitled presentation with its cover page selected
    pub fn fresh(name: impl Into<String>, category: impl Into<String>) -> Self {
        let presentation = Presentation::new(name, category);
        let selected_page_id = presentation.pages.first().map(|p| p.id.clone());
        Self {
            presentation,
            selected_page_id,
            preview_language: Language::En,
        }
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::fresh("Untitled", "general")
    }
}

/// The content store: state, subscribers, and optional persistence
pub struct ContentStore {
    state: StoreState,
    subscribers: Vec<Box<dyn StoreSubscriber>>,
    persistence: Option<Box<dyn StatePersistence>>,
}

impl ContentStore {
    /// Create a store over a fresh default state, no persistence
    pub fn new() -> Self {
        Self::with_state(StoreState::default())
    }

    /// Create a store over an explicit state, no persistence
    pub fn with_state(state: StoreState) -> Self {
        Self {
            state,
            subscribers: Vec::new(),
            persistence: None,
        }
    }

    /// Create a store backed by a persistence slot.
    ///
    /// Rehydrates the previously saved state if one exists; otherwise
    /// starts from the default state.
    pub fn with_persistence(
        mut persistence: Box<dyn StatePersistence>,
    ) -> Result<Self, PersistError> {
        let state = persistence.load()?.unwrap_or_default();
        Ok(Self {
            state,
            subscribers: Vec::new(),
            persistence: Some(persistence),
        })
    }

    /// Register a subscriber; it is notified after every mutation
    pub fn subscribe(&mut self, subscriber: Box<dyn StoreSubscriber>) {
        tracing::debug!(name = subscriber.name(), "subscriber registered");
        self.subscribers.push(subscriber);
    }

    /// The current snapshot
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// The currently selected page, if any
    pub fn selected_page(&self) -> Option<&Page> {
        let id = self.state.selected_page_id.as_deref()?;
        self.state.presentation.page(id)
    }

    /// Persist the current state explicitly (e.g. at shutdown)
    pub fn flush(&mut self) -> Result<(), PersistError> {
        if let Some(persistence) = self.persistence.as_mut() {
            persistence.save(&self.state)?;
        }
        Ok(())
    }

    /// Select a page for editing. Focus state only, no validation.
    pub fn select_page(&mut self, id: impl Into<String>) {
        self.state.selected_page_id = Some(id.into());
        self.after_mutation(false);
    }

    /// Switch the preview language. Focus state only.
    pub fn set_preview_language(&mut self, lang: Language) {
        self.state.preview_language = lang;
        self.after_mutation(false);
    }

    /// Rename the presentation
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.presentation.name = name.into();
        self.after_mutation(true);
    }

    /// Update one language of a translatable field.
    ///
    /// No-op if the page or field is absent, or the field is a raw
    /// string - a tolerated contract mismatch, not an error. Editing
    /// English propagates staleness per the field contract.
    pub fn update_translatable_field(
        &mut self,
        page_id: &str,
        key: &str,
        lang: Language,
        value: &str,
    ) -> bool {
        let Some(idx) = self.state.presentation.page_index(page_id) else {
            return false;
        };
        let Some(field) = self.state.presentation.pages[idx].field(key) else {
            tracing::debug!(page_id, key, "not a translatable field, ignoring update");
            return false;
        };
        let updated = field.with_value(lang, value);
        let mut page = self.state.presentation.pages[idx].clone();
        page.content
            .insert(key.to_string(), ContentValue::Field(updated));
        self.replace_page(idx, page);
        self.after_mutation(true);
        true
    }

    /// Set the review status of one translated language of a field.
    ///
    /// Same type-narrowing as [`Self::update_translatable_field`]; a
    /// status for the source language is meaningless and ignored.
    pub fn set_translation_status(
        &mut self,
        page_id: &str,
        key: &str,
        lang: Language,
        status: slidekit_model::TranslationStatus,
    ) -> bool {
        if lang.is_source() {
            return false;
        }
        let Some(idx) = self.state.presentation.page_index(page_id) else {
            return false;
        };
        let Some(field) = self.state.presentation.pages[idx].field(key) else {
            return false;
        };
        let updated = field.with_status(lang, status);
        let mut page = self.state.presentation.pages[idx].clone();
        page.content
            .insert(key.to_string(), ContentValue::Field(updated));
        self.replace_page(idx, page);
        self.after_mutation(true);
        true
    }

    /// Replace a raw string field unconditionally.
    ///
    /// Used for JSON-encoded sub-document arrays, mode flags, and
    /// scalar values. No-op only if the page is absent.
    pub fn update_string_field(&mut self, page_id: &str, key: &str, value: &str) -> bool {
        let Some(idx) = self.state.presentation.page_index(page_id) else {
            return false;
        };
        let mut page = self.state.presentation.pages[idx].clone();
        page.content
            .insert(key.to_string(), ContentValue::Raw(value.to_string()));
        self.replace_page(idx, page);
        self.after_mutation(true);
        true
    }

    /// Append a page built from the type's factory and select it.
    ///
    /// Returns the new page's id.
    pub fn add_page(&mut self, page_type: PageType) -> String {
        let order = self.state.presentation.pages.len();
        let page = Page::new(page_type, order);
        let id = page.id.clone();
        let mut pages = self.state.presentation.pages.clone();
        pages.push(page);
        self.state.presentation.pages = pages;
        self.state.selected_page_id = Some(id.clone());
        tracing::debug!(%page_type, order, "page added");
        self.after_mutation(true);
        id
    }

    /// Delete a page, renumber densely, and re-select the first page
    /// if the deleted page was selected.
    pub fn delete_page(&mut self, id: &str) -> bool {
        if self.state.presentation.page_index(id).is_none() {
            return false;
        }
        let mut pages: Vec<Page> = self
            .state
            .presentation
            .pages
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        renumber(&mut pages);
        self.state.presentation.pages = pages;
        if self.state.selected_page_id.as_deref() == Some(id) {
            self.state.selected_page_id =
                self.state.presentation.pages.first().map(|p| p.id.clone());
        }
        self.after_mutation(true);
        true
    }

    /// Swap a page with its neighbor. No-op at either boundary.
    pub fn reorder_page(&mut self, id: &str, direction: Direction) -> bool {
        let Some(idx) = self.state.presentation.page_index(id) else {
            return false;
        };
        let neighbor = match direction {
            Direction::Up => {
                if idx == 0 {
                    return false;
                }
                idx - 1
            }
            Direction::Down => {
                if idx + 1 >= self.state.presentation.pages.len() {
                    return false;
                }
                idx + 1
            }
        };
        let mut pages = self.state.presentation.pages.clone();
        pages.swap(idx, neighbor);
        renumber(&mut pages);
        self.state.presentation.pages = pages;
        self.after_mutation(true);
        true
    }

    /// Splice a page to an absolute position. No-op if out of range.
    pub fn move_page(&mut self, id: &str, to_index: usize) -> bool {
        let Some(idx) = self.state.presentation.page_index(id) else {
            return false;
        };
        if to_index >= self.state.presentation.pages.len() {
            return false;
        }
        if to_index == idx {
            return true;
        }
        let mut pages = self.state.presentation.pages.clone();
        let page = pages.remove(idx);
        pages.insert(to_index, page);
        renumber(&mut pages);
        self.state.presentation.pages = pages;
        self.after_mutation(true);
        true
    }

    fn replace_page(&mut self, idx: usize, page: Page) {
        let mut pages = self.state.presentation.pages.clone();
        pages[idx] = page;
        self.state.presentation.pages = pages;
    }

    /// Common post-mutation path: stamp, persist best-effort, notify.
    fn after_mutation(&mut self, content_changed: bool) {
        if content_changed {
            self.state.presentation.touch();
        }
        if let Some(persistence) = self.persistence.as_mut() {
            if let Err(err) = persistence.save(&self.state) {
                tracing::warn!(%err, "state persistence failed");
            }
        }
        for subscriber in &self.subscribers {
            subscriber.state_changed(&self.state);
        }
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

fn renumber(pages: &mut [Page]) {
    for (i, page) in pages.iter_mut().enumerate() {
        page.order = i;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_page_selects_and_numbers() {
        let mut store = ContentStore::new();
        let id = store.add_page(PageType::DataTable);
        assert_eq!(store.state().selected_page_id.as_deref(), Some(id.as_str()));
        assert_eq!(store.state().presentation.pages.len(), 2);
        assert!(store.state().presentation.orders_are_dense());
    }

    #[test]
    fn test_update_translatable_field_narrows_type() {
        let mut store = ContentStore::new();
        let page_id = store.state().presentation.pages[0].id.clone();

        assert!(store.update_translatable_field(&page_id, "title", Language::En, "Hi"));
        // "logoKey" is a raw string; the update must be a silent no-op
        assert!(!store.update_translatable_field(&page_id, "logoKey", Language::En, "x"));
        assert!(!store.update_translatable_field(&page_id, "missing", Language::En, "x"));
        assert!(!store.update_translatable_field("ghost", "title", Language::En, "x"));

        let page = store.state().presentation.page(&page_id).unwrap();
        assert_eq!(page.field("title").unwrap().en, "Hi");
    }

    #[test]
    fn test_update_stamps_updated_at() {
        let mut store = ContentStore::new();
        let page_id = store.state().presentation.pages[0].id.clone();
        let before = store.state().presentation.metadata.updated_at;

        store.update_string_field(&page_id, "date", "2026-01-01");

        assert!(store.state().presentation.metadata.updated_at >= before);
    }

    #[test]
    fn test_focus_changes_do_not_stamp() {
        let mut store = ContentStore::new();
        let stamp = store.state().presentation.metadata.updated_at;
        store.set_preview_language(Language::ZhTw);
        store.select_page("anything");
        assert_eq!(store.state().presentation.metadata.updated_at, stamp);
    }

    #[test]
    fn test_delete_renumbers_and_reselects() {
        let mut store = ContentStore::new();
        let cover = store.state().presentation.pages[0].id.clone();
        let second = store.add_page(PageType::Agenda);
        let third = store.add_page(PageType::Closing);

        store.select_page(second.clone());
        assert!(store.delete_page(&second));

        let deck = &store.state().presentation;
        assert_eq!(deck.pages.len(), 2);
        assert!(deck.orders_are_dense());
        assert_eq!(deck.pages[0].id, cover);
        assert_eq!(deck.pages[1].id, third);
        // Deleted page was selected, so selection falls back to page 0
        assert_eq!(store.state().selected_page_id.as_deref(), Some(cover.as_str()));
    }

    #[test]
    fn test_reorder_boundaries_are_noops() {
        let mut store = ContentStore::new();
        let cover = store.state().presentation.pages[0].id.clone();
        let last = store.add_page(PageType::Closing);

        let snapshot = serde_json::to_string(store.state()).unwrap();
        assert!(!store.reorder_page(&cover, Direction::Up));
        assert!(!store.reorder_page(&last, Direction::Down));
        assert_eq!(serde_json::to_string(store.state()).unwrap(), snapshot);
    }

    #[test]
    fn test_reorder_swaps_and_renumbers() {
        let mut store = ContentStore::new();
        let cover = store.state().presentation.pages[0].id.clone();
        let second = store.add_page(PageType::Agenda);

        assert!(store.reorder_page(&second, Direction::Up));

        let deck = &store.state().presentation;
        assert_eq!(deck.pages[0].id, second);
        assert_eq!(deck.pages[1].id, cover);
        assert!(deck.orders_are_dense());
    }

    #[test]
    fn test_move_page_splices() {
        let mut store = ContentStore::new();
        let cover = store.state().presentation.pages[0].id.clone();
        store.add_page(PageType::Agenda);
        store.add_page(PageType::Closing);

        assert!(store.move_page(&cover, 2));
        assert_eq!(store.state().presentation.pages[2].id, cover);
        assert!(store.state().presentation.orders_are_dense());

        assert!(!store.move_page(&cover, 99));
    }
}
