//! Generic bounded list editing over a JSON sub-document.
//!
//! Every list-shaped editor follows the same contract: the array is
//! decoded once when the editor opens, operations work on that local
//! view, and each operation re-serializes the whole array back through
//! [`ContentStore::update_string_field`]. Out-of-bounds operations are
//! rejected no-ops, not errors.
//!
//! The decoded view is intentionally not re-synced from later external
//! writes to the same field; an editor owns its sub-document for the
//! duration of the editing session.

use slidekit_model::subdoc::{self, Bounds, SubdocRecord};
use slidekit_model::Direction;
use slidekit_store::ContentStore;

/// Whether a list operation took effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The operation was applied and written back
    Applied,

    /// Bounds or boundary rules rejected the operation; nothing changed
    Rejected,
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// An editing session over one JSON-encoded record list
pub struct SubdocEditor<T: SubdocRecord> {
    page_id: String,
    field_key: String,
    bounds: Bounds,
    records: Vec<T>,
}

impl<T: SubdocRecord> SubdocEditor<T> {
    /// Open an editor, decoding the current array once.
    ///
    /// An absent page/field or malformed JSON degrades to an empty
    /// list, matching the shared decode policy.
    pub fn open(
        store: &ContentStore,
        page_id: impl Into<String>,
        field_key: impl Into<String>,
        bounds: Bounds,
    ) -> Self {
        let page_id = page_id.into();
        let field_key = field_key.into();
        let records = store
            .state()
            .presentation
            .page(&page_id)
            .and_then(|p| p.raw(&field_key))
            .map(subdoc::decode_or_default)
            .unwrap_or_default();
        Self {
            page_id,
            field_key,
            bounds,
            records,
        }
    }

    /// The decoded records
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// This editor's cardinality bounds
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Append a record. Rejected when the list is already at MAX.
    pub fn add(&mut self, store: &mut ContentStore, record: T) -> EditOutcome {
        if !self.bounds.can_add(self.records.len()) {
            return EditOutcome::Rejected;
        }
        self.records.push(record);
        self.write_back(store);
        EditOutcome::Applied
    }

    /// Remove a record by id. Rejected at MIN or for an unknown id.
    pub fn remove(&mut self, store: &mut ContentStore, id: &str) -> EditOutcome {
        if !self.bounds.can_remove(self.records.len()) {
            return EditOutcome::Rejected;
        }
        let Some(idx) = self.position(id) else {
            return EditOutcome::Rejected;
        };
        self.records.remove(idx);
        self.write_back(store);
        EditOutcome::Applied
    }

    /// Swap a record with its neighbor. Rejected at either boundary.
    pub fn move_record(
        &mut self,
        store: &mut ContentStore,
        id: &str,
        direction: Direction,
    ) -> EditOutcome {
        let Some(idx) = self.position(id) else {
            return EditOutcome::Rejected;
        };
        let neighbor = match direction {
            Direction::Up => {
                if idx == 0 {
                    return EditOutcome::Rejected;
                }
                idx - 1
            }
            Direction::Down => {
                if idx + 1 >= self.records.len() {
                    return EditOutcome::Rejected;
                }
                idx + 1
            }
        };
        self.records.swap(idx, neighbor);
        self.write_back(store);
        EditOutcome::Applied
    }

    /// Update one record copy-on-write: the record is cloned, mutated,
    /// and swapped back in before the whole array is written through.
    pub fn update(
        &mut self,
        store: &mut ContentStore,
        id: &str,
        mutate: impl FnOnce(&mut T),
    ) -> EditOutcome {
        let Some(idx) = self.position(id) else {
            return EditOutcome::Rejected;
        };
        let mut record = self.records[idx].clone();
        mutate(&mut record);
        self.records[idx] = record;
        self.write_back(store);
        EditOutcome::Applied
    }

    /// Replace the entire list. Rejected if the new length violates
    /// bounds. Used by bulk imports, which are whole-list replaces.
    pub fn replace_all(&mut self, store: &mut ContentStore, records: Vec<T>) -> EditOutcome {
        if records.len() < self.bounds.min || records.len() > self.bounds.max {
            return EditOutcome::Rejected;
        }
        self.records = records;
        self.write_back(store);
        EditOutcome::Applied
    }

    /// Keep only records matching the predicate, bypassing MIN.
    ///
    /// This is the cascade path (e.g. dropping arrows whose node was
    /// deleted); it returns the number of records removed and writes
    /// back only if something changed.
    pub fn retain(
        &mut self,
        store: &mut ContentStore,
        predicate: impl Fn(&T) -> bool,
    ) -> usize {
        let before = self.records.len();
        self.records.retain(|r| predicate(r));
        let removed = before - self.records.len();
        if removed > 0 {
            self.write_back(store);
        }
        removed
    }

    /// Serialize the full array and write it through the store
    fn write_back(&self, store: &mut ContentStore) {
        store.update_string_field(&self.page_id, &self.field_key, &subdoc::encode(&self.records));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_model::subdoc::{bounds, BulletItem};
    use slidekit_model::{Language, PageType};

    fn bullet_editor(store: &ContentStore, page_id: &str) -> SubdocEditor<BulletItem> {
        SubdocEditor::open(store, page_id, "bullets", bounds::BULLETS)
    }

    #[test]
    fn test_open_decodes_defaults() {
        let mut store = ContentStore::new();
        let page_id = store.add_page(PageType::BulletList);
        let editor = bullet_editor(&store, &page_id);
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn test_add_at_max_is_noop() {
        let mut store = ContentStore::new();
        let page_id = store.add_page(PageType::BulletList);
        let mut editor = bullet_editor(&store, &page_id);

        while editor.len() < editor.bounds().max {
            assert!(editor.add(&mut store, BulletItem::new()).is_applied());
        }
        let serialized = store
            .state()
            .presentation
            .page(&page_id)
            .unwrap()
            .raw("bullets")
            .unwrap()
            .to_string();

        assert_eq!(editor.add(&mut store, BulletItem::new()), EditOutcome::Rejected);
        // Byte-identical: the rejected add never re-serialized
        assert_eq!(
            store
                .state()
                .presentation
                .page(&page_id)
                .unwrap()
                .raw("bullets"),
            Some(serialized.as_str())
        );
    }

    #[test]
    fn test_remove_at_min_is_noop() {
        let mut store = ContentStore::new();
        let page_id = store.add_page(PageType::BulletList);
        let mut editor = bullet_editor(&store, &page_id);

        let only_id = editor.records()[0].id.clone();
        assert_eq!(editor.remove(&mut store, &only_id), EditOutcome::Rejected);
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn test_move_boundaries_are_noops() {
        let mut store = ContentStore::new();
        let page_id = store.add_page(PageType::BulletList);
        let mut editor = bullet_editor(&store, &page_id);
        editor.add(&mut store, BulletItem::with_en("second"));

        let first = editor.records()[0].id.clone();
        let last = editor.records()[1].id.clone();
        let before: Vec<String> = editor.records().iter().map(|b| b.id.clone()).collect();

        assert_eq!(
            editor.move_record(&mut store, &first, Direction::Up),
            EditOutcome::Rejected
        );
        assert_eq!(
            editor.move_record(&mut store, &last, Direction::Down),
            EditOutcome::Rejected
        );
        let after: Vec<String> = editor.records().iter().map(|b| b.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_writes_through() {
        let mut store = ContentStore::new();
        let page_id = store.add_page(PageType::BulletList);
        let mut editor = bullet_editor(&store, &page_id);
        let id = editor.records()[0].id.clone();

        editor.update(&mut store, &id, |b| b.text.set(Language::En, "updated"));

        // The store's copy reflects the write-back
        let reopened = bullet_editor(&store, &page_id);
        assert_eq!(reopened.records()[0].text.en, "updated");
    }

    #[test]
    fn test_open_on_corrupt_json_degrades_to_empty() {
        let mut store = ContentStore::new();
        let page_id = store.add_page(PageType::BulletList);
        store.update_string_field(&page_id, "bullets", "{broken");

        let editor = bullet_editor(&store, &page_id);
        assert!(editor.is_empty());
    }
}
