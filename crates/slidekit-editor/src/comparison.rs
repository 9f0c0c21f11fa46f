//! Comparison-table editing.
//!
//! A comparison table always has exactly three columns: the criterion
//! and the two options being compared. Rows are the only sub-document;
//! the column labels are ordinary translatable fields on the page.

use slidekit_model::subdoc::{bounds, TableRow};
use slidekit_model::{Direction, Language};
use slidekit_store::ContentStore;

use crate::list_ops::{EditOutcome, SubdocEditor};
use crate::table::{parse_tabular, rows_from_cells, PasteError};

/// Comparison tables are fixed at criterion + two options
pub const COMPARISON_COLUMNS: usize = 3;

/// Content key of the comparison rows sub-document
pub const ROWS_KEY: &str = "rows";

/// Editing session for one comparison-table page
pub struct ComparisonEditor {
    pub rows: SubdocEditor<TableRow>,
}

impl ComparisonEditor {
    pub fn open(store: &ContentStore, page_id: &str) -> Self {
        Self {
            rows: SubdocEditor::open(store, page_id, ROWS_KEY, bounds::TABLE_ROWS),
        }
    }

    /// Append a blank three-cell row
    pub fn add_row(&mut self, store: &mut ContentStore) -> EditOutcome {
        self.rows.add(store, TableRow::blank(COMPARISON_COLUMNS))
    }

    pub fn remove_row(&mut self, store: &mut ContentStore, row_id: &str) -> EditOutcome {
        self.rows.remove(store, row_id)
    }

    pub fn move_row(
        &mut self,
        store: &mut ContentStore,
        row_id: &str,
        direction: Direction,
    ) -> EditOutcome {
        self.rows.move_record(store, row_id, direction)
    }

    /// Set one cell of one row in one language
    pub fn set_cell(
        &mut self,
        store: &mut ContentStore,
        row_id: &str,
        column: usize,
        lang: Language,
        value: &str,
    ) -> EditOutcome {
        if column >= COMPARISON_COLUMNS {
            return EditOutcome::Rejected;
        }
        self.rows.update(store, row_id, |row| {
            if let Some(cell) = row.cells.get_mut(column) {
                cell.set(lang, value);
            }
        })
    }

    /// Replace the row list from pasted text; every row must have
    /// exactly [`COMPARISON_COLUMNS`] cells.
    pub fn import_pasted(
        &mut self,
        store: &mut ContentStore,
        text: &str,
        lang: Language,
    ) -> Result<usize, PasteError> {
        let cells = parse_tabular(text, COMPARISON_COLUMNS)?;
        let rows = rows_from_cells(cells, lang);
        let count = rows.len();
        match self.rows.replace_all(store, rows) {
            EditOutcome::Applied => Ok(count),
            EditOutcome::Rejected => {
                let b = self.rows.bounds();
                Err(PasteError::RowCount {
                    found: count,
                    min: b.min,
                    max: b.max,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidekit_model::PageType;

    #[test]
    fn test_paste_requires_three_columns() {
        let mut store = ContentStore::new();
        let page_id = store.add_page(PageType::ComparisonTable);
        let mut editor = ComparisonEditor::open(&store, &page_id);

        let err = editor
            .import_pasted(&mut store, "speed\tfast\nprice\tlow\tmid\n", Language::En)
            .unwrap_err();
        assert!(matches!(
            err,
            PasteError::ColumnMismatch {
                row: 1,
                found: 2,
                expected: 3
            }
        ));

        let count = editor
            .import_pasted(&mut store, "speed\tfast\tslow\nprice\tlow\tmid\n", Language::En)
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn test_default_rows_are_three_wide() {
        let mut store = ContentStore::new();
        let page_id = store.add_page(PageType::ComparisonTable);
        let editor = ComparisonEditor::open(&store, &page_id);
        assert!(editor
            .rows
            .records()
            .iter()
            .all(|r| r.cells.len() == COMPARISON_COLUMNS));
    }
}
