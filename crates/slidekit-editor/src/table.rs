//! Data-table editing.
//!
//! A data table is three coupled sub-documents: column headings, body
//! rows, and footnotes. Column structure changes keep every row's cell
//! list in step, written in the same user action. Bulk import accepts
//! tab-separated text pasted from a spreadsheet and is atomic: one bad
//! row rejects the whole paste.

use slidekit_model::field::LocalizedText;
use slidekit_model::subdoc::{bounds, Footnote, TableColumn, TableRow};
use slidekit_model::{Direction, Language};
use slidekit_store::ContentStore;
use thiserror::Error;

use crate::list_ops::{EditOutcome, SubdocEditor};

/// Content keys of the data-table sub-documents
pub const COLUMNS_KEY: &str = "columns";
pub const ROWS_KEY: &str = "rows";
pub const FOOTNOTES_KEY: &str = "footnotes";

/// Errors surfaced by the paste-import path
#[derive(Error, Debug)]
pub enum PasteError {
    /// Nothing usable was pasted
    #[error("pasted text contains no rows")]
    Empty,

    /// A row's column count does not match the configured columns
    #[error("row {row} has {found} columns, expected {expected}")]
    ColumnMismatch {
        /// 1-based row number within the pasted text
        row: usize,
        found: usize,
        expected: usize,
    },

    /// The pasted text could not be read as tab-separated records
    #[error("pasted text could not be parsed: {0}")]
    Unreadable(#[from] csv::Error),

    /// The resulting row count violates the table's bounds
    #[error("paste of {found} rows is outside the allowed {min}..={max}")]
    RowCount { found: usize, min: usize, max: usize },
}

/// Parse tab-separated pasted text, validating every row's width.
///
/// Validation happens before anything is accepted, so a failure makes
/// no partial update possible for callers that replace-on-success.
pub fn parse_tabular(text: &str, expected: usize) -> Result<Vec<Vec<String>>, PasteError> {
    // Plain newline/tab splitting, no quote interpretation - cells are
    // taken exactly as the spreadsheet pasted them
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != expected {
            return Err(PasteError::ColumnMismatch {
                row: i + 1,
                found: record.len(),
                expected,
            });
        }
        rows.push(record.iter().map(str::to_string).collect());
    }
    if rows.is_empty() {
        return Err(PasteError::Empty);
    }
    Ok(rows)
}

/// Build table rows from parsed cells, filling one language.
///
/// Any prior per-cell highlight state is discarded: a paste is a
/// documented destructive replace, not a merge.
pub fn rows_from_cells(cells: Vec<Vec<String>>, lang: Language) -> Vec<TableRow> {
    cells
        .into_iter()
        .map(|row| {
            let mut table_row = TableRow::blank(row.len());
            for (cell, value) in table_row.cells.iter_mut().zip(row) {
                cell.set(lang, value);
            }
            table_row
        })
        .collect()
}

/// Editing session for one data-table page
pub struct TableEditor {
    pub columns: SubdocEditor<TableColumn>,
    pub rows: SubdocEditor<TableRow>,
    pub footnotes: SubdocEditor<Footnote>,
}

impl TableEditor {
    /// Open all three sub-documents of a data-table page
    pub fn open(store: &ContentStore, page_id: &str) -> Self {
        Self {
            columns: SubdocEditor::open(store, page_id, COLUMNS_KEY, bounds::TABLE_COLUMNS),
            rows: SubdocEditor::open(store, page_id, ROWS_KEY, bounds::TABLE_ROWS),
            footnotes: SubdocEditor::open(store, page_id, FOOTNOTES_KEY, bounds::FOOTNOTES),
        }
    }

    /// Append a column and give every row a new empty trailing cell
    pub fn add_column(&mut self, store: &mut ContentStore) -> EditOutcome {
        if !self.columns.add(store, TableColumn::new()).is_applied() {
            return EditOutcome::Rejected;
        }
        let row_ids: Vec<String> = self.rows.records().iter().map(|r| r.id.clone()).collect();
        for id in row_ids {
            self.rows.update(store, &id, |row| {
                row.cells.push(LocalizedText::default());
            });
        }
        EditOutcome::Applied
    }

    /// Remove a column and the matching cell of every row
    pub fn remove_column(&mut self, store: &mut ContentStore, column_id: &str) -> EditOutcome {
        let Some(idx) = self
            .columns
            .records()
            .iter()
            .position(|c| c.id == column_id)
        else {
            return EditOutcome::Rejected;
        };
        if !self.columns.remove(store, column_id).is_applied() {
            return EditOutcome::Rejected;
        }
        let row_ids: Vec<String> = self.rows.records().iter().map(|r| r.id.clone()).collect();
        for id in row_ids {
            self.rows.update(store, &id, |row| {
                if idx < row.cells.len() {
                    row.cells.remove(idx);
                }
                if idx < row.highlights.len() {
                    row.highlights.remove(idx);
                }
            });
        }
        EditOutcome::Applied
    }

    /// Append a blank row shaped to the current column count
    pub fn add_row(&mut self, store: &mut ContentStore) -> EditOutcome {
        let width = self.columns.len();
        self.rows.add(store, TableRow::blank(width))
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
        if column >= self.columns.len() {
            return EditOutcome::Rejected;
        }
        self.rows.update(store, row_id, |row| {
            if let Some(cell) = row.cells.get_mut(column) {
                cell.set(lang, value);
            }
        })
    }

    /// Replace the row list from spreadsheet-pasted text.
    ///
    /// Every pasted row must match the configured column count; any
    /// mismatch rejects the entire paste with the offending row named,
    /// and the existing rows are untouched. On success the full row
    /// list is replaced and highlight state is discarded.
    pub fn import_pasted(
        &mut self,
        store: &mut ContentStore,
        text: &str,
        lang: Language,
    ) -> Result<usize, PasteError> {
        let expected = self.columns.len();
        let cells = parse_tabular(text, expected)?;
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

    fn table_page(store: &mut ContentStore) -> String {
        store.add_page(PageType::DataTable)
    }

    #[test]
    fn test_parse_tabular_happy_path() {
        let rows = parse_tabular("a\tb\tc\nd\te\tf\n", 3).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["d", "e", "f"]);
    }

    #[test]
    fn test_parse_tabular_reports_offending_row() {
        let err = parse_tabular("a\tb\tc\nd\te\nf\tg\th\n", 3).unwrap_err();
        match err {
            PasteError::ColumnMismatch {
                row,
                found,
                expected,
            } => {
                assert_eq!(row, 2);
                assert_eq!(found, 2);
                assert_eq!(expected, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_tabular_empty_rejected() {
        assert!(matches!(parse_tabular("", 3), Err(PasteError::Empty)));
    }

    #[test]
    fn test_add_column_grows_every_row() {
        let mut store = ContentStore::new();
        let page_id = table_page(&mut store);
        let mut editor = TableEditor::open(&store, &page_id);

        assert!(editor.add_column(&mut store).is_applied());

        assert_eq!(editor.columns.len(), 4);
        for row in editor.rows.records() {
            assert_eq!(row.cells.len(), 4);
        }
        // And the persisted copy agrees
        let reopened = TableEditor::open(&store, &page_id);
        assert_eq!(reopened.rows.records()[0].cells.len(), 4);
    }

    #[test]
    fn test_remove_column_shrinks_every_row() {
        let mut store = ContentStore::new();
        let page_id = table_page(&mut store);
        let mut editor = TableEditor::open(&store, &page_id);
        let first_column = editor.columns.records()[0].id.clone();

        assert!(editor.remove_column(&mut store, &first_column).is_applied());

        assert_eq!(editor.columns.len(), 2);
        for row in editor.rows.records() {
            assert_eq!(row.cells.len(), 2);
        }
    }

    #[test]
    fn test_import_replaces_rows_and_clears_highlights() {
        let mut store = ContentStore::new();
        let page_id = table_page(&mut store);
        let mut editor = TableEditor::open(&store, &page_id);

        // Mark a highlight that a successful paste must wipe
        let row_id = editor.rows.records()[0].id.clone();
        editor.rows.update(&mut store, &row_id, |row| {
            row.highlights = vec![true, false, false];
        });

        let count = editor
            .import_pasted(&mut store, "q1\t120\tup\nq2\t90\tdown\n", Language::En)
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(editor.rows.len(), 2);
        assert_eq!(editor.rows.records()[0].cells[0].en, "q1");
        assert!(editor.rows.records().iter().all(|r| r.highlights.is_empty()));
    }

    #[test]
    fn test_import_mismatch_leaves_rows_unchanged() {
        let mut store = ContentStore::new();
        let page_id = table_page(&mut store);
        let mut editor = TableEditor::open(&store, &page_id);
        let before: Vec<String> = editor.rows.records().iter().map(|r| r.id.clone()).collect();

        let err = editor
            .import_pasted(&mut store, "a\tb\tc\nd\te\nf\tg\th\n", Language::En)
            .unwrap_err();

        assert!(matches!(err, PasteError::ColumnMismatch { row: 2, .. }));
        let after: Vec<String> = editor.rows.records().iter().map(|r| r.id.clone()).collect();
        assert_eq!(before, after);
    }
}
