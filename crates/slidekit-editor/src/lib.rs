//! # slidekit-editor
//!
//! Editor adapters for slidekit. Each page-type editor maintains a
//! decoded local view of one or more JSON-encoded sub-document arrays
//! and exposes the generic list operations - add, remove, adjacent
//! move, targeted field update - plus its type-specific policies:
//!
//! - [`table::TableEditor`]: coupled columns/rows/footnotes and
//!   atomic spreadsheet paste import.
//! - [`comparison::ComparisonEditor`]: fixed three-column rows.
//! - [`flowchart::FlowChartEditor`]: node removal cascades to arrows
//!   in the same user action.
//! - [`upload`]: MIME/size validation in front of the blob store.
//!
//! Every operation ends by serializing the full array back through
//! [`slidekit_store::ContentStore::update_string_field`]. Cardinality
//! violations and boundary moves are rejected no-ops, never errors;
//! only paste import and uploads produce user-facing messages.

pub mod comparison;
pub mod flowchart;
pub mod list_ops;
pub mod table;
pub mod upload;

// Re-exports
pub use comparison::{ComparisonEditor, COMPARISON_COLUMNS};
pub use flowchart::FlowChartEditor;
pub use list_ops::{EditOutcome, SubdocEditor};
pub use table::{PasteError, TableEditor};
pub use upload::{store_image, validate_upload, UploadError, MAX_IMAGE_BYTES};
