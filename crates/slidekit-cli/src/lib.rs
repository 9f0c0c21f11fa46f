//! slidekit CLI - command-line interface library
//!
//! Drives a presentation file through the real content store, so every
//! command exercises the same mutation path the interactive editors
//! use:
//!
//! ```bash
//! # Create a deck and grow it
//! slidekit new --name "Quarterly Review"
//! slidekit add-page data-table
//! slidekit set 0 title "Q3 Results"
//!
//! # Import spreadsheet rows and preview
//! slidekit import-rows 1 rows.tsv
//! slidekit preview 1 --lang zh-tw --format json
//! ```

pub mod app;

// Re-export main entry point and types
pub use app::{describe_tree, run, OutputFormat};
