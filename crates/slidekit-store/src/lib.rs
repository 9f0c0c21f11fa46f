//! # slidekit-store
//!
//! The content mutation store for slidekit. One `ContentStore` instance
//! owns the open presentation and is the only writer: editors and other
//! callers dispatch field-level operations, the store applies them
//! copy-on-write, stamps `updated_at`, persists the full snapshot to
//! its slot, and notifies subscribers with the new immutable state.
//!
//! The store is an explicitly constructed, passed-down instance with a
//! defined lifecycle (construct at startup, [`ContentStore::flush`] at
//! shutdown) - there is no global singleton.
//!
//! ## Example
//!
//! ```rust
//! use slidekit_model::{Language, PageType};
//! use slidekit_store::ContentStore;
//!
//! let mut store = ContentStore::new();
//! let page_id = store.add_page(PageType::BulletList);
//! store.update_translatable_field(&page_id, "title", Language::En, "Findings");
//! assert!(store.state().presentation.orders_are_dense());
//! ```

pub mod blob;
pub mod observer;
pub mod persist;
pub mod store;

// Re-exports
pub use blob::{new_image_key, BlobError, BlobStore, ImageLoads, LoadToken, MemoryBlobStore};
pub use observer::StoreSubscriber;
pub use persist::{JsonFileStore, MemoryStateStore, PersistError, StatePersistence, SCHEMA_VERSION};
pub use store::{ContentStore, StoreState};
