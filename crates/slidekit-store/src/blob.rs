//! Image blob storage interface.
//!
//! The core treats images as opaque base64 payloads in a
//! content-addressed cache keyed by generated `img-<uuid>` strings.
//! Loads are fire-and-forget from the caller's perspective, so each
//! load is stamped with a generation token: a completion whose token is
//! no longer current is discarded, and a superseded load can never
//! overwrite a newer value.

use std::collections::HashMap;

use thiserror::Error;
use uuid::Uuid;

/// Result type for blob operations
pub type Result<T> = std::result::Result<T, BlobError>;

/// Errors from a blob-store backend
#[derive(Error, Debug)]
pub enum BlobError {
    /// The backend rejected or failed the operation
    #[error("blob store failure: {reason}")]
    Backend { reason: String },
}

impl BlobError {
    pub fn backend(reason: impl Into<String>) -> Self {
        Self::Backend {
            reason: reason.into(),
        }
    }
}

/// Generate a fresh opaque image key
pub fn new_image_key() -> String {
    format!("img-{}", Uuid::new_v4())
}

/// An opaque blob cache for image payloads.
///
/// Payloads are base64 strings; the store never inspects them beyond
/// the MIME/size validation editors perform before saving.
pub trait BlobStore {
    /// Fetch a payload; `Ok(None)` if the key has no blob
    fn load_image(&self, key: &str) -> Result<Option<String>>;

    /// Store a payload under a key, replacing any previous value
    fn save_image(&mut self, key: &str, payload: &str) -> Result<()>;
}

/// In-memory blob store
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

impl BlobStore for MemoryBlobStore {
    fn load_image(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn save_image(&mut self, key: &str, payload: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

/// A generation stamp for one in-flight image load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadToken {
    field_key: String,
    generation: u64,
}

/// Tracks the latest load generation per field key.
///
/// Begin a load with [`ImageLoads::begin`]; when the load resolves,
/// pass the token to [`ImageLoads::accept`]. A token issued before a
/// newer `begin` for the same field is stale and its payload is
/// dropped.
#[derive(Default)]
pub struct ImageLoads {
    next_generation: u64,
    latest: HashMap<String, u64>,
}

impl ImageLoads {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new in-flight load for a field, superseding any earlier one
    pub fn begin(&mut self, field_key: impl Into<String>) -> LoadToken {
        self.next_generation += 1;
        let field_key = field_key.into();
        self.latest.insert(field_key.clone(), self.next_generation);
        LoadToken {
            field_key,
            generation: self.next_generation,
        }
    }

    /// Whether a token still corresponds to the latest load for its field
    pub fn is_current(&self, token: &LoadToken) -> bool {
        self.latest.get(&token.field_key) == Some(&token.generation)
    }

    /// Gate a resolved payload on token freshness.
    ///
    /// Returns the payload if the token is current, `None` if the load
    /// was superseded.
    pub fn accept(&self, token: &LoadToken, payload: String) -> Option<String> {
        if self.is_current(token) {
            Some(payload)
        } else {
            tracing::debug!(field_key = %token.field_key, "stale image load discarded");
            None
        }
    }
}
