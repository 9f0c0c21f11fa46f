//! State persistence.
//!
//! The store serializes its full snapshot to a single key-value slot on
//! every mutation and rehydrates it at startup. Persisted payloads are
//! wrapped in a schema-version envelope so a future shape change has an
//! explicit upgrade point instead of silent mixed-shape drift.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::StoreState;

/// Current persisted-state schema version
pub const SCHEMA_VERSION: u32 = 1;

/// Result type for persistence operations
pub type Result<T> = std::result::Result<T, PersistError>;

/// Errors from the persistence layer
#[derive(Error, Debug)]
pub enum PersistError {
    /// Underlying storage failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// State could not be serialized
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The slot was written by a newer schema than this build supports
    #[error("persisted schema version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    schema_version: u32,
    state: StoreState,
}

/// A persistence slot for the store snapshot
pub trait StatePersistence {
    /// Write the snapshot, replacing any previous value
    fn save(&mut self, state: &StoreState) -> Result<()>;

    /// Read the snapshot back.
    ///
    /// `Ok(None)` means no usable saved state: the slot is empty, or
    /// its contents failed to parse (corruption degrades to a fresh
    /// default, logged, never an error). A version newer than
    /// [`SCHEMA_VERSION`] is the one loud failure.
    fn load(&mut self) -> Result<Option<StoreState>>;
}

fn decode_envelope(payload: &str) -> Result<Option<StoreState>> {
    let envelope: Envelope = match serde_json::from_str(payload) {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::warn!(%err, "corrupt persisted state, starting fresh");
            return Ok(None);
        }
    };
    if envelope.schema_version > SCHEMA_VERSION {
        return Err(PersistError::UnsupportedVersion {
            found: envelope.schema_version,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(Some(migrate(envelope)))
}

/// Upgrade an envelope to the current schema.
///
/// Version 1 is the first schema; older-version arms are added here as
/// the shape evolves.
fn migrate(envelope: Envelope) -> StoreState {
    envelope.state
}

fn encode_envelope(state: &StoreState) -> Result<String> {
    let envelope = Envelope {
        schema_version: SCHEMA_VERSION,
        state: state.clone(),
    };
    Ok(serde_json::to_string_pretty(&envelope)?)
}

/// File-backed persistence slot
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The slot's file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatePersistence for JsonFileStore {
    fn save(&mut self, state: &StoreState) -> Result<()> {
        let payload = encode_envelope(state)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, payload)?;
        Ok(())
    }

    fn load(&mut self) -> Result<Option<StoreState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let payload = fs::read_to_string(&self.path)?;
        decode_envelope(&payload)
    }
}

/// In-memory persistence slot, mainly for tests
#[derive(Default)]
pub struct MemoryStateStore {
    slot: Option<String>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatePersistence for MemoryStateStore {
    fn save(&mut self, state: &StoreState) -> Result<()> {
        self.slot = Some(encode_envelope(state)?);
        Ok(())
    }

    fn load(&mut self) -> Result<Option<StoreState>> {
        match &self.slot {
            Some(payload) => decode_envelope(payload),
            None => Ok(None),
        }
    }
}
