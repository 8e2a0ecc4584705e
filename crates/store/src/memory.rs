// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory record store with JSON snapshot files.

use crate::error::StoreError;
use crate::event::{EventBroadcaster, StoreEvent};
use crate::RecordStore;
use gymdesk::ChangeEvent;
use gymdesk_domain::DateReasonMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::broadcast;
use tracing::{debug, info};

/// Snapshot format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk layout of a snapshot file.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    documents: BTreeMap<String, DateReasonMap>,
}

/// Record store that keeps every document in memory.
///
/// Concurrent writers are serialized by a lock and the last write wins.
/// The whole store can be written to and read from a JSON snapshot file.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: RwLock<BTreeMap<String, DateReasonMap>>,
    events: EventBroadcaster,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a store from a snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// uses an unsupported snapshot version.
    pub fn from_snapshot_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path: &Path = path.as_ref();
        let raw: String = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: Snapshot = serde_json::from_str(&raw)?;

        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        info!(
            path = %path.display(),
            documents = snapshot.documents.len(),
            "Loaded store snapshot"
        );

        Ok(Self {
            documents: RwLock::new(snapshot.documents),
            events: EventBroadcaster::new(),
        })
    }

    /// Loads a store from a snapshot file, or starts empty if the file
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Same as [`InMemoryStore::from_snapshot_file`], except for a missing file.
    pub fn open_snapshot_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path: &Path = path.as_ref();
        if path.exists() {
            Self::from_snapshot_file(path)
        } else {
            info!(path = %path.display(), "No snapshot yet, starting empty");
            Ok(Self::new())
        }
    }

    /// Writes every document to a snapshot file.
    ///
    /// The snapshot is written next to the target and then renamed over
    /// it, so readers never see a partial file.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be encoded or written.
    pub fn write_snapshot_file<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let path: &Path = path.as_ref();
        let snapshot: Snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            documents: self.read()?.clone(),
        };
        let json: String = serde_json::to_string_pretty(&snapshot)?;

        let staging = path.with_extension("tmp");
        let io_error = |source: std::io::Error| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };
        std::fs::write(&staging, json).map_err(io_error)?;
        std::fs::rename(&staging, path).map_err(io_error)?;

        info!(
            path = %path.display(),
            documents = snapshot.documents.len(),
            "Wrote store snapshot"
        );
        Ok(())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<String, DateReasonMap>>, StoreError> {
        self.documents.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<String, DateReasonMap>>, StoreError> {
        self.documents.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self, document_id: &str) -> Result<Option<DateReasonMap>, StoreError> {
        Ok(self.read()?.get(document_id).cloned())
    }

    fn save(&self, document_id: &str, entries: &DateReasonMap) -> Result<(), StoreError> {
        self.write()?
            .insert(document_id.to_string(), entries.clone());

        debug!(document_id, entries = entries.len(), "Saved document");
        self.events.broadcast(StoreEvent::DocumentSaved {
            document_id: document_id.to_string(),
            entry_count: entries.len(),
        });
        Ok(())
    }

    fn delete(&self, document_id: &str) -> Result<bool, StoreError> {
        let removed: bool = self.write()?.remove(document_id).is_some();

        if removed {
            debug!(document_id, "Deleted document");
            self.events.broadcast(StoreEvent::DocumentDeleted {
                document_id: document_id.to_string(),
            });
        }
        Ok(removed)
    }

    fn document_ids(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.read()?.keys().cloned().collect())
    }

    fn notify(&self, change: &ChangeEvent) {
        self.events.broadcast(StoreEvent::CalendarChanged {
            change: change.clone(),
        });
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
