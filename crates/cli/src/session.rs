// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store sessions backed by a snapshot file.
//!
//! A session opens the snapshot, logs every store event while the
//! command runs, and writes the snapshot back when asked to.

use crate::error::CliError;
use gymdesk_store::{InMemoryStore, RecordStore, StoreEvent};
use std::path::Path;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

/// Logs store events until the store is dropped.
///
/// Returns the number of events seen.
pub async fn log_store_events(mut rx: broadcast::Receiver<StoreEvent>) -> usize {
    let mut seen: usize = 0;
    loop {
        match rx.recv().await {
            Ok(StoreEvent::CalendarChanged { change }) => {
                seen += 1;
                info!(document_id = change.document_id(), ?change, "Calendar changed");
            }
            Ok(event) => {
                seen += 1;
                debug!(?event, "Store event");
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!(skipped, "Store event logger fell behind");
            }
            Err(RecvError::Closed) => break,
        }
    }
    seen
}

/// Runs `f` against the store saved at `path`.
///
/// A missing snapshot starts an empty store. When `persist` is set and `f`
/// succeeds, the store is written back to `path`.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read or written, or whatever
/// `f` returns.
pub async fn with_store<T, F>(path: &Path, persist: bool, f: F) -> Result<T, CliError>
where
    F: FnOnce(&InMemoryStore) -> Result<T, CliError>,
{
    let store: InMemoryStore = InMemoryStore::open_snapshot_file(path)?;
    let logger = tokio::spawn(log_store_events(store.subscribe()));

    let result: Result<T, CliError> = f(&store);
    if persist && result.is_ok() {
        store.write_snapshot_file(path)?;
    }

    drop(store);
    match logger.await {
        Ok(seen) => debug!(events = seen, "Store session closed"),
        Err(e) => warn!(error = %e, "Store event logger failed"),
    }

    result
}
