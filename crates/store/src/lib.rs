// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Record store for holiday and vacation calendars.
//!
//! Calendars are stored as documents keyed by their scope's document id
//! (`holidays/<year>`, `vacations/<year>/<member>`). Each document is a
//! map of date key to reason, exactly the form the domain crate's
//! `to_map_form` produces.
//!
//! ## Consistency
//!
//! - Writes replace a whole document; concurrent writers resolve by last write wins
//! - Subscribers are notified only after a write succeeds
//! - Events are informational; subscribers re-read the store for data
//!
//! ## Backends
//!
//! [`InMemoryStore`] keeps documents in memory and can be saved to and
//! restored from a versioned JSON snapshot file. Other backends implement
//! [`RecordStore`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod calendar;
mod error;
mod event;
mod memory;

pub use calendar::{apply_and_persist, load_state, persist_transition};
pub use error::StoreError;
pub use event::{EVENT_BUFFER_SIZE, EventBroadcaster, StoreEvent};
pub use memory::{InMemoryStore, SNAPSHOT_VERSION};

use gymdesk::ChangeEvent;
use gymdesk_domain::DateReasonMap;
use tokio::sync::broadcast;

/// A keyed document store for calendar maps.
pub trait RecordStore: Send + Sync {
    /// Loads a document, or `None` if it was never saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn load(&self, document_id: &str) -> Result<Option<DateReasonMap>, StoreError>;

    /// Replaces a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn save(&self, document_id: &str, entries: &DateReasonMap) -> Result<(), StoreError>;

    /// Removes a document. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn delete(&self, document_id: &str) -> Result<bool, StoreError>;

    /// Lists stored document ids in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn document_ids(&self) -> Result<Vec<String>, StoreError>;

    /// Tells subscribers about a persisted calendar change.
    fn notify(&self, change: &ChangeEvent);

    /// Subscribes to store events sent from now on.
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;
}
