// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Store change notifications.
//!
//! Events describe what changed in the store. They are informational
//! only: subscribers must read the store to get authoritative data.

use gymdesk::ChangeEvent;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

/// Maximum number of events to buffer per subscriber.
/// Subscribers that fall further behind lose the oldest events.
pub const EVENT_BUFFER_SIZE: usize = 100;

/// Store event types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// A document was written.
    DocumentSaved {
        /// The document id.
        document_id: String,
        /// Number of entries now in the document.
        entry_count: usize,
    },
    /// A document was removed.
    DocumentDeleted {
        /// The document id.
        document_id: String,
    },
    /// A calendar transition was persisted.
    CalendarChanged {
        /// What the transition changed.
        change: ChangeEvent,
    },
}

/// Fan-out of store events to any number of subscribers.
#[derive(Debug, Clone)]
pub struct EventBroadcaster {
    tx: broadcast::Sender<StoreEvent>,
}

impl EventBroadcaster {
    /// Creates a new event broadcaster.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Sends an event to every current subscriber.
    ///
    /// Events sent while nobody is subscribed are dropped.
    pub fn broadcast(&self, event: StoreEvent) {
        match self.tx.send(event) {
            Ok(count) => debug!(receivers = count, "Broadcast store event"),
            Err(_) => debug!("No receivers for store event"),
        }
    }

    /// Subscribes to events sent from now on.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
