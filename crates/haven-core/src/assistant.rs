//! Assistant Context
//!
//! Wires the responder to the offline store so every interaction lands in
//! query history. Construct one per application and share it by reference;
//! both halves are `Send + Sync`.

use crate::responder::{Reply, Responder};
use crate::storage::OfflineStore;

/// Responder plus history-recording store
pub struct Assistant {
    store: OfflineStore,
    responder: Responder,
}

impl Assistant {
    /// Create an assistant over `store` with a default responder
    pub fn new(store: OfflineStore) -> Self {
        Self::with_responder(store, Responder::new())
    }

    /// Create an assistant with a custom-configured responder
    pub fn with_responder(store: OfflineStore, responder: Responder) -> Self {
        Self { store, responder }
    }

    /// Answer `prompt` and record the exchange in history
    ///
    /// The history entry's category is the matched topic keyword, or
    /// "general" when the fallback reply fired.
    pub async fn ask(&self, prompt: &str) -> Reply {
        let reply = self.responder.respond(prompt).await;

        self.store
            .save_query(prompt, &reply.text, reply.topic.as_deref());

        reply
    }

    /// The underlying store, for history and preference access
    pub fn store(&self) -> &OfflineStore {
        &self.store
    }

    /// The underlying responder, for status and config access
    pub fn responder(&self) -> &Responder {
        &self.responder
    }
}

// ============================================================================
// TESTS
// ============================================================================
