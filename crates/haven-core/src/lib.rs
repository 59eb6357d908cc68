//! # Haven Core
//!
//! Offline-first core for disaster-relief dashboards. Everything works with
//! no network, no server and no model runtime:
//!
//! - **Offline store**: bounded query history and user preferences over a
//!   SQLite key-value substrate, with JSON export/import for backup
//! - **Keyword responder**: deterministic canned-response assistant with
//!   first-match topic protocols and a fixed fallback template
//! - **Guide library**: built-in first-aid/shelter/protocol procedures,
//!   filterable by category, priority and free text
//! - **Assistant context**: wires responder and store so every interaction
//!   is recorded in history
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use haven_core::{Assistant, OfflineStore};
//!
//! // Store at the default platform-specific location
//! let store = OfflineStore::new(None)?;
//! let assistant = Assistant::new(store);
//!
//! // Ask a question; the exchange lands in history
//! let reply = assistant.ask("How do I treat a burn?").await;
//! println!("{} (confidence {})", reply.text, reply.confidence);
//!
//! // Inspect history and back everything up
//! let history = assistant.store().stored_queries();
//! let backup = assistant.store().export_data();
//! ```
//!
//! ## Feature Flags
//!
//! - `bundled-sqlite` (default): compile SQLite from source via rusqlite

#![cfg_attr(docsrs, feature(doc_cfg))]
// Only warn about missing docs for public items exported from the crate root
// Internal struct fields and enum variants don't need documentation
#![warn(rustdoc::missing_crate_level_docs)]

// ============================================================================
// MODULES
// ============================================================================

pub mod assistant;
pub mod guides;
pub mod records;
pub mod responder;
pub mod storage;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Assistant context
pub use assistant::Assistant;

// Record types
pub use records::{PreferencesPatch, StoredQuery, UserPreferences, DEFAULT_CATEGORY};

// Responder
pub use responder::{
    ConfigPatch, ModelStatus, Reply, Responder, ResponderConfig, MODEL_NAME, SUGGESTED_PROMPTS,
};

// Guide library
pub use guides::{Guide, GuideCategory, GuideFilter, GuidePriority, GUIDES};

// Storage layer
pub use storage::{
    MemorySlots, OfflineStore, Result, SlotStore, SqliteSlots, StorageError, StorageStats,
};

// ============================================================================
// VERSION INFO
// ============================================================================

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// PRELUDE
// ============================================================================

/// Convenient imports for common usage
pub mod prelude {
    pub use crate::{
        Assistant, Guide, GuideCategory, GuideFilter, GuidePriority, OfflineStore,
        PreferencesPatch, Reply, Responder, Result, StorageError, StoredQuery, UserPreferences,
    };
}
