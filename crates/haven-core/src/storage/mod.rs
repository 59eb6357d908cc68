//! Storage Module
//!
//! SQLite-backed persistence layer with:
//! - Key/value slot substrate behind the [`SlotStore`] trait
//! - Bounded query history and user preferences gateway
//! - JSON export/import for backup and device hand-off

mod migrations;
mod offline;
mod slots;
mod sqlite;

pub use migrations::MIGRATIONS;
pub use offline::{
    OfflineStore, StorageStats, EXPORT_VERSION, MAX_RECENT_SEARCHES, MAX_STORED_QUERIES,
    PREFERENCES_KEY, QUERIES_KEY,
};
pub use slots::{MemorySlots, Result, SlotStore, StorageError};
pub use sqlite::SqliteSlots;
