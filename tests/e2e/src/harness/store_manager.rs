//! Test Store Manager
//!
//! Provides isolated store instances for testing:
//! - Temporary databases that are automatically cleaned up
//! - Reopening against the same file to verify persistence
//! - Assistant instances sharing the managed database

use haven_core::{Assistant, OfflineStore};
use std::path::PathBuf;
use tempfile::TempDir;

/// Manager for test stores
///
/// Creates isolated SQLite-backed stores for each test to prevent
/// interference. The temp directory (and database) is deleted when the
/// manager is dropped.
///
/// # Example
///
/// ```rust,ignore
/// let mut db = TestStoreManager::new_temp();
///
/// db.store.save_query("prompt", "response", None);
/// db.reopen();
/// assert_eq!(db.query_count(), 1);
/// ```
pub struct TestStoreManager {
    /// The managed store instance
    pub store: OfflineStore,
    /// Temporary directory (kept alive to prevent premature deletion)
    _temp_dir: Option<TempDir>,
    /// Path to the database file
    db_path: PathBuf,
}

impl TestStoreManager {
    /// Create a new test store in a temporary directory
    ///
    /// The database is automatically deleted when the manager is dropped.
    pub fn new_temp() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test_haven.db");

        let store = OfflineStore::new(Some(db_path.clone())).expect("Failed to create test store");

        Self {
            store,
            _temp_dir: Some(temp_dir),
            db_path,
        }
    }

    /// Create a test store at a specific path
    ///
    /// The database is NOT automatically deleted.
    pub fn new_at_path(path: PathBuf) -> Self {
        let store = OfflineStore::new(Some(path.clone())).expect("Failed to create test store");

        Self {
            store,
            _temp_dir: None,
            db_path: path,
        }
    }

    /// Get the database path
    pub fn path(&self) -> &PathBuf {
        &self.db_path
    }

    /// Replace the store with a fresh instance over the same file
    ///
    /// Simulates an application restart; persisted state must survive.
    pub fn reopen(&mut self) {
        self.store =
            OfflineStore::new(Some(self.db_path.clone())).expect("Failed to reopen test store");
    }

    /// Build an assistant over its own connection to the managed database
    ///
    /// WAL mode lets the assistant's connections coexist with the
    /// manager's, so tests can write through one and read through the other.
    pub fn assistant(&self) -> Assistant {
        let store =
            OfflineStore::new(Some(self.db_path.clone())).expect("Failed to open assistant store");
        Assistant::new(store)
    }

    /// Check if the query history is empty
    pub fn is_empty(&self) -> bool {
        self.store.stored_queries().is_empty()
    }

    /// Get the number of stored queries
    pub fn query_count(&self) -> usize {
        self.store.stored_queries().len()
    }

    /// Seed the history with numbered query/response pairs
    pub fn seed_queries(&self, count: usize) {
        for i in 0..count {
            self.store.save_query(
                &format!("Seeded question {}", i),
                &format!("Seeded response {}", i),
                None,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_store_creation() {
        let db = TestStoreManager::new_temp();
        assert!(db.is_empty());
        assert!(db.path().exists());
    }

    #[test]
    fn test_seed_queries() {
        let db = TestStoreManager::new_temp();
        db.seed_queries(10);

        assert_eq!(db.query_count(), 10);
    }

    #[test]
    fn test_reopen_keeps_data() {
        let mut db = TestStoreManager::new_temp();
        db.seed_queries(3);

        db.reopen();
        assert_eq!(db.query_count(), 3);
    }

    #[test]
    fn test_assistant_shares_database() {
        let db = TestStoreManager::new_temp();
        let assistant = db.assistant();

        assistant.store().save_query("via assistant", "response", None);
        assert_eq!(db.query_count(), 1);
    }
}
