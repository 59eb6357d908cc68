//! Test Data Factory
//!
//! Provides utilities for generating realistic test data:
//! - History entries with controlled timestamps and categories
//! - Backup bundles in the on-disk export format
//! - A failure-injection substrate for degraded-path testing

use chrono::{DateTime, Duration, Utc};
use haven_core::{OfflineStore, Result, SlotStore, StorageError, StoredQuery, UserPreferences};
use uuid::Uuid;

/// Factory for creating test data
///
/// Generates history entries and backup bundles with predictable content
/// so journey tests can assert on ordering and round-trip fidelity.
///
/// # Example
///
/// ```rust,ignore
/// let store = OfflineStore::in_memory();
///
/// // Seed through the public API
/// TestDataFactory::seed_history(&store, 20);
///
/// // Or build raw entries for an import bundle
/// let entries = TestDataFactory::backdated_history(150);
/// let bundle = TestDataFactory::bundle_json(&entries, None);
/// ```
pub struct TestDataFactory;

impl TestDataFactory {
    /// Category for a seeded entry, cycling topics with periodic defaults
    fn category_for(seed: usize) -> Option<&'static str> {
        const TOPICS: [&str; 3] = ["water", "shelter", "bleeding"];
        if seed % 4 == 0 {
            None
        } else {
            Some(TOPICS[seed % TOPICS.len()])
        }
    }

    /// Seed `count` history entries through the store's public API
    pub fn seed_history(store: &OfflineStore, count: usize) {
        for i in 0..count {
            store.save_query(
                &format!("How do I handle scenario {}?", i),
                &format!("Guidance for scenario {}", i),
                Self::category_for(i),
            );
        }
    }

    /// Build a standalone entry backdated by `minutes_ago`
    pub fn history_entry(index: usize, minutes_ago: i64) -> StoredQuery {
        StoredQuery {
            id: Uuid::now_v7().to_string(),
            query: format!("Archived question {}", index),
            response: format!("Archived response {}", index),
            timestamp: Utc::now() - Duration::minutes(minutes_ago),
            category: Self::category_for(index).unwrap_or("general").to_string(),
        }
    }

    /// Build `count` entries ordered newest first, like stored history
    pub fn backdated_history(count: usize) -> Vec<StoredQuery> {
        (0..count)
            .map(|i| Self::history_entry(i, i as i64))
            .collect()
    }

    /// Assemble a backup bundle in the export wire format
    ///
    /// `preferences` is omitted from the bundle when `None`, which exercises
    /// the partial-import path.
    pub fn bundle_json(queries: &[StoredQuery], preferences: Option<&UserPreferences>) -> String {
        let mut bundle = serde_json::json!({
            "queries": queries,
            "exportDate": Utc::now(),
            "version": "1.0",
        });

        if let Some(preferences) = preferences {
            bundle["preferences"] = serde_json::json!(preferences);
        }

        serde_json::to_string_pretty(&bundle).expect("bundle serializes")
    }
}

// ============================================================================
// BUNDLE SHAPE
// ============================================================================

/// Typed mirror of the export format, for asserting on exported text
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleShape {
    /// Exported history
    pub queries: Vec<StoredQuery>,
    /// Exported preferences
    pub preferences: UserPreferences,
    /// When the export was taken
    pub export_date: DateTime<Utc>,
    /// Format version stamp
    pub version: String,
}

impl BundleShape {
    /// Parse exported text, `None` if the shape does not match
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }
}

// ============================================================================
// FAILURE INJECTION
// ============================================================================

/// Substrate that refuses every mutation
///
/// Reads report an empty store; writes and removals fail. Used to verify
/// that gateway operations degrade without panicking.
pub struct FailingSlots;

impl SlotStore for FailingSlots {
    fn read(&self, _key: &str) -> Result<Option<String>> {
        Ok(None)
    }

    fn write(&self, _key: &str, _value: &str) -> Result<()> {
        Err(StorageError::Init("write refused".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(StorageError::Init("remove refused".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_history_fills_store() {
        let store = OfflineStore::in_memory();
        TestDataFactory::seed_history(&store, 12);

        let queries = store.stored_queries();
        assert_eq!(queries.len(), 12);
        // save_query prepends, so the last seeded entry is first
        assert_eq!(queries[0].query, "How do I handle scenario 11?");
    }

    #[test]
    fn test_backdated_history_is_newest_first() {
        let entries = TestDataFactory::backdated_history(5);

        assert_eq!(entries.len(), 5);
        for pair in entries.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn test_bundle_round_trips_through_shape() {
        let entries = TestDataFactory::backdated_history(3);
        let bundle = TestDataFactory::bundle_json(&entries, Some(&UserPreferences::default()));

        let shape = BundleShape::parse(&bundle).unwrap();
        assert_eq!(shape.queries.len(), 3);
        assert_eq!(shape.version, "1.0");
        assert!(shape.preferences.offline_mode);
    }

    #[test]
    fn test_failing_slots_block_saves() {
        let store = OfflineStore::with_slots(Box::new(FailingSlots));

        store.save_query("q", "r", None);
        assert!(store.stored_queries().is_empty());
    }
}
