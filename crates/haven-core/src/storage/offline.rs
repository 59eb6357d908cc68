//! Offline Store
//!
//! Gateway over the slot substrate: query history with a bounded cap,
//! user preferences with partial updates, and export/import for backup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::slots::{MemorySlots, Result, SlotStore};
use super::sqlite::SqliteSlots;
use crate::records::{PreferencesPatch, StoredQuery, UserPreferences};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Slot key holding the query history record
pub const QUERIES_KEY: &str = "disaster-relief-queries";

/// Slot key holding the user preferences record
pub const PREFERENCES_KEY: &str = "disaster-relief-preferences";

/// Query history keeps at most this many entries
pub const MAX_STORED_QUERIES: usize = 100;

/// Recent search list keeps at most this many entries
pub const MAX_RECENT_SEARCHES: usize = 20;

/// Version stamp written into export bundles
pub const EXPORT_VERSION: &str = "1.0";

// ============================================================================
// BUNDLES AND STATS
// ============================================================================

/// Backup bundle produced by `export_data`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportBundle<'a> {
    queries: &'a [StoredQuery],
    preferences: &'a UserPreferences,
    export_date: DateTime<Utc>,
    version: &'a str,
}

/// Backup bundle accepted by `import_data`
///
/// Both sections are optional and unknown fields are ignored, so bundles
/// from future versions still restore whatever they carry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportBundle {
    queries: Option<Vec<StoredQuery>>,
    preferences: Option<UserPreferences>,
}

/// Summary of what the store currently holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStats {
    /// Number of stored queries
    pub queries_count: usize,
    /// Human-readable size of both slots, e.g. "12.4 KB"
    pub storage_used: String,
}

// ============================================================================
// OFFLINE STORE
// ============================================================================

/// Persistence gateway for query history and user preferences
///
/// Read paths and mutating paths never fail outward: storage errors are
/// logged and the operation degrades to a no-op or a default value, so a
/// broken database never takes the surrounding UI down with it.
pub struct OfflineStore {
    slots: Box<dyn SlotStore>,
}

impl OfflineStore {
    /// Create a store backed by SQLite at `db_path` (platform data dir if `None`)
    pub fn new(db_path: Option<PathBuf>) -> Result<Self> {
        Ok(Self {
            slots: Box::new(SqliteSlots::new(db_path)?),
        })
    }

    /// Create a store backed by process memory only
    pub fn in_memory() -> Self {
        Self {
            slots: Box::new(MemorySlots::default()),
        }
    }

    /// Create a store over a caller-provided substrate
    pub fn with_slots(slots: Box<dyn SlotStore>) -> Self {
        Self { slots }
    }

    // ------------------------------------------------------------------
    // Query history
    // ------------------------------------------------------------------

    /// Record a query/response pair at the front of the history
    ///
    /// History is trimmed to [`MAX_STORED_QUERIES`]; the oldest entries
    /// fall off. `category` defaults to "general".
    pub fn save_query(&self, query: &str, response: &str, category: Option<&str>) {
        let mut queries = self.stored_queries();
        queries.insert(0, StoredQuery::new(query, response, category));
        queries.truncate(MAX_STORED_QUERIES);

        if let Err(e) = self.write_slot(QUERIES_KEY, &queries) {
            tracing::warn!("Failed to save query to offline storage: {}", e);
        }
    }

    /// All stored queries, newest first
    pub fn stored_queries(&self) -> Vec<StoredQuery> {
        match self.read_slot(QUERIES_KEY) {
            Ok(Some(queries)) => queries,
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to retrieve stored queries: {}", e);
                Vec::new()
            }
        }
    }

    /// Case-insensitive substring search over query, response and category
    pub fn search_stored_queries(&self, search_term: &str) -> Vec<StoredQuery> {
        let term = search_term.to_lowercase();

        self.stored_queries()
            .into_iter()
            .filter(|query| {
                query.query.to_lowercase().contains(&term)
                    || query.response.to_lowercase().contains(&term)
                    || query.category.to_lowercase().contains(&term)
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Preferences
    // ------------------------------------------------------------------

    /// Merge `patch` into the current preferences and persist the result
    pub fn save_preferences(&self, patch: PreferencesPatch) {
        let mut current = self.preferences();
        current.apply(patch);

        if let Err(e) = self.write_slot(PREFERENCES_KEY, &current) {
            tracing::warn!("Failed to save preferences: {}", e);
        }
    }

    /// Current preferences, or defaults when nothing is stored yet
    pub fn preferences(&self) -> UserPreferences {
        match self.read_slot(PREFERENCES_KEY) {
            Ok(Some(preferences)) => preferences,
            Ok(None) => UserPreferences::default(),
            Err(e) => {
                tracing::warn!("Failed to retrieve preferences: {}", e);
                UserPreferences::default()
            }
        }
    }

    /// Push a term onto the recent search list
    ///
    /// An existing copy of the term is moved to the front rather than
    /// duplicated; the list is trimmed to [`MAX_RECENT_SEARCHES`].
    pub fn add_recent_search(&self, search_term: &str) {
        let preferences = self.preferences();
        let mut searches: Vec<String> = preferences
            .recent_searches
            .into_iter()
            .filter(|s| s != search_term)
            .collect();
        searches.insert(0, search_term.to_string());
        searches.truncate(MAX_RECENT_SEARCHES);

        self.save_preferences(PreferencesPatch {
            recent_searches: Some(searches),
            ..Default::default()
        });
    }

    /// Add the topic to the favorites if absent, remove it if present
    pub fn toggle_favorite_topic(&self, topic: &str) {
        let preferences = self.preferences();
        let mut favorites = preferences.favorite_topics;

        if let Some(position) = favorites.iter().position(|t| t == topic) {
            favorites.remove(position);
        } else {
            favorites.push(topic.to_string());
        }

        self.save_preferences(PreferencesPatch {
            favorite_topics: Some(favorites),
            ..Default::default()
        });
    }

    // ------------------------------------------------------------------
    // Backup
    // ------------------------------------------------------------------

    /// Serialize the full store contents into a pretty-printed JSON bundle
    pub fn export_data(&self) -> String {
        let queries = self.stored_queries();
        let preferences = self.preferences();

        let bundle = ExportBundle {
            queries: &queries,
            preferences: &preferences,
            export_date: Utc::now(),
            version: EXPORT_VERSION,
        };

        serde_json::to_string_pretty(&bundle).unwrap_or_else(|_| "{}".to_string())
    }

    /// Restore store contents from an exported bundle
    ///
    /// Sections present in the bundle replace the stored record wholesale,
    /// caps included: an oversized imported history is kept as-is. Returns
    /// `false` when the bundle does not parse or a write fails.
    pub fn import_data(&self, json_data: &str) -> bool {
        match self.import_inner(json_data) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Failed to import data: {}", e);
                false
            }
        }
    }

    fn import_inner(&self, json_data: &str) -> Result<()> {
        let bundle: ImportBundle = serde_json::from_str(json_data)?;

        if let Some(queries) = bundle.queries {
            self.write_slot(QUERIES_KEY, &queries)?;
        }

        if let Some(preferences) = bundle.preferences {
            self.write_slot(PREFERENCES_KEY, &preferences)?;
        }

        Ok(())
    }

    /// Remove both records from the substrate
    pub fn clear_all_data(&self) {
        let cleared = self
            .slots
            .remove(QUERIES_KEY)
            .and_then(|_| self.slots.remove(PREFERENCES_KEY));

        if let Err(e) = cleared {
            tracing::warn!("Failed to clear storage: {}", e);
        }
    }

    /// Entry count and raw serialized size of the store
    pub fn storage_stats(&self) -> StorageStats {
        let queries = self.stored_queries();

        let queries_raw = self.raw_slot_len(QUERIES_KEY);
        let preferences_raw = self.raw_slot_len(PREFERENCES_KEY);
        let total_bytes = queries_raw + preferences_raw;

        StorageStats {
            queries_count: queries.len(),
            storage_used: format!("{:.1} KB", total_bytes as f64 / 1024.0),
        }
    }

    // ------------------------------------------------------------------
    // Slot helpers
    // ------------------------------------------------------------------

    fn read_slot<T: serde::de::DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.slots.read(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    fn write_slot<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.slots.write(key, &json)
    }

    fn raw_slot_len(&self, key: &str) -> usize {
        self.slots
            .read(key)
            .ok()
            .flatten()
            .map(|raw| raw.len())
            .unwrap_or(0)
    }
}

// ============================================================================
// TESTS
// ============================================================================
