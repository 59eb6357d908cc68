//! User Preferences - the singleton settings record
//!
//! One record per installation, created with defaults on first read and
//! mutated only through partial-merge patches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The singleton user preferences record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Favorited topic identifiers (membership toggled, order irrelevant)
    pub favorite_topics: Vec<String>,
    /// Recent search terms, most-recent-first, deduplicated, capped at 20
    pub recent_searches: Vec<String>,
    /// Whether the app operates from cached data only
    pub offline_mode: bool,
    /// Last successful sync time
    pub last_sync: DateTime<Utc>,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            favorite_topics: vec![],
            recent_searches: vec![],
            offline_mode: true,
            last_sync: Utc::now(),
        }
    }
}

impl UserPreferences {
    /// Apply a partial update: provided fields overwrite, omitted fields are retained
    pub fn apply(&mut self, patch: PreferencesPatch) {
        if let Some(favorite_topics) = patch.favorite_topics {
            self.favorite_topics = favorite_topics;
        }
        if let Some(recent_searches) = patch.recent_searches {
            self.recent_searches = recent_searches;
        }
        if let Some(offline_mode) = patch.offline_mode {
            self.offline_mode = offline_mode;
        }
        if let Some(last_sync) = patch.last_sync {
            self.last_sync = last_sync;
        }
    }
}

/// Partial update for [`UserPreferences`]
///
/// Every field is optional; `None` means "keep the stored value".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesPatch {
    pub favorite_topics: Option<Vec<String>>,
    pub recent_searches: Option<Vec<String>>,
    pub offline_mode: Option<bool>,
    pub last_sync: Option<DateTime<Utc>>,
}

// ============================================================================
// TESTS
// ============================================================================
