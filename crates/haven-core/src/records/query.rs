//! Stored Query - one assistant interaction in the history
//!
//! Every successful assistant interaction produces one record:
//! - The original free-text input and the generated response
//! - A time-ordered id and creation timestamp
//! - A free-text category label, defaulting to "general"

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category assigned when the caller supplies none
pub const DEFAULT_CATEGORY: &str = "general";

/// A single stored assistant interaction
///
/// Records are immutable after creation: the gateway only ever prepends new
/// ones, truncates the tail, or replaces the whole sequence on import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredQuery {
    /// Unique identifier (UUID v7, time-ordered), never reused
    pub id: String,
    /// Original free-text input
    pub query: String,
    /// Generated/matched response text
    pub response: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
    /// Free-text category label
    pub category: String,
}

impl StoredQuery {
    /// Create a new record with a fresh id and the current timestamp
    pub fn new(query: impl Into<String>, response: impl Into<String>, category: Option<&str>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            query: query.into(),
            response: response.into(),
            timestamp: Utc::now(),
            category: category.unwrap_or(DEFAULT_CATEGORY).to_string(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
