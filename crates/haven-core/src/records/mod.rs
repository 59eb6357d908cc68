//! Records module - the persisted data model
//!
//! Defines the two records the gateway stores:
//! - [`StoredQuery`]: one assistant interaction, newest-first in history
//! - [`UserPreferences`]: the singleton settings record with partial-merge updates
//!
//! Both serialize to camelCase JSON with RFC 3339 timestamps, the on-disk and
//! export wire format.

mod preferences;
mod query;

pub use preferences::{PreferencesPatch, UserPreferences};
pub use query::{StoredQuery, DEFAULT_CATEGORY};
