//! Slot Substrate
//!
//! The persistence seam: a slot is a single named entry in a key-value store.
//! The gateway addresses exactly two slots (query history and preferences),
//! so the substrate contract is deliberately tiny.

use std::collections::HashMap;
use std::sync::Mutex;

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Storage error type
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
    /// Initialization error
    #[error("Initialization error: {0}")]
    Init(String),
}

/// Storage result type
pub type Result<T> = std::result::Result<T, StorageError>;

// ============================================================================
// SUBSTRATE TRAIT
// ============================================================================

/// A byte-oriented key-value substrate addressed by string keys
///
/// Implementations must be shareable across the application (`Send + Sync`);
/// all operations take `&self`.
pub trait SlotStore: Send + Sync {
    /// Read a slot's serialized content, `None` if the slot is absent
    fn read(&self, key: &str) -> Result<Option<String>>;
    /// Write a slot's serialized content, creating or replacing it
    fn write(&self, key: &str, value: &str) -> Result<()>;
    /// Remove a slot entirely; removing an absent slot is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

// ============================================================================
// IN-MEMORY SUBSTRATE
// ============================================================================

/// Ephemeral in-memory substrate for tests and throwaway sessions
#[derive(Debug, Default)]
pub struct MemorySlots {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlots {
    /// Create an empty in-memory substrate
    pub fn new() -> Self {
        Self::default()
    }
}

impl SlotStore for MemorySlots {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::Init("Slot lock poisoned".to_string()))?;
        Ok(slots.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::Init("Slot lock poisoned".to_string()))?;
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut slots = self
            .slots
            .lock()
            .map_err(|_| StorageError::Init("Slot lock poisoned".to_string()))?;
        slots.remove(key);
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
