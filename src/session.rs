//! Local key-value session store.
//!
//! DESIGN
//! ======
//! The analog of the browser's local storage: a clonable handle over a
//! string-to-string map whose values are serialized JSON text. It holds the
//! visitor's chosen display name under a fixed key and, after room creation,
//! a `room_<id>` metadata record. Ephemeral by design; nothing here is a
//! durability layer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Fixed key for the current visitor's identity record.
pub const CURRENT_USER_KEY: &str = "chat_easy_user";

/// Storage key for a created room's metadata record.
#[must_use]
pub fn room_key(room_id: &str) -> String {
    format!("room_{room_id}")
}

// =============================================================================
// STORED RECORDS
// =============================================================================

/// The visitor's chosen identity. A display name stands in for a verified
/// account; there is no authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub display_name: String,
}

/// Metadata written by the room-creation flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRoom {
    pub id: String,
    pub name: String,
    /// Trimmed description; may be empty.
    pub description: String,
    pub created_by: String,
    pub created_at: i64,
    pub is_private: bool,
}

// =============================================================================
// SESSION STORE
// =============================================================================

/// Clonable handle over the shared key-value map.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw serialized text for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Store raw serialized text under a key, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    /// Remove a key, returning its previous value.
    pub fn remove(&self, key: &str) -> Option<String> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
    }

    /// The stored identity, if a valid record is present.
    #[must_use]
    pub fn current_user(&self) -> Option<StoredUser> {
        let raw = self.get(CURRENT_USER_KEY)?;
        serde_json::from_str(&raw).ok()
    }

    pub fn set_current_user(&self, user: &StoredUser) {
        if let Ok(json) = serde_json::to_string(user) {
            self.set(CURRENT_USER_KEY, &json);
        }
    }

    /// Metadata for a created room, if a valid record is present.
    #[must_use]
    pub fn room(&self, room_id: &str) -> Option<StoredRoom> {
        let raw = self.get(&room_key(room_id))?;
        serde_json::from_str(&raw).ok()
    }

    pub fn set_room(&self, room: &StoredRoom) {
        if let Ok(json) = serde_json::to_string(room) {
            self.set(&room_key(&room.id), &json);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
