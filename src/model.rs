//! Domain types shared by every view.
//!
//! DESIGN
//! ======
//! Pure data contracts: the field set and optionality are load-bearing
//! because the presentation layer reads every field. `user_id` and
//! `user_name` are denormalized onto each message at send time so historical
//! messages stay attributable even if a display name changes later.
//! Timestamps are milliseconds since Unix epoch throughout.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

// =============================================================================
// TIME
// =============================================================================

/// Current time as milliseconds since Unix epoch.
#[must_use]
pub fn now_ms() -> i64 {
    let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(dur.as_millis()).unwrap_or(0)
}

// =============================================================================
// MESSAGE STATUS
// =============================================================================

/// Delivery/acknowledgment stage of a message.
///
/// The lifecycle only ever moves forward: `sending → sent → delivered →
/// read`. The store enforces this with [`MessageStatus::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sending,
    Sent,
    Delivered,
    Read,
}

impl MessageStatus {
    /// Position in the forward-only lifecycle.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            MessageStatus::Sending => 0,
            MessageStatus::Sent => 1,
            MessageStatus::Delivered => 2,
            MessageStatus::Read => 3,
        }
    }
}

// =============================================================================
// USER
// =============================================================================

/// A participant as served by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub display_name: String,
    pub is_online: bool,
    /// Last-seen timestamp in milliseconds; meaningful only while offline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<i64>,
}

// =============================================================================
// MESSAGE
// =============================================================================

/// One transcript entry. Never deleted; only its `status` mutates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub room_id: String,
    pub user_id: String,
    pub user_name: String,
    /// Non-empty after trimming; the send path rejects blank submissions.
    pub content: String,
    pub timestamp: i64,
    pub status: MessageStatus,
}

// =============================================================================
// CHAT ROOM
// =============================================================================

/// A named conversation space with a membership list and a message history.
///
/// `member_count` is the advertised headcount and may disagree with the
/// loaded `members` roster. The fixture data keeps the two decoupled, the
/// same way a real directory can know a headcount without having loaded the
/// full member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRoom {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display name of the creator.
    pub created_by: String,
    pub created_at: i64,
    pub member_count: u32,
    pub members: Vec<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<Message>,
}

// =============================================================================
// TYPING INDICATOR
// =============================================================================

/// Transient "someone is composing" signal. Display-only, never persisted
/// alongside rooms or messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingIndicator {
    pub room_id: String,
    pub user_id: String,
    pub user_name: String,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
