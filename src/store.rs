//! Per-room message store.
//!
//! DESIGN
//! ======
//! Room id maps to an ordered `Vec<Message>`; messages render in insertion
//! order and are never deleted. Status updates happen in place and only
//! move forward along the lifecycle. Unknown rooms read as empty transcripts
//! and unknown message ids make status updates a no-op, mirroring how a
//! delivery acknowledgment for a discarded message should be ignored rather
//! than raised.

use std::collections::HashMap;

use crate::directory::Directory;
use crate::model::{Message, MessageStatus};

/// Ordered per-room message sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageStore {
    rooms: HashMap<String, Vec<Message>>,
}

impl MessageStore {
    #[must_use]
    pub fn new() -> Self {
        Self { rooms: HashMap::new() }
    }

    /// Populate the store from the directory's seed transcripts.
    #[must_use]
    pub fn from_seed(directory: &Directory) -> Self {
        Self { rooms: directory.seed_messages().clone() }
    }

    /// Append a message at the end of a room's sequence.
    ///
    /// Room existence is not validated here; the send path resolves the room
    /// before it builds the message.
    pub fn append(&mut self, room_id: &str, message: Message) {
        self.rooms.entry(room_id.to_string()).or_default().push(message);
    }

    /// Advance the status of the matching message in place.
    ///
    /// Returns `true` if a message was updated. A missing id is a no-op, and
    /// so is any update that would move the status backwards or sideways:
    /// the lifecycle is forward-only.
    pub fn advance_status(&mut self, message_id: &str, new_status: MessageStatus) -> bool {
        for messages in self.rooms.values_mut() {
            if let Some(message) = messages.iter_mut().find(|m| m.id == message_id) {
                if new_status.rank() <= message.status.rank() {
                    return false;
                }
                message.status = new_status;
                return true;
            }
        }
        false
    }

    /// A room's transcript in insertion order. Unknown rooms are empty, not
    /// an error.
    #[must_use]
    pub fn messages(&self, room_id: &str) -> &[Message] {
        self.rooms.get(room_id).map_or(&[], Vec::as_slice)
    }

    /// Number of messages in a room.
    #[must_use]
    pub fn len(&self, room_id: &str) -> usize {
        self.messages(room_id).len()
    }

    /// True when the room has no messages.
    #[must_use]
    pub fn is_empty(&self, room_id: &str) -> bool {
        self.messages(room_id).is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
