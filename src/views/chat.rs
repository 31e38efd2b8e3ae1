//! Chat view: the live transcript for one room.
//!
//! DESIGN
//! ======
//! Opening the view requires a stored identity (otherwise the caller
//! redirects to the landing view) and a resolvable room: first the seeded
//! directory, then metadata for rooms created this session. Sending trims
//! the content, rejects blank input, appends the message as `sent`, and
//! hands the simulator the delivery and typing timers. Transcript rows carry
//! the grouping and labeling rules the renderer needs: consecutive messages
//! from the same sender suppress the repeated header, and own messages get a
//! status suffix.

use std::sync::PoisonError;

use tracing::info;
use uuid::Uuid;

use crate::model::{self, ChatRoom, Message, MessageStatus, TypingIndicator};
use crate::state::AppState;
use crate::timefmt::time_ago;
use crate::views::FlowError;

/// Synthetic user id for the local sender, which has no directory entry.
pub const LOCAL_USER_ID: &str = "current-user";

// =============================================================================
// TRANSCRIPT ROW
// =============================================================================

/// One rendered transcript line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRow {
    pub message: Message,
    /// Sender identity/avatar is shown only when the immediately preceding
    /// message came from a different sender.
    pub show_header: bool,
    /// True when the message was sent by the current visitor.
    pub own: bool,
    /// Relative-age label, with the sender-side status suffix on own rows.
    pub label: String,
}

// =============================================================================
// CHAT VIEW
// =============================================================================

pub struct ChatView {
    state: AppState,
    room: ChatRoom,
    display_name: String,
}

impl std::fmt::Debug for ChatView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatView")
            .field("room", &self.room)
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}

impl ChatView {
    /// Open the chat view for a room.
    ///
    /// # Errors
    /// `MissingIdentity` when no display name is stored, `RoomNotFound` when
    /// the id resolves neither in the directory nor in created-room
    /// metadata.
    pub fn open(state: &AppState, room_id: &str) -> Result<Self, FlowError> {
        let user = state.session.current_user().ok_or(FlowError::MissingIdentity)?;
        let room = resolve_room(state, room_id)
            .ok_or_else(|| FlowError::RoomNotFound(room_id.to_string()))?;
        Ok(Self {
            state: state.clone(),
            room,
            display_name: user.display_name,
        })
    }

    #[must_use]
    pub fn room(&self) -> &ChatRoom {
        &self.room
    }

    /// Members currently online, for the header line.
    #[must_use]
    pub fn online_count(&self) -> usize {
        self.room.members.iter().filter(|m| m.is_online).count()
    }

    /// Submit a message.
    ///
    /// The content is trimmed; blank input is rejected and the store is left
    /// untouched. On success the message is appended as `sent`, its delivery
    /// transition is scheduled, and the room's typing pulse starts.
    ///
    /// # Errors
    /// `EmptyMessage` for blank or whitespace-only content.
    pub fn send(&self, content: &str) -> Result<Message, FlowError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(FlowError::EmptyMessage);
        }

        let message = Message {
            id: Uuid::new_v4().to_string(),
            room_id: self.room.id.clone(),
            user_id: LOCAL_USER_ID.to_string(),
            user_name: self.display_name.clone(),
            content: content.to_string(),
            timestamp: model::now_ms(),
            status: MessageStatus::Sent,
        };

        self.state
            .store
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .append(&self.room.id, message.clone());

        self.state.simulator.schedule_delivery(&message.id, &self.room.id);
        self.state.simulator.trigger_typing(&self.room.id);

        info!(room_id = %self.room.id, message_id = %message.id, "message sent");
        Ok(message)
    }

    /// Presentation rows for the transcript, in insertion order.
    #[must_use]
    pub fn transcript(&self, now_ms: i64) -> Vec<TranscriptRow> {
        let store = self.state.store.lock().unwrap_or_else(PoisonError::into_inner);
        let messages = store.messages(&self.room.id);

        let mut rows = Vec::with_capacity(messages.len());
        for (i, message) in messages.iter().enumerate() {
            let own = message.user_name == self.display_name;
            let show_header = i == 0 || messages[i - 1].user_name != message.user_name;
            let mut label = time_ago(message.timestamp, now_ms);
            if own {
                match message.status {
                    MessageStatus::Sent => label.push_str(" • Sent"),
                    MessageStatus::Delivered => label.push_str(" • ✓✓"),
                    MessageStatus::Sending | MessageStatus::Read => {}
                }
            }
            rows.push(TranscriptRow {
                message: message.clone(),
                show_header,
                own,
                label,
            });
        }
        rows
    }

    /// Whoever is currently shown as typing in this room.
    #[must_use]
    pub fn typing(&self) -> Option<TypingIndicator> {
        self.state.typing_in(&self.room.id)
    }

    /// Tear the view down: cancel the timers it owns so nothing mutates
    /// state for a no-longer-displayed room.
    pub fn close(&self) {
        self.state.simulator.cancel_room(&self.room.id);
    }
}

// =============================================================================
// ROOM RESOLUTION
// =============================================================================

/// Directory rooms first, then rooms created this session.
fn resolve_room(state: &AppState, room_id: &str) -> Option<ChatRoom> {
    if let Some(room) = state.directory.room(room_id) {
        return Some(room.clone());
    }

    let stored = state.session.room(room_id)?;
    let description = if stored.description.is_empty() {
        None
    } else {
        Some(stored.description)
    };
    Some(ChatRoom {
        id: stored.id,
        name: stored.name,
        description,
        created_by: stored.created_by,
        created_at: stored.created_at,
        // Only the creator so far; created rooms start with an empty roster.
        member_count: 1,
        members: Vec::new(),
        last_message: None,
    })
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
