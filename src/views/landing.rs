//! Landing view: name entry and room selection.
//!
//! The visitor supplies a display name, optionally picks a room from the
//! directory listing, and either joins it or heads to the creation form.
//! The trimmed name is persisted to the session store before navigation so
//! the other views can require it.

use tracing::info;

use crate::model::ChatRoom;
use crate::session::StoredUser;
use crate::state::AppState;
use crate::views::{FlowError, Nav};

/// Outcome of the join flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinOutcome {
    /// No room chosen yet: surface the selectable room list.
    ChooseRoom(Vec<ChatRoom>),
    /// Identity stored; proceed to the chat view.
    Enter(Nav),
}

/// Validate the name, then either list rooms or enter the selected one.
pub fn join_chat(
    state: &AppState,
    display_name: &str,
    selected_room: Option<&str>,
) -> Result<JoinOutcome, FlowError> {
    let name = display_name.trim();
    if name.is_empty() {
        return Err(FlowError::EmptyDisplayName);
    }

    let Some(room_id) = selected_room else {
        return Ok(JoinOutcome::ChooseRoom(state.directory.rooms().to_vec()));
    };

    state
        .session
        .set_current_user(&StoredUser { display_name: name.to_string() });
    info!(display_name = name, room_id, "joining chat");
    Ok(JoinOutcome::Enter(Nav::Chat { room_id: room_id.to_string() }))
}

/// Validate the name and hand off to the room-creation view.
pub fn go_create(state: &AppState, display_name: &str) -> Result<Nav, FlowError> {
    let name = display_name.trim();
    if name.is_empty() {
        return Err(FlowError::EmptyDisplayName);
    }

    state
        .session
        .set_current_user(&StoredUser { display_name: name.to_string() });
    Ok(Nav::CreateGroup)
}

#[cfg(test)]
#[path = "landing_test.rs"]
mod tests;
