//! Group-creation view.
//!
//! Validates the form, simulates the server round-trip a real creation flow
//! would make, persists the room metadata to the session store, and
//! navigates into the new room.

use tracing::info;
use uuid::Uuid;

use crate::model;
use crate::session::StoredRoom;
use crate::state::AppState;
use crate::views::{FlowError, Nav};

/// Room names cap at 50 characters in the creation form.
pub const MAX_ROOM_NAME_LEN: usize = 50;

/// Descriptions cap at 200 characters.
pub const MAX_ROOM_DESCRIPTION_LEN: usize = 200;

/// Create a room and navigate into it.
///
/// # Errors
/// `MissingIdentity` without a stored display name; `EmptyRoomName`,
/// `RoomNameTooLong`, or `DescriptionTooLong` on invalid input.
pub async fn create_room(
    state: &AppState,
    name: &str,
    description: &str,
    is_private: bool,
) -> Result<Nav, FlowError> {
    let creator = state.session.current_user().ok_or(FlowError::MissingIdentity)?;

    let name = name.trim();
    if name.is_empty() {
        return Err(FlowError::EmptyRoomName);
    }
    if name.chars().count() > MAX_ROOM_NAME_LEN {
        return Err(FlowError::RoomNameTooLong);
    }
    let description = description.trim();
    if description.chars().count() > MAX_ROOM_DESCRIPTION_LEN {
        return Err(FlowError::DescriptionTooLong);
    }

    // Stand-in for the server round-trip that would create the room.
    tokio::time::sleep(state.simulator.config().creation_delay).await;

    let room = StoredRoom {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        description: description.to_string(),
        created_by: creator.display_name,
        created_at: model::now_ms(),
        is_private,
    };
    state.session.set_room(&room);

    info!(room_id = %room.id, room_name = %room.name, is_private, "room created");
    Ok(Nav::Chat { room_id: room.id })
}

#[cfg(test)]
#[path = "create_group_test.rs"]
mod tests;
