//! View flows: landing, chat transcript, and group creation.
//!
//! ARCHITECTURE
//! ============
//! Each module is the controller for one navigable view. Flows validate
//! input synchronously, mutate shared state through `AppState`, and return a
//! [`Nav`] target or a [`FlowError`]. Nothing here is fatal: every error
//! degrades to a redirect, a not-found state, or a rejected submission.

pub mod chat;
pub mod create_group;
pub mod landing;

/// Navigation target produced by a view flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nav {
    Landing,
    Chat { room_id: String },
    CreateGroup,
}

/// User-facing failures. All of them are synchronous validation checks; none
/// crosses a component boundary as a panic.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// No stored display name: the caller redirects to the landing view.
    #[error("no stored display name")]
    MissingIdentity,
    /// Unresolvable room id: render a not-found state, never crash.
    #[error("room not found: {0}")]
    RoomNotFound(String),
    #[error("display name must not be empty")]
    EmptyDisplayName,
    #[error("message content must not be empty")]
    EmptyMessage,
    #[error("room name must not be empty")]
    EmptyRoomName,
    #[error("room name longer than {} characters", create_group::MAX_ROOM_NAME_LEN)]
    RoomNameTooLong,
    #[error("room description longer than {} characters", create_group::MAX_ROOM_DESCRIPTION_LEN)]
    DescriptionTooLong,
}

impl FlowError {
    /// Where the UI should land when this error surfaces, if anywhere.
    /// A missing identity always bounces back to the landing view.
    #[must_use]
    pub fn redirect(&self) -> Option<Nav> {
        match self {
            FlowError::MissingIdentity => Some(Nav::Landing),
            _ => None,
        }
    }
}
