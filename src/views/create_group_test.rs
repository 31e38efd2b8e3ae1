use super::*;
use crate::state::test_helpers::{test_state, test_state_with_user};
use crate::views::chat::ChatView;

#[tokio::test(start_paused = true)]
async fn creation_requires_a_stored_identity() {
    let state = test_state();
    let err = create_room(&state, "my_room", "", false).await.unwrap_err();
    assert_eq!(err, FlowError::MissingIdentity);
}

#[tokio::test(start_paused = true)]
async fn blank_room_name_is_rejected() {
    let state = test_state_with_user("demo_user");
    let err = create_room(&state, "   ", "", false).await.unwrap_err();
    assert_eq!(err, FlowError::EmptyRoomName);
}

#[tokio::test(start_paused = true)]
async fn over_long_fields_are_rejected() {
    let state = test_state_with_user("demo_user");

    let long_name = "x".repeat(MAX_ROOM_NAME_LEN + 1);
    let err = create_room(&state, &long_name, "", false).await.unwrap_err();
    assert_eq!(err, FlowError::RoomNameTooLong);

    let long_description = "y".repeat(MAX_ROOM_DESCRIPTION_LEN + 1);
    let err = create_room(&state, "ok_name", &long_description, false)
        .await
        .unwrap_err();
    assert_eq!(err, FlowError::DescriptionTooLong);

    // Exactly at the caps is fine.
    let name = "x".repeat(MAX_ROOM_NAME_LEN);
    let description = "y".repeat(MAX_ROOM_DESCRIPTION_LEN);
    assert!(create_room(&state, &name, &description, false).await.is_ok());
}

#[tokio::test(start_paused = true)]
async fn creation_persists_metadata_and_navigates_into_the_room() {
    let state = test_state_with_user("demo_user");

    let nav = create_room(&state, "  rustaceans_lounge  ", " Crustacean small talk ", true)
        .await
        .unwrap();
    let Nav::Chat { room_id } = nav else {
        panic!("expected chat navigation");
    };

    let stored = state.session.room(&room_id).unwrap();
    assert_eq!(stored.id, room_id);
    assert_eq!(stored.name, "rustaceans_lounge");
    assert_eq!(stored.description, "Crustacean small talk");
    assert_eq!(stored.created_by, "demo_user");
    assert!(stored.is_private);
    assert!(stored.created_at > 0);

    // The chat view resolves the created room.
    let view = ChatView::open(&state, &room_id).unwrap();
    assert_eq!(view.room().name, "rustaceans_lounge");
    assert_eq!(view.room().created_by, "demo_user");
}

#[tokio::test(start_paused = true)]
async fn rejected_forms_store_nothing() {
    let state = test_state_with_user("demo_user");
    assert!(create_room(&state, "", "", false).await.is_err());
    // No room_<id> record was written: a fresh unknown id stays unknown and
    // the identity record is the only entry.
    assert!(state.session.room("anything").is_none());
}
