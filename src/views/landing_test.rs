use super::*;
use crate::state::test_helpers::test_state;

#[test]
fn blank_display_name_is_rejected() {
    let state = test_state();
    assert_eq!(
        join_chat(&state, "", Some("1")),
        Err(FlowError::EmptyDisplayName)
    );
    assert_eq!(
        join_chat(&state, "   ", Some("1")),
        Err(FlowError::EmptyDisplayName)
    );
    // Nothing was persisted.
    assert!(state.session.current_user().is_none());
}

#[test]
fn no_room_selected_surfaces_the_room_list() {
    let state = test_state();
    let outcome = join_chat(&state, "demo_user", None).unwrap();
    let JoinOutcome::ChooseRoom(rooms) = outcome else {
        panic!("expected room list");
    };
    assert_eq!(rooms.len(), 5);
    assert_eq!(rooms[0].name, "weekend_plans_chat");
    // Listing alone does not persist an identity.
    assert!(state.session.current_user().is_none());
}

#[test]
fn joining_stores_the_trimmed_name_and_navigates() {
    let state = test_state();
    let outcome = join_chat(&state, "  demo_user  ", Some("1")).unwrap();
    assert_eq!(
        outcome,
        JoinOutcome::Enter(Nav::Chat { room_id: "1".into() })
    );
    assert_eq!(state.session.current_user().unwrap().display_name, "demo_user");
}

#[test]
fn create_handoff_requires_a_name() {
    let state = test_state();
    assert_eq!(go_create(&state, " "), Err(FlowError::EmptyDisplayName));

    let nav = go_create(&state, "demo_user").unwrap();
    assert_eq!(nav, Nav::CreateGroup);
    assert_eq!(state.session.current_user().unwrap().display_name, "demo_user");
}
