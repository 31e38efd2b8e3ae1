use super::*;
use std::time::Duration;

use crate::session::StoredRoom;
use crate::state::test_helpers::{test_state, test_state_with_user};
use crate::store::MessageStore;

fn store_snapshot(state: &AppState) -> MessageStore {
    state
        .store
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

#[test]
fn open_without_identity_redirects_to_landing() {
    let state = test_state();
    let err = ChatView::open(&state, "1").unwrap_err();
    assert_eq!(err, FlowError::MissingIdentity);
    assert_eq!(err.redirect(), Some(crate::views::Nav::Landing));
}

#[test]
fn not_found_does_not_redirect() {
    let state = test_state_with_user("demo_user");
    let err = ChatView::open(&state, "999").unwrap_err();
    assert_eq!(err.redirect(), None);
}

#[test]
fn open_unknown_room_is_not_found() {
    let state = test_state_with_user("demo_user");
    let err = ChatView::open(&state, "999").unwrap_err();
    assert_eq!(err, FlowError::RoomNotFound("999".into()));
}

#[test]
fn seeded_room_loads_its_four_messages_in_order() {
    let state = test_state_with_user("demo_user");
    let view = ChatView::open(&state, "1").unwrap();

    let rows = view.transcript(model::now_ms());
    assert_eq!(rows.len(), 4);
    let ids: Vec<&str> = rows.iter().map(|r| r.message.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);
    // Four distinct senders, so every row shows its header.
    assert!(rows.iter().all(|r| r.show_header));
    assert!(rows.iter().all(|r| !r.own));
}

#[test]
fn seeded_rows_carry_relative_age_labels() {
    let state = test_state_with_user("demo_user");
    let view = ChatView::open(&state, "1").unwrap();
    let rows = view.transcript(model::now_ms());
    // Seeded 15/10/5/2 minutes before the anchor.
    assert_eq!(rows[0].label, "15 minutes ago");
    assert_eq!(rows[3].label, "2 minutes ago");
}

#[test]
fn online_count_excludes_offline_members() {
    let state = test_state_with_user("demo_user");
    let view = ChatView::open(&state, "1").unwrap();
    // john_developer and mike_photographer are offline.
    assert_eq!(view.online_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn sending_trims_appends_and_later_delivers() {
    let state = test_state_with_user("demo_user");
    let view = ChatView::open(&state, "1").unwrap();

    let message = view.send("  hello  ").unwrap();
    assert_eq!(message.content, "hello");
    assert_eq!(message.status, MessageStatus::Sent);
    assert_eq!(message.user_id, LOCAL_USER_ID);
    assert_eq!(message.user_name, "demo_user");

    {
        let store = store_snapshot(&state);
        assert_eq!(store.len("1"), 5);
        assert_eq!(store.messages("1").last().unwrap().id, message.id);
    }

    tokio::time::sleep(Duration::from_millis(501)).await;
    tokio::task::yield_now().await;
    let store = store_snapshot(&state);
    let delivered = store.messages("1").iter().find(|m| m.id == message.id).unwrap();
    assert_eq!(delivered.status, MessageStatus::Delivered);
}

#[test]
fn blank_submission_is_rejected_and_store_unchanged() {
    let state = test_state_with_user("demo_user");
    let view = ChatView::open(&state, "1").unwrap();

    assert_eq!(view.send("   "), Err(FlowError::EmptyMessage));
    assert_eq!(view.send(""), Err(FlowError::EmptyMessage));

    let store = store_snapshot(&state);
    assert_eq!(store.len("1"), 4);
}

#[tokio::test(start_paused = true)]
async fn consecutive_own_messages_suppress_the_repeated_header() {
    let state = test_state_with_user("demo_user");
    let view = ChatView::open(&state, "1").unwrap();

    view.send("first").unwrap();
    view.send("second").unwrap();

    let rows = view.transcript(model::now_ms());
    assert_eq!(rows.len(), 6);
    // First own message follows sarah_writer, so it shows its header.
    assert!(rows[4].show_header);
    assert!(rows[4].own);
    // The immediate follow-up from the same sender does not.
    assert!(!rows[5].show_header);
    assert!(rows[5].own);
}

#[tokio::test(start_paused = true)]
async fn own_rows_carry_the_status_suffix() {
    let state = test_state_with_user("demo_user");
    let view = ChatView::open(&state, "1").unwrap();
    let message = view.send("hello").unwrap();

    let rows = view.transcript(model::now_ms());
    assert!(rows.last().unwrap().label.ends_with("• Sent"));

    tokio::time::sleep(Duration::from_millis(501)).await;
    tokio::task::yield_now().await;
    let rows = view.transcript(model::now_ms());
    let row = rows.iter().find(|r| r.message.id == message.id).unwrap();
    assert!(row.label.ends_with("• ✓✓"));

    // Peer messages never get a suffix.
    assert!(rows[0].label.ends_with("ago"));
}

#[tokio::test(start_paused = true)]
async fn sending_starts_the_typing_pulse() {
    let state = test_state_with_user("demo_user");
    let view = ChatView::open(&state, "1").unwrap();
    view.send("hello").unwrap();

    tokio::time::sleep(Duration::from_millis(999)).await;
    assert!(view.typing().is_none());

    tokio::time::sleep(Duration::from_millis(2)).await;
    tokio::task::yield_now().await;
    assert_eq!(view.typing().unwrap().user_name, "alex_designer");

    tokio::time::sleep(Duration::from_millis(2_001)).await;
    tokio::task::yield_now().await;
    assert!(view.typing().is_none());
}

#[tokio::test(start_paused = true)]
async fn close_cancels_the_views_timers() {
    let state = test_state_with_user("demo_user");
    let view = ChatView::open(&state, "1").unwrap();
    let message = view.send("hello").unwrap();
    view.close();

    tokio::time::sleep(Duration::from_millis(3_001)).await;
    tokio::task::yield_now().await;

    let store = store_snapshot(&state);
    let sent = store.messages("1").iter().find(|m| m.id == message.id).unwrap();
    assert_eq!(sent.status, MessageStatus::Sent);
    drop(store);
    assert!(view.typing().is_none());
}

#[test]
fn created_rooms_resolve_from_session_metadata() {
    let state = test_state_with_user("demo_user");
    state.session.set_room(&StoredRoom {
        id: "1724".into(),
        name: "rustaceans_lounge".into(),
        description: String::new(),
        created_by: "demo_user".into(),
        created_at: model::now_ms(),
        is_private: false,
    });

    let view = ChatView::open(&state, "1724").unwrap();
    assert_eq!(view.room().name, "rustaceans_lounge");
    assert_eq!(view.room().member_count, 1);
    assert!(view.room().description.is_none());
    // Fresh room, empty transcript.
    assert!(view.transcript(model::now_ms()).is_empty());
}
