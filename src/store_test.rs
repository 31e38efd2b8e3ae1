use super::*;

const ANCHOR_MS: i64 = 1_700_000_000_000;

fn seeded() -> MessageStore {
    MessageStore::from_seed(&Directory::seeded(ANCHOR_MS))
}

fn new_message(id: &str, room_id: &str) -> Message {
    Message {
        id: id.to_string(),
        room_id: room_id.to_string(),
        user_id: "current-user".into(),
        user_name: "demo_user".into(),
        content: "hello".into(),
        timestamp: ANCHOR_MS,
        status: MessageStatus::Sent,
    }
}

#[test]
fn seed_populates_room_one_in_order() {
    let store = seeded();
    assert_eq!(store.len("1"), 4);
    let ids: Vec<&str> = store.messages("1").iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["1", "2", "3", "4"]);
}

#[test]
fn unseeded_room_reads_empty() {
    let store = seeded();
    assert!(store.messages("999").is_empty());
    assert_eq!(store.len("999"), 0);
    assert!(store.is_empty("999"));
}

#[test]
fn append_extends_only_the_target_room() {
    let mut store = seeded();
    let other_before = store.messages("2").to_vec();

    store.append("1", new_message("100", "1"));

    assert_eq!(store.len("1"), 5);
    assert_eq!(store.messages("1").last().unwrap().id, "100");
    assert_eq!(store.messages("2"), other_before.as_slice());
}

#[test]
fn append_creates_a_room_sequence_on_demand() {
    let mut store = MessageStore::new();
    store.append("7", new_message("1", "7"));
    assert_eq!(store.len("7"), 1);
}

#[test]
fn advance_unknown_id_is_a_no_op() {
    let mut store = seeded();
    let snapshot = store.clone();

    assert!(!store.advance_status("does-not-exist", MessageStatus::Delivered));
    assert_eq!(store, snapshot);
}

#[test]
fn advance_moves_status_forward() {
    let mut store = seeded();
    // Seed message "4" is sent.
    assert!(store.advance_status("4", MessageStatus::Delivered));
    let status = store.messages("1").iter().find(|m| m.id == "4").unwrap().status;
    assert_eq!(status, MessageStatus::Delivered);
}

#[test]
fn status_never_regresses() {
    let mut store = seeded();
    assert!(store.advance_status("4", MessageStatus::Delivered));
    let snapshot = store.clone();

    // A spurious backwards update is rejected and changes nothing.
    assert!(!store.advance_status("4", MessageStatus::Sent));
    assert_eq!(store, snapshot);
}

#[test]
fn advance_to_same_status_is_rejected() {
    let mut store = seeded();
    let snapshot = store.clone();
    // Seed message "3" is already delivered.
    assert!(!store.advance_status("3", MessageStatus::Delivered));
    assert_eq!(store, snapshot);
}

#[test]
fn forward_jumps_are_allowed() {
    let mut store = seeded();
    assert!(store.advance_status("4", MessageStatus::Read));
    let status = store.messages("1").iter().find(|m| m.id == "4").unwrap().status;
    assert_eq!(status, MessageStatus::Read);
}
