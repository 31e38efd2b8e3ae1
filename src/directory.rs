//! Fixture directory: the stand-in for a real directory/presence service.
//!
//! DESIGN
//! ======
//! An explicit, constructible repository rather than module-level statics:
//! callers receive a `Directory` by injection and the whole thing is
//! read-only after [`Directory::seeded`] returns. Every relative age in the
//! fixture data is anchored to the caller's `anchor_ms` so the seeded world
//! always looks freshly active.
//!
//! A real implementation would serve the same shapes from a backend:
//! `room(id)`, `rooms()`, and the per-room seed transcripts.

use std::collections::HashMap;

use crate::model::{ChatRoom, Message, MessageStatus, User};

const MINUTE_MS: i64 = 60_000;
const DAY_MS: i64 = 86_400_000;

const fn minutes(n: i64) -> i64 {
    n * MINUTE_MS
}

const fn days(n: i64) -> i64 {
    n * DAY_MS
}

// =============================================================================
// DIRECTORY
// =============================================================================

/// Read-only registry of users, rooms, and seed transcripts.
#[derive(Debug, Clone)]
pub struct Directory {
    users: Vec<User>,
    rooms: Vec<ChatRoom>,
    seed_messages: HashMap<String, Vec<Message>>,
}

impl Directory {
    /// Build the fixture directory, anchoring every relative age to
    /// `anchor_ms`.
    #[must_use]
    pub fn seeded(anchor_ms: i64) -> Self {
        let users = vec![
            user("1", "alex_designer", true, None),
            user("2", "maria_student", true, None),
            user("3", "john_developer", false, Some(anchor_ms - minutes(5))),
            user("4", "sarah_writer", true, None),
            user("5", "mike_photographer", false, Some(anchor_ms - minutes(30))),
        ];

        // member_count is the advertised headcount, not members.len().
        let rooms = vec![
            room(
                "1",
                "weekend_plans_chat",
                "Planning our weekend activities",
                "alex_designer",
                anchor_ms - days(2),
                5,
                users.clone(),
            ),
            room(
                "2",
                "book_club_discussion",
                "Monthly book club conversations",
                "sarah_writer",
                anchor_ms - days(7),
                8,
                users[..3].to_vec(),
            ),
            room(
                "3",
                "project_alpha_team",
                "Project Alpha collaboration space",
                "john_developer",
                anchor_ms - days(14),
                12,
                users[..4].to_vec(),
            ),
            room(
                "4",
                "random_conversations",
                "Just chatting about anything",
                "maria_student",
                anchor_ms - days(1),
                20,
                users.clone(),
            ),
            room(
                "5",
                "gaming_buddies",
                "Gaming sessions and strategy",
                "mike_photographer",
                anchor_ms - days(5),
                15,
                users[1..4].to_vec(),
            ),
        ];

        let mut seed_messages = HashMap::new();
        seed_messages.insert(
            "1".to_string(),
            vec![
                message(
                    "1",
                    "1",
                    "1",
                    "alex_designer",
                    "Hey everyone, what are your thoughts on the new design?",
                    anchor_ms - minutes(15),
                    MessageStatus::Read,
                ),
                message(
                    "2",
                    "1",
                    "2",
                    "maria_student",
                    "I love the clean interface, very intuitive",
                    anchor_ms - minutes(10),
                    MessageStatus::Read,
                ),
                message(
                    "3",
                    "1",
                    "3",
                    "john_developer",
                    "The real-time updates work perfectly",
                    anchor_ms - minutes(5),
                    MessageStatus::Delivered,
                ),
                message(
                    "4",
                    "1",
                    "4",
                    "sarah_writer",
                    "This is so much easier than other chat apps",
                    anchor_ms - minutes(2),
                    MessageStatus::Sent,
                ),
            ],
        );
        seed_messages.insert(
            "2".to_string(),
            vec![
                message(
                    "5",
                    "2",
                    "4",
                    "sarah_writer",
                    "What did everyone think about the last chapter?",
                    anchor_ms - minutes(30),
                    MessageStatus::Read,
                ),
                message(
                    "6",
                    "2",
                    "2",
                    "maria_student",
                    "The plot twist was incredible!",
                    anchor_ms - minutes(20),
                    MessageStatus::Read,
                ),
            ],
        );
        seed_messages.insert(
            "3".to_string(),
            vec![
                message(
                    "7",
                    "3",
                    "3",
                    "john_developer",
                    "Team, we need to discuss the sprint goals",
                    anchor_ms - minutes(45),
                    MessageStatus::Read,
                ),
                message(
                    "8",
                    "3",
                    "1",
                    "alex_designer",
                    "I can have the mockups ready by tomorrow",
                    anchor_ms - minutes(35),
                    MessageStatus::Read,
                ),
            ],
        );

        Self { users, rooms, seed_messages }
    }

    /// Look up a room by id.
    #[must_use]
    pub fn room(&self, id: &str) -> Option<&ChatRoom> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// All seeded rooms, in listing order.
    #[must_use]
    pub fn rooms(&self) -> &[ChatRoom] {
        &self.rooms
    }

    /// Look up a user by id.
    #[must_use]
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// All seeded users.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Seed transcripts, keyed by room id. Rooms without seed traffic are
    /// simply absent.
    #[must_use]
    pub fn seed_messages(&self) -> &HashMap<String, Vec<Message>> {
        &self.seed_messages
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn user(id: &str, display_name: &str, is_online: bool, last_seen: Option<i64>) -> User {
    User {
        id: id.to_string(),
        display_name: display_name.to_string(),
        is_online,
        last_seen,
    }
}

fn room(
    id: &str,
    name: &str,
    description: &str,
    created_by: &str,
    created_at: i64,
    member_count: u32,
    members: Vec<User>,
) -> ChatRoom {
    ChatRoom {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        created_by: created_by.to_string(),
        created_at,
        member_count,
        members,
        last_message: None,
    }
}

fn message(
    id: &str,
    room_id: &str,
    user_id: &str,
    user_name: &str,
    content: &str,
    timestamp: i64,
    status: MessageStatus,
) -> Message {
    Message {
        id: id.to_string(),
        room_id: room_id.to_string(),
        user_id: user_id.to_string(),
        user_name: user_name.to_string(),
        content: content.to_string(),
        timestamp,
        status,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
