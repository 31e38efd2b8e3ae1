//! Scripted walkthrough of the three views against the seeded fixtures.
//!
//! Seeds the directory, joins a room from the landing flow, exercises the
//! simulated message lifecycle (send, delivery acknowledgment, typing
//! pulse), then creates a room and posts into it. Everything is logged via
//! `tracing`; there is no network and no persistence beyond the in-memory
//! session store.

mod directory;
mod model;
mod services;
mod session;
mod state;
mod store;
mod timefmt;
mod views;

use std::sync::PoisonError;

use tracing::info;

use crate::directory::Directory;
use crate::services::lifecycle::LifecycleConfig;
use crate::state::AppState;
use crate::views::chat::ChatView;
use crate::views::landing::JoinOutcome;
use crate::views::{Nav, create_group, landing};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = LifecycleConfig::from_env();
    let state = AppState::new(Directory::seeded(model::now_ms()), config);

    // Landing: name entry, then room selection.
    let outcome = landing::join_chat(&state, "demo_user", None).expect("valid display name");
    if let JoinOutcome::ChooseRoom(rooms) = outcome {
        for room in &rooms {
            info!(
                room_id = %room.id,
                name = %room.name,
                members = room.member_count,
                created = %timefmt::time_ago(room.created_at, model::now_ms()),
                "room available"
            );
        }
    }
    let Ok(JoinOutcome::Enter(Nav::Chat { room_id })) =
        landing::join_chat(&state, "demo_user", Some("1"))
    else {
        unreachable!("seeded room 1 always joins");
    };

    // Chat: transcript, send, delivery, typing pulse.
    let view = ChatView::open(&state, &room_id).expect("seeded room resolves");
    info!(room = %view.room().name, online = view.online_count(), "chat opened");
    log_transcript(&view);

    let message = view.send("This mock feels surprisingly real").expect("non-empty message");
    info!(message_id = %message.id, status = ?message.status, "sent");

    tokio::time::sleep(config.delivery_delay + config.delivery_delay / 2).await;
    let status = state
        .store
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .messages(&room_id)
        .iter()
        .find(|m| m.id == message.id)
        .map(|m| m.status);
    info!(message_id = %message.id, status = ?status, "after simulated delivery window");

    tokio::time::sleep(config.typing_show_delay).await;
    if let Some(indicator) = view.typing() {
        info!(user_name = %indicator.user_name, "is typing...");
    }
    tokio::time::sleep(config.typing_visible).await;
    info!(typing = view.typing().is_some(), "after typing window");
    log_transcript(&view);
    view.close();

    // Create-group: new room, then post into it.
    let nav = create_group::create_room(&state, "rustaceans_lounge", "Crustacean small talk", false)
        .await
        .expect("valid room form");
    let Nav::Chat { room_id } = nav else {
        unreachable!("creation always navigates into the room");
    };
    let view = ChatView::open(&state, &room_id).expect("created room resolves");
    info!(room = %view.room().name, "created room opened");
    view.send("First!").expect("non-empty message");
    log_transcript(&view);

    view.close();
    state.simulator.shutdown();
}

fn log_transcript(view: &ChatView) {
    for row in view.transcript(model::now_ms()) {
        let sender = if row.show_header { row.message.user_name.as_str() } else { "" };
        info!(
            own = row.own,
            sender,
            label = %row.label,
            "  {}",
            row.message.content
        );
    }
}
