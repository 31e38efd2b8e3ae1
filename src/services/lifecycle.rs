//! Lifecycle simulator: delivery acknowledgments and typing pulses.
//!
//! DESIGN
//! ======
//! Every simulated transition is a cancellable scheduled task:
//! - Delivery: a task keyed by message id sleeps for the configured delay,
//!   then advances the message to `delivered` through the store's
//!   forward-only guard. Firing against a discarded or already-delivered
//!   message is a no-op.
//! - Typing pulse: one slot per room. After a short delay a participant
//!   chosen by the pluggable picker is published as "typing"; after the
//!   visible window the slot clears. Re-triggering while a pulse is pending
//!   aborts and restarts it (no queuing).
//!
//! The timing and the random pick stand in for server-acknowledged receipts
//! and peer presence broadcast. The transition shape is the contract a real
//! backend has to honor; only who fires it changes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use rand::Rng;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::directory::Directory;
use crate::model::{MessageStatus, TypingIndicator, User};
use crate::store::MessageStore;

const DEFAULT_DELIVERY_DELAY_MS: u64 = 500;
const DEFAULT_TYPING_SHOW_DELAY_MS: u64 = 1_000;
const DEFAULT_TYPING_VISIBLE_MS: u64 = 2_000;
const DEFAULT_CREATION_DELAY_MS: u64 = 800;

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// CONFIG
// =============================================================================

/// Simulated latencies, overridable from the environment.
#[derive(Debug, Clone, Copy)]
pub struct LifecycleConfig {
    /// Sent-to-delivered delay for a freshly sent message.
    pub delivery_delay: Duration,
    /// Delay between a local send and the typing indicator appearing.
    pub typing_show_delay: Duration,
    /// How long the typing indicator stays visible.
    pub typing_visible: Duration,
    /// Simulated server round-trip for room creation.
    pub creation_delay: Duration,
}

impl LifecycleConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            delivery_delay: Duration::from_millis(env_parse("DELIVERY_DELAY_MS", DEFAULT_DELIVERY_DELAY_MS)),
            typing_show_delay: Duration::from_millis(env_parse("TYPING_SHOW_DELAY_MS", DEFAULT_TYPING_SHOW_DELAY_MS)),
            typing_visible: Duration::from_millis(env_parse("TYPING_VISIBLE_MS", DEFAULT_TYPING_VISIBLE_MS)),
            creation_delay: Duration::from_millis(env_parse("CREATION_DELAY_MS", DEFAULT_CREATION_DELAY_MS)),
        }
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            delivery_delay: Duration::from_millis(DEFAULT_DELIVERY_DELAY_MS),
            typing_show_delay: Duration::from_millis(DEFAULT_TYPING_SHOW_DELAY_MS),
            typing_visible: Duration::from_millis(DEFAULT_TYPING_VISIBLE_MS),
            creation_delay: Duration::from_millis(DEFAULT_CREATION_DELAY_MS),
        }
    }
}

// =============================================================================
// TYPING PICKER
// =============================================================================

/// Strategy for choosing who appears to be typing.
///
/// Pluggable so tests can inject a deterministic choice; a real system would
/// replace this with server-reported presence.
pub trait TypingPicker: Send + Sync {
    fn pick(&self, candidates: &[User]) -> Option<User>;
}

/// Production picker: uniform choice across the directory's users.
pub struct RandomPicker;

impl TypingPicker for RandomPicker {
    fn pick(&self, candidates: &[User]) -> Option<User> {
        if candidates.is_empty() {
            return None;
        }
        let idx = rand::rng().random_range(0..candidates.len());
        candidates.get(idx).cloned()
    }
}

// =============================================================================
// SIMULATOR
// =============================================================================

struct PendingDelivery {
    room_id: String,
    handle: JoinHandle<()>,
}

/// Owns the scheduled tasks behind the simulated lifecycle.
#[derive(Clone)]
pub struct Simulator {
    directory: Arc<Directory>,
    store: Arc<Mutex<MessageStore>>,
    typing: Arc<Mutex<HashMap<String, TypingIndicator>>>,
    picker: Arc<dyn TypingPicker>,
    config: LifecycleConfig,
    /// Pending delivery tasks, keyed by message id.
    deliveries: Arc<Mutex<HashMap<String, PendingDelivery>>>,
    /// Pending typing pulses, keyed by room id. Single slot per room.
    pulses: Arc<Mutex<HashMap<String, JoinHandle<()>>>>,
}

impl Simulator {
    #[must_use]
    pub fn new(
        directory: Arc<Directory>,
        store: Arc<Mutex<MessageStore>>,
        typing: Arc<Mutex<HashMap<String, TypingIndicator>>>,
        picker: Arc<dyn TypingPicker>,
        config: LifecycleConfig,
    ) -> Self {
        Self {
            directory,
            store,
            typing,
            picker,
            config,
            deliveries: Arc::new(Mutex::new(HashMap::new())),
            pulses: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    #[must_use]
    pub fn config(&self) -> LifecycleConfig {
        self.config
    }

    /// Schedule the sent-to-delivered transition for a message.
    ///
    /// Rescheduling the same id replaces the pending task, so the transition
    /// fires at most once per message.
    pub fn schedule_delivery(&self, message_id: &str, room_id: &str) {
        let id = message_id.to_string();
        let store = Arc::clone(&self.store);
        let deliveries = Arc::clone(&self.deliveries);
        let delay = self.config.delivery_delay;

        let task_id = id.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let advanced = store
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .advance_status(&task_id, MessageStatus::Delivered);
            if advanced {
                debug!(message_id = %task_id, "message delivered");
            } else {
                debug!(message_id = %task_id, "delivery fired for missing or already-advanced message");
            }
            deliveries
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&task_id);
        });

        let pending = PendingDelivery { room_id: room_id.to_string(), handle };
        let mut deliveries = self.deliveries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(old) = deliveries.insert(id, pending) {
            old.handle.abort();
        }
    }

    /// Cancel a pending delivery, if one is scheduled.
    pub fn cancel_delivery(&self, message_id: &str) {
        let mut deliveries = self.deliveries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pending) = deliveries.remove(message_id) {
            pending.handle.abort();
        }
    }

    /// Start (or restart) the typing pulse for a room.
    pub fn trigger_typing(&self, room_id: &str) {
        let room = room_id.to_string();
        let directory = Arc::clone(&self.directory);
        let typing = Arc::clone(&self.typing);
        let pulses = Arc::clone(&self.pulses);
        let picker = Arc::clone(&self.picker);
        let show_delay = self.config.typing_show_delay;
        let visible = self.config.typing_visible;

        let task_room = room.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(show_delay).await;
            if let Some(user) = picker.pick(directory.users()) {
                debug!(room_id = %task_room, user_name = %user.display_name, "typing pulse shown");
                typing.lock().unwrap_or_else(PoisonError::into_inner).insert(
                    task_room.clone(),
                    TypingIndicator {
                        room_id: task_room.clone(),
                        user_id: user.id,
                        user_name: user.display_name,
                    },
                );
                tokio::time::sleep(visible).await;
                typing
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .remove(&task_room);
            }
            pulses
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&task_room);
        });

        // A restarted pulse also clears whatever the aborted one left showing.
        self.typing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&room);
        let mut pulses = self.pulses.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(old) = pulses.insert(room, handle) {
            old.abort();
        }
    }

    /// Cancel everything a torn-down view owns for one room: its typing
    /// pulse and any pending deliveries in that room.
    pub fn cancel_room(&self, room_id: &str) {
        {
            let mut pulses = self.pulses.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(handle) = pulses.remove(room_id) {
                handle.abort();
            }
        }
        self.typing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(room_id);

        let mut deliveries = self.deliveries.lock().unwrap_or_else(PoisonError::into_inner);
        deliveries.retain(|_, pending| {
            if pending.room_id == room_id {
                pending.handle.abort();
                false
            } else {
                true
            }
        });
    }

    /// Abort every pending task and clear all typing slots.
    pub fn shutdown(&self) {
        let mut deliveries = self.deliveries.lock().unwrap_or_else(PoisonError::into_inner);
        for (_, pending) in deliveries.drain() {
            pending.handle.abort();
        }
        drop(deliveries);

        let mut pulses = self.pulses.lock().unwrap_or_else(PoisonError::into_inner);
        for (_, handle) in pulses.drain() {
            handle.abort();
        }
        drop(pulses);

        self.typing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of deliveries still pending. Visibility for tests and logs.
    #[must_use]
    pub fn pending_deliveries(&self) -> usize {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod tests;
