//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is the injection point for every view: the seeded directory,
//! the live message store, the local session store, the per-room typing
//! slots, and the lifecycle simulator that mutates the last two. Clone is
//! cheap; all inner fields are Arc-wrapped or clonable handles.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::directory::Directory;
use crate::model::TypingIndicator;
use crate::services::lifecycle::{LifecycleConfig, RandomPicker, Simulator, TypingPicker};
use crate::session::SessionStore;
use crate::store::MessageStore;

#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<Directory>,
    pub store: Arc<Mutex<MessageStore>>,
    pub session: SessionStore,
    /// Active typing indicator per room. Written only by the simulator.
    pub typing: Arc<Mutex<HashMap<String, TypingIndicator>>>,
    pub simulator: Simulator,
}

impl AppState {
    #[must_use]
    pub fn new(directory: Directory, config: LifecycleConfig) -> Self {
        Self::with_picker(directory, config, Arc::new(RandomPicker))
    }

    /// Construct with an injected typing-picker strategy.
    #[must_use]
    pub fn with_picker(
        directory: Directory,
        config: LifecycleConfig,
        picker: Arc<dyn TypingPicker>,
    ) -> Self {
        let directory = Arc::new(directory);
        let store = Arc::new(Mutex::new(MessageStore::from_seed(&directory)));
        let typing = Arc::new(Mutex::new(HashMap::new()));
        let simulator = Simulator::new(
            Arc::clone(&directory),
            Arc::clone(&store),
            Arc::clone(&typing),
            picker,
            config,
        );
        Self {
            directory,
            store,
            session: SessionStore::new(),
            typing,
            simulator,
        }
    }

    /// The active typing indicator for a room, if any.
    #[must_use]
    pub fn typing_in(&self, room_id: &str) -> Option<TypingIndicator> {
        self.typing
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(room_id)
            .cloned()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
