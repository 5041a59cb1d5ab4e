use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::broadcast;

use crate::action::{self, Action};
use crate::state::AppState;

const TRANSITION_CHANNEL_CAPACITY: usize = 1024;

/// Owns the application state. Orchestrators receive a shared handle at
/// construction; there is no process-wide instance, so tests run against
/// isolated stores.
pub struct Store {
    state: RwLock<AppState>,
    transitions: broadcast::Sender<Action>,
}

impl Store {
    pub fn new() -> Arc<Self> {
        let (transitions, _) = broadcast::channel(TRANSITION_CHANNEL_CAPACITY);
        Arc::new(Self {
            state: RwLock::new(AppState::default()),
            transitions,
        })
    }

    /// Applies the transition, then notifies subscribers. The write lock
    /// covers the whole reducer call, so a concurrent reader sees the state
    /// from either before or after the transition, never in between.
    pub fn dispatch(&self, action: Action) {
        {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            action::update(&mut state, &action);
        }
        let _ = self.transitions.send(action);
    }

    /// Current state snapshot. Detached from later transitions.
    pub fn state(&self) -> AppState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Observes every transition applied after the call, in dispatch order.
    pub fn subscribe(&self) -> broadcast::Receiver<Action> {
        self.transitions.subscribe()
    }
}
