//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use moodsense_core::{domain::Session, manager::MoodSessionManager, ports::ReasoningService};
use std::sync::Arc;
use tokio::sync::Mutex;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
///
/// The service hosts exactly one session. Handlers hold the session lock for the
/// whole interaction, so a slow model call blocks the next interaction until it
/// returns.
pub struct AppState {
    pub manager: MoodSessionManager,
    pub session: Mutex<Session>,
}

impl AppState {
    pub fn new(reasoning: Arc<dyn ReasoningService>) -> Self {
        Self {
            manager: MoodSessionManager::new(reasoning),
            session: Mutex::new(Session::new()),
        }
    }
}
