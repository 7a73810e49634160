pub mod protocol;
pub mod rest;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use state::AppState;

// Re-export the handlers to make them easily accessible
// to the binary that builds the web server router.
pub use rest::{
    analyze_handler, cheer_handler, clear_handler, history_handler, journal_handler,
    summary_handler, tips_handler,
};

/// Builds the API routes over the shared state. CORS and docs are layered on by the binary.
pub fn router(app_state: Arc<AppState>) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/clear", post(clear_handler))
        .route("/summary", get(summary_handler))
        .route("/history", get(history_handler))
        .route("/journal", get(journal_handler))
        .route("/cheer", get(cheer_handler))
        .route("/tips", get(tips_handler))
        .with_state(app_state)
}
