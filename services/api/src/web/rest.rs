//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::error::port_error_response;
use crate::web::protocol::{
    AnalyzeRequest, AnalyzeResponse, CheerResponse, ClearRequest, FlagsPayload, HistoryItem,
    HistoryResponse, JournalItem, JournalResponse, LastMood, MessageResponse, MoodCount,
    SummaryResponse, TipsResponse, SESSION_CLEARED_MESSAGE,
};
use crate::web::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use moodsense_core::{
    domain::{SessionFlags, MENTAL_HEALTH_TIPS},
    kindness::cheer_up,
    manager::MoodSessionManager,
};
use std::sync::Arc;
use tracing::{error, info};
use utoipa::OpenApi;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        analyze_handler,
        clear_handler,
        summary_handler,
        history_handler,
        journal_handler,
        cheer_handler,
        tips_handler,
    ),
    components(
        schemas(
            AnalyzeRequest, AnalyzeResponse, ClearRequest, FlagsPayload, MessageResponse,
            SummaryResponse, MoodCount, LastMood, HistoryResponse, HistoryItem,
            JournalResponse, JournalItem, CheerResponse, TipsResponse
        )
    ),
    tags(
        (name = "MoodSense API", description = "Mood classification and session logs for a single user.")
    )
)]
pub struct ApiDoc;

pub const CLEAR_REQUIRES_PRIVACY: &str = "Clearing the session is only available in privacy mode.";

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// Classify a piece of text and update the session logs.
///
/// The flags are read fresh on every request; nothing about them is remembered.
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Text analysed", body = AnalyzeResponse),
        (status = 400, description = "Empty input; nothing was sent to the model"),
        (status = 502, description = "The reasoning service failed")
    )
)]
pub async fn analyze_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let flags = SessionFlags::from(req.flags);
    let mut session = app_state.session.lock().await;

    let analysis = app_state
        .manager
        .analyze(&mut session, &req.text, flags)
        .await
        .map_err(|e| {
            error!("Failed to analyze submission: {:?}", e);
            port_error_response(e)
        })?;

    info!(
        "Analysis complete: label='{}', history={}, journal={}",
        analysis.label,
        session.history().len(),
        session.journal().len()
    );
    Ok(Json(AnalyzeResponse::from(analysis)))
}

/// Empty the history, mood log and journal.
#[utoipa::path(
    post,
    path = "/clear",
    request_body = ClearRequest,
    responses(
        (status = 200, description = "Session cleared", body = MessageResponse),
        (status = 409, description = "Privacy mode is off")
    )
)]
pub async fn clear_handler(
    State(app_state): State<Arc<AppState>>,
    Json(req): Json<ClearRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if !req.flags.privacy_mode {
        return Err((StatusCode::CONFLICT, CLEAR_REQUIRES_PRIVACY.to_string()));
    }

    let mut session = app_state.session.lock().await;
    app_state.manager.clear_session(&mut session);

    Ok(Json(MessageResponse {
        message: SESSION_CLEARED_MESSAGE.to_string(),
    }))
}

/// Mood distribution and the last recorded mood, for the tracker chart.
#[utoipa::path(
    get,
    path = "/summary",
    responses((status = 200, description = "Mood summary", body = SummaryResponse))
)]
pub async fn summary_handler(State(app_state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    let session = app_state.session.lock().await;
    let summary = MoodSessionManager::summarize(session.mood_log());
    Json(SummaryResponse::from(summary))
}

/// Session history, newest first. Hidden while privacy mode is on.
#[utoipa::path(
    get,
    path = "/history",
    params(FlagsPayload),
    responses((status = 200, description = "History entries", body = HistoryResponse))
)]
pub async fn history_handler(
    State(app_state): State<Arc<AppState>>,
    Query(flags): Query<FlagsPayload>,
) -> Json<HistoryResponse> {
    if flags.privacy_mode {
        return Json(HistoryResponse { entries: Vec::new() });
    }
    let session = app_state.session.lock().await;
    let entries = session.history().iter().rev().map(HistoryItem::from).collect();
    Json(HistoryResponse { entries })
}

/// Journal entries, newest first. Shown only while journal mode is on.
#[utoipa::path(
    get,
    path = "/journal",
    params(FlagsPayload),
    responses((status = 200, description = "Journal entries", body = JournalResponse))
)]
pub async fn journal_handler(
    State(app_state): State<Arc<AppState>>,
    Query(flags): Query<FlagsPayload>,
) -> Json<JournalResponse> {
    if !flags.journal_mode {
        return Json(JournalResponse { entries: Vec::new() });
    }
    let session = app_state.session.lock().await;
    let entries = session.journal().iter().rev().map(JournalItem::from).collect();
    Json(JournalResponse { entries })
}

/// A random kind quote and GIF.
#[utoipa::path(
    get,
    path = "/cheer",
    responses((status = 200, description = "Something kind", body = CheerResponse))
)]
pub async fn cheer_handler() -> Json<CheerResponse> {
    let cheer = cheer_up(&mut rand::rng());
    Json(CheerResponse::from(cheer))
}

/// Mental health tips and resources.
#[utoipa::path(
    get,
    path = "/tips",
    responses((status = 200, description = "Tips", body = TipsResponse))
)]
pub async fn tips_handler() -> Json<TipsResponse> {
    Json(TipsResponse {
        tips: MENTAL_HEALTH_TIPS.iter().map(|tip| tip.to_string()).collect(),
    })
}
