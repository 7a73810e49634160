//! Drives the REST routes end to end against a scripted reasoning service.

use api_lib::web::protocol::{
    AnalyzeResponse, CheerResponse, HistoryResponse, JournalResponse, MessageResponse,
    SummaryResponse, TipsResponse, NO_MOOD_DATA_MESSAGE,
};
use api_lib::web::{router, state::AppState};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use moodsense_core::ports::{PortError, PortResult, ReasoningService};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

struct ScriptedReasoning {
    replies: Mutex<VecDeque<PortResult<String>>>,
    calls: Mutex<usize>,
}

#[async_trait]
impl ReasoningService for ScriptedReasoning {
    async fn generate(&self, _prompt: &str) -> PortResult<String> {
        *self.calls.lock().unwrap() += 1;
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(PortError::Unexpected("no scripted reply".to_string())))
    }
}

fn app(replies: Vec<PortResult<String>>) -> (Router, Arc<ScriptedReasoning>) {
    let reasoning = Arc::new(ScriptedReasoning {
        replies: Mutex::new(replies.into()),
        calls: Mutex::new(0),
    });
    let state = Arc::new(AppState::new(reasoning.clone()));
    (router(state), reasoning)
}

fn ok(text: &str) -> PortResult<String> {
    Ok(text.to_string())
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

fn parse<T: DeserializeOwned>(bytes: &[u8]) -> T {
    serde_json::from_slice(bytes).unwrap()
}

#[tokio::test]
async fn analyze_with_default_flags_logs_history_and_mood() {
    let (app, reasoning) = app(vec![ok("Not Depressed: calm and steady.")]);

    let (status, body) = post(&app, "/analyze", json!({ "text": "I feel okay today" })).await;

    assert_eq!(status, StatusCode::OK);
    let analysis: AnalyzeResponse = parse(&body);
    assert_eq!(analysis.label, "Not Depressed");
    assert_eq!(analysis.prediction, "Prediction: **Not Depressed** 😃");
    assert_eq!(
        analysis.suggestion.as_deref(),
        Some("😊 You seem to be in a good place. Keep it up!")
    );
    assert_eq!(analysis.reasoning, None);
    assert!(!analysis.journal_saved);
    assert_eq!(*reasoning.calls.lock().unwrap(), 1);

    let (_, body) = get(&app, "/history").await;
    let history: HistoryResponse = parse(&body);
    assert_eq!(history.entries.len(), 1);
    assert_eq!(history.entries[0].preview, "I feel okay today...");

    let (_, body) = get(&app, "/summary").await;
    let summary: SummaryResponse = parse(&body);
    assert_eq!(summary.distribution.len(), 1);
    assert_eq!(summary.distribution[0].count, 1);
    assert_eq!(summary.last_recorded.unwrap().label, "Not Depressed");
    assert_eq!(summary.message, None);
}

#[tokio::test]
async fn blank_text_is_rejected_without_a_model_call() {
    let (app, reasoning) = app(vec![ok("Not Depressed")]);

    let (status, body) = post(&app, "/analyze", json!({ "text": "   " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(String::from_utf8(body).unwrap(), "Please write something first.");
    assert_eq!(*reasoning.calls.lock().unwrap(), 0);
}

#[tokio::test]
async fn service_failure_is_a_bad_gateway() {
    let (app, _) = app(vec![Err(PortError::Unexpected("quota".to_string()))]);

    let (status, _) = post(&app, "/analyze", json!({ "text": "hello" })).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let (_, body) = get(&app, "/summary").await;
    let summary: SummaryResponse = parse(&body);
    assert!(summary.distribution.is_empty());
    assert_eq!(summary.message.as_deref(), Some(NO_MOOD_DATA_MESSAGE));
}

#[tokio::test]
async fn privacy_mode_skips_history_but_journal_still_saves() {
    let (app, _) = app(vec![ok("Severe Depression, with reasoning.")]);
    let flags = json!({ "privacy_mode": true, "journal_mode": true, "show_reasoning": true });

    let (status, body) =
        post(&app, "/analyze", json!({ "text": "everything is heavy", "flags": flags })).await;

    assert_eq!(status, StatusCode::OK);
    let analysis: AnalyzeResponse = parse(&body);
    assert_eq!(analysis.label, "Severe Depression");
    assert_eq!(
        analysis.reasoning.as_deref(),
        Some("Severe Depression, with reasoning.")
    );
    assert!(analysis.journal_saved);
    assert!(analysis.journal_message.is_some());

    let (_, body) = get(&app, "/history").await;
    assert!(parse::<HistoryResponse>(&body).entries.is_empty());
    let (_, body) = get(&app, "/summary").await;
    assert!(parse::<SummaryResponse>(&body).last_recorded.is_none());

    let (_, body) = get(&app, "/journal?journal_mode=true").await;
    let journal: JournalResponse = parse(&body);
    assert_eq!(journal.entries.len(), 1);
    assert_eq!(journal.entries[0].preview, "everything is heavy...");

    let (_, body) = get(&app, "/journal").await;
    assert!(parse::<JournalResponse>(&body).entries.is_empty());
}

#[tokio::test]
async fn conversation_mode_returns_the_follow_up() {
    let (app, reasoning) = app(vec![
        ok("mild depression"),
        ok("  What would make tomorrow a little lighter?  "),
    ]);
    let flags = json!({ "enable_conversation": true });

    let (_, body) = post(&app, "/analyze", json!({ "text": "meh", "flags": flags })).await;

    let analysis: AnalyzeResponse = parse(&body);
    assert_eq!(analysis.label, "Mild Depression");
    assert_eq!(
        analysis.follow_up.as_deref(),
        Some("What would make tomorrow a little lighter?")
    );
    assert_eq!(*reasoning.calls.lock().unwrap(), 2);
}

#[tokio::test]
async fn unknown_label_has_no_suggestion_and_no_chart_entry() {
    let (app, _) = app(vec![ok("I'd rather not guess.")]);

    let (_, body) = post(&app, "/analyze", json!({ "text": "..." })).await;

    let analysis: AnalyzeResponse = parse(&body);
    assert_eq!(analysis.label, "Unknown");
    assert_eq!(analysis.emoji, None);
    assert_eq!(analysis.prediction, "Prediction: 🤖 Could not determine clearly.");
    assert_eq!(analysis.suggestion, None);

    let (_, body) = get(&app, "/history").await;
    assert_eq!(parse::<HistoryResponse>(&body).entries[0].label, "Unknown");
    let (_, body) = get(&app, "/summary").await;
    assert!(parse::<SummaryResponse>(&body).distribution.is_empty());
}

#[tokio::test]
async fn history_is_newest_first_and_hidden_in_privacy_mode() {
    let (app, _) = app(vec![ok("Mild Depression"), ok("Moderate Depression")]);
    post(&app, "/analyze", json!({ "text": "first" })).await;
    post(&app, "/analyze", json!({ "text": "second" })).await;

    let (_, body) = get(&app, "/history").await;
    let history: HistoryResponse = parse(&body);
    assert_eq!(history.entries[0].preview, "second...");
    assert_eq!(history.entries[1].label, "Mild Depression");

    let (_, body) = get(&app, "/history?privacy_mode=true").await;
    assert!(parse::<HistoryResponse>(&body).entries.is_empty());
}

#[tokio::test]
async fn clear_requires_privacy_mode() {
    let (app, _) = app(vec![ok("Moderate Depression")]);
    let flags = json!({ "journal_mode": true });
    post(&app, "/analyze", json!({ "text": "tired", "flags": flags })).await;

    let (status, _) = post(&app, "/clear", json!({})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (_, body) = get(&app, "/history").await;
    assert_eq!(parse::<HistoryResponse>(&body).entries.len(), 1);

    let (status, body) = post(&app, "/clear", json!({ "flags": { "privacy_mode": true } })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse::<MessageResponse>(&body).message, "Session cleared.");

    let (_, body) = get(&app, "/history").await;
    assert!(parse::<HistoryResponse>(&body).entries.is_empty());
    let (_, body) = get(&app, "/journal?journal_mode=true").await;
    assert!(parse::<JournalResponse>(&body).entries.is_empty());
    let (_, body) = get(&app, "/summary").await;
    assert!(parse::<SummaryResponse>(&body).distribution.is_empty());
}

#[tokio::test]
async fn cheer_and_tips_are_static_content() {
    let (app, reasoning) = app(vec![]);

    let (status, body) = get(&app, "/cheer").await;
    assert_eq!(status, StatusCode::OK);
    let cheer: CheerResponse = parse(&body);
    assert!(cheer.gif_url.starts_with("https://media.giphy.com/"));
    assert!(!cheer.quote.is_empty());

    let (_, body) = get(&app, "/tips").await;
    assert_eq!(parse::<TipsResponse>(&body).tips.len(), 5);
    assert_eq!(*reasoning.calls.lock().unwrap(), 0);
}
