//! services/api/src/web/protocol.rs
//!
//! Defines the JSON message protocol between the browser client and the API server.
//! These structs are the serialized views of the core domain types.

use chrono::{DateTime, Utc};
use moodsense_core::domain::{
    format_journal_timestamp, preview, Analysis, HistoryEntry, JournalEntry, MoodEntry,
    MoodSummary, SessionFlags,
};
use moodsense_core::kindness::CheerUp;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const NO_MOOD_DATA_MESSAGE: &str = "No mood data available yet.";
pub const JOURNAL_SAVED_MESSAGE: &str = "📝 Your journal entry has been saved.";
pub const SESSION_CLEARED_MESSAGE: &str = "Session cleared.";
const UNDETERMINED_PREDICTION: &str = "🤖 Could not determine clearly.";

//=========================================================================================
// Messages Sent FROM the Client (Browser) TO the Server
//=========================================================================================

/// The checkbox states at the moment of the request. Missing fields are `false`.
#[derive(Deserialize, Debug, Default, Clone, Copy, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(default)]
pub struct FlagsPayload {
    pub privacy_mode: bool,
    pub journal_mode: bool,
    pub show_reasoning: bool,
    pub enable_conversation: bool,
}

impl From<FlagsPayload> for SessionFlags {
    fn from(flags: FlagsPayload) -> Self {
        SessionFlags {
            privacy_mode: flags.privacy_mode,
            journal_mode: flags.journal_mode,
            show_reasoning: flags.show_reasoning,
            enable_conversation: flags.enable_conversation,
        }
    }
}

/// The "Analyze My Mood" request.
#[derive(Deserialize, Debug, ToSchema)]
pub struct AnalyzeRequest {
    pub text: String,
    #[serde(default)]
    pub flags: FlagsPayload,
}

/// The "Clear All" request.
#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct ClearRequest {
    #[serde(default)]
    pub flags: FlagsPayload,
}

//=========================================================================================
// Messages Sent FROM the Server TO the Client (Browser)
//=========================================================================================

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct AnalyzeResponse {
    pub label: String,
    pub emoji: Option<String>,
    /// A ready-to-render headline, e.g. `Prediction: **Mild Depression** 😐`.
    pub prediction: String,
    pub reasoning: Option<String>,
    pub follow_up: Option<String>,
    pub suggestion: Option<String>,
    pub journal_saved: bool,
    pub journal_message: Option<String>,
}

impl From<Analysis> for AnalyzeResponse {
    fn from(analysis: Analysis) -> Self {
        let prediction = match analysis.label.emoji() {
            Some(emoji) => format!("Prediction: **{}** {}", analysis.label, emoji),
            None => format!("Prediction: {}", UNDETERMINED_PREDICTION),
        };
        Self {
            label: analysis.label.to_string(),
            emoji: analysis.label.emoji().map(str::to_string),
            prediction,
            reasoning: analysis.reasoning,
            follow_up: analysis.follow_up,
            suggestion: analysis.suggestion.map(|s| s.message().to_string()),
            journal_saved: analysis.journal_saved,
            journal_message: analysis
                .journal_saved
                .then(|| JOURNAL_SAVED_MESSAGE.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// One slice of the mood pie chart.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, ToSchema)]
pub struct MoodCount {
    pub label: String,
    pub count: usize,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LastMood {
    pub label: String,
    pub emoji: Option<String>,
    pub recorded_at: DateTime<Utc>,
}

impl From<MoodEntry> for LastMood {
    fn from(entry: MoodEntry) -> Self {
        Self {
            label: entry.label.to_string(),
            emoji: entry.label.emoji().map(str::to_string),
            recorded_at: entry.recorded_at,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct SummaryResponse {
    /// Ordered from least to most severe.
    pub distribution: Vec<MoodCount>,
    pub last_recorded: Option<LastMood>,
    /// Set only when the mood log is empty.
    pub message: Option<String>,
}

impl From<MoodSummary> for SummaryResponse {
    fn from(summary: MoodSummary) -> Self {
        let message = summary
            .distribution
            .is_empty()
            .then(|| NO_MOOD_DATA_MESSAGE.to_string());
        Self {
            distribution: summary
                .distribution
                .into_iter()
                .map(|(label, count)| MoodCount {
                    label: label.to_string(),
                    count,
                })
                .collect(),
            last_recorded: summary.last_recorded.map(LastMood::from),
            message,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HistoryItem {
    pub label: String,
    pub emoji: Option<String>,
    pub preview: String,
}

impl From<&HistoryEntry> for HistoryItem {
    fn from(entry: &HistoryEntry) -> Self {
        Self {
            label: entry.label.to_string(),
            emoji: entry.label.emoji().map(str::to_string),
            preview: preview(&entry.text),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct JournalItem {
    /// Rendered as `Mon DD, YYYY HH:MM`.
    pub written_at: String,
    pub preview: String,
}

impl From<&JournalEntry> for JournalItem {
    fn from(entry: &JournalEntry) -> Self {
        Self {
            written_at: format_journal_timestamp(&entry.written_at),
            preview: preview(&entry.text),
        }
    }
}

/// History entries, newest first.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HistoryResponse {
    pub entries: Vec<HistoryItem>,
}

/// Journal entries, newest first.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct JournalResponse {
    pub entries: Vec<JournalItem>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CheerResponse {
    pub quote: String,
    pub gif_url: String,
}

impl From<CheerUp> for CheerResponse {
    fn from(cheer: CheerUp) -> Self {
        Self {
            quote: cheer.quote.to_string(),
            gif_url: cheer.gif_url.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct TipsResponse {
    pub tips: Vec<String>,
}
