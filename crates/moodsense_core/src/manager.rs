//! crates/moodsense_core/src/manager.rs
//!
//! The Mood Session Manager: classifies text through the reasoning port,
//! picks a supportive suggestion and appends to the session logs according
//! to the flags captured for the current interaction.

use crate::domain::{
    Analysis, Classification, HistoryEntry, JournalEntry, MoodEntry, MoodLabel, MoodSummary,
    Session, SessionFlags, Suggestion,
};
use crate::ports::{PortError, PortResult, ReasoningService};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, warn};

const CLASSIFICATION_TEMPLATE: &str = r#"Classify the following text into one of these categories:
- Not Depressed
- Mild Depression
- Moderate Depression
- Severe Depression

Also return a short reasoning for your decision.

Text: "{text}"
Response:"#;

const FOLLOW_UP_TEMPLATE: &str = r#"Given this text: "{text}", ask 1 gentle follow-up question that might help the person express their feelings more deeply."#;

/// Shown when the submitted text is empty or only whitespace.
pub const EMPTY_INPUT_WARNING: &str = "Please write something first.";

//=========================================================================================
// Results of the Logging Step
//=========================================================================================

/// The outcome of `record_and_suggest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recorded {
    pub suggestion: Option<Suggestion>,
    pub journal_saved: bool,
}

//=========================================================================================
// The Manager
//=========================================================================================

#[derive(Clone)]
pub struct MoodSessionManager {
    reasoning: Arc<dyn ReasoningService>,
}

impl MoodSessionManager {
    pub fn new(reasoning: Arc<dyn ReasoningService>) -> Self {
        Self { reasoning }
    }

    /// Asks the reasoning service to classify `text` and derives a label from its reply.
    ///
    /// Whitespace-only input is rejected before any call is made.
    pub async fn classify(&self, text: &str) -> PortResult<Classification> {
        let text = require_text(text)?;
        let prompt = CLASSIFICATION_TEMPLATE.replace("{text}", text);
        let reasoning_text = self.reasoning.generate(&prompt).await?;
        let label = MoodLabel::detect(&reasoning_text);
        Ok(Classification {
            label,
            reasoning_text,
        })
    }

    /// Asks the reasoning service for one gentle clarifying question about `text`.
    pub async fn follow_up(&self, text: &str) -> PortResult<String> {
        let text = require_text(text)?;
        let prompt = FOLLOW_UP_TEMPLATE.replace("{text}", text);
        let reply = self.reasoning.generate(&prompt).await?;
        Ok(reply.trim().to_string())
    }

    /// Picks the suggestion for `label` and appends to the logs the flags allow.
    ///
    /// Privacy mode blocks history and mood-log appends; the journal is gated only
    /// by journal mode. An `Unknown` label is kept in history but never charted.
    pub fn record_and_suggest(
        &self,
        session: &mut Session,
        text: &str,
        label: MoodLabel,
        flags: SessionFlags,
        now: DateTime<Utc>,
    ) -> Recorded {
        if !flags.privacy_mode {
            if label.is_known() {
                session.mood_log.push(MoodEntry {
                    recorded_at: now,
                    label,
                });
            }
            session.history.push(HistoryEntry {
                text: text.to_string(),
                label,
            });
        }

        if flags.journal_mode {
            session.journal.push(JournalEntry {
                written_at: now,
                text: text.to_string(),
            });
        }

        Recorded {
            suggestion: Suggestion::for_label(label),
            journal_saved: flags.journal_mode,
        }
    }

    /// Empties history, mood log and journal.
    pub fn clear_session(&self, session: &mut Session) {
        session.history.clear();
        session.mood_log.clear();
        session.journal.clear();
        info!("Session {} cleared.", session.id);
    }

    /// Counts labels in a mood log and reports its most recent entry.
    pub fn summarize(mood_log: &[MoodEntry]) -> MoodSummary {
        let mut summary = MoodSummary::default();
        for entry in mood_log {
            *summary.distribution.entry(entry.label).or_insert(0) += 1;
        }
        summary.last_recorded = mood_log.last().copied();
        summary
    }

    /// Runs one full interaction: validate, classify, optionally ask a follow-up,
    /// then suggest and log.
    ///
    /// A failed classification aborts the interaction. A failed follow-up only
    /// drops the question; the classification still stands and is logged.
    pub async fn analyze(
        &self,
        session: &mut Session,
        text: &str,
        flags: SessionFlags,
    ) -> PortResult<Analysis> {
        let classification = self.classify(text).await?;
        info!(
            "Session {} classified submission as '{}'.",
            session.id, classification.label
        );

        let follow_up = if flags.enable_conversation {
            match self.follow_up(text).await {
                Ok(question) => Some(question),
                Err(e) => {
                    warn!("Follow-up question failed: {:?}", e);
                    None
                }
            }
        } else {
            None
        };

        let recorded =
            self.record_and_suggest(session, text, classification.label, flags, Utc::now());

        Ok(Analysis {
            label: classification.label,
            reasoning: flags
                .show_reasoning
                .then_some(classification.reasoning_text),
            follow_up,
            suggestion: recorded.suggestion,
            journal_saved: recorded.journal_saved,
        })
    }
}

fn require_text(text: &str) -> PortResult<&str> {
    if text.trim().is_empty() {
        return Err(PortError::InvalidInput(EMPTY_INPUT_WARNING.to_string()));
    }
    Ok(text)
}
