//! crates/moodsense_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any web framework or serialization format.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

//=========================================================================================
// Mood Labels
//=========================================================================================

/// A depression-severity label, or `Unknown` when the model output named none.
///
/// The derived ordering follows severity, with `Unknown` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoodLabel {
    NotDepressed,
    MildDepression,
    ModerateDepression,
    SevereDepression,
    Unknown,
}

impl MoodLabel {
    /// The order in which labels are searched for in a model response.
    /// The first label in this list that appears anywhere in the text wins.
    pub const DETECTION_ORDER: [MoodLabel; 4] = [
        MoodLabel::NotDepressed,
        MoodLabel::MildDepression,
        MoodLabel::ModerateDepression,
        MoodLabel::SevereDepression,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodLabel::NotDepressed => "Not Depressed",
            MoodLabel::MildDepression => "Mild Depression",
            MoodLabel::ModerateDepression => "Moderate Depression",
            MoodLabel::SevereDepression => "Severe Depression",
            MoodLabel::Unknown => "Unknown",
        }
    }

    pub fn emoji(&self) -> Option<&'static str> {
        match self {
            MoodLabel::NotDepressed => Some("😃"),
            MoodLabel::MildDepression => Some("😐"),
            MoodLabel::ModerateDepression => Some("😞"),
            MoodLabel::SevereDepression => Some("😢"),
            MoodLabel::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        *self != MoodLabel::Unknown
    }

    /// Finds the label named in free-form model output.
    ///
    /// Matching is a case-insensitive substring search over `DETECTION_ORDER`.
    /// No label name is a substring of another, so the order only matters when
    /// a response mentions several labels; then the earlier entry wins.
    ///
    /// Mentions are not read for negation. A reply that settles on "Severe
    /// Depression" but also says "not depressed" anywhere is `NotDepressed`.
    pub fn detect(response: &str) -> Self {
        let haystack = response.to_lowercase();
        Self::DETECTION_ORDER
            .into_iter()
            .find(|label| haystack.contains(&label.as_str().to_lowercase()))
            .unwrap_or(MoodLabel::Unknown)
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//=========================================================================================
// Session Flags
//=========================================================================================

/// The user-selected mode switches, captured as a snapshot for one interaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionFlags {
    /// Suppresses appends to history and the mood log.
    pub privacy_mode: bool,
    /// Saves every submission to the journal.
    pub journal_mode: bool,
    /// Returns the model's raw reasoning alongside the label.
    pub show_reasoning: bool,
    /// Asks the model for a gentle follow-up question.
    pub enable_conversation: bool,
}

//=========================================================================================
// Log Entries & Session
//=========================================================================================

/// One analysed submission, kept in the session history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub text: String,
    pub label: MoodLabel,
}

/// One timestamped label in the mood log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodEntry {
    pub recorded_at: DateTime<Utc>,
    pub label: MoodLabel,
}

/// One timestamped journal entry holding the raw submitted text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub written_at: DateTime<Utc>,
    pub text: String,
}

/// The ephemeral state of one interactive session.
///
/// The logs are append-only from the outside; only `MoodSessionManager`
/// appends to or clears them.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) mood_log: Vec<MoodEntry>,
    pub(crate) journal: Vec<JournalEntry>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            history: Vec::new(),
            mood_log: Vec::new(),
            journal: Vec::new(),
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn mood_log(&self) -> &[MoodEntry] {
        &self.mood_log
    }

    pub fn journal(&self) -> &[JournalEntry] {
        &self.journal
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty() && self.mood_log.is_empty() && self.journal.is_empty()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================================
// Results
//=========================================================================================

/// The label derived from a model response plus the response itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub label: MoodLabel,
    pub reasoning_text: String,
}

/// A fixed supportive message chosen from the classified label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    Coping,
    Distraction,
    Affirmation,
}

impl Suggestion {
    pub fn for_label(label: MoodLabel) -> Option<Self> {
        match label {
            MoodLabel::SevereDepression | MoodLabel::ModerateDepression => {
                Some(Suggestion::Coping)
            }
            MoodLabel::MildDepression => Some(Suggestion::Distraction),
            MoodLabel::NotDepressed => Some(Suggestion::Affirmation),
            MoodLabel::Unknown => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Suggestion::Coping => {
                "💡 Try this: Take a deep breath, journal your thoughts, or go for a short walk."
            }
            Suggestion::Distraction => {
                "💡 A small distraction might help, maybe a playlist or a call with a friend?"
            }
            Suggestion::Affirmation => "😊 You seem to be in a good place. Keep it up!",
        }
    }
}

/// What a single "analyze my mood" interaction produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub label: MoodLabel,
    /// The raw model output, present only when `show_reasoning` was set.
    pub reasoning: Option<String>,
    /// Present only when `enable_conversation` was set and the model answered.
    pub follow_up: Option<String>,
    pub suggestion: Option<Suggestion>,
    pub journal_saved: bool,
}

/// Label counts over a mood log plus its most recent entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoodSummary {
    pub distribution: BTreeMap<MoodLabel, usize>,
    pub last_recorded: Option<MoodEntry>,
}

impl MoodSummary {
    pub fn total(&self) -> usize {
        self.distribution.values().sum()
    }
}

//=========================================================================================
// Presentation Helpers
//=========================================================================================

/// The number of characters shown when listing journal or history entries.
pub const PREVIEW_CHARS: usize = 100;

/// Format used when listing journal entries, e.g. `Mar 04, 2025 14:05`.
pub const JOURNAL_TIMESTAMP_FORMAT: &str = "%b %d, %Y %H:%M";

/// Shortens an entry for listing: the first `PREVIEW_CHARS` characters then `...`.
pub fn preview(text: &str) -> String {
    let head: String = text.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", head)
}

/// Renders a journal timestamp in the machine's local time zone.
///
/// Entries are stored in UTC; only the listing is localised.
pub fn format_journal_timestamp(at: &DateTime<Utc>) -> String {
    format_journal_timestamp_in(at, &Local)
}

pub fn format_journal_timestamp_in<Tz>(at: &DateTime<Utc>, zone: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.with_timezone(zone)
        .format(JOURNAL_TIMESTAMP_FORMAT)
        .to_string()
}

/// Static wellbeing tips shown under the tracker.
pub const MENTAL_HEALTH_TIPS: [&str; 5] = [
    "Sleep well 😴: Aim for 7-8 hours per night.",
    "Stay active 🏃‍♀️: Even 10 minutes of walking helps.",
    "Talk to someone 💬: Don't isolate your feelings.",
    "Practice gratitude 🌻: Note 3 good things daily.",
    "MentalHealth.gov (https://www.mentalhealth.gov) for professional resources.",
];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn detects_labels_case_insensitively() {
        assert_eq!(
            MoodLabel::detect("Classification: SEVERE depression\nReasoning: ..."),
            MoodLabel::SevereDepression
        );
        assert_eq!(
            MoodLabel::detect("**Not Depressed**. The writer sounds calm."),
            MoodLabel::NotDepressed
        );
    }

    #[test]
    fn detection_follows_the_documented_priority() {
        let response = "Moderate Depression rather than Mild Depression.";
        assert_eq!(MoodLabel::detect(response), MoodLabel::MildDepression);
    }

    #[test]
    fn negated_mention_still_wins_by_priority() {
        let response = "Severe Depression. The writer is clearly not depressed-free.";
        assert_eq!(MoodLabel::detect(response), MoodLabel::NotDepressed);
    }

    #[test]
    fn detection_without_a_label_is_unknown() {
        assert_eq!(MoodLabel::detect("I cannot tell."), MoodLabel::Unknown);
        assert_eq!(MoodLabel::detect(""), MoodLabel::Unknown);
    }

    #[test]
    fn no_label_name_contains_another() {
        for a in MoodLabel::DETECTION_ORDER {
            for b in MoodLabel::DETECTION_ORDER {
                if a != b {
                    assert!(!a.as_str().to_lowercase().contains(&b.as_str().to_lowercase()));
                }
            }
        }
    }

    #[test]
    fn suggestions_follow_severity() {
        assert_eq!(
            Suggestion::for_label(MoodLabel::SevereDepression),
            Some(Suggestion::Coping)
        );
        assert_eq!(
            Suggestion::for_label(MoodLabel::ModerateDepression),
            Some(Suggestion::Coping)
        );
        assert_eq!(
            Suggestion::for_label(MoodLabel::MildDepression),
            Some(Suggestion::Distraction)
        );
        assert_eq!(
            Suggestion::for_label(MoodLabel::NotDepressed),
            Some(Suggestion::Affirmation)
        );
        assert_eq!(Suggestion::for_label(MoodLabel::Unknown), None);
    }

    #[test]
    fn preview_truncates_on_char_boundaries() {
        let long = "é".repeat(150);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 3);
        assert!(shown.ends_with("..."));
        assert_eq!(preview("short"), "short...");
    }

    #[test]
    fn journal_timestamps_use_month_day_year() {
        let at = Utc.with_ymd_and_hms(2025, 3, 4, 14, 5, 0).unwrap();
        assert_eq!(format_journal_timestamp_in(&at, &Utc), "Mar 04, 2025 14:05");
    }

    #[test]
    fn journal_timestamps_shift_into_the_display_zone() {
        let at = Utc.with_ymd_and_hms(2025, 3, 4, 22, 5, 0).unwrap();
        let ist = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        assert_eq!(format_journal_timestamp_in(&at, &ist), "Mar 05, 2025 03:35");

        let local = at.with_timezone(&Local).format("%b %d, %Y %H:%M").to_string();
        assert_eq!(format_journal_timestamp(&at), local);
    }

    #[test]
    fn new_session_starts_empty() {
        let session = Session::new();
        assert!(session.is_empty());
        assert_ne!(session.id, Session::new().id);
    }
}
