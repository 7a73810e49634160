pub mod domain;
pub mod kindness;
pub mod manager;
pub mod ports;

pub use domain::{
    Analysis, Classification, HistoryEntry, JournalEntry, MoodEntry, MoodLabel, MoodSummary,
    Session, SessionFlags, Suggestion,
};
pub use kindness::{cheer_up, CheerUp};
pub use manager::{MoodSessionManager, Recorded, EMPTY_INPUT_WARNING};
pub use ports::{PortError, PortResult, ReasoningService};
