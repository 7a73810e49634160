//! crates/moodsense_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! The reasoning service is the only external collaborator; keeping it behind a
//! trait lets the core run against any hosted model, or a scripted one in tests.

use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., network, quota).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// The caller supplied input the core refuses to act on.
    #[error("{0}")]
    InvalidInput(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait ReasoningService: Send + Sync {
    /// Sends a prompt to a text-generation model and returns its free-form reply.
    async fn generate(&self, prompt: &str) -> PortResult<String>;
}
