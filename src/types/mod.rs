//! Common types and error handling shared across the crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============= Conversation Types =============

/// Who produced a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

/// A single entry in a session's follow-up conversation log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn new(speaker: Speaker, content: impl Into<String>) -> Self {
        Self {
            speaker,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

// ============= Error Types =============

/// Errors surfaced by the capability ports and crew construction.
#[derive(Debug, thiserror::Error)]
pub enum CrewError {
    /// A required credential is missing. Raised before a run starts;
    /// the caller can recover by supplying configuration and retrying.
    #[error("Missing credential: {0}")]
    Precondition(String),

    /// The text-generation capability failed or returned an unusable response.
    #[error("Generation error: {0}")]
    Generation(String),

    /// The web-search capability failed.
    #[error("Search error: {0}")]
    Search(String),

    /// The crew itself is malformed: empty task list, a task bound to an
    /// unknown agent, or a crew that was already started.
    #[error("Invalid crew: {0}")]
    InvalidCrew(String),

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CrewError {
    /// Whether the caller can recover by fixing configuration and retrying.
    /// Generation and search failures are terminal for the run that hit them.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CrewError::Precondition(_) | CrewError::Configuration(_)
        )
    }
}

/// Error returned by [`Crew::kickoff`](crate::crew::Crew::kickoff), wrapping
/// the underlying [`CrewError`] and identifying which task failed.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The run was refused before any task executed; the crew stays Pending.
    #[error("Run aborted before start: {0}")]
    Preflight(#[source] CrewError),

    /// A task failed mid-run; no later task executed.
    #[error("Task {index} ({role}) failed: {source}")]
    Task {
        index: usize,
        role: String,
        #[source]
        source: CrewError,
    },
}

impl RunError {
    /// The underlying capability error.
    pub fn source_error(&self) -> &CrewError {
        match self {
            RunError::Preflight(e) => e,
            RunError::Task { source, .. } => source,
        }
    }
}

pub type Result<T> = std::result::Result<T, CrewError>;
