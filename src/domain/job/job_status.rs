//! Remote job status snapshot

use std::fmt;

/// Lifecycle state reported by the remote job API
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JobState {
    Queued,
    Processing,
    Completed,
    Error,
    /// A state this client does not know about; treated as still running.
    Other(String),
}

impl JobState {
    /// Parse a wire status string (case-insensitive)
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "queued" => Self::Queued,
            "processing" => Self::Processing,
            "completed" => Self::Completed,
            "error" => Self::Error,
            _ => Self::Other(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Queued => "queued",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Error => "error",
            Self::Other(s) => s,
        }
    }

    /// Whether no further transition can happen from this state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Error)
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One snapshot of a remote transcription job.
///
/// Snapshots are never patched: each fetch replaces the previous one.
/// For a well-formed terminal snapshot exactly one of `text` (completed)
/// or `error_message` (error) is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobStatus {
    pub id: String,
    pub state: JobState,
    pub text: Option<String>,
    pub error_message: Option<String>,
}

impl JobStatus {
    pub fn new(id: impl Into<String>, state: JobState) -> Self {
        Self {
            id: id.into(),
            state,
            text: None,
            error_message: None,
        }
    }

    pub fn queued(id: impl Into<String>) -> Self {
        Self::new(id, JobState::Queued)
    }

    pub fn processing(id: impl Into<String>) -> Self {
        Self::new(id, JobState::Processing)
    }

    pub fn completed(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(id, JobState::Completed)
        }
    }

    pub fn failed(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_message: Some(message.into()),
            ..Self::new(id, JobState::Error)
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }
}
