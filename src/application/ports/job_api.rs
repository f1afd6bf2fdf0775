//! Remote transcription job API port

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::job::{AudioPayload, JobRequest, JobStatus, UploadHandle};

/// Errors from any phase of a remote transcription job
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JobError {
    #[error("API request failed: {0}")]
    Transport(String),

    #[error("API returned HTTP {status}: {body}")]
    RemoteApi { status: u16, body: String },

    #[error("Unusable audio payload: {0}")]
    Payload(String),

    #[error("Transcription failed: {message}")]
    RemoteJob { message: String },

    #[error("Malformed API response: {0}")]
    MalformedResponse(String),

    #[error("Transcription did not finish within {0:?}")]
    DeadlineExceeded(Duration),
}

impl JobError {
    /// Whether a status fetch failing with this error may be attempted again.
    /// Only network failures, 5xx and 429 qualify.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::RemoteApi { status, .. } => *status == 429 || (500..600).contains(status),
            _ => false,
        }
    }
}

/// Port for the remote job-processing API
#[async_trait]
pub trait JobApi: Send + Sync {
    /// Obtain a short-lived write target for audio content.
    async fn request_upload_target(&self) -> Result<UploadHandle, JobError>;

    /// Transfer the payload bytes to a write target obtained from
    /// [`JobApi::request_upload_target`].
    async fn put_audio(&self, target: &UploadHandle, payload: &AudioPayload)
        -> Result<(), JobError>;

    /// Register a transcription job and return its initial snapshot.
    async fn submit(&self, request: &JobRequest) -> Result<JobStatus, JobError>;

    /// Fetch the current snapshot of a job.
    async fn fetch_status(&self, job_id: &str) -> Result<JobStatus, JobError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(status: u16) -> JobError {
        JobError::RemoteApi {
            status,
            body: String::new(),
        }
    }

    #[test]
    fn transport_errors_are_retryable() {
        assert!(JobError::Transport("connection reset".into()).is_retryable());
    }

    #[test]
    fn server_errors_and_rate_limits_are_retryable() {
        assert!(remote(500).is_retryable());
        assert!(remote(503).is_retryable());
        assert!(remote(599).is_retryable());
        assert!(remote(429).is_retryable());
    }

    #[test]
    fn client_errors_are_not_retryable() {
        assert!(!remote(400).is_retryable());
        assert!(!remote(401).is_retryable());
        assert!(!remote(404).is_retryable());
    }

    #[test]
    fn local_and_job_errors_are_not_retryable() {
        assert!(!JobError::Payload("empty".into()).is_retryable());
        assert!(!JobError::MalformedResponse("x".into()).is_retryable());
        assert!(!JobError::RemoteJob {
            message: "bad audio".into()
        }
        .is_retryable());
        assert!(!JobError::DeadlineExceeded(Duration::from_secs(1)).is_retryable());
    }

    #[test]
    fn remote_api_message_includes_status_and_body() {
        let err = JobError::RemoteApi {
            status: 401,
            body: "Invalid API key".into(),
        };
        assert_eq!(err.to_string(), "API returned HTTP 401: Invalid API key");
    }
}
