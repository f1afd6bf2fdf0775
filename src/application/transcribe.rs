//! Transcription job use case: upload, submit, poll, extract

use std::time::Duration;

use thiserror::Error;
use tokio::time::Instant;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::domain::job::{AudioPayload, JobRequest, JobState, JobStatus, UploadHandle};

use super::ports::{Delay, JobApi, JobError};
use super::retry::RetryPolicy;

/// Errors surfaced by the transcription entry points
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error(transparent)]
    Job(#[from] JobError),

    #[error("Invalid settings: {0}")]
    Config(#[from] ConfigError),

    #[error("Missing API key. Set ASSEMBLYAI_API_KEY or configure via 'relay-scribe config set api_key <key>'")]
    MissingApiKey,
}

/// Timing settings for one transcription job
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobSettings {
    /// Wait before the first status fetch
    pub initial_delay: Duration,
    /// Wait between consecutive status fetches
    pub poll_interval: Duration,
    /// Upper bound for the whole job
    pub deadline: Duration,
    /// Retry policy applied to each status fetch
    pub retry: RetryPolicy,
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_secs(3),
            poll_interval: Duration::from_secs(3),
            deadline: Duration::from_secs(5 * 60),
            retry: RetryPolicy::default(),
        }
    }
}

impl JobSettings {
    /// Build settings from a merged config, validating every timing value
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            initial_delay: config.initial_delay()?.as_std(),
            poll_interval: config.poll_interval()?.as_std(),
            deadline: config.deadline()?.as_std(),
            retry: RetryPolicy::new(config.retry_attempts()?, config.retry_backoff()?.as_std()),
        })
    }
}

/// Callbacks for job progress updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct JobCallbacks {
    /// Called before the upload starts, with the payload size
    pub on_upload_start: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called once the job is registered, with its id
    pub on_submitted: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called with every snapshot fetched while polling
    pub on_status: Option<Box<dyn Fn(&JobStatus) + Send + Sync>>,
}

/// Orchestrates one remote transcription job per call.
///
/// Holds no per-job state, so a single instance can serve concurrent calls.
pub struct TranscriptionJobUseCase<A, D>
where
    A: JobApi,
    D: Delay,
{
    api: A,
    delay: D,
    settings: JobSettings,
}

impl<A, D> TranscriptionJobUseCase<A, D>
where
    A: JobApi,
    D: Delay,
{
    pub fn new(api: A, delay: D, settings: JobSettings) -> Self {
        Self {
            api,
            delay,
            settings,
        }
    }

    pub fn settings(&self) -> &JobSettings {
        &self.settings
    }

    /// Transcribe a payload end to end and return the transcript text.
    pub async fn transcribe(&self, payload: &AudioPayload) -> Result<String, JobError> {
        self.transcribe_with(payload, &JobCallbacks::default()).await
    }

    /// Same as [`Self::transcribe`], reporting progress through `callbacks`.
    pub async fn transcribe_with(
        &self,
        payload: &AudioPayload,
        callbacks: &JobCallbacks,
    ) -> Result<String, JobError> {
        let deadline = Instant::now() + self.settings.deadline;
        tracing::info!(
            size = payload.size_bytes(),
            content_type = payload.content_type(),
            "Starting transcription job"
        );

        if let Some(ref cb) = callbacks.on_upload_start {
            cb(&payload.human_readable_size());
        }

        let initial = tokio::time::timeout_at(deadline, async {
            let handle = self.upload(payload).await?;
            self.submit(&handle).await
        })
        .await
        .map_err(|_| self.deadline_exceeded())??;

        if let Some(ref cb) = callbacks.on_submitted {
            cb(&initial.id);
        }

        let final_status = self.poll_until(initial, deadline, callbacks).await?;
        extract_text(final_status)
    }

    /// Upload audio and return the handle to reference it by.
    /// Never retried.
    pub async fn upload(&self, payload: &AudioPayload) -> Result<UploadHandle, JobError> {
        if payload.is_empty() {
            return Err(JobError::Payload("audio payload is empty".to_string()));
        }
        if payload.content_type().trim().is_empty() {
            return Err(JobError::Payload("audio payload has no content type".to_string()));
        }

        let target = self.api.request_upload_target().await?;
        self.api.put_audio(&target, payload).await?;

        tracing::info!(handle = %target, "Uploaded audio");
        Ok(target)
    }

    /// Register a job for uploaded content. Never retried.
    pub async fn submit(&self, handle: &UploadHandle) -> Result<JobStatus, JobError> {
        let request = JobRequest::new(handle.clone());
        let status = self.api.submit(&request).await?;

        if status.id.trim().is_empty() {
            return Err(JobError::MalformedResponse(
                "submitted job has no id".to_string(),
            ));
        }

        tracing::info!(job_id = %status.id, state = %status.state, "Submitted transcription job");
        Ok(status)
    }

    /// Poll until the job reaches a terminal state or the deadline passes.
    pub async fn poll_until_terminal(&self, initial: JobStatus) -> Result<JobStatus, JobError> {
        let deadline = Instant::now() + self.settings.deadline;
        self.poll_until(initial, deadline, &JobCallbacks::default())
            .await
    }

    async fn poll_until(
        &self,
        initial: JobStatus,
        deadline: Instant,
        callbacks: &JobCallbacks,
    ) -> Result<JobStatus, JobError> {
        if initial.is_terminal() {
            return Ok(initial);
        }

        tokio::time::timeout_at(deadline, self.poll_loop(initial.id, callbacks))
            .await
            .map_err(|_| self.deadline_exceeded())?
    }

    async fn poll_loop(&self, job_id: String, callbacks: &JobCallbacks) -> Result<JobStatus, JobError> {
        let api = &self.api;
        let id = job_id.as_str();

        self.delay.sleep(self.settings.initial_delay).await;

        loop {
            let status = self
                .settings
                .retry
                .run(&self.delay, move || api.fetch_status(id))
                .await?;

            tracing::debug!(job_id = id, state = %status.state, "Polled job status");
            if let Some(ref cb) = callbacks.on_status {
                cb(&status);
            }

            if status.is_terminal() {
                tracing::info!(job_id = id, state = %status.state, "Job finished");
                return Ok(status);
            }

            self.delay.sleep(self.settings.poll_interval).await;
        }
    }

    fn deadline_exceeded(&self) -> JobError {
        tracing::warn!(deadline = ?self.settings.deadline, "Transcription deadline exceeded");
        JobError::DeadlineExceeded(self.settings.deadline)
    }
}

/// Turn a terminal snapshot into transcript text or a typed error.
pub fn extract_text(final_status: JobStatus) -> Result<String, JobError> {
    let JobStatus {
        id,
        state,
        text,
        error_message,
    } = final_status;

    match (state, text, error_message) {
        (JobState::Completed, Some(text), None) => Ok(text),
        (JobState::Error, None, Some(message)) => Err(JobError::RemoteJob { message }),
        (state, text, error_message) => Err(JobError::MalformedResponse(format!(
            "job {} in state '{}' has text: {}, error: {}",
            id,
            state,
            text.is_some(),
            error_message.is_some()
        ))),
    }
}
