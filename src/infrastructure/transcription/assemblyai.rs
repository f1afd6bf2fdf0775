//! AssemblyAI job API adapter

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::ports::{JobApi, JobError};
use crate::domain::config::DEFAULT_BASE_URL;
use crate::domain::job::{AudioPayload, JobRequest, JobState, JobStatus, UploadHandle};

const UPLOAD_ENDPOINT: &str = "/upload";
const TRANSCRIPT_ENDPOINT: &str = "/transcript";

// Wire types for the AssemblyAI v2 API

#[derive(Debug, Deserialize)]
struct UploadResponse {
    #[serde(alias = "uploadUrl")]
    upload_url: String,
}

#[derive(Debug, Serialize)]
struct TranscriptRequest<'a> {
    audio_url: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    id: String,
    status: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl From<TranscriptResponse> for JobStatus {
    fn from(response: TranscriptResponse) -> Self {
        Self {
            id: response.id,
            state: JobState::parse(&response.status),
            text: response.text,
            error_message: response.error,
        }
    }
}

/// AssemblyAI remote job client.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct AssemblyAiClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl AssemblyAiClient {
    /// Create a client for the public AssemblyAI endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client for a custom endpoint (proxies, test servers)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::with_client(api_key, base_url, reqwest::Client::new())
    }

    /// Create a client sharing an existing connection pool
    pub fn with_client(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn transcript_url(&self, job_id: &str) -> String {
        format!("{}/{}", self.endpoint(TRANSCRIPT_ENDPOINT), job_id)
    }

    async fn send(request: reqwest::RequestBuilder) -> Result<reqwest::Response, JobError> {
        let response = request
            .send()
            .await
            .map_err(|e| JobError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(url = %response.url(), status = status.as_u16(), "API response");
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::debug!(status = status.as_u16(), %body, "API error body");
            return Err(JobError::RemoteApi {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, JobError> {
        let body = response
            .text()
            .await
            .map_err(|e| JobError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| JobError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl JobApi for AssemblyAiClient {
    async fn request_upload_target(&self) -> Result<UploadHandle, JobError> {
        let request = self
            .client
            .post(self.endpoint(UPLOAD_ENDPOINT))
            .header(AUTHORIZATION, &self.api_key)
            .json(&serde_json::json!({}));

        let response = Self::send(request).await?;
        let upload: UploadResponse = Self::read_json(response).await?;

        if upload.upload_url.trim().is_empty() {
            return Err(JobError::MalformedResponse(
                "upload response has an empty upload_url".to_string(),
            ));
        }

        Ok(UploadHandle::new(upload.upload_url))
    }

    async fn put_audio(
        &self,
        target: &UploadHandle,
        payload: &AudioPayload,
    ) -> Result<(), JobError> {
        let request = self
            .client
            .put(target.as_str())
            .header(CONTENT_TYPE, payload.content_type())
            .body(payload.data().to_vec());

        Self::send(request).await?;
        Ok(())
    }

    async fn submit(&self, request: &JobRequest) -> Result<JobStatus, JobError> {
        let body = TranscriptRequest {
            audio_url: request.content_handle().as_str(),
        };
        let request = self
            .client
            .post(self.endpoint(TRANSCRIPT_ENDPOINT))
            .header(AUTHORIZATION, &self.api_key)
            .json(&body);

        let response = Self::send(request).await?;
        let transcript: TranscriptResponse = Self::read_json(response).await?;
        Ok(transcript.into())
    }

    async fn fetch_status(&self, job_id: &str) -> Result<JobStatus, JobError> {
        let request = self
            .client
            .get(self.transcript_url(job_id))
            .header(AUTHORIZATION, &self.api_key);

        let response = Self::send(request).await?;
        let transcript: TranscriptResponse = Self::read_json(response).await?;
        Ok(transcript.into())
    }
}
