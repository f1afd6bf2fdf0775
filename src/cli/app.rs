//! Main app runner for transcribing one file

use std::env;
use std::path::Path;
use std::process::ExitCode;

use crate::application::ports::{ConfigStore, JobError};
use crate::application::{JobCallbacks, TranscribeError, TranscriptionJobUseCase};
use crate::domain::config::AppConfig;
use crate::domain::job::{AudioMimeType, AudioPayload, JobStatus, FALLBACK_CONTENT_TYPE};
use crate::infrastructure::{AssemblyAiClient, TokioDelay, XdgConfigStore};

use super::args::TranscribeOptions;
use super::presenter::{status_message, Presenter};

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;
pub const EXIT_DEADLINE: u8 = 3;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "ASSEMBLYAI_API_KEY";

/// Environment variable overriding the API base URL
pub const BASE_URL_ENV: &str = "ASSEMBLYAI_BASE_URL";

/// Run the transcription of one file
pub async fn run_transcribe(options: TranscribeOptions, api_key: String) -> ExitCode {
    let mut presenter = Presenter::new();

    let payload = match load_payload(&options.file, options.content_type.as_deref()).await {
        Ok(payload) => payload,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(exit_code_for(&e));
        }
    };

    let client = AssemblyAiClient::with_base_url(api_key, &options.base_url);
    let use_case = TranscriptionJobUseCase::new(client, TokioDelay::new(), options.settings);

    presenter.start_spinner("Uploading audio...");
    let callbacks = spinner_callbacks(&presenter);

    match use_case.transcribe_with(&payload, &callbacks).await {
        Ok(text) => {
            presenter.spinner_success("Transcription complete");
            match options.output {
                Some(ref path) => {
                    if let Err(e) = tokio::fs::write(path, &text).await {
                        presenter.error(&format!(
                            "Failed to write transcript to {}: {}",
                            path.display(),
                            e
                        ));
                        return ExitCode::from(EXIT_ERROR);
                    }
                    presenter.info(&format!("Transcript written to {}", path.display()));
                }
                None => presenter.output(&text),
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.spinner_fail("Transcription failed");
            presenter.error(&e.to_string());
            ExitCode::from(exit_code_for(&e))
        }
    }
}

fn spinner_callbacks(presenter: &Presenter) -> JobCallbacks {
    let Some(spinner) = presenter.spinner() else {
        return JobCallbacks::default();
    };

    let on_upload = spinner.clone();
    let on_submitted = spinner.clone();
    JobCallbacks {
        on_upload_start: Some(Box::new(move |size: &str| {
            on_upload.set_message(format!("Uploading audio ({})...", size));
        })),
        on_submitted: Some(Box::new(move |id: &str| {
            on_submitted.set_message(format!("Job {}: submitted", id));
        })),
        on_status: Some(Box::new(move |status: &JobStatus| {
            spinner.set_message(status_message(status));
        })),
    }
}

/// Exit code for a failed job
pub fn exit_code_for(error: &JobError) -> u8 {
    match error {
        JobError::DeadlineExceeded(_) => EXIT_DEADLINE,
        _ => EXIT_ERROR,
    }
}

/// Read an audio file into a payload.
/// The content type is taken from `content_type` or guessed from the extension.
pub async fn load_payload(path: &Path, content_type: Option<&str>) -> Result<AudioPayload, JobError> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| JobError::Payload(format!("cannot read {}: {}", path.display(), e)))?;

    if data.is_empty() {
        return Err(JobError::Payload(format!("{} is empty", path.display())));
    }

    let content_type = match content_type {
        Some(ct) => ct.to_string(),
        None => AudioMimeType::from_path(path)
            .map(|mime| mime.as_str().to_string())
            .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string()),
    };

    Ok(AudioPayload::new(data, content_type))
}

/// Get the API key from a merged config
pub fn get_api_key(config: &AppConfig) -> Result<String, TranscribeError> {
    config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .ok_or(TranscribeError::MissingApiKey)
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load_or_empty().await;

    let env_config = AppConfig {
        api_key: env::var(API_KEY_ENV).ok().filter(|s| !s.is_empty()),
        base_url: env::var(BASE_URL_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
