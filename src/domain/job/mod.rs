//! Transcription job domain module

mod audio_payload;
mod job_request;
mod job_status;

pub use audio_payload::{AudioMimeType, AudioPayload, FALLBACK_CONTENT_TYPE};
pub use job_request::{JobRequest, UploadHandle};
pub use job_status::{JobState, JobStatus};
