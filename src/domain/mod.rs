//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod job;
pub mod timing;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use job::{AudioMimeType, AudioPayload, JobRequest, JobState, JobStatus, UploadHandle};
pub use timing::Duration;
