//! Application layer - Use cases and port interfaces
//!
//! Contains the job orchestration, its retry primitive, and the trait
//! definitions for external system interactions.

pub mod ports;
pub mod retry;
pub mod transcribe;

// Re-export use cases
pub use retry::RetryPolicy;
pub use transcribe::{
    extract_text, JobCallbacks, JobSettings, TranscribeError, TranscriptionJobUseCase,
};
