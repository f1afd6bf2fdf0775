//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod delay;
pub mod job_api;

// Re-export common types
pub use config::ConfigStore;
pub use delay::Delay;
pub use job_api::{JobApi, JobError};
