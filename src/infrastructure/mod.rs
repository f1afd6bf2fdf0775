//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces:
//! the AssemblyAI HTTP client, the XDG config store and the tokio timer.

pub mod config;
pub mod timing;
pub mod transcription;

// Re-export adapters
pub use config::XdgConfigStore;
pub use timing::TokioDelay;
pub use transcription::AssemblyAiClient;
