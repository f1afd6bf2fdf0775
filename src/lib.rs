//! RelayScribe - audio transcription through a remote speech-to-text job API
//!
//! This crate uploads an audio file to an AssemblyAI-compatible service, submits a
//! transcription job, and polls it with retry, backoff, and an overall deadline until
//! the transcript is ready.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Job states, payloads, durations, config, and errors
//! - **Application**: The transcription job use case, retry policy, and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (AssemblyAI HTTP client, tokio timer, XDG config)
//! - **CLI**: Command-line interface, argument parsing, logging, and output

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
