//! Remote transcription job adapters

mod assemblyai;

pub use assemblyai::AssemblyAiClient;
