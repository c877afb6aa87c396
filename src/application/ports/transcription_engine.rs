use std::path::Path;

use async_trait::async_trait;

use crate::domain::LanguageHint;

/// External speech-to-text collaborator. Implementations take a path to a
/// cached audio blob and a language hint and return the transcript; every
/// failure mode is reported through [`TranscriptionError`], never a panic.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(
        &self,
        audio_path: &Path,
        language: LanguageHint,
    ) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("engine spawn failed: {0}")]
    SpawnFailed(String),
    #[error("engine exited with {0}")]
    EngineFailed(String),
    #[error("engine produced unreadable output: {0}")]
    InvalidOutput(String),
}
