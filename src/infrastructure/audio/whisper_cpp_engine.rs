use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};
use crate::domain::LanguageHint;

/// Out-of-process transcription via a local whisper.cpp checkout: one `./main`
/// invocation per call, bounded by the lifetime of that call. No timeout is
/// imposed; a hung engine process blocks its request for as long as it runs.
pub struct WhisperCppEngine {
    engine_dir: PathBuf,
    models_by_lang: HashMap<&'static str, PathBuf>,
}

impl WhisperCppEngine {
    pub fn new(engine_dir: impl Into<PathBuf>) -> Self {
        let mut models_by_lang = HashMap::new();
        models_by_lang.insert("en", PathBuf::from("./models/ggml-tiny.en.bin"));
        models_by_lang.insert("auto", PathBuf::from("./models/ggml-tiny.bin"));
        Self {
            engine_dir: engine_dir.into(),
            models_by_lang,
        }
    }

    /// Registers a language-specific model, replacing any previous
    /// registration for that code.
    pub fn with_model(mut self, lang: &'static str, model: impl Into<PathBuf>) -> Self {
        self.models_by_lang.insert(lang, model.into());
        self
    }

    /// The model used for `language`: a language-specific one if registered,
    /// otherwise the auto-detect model.
    pub fn model_for(&self, language: LanguageHint) -> &Path {
        self.models_by_lang
            .get(language.code())
            .unwrap_or_else(|| &self.models_by_lang["auto"])
    }
}

#[async_trait]
impl TranscriptionEngine for WhisperCppEngine {
    async fn transcribe(
        &self,
        audio_path: &Path,
        language: LanguageHint,
    ) -> Result<String, TranscriptionError> {
        // the subprocess runs with cwd = engine_dir, so the blob path must
        // be absolute
        let audio_path = tokio::fs::canonicalize(audio_path)
            .await
            .map_err(|e| TranscriptionError::SpawnFailed(format!("audio path: {}", e)))?;
        let model = self.model_for(language);

        tracing::debug!(
            model = %model.display(),
            language = %language,
            file = %audio_path.display(),
            "Invoking whisper.cpp"
        );

        let output = Command::new("./main")
            .current_dir(&self.engine_dir)
            .arg("--no-timestamps")
            .arg("--model")
            .arg(model)
            .arg("--file")
            .arg(&audio_path)
            .arg("--language")
            .arg(language.code())
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .await
            .map_err(|e| TranscriptionError::SpawnFailed(e.to_string()))?;

        if !output.status.success() {
            return Err(TranscriptionError::EngineFailed(output.status.to_string()));
        }

        let text = String::from_utf8(output.stdout)
            .map_err(|e| TranscriptionError::InvalidOutput(e.to_string()))?;
        Ok(text.trim().to_string())
    }
}
