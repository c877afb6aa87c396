use std::path::Path;

use fluesterpost::application::ports::{TranscriptionEngine, TranscriptionError};
use fluesterpost::domain::LanguageHint;
use fluesterpost::infrastructure::audio::WhisperCppEngine;

#[test]
fn given_english_hint_then_english_model_is_selected() {
    let engine = WhisperCppEngine::new("./whisper.cpp");

    let model = engine.model_for(LanguageHint::parse("en").unwrap());

    assert_eq!(model, Path::new("./models/ggml-tiny.en.bin"));
}

#[test]
fn given_auto_hint_then_generic_model_is_selected() {
    let engine = WhisperCppEngine::new("./whisper.cpp");

    assert_eq!(
        engine.model_for(LanguageHint::AUTO),
        Path::new("./models/ggml-tiny.bin")
    );
}

#[test]
fn given_language_without_registered_model_then_falls_back_to_generic() {
    let engine = WhisperCppEngine::new("./whisper.cpp");

    assert_eq!(
        engine.model_for(LanguageHint::parse("de").unwrap()),
        Path::new("./models/ggml-tiny.bin")
    );
}

#[test]
fn given_registered_model_then_it_overrides_the_fallback() {
    let engine =
        WhisperCppEngine::new("./whisper.cpp").with_model("de", "./models/ggml-medium.bin");

    assert_eq!(
        engine.model_for(LanguageHint::parse("de").unwrap()),
        Path::new("./models/ggml-medium.bin")
    );
}

#[tokio::test]
async fn given_missing_engine_binary_when_transcribing_then_reports_spawn_failure() {
    let engine_dir = tempfile::TempDir::new().unwrap();
    let audio_dir = tempfile::TempDir::new().unwrap();
    let audio_path = audio_dir.path().join("upload.wmv");
    std::fs::write(&audio_path, b"not really audio").unwrap();

    let engine = WhisperCppEngine::new(engine_dir.path());
    let result = engine.transcribe(&audio_path, LanguageHint::AUTO).await;

    assert!(matches!(result, Err(TranscriptionError::SpawnFailed(_))));
}

#[tokio::test]
async fn given_missing_audio_file_when_transcribing_then_fails_before_spawning() {
    let engine = WhisperCppEngine::new("./whisper.cpp");

    let result = engine
        .transcribe(Path::new("/nonexistent/upload.wmv"), LanguageHint::AUTO)
        .await;

    assert!(matches!(result, Err(TranscriptionError::SpawnFailed(_))));
}
