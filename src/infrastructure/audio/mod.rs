mod whisper_cpp_engine;

pub use whisper_cpp_engine::WhisperCppEngine;
