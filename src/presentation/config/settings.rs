use std::net::IpAddr;
use std::path::PathBuf;

use clap::Parser;

/// Runtime configuration, from CLI flags with `FLUESTERPOST_*` env
/// fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "fluesterpost",
    about = "Authenticated HTTP transcription relay in front of a local whisper.cpp engine"
)]
pub struct Settings {
    /// Shared secret compared against the ApiKey request header. If not
    /// specified, a secure random key is generated and printed on startup.
    #[arg(long, env = "FLUESTERPOST_API_KEY")]
    pub api_key: Option<String>,

    /// Listening ip.
    #[arg(long, env = "FLUESTERPOST_IP", default_value = "0.0.0.0")]
    pub ip: IpAddr,

    /// Listening port.
    #[arg(long, env = "FLUESTERPOST_PORT", default_value_t = 21483)]
    pub port: u16,

    /// Directory holding cached audio uploads, named by content digest.
    #[arg(long, env = "FLUESTERPOST_AUDIO_CACHE_DIR", default_value = "audio_cache")]
    pub audio_cache_dir: PathBuf,

    /// Maximum size in bytes of a single upload.
    #[arg(
        long,
        env = "FLUESTERPOST_MAX_FILE_SIZE",
        default_value_t = 200 * 1024 * 1024
    )]
    pub max_file_size: u64,

    /// Maximum total size in bytes of the audio cache directory.
    #[arg(
        long,
        env = "FLUESTERPOST_MAX_CACHE_SIZE",
        default_value_t = 5 * 1024 * 1024 * 1024
    )]
    pub max_cache_size: u64,

    /// Path to an existing whisper.cpp checkout with a built `main` binary
    /// and downloaded models.
    #[arg(long, env = "FLUESTERPOST_ENGINE_DIR", default_value = "./whisper.cpp")]
    pub engine_dir: PathBuf,
}

impl Settings {
    /// Cross-field checks that clap cannot express. A max upload larger than
    /// the whole cache would leave eviction with a zero budget and delete
    /// every blob on every pass.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_file_size == 0 {
            return Err("max-file-size must be greater than zero".to_string());
        }
        if self.max_file_size > self.max_cache_size {
            return Err(format!(
                "max-file-size ({}) must not exceed max-cache-size ({})",
                self.max_file_size, self.max_cache_size
            ));
        }
        Ok(())
    }
}
