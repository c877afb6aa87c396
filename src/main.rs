use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use fluesterpost::application::services::{EvictionWorker, EVICTION_QUEUE_CAPACITY};
use fluesterpost::infrastructure::audio::WhisperCppEngine;
use fluesterpost::infrastructure::auth::ApiKeyVerifier;
use fluesterpost::infrastructure::observability::{init_tracing, TracingConfig};
use fluesterpost::infrastructure::store::{AudioCache, EvictionPolicy};
use fluesterpost::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::parse();
    if let Err(reason) = settings.validate() {
        anyhow::bail!("invalid configuration: {}", reason);
    }

    init_tracing(TracingConfig::default(), settings.port);

    let api_key = settings
        .api_key
        .clone()
        .unwrap_or_else(ApiKeyVerifier::generate_key);
    // the only place the plaintext key is ever emitted
    println!("Api Key: {}", api_key);
    let verifier = Arc::new(ApiKeyVerifier::new(&api_key));

    let cache = Arc::new(AudioCache::new(&settings.audio_cache_dir)?);
    let policy = Arc::new(EvictionPolicy::new(
        settings.max_cache_size,
        settings.max_file_size,
    ));
    let engine = Arc::new(WhisperCppEngine::new(settings.engine_dir.clone()));

    let (eviction_sender, eviction_receiver) = mpsc::channel(EVICTION_QUEUE_CAPACITY);
    tokio::spawn(
        EvictionWorker::new(eviction_receiver, Arc::clone(&cache), Arc::clone(&policy)).run(),
    );

    let state = AppState {
        cache,
        verifier,
        engine,
        eviction_sender,
        max_file_size: settings.max_file_size,
    };
    let router = create_router(state);

    let addr = SocketAddr::new(settings.ip, settings.port);
    tracing::info!(
        cache_dir = %settings.audio_cache_dir.display(),
        max_cache_size = settings.max_cache_size,
        max_file_size = settings.max_file_size,
        "Listening on {}",
        addr
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
