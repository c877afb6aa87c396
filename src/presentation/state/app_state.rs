use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::ports::TranscriptionEngine;
use crate::application::services::EvictionSignal;
use crate::infrastructure::auth::ApiKeyVerifier;
use crate::infrastructure::store::AudioCache;

/// Everything a request handler needs, constructed once in `main` and shared
/// across all in-flight requests. No ambient globals: the verifier, cache
/// and eviction queue are all injected here, which also makes them
/// independently testable.
pub struct AppState<E>
where
    E: TranscriptionEngine,
{
    pub cache: Arc<AudioCache>,
    pub verifier: Arc<ApiKeyVerifier>,
    pub engine: Arc<E>,
    pub eviction_sender: mpsc::Sender<EvictionSignal>,
    pub max_file_size: u64,
}

impl<E> Clone for AppState<E>
where
    E: TranscriptionEngine,
{
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            verifier: Arc::clone(&self.verifier),
            engine: Arc::clone(&self.engine),
            eviction_sender: self.eviction_sender.clone(),
            max_file_size: self.max_file_size,
        }
    }
}
