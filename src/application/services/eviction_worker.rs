use std::sync::Arc;

use tokio::sync::mpsc;

use crate::infrastructure::store::{AudioCache, EvictionPolicy};

/// "Check the cache size now" — carries no data; a full queue simply means a
/// pass is already pending and bursts collapse into it.
pub struct EvictionSignal;

/// Capacity of the eviction signal channel. One pending signal is enough:
/// every completed request sends one, and a pass that is already queued will
/// observe all writes that happened before it runs.
pub const EVICTION_QUEUE_CAPACITY: usize = 1;

/// Dedicated background task that runs eviction passes, one at a time, in
/// response to signals from request handlers. Keeps eviction off the request
/// path entirely: a slow or failing pass never delays a response.
pub struct EvictionWorker {
    receiver: mpsc::Receiver<EvictionSignal>,
    cache: Arc<AudioCache>,
    policy: Arc<EvictionPolicy>,
}

impl EvictionWorker {
    pub fn new(
        receiver: mpsc::Receiver<EvictionSignal>,
        cache: Arc<AudioCache>,
        policy: Arc<EvictionPolicy>,
    ) -> Self {
        Self {
            receiver,
            cache,
            policy,
        }
    }

    pub async fn run(mut self) {
        tracing::info!("Eviction worker started");
        while self.receiver.recv().await.is_some() {
            match self.policy.enforce(&self.cache).await {
                Ok(report) if report.deleted > 0 => {
                    tracing::info!(
                        deleted = report.deleted,
                        freed_bytes = report.freed_bytes,
                        remaining_bytes = report.remaining_bytes,
                        "Eviction pass completed"
                    );
                }
                Ok(report) => {
                    tracing::debug!(
                        scanned = report.scanned,
                        remaining_bytes = report.remaining_bytes,
                        "Cache within budget, nothing evicted"
                    );
                }
                // best effort: log and wait for the next signal
                Err(e) => {
                    tracing::warn!(error = %e, "Eviction pass failed");
                }
            }
        }
        tracing::info!("Eviction worker stopped: channel closed");
    }
}
