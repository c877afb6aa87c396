mod eviction_worker;

pub use eviction_worker::{EvictionSignal, EvictionWorker, EVICTION_QUEUE_CAPACITY};
