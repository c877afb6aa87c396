mod audio_cache;
mod eviction_policy;

pub use audio_cache::{AudioCache, AudioCacheError, BLOB_EXTENSION};
pub use eviction_policy::{EvictionError, EvictionPolicy, EvictionReport};
