use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::domain::CacheKey;

/// Extension given to every cached blob. Carried over from the original
/// deployment; nothing downstream interprets it.
pub const BLOB_EXTENSION: &str = "wmv";

/// Content-addressed blob store for uploaded audio. Blobs are named by the
/// SHA-256 of their content, written once and never mutated, so concurrent
/// writers of identical bytes are safe to race and duplicate uploads cost no
/// extra disk.
pub struct AudioCache {
    dir: PathBuf,
}

impl AudioCache {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, AudioCacheError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(AudioCacheError::Io)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn blob_path(&self, key: &CacheKey) -> PathBuf {
        self.dir.join(format!("{}.{}", key.to_hex(), BLOB_EXTENSION))
    }

    /// Stores `data` under its content digest. Idempotent: if a blob already
    /// exists for the digest the bytes are not rewritten and the existing
    /// path is returned. The write goes through a uniquely-named sibling
    /// `.tmp` file and a rename, so readers never observe a half-written
    /// blob and concurrent writers of the same content cannot trip over each
    /// other's staging file.
    pub async fn put(&self, data: &[u8]) -> Result<(CacheKey, PathBuf), AudioCacheError> {
        let key = CacheKey::of(data);
        let path = self.blob_path(&key);

        if tokio::fs::try_exists(&path).await.map_err(AudioCacheError::Io)? {
            return Ok((key, path));
        }

        let staging = self
            .dir
            .join(format!("{}.{}.tmp", key.to_hex(), Uuid::new_v4().simple()));
        tokio::fs::write(&staging, data)
            .await
            .map_err(AudioCacheError::Io)?;
        tokio::fs::rename(&staging, &path)
            .await
            .map_err(AudioCacheError::Io)?;

        tracing::debug!(key = %key, bytes = data.len(), "Cached new audio blob");
        Ok((key, path))
    }

    pub async fn resolve(&self, key: &CacheKey) -> Result<PathBuf, AudioCacheError> {
        let path = self.blob_path(key);
        match tokio::fs::metadata(&path).await {
            Ok(_) => Ok(path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(AudioCacheError::NotFound(key.to_hex()))
            }
            Err(e) => Err(AudioCacheError::Io(e)),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AudioCacheError {
    #[error("no cached blob for digest {0}")]
    NotFound(String),
    #[error("cache io error: {0}")]
    Io(#[from] io::Error),
}
