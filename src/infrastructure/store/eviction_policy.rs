use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;

use tokio::sync::Mutex;

use super::AudioCache;

/// Bounds the total size of the audio cache directory by deleting the
/// least-recently-modified blobs first. The directory listing is the source
/// of truth; no index is kept.
///
/// `headroom` is the configured maximum single-upload size, so a pass always
/// leaves room for one more maximum-size upload before the next pass runs.
pub struct EvictionPolicy {
    max_total_size: u64,
    headroom: u64,
    // one pass at a time; concurrent passes would double-count deletions
    lock: Mutex<()>,
}

/// Outcome of a single eviction pass, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvictionReport {
    pub scanned: usize,
    pub deleted: usize,
    pub freed_bytes: u64,
    pub remaining_bytes: u64,
}

struct BlobInfo {
    path: PathBuf,
    size: u64,
    modified: SystemTime,
    file_name: OsString,
}

impl EvictionPolicy {
    pub fn new(max_total_size: u64, headroom: u64) -> Self {
        Self {
            max_total_size,
            headroom,
            lock: Mutex::new(()),
        }
    }

    /// Size the cache is trimmed down to when over the limit.
    pub fn budget(&self) -> u64 {
        self.max_total_size.saturating_sub(self.headroom)
    }

    /// Scans the cache directory and deletes oldest-first until the total
    /// size is within budget. Never deletes anything when already within
    /// budget. A blob that vanished between the scan and its deletion is a
    /// benign no-op: the disk space is gone either way.
    pub async fn enforce(&self, cache: &AudioCache) -> Result<EvictionReport, EvictionError> {
        let _guard = self.lock.lock().await;

        let mut blobs = self.scan(cache).await?;
        let scanned = blobs.len();
        let mut total: u64 = blobs.iter().map(|b| b.size).sum();
        let budget = self.budget();

        let mut report = EvictionReport {
            scanned,
            deleted: 0,
            freed_bytes: 0,
            remaining_bytes: total,
        };
        if total <= budget {
            return Ok(report);
        }

        // Oldest mtime first; ties break by filename, which is deterministic
        // because filenames are hex digests.
        blobs.sort_by(|a, b| {
            a.modified
                .cmp(&b.modified)
                .then_with(|| a.file_name.cmp(&b.file_name))
        });

        let mut victims = blobs.into_iter();
        while total > budget {
            let Some(blob) = victims.next() else {
                break;
            };
            match tokio::fs::remove_file(&blob.path).await {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!(path = %blob.path.display(), "Blob already gone, skipping");
                }
                Err(e) => {
                    return Err(EvictionError::Delete {
                        path: blob.path,
                        source: e,
                    });
                }
            }
            total -= blob.size;
            report.deleted += 1;
            report.freed_bytes += blob.size;
        }
        report.remaining_bytes = total;

        Ok(report)
    }

    async fn scan(&self, cache: &AudioCache) -> Result<Vec<BlobInfo>, EvictionError> {
        let mut entries = tokio::fs::read_dir(cache.dir())
            .await
            .map_err(EvictionError::Scan)?;
        let mut blobs = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(EvictionError::Scan)? {
            let meta = match entry.metadata().await {
                Ok(m) => m,
                // raced with a concurrent deletion
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(EvictionError::Scan(e)),
            };
            if !meta.is_file() {
                continue;
            }
            blobs.push(BlobInfo {
                path: entry.path(),
                size: meta.len(),
                modified: meta.modified().map_err(EvictionError::Scan)?,
                file_name: entry.file_name(),
            });
        }
        Ok(blobs)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EvictionError {
    #[error("cache scan failed: {0}")]
    Scan(#[source] io::Error),
    #[error("failed to delete {path}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
