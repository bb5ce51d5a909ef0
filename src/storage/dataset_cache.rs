use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tokio::task::spawn_blocking;
use tracing::{debug, info};

use crate::loader::{DatasetLoader, LoadError};
use crate::models::RegionalDataset;
use crate::storage::SourceFingerprint;

const DEFAULT_CAPACITY: u64 = 16;

#[derive(Debug)]
struct CachedDataset {
    fingerprint: SourceFingerprint,
    dataset: Arc<RegionalDataset>
}

/// Memoizes loaded datasets per source path.
///
/// Each entry remembers the fingerprint of the file it was built from; a load
/// whose fingerprint no longer matches re-reads the source and replaces the
/// entry whole, so readers holding the previous `Arc` keep a consistent view.
pub struct DatasetCache<L: DatasetLoader> {
    loader: Arc<L>,
    cache: Cache<PathBuf, Arc<CachedDataset>>,
    capacity: u64,
    time_to_idle: Option<Duration>
}

impl<L: DatasetLoader> DatasetCache<L> {
    /// Creates a new cache that loads through `loader`.
    pub fn new(loader: L) -> Self {
        Self {
            loader: Arc::new(loader),
            cache: Self::build(DEFAULT_CAPACITY, None),
            capacity: DEFAULT_CAPACITY,
            time_to_idle: None
        }
    }

    /// Limits how many sources are kept at once.
    pub fn with_capacity(mut self, capacity: u64) -> Self {
        self.capacity = capacity;
        self.cache = Self::build(self.capacity, self.time_to_idle);
        self
    }

    /// Drops entries that have not been read for `timeout`.
    pub fn with_time_to_idle(mut self, timeout: Duration) -> Self {
        self.time_to_idle = Some(timeout);
        self.cache = Self::build(self.capacity, self.time_to_idle);
        self
    }

    fn build(capacity: u64, time_to_idle: Option<Duration>) -> Cache<PathBuf, Arc<CachedDataset>> {
        let builder = Cache::builder().max_capacity(capacity);

        match time_to_idle {
            Some(timeout) => builder.time_to_idle(timeout).build(),
            None => builder.build()
        }
    }

    /// Returns the dataset for `path`, reading the source only when it is not
    /// cached or has changed since it was cached.
    ///
    /// # Errors
    /// Returns `LoadError` if the source cannot be inspected or loaded.
    pub async fn load(&self, path: impl AsRef<Path>) -> Result<Arc<RegionalDataset>, LoadError> {
        let path = path.as_ref().to_path_buf();
        let fingerprint = SourceFingerprint::of(&path).await?;

        if let Some(entry) = self.cache.get(&path).await {
            if entry.fingerprint == fingerprint {
                debug!("Dataset cache hit for [{}]", path.display());
                return Ok(entry.dataset.clone());
            }

            info!("Source [{}] changed since it was cached, reloading", path.display());
        } else {
            debug!("Dataset cache miss for [{}]", path.display());
        }

        let loader = self.loader.clone();
        let source = path.clone();
        let dataset = Arc::new(spawn_blocking(move || loader.load(&source)).await??);

        self.cache.insert(path, Arc::new(CachedDataset {
            fingerprint,
            dataset: dataset.clone()
        })).await;

        Ok(dataset)
    }

    /// Forgets the cached dataset for `path`; the next load re-reads it.
    pub async fn invalidate(&self, path: impl AsRef<Path>) {
        self.cache.invalidate(path.as_ref()).await;
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Number of cached sources, after pending maintenance has run.
    pub async fn entry_count(&self) -> u64 {
        self.cache.run_pending_tasks().await;
        self.cache.entry_count()
    }
}
