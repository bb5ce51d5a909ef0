mod dataset_cache;
mod fingerprint;

pub use dataset_cache::DatasetCache;
pub use fingerprint::SourceFingerprint;
