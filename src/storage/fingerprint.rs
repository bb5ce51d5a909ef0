use std::path::Path;
use std::time::SystemTime;

/// Cheap identity of a source file's contents, used to detect edits between loads.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SourceFingerprint {
    pub len: u64,
    pub modified: Option<SystemTime>
}

impl SourceFingerprint {
    pub async fn of(path: &Path) -> std::io::Result<Self> {
        let metadata = tokio::fs::metadata(path).await?;

        Ok(Self {
            len: metadata.len(),
            modified: metadata.modified().ok()
        })
    }
}
