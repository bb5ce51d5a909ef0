use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoundaryError {
    #[error("Boundary error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Boundary error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Boundary error: feature [{index}] has no string property [{key}]")]
    MissingFeatureKey {
        index: usize,
        key: String
    }
}
