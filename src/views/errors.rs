use thiserror::Error;

use crate::projection::ProjectionError;

#[derive(Debug, Error, PartialEq)]
pub enum ViewError {
    #[error("Invalid metric [{0}], expected one of: transaction_count, value_scaled, fraud_per_million")]
    InvalidMetric(String),
    #[error("Invalid growth rate [{0}], expected a finite percentage")]
    InvalidGrowthRate(String),
    #[error(transparent)]
    Projection(#[from] ProjectionError)
}
