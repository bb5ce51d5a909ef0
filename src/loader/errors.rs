use thiserror::Error;

use crate::models::AggregateError;

#[derive(Debug, Error, PartialEq)]
pub enum SchemaError {
    #[error("No column name contains \"amount\" in headers [{headers}]")]
    AmountColumnMissing {
        headers: String
    },
    #[error("Required column [{column}] is missing from headers [{headers}]")]
    ColumnMissing {
        column: &'static str,
        headers: String
    }
}

impl SchemaError {
    pub fn amount_column_missing(headers: &[String]) -> Self {
        Self::AmountColumnMissing { headers: headers.join(",") }
    }

    pub fn column_missing(column: &'static str, headers: &[String]) -> Self {
        Self::ColumnMissing { column, headers: headers.join(",") }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Load error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Load error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Load error: {0}")]
    Schema(#[from] SchemaError),
    #[error("Load error: {0}")]
    Aggregate(#[from] AggregateError),
    #[error("Load error: background load did not complete: {0}")]
    Interrupted(#[from] tokio::task::JoinError)
}
