mod csv_loader;
mod errors;
mod schema;

use std::path::Path;

use crate::models::RegionalDataset;

pub use csv_loader::CsvDatasetLoader;
pub use errors::{LoadError, SchemaError};
pub use schema::{normalize_column_name, normalize_headers, resolve_amount_column, ColumnLayout};
pub use schema::{AMOUNT_COLUMN, FRAUD_COLUMN, REGION_COLUMN, TRANSACTION_ID_COLUMN};

/// Turns a source identified by path into an aggregate collection.
pub trait DatasetLoader: Send + Sync + 'static {
    fn load(&self, path: &Path) -> Result<RegionalDataset, LoadError>;
}
