mod aggregate;
mod dataset;
mod errors;
mod transaction;

pub use aggregate::{RegionAccumulator, RegionalAggregate, PER_MILLION, VALUE_SCALE};
pub use dataset::{LoadReport, RegionalDataset};
pub use errors::{AggregateError, RecordError};
pub use transaction::{RawTransactionRow, TransactionRecord};
