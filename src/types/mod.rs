mod amount;
mod errors;
mod format;
mod fraud_flag;

pub use amount::Amount;
pub use errors::{AmountError, FraudFlagError};
pub use format::{format_count, format_grouped};
pub use fraud_flag::FraudFlag;

pub type RegionName = String;
pub type TransactionId = String;
pub type Year = i32;
