use crate::types::{AmountError, FraudFlagError, RegionName, TransactionId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("Row [{line}] has no sender region")]
    MissingRegion {
        line: u64
    },
    #[error("Row [{line}] has text that is not valid UTF-8 in column [{column}]")]
    InvalidEncoding {
        line: u64,
        column: &'static str
    },
    #[error("Row [{line}] has no transaction id")]
    MissingTransactionId {
        line: u64
    },
    #[error("Amount is required for transaction [{transaction_id}] on row [{line}]")]
    MissingAmount {
        line: u64,
        transaction_id: TransactionId
    },
    #[error("Invalid amount for transaction [{transaction_id}] on row [{line}]: {source}")]
    InvalidAmount {
        line: u64,
        transaction_id: TransactionId,
        #[source]
        source: AmountError
    },
    #[error("Amount must not be negative for transaction [{transaction_id}] on row [{line}]")]
    NegativeAmount {
        line: u64,
        transaction_id: TransactionId
    },
    #[error("Invalid fraud flag for transaction [{transaction_id}] on row [{line}]: {source}")]
    InvalidFraudFlag {
        line: u64,
        transaction_id: TransactionId,
        #[source]
        source: FraudFlagError
    }
}

impl RecordError {
    pub fn missing_region(line: u64) -> Self {
        Self::MissingRegion { line }
    }

    pub fn invalid_encoding(line: u64, column: &'static str) -> Self {
        Self::InvalidEncoding { line, column }
    }

    pub fn missing_transaction_id(line: u64) -> Self {
        Self::MissingTransactionId { line }
    }

    pub fn missing_amount(line: u64, transaction_id: &str) -> Self {
        Self::MissingAmount {
            line,
            transaction_id: transaction_id.to_string()
        }
    }

    pub fn invalid_amount(line: u64, transaction_id: &str, source: AmountError) -> Self {
        Self::InvalidAmount {
            line,
            transaction_id: transaction_id.to_string(),
            source
        }
    }

    pub fn negative_amount(line: u64, transaction_id: &str) -> Self {
        Self::NegativeAmount {
            line,
            transaction_id: transaction_id.to_string()
        }
    }

    pub fn invalid_fraud_flag(line: u64, transaction_id: &str, source: FraudFlagError) -> Self {
        Self::InvalidFraudFlag {
            line,
            transaction_id: transaction_id.to_string(),
            source
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AggregateError {
    #[error("Transaction [{transaction_id}] for region [{actual}] was applied to region [{expected}]")]
    RegionMismatch {
        expected: RegionName,
        actual: RegionName,
        transaction_id: TransactionId
    }
}
