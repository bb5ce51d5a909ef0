use serde::Serialize;

use crate::models::errors::AggregateError;
use crate::models::TransactionRecord;
use crate::types::{Amount, RegionName};

/// Divisor turning rupees into crore for display.
pub const VALUE_SCALE: f64 = 10_000_000.0;
pub const PER_MILLION: f64 = 1_000_000.0;

/// Per-region statistics for one load of the dataset.
///
/// The first four fields are accumulated from records; the remaining ones are
/// derived once every region is known, since `share_percent` needs the
/// national transaction count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionalAggregate {
    pub region: RegionName,
    pub transaction_count: u64,
    pub total_value: Amount,
    pub fraud_count: u64,
    /// `total_value` in crore.
    pub value_scaled: f64,
    pub fraud_per_million: f64,
    /// This region's share of all transactions, as a percentage.
    pub share_percent: f64,
    pub avg_value_per_txn: f64
}

/// Running totals for a single region while records are being grouped.
#[derive(Debug, Clone)]
pub struct RegionAccumulator {
    pub region: RegionName,
    pub transaction_count: u64,
    pub total_value: Amount,
    pub fraud_count: u64
}

impl RegionAccumulator {
    pub fn new(region: impl Into<RegionName>) -> Self {
        Self {
            region: region.into(),
            transaction_count: 0,
            total_value: Amount::ZERO,
            fraud_count: 0
        }
    }

    /// Folds one record into the running totals.
    ///
    /// # Errors
    /// Returns `AggregateError` if the record belongs to another region.
    pub fn apply(&mut self, record: &TransactionRecord) -> Result<(), AggregateError> {
        if record.region != self.region {
            return Err(AggregateError::RegionMismatch {
                expected: self.region.clone(),
                actual: record.region.clone(),
                transaction_id: record.transaction_id.clone()
            })
        }

        self.total_value += record.amount;

        self.transaction_count += 1;

        if record.fraud.is_flagged() {
            self.fraud_count += 1;
        }

        Ok(())
    }

    /// Derives the ratio columns given the transaction count across all regions.
    pub fn finish(self, national_transaction_count: u64) -> RegionalAggregate {
        //NOTE: A region only exists once a record has been applied, so neither count can be zero here
        debug_assert!(self.transaction_count > 0, "region [{}] finished without records", self.region);
        debug_assert!(national_transaction_count >= self.transaction_count);

        let count = self.transaction_count as f64;
        let total_value = self.total_value.to_f64();

        RegionalAggregate {
            value_scaled: total_value / VALUE_SCALE,
            fraud_per_million: self.fraud_count as f64 / count * PER_MILLION,
            share_percent: count / national_transaction_count as f64 * 100.0,
            avg_value_per_txn: total_value / count,
            region: self.region,
            transaction_count: self.transaction_count,
            total_value: self.total_value,
            fraud_count: self.fraud_count
        }
    }
}
