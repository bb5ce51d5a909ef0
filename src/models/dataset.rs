use serde::Serialize;

use crate::models::RegionalAggregate;

/// Row accounting for one load of a source.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize)]
pub struct LoadReport {
    pub rows_read: u64,
    pub rows_accepted: u64,
    /// Rows skipped for a blank region, id or amount, or an unparseable value.
    pub rows_excluded: u64
}

/// The immutable aggregate collection produced by a single load.
///
/// Shared behind an `Arc`; a reload produces a new dataset rather than
/// mutating this one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionalDataset {
    aggregates: Vec<RegionalAggregate>,
    report: LoadReport
}

impl RegionalDataset {
    pub fn new(aggregates: Vec<RegionalAggregate>, report: LoadReport) -> Self {
        Self { aggregates, report }
    }

    pub fn aggregates(&self) -> &[RegionalAggregate] {
        &self.aggregates
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }

    pub fn region(&self, name: &str) -> Option<&RegionalAggregate> {
        self.aggregates.iter().find(|aggregate| aggregate.region == name)
    }

    pub fn len(&self) -> usize {
        self.aggregates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aggregates.is_empty()
    }

    pub fn total_transactions(&self) -> u64 {
        self.aggregates.iter().map(|aggregate| aggregate.transaction_count).sum()
    }

    /// Total value across all regions, in crore.
    pub fn total_value_scaled(&self) -> f64 {
        self.aggregates.iter().map(|aggregate| aggregate.value_scaled).sum()
    }

    pub fn total_fraud(&self) -> u64 {
        self.aggregates.iter().map(|aggregate| aggregate.fraud_count).sum()
    }
}
