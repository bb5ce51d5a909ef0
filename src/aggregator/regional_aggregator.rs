use std::collections::HashMap;

use tracing::debug;

use crate::models::{AggregateError, RegionAccumulator, RegionalAggregate, TransactionRecord};

/// Groups records by region and derives the per-region statistics.
///
/// Region names are matched exactly, so `"Goa"` and `"goa"` form separate
/// groups. The output is sorted by region name; callers re-sort as needed.
///
/// # Errors
/// Returns `AggregateError` if a record is folded into the wrong region's
/// totals. Value sums never fail: they continue in `f64` once they leave the
/// decimal range.
pub fn aggregate<'a, I>(records: I) -> Result<Vec<RegionalAggregate>, AggregateError>
where
    I: IntoIterator<Item = &'a TransactionRecord>,
{
    let mut accumulators = HashMap::<&str, RegionAccumulator>::new();
    let mut national_transaction_count: u64 = 0;

    for record in records {
        let accumulator = accumulators.entry(record.region.as_str())
            .or_insert_with(|| RegionAccumulator::new(record.region.as_str()));

        accumulator.apply(record)?;
        national_transaction_count += 1;
    }

    let mut aggregates: Vec<RegionalAggregate> = accumulators.into_values()
        .map(|accumulator| accumulator.finish(national_transaction_count))
        .collect();

    aggregates.sort_by(|left, right| left.region.cmp(&right.region));

    for aggregate in aggregates.iter().filter(|aggregate| !aggregate.total_value.is_exact()) {
        debug!("Value sum for region [{}] left the decimal range and is approximate", aggregate.region);
    }

    debug!("Aggregated {national_transaction_count} transactions into {} regions", aggregates.len());

    Ok(aggregates)
}
