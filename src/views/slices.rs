use std::cmp::Ordering;

use serde::Serialize;
use tracing::warn;

use crate::boundaries::BoundaryLookup;
use crate::models::{RegionalAggregate, RegionalDataset};
use crate::projection::{project, ProjectionError, ProjectionSeries, ProjectionSettings};
use crate::types::{format_count, format_grouped};
use crate::views::SpatialMetric;

/// Regions listed by the concentration view.
pub const TOP_REGIONS: usize = 10;
/// Regions whose combined share is reported as the headline figure.
pub const HEADLINE_REGIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverviewKpis {
    pub region_count: usize,
    pub total_transactions: u64,
    /// Total value in crore.
    pub total_value_scaled: f64,
    pub total_fraud: u64
}

impl OverviewKpis {
    pub fn transactions_display(&self) -> String {
        format_count(self.total_transactions as f64)
    }

    pub fn value_display(&self) -> String {
        format!("₹{} Cr", format_grouped(self.total_value_scaled, 1))
    }

    pub fn fraud_display(&self) -> String {
        format_grouped(self.total_fraud as f64, 0)
    }
}

pub fn overview(dataset: &RegionalDataset) -> OverviewKpis {
    OverviewKpis {
        region_count: dataset.len(),
        total_transactions: dataset.total_transactions(),
        total_value_scaled: dataset.total_value_scaled(),
        total_fraud: dataset.total_fraud()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpatialPoint<'a> {
    pub region: &'a str,
    pub value: f64
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpatialSlice<'a> {
    pub metric: SpatialMetric,
    pub points: Vec<SpatialPoint<'a>>,
    /// Regions with no boundary to draw them on; empty when no lookup was given.
    pub unmatched_regions: Vec<&'a str>
}

pub fn spatial<'a>(aggregates: &'a [RegionalAggregate], metric: SpatialMetric, boundaries: Option<&dyn BoundaryLookup>) -> SpatialSlice<'a> {
    let points = aggregates.iter()
        .map(|aggregate| SpatialPoint {
            region: aggregate.region.as_str(),
            value: metric.value(aggregate)
        })
        .collect();

    let unmatched_regions: Vec<&str> = match boundaries {
        Some(lookup) => aggregates.iter()
            .map(|aggregate| aggregate.region.as_str())
            .filter(|region| !lookup.contains_region(region))
            .collect(),
        None => Vec::new()
    };

    if !unmatched_regions.is_empty() {
        warn!("No boundary found for regions: {}", unmatched_regions.join(", "));
    }

    SpatialSlice { metric, points, unmatched_regions }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConcentrationSlice<'a> {
    /// Up to `TOP_REGIONS` regions, largest share first.
    pub top: Vec<&'a RegionalAggregate>,
    pub headline_share_percent: f64
}

pub fn concentration(aggregates: &[RegionalAggregate]) -> ConcentrationSlice<'_> {
    let mut ranked: Vec<&RegionalAggregate> = aggregates.iter().collect();

    ranked.sort_by(|left, right| {
        right.share_percent.partial_cmp(&left.share_percent)
            .unwrap_or(Ordering::Equal)
            .then_with(|| left.region.cmp(&right.region))
    });
    ranked.truncate(TOP_REGIONS);

    let headline_share_percent: f64 = ranked.iter()
        .take(HEADLINE_REGIONS)
        .map(|aggregate| aggregate.share_percent)
        .sum();

    ConcentrationSlice { top: ranked, headline_share_percent }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutlookSummary {
    pub growth_rate_percent: f64,
    pub base_total: f64,
    pub series: ProjectionSeries
}

impl OutlookSummary {
    pub fn target_total(&self) -> f64 {
        self.series.last().map(|point| point.value).unwrap_or(self.base_total)
    }

    pub fn growth_multiple(&self) -> f64 {
        self.series.growth_multiple().unwrap_or(1.0)
    }
}

pub fn outlook(dataset: &RegionalDataset, growth_rate_percent: f64, settings: &ProjectionSettings) -> Result<OutlookSummary, ProjectionError> {
    let base_total = settings.base_total(dataset.total_transactions());
    let series = project(base_total, growth_rate_percent, settings.base_year, settings.target_year)?;

    Ok(OutlookSummary { growth_rate_percent, base_total, series })
}
