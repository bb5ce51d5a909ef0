use std::ops::RangeInclusive;

use crate::types::Year;

pub const BASE_YEAR: Year = 2024;
pub const TARGET_YEAR: Year = 2047;

/// The sample export is a scaled-down proxy for national volume; projected
/// totals multiply its transaction count by this factor.
pub const NATIONAL_SCALE_FACTOR: f64 = 1_000_000.0;

pub const DEFAULT_GROWTH_RATE_PERCENT: f64 = 12.0;

/// Growth rates the outlook is meant to be explored with. Values outside it
/// are still projected.
pub const GROWTH_RATE_RANGE: RangeInclusive<f64> = 5.0..=20.0;

/// Assumptions behind the outlook view.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionSettings {
    pub base_year: Year,
    pub target_year: Year,
    pub national_scale_factor: f64
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            base_year: BASE_YEAR,
            target_year: TARGET_YEAR,
            national_scale_factor: NATIONAL_SCALE_FACTOR
        }
    }
}

impl ProjectionSettings {
    /// Scales a sample transaction count up to the national base total.
    pub fn base_total(&self, sample_transactions: u64) -> f64 {
        sample_transactions as f64 * self.national_scale_factor
    }
}
