use serde::Serialize;

use crate::projection::errors::ProjectionError;
use crate::types::Year;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectionPoint {
    pub year: Year,
    pub value: f64
}

/// Yearly projected totals, ascending by year.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionSeries {
    points: Vec<ProjectionPoint>
}

impl ProjectionSeries {
    pub fn points(&self) -> &[ProjectionPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn value_at(&self, year: Year) -> Option<f64> {
        self.points.iter().find(|point| point.year == year).map(|point| point.value)
    }

    pub fn first(&self) -> Option<&ProjectionPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    /// Ratio of the final projected value to the base value.
    pub fn growth_multiple(&self) -> Option<f64> {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) if first.value != 0.0 => Some(last.value / first.value),
            _ => None
        }
    }
}

/// Compounds `base_total` annually at `growth_rate_percent` for every year in
/// `[base_year, target_year]`.
///
/// The first point is exactly `base_total`. Growth rates are not range checked;
/// very long horizons with large rates overflow to infinity. The series holds
/// one point per year, so the horizon length is bounded by available memory
/// rather than by the `Year` range.
///
/// # Errors
/// Returns `ProjectionError::InvalidHorizon` if `target_year < base_year`.
pub fn project(base_total: f64, growth_rate_percent: f64, base_year: Year, target_year: Year) -> Result<ProjectionSeries, ProjectionError> {
    if target_year < base_year {
        return Err(ProjectionError::InvalidHorizon { base_year, target_year })
    }

    let factor = 1.0 + growth_rate_percent / 100.0;

    let points = (base_year..=target_year)
        .map(|year| ProjectionPoint {
            year,
            value: base_total * compound_growth(factor, i64::from(year) - i64::from(base_year))
        })
        .collect();

    Ok(ProjectionSeries { points })
}

/// `factor` raised to `years`, which can exceed `i32` when the horizon spans most of the `Year` range.
pub(crate) fn compound_growth(factor: f64, years: i64) -> f64 {
    match i32::try_from(years) {
        Ok(years) => factor.powi(years),
        Err(_) => factor.powf(years as f64)
    }
}
