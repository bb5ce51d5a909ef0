use super::engine::compound_growth;
use super::{project, ProjectionError, ProjectionSettings, BASE_YEAR, NATIONAL_SCALE_FACTOR, TARGET_YEAR};

use anyhow::{anyhow, Result};

#[test]
fn test_series_covers_inclusive_horizon_in_order() -> Result<()> {
    let series = project(100.0, 12.0, 2024, 2047)?;
    let years: Vec<i32> = series.points().iter().map(|point| point.year).collect();

    assert_eq!(series.len(), 24);
    assert_eq!(years.first(), Some(&2024));
    assert_eq!(years.last(), Some(&2047));
    assert!(years.windows(2).all(|pair| pair[1] == pair[0] + 1));

    Ok(())
}

#[test]
fn test_base_year_equals_base_total_exactly() -> Result<()> {
    for growth in [-50.0, 0.0, 5.0, 12.0, 20.0, 250.0] {
        let series = project(123_456.789, growth, 2024, 2030)?;

        assert_eq!(series.value_at(2024), Some(123_456.789));
    }

    Ok(())
}

#[test]
fn test_values_follow_compound_growth() -> Result<()> {
    let series = project(1000.0, 10.0, 2024, 2026)?;

    let year_two = series.value_at(2026).ok_or_else(|| anyhow!("2026 missing"))?;

    assert!((series.value_at(2025).ok_or_else(|| anyhow!("2025 missing"))? - 1100.0).abs() < 1e-9);
    assert!((year_two - 1210.0).abs() < 1e-9);
    assert!((series.growth_multiple().ok_or_else(|| anyhow!("No multiple"))? - 1.21).abs() < 1e-12);

    Ok(())
}

#[test]
fn test_monotonicity_follows_growth_sign() -> Result<()> {
    let rising = project(500.0, 7.5, 2024, 2047)?;
    let flat = project(500.0, 0.0, 2024, 2047)?;
    let falling = project(500.0, -30.0, 2024, 2047)?;

    assert!(rising.points().windows(2).all(|pair| pair[1].value > pair[0].value));
    assert!(flat.points().iter().all(|point| point.value == 500.0));
    assert!(falling.points().windows(2).all(|pair| pair[1].value < pair[0].value));

    Ok(())
}

#[test]
fn test_single_year_horizon_has_one_point() -> Result<()> {
    let series = project(42.0, 15.0, 2047, 2047)?;

    assert_eq!(series.len(), 1);
    assert_eq!(series.growth_multiple(), Some(1.0));

    Ok(())
}

#[test]
fn test_rates_outside_ui_range_are_projected() -> Result<()> {
    assert!(project(1.0, 90.0, 2024, 2047).is_ok());
    assert!(project(1.0, -5.0, 2024, 2047).is_ok());

    Ok(())
}

#[test]
fn test_reversed_horizon_is_rejected() {
    assert_eq!(
        project(1.0, 12.0, 2047, 2024),
        Err(ProjectionError::InvalidHorizon { base_year: 2047, target_year: 2024 })
    );
}

#[test]
fn test_horizons_at_the_edges_of_the_year_range() -> Result<()> {
    let late = project(100.0, 10.0, i32::MAX - 1, i32::MAX)?;
    assert_eq!(late.len(), 2);
    assert_eq!(late.value_at(i32::MAX - 1), Some(100.0));
    assert!((late.value_at(i32::MAX).ok_or_else(|| anyhow!("Last year missing"))? - 110.0).abs() < 1e-9);

    let early = project(100.0, 10.0, i32::MIN, i32::MIN + 1)?;
    assert_eq!(early.first().map(|point| point.year), Some(i32::MIN));
    assert_eq!(early.len(), 2);

    Ok(())
}

#[test]
fn test_growth_over_spans_wider_than_i32() {
    let span = i64::from(i32::MAX) - i64::from(i32::MIN);

    assert_eq!(compound_growth(1.0, span), 1.0);
    assert_eq!(compound_growth(1.5, span), f64::INFINITY);
    assert_eq!(compound_growth(0.5, span), 0.0);
    assert_eq!(compound_growth(1.1, 2), 1.1_f64.powi(2));
}

#[test]
fn test_zero_base_has_no_growth_multiple() -> Result<()> {
    assert_eq!(project(0.0, 12.0, 2024, 2030)?.growth_multiple(), None);

    Ok(())
}

#[test]
fn test_default_settings_scale_sample_to_national_total() {
    let settings = ProjectionSettings::default();

    assert_eq!(settings.base_year, BASE_YEAR);
    assert_eq!(settings.target_year, TARGET_YEAR);
    assert_eq!(settings.base_total(250), 250.0 * NATIONAL_SCALE_FACTOR);
}
