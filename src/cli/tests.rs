use super::{parse_log_level, CliArgs, ViewCommand};

use std::path::PathBuf;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing::level_filters::LevelFilter;

use crate::views::{SpatialMetric, ViewRequest};

fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse_from(std::iter::once("digital-payments-dashboard").chain(args.iter().copied()))
}

#[test]
fn test_command_definition_is_consistent() {
    CliArgs::command().debug_assert();
}

#[test]
fn test_minimal_invocation_uses_defaults() -> Result<()> {
    let args = parse(&["data.csv", "overview"])?;

    assert_eq!(args.input, PathBuf::from("data.csv"));
    assert_eq!(args.view, ViewCommand::Overview);
    assert_eq!(args.request(), ViewRequest::Overview);
    assert_eq!(args.boundaries, None);
    assert_eq!(args.feature_key, "ST_NM");
    assert_eq!(args.log_level, LevelFilter::ERROR);

    Ok(())
}

#[test]
fn test_view_parameters_fall_back_to_defaults() -> Result<()> {
    let args = parse(&["data.csv", "spatial"])?;
    assert_eq!(args.request(), ViewRequest::Spatial { metric: SpatialMetric::TransactionCount });

    let args = parse(&["data.csv", "outlook"])?;
    assert_eq!(args.request(), ViewRequest::Outlook { growth_rate_percent: 12.0 });

    let args = parse(&["data.csv", "assistant"])?;
    assert_eq!(args.request(), ViewRequest::Assistant { query: String::new() });

    Ok(())
}

#[test]
fn test_view_arguments_and_options_are_parsed() -> Result<()> {
    let args = parse(&["--log-level", "debug", "data.csv", "spatial", "fraud_per_million", "--boundaries", "states.geojson", "--feature-key", "NAME"])?;

    assert_eq!(args.request(), ViewRequest::Spatial { metric: SpatialMetric::FraudPerMillion });
    assert_eq!(args.boundaries, Some(PathBuf::from("states.geojson")));
    assert_eq!(args.feature_key, "NAME");
    assert_eq!(args.log_level, LevelFilter::DEBUG);

    let args = parse(&["data.csv", "outlook", "-3.5"])?;
    assert_eq!(args.request(), ViewRequest::Outlook { growth_rate_percent: -3.5 });

    let args = parse(&["data.csv", "outlook", "15%"])?;
    assert_eq!(args.request(), ViewRequest::Outlook { growth_rate_percent: 15.0 });

    let args = parse(&["data.csv", "assistant", "What about", "fraud rates?"])?;
    assert_eq!(args.request(), ViewRequest::Assistant { query: "What about fraud rates?".to_string() });

    Ok(())
}

#[test]
fn test_view_aliases_are_accepted() -> Result<()> {
    assert_eq!(parse(&["data.csv", "fraud-risk"])?.view, ViewCommand::FraudRisk);
    assert_eq!(parse(&["data.csv", "formalization"])?.view, ViewCommand::Formalisation);
    assert_eq!(parse(&["data.csv", "map", "value-scaled"])?.request(), ViewRequest::Spatial { metric: SpatialMetric::ValueScaled });

    Ok(())
}

#[test]
fn test_invalid_invocations_are_reported() {
    let kind = |args: &[&str]| parse(args).err().map(|error| error.kind());

    assert!(kind(&[]).is_some());
    assert!(kind(&["data.csv", "settings"]).is_some());
    assert_eq!(kind(&["data.csv"]), Some(ErrorKind::MissingSubcommand));
    assert_eq!(kind(&["data.csv", "overview", "--log-level"]), Some(ErrorKind::InvalidValue));
    assert_eq!(kind(&["data.csv", "overview", "--verbose"]), Some(ErrorKind::UnknownArgument));
    assert_eq!(kind(&["data.csv", "outlook", "12", "extra"]), Some(ErrorKind::UnknownArgument));
    assert_eq!(kind(&["data.csv", "outlook", "fast"]), Some(ErrorKind::ValueValidation));
    assert_eq!(kind(&["data.csv", "spatial", "bogus"]), Some(ErrorKind::ValueValidation));
}

#[test]
fn test_invalid_metric_error_lists_the_metrics() {
    let message = parse(&["data.csv", "spatial", "bogus"]).err().map(|error| error.to_string()).unwrap_or_default();

    assert!(message.contains("bogus"));
    assert!(message.contains("transaction_count, value_scaled, fraud_per_million"));
}

#[test]
fn test_log_levels_parse_case_insensitively() {
    assert_eq!(parse_log_level("TRACE"), LevelFilter::TRACE);
    assert_eq!(parse_log_level("warn"), LevelFilter::WARN);
    assert_eq!(parse_log_level("loud"), LevelFilter::ERROR);
}
