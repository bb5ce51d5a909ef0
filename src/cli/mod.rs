#[cfg(test)]
mod tests;

use std::convert::Infallible;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use crate::boundaries::DEFAULT_FEATURE_KEY;
use crate::projection::DEFAULT_GROWTH_RATE_PERCENT;
use crate::views::{parse_growth_rate, SpatialMetric, ViewRequest};

/// Regional analytics over a digital payments transaction export.
///
/// Renders one dashboard view as CSV on stdout; logs go to stderr.
#[derive(Debug, Parser)]
#[command(name = "digital-payments-dashboard", version)]
pub struct CliArgs {
    /// Transaction export to aggregate (CSV).
    pub input: PathBuf,

    #[command(subcommand)]
    pub view: ViewCommand,

    /// GeoJSON region boundaries checked by the spatial view.
    #[arg(long, global = true, value_name = "GEOJSON")]
    pub boundaries: Option<PathBuf>,

    /// GeoJSON feature property naming each region.
    #[arg(long, global = true, default_value = DEFAULT_FEATURE_KEY)]
    pub feature_key: String,

    /// One of error, warn, info, debug, trace.
    #[arg(long, global = true, default_value = "error", value_parser = log_level)]
    pub log_level: LevelFilter
}

/// The dashboard view to render, with the parameter it takes.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum ViewCommand {
    /// National totals.
    Overview,
    /// Per-region values of one metric.
    #[command(alias = "map")]
    Spatial {
        /// transaction_count, value_scaled or fraud_per_million.
        #[arg(default_value_t = SpatialMetric::default())]
        metric: SpatialMetric
    },
    /// Top regions by share of transactions.
    Concentration,
    /// Every region's aggregates.
    #[command(alias = "formalization")]
    Formalisation,
    /// Every region's aggregates, for fraud review.
    #[command(alias = "fraud")]
    FraudRisk,
    /// Projected national transactions up to the target year.
    Outlook {
        /// Annual growth rate in percent.
        #[arg(default_value_t = DEFAULT_GROWTH_RATE_PERCENT, value_parser = parse_growth_rate, allow_negative_numbers = true)]
        growth_rate_percent: f64
    },
    /// Canned answers to policy questions.
    Assistant {
        /// The question, in one or more words.
        query: Vec<String>
    }
}

impl CliArgs {
    pub fn request(&self) -> ViewRequest {
        match &self.view {
            ViewCommand::Overview => ViewRequest::Overview,
            ViewCommand::Spatial { metric } => ViewRequest::Spatial { metric: *metric },
            ViewCommand::Concentration => ViewRequest::Concentration,
            ViewCommand::Formalisation => ViewRequest::Formalisation,
            ViewCommand::FraudRisk => ViewRequest::FraudRisk,
            ViewCommand::Outlook { growth_rate_percent } => ViewRequest::Outlook {
                growth_rate_percent: *growth_rate_percent
            },
            ViewCommand::Assistant { query } => ViewRequest::Assistant { query: query.join(" ") }
        }
    }
}

fn log_level(level: &str) -> Result<LevelFilter, Infallible> {
    Ok(parse_log_level(level))
}

pub fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}
