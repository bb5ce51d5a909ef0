use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::loader::normalize_column_name;
use crate::models::RegionalAggregate;
use crate::views::errors::ViewError;

/// The dashboard pages a caller can ask for.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum View {
    Overview,
    Spatial,
    Concentration,
    Formalisation,
    FraudRisk,
    Outlook,
    Assistant
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::Spatial => "spatial",
            View::Concentration => "concentration",
            View::Formalisation => "formalisation",
            View::FraudRisk => "fraud-risk",
            View::Outlook => "outlook",
            View::Assistant => "assistant"
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Spatial => "Spatial Analysis",
            View::Concentration => "Concentration",
            View::Formalisation => "Formalisation",
            View::FraudRisk => "Fraud Risk",
            View::Outlook => "2047 Outlook",
            View::Assistant => "AI Policy Assistant"
        }
    }
}

impl Display for View {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Metrics the spatial view can colour regions by.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum SpatialMetric {
    #[default]
    TransactionCount,
    ValueScaled,
    FraudPerMillion
}

impl SpatialMetric {
    pub fn name(&self) -> &'static str {
        match self {
            SpatialMetric::TransactionCount => "transaction_count",
            SpatialMetric::ValueScaled => "value_scaled",
            SpatialMetric::FraudPerMillion => "fraud_per_million"
        }
    }

    pub fn value(&self, aggregate: &RegionalAggregate) -> f64 {
        match self {
            SpatialMetric::TransactionCount => aggregate.transaction_count as f64,
            SpatialMetric::ValueScaled => aggregate.value_scaled,
            SpatialMetric::FraudPerMillion => aggregate.fraud_per_million
        }
    }
}

impl Display for SpatialMetric {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for SpatialMetric {
    type Err = ViewError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_selector(value).as_str() {
            "transaction_count" | "upi_volume" => Ok(SpatialMetric::TransactionCount),
            "value_scaled" | "upi_value_crore" => Ok(SpatialMetric::ValueScaled),
            "fraud_per_million" => Ok(SpatialMetric::FraudPerMillion),
            _ => Err(ViewError::InvalidMetric(value.to_string()))
        }
    }
}

fn normalize_selector(value: &str) -> String {
    normalize_column_name(&value.replace('-', " "))
}
