use std::sync::Arc;

use tracing::{debug, warn};

use crate::assistant;
use crate::boundaries::BoundaryLookup;
use crate::models::{RegionalAggregate, RegionalDataset};
use crate::projection::{ProjectionSettings, GROWTH_RATE_RANGE};
use crate::views::errors::ViewError;
use crate::views::slices::{concentration, outlook, overview, spatial};
use crate::views::slices::{ConcentrationSlice, OutlookSummary, OverviewKpis, SpatialSlice};
use crate::views::{SpatialMetric, View};

/// A view selection together with the parameter that view takes.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewRequest {
    Overview,
    Spatial { metric: SpatialMetric },
    Concentration,
    Formalisation,
    FraudRisk,
    Outlook { growth_rate_percent: f64 },
    Assistant { query: String }
}

impl ViewRequest {
    pub fn view(&self) -> View {
        match self {
            ViewRequest::Overview => View::Overview,
            ViewRequest::Spatial { .. } => View::Spatial,
            ViewRequest::Concentration => View::Concentration,
            ViewRequest::Formalisation => View::Formalisation,
            ViewRequest::FraudRisk => View::FraudRisk,
            ViewRequest::Outlook { .. } => View::Outlook,
            ViewRequest::Assistant { .. } => View::Assistant
        }
    }
}

/// Reads a growth rate in percent, with or without a trailing `%`.
///
/// # Errors
/// Returns `ViewError::InvalidGrowthRate` unless the value is a finite number.
pub fn parse_growth_rate(raw: &str) -> Result<f64, ViewError> {
    let raw = raw.trim().trim_end_matches('%');

    match raw.parse::<f64>() {
        Ok(rate) if rate.is_finite() => Ok(rate),
        _ => Err(ViewError::InvalidGrowthRate(raw.to_string()))
    }
}

/// The data slice a view needs, borrowed from the dataset it was rendered from.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewOutput<'a> {
    Overview(OverviewKpis),
    Spatial(SpatialSlice<'a>),
    Concentration(ConcentrationSlice<'a>),
    Formalisation(&'a [RegionalAggregate]),
    FraudRisk(&'a [RegionalAggregate]),
    Outlook(OutlookSummary),
    Assistant(&'static str)
}

/// Maps view requests onto the aggregate collection.
#[derive(Clone, Default)]
pub struct ViewRouter {
    settings: ProjectionSettings,
    boundaries: Option<Arc<dyn BoundaryLookup>>
}

impl ViewRouter {
    pub fn new(settings: ProjectionSettings) -> Self {
        Self {
            settings,
            boundaries: None
        }
    }

    /// Enables boundary matching for the spatial view.
    pub fn with_boundaries(mut self, boundaries: Arc<dyn BoundaryLookup>) -> Self {
        self.boundaries = Some(boundaries);
        self
    }

    /// # Errors
    /// Returns `ViewError::Projection` if the configured outlook horizon is reversed.
    pub fn render<'a>(&self, request: &ViewRequest, dataset: &'a RegionalDataset) -> Result<ViewOutput<'a>, ViewError> {
        debug!("Rendering view [{}]", request.view());

        let output = match request {
            ViewRequest::Overview => ViewOutput::Overview(overview(dataset)),
            ViewRequest::Spatial { metric } => {
                ViewOutput::Spatial(spatial(dataset.aggregates(), *metric, self.boundaries.as_deref()))
            }
            ViewRequest::Concentration => ViewOutput::Concentration(concentration(dataset.aggregates())),
            ViewRequest::Formalisation => ViewOutput::Formalisation(dataset.aggregates()),
            ViewRequest::FraudRisk => ViewOutput::FraudRisk(dataset.aggregates()),
            ViewRequest::Outlook { growth_rate_percent } => {
                if !GROWTH_RATE_RANGE.contains(growth_rate_percent) {
                    warn!("Growth rate {growth_rate_percent}% is outside the usual {}-{}% range",
                        GROWTH_RATE_RANGE.start(), GROWTH_RATE_RANGE.end());
                }

                ViewOutput::Outlook(outlook(dataset, *growth_rate_percent, &self.settings)?)
            }
            ViewRequest::Assistant { query } => ViewOutput::Assistant(assistant::resolve(query))
        };

        Ok(output)
    }
}
