mod errors;
mod geojson;

use std::collections::HashSet;

pub use errors::BoundaryError;
pub use geojson::{GeoJsonBoundaries, DEFAULT_FEATURE_KEY};

/// Geographic shapes keyed by the same region names the aggregates use.
///
/// Fetching and parsing boundary data is left to the caller; views only ask
/// whether a region can be drawn.
pub trait BoundaryLookup: Send + Sync {
    fn contains_region(&self, region: &str) -> bool;
}

impl BoundaryLookup for HashSet<String> {
    fn contains_region(&self, region: &str) -> bool {
        self.contains(region)
    }
}
