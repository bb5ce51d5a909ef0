mod errors;
mod router;
mod slices;
mod view;

pub use errors::ViewError;
pub use router::{parse_growth_rate, ViewOutput, ViewRequest, ViewRouter};
pub use slices::{concentration, outlook, overview, spatial, ConcentrationSlice, OutlookSummary, OverviewKpis, SpatialPoint, SpatialSlice};
pub use slices::{HEADLINE_REGIONS, TOP_REGIONS};
pub use view::{SpatialMetric, View};
