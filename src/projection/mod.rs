mod engine;
mod errors;
mod settings;
#[cfg(test)]
mod tests;

pub use engine::{project, ProjectionPoint, ProjectionSeries};
pub use errors::ProjectionError;
pub use settings::{ProjectionSettings, BASE_YEAR, DEFAULT_GROWTH_RATE_PERCENT, GROWTH_RATE_RANGE, NATIONAL_SCALE_FACTOR, TARGET_YEAR};
