use thiserror::Error;

use crate::types::Year;

#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("Projection error: target year [{target_year}] precedes base year [{base_year}]")]
    InvalidHorizon {
        base_year: Year,
        target_year: Year
    }
}
