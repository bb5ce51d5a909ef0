use crate::types::errors::FraudFlagError;
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Whether a transaction was flagged as fraudulent.
///
/// Accepts the spellings seen in exported payment datasets: `1`/`0`,
/// `true`/`false`, `yes`/`no` and `y`/`n` in any case. Any other numeric value
/// is treated as flagged when it is non-zero.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct FraudFlag(bool);

impl FraudFlag {
    pub const FLAGGED: FraudFlag = FraudFlag(true);
    pub const CLEAR: FraudFlag = FraudFlag(false);

    pub fn is_flagged(&self) -> bool {
        self.0
    }
}

impl From<bool> for FraudFlag {
    fn from(value: bool) -> Self {
        FraudFlag(value)
    }
}

impl Display for FraudFlag {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", if self.0 { 1 } else { 0 })
    }
}

impl FromStr for FraudFlag {
    type Err = FraudFlagError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "y" => return Ok(FraudFlag::FLAGGED),
            "0" | "false" | "no" | "n" => return Ok(FraudFlag::CLEAR),
            _ => {}
        }

        match value.parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(FraudFlag(number != 0.0)),
            _ => Err(FraudFlagError::InvalidFormat(value.to_string()))
        }
    }
}
