use crate::types::errors::AmountError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::AddAssign;
use std::str::FromStr;

/// A rupee amount or a sum of amounts.
///
/// Values are kept as exact decimals while they fit in `Decimal`. Anything
/// beyond that range (about 7.9e28) is carried as an `f64`, so every amount a
/// double can hold is still accepted and summed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Exact(Decimal),
    Approximate(f64)
}

impl Amount {
    pub const ZERO: Amount = Amount::Exact(Decimal::ZERO);

    pub fn is_negative(&self) -> bool {
        match self {
            Amount::Exact(value) => value.is_sign_negative() && !value.is_zero(),
            Amount::Approximate(value) => *value < 0.0
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Amount::Exact(_))
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Amount::Exact(value) => value.to_f64().unwrap_or(f64::NAN),
            Amount::Approximate(value) => *value
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::ZERO
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Amount::Exact(value)
    }
}

impl AddAssign<Amount> for Amount {
    fn add_assign(&mut self, rhs: Amount) {
        //NOTE: Once a sum leaves the decimal range it stays approximate
        *self = match (*self, rhs) {
            (Amount::Exact(left), Amount::Exact(right)) => match left.checked_add(right) {
                Some(sum) => Amount::Exact(sum),
                None => Amount::Approximate(self.to_f64() + rhs.to_f64())
            },
            _ => Amount::Approximate(self.to_f64() + rhs.to_f64())
        };
    }
}

impl Display for Amount {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Exact(value) => write!(formatter, "{value}"),
            Amount::Approximate(value) => write!(formatter, "{value}")
        }
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if let Ok(decimal) = Decimal::from_str(value).or_else(|_| Decimal::from_scientific(value)) {
            return Ok(Amount::Exact(decimal));
        }

        match value.parse::<f64>() {
            Ok(number) if number.is_finite() => Ok(Amount::Approximate(number)),
            _ => Err(AmountError::InvalidFormat(value.to_string()))
        }
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
