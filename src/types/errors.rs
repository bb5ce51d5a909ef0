use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FraudFlagError {
    #[error("Fraud flag error: [{0}] is not a recognised flag value")]
    InvalidFormat(String)
}

#[derive(Debug, Error, PartialEq)]
pub enum AmountError {
    #[error("Amount error: [{0}] is not a finite number")]
    InvalidFormat(String)
}
