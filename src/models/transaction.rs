use std::str::FromStr;

use serde::Deserialize;

use crate::models::errors::RecordError;
use crate::types::{Amount, FraudFlag, RegionName, TransactionId};

/// A row from the input CSV after its headers have been normalized and
/// projected onto the canonical column names.
///
/// Every field is optional so that a blank cell surfaces as a typed
/// `RecordError` with its line number instead of a generic CSV error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTransactionRow {
    #[serde(rename = "sender_state")]
    pub region: Option<String>,
    pub transaction_id: Option<String>,
    #[serde(rename = "amount_inr")]
    pub amount: Option<String>,
    pub fraud_flag: Option<String>
}

/// A validated transaction ready for aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    /// The sender's region, used as-is as the grouping key.
    pub region: RegionName,
    pub transaction_id: TransactionId,
    /// Non-negative transaction value in rupees.
    pub amount: Amount,
    pub fraud: FraudFlag
}

impl TransactionRecord {
    pub fn new(region: impl Into<RegionName>, transaction_id: impl Into<TransactionId>, amount: impl Into<Amount>, fraud: FraudFlag) -> Self {
        Self {
            region: region.into(),
            transaction_id: transaction_id.into(),
            amount: amount.into(),
            fraud
        }
    }
}

impl RawTransactionRow {
    /// Validates the row read from `line` of the source.
    ///
    /// # Errors
    /// Returns `RecordError` if:
    /// - The region or transaction id is blank.
    /// - The amount is blank, not a number, or negative.
    /// - The fraud flag is present but not a recognised value.
    pub fn into_record(self, line: u64) -> Result<TransactionRecord, RecordError> {
        let region = non_blank(self.region)
            .ok_or_else(|| RecordError::missing_region(line))?;

        let transaction_id = non_blank(self.transaction_id)
            .ok_or_else(|| RecordError::missing_transaction_id(line))?;

        let Some(raw_amount) = non_blank(self.amount) else {
            return Err(RecordError::missing_amount(line, &transaction_id))
        };

        let amount = Amount::from_str(&raw_amount)
            .map_err(|error| RecordError::invalid_amount(line, &transaction_id, error))?;

        if amount.is_negative() {
            return Err(RecordError::negative_amount(line, &transaction_id))
        }

        //NOTE: A blank flag is read as "not flagged", matching how the exports leave the column empty
        let fraud = match non_blank(self.fraud_flag) {
            Some(raw_flag) => FraudFlag::from_str(&raw_flag)
                .map_err(|error| RecordError::invalid_fraud_flag(line, &transaction_id, error))?,
            None => FraudFlag::CLEAR
        };

        Ok(TransactionRecord { region, transaction_id, amount, fraud })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
