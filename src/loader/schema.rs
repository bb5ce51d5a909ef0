use csv::{ByteRecord, StringRecord};

use crate::loader::errors::SchemaError;

pub const REGION_COLUMN: &str = "sender_state";
pub const TRANSACTION_ID_COLUMN: &str = "transaction_id";
pub const FRAUD_COLUMN: &str = "fraud_flag";
/// Internal name given to whichever column was resolved as the amount.
pub const AMOUNT_COLUMN: &str = "amount_inr";

const AMOUNT_MARKER: &str = "amount";

/// Trims, lowercases and joins whitespace runs with `_`.
///
/// Applying it twice gives the same result as applying it once.
pub fn normalize_column_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

pub fn normalize_headers<'a, I>(headers: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    headers.into_iter().map(normalize_column_name).collect()
}

/// Finds the first normalized header containing `"amount"`.
pub fn resolve_amount_column(headers: &[String]) -> Result<usize, SchemaError> {
    headers.iter()
        .position(|header| header.contains(AMOUNT_MARKER))
        .ok_or_else(|| SchemaError::amount_column_missing(headers))
}

/// Positions of the columns the loader reads, resolved from normalized headers.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ColumnLayout {
    pub region: usize,
    pub transaction_id: usize,
    pub amount: usize,
    pub fraud_flag: usize
}

impl ColumnLayout {
    /// # Errors
    /// Returns `SchemaError` if no amount column can be found or the region,
    /// transaction id or fraud flag column is absent.
    pub fn resolve(headers: &[String]) -> Result<Self, SchemaError> {
        let amount = resolve_amount_column(headers)?;

        let find = |column: &'static str| {
            headers.iter()
                .position(|header| header == column)
                .ok_or_else(|| SchemaError::column_missing(column, headers))
        };

        Ok(Self {
            region: find(REGION_COLUMN)?,
            transaction_id: find(TRANSACTION_ID_COLUMN)?,
            amount,
            fraud_flag: find(FRAUD_COLUMN)?
        })
    }

    /// Header record matching the field order produced by [`ColumnLayout::project`].
    pub fn canonical_headers() -> StringRecord {
        StringRecord::from(vec![REGION_COLUMN, TRANSACTION_ID_COLUMN, AMOUNT_COLUMN, FRAUD_COLUMN])
    }

    /// Picks the resolved columns out of a raw row. Short rows yield blank fields.
    ///
    /// Only the picked columns are decoded, so bytes that are not UTF-8 in any
    /// other column are ignored. On failure the canonical name of the column
    /// that could not be decoded is returned.
    pub fn project(&self, row: &ByteRecord) -> Result<StringRecord, &'static str> {
        [
            (self.region, REGION_COLUMN),
            (self.transaction_id, TRANSACTION_ID_COLUMN),
            (self.amount, AMOUNT_COLUMN),
            (self.fraud_flag, FRAUD_COLUMN)
        ]
            .iter()
            .map(|&(index, column)| std::str::from_utf8(row.get(index).unwrap_or_default()).map_err(|_| column))
            .collect()
    }
}
