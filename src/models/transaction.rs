use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Timestamp layout used when loading cleaned rows into a table.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Represents a single row from the source CSV file.
///
/// Both cleanable columns stay raw text until a sanitizer stage has coerced
/// them; either may be absent in the source. Columns outside the fixed
/// schema are captured in `extra` and carried through every stage untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTransaction {
    /// Opaque account identifier.
    pub account_id: String,
    /// Raw transaction date text.
    pub transaction_date: Option<String>,
    /// Raw amount text.
    pub amount: Option<String>,
    /// Passthrough columns, keyed by header name.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// A transaction whose amount has been coerced to a decimal. The date column
/// is still raw text until the date sanitizer has run.
#[derive(Debug, Clone)]
pub struct NumericTransaction {
    pub account_id: String,
    pub transaction_date: Option<String>,
    pub amount: Decimal,
    pub extra: BTreeMap<String, String>,
}

/// A fully coerced transaction. Debits are negative amounts, credits are
/// positive.
#[derive(Debug, Clone)]
pub struct CleanTransaction {
    pub account_id: String,
    pub transaction_date: NaiveDateTime,
    pub amount: Decimal,
    pub extra: BTreeMap<String, String>,
}

/// A clean transaction together with the account balance after it.
#[derive(Debug, Clone)]
pub struct BalancedTransaction {
    pub account_id: String,
    pub transaction_date: NaiveDateTime,
    pub amount: Decimal,
    pub balance: Decimal,
    pub extra: BTreeMap<String, String>,
}

/// A row rejected by a sanitizer stage, kept in its pre-coercion or
/// partially-coerced form.
///
/// Amount rejects carry no amount at all (the missing marker); date rejects
/// carry the amount that already parsed plus the original date text. Both
/// shapes share this record so the two error sets can be concatenated into
/// one table.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub account_id: String,
    pub transaction_date: Option<String>,
    pub amount: Option<Decimal>,
    pub extra: BTreeMap<String, String>,
}

impl ErrorRecord {
    pub fn amount_reject(row: RawTransaction) -> Self {
        Self {
            account_id: row.account_id,
            transaction_date: row.transaction_date,
            amount: None,
            extra: row.extra,
        }
    }

    pub fn date_reject(row: NumericTransaction) -> Self {
        Self {
            account_id: row.account_id,
            transaction_date: row.transaction_date,
            amount: Some(row.amount),
            extra: row.extra,
        }
    }

    pub fn csv_header(rows: &[Self]) -> Vec<String> {
        let mut header = vec![
            "account_id".to_string(),
            "transaction_date".to_string(),
            "amount".to_string(),
        ];

        if let Some(first) = rows.first() {
            header.extend(first.extra.keys().cloned());
        }

        header
    }

    pub fn csv_record(&self) -> Vec<String> {
        let mut record = vec![
            self.account_id.clone(),
            self.transaction_date.clone().unwrap_or_default(),
            self.amount.map(|amount| amount.to_string()).unwrap_or_default(),
        ];

        record.extend(self.extra.values().cloned());
        record
    }
}

impl BalancedTransaction {
    /// Table schema for a cleaned dataset: the fixed columns followed by the
    /// passthrough columns. All rows of a dataset share one schema, so the
    /// passthrough keys are taken from the first row.
    pub fn csv_header(rows: &[Self]) -> Vec<String> {
        let mut header = vec![
            "account_id".to_string(),
            "transaction_date".to_string(),
            "amount".to_string(),
            "balance".to_string(),
        ];

        if let Some(first) = rows.first() {
            header.extend(first.extra.keys().cloned());
        }

        header
    }

    pub fn csv_record(&self) -> Vec<String> {
        let mut record = vec![
            self.account_id.clone(),
            self.transaction_date.format(TIMESTAMP_FORMAT).to_string(),
            self.amount.to_string(),
            self.balance.to_string(),
        ];

        record.extend(self.extra.values().cloned());
        record
    }
}
