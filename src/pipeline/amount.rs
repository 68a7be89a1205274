use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{ErrorRecord, NumericTransaction, RawTransaction};

/// Sentinel text the upstream export writes into the amount column when it
/// could not price a transaction. Any value containing it counts as zero.
const ERROR_SENTINEL: &str = "error";

/// Tokens the source data uses for absent amounts, alongside empty text.
const NA_TOKENS: [&str; 4] = ["null", "nan", "n/a", "na"];

/// Coerces the amount column to a decimal, splitting off the rows that
/// cannot be coerced.
///
/// Sentinel and missing values are replaced with zero before parsing, so
/// they land in the clean set rather than the error set. Anything that still
/// fails strict decimal parsing is routed to the error set with its amount
/// cleared. Every input row ends up in exactly one of the two outputs.
pub fn sanitize_amounts(
    rows: Vec<RawTransaction>,
) -> (Vec<NumericTransaction>, Vec<ErrorRecord>) {
    let mut clean = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    for row in rows {
        match coerce_amount(row.amount.as_deref()) {
            Some(amount) => clean.push(NumericTransaction {
                account_id: row.account_id,
                transaction_date: row.transaction_date,
                amount,
                extra: row.extra,
            }),
            None => errors.push(ErrorRecord::amount_reject(row)),
        }
    }

    debug!("amount sanitizer kept {} rows, rejected {}", clean.len(), errors.len());

    (clean, errors)
}

fn coerce_amount(raw: Option<&str>) -> Option<Decimal> {
    let value = raw.unwrap_or_default().trim();

    //NOTE: Missing amounts and the error sentinel are both collapsed to zero,
    //      the contract the downstream balance reports were built on
    if value.is_empty() || is_na_token(value) || value.contains(ERROR_SENTINEL) {
        return Some(Decimal::ZERO);
    }

    Decimal::from_str(value).ok()
}

fn is_na_token(value: &str) -> bool {
    NA_TOKENS.iter().any(|token| value.eq_ignore_ascii_case(token))
}
