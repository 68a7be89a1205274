use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::models::{CleanTransaction, ErrorRecord, NumericTransaction};

/// Timestamp layouts the date sanitizer recognizes.
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
];

/// Date-only layouts; values in these layouts resolve to midnight.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Coerces the transaction date column to a timestamp, splitting off the
/// rows that match none of the recognized layouts.
///
/// Rejected rows keep their original date text alongside the amount that
/// already parsed upstream. Every input row ends up in exactly one of the
/// two outputs.
pub fn sanitize_dates(
    rows: Vec<NumericTransaction>,
) -> (Vec<CleanTransaction>, Vec<ErrorRecord>) {
    let mut clean = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    for row in rows {
        match parse_timestamp(row.transaction_date.as_deref()) {
            Some(timestamp) => clean.push(CleanTransaction {
                account_id: row.account_id,
                transaction_date: timestamp,
                amount: row.amount,
                extra: row.extra,
            }),
            None => errors.push(ErrorRecord::date_reject(row)),
        }
    }

    debug!("date sanitizer kept {} rows, rejected {}", clean.len(), errors.len());

    (clean, errors)
}

fn parse_timestamp(raw: Option<&str>) -> Option<NaiveDateTime> {
    let value = raw?.trim();

    for format in DATETIME_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(value, format) {
            return Some(timestamp);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }

    None
}
