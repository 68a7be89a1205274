use rust_decimal::Decimal;

use crate::models::{BalancedTransaction, CleanTransaction};

/// Derives the balance after each transaction for every account.
///
/// Rows are stably sorted by `(account_id, transaction_date)`, so equal
/// timestamps within an account keep their input order. The running sum
/// resets at every account boundary and never carries across accounts;
/// debits being negative is what makes a plain prefix sum the balance.
///
/// The input is consumed and a freshly ordered vector returned; callers that
/// still need the original ordering must keep their own copy.
pub fn compute_running_balance(mut rows: Vec<CleanTransaction>) -> Vec<BalancedTransaction> {
    rows.sort_by(|a, b| {
        a.account_id
            .cmp(&b.account_id)
            .then(a.transaction_date.cmp(&b.transaction_date))
    });

    let mut balanced = Vec::with_capacity(rows.len());
    let mut current_account: Option<String> = None;
    let mut running = Decimal::ZERO;

    for row in rows {
        if current_account.as_deref() != Some(row.account_id.as_str()) {
            current_account = Some(row.account_id.clone());
            running = Decimal::ZERO;
        }

        running += row.amount;

        balanced.push(BalancedTransaction {
            account_id: row.account_id,
            transaction_date: row.transaction_date,
            amount: row.amount,
            balance: running,
            extra: row.extra,
        });
    }

    balanced
}
