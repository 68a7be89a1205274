mod transaction;

pub use transaction::{
    BalancedTransaction, CleanTransaction, ErrorRecord, NumericTransaction, RawTransaction,
    TIMESTAMP_FORMAT,
};
