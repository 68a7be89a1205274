mod amount;
mod balance;
mod date;

pub use amount::sanitize_amounts;
pub use balance::compute_running_balance;
pub use date::sanitize_dates;
