//! Display formatting for terminal output

pub mod transaction;
pub mod wallet;

pub use transaction::{format_monthly_report, format_transaction_list};
pub use wallet::format_wallet_list;
