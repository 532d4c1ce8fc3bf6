//! Core data models for splitwallet
//!
//! This module contains the data structures that represent the budgeting
//! domain: wallets, transactions, and the persisted application state.

pub mod amount;
pub mod ids;
pub mod state;
pub mod transaction;
pub mod wallet;

pub use amount::{parse_amount, round_amount, validate_amount};
pub use ids::{TransactionId, WalletId};
pub use state::{AppState, PendingPinChange, PinKind, PIN_WAIT_TIME};
pub use transaction::{CategoryRef, Transaction, TransactionType};
pub use wallet::{default_wallets, Wallet, LOW_BALANCE_THRESHOLD};
