//! Business logic layer
//!
//! Services wrap the pure ledger and codec functions with the effects the
//! presentation layer expects: input normalization, the paired transaction
//! record, and whole-state persistence after every successful mutation.

pub mod backup;
pub mod ledger;

pub use backup::BackupService;
pub use ledger::LedgerService;
