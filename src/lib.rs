//! splitwallet - Multi-wallet budgeting with percentage split deposits
//!
//! This library provides the core functionality for the splitwallet
//! budgeting application: a set of named wallets that share deposits by
//! percentage, an append-only transaction log, and password-encrypted
//! portable backups of the whole state.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management
//! - `error`: Custom error types
//! - `models`: Core data models (wallets, transactions, application state)
//! - `ledger`: Pure wallet operations, including the split-deposit algorithm
//! - `history`: Append-only transaction log and monthly reporting
//! - `crypto`: AES-256-GCM encryption with Argon2id key derivation
//! - `backup`: Export/import of the encrypted state artifact
//! - `storage`: Whole-state atomic JSON persistence
//! - `services`: Business logic layer over ledger and backup
//! - `display`: Terminal table formatting
//! - `cli`: Command handlers

pub mod backup;
pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod history;
pub mod ledger;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{WalletError, WalletResult};
