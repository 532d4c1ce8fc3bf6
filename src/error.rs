//! Custom error types for splitwallet
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for splitwallet operations
#[derive(Error, Debug)]
pub enum WalletError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Non-positive or non-numeric amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(i64),

    /// Withdrawal or transfer amount exceeds the source balance
    #[error("Insufficient funds in wallet '{wallet}': need {needed}, have {available}")]
    InsufficientFunds {
        wallet: String,
        needed: i64,
        available: i64,
    },

    /// Split deposit attempted while every wallet is locked
    #[error("No eligible wallets: all wallets are locked")]
    NoEligibleWallets,

    /// Transfer endpoints are invalid (same wallet, or a locked endpoint)
    #[error("Invalid transfer target: {0}")]
    InvalidTransferTarget(String),

    /// Operation targets a locked wallet
    #[error("Wallet '{0}' is locked")]
    WalletLocked(String),

    /// Unknown wallet identifier
    #[error("Wallet not found: {0}")]
    WalletNotFound(String),

    /// Wrong password or corrupted/tampered backup artifact.
    ///
    /// Deliberately carries no detail: every decryption failure surfaces as
    /// this one condition so the error itself leaks nothing about the cause.
    #[error("Decryption failed: wrong password or corrupted backup")]
    DecryptionFailed,

    /// Decrypted payload is not a valid state snapshot
    #[error("Malformed backup: {0}")]
    MalformedBackup(String),

    /// An export or import of the same kind is already running
    #[error("{0} already in progress")]
    OperationInFlight(&'static str),

    /// Malformed user input outside the amount path (month strings,
    /// percentage pairs)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Percentage editor rejected the requested configuration
    #[error("Invalid percentages: {0}")]
    InvalidPercentages(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Encryption errors (key derivation or cipher setup)
    #[error("Encryption error: {0}")]
    Encryption(String),
}

impl WalletError {
    /// Create a "wallet not found" error
    pub fn wallet_not_found(identifier: impl Into<String>) -> Self {
        Self::WalletNotFound(identifier.into())
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for splitwallet operations
pub type WalletResult<T> = Result<T, WalletError>;
