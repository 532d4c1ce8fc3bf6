//! Persisted application state
//!
//! `AppState` is the serializable root aggregate: wallets, the transaction
//! log, PIN secrets, the theme flag, and backup metadata. It is the unit of
//! persistence (whole-state replace-on-write) and the unit of backup.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::history::TransactionLog;

use super::wallet::{default_wallets, Wallet};

/// Default main PIN assigned at first run
pub const DEFAULT_USER_PIN: &str = "0986";

/// Default recovery PIN assigned at first run
pub const DEFAULT_RECOVERY_PIN: &str = "JR4647986";

/// Wait imposed on a pending PIN change before it becomes ready (24 hours,
/// in milliseconds)
pub const PIN_WAIT_TIME: i64 = 24 * 60 * 60 * 1000;

fn default_user_pin() -> String {
    DEFAULT_USER_PIN.to_string()
}

fn default_recovery_pin() -> String {
    DEFAULT_RECOVERY_PIN.to_string()
}

/// Which PIN a pending change targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinKind {
    Main,
    Recovery,
}

/// A requested PIN rotation waiting out its 24-hour delay.
///
/// Only the data shape is implemented; the rotation state machine that
/// would consume `is_ready` is an extension point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingPinChange {
    pub new_pin: String,

    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub request_time: DateTime<Utc>,

    pub is_ready: bool,

    #[serde(rename = "type")]
    pub kind: PinKind,
}

impl PendingPinChange {
    /// Create a pending change starting its wait now
    pub fn new(new_pin: impl Into<String>, kind: PinKind) -> Self {
        Self {
            new_pin: new_pin.into(),
            request_time: Utc::now(),
            is_ready: false,
            kind,
        }
    }

    /// Check whether the 24-hour wait has elapsed as of `now`
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() - self.request_time.timestamp_millis() >= PIN_WAIT_TIME
    }
}

/// The serializable root aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub wallets: Vec<Wallet>,

    pub transactions: TransactionLog,

    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_backup_date: Option<DateTime<Utc>>,

    /// Falls back to the first-run default when absent from a snapshot
    #[serde(default = "default_user_pin")]
    pub user_pin: String,

    #[serde(default = "default_recovery_pin")]
    pub recovery_pin: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_pin_change: Option<PendingPinChange>,

    #[serde(default)]
    pub is_dark_mode: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            wallets: default_wallets(),
            transactions: TransactionLog::new(),
            last_backup_date: None,
            user_pin: DEFAULT_USER_PIN.to_string(),
            recovery_pin: DEFAULT_RECOVERY_PIN.to_string(),
            pending_pin_change: None,
            is_dark_mode: false,
        }
    }
}

impl AppState {
    /// Total money across all wallets
    pub fn total_balance(&self) -> i64 {
        self.wallets.iter().map(|w| w.balance).sum()
    }

    /// Look up a wallet by id
    pub fn wallet(&self, id: &super::ids::WalletId) -> Option<&Wallet> {
        self.wallets.iter().find(|w| &w.id == id)
    }
}
