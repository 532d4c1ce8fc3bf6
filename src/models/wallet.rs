//! Wallet model
//!
//! A wallet is a named bucket of money with a percentage share of split
//! deposits and a lock flag. Wallets are created once from the default set
//! and persist indefinitely; they are mutated, never deleted.

use serde::{Deserialize, Serialize};

use super::ids::WalletId;

/// Balance below which a wallet shows up in the low-balance report
pub const LOW_BALANCE_THRESHOLD: i64 = 100;

/// A named bucket of money
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// Stable unique identifier, never reused
    pub id: WalletId,

    /// Display label
    pub name: String,

    /// Share of a split deposit, 0-100.
    ///
    /// The percentage editor keeps the sum across wallets at 100, but the
    /// ledger tolerates any momentary configuration; the split algorithm's
    /// last-wallet-remainder rule conserves money regardless.
    pub percentage: u8,

    /// Balance in whole currency units
    pub balance: i64,

    /// A locked wallet rejects deposits, withdrawals, and transfers, and is
    /// excluded from split-deposit distribution
    #[serde(default)]
    pub is_locked: bool,
}

impl Wallet {
    /// Create a new unlocked wallet with a zero balance
    pub fn new(id: impl Into<WalletId>, name: impl Into<String>, percentage: u8) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            percentage,
            balance: 0,
            is_locked: false,
        }
    }
}

/// The fixed default wallet set created at first run, one per spending
/// category. Percentages sum to 100.
pub fn default_wallets() -> Vec<Wallet> {
    vec![
        Wallet::new("obligations", "Obligations", 32),
        Wallet::new("investment", "Investment", 32),
        Wallet::new("personal", "Personal", 31),
        Wallet::new("charity", "Charity", 5),
    ]
}
