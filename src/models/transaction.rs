//! Transaction model
//!
//! An immutable record of one ledger-affecting event. Transactions are
//! created exactly once per successful ledger mutation, prepended to the
//! log, and never edited or deleted afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{TransactionId, WalletId};

/// Current time truncated to millisecond precision, matching the persisted
/// epoch-milliseconds representation so records round-trip exactly.
fn now_millis() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp_millis(now.timestamp_millis()).unwrap_or(now)
}

/// Kind of ledger event a transaction records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    /// One amount distributed across all unlocked wallets by percentage
    SplitDeposit,
    /// Deposit into a single wallet
    DirectDeposit,
    /// Withdrawal from a single wallet
    Withdrawal,
    /// Movement between two wallets
    Transfer,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SplitDeposit => write!(f, "split deposit"),
            Self::DirectDeposit => write!(f, "deposit"),
            Self::Withdrawal => write!(f, "withdrawal"),
            Self::Transfer => write!(f, "transfer"),
        }
    }
}

/// The wallet a transaction affected, or the `all` sentinel for a split
/// deposit distributed across every unlocked wallet.
///
/// Serializes as a plain string (`"all"` or the wallet id) to keep the
/// persisted shape stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryRef {
    All,
    Wallet(WalletId),
}

/// String sentinel for a split deposit's category
const ALL_SENTINEL: &str = "all";

impl From<String> for CategoryRef {
    fn from(s: String) -> Self {
        if s == ALL_SENTINEL {
            Self::All
        } else {
            Self::Wallet(WalletId::from(s))
        }
    }
}

impl From<CategoryRef> for String {
    fn from(r: CategoryRef) -> Self {
        match r {
            CategoryRef::All => ALL_SENTINEL.to_string(),
            CategoryRef::Wallet(id) => id.as_str().to_string(),
        }
    }
}

/// An immutable record of one ledger-affecting event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Unique identifier, generated at creation, never reused
    pub id: TransactionId,

    /// Positive magnitude; direction is implied by `kind`
    pub amount: i64,

    /// Event kind
    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// The wallet affected, or `all` for a split deposit
    pub category_id: CategoryRef,

    /// Display name captured at creation time; wallet renames do not
    /// retroactively update history
    pub category_name: String,

    /// Destination wallet (transfers only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_category_id: Option<WalletId>,

    /// Destination display name captured at creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_category_name: Option<String>,

    /// Creation timestamp, persisted as integer epoch milliseconds
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub date: DateTime<Utc>,

    /// Optional free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    /// Create a record for a deposit, withdrawal, or split deposit
    pub fn new(
        amount: i64,
        kind: TransactionType,
        category_id: CategoryRef,
        category_name: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            amount,
            kind,
            category_id,
            category_name: category_name.into(),
            target_category_id: None,
            target_category_name: None,
            date: now_millis(),
            note: None,
        }
    }

    /// Create a record for a transfer between two wallets
    pub fn transfer(
        amount: i64,
        from_id: WalletId,
        from_name: impl Into<String>,
        to_id: WalletId,
        to_name: impl Into<String>,
    ) -> Self {
        let mut txn = Self::new(
            amount,
            TransactionType::Transfer,
            CategoryRef::Wallet(from_id),
            from_name,
        );
        txn.target_category_id = Some(to_id);
        txn.target_category_name = Some(to_name.into());
        txn
    }

    /// Attach a free-text note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Check whether this record falls in the given calendar month
    pub fn in_month(&self, year: i32, month: u32) -> bool {
        use chrono::Datelike;
        self.date.year() == year && self.date.month() == month
    }

    /// Check whether this record is any kind of deposit
    pub fn is_deposit(&self) -> bool {
        matches!(
            self.kind,
            TransactionType::DirectDeposit | TransactionType::SplitDeposit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_serialization() {
        assert_eq!(
            serde_json::to_string(&TransactionType::SplitDeposit).unwrap(),
            "\"split_deposit\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::DirectDeposit).unwrap(),
            "\"direct_deposit\""
        );
    }

    #[test]
    fn test_category_ref_sentinel() {
        let all = CategoryRef::All;
        assert_eq!(serde_json::to_string(&all).unwrap(), "\"all\"");

        let parsed: CategoryRef = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(parsed, CategoryRef::All);

        let wallet: CategoryRef = serde_json::from_str("\"personal\"").unwrap();
        assert_eq!(wallet, CategoryRef::Wallet(WalletId::new("personal")));
    }

    #[test]
    fn test_date_serializes_as_epoch_millis() {
        let txn = Transaction::new(
            100,
            TransactionType::DirectDeposit,
            CategoryRef::Wallet(WalletId::new("personal")),
            "Personal",
        );
        let json = serde_json::to_value(&txn).unwrap();
        assert!(json["date"].is_i64());
        assert_eq!(json["type"], "direct_deposit");
        assert_eq!(json["categoryId"], "personal");
        // Absent optional fields are omitted entirely
        assert!(json.get("targetCategoryId").is_none());
        assert!(json.get("note").is_none());
    }

    #[test]
    fn test_transfer_record_captures_both_names() {
        let txn = Transaction::transfer(
            50,
            WalletId::new("personal"),
            "Personal",
            WalletId::new("charity"),
            "Charity",
        );
        assert_eq!(txn.kind, TransactionType::Transfer);
        assert_eq!(txn.category_name, "Personal");
        assert_eq!(txn.target_category_name.as_deref(), Some("Charity"));
        assert_eq!(txn.target_category_id, Some(WalletId::new("charity")));
    }

    #[test]
    fn test_roundtrip() {
        let txn = Transaction::new(
            250,
            TransactionType::Withdrawal,
            CategoryRef::Wallet(WalletId::new("charity")),
            "Charity",
        )
        .with_note("rent");
        let json = serde_json::to_string(&txn).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn, back);
    }
}
