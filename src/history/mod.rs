//! Transaction log and reporting
//!
//! The log is an append-only, newest-first record of every balance-changing
//! event. It is derived history for display and aggregation, never a source
//! of truth for balances; nothing here mutates or deletes a record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Transaction, TransactionType, Wallet, WalletId};

/// Append-only sequence of transactions, ordered newest-first
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionLog(Vec<Transaction>);

impl TransactionLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a record at the head (newest-first ordering)
    pub fn append(&mut self, record: Transaction) {
        self.0.insert(0, record);
    }

    /// Iterate newest-first
    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.0.iter()
    }

    /// The most recent records, newest-first
    pub fn recent(&self, count: usize) -> &[Transaction] {
        &self.0[..count.min(self.0.len())]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lazily filter the log with an arbitrary predicate, newest-first
    pub fn query<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a Transaction>
    where
        P: FnMut(&&'a Transaction) -> bool + 'a,
    {
        self.0.iter().filter(predicate)
    }
}

impl From<Vec<Transaction>> for TransactionLog {
    fn from(records: Vec<Transaction>) -> Self {
        Self(records)
    }
}

impl<'a> IntoIterator for &'a TransactionLog {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Coarse kind filter used by the history view: deposits group the direct
/// and split variants together
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    All,
    Deposit,
    Withdrawal,
    Transfer,
}

impl KindFilter {
    pub fn matches(&self, txn: &Transaction) -> bool {
        match self {
            Self::All => true,
            Self::Deposit => txn.is_deposit(),
            Self::Withdrawal => txn.kind == TransactionType::Withdrawal,
            Self::Transfer => txn.kind == TransactionType::Transfer,
        }
    }
}

/// History view filter: free-text search over the denormalized names and
/// note, a kind filter, and an optional calendar month
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    pub search: Option<String>,
    pub kind: Option<KindFilter>,
    pub month: Option<(i32, u32)>,
}

impl HistoryFilter {
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(search) = &self.search {
            let matches_search = txn.category_name.contains(search.as_str())
                || txn
                    .target_category_name
                    .as_deref()
                    .is_some_and(|n| n.contains(search.as_str()))
                || txn.note.as_deref().is_some_and(|n| n.contains(search.as_str()));
            if !matches_search {
                return false;
            }
        }
        if let Some(kind) = &self.kind {
            if !kind.matches(txn) {
                return false;
            }
        }
        if let Some((year, month)) = self.month {
            if !txn.in_month(year, month) {
                return false;
            }
        }
        true
    }

    /// Apply the filter to a log, newest-first
    pub fn apply<'a>(&'a self, log: &'a TransactionLog) -> impl Iterator<Item = &'a Transaction> {
        log.query(move |t| self.matches(t))
    }
}

/// Running totals for a history listing: inflow counts deposits only,
/// outflow counts withdrawals; transfers move money without changing it
pub fn history_totals<'a>(records: impl Iterator<Item = &'a Transaction>) -> (i64, i64) {
    let mut total_in = 0;
    let mut total_out = 0;
    for txn in records {
        match txn.kind {
            TransactionType::Withdrawal => total_out += txn.amount,
            TransactionType::Transfer => {}
            _ => total_in += txn.amount,
        }
    }
    (total_in, total_out)
}

/// Per-wallet money flow within one calendar month.
///
/// Values are `f64` because split deposits attribute a *virtual*
/// `amount * percentage / 100` inflow to every wallet, unrounded. This
/// attribution exists for reporting only and is never written back to the
/// ledger or the log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletFlow {
    pub name: String,
    pub inflow: f64,
    pub outflow: f64,
}

/// Monthly aggregate over the log, grouped by calendar month of the
/// transaction date
#[derive(Debug, Clone)]
pub struct MonthlyReport {
    pub year: i32,
    pub month: u32,
    pub flows: BTreeMap<WalletId, WalletFlow>,
}

impl MonthlyReport {
    /// Aggregate one calendar month of the log against the current wallets.
    ///
    /// Direct deposits add to the target wallet's inflow and withdrawals to
    /// its outflow; a split deposit spreads its virtual attribution across
    /// every wallet; a transfer counts as outflow from the source and inflow
    /// to the destination.
    pub fn for_month(
        log: &TransactionLog,
        wallets: &[Wallet],
        year: i32,
        month: u32,
    ) -> Self {
        let mut flows: BTreeMap<WalletId, WalletFlow> = wallets
            .iter()
            .map(|w| {
                (
                    w.id.clone(),
                    WalletFlow {
                        name: w.name.clone(),
                        ..Default::default()
                    },
                )
            })
            .collect();

        for txn in log.query(move |t| t.in_month(year, month)) {
            match &txn.category_id {
                crate::models::CategoryRef::All => {
                    for wallet in wallets {
                        if let Some(flow) = flows.get_mut(&wallet.id) {
                            flow.inflow += txn.amount as f64 * (wallet.percentage as f64 / 100.0);
                        }
                    }
                }
                crate::models::CategoryRef::Wallet(id) => {
                    match txn.kind {
                        TransactionType::Withdrawal => {
                            if let Some(flow) = flows.get_mut(id) {
                                flow.outflow += txn.amount as f64;
                            }
                        }
                        TransactionType::Transfer => {
                            if let Some(flow) = flows.get_mut(id) {
                                flow.outflow += txn.amount as f64;
                            }
                            if let Some(target) = &txn.target_category_id {
                                if let Some(flow) = flows.get_mut(target) {
                                    flow.inflow += txn.amount as f64;
                                }
                            }
                        }
                        _ => {
                            if let Some(flow) = flows.get_mut(id) {
                                flow.inflow += txn.amount as f64;
                            }
                        }
                    }
                }
            }
        }

        Self { year, month, flows }
    }

    /// Total inflow for the month, rounded for display
    pub fn total_inflow(&self) -> i64 {
        crate::models::round_amount(self.flows.values().map(|f| f.inflow).sum())
    }

    /// Total outflow for the month, rounded for display
    pub fn total_outflow(&self) -> i64 {
        crate::models::round_amount(self.flows.values().map(|f| f.outflow).sum())
    }
}

/// Wallets currently under the low-balance threshold
pub fn low_balance_wallets(wallets: &[Wallet]) -> Vec<&Wallet> {
    wallets
        .iter()
        .filter(|w| w.balance < crate::models::LOW_BALANCE_THRESHOLD)
        .collect()
}
