//! Ledger service
//!
//! The boundary the presentation layer calls for every balance-changing
//! action. Each successful mutation updates the wallets, appends exactly
//! one transaction record, and persists the whole state; a rejected
//! operation changes and records nothing.

use crate::error::{WalletError, WalletResult};
use crate::ledger;
use crate::models::{
    AppState, CategoryRef, PendingPinChange, PinKind, Transaction, TransactionType, WalletId,
};
use crate::storage::StateStore;

/// Display name recorded for split deposits, which target every unlocked
/// wallet rather than a single category
pub const SPLIT_CATEGORY_NAME: &str = "Auto distribution";

/// Service for wallet mutations
pub struct LedgerService<'a> {
    store: &'a StateStore,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(store: &'a StateStore) -> Self {
        Self { store }
    }

    /// Distribute one amount across all unlocked wallets by percentage
    pub fn split_deposit(&self, state: &mut AppState, amount: i64) -> WalletResult<Transaction> {
        let outcome = ledger::split_deposit(&state.wallets, amount)?;
        let record = Transaction::new(
            amount,
            TransactionType::SplitDeposit,
            CategoryRef::All,
            SPLIT_CATEGORY_NAME,
        );
        state.wallets = outcome.wallets;
        self.commit(state, record.clone())?;
        Ok(record)
    }

    /// Deposit into one wallet.
    ///
    /// `force` selects the explicit lock-ignoring variant; the default
    /// respects the wallet's lock like every other mutation.
    pub fn category_deposit(
        &self,
        state: &mut AppState,
        id: &WalletId,
        amount: i64,
        note: Option<String>,
        force: bool,
    ) -> WalletResult<Transaction> {
        let updated = if force {
            ledger::deposit_unchecked(&state.wallets, id, amount)?
        } else {
            ledger::deposit(&state.wallets, id, amount)?
        };
        let record = self.record_for(state, id, amount, TransactionType::DirectDeposit, note)?;
        state.wallets = updated;
        self.commit(state, record.clone())?;
        Ok(record)
    }

    /// Withdraw from one wallet
    pub fn category_withdraw(
        &self,
        state: &mut AppState,
        id: &WalletId,
        amount: i64,
        note: Option<String>,
    ) -> WalletResult<Transaction> {
        let updated = ledger::withdraw(&state.wallets, id, amount)?;
        let record = self.record_for(state, id, amount, TransactionType::Withdrawal, note)?;
        state.wallets = updated;
        self.commit(state, record.clone())?;
        Ok(record)
    }

    /// Move an amount between two wallets
    pub fn transfer(
        &self,
        state: &mut AppState,
        from: &WalletId,
        to: &WalletId,
        amount: i64,
        note: Option<String>,
    ) -> WalletResult<Transaction> {
        let updated = ledger::transfer(&state.wallets, from, to, amount)?;
        let from_name = self.wallet_name(state, from)?;
        let to_name = self.wallet_name(state, to)?;
        let mut record = Transaction::transfer(amount, from.clone(), from_name, to.clone(), to_name);
        if let Some(note) = note {
            record = record.with_note(note);
        }
        state.wallets = updated;
        self.commit(state, record.clone())?;
        Ok(record)
    }

    /// Flip a wallet's lock flag. No transaction record; the flag change is
    /// not a balance-affecting event.
    pub fn toggle_lock(&self, state: &mut AppState, id: &WalletId) -> WalletResult<bool> {
        state.wallets = ledger::toggle_lock(&state.wallets, id)?;
        self.store.save(state)?;
        state
            .wallet(id)
            .map(|w| w.is_locked)
            .ok_or_else(|| WalletError::wallet_not_found(id.as_str()))
    }

    /// Replace the split percentages wholesale.
    ///
    /// Every wallet must be assigned a value in 0..=100 and the values must
    /// sum to exactly 100; the ledger itself tolerates other configurations
    /// but the editor refuses to create them.
    pub fn set_percentages(
        &self,
        state: &mut AppState,
        percentages: &[(WalletId, u8)],
    ) -> WalletResult<()> {
        for (id, value) in percentages {
            if state.wallet(id).is_none() {
                return Err(WalletError::wallet_not_found(id.as_str()));
            }
            if *value > 100 {
                return Err(WalletError::InvalidPercentages(format!(
                    "'{}' exceeds 100",
                    id
                )));
            }
        }
        for wallet in &state.wallets {
            if !percentages.iter().any(|(id, _)| id == &wallet.id) {
                return Err(WalletError::InvalidPercentages(format!(
                    "missing a value for '{}'",
                    wallet.id
                )));
            }
        }
        let sum: u32 = percentages.iter().map(|(_, v)| *v as u32).sum();
        if sum != 100 {
            return Err(WalletError::InvalidPercentages(format!(
                "values sum to {}, expected 100",
                sum
            )));
        }

        for wallet in &mut state.wallets {
            if let Some((_, value)) = percentages.iter().find(|(id, _)| id == &wallet.id) {
                wallet.percentage = *value;
            }
        }
        self.store.save(state)
    }

    /// Toggle the dark-mode flag and persist
    pub fn toggle_theme(&self, state: &mut AppState) -> WalletResult<bool> {
        state.is_dark_mode = !state.is_dark_mode;
        self.store.save(state)?;
        Ok(state.is_dark_mode)
    }

    /// Record a PIN-change request that becomes actionable after the
    /// 24-hour wait. Data shape only; the rotation itself is an extension
    /// point.
    pub fn set_pending_pin(
        &self,
        state: &mut AppState,
        new_pin: impl Into<String>,
        kind: PinKind,
    ) -> WalletResult<()> {
        state.pending_pin_change = Some(PendingPinChange::new(new_pin, kind));
        self.store.save(state)
    }

    fn record_for(
        &self,
        state: &AppState,
        id: &WalletId,
        amount: i64,
        kind: TransactionType,
        note: Option<String>,
    ) -> WalletResult<Transaction> {
        let name = self.wallet_name(state, id)?;
        let mut record = Transaction::new(amount, kind, CategoryRef::Wallet(id.clone()), name);
        if let Some(note) = note {
            record = record.with_note(note);
        }
        Ok(record)
    }

    fn wallet_name(&self, state: &AppState, id: &WalletId) -> WalletResult<String> {
        state
            .wallet(id)
            .map(|w| w.name.clone())
            .ok_or_else(|| WalletError::wallet_not_found(id.as_str()))
    }

    /// Append the record and persist; balance mutation, log append, and the
    /// save behave as one unit from the caller's point of view
    fn commit(&self, state: &mut AppState, record: Transaction) -> WalletResult<()> {
        state.transactions.append(record);
        self.store.save(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, StateStore, AppState) {
        let temp_dir = TempDir::new().unwrap();
        let store = StateStore::at(temp_dir.path().join("state.json"));
        let state = AppState::default();
        (temp_dir, store, state)
    }

    #[test]
    fn test_split_deposit_appends_one_record_and_persists() {
        let (_tmp, store, mut state) = setup();
        let service = LedgerService::new(&store);

        let record = service.split_deposit(&mut state, 1000).unwrap();
        assert_eq!(record.kind, TransactionType::SplitDeposit);
        assert_eq!(record.category_id, CategoryRef::All);
        assert_eq!(record.category_name, SPLIT_CATEGORY_NAME);
        assert_eq!(state.total_balance(), 1000);
        assert_eq!(state.transactions.len(), 1);

        let persisted = store.load().unwrap();
        assert_eq!(persisted, state);
    }

    #[test]
    fn test_rejected_operation_records_nothing() {
        let (_tmp, store, mut state) = setup();
        let service = LedgerService::new(&store);

        let err = service
            .category_withdraw(&mut state, &WalletId::new("personal"), 50, None)
            .unwrap_err();
        assert!(matches!(err, WalletError::InsufficientFunds { .. }));
        assert_eq!(state.total_balance(), 0);
        assert!(state.transactions.is_empty());
    }

    #[test]
    fn test_deposit_and_withdraw_pair_records() {
        let (_tmp, store, mut state) = setup();
        let service = LedgerService::new(&store);
        let id = WalletId::new("personal");

        service
            .category_deposit(&mut state, &id, 300, Some("salary".into()), false)
            .unwrap();
        service
            .category_withdraw(&mut state, &id, 120, None)
            .unwrap();

        assert_eq!(state.wallet(&id).unwrap().balance, 180);
        assert_eq!(state.transactions.len(), 2);
        // Newest first
        let kinds: Vec<TransactionType> = state.transactions.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![TransactionType::Withdrawal, TransactionType::DirectDeposit]
        );
    }

    #[test]
    fn test_deposit_force_bypasses_lock() {
        let (_tmp, store, mut state) = setup();
        let service = LedgerService::new(&store);
        let id = WalletId::new("personal");

        service.toggle_lock(&mut state, &id).unwrap();
        assert!(matches!(
            service.category_deposit(&mut state, &id, 10, None, false),
            Err(WalletError::WalletLocked(_))
        ));
        service
            .category_deposit(&mut state, &id, 10, None, true)
            .unwrap();
        assert_eq!(state.wallet(&id).unwrap().balance, 10);
    }

    #[test]
    fn test_transfer_record_denormalizes_names() {
        let (_tmp, store, mut state) = setup();
        let service = LedgerService::new(&store);
        let from = WalletId::new("personal");
        let to = WalletId::new("charity");

        service
            .category_deposit(&mut state, &from, 100, None, false)
            .unwrap();
        let record = service
            .transfer(&mut state, &from, &to, 40, None)
            .unwrap();

        assert_eq!(record.category_name, "Personal");
        assert_eq!(record.target_category_name.as_deref(), Some("Charity"));
        assert_eq!(state.wallet(&from).unwrap().balance, 60);
        assert_eq!(state.wallet(&to).unwrap().balance, 40);
    }

    #[test]
    fn test_set_percentages_requires_full_valid_set() {
        let (_tmp, store, mut state) = setup();
        let service = LedgerService::new(&store);

        let incomplete = vec![(WalletId::new("personal"), 100u8)];
        assert!(matches!(
            service.set_percentages(&mut state, &incomplete),
            Err(WalletError::InvalidPercentages(_))
        ));

        let bad_sum = vec![
            (WalletId::new("obligations"), 40u8),
            (WalletId::new("investment"), 40),
            (WalletId::new("personal"), 40),
            (WalletId::new("charity"), 40),
        ];
        assert!(matches!(
            service.set_percentages(&mut state, &bad_sum),
            Err(WalletError::InvalidPercentages(_))
        ));

        let valid = vec![
            (WalletId::new("obligations"), 25u8),
            (WalletId::new("investment"), 25),
            (WalletId::new("personal"), 25),
            (WalletId::new("charity"), 25),
        ];
        service.set_percentages(&mut state, &valid).unwrap();
        assert!(state.wallets.iter().all(|w| w.percentage == 25));
    }

    #[test]
    fn test_toggle_theme_persists() {
        let (_tmp, store, mut state) = setup();
        let service = LedgerService::new(&store);

        assert!(service.toggle_theme(&mut state).unwrap());
        assert!(store.load().unwrap().is_dark_mode);
        assert!(!service.toggle_theme(&mut state).unwrap());
    }

    #[test]
    fn test_set_pending_pin_records_request() {
        let (_tmp, store, mut state) = setup();
        let service = LedgerService::new(&store);

        service
            .set_pending_pin(&mut state, "4321", PinKind::Main)
            .unwrap();
        let pending = state.pending_pin_change.as_ref().unwrap();
        assert_eq!(pending.new_pin, "4321");
        assert!(!pending.is_ready);
    }
}
