//! Money movement commands: split, deposit, withdraw, transfer

use crate::error::WalletResult;
use crate::models::{parse_amount, AppState, WalletId};
use crate::services::LedgerService;
use crate::storage::StateStore;

pub fn handle_split(store: &StateStore, state: &mut AppState, amount: &str) -> WalletResult<()> {
    let service = LedgerService::new(store);
    let record = service.split_deposit(state, parse_amount(amount))?;

    println!("Distributed {} across unlocked wallets:", record.amount);
    println!("{}", crate::display::format_wallet_list(&state.wallets));
    Ok(())
}

pub fn handle_deposit(
    store: &StateStore,
    state: &mut AppState,
    wallet: &str,
    amount: &str,
    note: Option<String>,
    force: bool,
) -> WalletResult<()> {
    let service = LedgerService::new(store);
    let id = WalletId::new(wallet);
    let record = service.category_deposit(state, &id, parse_amount(amount), note, force)?;

    let balance = state.wallet(&id).map(|w| w.balance).unwrap_or_default();
    println!(
        "Deposited {} into {} (balance: {})",
        record.amount, record.category_name, balance
    );
    Ok(())
}

pub fn handle_withdraw(
    store: &StateStore,
    state: &mut AppState,
    wallet: &str,
    amount: &str,
    note: Option<String>,
) -> WalletResult<()> {
    let service = LedgerService::new(store);
    let id = WalletId::new(wallet);
    let record = service.category_withdraw(state, &id, parse_amount(amount), note)?;

    let balance = state.wallet(&id).map(|w| w.balance).unwrap_or_default();
    println!(
        "Withdrew {} from {} (balance: {})",
        record.amount, record.category_name, balance
    );
    Ok(())
}

pub fn handle_transfer(
    store: &StateStore,
    state: &mut AppState,
    from: &str,
    to: &str,
    amount: &str,
    note: Option<String>,
) -> WalletResult<()> {
    let service = LedgerService::new(store);
    let from_id = WalletId::new(from);
    let to_id = WalletId::new(to);
    let record = service.transfer(state, &from_id, &to_id, parse_amount(amount), note)?;

    println!(
        "Transferred {} from {} to {}",
        record.amount,
        record.category_name,
        record.target_category_name.as_deref().unwrap_or(to)
    );
    Ok(())
}
