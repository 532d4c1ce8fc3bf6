//! Wallet commands: listing, lock toggling, percentage editing, theme

use crate::display::format_wallet_list;
use crate::error::{WalletError, WalletResult};
use crate::models::{AppState, WalletId};
use crate::services::LedgerService;
use crate::storage::StateStore;

pub fn handle_wallets(state: &AppState) -> WalletResult<()> {
    println!("{}", format_wallet_list(&state.wallets));
    Ok(())
}

pub fn handle_lock(store: &StateStore, state: &mut AppState, wallet: &str) -> WalletResult<()> {
    let service = LedgerService::new(store);
    let id = WalletId::new(wallet);
    let locked = service.toggle_lock(state, &id)?;

    let name = state.wallet(&id).map(|w| w.name.as_str()).unwrap_or(wallet);
    if locked {
        println!("{} is now locked", name);
    } else {
        println!("{} is now unlocked", name);
    }
    Ok(())
}

pub fn handle_percentages(
    store: &StateStore,
    state: &mut AppState,
    values: &[String],
) -> WalletResult<()> {
    let percentages = parse_percentage_pairs(values)?;
    let service = LedgerService::new(store);
    service.set_percentages(state, &percentages)?;

    println!("{}", format_wallet_list(&state.wallets));
    Ok(())
}

pub fn handle_theme(store: &StateStore, state: &mut AppState) -> WalletResult<()> {
    let service = LedgerService::new(store);
    let dark = service.toggle_theme(state)?;
    println!("Dark mode: {}", if dark { "on" } else { "off" });
    Ok(())
}

/// Parse `id=value` pairs from the command line
fn parse_percentage_pairs(values: &[String]) -> WalletResult<Vec<(WalletId, u8)>> {
    values
        .iter()
        .map(|pair| {
            let (id, value) = pair.split_once('=').ok_or_else(|| {
                WalletError::Validation(format!("expected id=value, got '{}'", pair))
            })?;
            let value: u8 = value.parse().map_err(|_| {
                WalletError::Validation(format!("'{}' is not a percentage 0-100", value))
            })?;
            Ok((WalletId::new(id), value))
        })
        .collect()
}
