//! Backup commands: export and import of the encrypted state artifact

use std::path::{Path, PathBuf};

use crate::config::WalletPaths;
use crate::crypto::SecureString;
use crate::error::{WalletError, WalletResult};
use crate::models::AppState;
use crate::services::BackupService;
use crate::storage::StateStore;

pub fn handle_export(
    store: &StateStore,
    paths: &WalletPaths,
    state: &mut AppState,
    output: Option<PathBuf>,
) -> WalletResult<()> {
    let password = prompt_password("Backup password: ")?;

    let mut service = BackupService::new(store);
    let path = service.export(state, &password, &paths.backup_dir(), output)?;

    println!("Backup written to {}", path.display());
    Ok(())
}

pub fn handle_import(store: &StateStore, state: &mut AppState, file: &Path) -> WalletResult<()> {
    let password = prompt_password("Backup password: ")?;

    let mut service = BackupService::new(store);
    service.import(state, &password, file)?;

    println!("State restored from {}", file.display());
    println!("{}", crate::display::format_wallet_list(&state.wallets));
    Ok(())
}

fn prompt_password(prompt: &str) -> WalletResult<SecureString> {
    let password = rpassword::prompt_password(prompt)
        .map_err(|e| WalletError::Io(format!("Failed to read password: {}", e)))?;
    if password.is_empty() {
        return Err(WalletError::Validation("password must not be empty".into()));
    }
    Ok(SecureString::from(password))
}
