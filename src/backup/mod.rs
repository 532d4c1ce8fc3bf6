//! Encrypted backup of the full application state
//!
//! Export serializes the whole `AppState` to JSON and seals it into the
//! portable artifact; import reverses the process and validates the
//! decrypted payload before it is accepted. The codec itself treats the
//! serialized state as opaque bytes; shape validation happens here, on the
//! restore path.

use chrono::{DateTime, Utc};

use crate::crypto::{open, seal};
use crate::error::{WalletError, WalletResult};
use crate::models::AppState;

/// File extension for backup artifacts
pub const BACKUP_EXTENSION: &str = "enc";

/// Date-stamped artifact filename, e.g. `splitwallet_backup_2026-08-24.enc`
pub fn backup_file_name(date: DateTime<Utc>) -> String {
    format!(
        "splitwallet_backup_{}.{}",
        date.format("%Y-%m-%d"),
        BACKUP_EXTENSION
    )
}

/// Serialize and encrypt a state snapshot under the given password
pub fn export_state(state: &AppState, password: &str) -> WalletResult<String> {
    let json = serde_json::to_string(state)?;
    seal(json.as_bytes(), password)
}

/// Decrypt and validate a backup artifact.
///
/// Decryption failures surface as the uniform `DecryptionFailed`; a payload
/// that decrypts but lacks the required top-level `wallets` and
/// `transactions` fields is rejected as `MalformedBackup` without touching
/// any state.
pub fn import_state(blob: &str, password: &str) -> WalletResult<AppState> {
    let plaintext = open(blob, password)?;
    let json = String::from_utf8(plaintext)
        .map_err(|_| WalletError::MalformedBackup("payload is not valid UTF-8".into()))?;

    let value: serde_json::Value = serde_json::from_str(&json)
        .map_err(|_| WalletError::MalformedBackup("payload is not valid JSON".into()))?;

    for field in ["wallets", "transactions"] {
        if value.get(field).map_or(true, |v| !v.is_array()) {
            return Err(WalletError::MalformedBackup(format!(
                "missing required field '{}'",
                field
            )));
        }
    }

    serde_json::from_value(value)
        .map_err(|e| WalletError::MalformedBackup(format!("invalid state snapshot: {}", e)))
}

/// Single-flight guard for export/import.
///
/// Backup calls are synchronous but deliberately slow (expensive key
/// derivation); the guard keeps a second submission of the same kind from
/// starting while one is still running.
#[derive(Debug, Default)]
pub struct BackupGuard {
    export_in_flight: bool,
    import_in_flight: bool,
}

impl BackupGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark an export as started, rejecting a duplicate
    pub fn begin_export(&mut self) -> WalletResult<()> {
        if self.export_in_flight {
            return Err(WalletError::OperationInFlight("Export"));
        }
        self.export_in_flight = true;
        Ok(())
    }

    pub fn end_export(&mut self) {
        self.export_in_flight = false;
    }

    /// Mark an import as started, rejecting a duplicate
    pub fn begin_import(&mut self) -> WalletResult<()> {
        if self.import_in_flight {
            return Err(WalletError::OperationInFlight("Import"));
        }
        self.import_in_flight = true;
        Ok(())
    }

    pub fn end_import(&mut self) {
        self.import_in_flight = false;
    }
}
