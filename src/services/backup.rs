//! Backup service
//!
//! Drives export and import of the encrypted state artifact. Calls run to
//! completion synchronously (key derivation is deliberately slow); the
//! single-flight guard rejects a duplicate submission of the same kind
//! while one is still running.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::backup::{backup_file_name, export_state, import_state, BackupGuard};
use crate::crypto::SecureString;
use crate::error::{WalletError, WalletResult};
use crate::models::AppState;
use crate::storage::StateStore;

/// Service for exporting and importing encrypted state snapshots
pub struct BackupService<'a> {
    store: &'a StateStore,
    guard: BackupGuard,
}

impl<'a> BackupService<'a> {
    /// Create a new backup service
    pub fn new(store: &'a StateStore) -> Self {
        Self {
            store,
            guard: BackupGuard::new(),
        }
    }

    /// Encrypt the current state and write the artifact.
    ///
    /// `output` overrides the destination; otherwise the artifact lands in
    /// `backup_dir` under a date-stamped name. Stamps `last_backup_date`
    /// and persists the state on success.
    pub fn export(
        &mut self,
        state: &mut AppState,
        password: &SecureString,
        backup_dir: &Path,
        output: Option<PathBuf>,
    ) -> WalletResult<PathBuf> {
        self.guard.begin_export()?;
        let result = self.export_inner(state, password, backup_dir, output);
        self.guard.end_export();
        result
    }

    fn export_inner(
        &self,
        state: &mut AppState,
        password: &SecureString,
        backup_dir: &Path,
        output: Option<PathBuf>,
    ) -> WalletResult<PathBuf> {
        let now = Utc::now();
        state.last_backup_date =
            chrono::DateTime::from_timestamp_millis(now.timestamp_millis());

        let blob = export_state(state, password.as_str())?;

        let path = output.unwrap_or_else(|| backup_dir.join(backup_file_name(now)));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| WalletError::Io(format!("Failed to create backup dir: {}", e)))?;
        }
        fs::write(&path, &blob)
            .map_err(|e| WalletError::Io(format!("Failed to write backup: {}", e)))?;

        self.store.save(state)?;
        Ok(path)
    }

    /// Decrypt an artifact file and replace the whole state with the
    /// restored snapshot (last-writer-wins), persisting it.
    pub fn import(
        &mut self,
        state: &mut AppState,
        password: &SecureString,
        artifact: &Path,
    ) -> WalletResult<()> {
        self.guard.begin_import()?;
        let result = self.import_inner(state, password, artifact);
        self.guard.end_import();
        result
    }

    fn import_inner(
        &self,
        state: &mut AppState,
        password: &SecureString,
        artifact: &Path,
    ) -> WalletResult<()> {
        let blob = fs::read_to_string(artifact)
            .map_err(|e| WalletError::Io(format!("Failed to read backup: {}", e)))?;

        let restored = import_state(&blob, password.as_str())?;

        *state = restored;
        self.store.save(state)
    }
}
