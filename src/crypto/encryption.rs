//! AES-256-GCM seal/open for the backup artifact
//!
//! The artifact is a single Base64 blob over `salt(16) || nonce(12) ||
//! ciphertext+tag`. Salt and nonce are freshly random on every call, so
//! sealing identical plaintext with the same password twice yields
//! different output.
//!
//! Every failure on the open path collapses into the one uniform
//! `DecryptionFailed` condition; the error never reveals whether the
//! blob was truncated, tampered with, or the password was wrong.

use aes_gcm::{
    aead::{Aead, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use aes_gcm::aead::rand_core::RngCore;
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{WalletError, WalletResult};

use super::key_derivation::derive_key;

/// Size of the key-derivation salt in bytes
pub const SALT_SIZE: usize = 16;

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Encrypt plaintext under a password into a self-contained artifact.
///
/// Generates a random salt and nonce for each call and returns
/// `base64(salt || nonce || ciphertext+tag)`.
pub fn seal(plaintext: &[u8], password: &str) -> WalletResult<String> {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);
    let mut nonce_bytes = [0u8; NONCE_SIZE];
    OsRng.fill_bytes(&mut nonce_bytes);

    let key = derive_key(password, &salt)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| WalletError::Encryption(format!("Failed to create cipher: {}", e)))?;

    let nonce = Nonce::from_slice(&nonce_bytes);
    let ciphertext = cipher
        .encrypt(nonce, plaintext)
        .map_err(|e| WalletError::Encryption(format!("Encryption failed: {}", e)))?;

    let mut combined = Vec::with_capacity(SALT_SIZE + NONCE_SIZE + ciphertext.len());
    combined.extend_from_slice(&salt);
    combined.extend_from_slice(&nonce_bytes);
    combined.extend_from_slice(&ciphertext);

    Ok(STANDARD.encode(combined))
}

/// Decrypt an artifact produced by [`seal`].
///
/// Any failure, whether invalid Base64, a blob too short to hold the header
/// and tag, or an authentication failure from a wrong password or tampering,
/// surfaces as [`WalletError::DecryptionFailed`].
pub fn open(blob: &str, password: &str) -> WalletResult<Vec<u8>> {
    let combined = STANDARD
        .decode(blob.trim())
        .map_err(|_| WalletError::DecryptionFailed)?;

    if combined.len() < SALT_SIZE + NONCE_SIZE {
        return Err(WalletError::DecryptionFailed);
    }

    let (salt, rest) = combined.split_at(SALT_SIZE);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_SIZE);

    let key = derive_key(password, salt).map_err(|_| WalletError::DecryptionFailed)?;
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|_| WalletError::DecryptionFailed)?;

    let nonce = Nonce::from_slice(nonce_bytes);
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| WalletError::DecryptionFailed)
}
