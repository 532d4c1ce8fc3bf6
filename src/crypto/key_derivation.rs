//! Key derivation using Argon2id
//!
//! Derives a 32-byte AES-256 key from the backup password and a random
//! 16-byte salt carried in the artifact header. Argon2id is memory-hard,
//! which puts the brute-force cost well above the 100k-iteration PBKDF2
//! class of derivation the artifact format was designed around.

use argon2::{Argon2, Params};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{WalletError, WalletResult};

/// Memory cost in KiB (64 MiB)
const MEMORY_COST: u32 = 65536;

/// Time cost (passes over memory)
const TIME_COST: u32 = 3;

/// Parallelism degree
const PARALLELISM: u32 = 4;

/// A derived encryption key, zeroed on drop
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKey {
    /// The 32-byte key for AES-256
    key: [u8; 32],
}

impl DerivedKey {
    /// Get the key bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.key
    }
}

/// Derive an encryption key from a password and the artifact salt.
///
/// The same password and salt always yield the same key; the salt is
/// freshly random for every new artifact.
pub fn derive_key(password: &str, salt: &[u8]) -> WalletResult<DerivedKey> {
    let params = Params::new(MEMORY_COST, TIME_COST, PARALLELISM, Some(32))
        .map_err(|e| WalletError::Encryption(format!("Invalid Argon2 parameters: {}", e)))?;

    let argon2 = Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    );

    let mut key = [0u8; 32];
    argon2
        .hash_password_into(password.as_bytes(), salt, &mut key)
        .map_err(|e| WalletError::Encryption(format!("Key derivation failed: {}", e)))?;

    Ok(DerivedKey { key })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT_A: [u8; 16] = [7u8; 16];
    const SALT_B: [u8; 16] = [9u8; 16];

    #[test]
    fn test_derive_key_is_deterministic() {
        let key1 = derive_key("password", &SALT_A).unwrap();
        let key2 = derive_key("password", &SALT_A).unwrap();
        assert_eq!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_password_different_key() {
        let key1 = derive_key("password1", &SALT_A).unwrap();
        let key2 = derive_key("password2", &SALT_A).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }

    #[test]
    fn test_different_salt_different_key() {
        let key1 = derive_key("password", &SALT_A).unwrap();
        let key2 = derive_key("password", &SALT_B).unwrap();
        assert_ne!(key1.as_bytes(), key2.as_bytes());
    }
}
