//! Cryptographic functions for splitwallet
//!
//! Provides AES-256-GCM authenticated encryption with Argon2id key
//! derivation for the portable encrypted backup artifact.

pub mod encryption;
pub mod key_derivation;
pub mod secure_memory;

pub use encryption::{open, seal, NONCE_SIZE, SALT_SIZE};
pub use key_derivation::{derive_key, DerivedKey};
pub use secure_memory::SecureString;
