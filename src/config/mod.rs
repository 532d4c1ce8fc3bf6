//! Configuration and path management for splitwallet

pub mod paths;

pub use paths::WalletPaths;
