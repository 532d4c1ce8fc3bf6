//! Amount normalization
//!
//! All monetary amounts are whole integer units of currency. Every entry
//! point funnels user input through this module before it reaches the
//! ledger; ledger operations themselves only accept validated integers.

use crate::error::{WalletError, WalletResult};

/// Parse arbitrary textual input as a base-10 integer amount.
///
/// Anything that does not parse cleanly normalizes to `0`, which the
/// validation step then rejects. Leading/trailing whitespace is tolerated.
pub fn parse_amount(input: &str) -> i64 {
    input.trim().parse::<i64>().unwrap_or(0)
}

/// Round a computed monetary quantity to the nearest whole unit.
///
/// Uses round-half-away-from-zero semantics (`f64::round`), matching the
/// rounding applied to every stored balance and share. Non-finite input
/// normalizes to `0`.
pub fn round_amount(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}

/// Validate an already-normalized amount for a money-mutating operation.
///
/// Zero and negative amounts are invalid for deposits, withdrawals, and
/// transfers; they are rejected rather than coerced to a minimum.
pub fn validate_amount(amount: i64) -> WalletResult<i64> {
    if amount <= 0 {
        return Err(WalletError::InvalidAmount(amount));
    }
    Ok(amount)
}
