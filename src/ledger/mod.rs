//! Wallet ledger operations
//!
//! Pure functions over the wallet collection. Every operation takes the
//! current wallets by reference and produces a fresh collection; nothing in
//! here touches shared state, appends history, or persists. The service
//! layer pairs each successful mutation with exactly one transaction record.
//!
//! The split-deposit algorithm is the heart of the crate: it distributes one
//! integer amount across the unlocked wallets by percentage, with the last
//! unlocked wallet absorbing the rounding remainder so the total deposited
//! always equals the requested amount exactly.

use crate::error::{WalletError, WalletResult};
use crate::models::{round_amount, validate_amount, Wallet, WalletId};

/// One wallet's portion of a split deposit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitShare {
    pub wallet_id: WalletId,
    pub amount: i64,
}

/// Result of a split deposit: the updated wallets plus the share each
/// unlocked wallet received
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    pub wallets: Vec<Wallet>,
    pub shares: Vec<SplitShare>,
}

/// Distribute `amount` across all unlocked wallets by percentage.
///
/// Each unlocked wallet except the last (in original order) receives
/// `round(amount * percentage / 100)`; the last receives whatever remains of
/// the running accumulator. Σ(shares) == amount for every percentage
/// configuration, including ones that do not sum to 100, and for any locked
/// subset. Locked wallets receive nothing and their percentages do not
/// affect the other wallets' shares.
pub fn split_deposit(wallets: &[Wallet], amount: i64) -> WalletResult<SplitOutcome> {
    let amount = validate_amount(amount)?;

    let active: Vec<usize> = wallets
        .iter()
        .enumerate()
        .filter(|(_, w)| !w.is_locked)
        .map(|(idx, _)| idx)
        .collect();

    if active.is_empty() {
        return Err(WalletError::NoEligibleWallets);
    }

    let mut updated = wallets.to_vec();
    let mut shares = Vec::with_capacity(active.len());
    let mut remaining = amount;

    for (i, &idx) in active.iter().enumerate() {
        let wallet = &mut updated[idx];
        let share = if i == active.len() - 1 {
            // Last unlocked wallet absorbs the rounding remainder
            remaining
        } else {
            let share = round_amount(amount as f64 * (wallet.percentage as f64 / 100.0));
            remaining -= share;
            share
        };
        wallet.balance += share;
        shares.push(SplitShare {
            wallet_id: wallet.id.clone(),
            amount: share,
        });
    }

    Ok(SplitOutcome {
        wallets: updated,
        shares,
    })
}

/// Deposit into a single wallet, respecting its lock.
///
/// This is the uniform lock policy: a locked wallet rejects direct deposits
/// just as it rejects withdrawals and transfers.
pub fn deposit(wallets: &[Wallet], id: &WalletId, amount: i64) -> WalletResult<Vec<Wallet>> {
    let amount = validate_amount(amount)?;
    let wallet = find_wallet(wallets, id)?;
    if wallet.is_locked {
        return Err(WalletError::WalletLocked(wallet.name.clone()));
    }
    Ok(apply_delta(wallets, id, amount))
}

/// Deposit into a single wallet regardless of its lock.
///
/// The explicit lock-ignoring variant, kept separate from [`deposit`] so
/// callers choose a policy instead of inheriting an implicit one.
pub fn deposit_unchecked(
    wallets: &[Wallet],
    id: &WalletId,
    amount: i64,
) -> WalletResult<Vec<Wallet>> {
    let amount = validate_amount(amount)?;
    find_wallet(wallets, id)?;
    Ok(apply_delta(wallets, id, amount))
}

/// Withdraw from a single wallet.
///
/// Rejects a locked wallet and any amount exceeding the balance; a rejected
/// withdrawal leaves every balance unchanged.
pub fn withdraw(wallets: &[Wallet], id: &WalletId, amount: i64) -> WalletResult<Vec<Wallet>> {
    let amount = validate_amount(amount)?;
    let wallet = find_wallet(wallets, id)?;
    if wallet.is_locked {
        return Err(WalletError::WalletLocked(wallet.name.clone()));
    }
    if amount > wallet.balance {
        return Err(WalletError::InsufficientFunds {
            wallet: wallet.name.clone(),
            needed: amount,
            available: wallet.balance,
        });
    }
    Ok(apply_delta(wallets, id, -amount))
}

/// Move an amount between two wallets.
///
/// Preconditions for a valid transfer request: distinct endpoints, neither
/// endpoint locked, and a source balance covering the amount. Both balance
/// changes derive from the one input amount, so the total across all
/// wallets is conserved exactly.
pub fn transfer(
    wallets: &[Wallet],
    from: &WalletId,
    to: &WalletId,
    amount: i64,
) -> WalletResult<Vec<Wallet>> {
    let amount = validate_amount(amount)?;

    if from == to {
        return Err(WalletError::InvalidTransferTarget(
            "source and destination are the same wallet".into(),
        ));
    }

    let source = find_wallet(wallets, from)?;
    let dest = find_wallet(wallets, to)?;

    if source.is_locked {
        return Err(WalletError::InvalidTransferTarget(format!(
            "source wallet '{}' is locked",
            source.name
        )));
    }
    if dest.is_locked {
        return Err(WalletError::InvalidTransferTarget(format!(
            "destination wallet '{}' is locked",
            dest.name
        )));
    }
    if amount > source.balance {
        return Err(WalletError::InsufficientFunds {
            wallet: source.name.clone(),
            needed: amount,
            available: source.balance,
        });
    }

    let updated = wallets
        .iter()
        .map(|w| {
            let mut w = w.clone();
            if &w.id == from {
                w.balance -= amount;
            } else if &w.id == to {
                w.balance += amount;
            }
            w
        })
        .collect();

    Ok(updated)
}

/// Flip a wallet's lock flag. No balance effect; always succeeds when the
/// wallet exists.
pub fn toggle_lock(wallets: &[Wallet], id: &WalletId) -> WalletResult<Vec<Wallet>> {
    find_wallet(wallets, id)?;
    Ok(wallets
        .iter()
        .map(|w| {
            let mut w = w.clone();
            if &w.id == id {
                w.is_locked = !w.is_locked;
            }
            w
        })
        .collect())
}

fn find_wallet<'a>(wallets: &'a [Wallet], id: &WalletId) -> WalletResult<&'a Wallet> {
    wallets
        .iter()
        .find(|w| &w.id == id)
        .ok_or_else(|| WalletError::wallet_not_found(id.as_str()))
}

fn apply_delta(wallets: &[Wallet], id: &WalletId, delta: i64) -> Vec<Wallet> {
    wallets
        .iter()
        .map(|w| {
            let mut w = w.clone();
            if &w.id == id {
                w.balance += delta;
            }
            w
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(id: &str, percentage: u8, balance: i64) -> Wallet {
        let mut w = Wallet::new(id, id.to_uppercase(), percentage);
        w.balance = balance;
        w
    }

    fn locked(id: &str, percentage: u8, balance: i64) -> Wallet {
        let mut w = wallet(id, percentage, balance);
        w.is_locked = true;
        w
    }

    fn total(wallets: &[Wallet]) -> i64 {
        wallets.iter().map(|w| w.balance).sum()
    }

    #[test]
    fn test_split_conservation() {
        let configurations = vec![
            vec![wallet("a", 33, 0), wallet("b", 33, 0), wallet("c", 34, 0)],
            vec![wallet("a", 50, 7), wallet("b", 50, 11)],
            // Percentages that do not sum to 100
            vec![wallet("a", 70, 0), wallet("b", 50, 0)],
            vec![wallet("a", 0, 0), wallet("b", 0, 3)],
            // Locked subset
            vec![wallet("a", 32, 0), locked("b", 32, 5), wallet("c", 31, 0)],
            vec![locked("a", 95, 0), wallet("b", 5, 0)],
        ];

        for wallets in configurations {
            for amount in [1i64, 2, 3, 100, 10_000_001] {
                let before = total(&wallets);
                let outcome = split_deposit(&wallets, amount).unwrap();
                assert_eq!(
                    total(&outcome.wallets) - before,
                    amount,
                    "conservation violated for amount {} over {:?}",
                    amount,
                    wallets
                );
                let share_sum: i64 = outcome.shares.iter().map(|s| s.amount).sum();
                assert_eq!(share_sum, amount);
            }
        }
    }

    #[test]
    fn test_split_exact_percentages() {
        let wallets = vec![wallet("a", 33, 0), wallet("b", 33, 0), wallet("c", 34, 0)];
        let outcome = split_deposit(&wallets, 100).unwrap();
        let shares: Vec<i64> = outcome.shares.iter().map(|s| s.amount).collect();
        assert_eq!(shares, vec![33, 33, 34]);
    }

    #[test]
    fn test_split_last_wallet_remainder() {
        let wallets = vec![wallet("a", 50, 0), wallet("b", 50, 0)];
        let outcome = split_deposit(&wallets, 3).unwrap();
        // First wallet gets round(1.5) = 2, last gets the exact remainder
        let shares: Vec<i64> = outcome.shares.iter().map(|s| s.amount).collect();
        assert_eq!(shares, vec![2, 1]);
    }

    #[test]
    fn test_split_lock_exclusion() {
        let wallets = vec![wallet("a", 32, 0), locked("b", 32, 5), wallet("c", 36, 0)];
        let outcome = split_deposit(&wallets, 100).unwrap();

        // Locked wallet untouched
        assert_eq!(outcome.wallets[1].balance, 5);
        assert_eq!(outcome.shares.len(), 2);

        // Shares come from the full original percentages; the locked
        // wallet's share does not redistribute into the first wallet
        assert_eq!(outcome.wallets[0].balance, 32);
        assert_eq!(outcome.wallets[2].balance, 68);
    }

    #[test]
    fn test_split_single_unlocked_gets_everything() {
        let wallets = vec![locked("a", 60, 0), wallet("b", 5, 0), locked("c", 35, 0)];
        let outcome = split_deposit(&wallets, 997).unwrap();
        assert_eq!(outcome.wallets[1].balance, 997);
        assert_eq!(outcome.wallets[0].balance, 0);
        assert_eq!(outcome.wallets[2].balance, 0);
    }

    #[test]
    fn test_split_all_locked_rejected() {
        let wallets = vec![locked("a", 50, 0), locked("b", 50, 0)];
        assert!(matches!(
            split_deposit(&wallets, 100),
            Err(WalletError::NoEligibleWallets)
        ));
    }

    #[test]
    fn test_split_rejects_non_positive() {
        let wallets = vec![wallet("a", 100, 0)];
        assert!(matches!(
            split_deposit(&wallets, 0),
            Err(WalletError::InvalidAmount(0))
        ));
        assert!(matches!(
            split_deposit(&wallets, -10),
            Err(WalletError::InvalidAmount(-10))
        ));
    }

    #[test]
    fn test_deposit() {
        let wallets = vec![wallet("a", 50, 10), wallet("b", 50, 0)];
        let updated = deposit(&wallets, &WalletId::new("a"), 90).unwrap();
        assert_eq!(updated[0].balance, 100);
        assert_eq!(updated[1].balance, 0);
    }

    #[test]
    fn test_deposit_respects_lock() {
        let wallets = vec![locked("a", 50, 10)];
        assert!(matches!(
            deposit(&wallets, &WalletId::new("a"), 5),
            Err(WalletError::WalletLocked(_))
        ));
    }

    #[test]
    fn test_deposit_unchecked_ignores_lock() {
        let wallets = vec![locked("a", 50, 10)];
        let updated = deposit_unchecked(&wallets, &WalletId::new("a"), 5).unwrap();
        assert_eq!(updated[0].balance, 15);
    }

    #[test]
    fn test_deposit_unknown_wallet() {
        let wallets = vec![wallet("a", 50, 0)];
        assert!(matches!(
            deposit(&wallets, &WalletId::new("missing"), 5),
            Err(WalletError::WalletNotFound(_))
        ));
    }

    #[test]
    fn test_withdraw() {
        let wallets = vec![wallet("a", 50, 100)];
        let updated = withdraw(&wallets, &WalletId::new("a"), 40).unwrap();
        assert_eq!(updated[0].balance, 60);
    }

    #[test]
    fn test_withdraw_guard() {
        let wallets = vec![wallet("a", 50, 30)];
        let err = withdraw(&wallets, &WalletId::new("a"), 31).unwrap_err();
        assert!(matches!(
            err,
            WalletError::InsufficientFunds {
                needed: 31,
                available: 30,
                ..
            }
        ));
        // Rejection leaves the input untouched (pure function, no mutation)
        assert_eq!(wallets[0].balance, 30);
    }

    #[test]
    fn test_withdraw_exact_balance_allowed() {
        let wallets = vec![wallet("a", 50, 30)];
        let updated = withdraw(&wallets, &WalletId::new("a"), 30).unwrap();
        assert_eq!(updated[0].balance, 0);
    }

    #[test]
    fn test_transfer_atomicity() {
        let wallets = vec![wallet("a", 40, 100), wallet("b", 40, 50), wallet("c", 20, 7)];
        let updated = transfer(&wallets, &WalletId::new("a"), &WalletId::new("b"), 25).unwrap();
        assert_eq!(updated[0].balance, 75);
        assert_eq!(updated[1].balance, 75);
        assert_eq!(updated[2].balance, 7);
        assert_eq!(total(&updated), total(&wallets));
    }

    #[test]
    fn test_transfer_same_wallet_rejected() {
        let wallets = vec![wallet("a", 50, 100)];
        assert!(matches!(
            transfer(&wallets, &WalletId::new("a"), &WalletId::new("a"), 10),
            Err(WalletError::InvalidTransferTarget(_))
        ));
    }

    #[test]
    fn test_transfer_locked_endpoint_rejected() {
        let wallets = vec![locked("a", 50, 100), wallet("b", 50, 0)];
        assert!(matches!(
            transfer(&wallets, &WalletId::new("a"), &WalletId::new("b"), 10),
            Err(WalletError::InvalidTransferTarget(_))
        ));
        assert!(matches!(
            transfer(&wallets, &WalletId::new("b"), &WalletId::new("a"), 10),
            Err(WalletError::InvalidTransferTarget(_))
        ));
    }

    #[test]
    fn test_transfer_insufficient_funds() {
        let wallets = vec![wallet("a", 50, 5), wallet("b", 50, 0)];
        assert!(matches!(
            transfer(&wallets, &WalletId::new("a"), &WalletId::new("b"), 10),
            Err(WalletError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn test_toggle_lock_idempotent_pair() {
        let wallets = vec![wallet("a", 50, 0), wallet("b", 50, 0)];
        let id = WalletId::new("a");
        let once = toggle_lock(&wallets, &id).unwrap();
        assert!(once[0].is_locked);
        assert_eq!(once[0].balance, 0);
        let twice = toggle_lock(&once, &id).unwrap();
        assert_eq!(twice, wallets);
    }
}
