//! History and reporting commands

use chrono::{Datelike, Utc};
use clap::ValueEnum;

use crate::display::{format_monthly_report, format_transaction_list};
use crate::error::{WalletError, WalletResult};
use crate::history::{HistoryFilter, KindFilter, MonthlyReport};
use crate::models::AppState;

/// Kind filter accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum KindArg {
    Deposit,
    Withdrawal,
    Transfer,
}

impl From<KindArg> for KindFilter {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Deposit => Self::Deposit,
            KindArg::Withdrawal => Self::Withdrawal,
            KindArg::Transfer => Self::Transfer,
        }
    }
}

/// How many records the bare `history` command shows
const DEFAULT_HISTORY_LIMIT: usize = 20;

pub fn handle_history(
    state: &AppState,
    kind: Option<KindArg>,
    month: Option<String>,
    search: Option<String>,
) -> WalletResult<()> {
    let filter = HistoryFilter {
        search,
        kind: kind.map(Into::into),
        month: month.as_deref().map(parse_month).transpose()?,
    };

    // Without filters the listing is a dashboard glance at the most recent
    // records; any filter switches to the full matching set
    let unfiltered = filter.search.is_none() && filter.kind.is_none() && filter.month.is_none();
    let records: Vec<_> = if unfiltered {
        state
            .transactions
            .recent(DEFAULT_HISTORY_LIMIT)
            .iter()
            .collect()
    } else {
        filter.apply(&state.transactions).collect()
    };

    println!("{}", format_transaction_list(&records));
    Ok(())
}

pub fn handle_report(state: &AppState, month: Option<String>) -> WalletResult<()> {
    let (year, month) = match month {
        Some(s) => parse_month(&s)?,
        None => {
            let now = Utc::now();
            (now.year(), now.month())
        }
    };

    let report = MonthlyReport::for_month(&state.transactions, &state.wallets, year, month);
    println!("{}", format_monthly_report(&report, &state.wallets));
    Ok(())
}

/// Parse a `YYYY-MM` month argument
fn parse_month(s: &str) -> WalletResult<(i32, u32)> {
    let invalid = || WalletError::Validation(format!("expected YYYY-MM, got '{}'", s));

    let (year, month) = s.split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2026-08").unwrap(), (2026, 8));
        assert_eq!(parse_month("2026-12").unwrap(), (2026, 12));
    }

    #[test]
    fn test_parse_month_rejects_invalid() {
        assert!(parse_month("2026").is_err());
        assert!(parse_month("2026-13").is_err());
        assert!(parse_month("2026-00").is_err());
        assert!(parse_month("march").is_err());
    }
}
