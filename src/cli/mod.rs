//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Every command
//! loads the whole state, runs one operation, and lets the services
//! persist the result.

pub mod backup;
pub mod history;
pub mod money;
pub mod wallet;

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::WalletPaths;
use crate::error::WalletResult;
use crate::storage::StateStore;

pub use history::KindArg;

/// Top-level commands
#[derive(Subcommand)]
pub enum Commands {
    /// List wallets with balances, shares, and lock status
    Wallets,

    /// Split one amount across all unlocked wallets by percentage
    Split {
        /// Amount in whole currency units
        amount: String,
    },

    /// Deposit into a single wallet
    Deposit {
        /// Wallet id (e.g. personal)
        wallet: String,
        /// Amount in whole currency units
        amount: String,
        /// Free-text note recorded with the transaction
        #[arg(short, long)]
        note: Option<String>,
        /// Deposit even if the wallet is locked
        #[arg(long)]
        force: bool,
    },

    /// Withdraw from a wallet
    Withdraw {
        /// Wallet id
        wallet: String,
        /// Amount in whole currency units
        amount: String,
        /// Free-text note recorded with the transaction
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Transfer between two wallets
    Transfer {
        /// Source wallet id
        from: String,
        /// Destination wallet id
        to: String,
        /// Amount in whole currency units
        amount: String,
        /// Free-text note recorded with the transaction
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Toggle a wallet's lock
    Lock {
        /// Wallet id
        wallet: String,
    },

    /// Replace the split percentages, e.g. obligations=32 investment=32 personal=31 charity=5
    Percentages {
        /// id=value pairs covering every wallet, summing to 100
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Show transaction history, newest first (most recent 20 unless filtered)
    History {
        /// Filter by kind
        #[arg(short, long, value_enum)]
        kind: Option<KindArg>,
        /// Filter by calendar month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Free-text search over wallet names and notes
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Monthly per-wallet flow report
    Report {
        /// Calendar month (YYYY-MM), defaults to the current month
        month: Option<String>,
    },

    /// Toggle dark mode
    Theme,

    /// Export an encrypted backup of the full state
    Export {
        /// Destination file (defaults to a date-stamped name in the backup dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Restore the full state from an encrypted backup
    Import {
        /// Backup artifact to restore
        file: PathBuf,
    },
}

/// Run one command against the persisted state
pub fn run(command: Commands) -> WalletResult<()> {
    let paths = WalletPaths::new()?;
    let store = StateStore::new(&paths)?;
    let mut state = store.load()?;

    match command {
        Commands::Wallets => wallet::handle_wallets(&state),
        Commands::Split { amount } => money::handle_split(&store, &mut state, &amount),
        Commands::Deposit {
            wallet,
            amount,
            note,
            force,
        } => money::handle_deposit(&store, &mut state, &wallet, &amount, note, force),
        Commands::Withdraw {
            wallet,
            amount,
            note,
        } => money::handle_withdraw(&store, &mut state, &wallet, &amount, note),
        Commands::Transfer {
            from,
            to,
            amount,
            note,
        } => money::handle_transfer(&store, &mut state, &from, &to, &amount, note),
        Commands::Lock { wallet } => wallet::handle_lock(&store, &mut state, &wallet),
        Commands::Percentages { values } => {
            wallet::handle_percentages(&store, &mut state, &values)
        }
        Commands::History {
            kind,
            month,
            search,
        } => history::handle_history(&state, kind, month, search),
        Commands::Report { month } => history::handle_report(&state, month),
        Commands::Theme => wallet::handle_theme(&store, &mut state),
        Commands::Export { output } => {
            backup::handle_export(&store, &paths, &mut state, output)
        }
        Commands::Import { file } => backup::handle_import(&store, &mut state, &file),
    }
}
