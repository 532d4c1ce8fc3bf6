use anyhow::Result;
use clap::Parser;

use splitwallet::cli::{self, Commands};

#[derive(Parser)]
#[command(
    name = "splitwallet",
    version,
    about = "Multi-wallet budgeting with percentage split deposits",
    long_about = "splitwallet tracks a set of named wallets, distributes \
                  deposits across them by percentage with exact conservation, \
                  and keeps the whole state restorable from password-encrypted \
                  backups."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::run(cli.command)?;
    Ok(())
}
