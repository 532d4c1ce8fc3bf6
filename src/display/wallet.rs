//! Wallet display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Wallet;

#[derive(Tabled)]
struct WalletRow {
    #[tabled(rename = "Wallet")]
    name: String,
    #[tabled(rename = "Id")]
    id: String,
    #[tabled(rename = "Share %")]
    percentage: u8,
    #[tabled(rename = "Balance")]
    balance: i64,
    #[tabled(rename = "Status")]
    status: &'static str,
}

/// Format the wallet list as a table with a total line
pub fn format_wallet_list(wallets: &[Wallet]) -> String {
    if wallets.is_empty() {
        return "No wallets configured.".to_string();
    }

    let rows: Vec<WalletRow> = wallets
        .iter()
        .map(|w| WalletRow {
            name: w.name.clone(),
            id: w.id.to_string(),
            percentage: w.percentage,
            balance: w.balance,
            status: if w.is_locked { "locked" } else { "" },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());

    let total: i64 = wallets.iter().map(|w| w.balance).sum();
    format!("{}\nTotal balance: {}", table, total)
}
