//! Transaction and report display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::history::{history_totals, low_balance_wallets, MonthlyReport};
use crate::models::{round_amount, Transaction, Wallet};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: i64,
    #[tabled(rename = "Wallet")]
    wallet: String,
    #[tabled(rename = "Note")]
    note: String,
}

/// Format a history listing, newest-first, with inflow/outflow totals
pub fn format_transaction_list<'a>(records: &[&'a Transaction]) -> String {
    if records.is_empty() {
        return "No transactions.".to_string();
    }

    let rows: Vec<TransactionRow> = records
        .iter()
        .map(|t| TransactionRow {
            date: t.date.format("%Y-%m-%d %H:%M").to_string(),
            kind: t.kind.to_string(),
            amount: t.amount,
            wallet: match &t.target_category_name {
                Some(target) => format!("{} -> {}", t.category_name, target),
                None => t.category_name.clone(),
            },
            note: t.note.clone().unwrap_or_default(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());

    let (total_in, total_out) = history_totals(records.iter().copied());
    format!("{}\nIn: {}  Out: {}", table, total_in, total_out)
}

#[derive(Tabled)]
struct FlowRow {
    #[tabled(rename = "Wallet")]
    name: String,
    #[tabled(rename = "In")]
    inflow: i64,
    #[tabled(rename = "Out")]
    outflow: i64,
}

/// Format a monthly per-wallet flow report.
///
/// Split-deposit attribution is virtual and fractional internally; it is
/// rounded here for display only. Wallets currently under the low-balance
/// threshold are called out after the flow table.
pub fn format_monthly_report(report: &MonthlyReport, wallets: &[Wallet]) -> String {
    let rows: Vec<FlowRow> = report
        .flows
        .values()
        .map(|f| FlowRow {
            name: f.name.clone(),
            inflow: round_amount(f.inflow),
            outflow: round_amount(f.outflow),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());

    let mut output = format!(
        "{}-{:02}\n{}\nTotal in: {}  Total out: {}",
        report.year,
        report.month,
        table,
        report.total_inflow(),
        report.total_outflow()
    );

    let low = low_balance_wallets(wallets);
    if !low.is_empty() {
        let names: Vec<&str> = low.iter().map(|w| w.name.as_str()).collect();
        output.push_str(&format!("\nLow balance: {}", names.join(", ")));
    }

    output
}
