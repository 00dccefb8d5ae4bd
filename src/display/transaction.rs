//! Transaction history formatting
//!
//! Renders an account's history as a table, followed by the balance line.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format_money;
use crate::config::Settings;
use crate::models::{Account, Transaction};

/// One row of the history table
#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Time")]
    time: String,
}

impl HistoryRow {
    fn new(index: usize, txn: &Transaction, settings: &Settings) -> Self {
        let transfer_indicator = if txn.kind().is_transfer() { "⇄ " } else { "" };
        Self {
            index,
            id: txn.id().to_string(),
            kind: format!("{}{}", transfer_indicator, txn.kind()),
            amount: format_money(txn.signed_amount(), settings),
            time: txn.timestamp().format(&settings.date_format).to_string(),
        }
    }
}

/// Format a list of transactions as a table
pub fn format_transaction_table(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions yet.\n".to_string();
    }

    let rows: Vec<_> = transactions
        .iter()
        .enumerate()
        .map(|(i, txn)| HistoryRow::new(i + 1, txn, settings))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format the full history view for an account
pub fn format_history(account: &Account, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Transaction History for {}:\n", account.number()));
    output.push_str(&format_transaction_table(account.history(), settings));
    output.push_str(&format!(
        "Current balance: {}\n",
        format_money(account.balance(), settings)
    ));
    output
}
