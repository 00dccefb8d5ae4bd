//! Account display formatting

use super::format_money;
use crate::config::Settings;
use crate::models::Account;

/// Format a short account summary shown after login
pub fn format_account_summary(account: &Account, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "  Balance:      {}\n",
        format_money(account.balance(), settings)
    ));
    output.push_str(&format!("  Transactions: {}\n", account.history().len()));
    output.push_str(&format!(
        "  Opened:       {}\n",
        account.created_at().format(&settings.date_format)
    ));
    output
}
