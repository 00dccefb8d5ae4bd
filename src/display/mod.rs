//! Display formatting for terminal output
//!
//! Provides utilities for formatting accounts and transaction history for the
//! console, honouring the configured currency symbol and date format.

pub mod account;
pub mod transaction;

pub use account::format_account_summary;
pub use transaction::{format_history, format_transaction_table};

use crate::config::Settings;
use crate::models::Money;

/// Format an amount with the configured currency symbol
pub fn format_money(amount: Money, settings: &Settings) -> String {
    amount.format_with_symbol(&settings.currency_symbol)
}
