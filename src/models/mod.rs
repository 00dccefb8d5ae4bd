//! Core data models for the ATM simulator
//!
//! This module contains the data structures of the banking domain: accounts,
//! credentials, transactions and money.

pub mod account;
pub mod credential;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::Account;
pub use credential::Credential;
pub use ids::{AccountNumber, TransactionId};
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind};
