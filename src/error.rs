//! Custom error types for the ATM simulator
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for ATM operations
#[derive(Error, Debug)]
pub enum AtmError {
    /// Amount was zero or negative
    #[error("Invalid amount {0}: please enter a positive value")]
    InvalidAmount(Money),

    /// Withdrawal or transfer exceeds the available balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },

    /// Account number is already registered
    #[error("Account number already exists: {0}")]
    DuplicateAccount(String),

    /// Account number is not registered
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// Credential did not match
    #[error("Invalid password")]
    InvalidCredential,

    /// Operation requires a logged-in account
    #[error("No account selected. Please login first.")]
    NoActiveSession,

    /// Transfer source and destination are the same account
    #[error("Cannot transfer to the same account: {0}")]
    SelfTransfer(String),

    /// Credit would push a balance past the representable range
    #[error("Amount {0} would overflow the account balance")]
    BalanceOverflow(Money),

    /// Malformed user input (account numbers, amounts, menu choices)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The input stream ended while a prompt was waiting
    #[error("Input stream closed")]
    InputClosed,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl AtmError {
    /// Create a "not found" error for an account number
    pub fn account_not_found(identifier: impl Into<String>) -> Self {
        Self::AccountNotFound(identifier.into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::AccountNotFound(_))
    }

    /// Whether the session loop can report this error and carry on.
    ///
    /// Infrastructure failures (I/O, config, JSON) and a closed input stream
    /// are not recoverable; every domain rejection is.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::InputClosed | Self::Config(_) | Self::Io(_) | Self::Json(_)
        )
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for AtmError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AtmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ATM operations
pub type AtmResult<T> = Result<T, AtmError>;
