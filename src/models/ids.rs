//! Strongly-typed identifiers
//!
//! Account numbers are user-chosen strings; transaction ids are random UUIDs.
//! Newtype wrappers keep the two from being mixed up at compile time.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::AtmError;

/// A user-chosen account number
///
/// Must be non-empty and contain no whitespace. Compared exactly
/// (case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountNumber(String);

impl AccountNumber {
    /// Maximum accepted length
    pub const MAX_LEN: usize = 64;

    /// Validate and wrap an account number
    pub fn parse(s: &str) -> Result<Self, AtmError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AtmError::InvalidInput(
                "Account number cannot be empty".into(),
            ));
        }
        if s.chars().any(char::is_whitespace) {
            return Err(AtmError::InvalidInput(format!(
                "Account number cannot contain whitespace: '{}'",
                s
            )));
        }
        if s.len() > Self::MAX_LEN {
            return Err(AtmError::InvalidInput(format!(
                "Account number too long ({} chars, max {})",
                s.len(),
                Self::MAX_LEN
            )));
        }
        Ok(Self(s.to_string()))
    }

    /// Get the account number as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountNumber {
    type Err = AtmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Borrow<str> for AccountNumber {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AccountNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Unique identifier of a transaction record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionId(Uuid);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "txn-{}", &self.0.to_string()[..8])
    }
}
