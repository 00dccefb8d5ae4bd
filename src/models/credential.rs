//! Account credential
//!
//! The password is kept in plaintext for the life of the process and compared
//! by exact equality. This is a known weakness of the simulator: nothing is
//! hashed. The buffer is zeroed on drop and never printed.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::AtmError;

/// A plaintext password that zeros its contents on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credential {
    secret: String,
}

impl Credential {
    /// Wrap a new credential, rejecting empty input
    pub fn new(secret: impl Into<String>) -> Result<Self, AtmError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(AtmError::InvalidInput("Password cannot be empty".into()));
        }
        Ok(Self { secret })
    }

    /// Exact comparison against a candidate password
    pub fn verify(&self, candidate: &str) -> bool {
        self.secret == candidate
    }
}

// Don't print the contents in Debug output
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("len", &self.secret.len())
            .finish()
    }
}

// Don't print the contents in Display output
impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED {} bytes]", self.secret.len())
    }
}
