//! Session context
//!
//! The session records which account, if any, the user is logged into. It is
//! an explicit value passed to every ledger call that acts on "the current
//! account".

use crate::error::{AtmError, AtmResult};
use crate::ledger::Ledger;
use crate::models::{Account, AccountNumber};

/// The account bound to ongoing user interaction
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<AccountNumber>,
}

impl Session {
    /// Create a session with no account selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticate and bind the session to the account
    ///
    /// A failed login keeps whatever account was bound before.
    pub fn login<'a>(
        &mut self,
        ledger: &'a Ledger,
        number: &str,
        credential: &str,
    ) -> AtmResult<&'a Account> {
        let account = ledger.authenticate(number, credential)?;
        self.current = Some(account.number().clone());
        tracing::info!(account = %account.number(), "session bound");
        Ok(account)
    }

    /// Unbind the session, returning the account that was selected
    pub fn logout(&mut self) -> Option<AccountNumber> {
        self.current.take()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&AccountNumber> {
        self.current.as_ref()
    }

    /// The bound account number, or `NoActiveSession`
    pub fn require(&self) -> AtmResult<&AccountNumber> {
        self.current.as_ref().ok_or(AtmError::NoActiveSession)
    }
}
