//! Account ledger
//!
//! The ledger is the authoritative table of accounts keyed by account number.
//! Accounts are only ever added, never removed or renamed.
//!
//! Every mutation goes through `&mut self`, so exclusive access is enforced by
//! the borrow checker. A concurrent variant would need a per-account mutex and
//! would have to lock both sides of a transfer in account-number order.

pub mod transfer;

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::config::Settings;
use crate::error::{AtmError, AtmResult};
use crate::models::{Account, AccountNumber, Credential, Money, Transaction};
use crate::session::Session;

pub use transfer::TransferResult;

/// In-memory table of all accounts
#[derive(Debug)]
pub struct Ledger {
    accounts: HashMap<AccountNumber, Account>,
    allow_self_transfer: bool,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger. Self-transfers are permitted.
    pub fn new() -> Self {
        Self {
            accounts: HashMap::new(),
            allow_self_transfer: true,
        }
    }

    /// Create an empty ledger configured from user settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new().with_self_transfer(settings.allow_self_transfer)
    }

    /// Set whether an account may transfer to itself
    pub fn with_self_transfer(mut self, allow: bool) -> Self {
        self.allow_self_transfer = allow;
        self
    }

    pub fn allows_self_transfer(&self) -> bool {
        self.allow_self_transfer
    }

    /// Register a new account with zero balance
    pub fn create(&mut self, number: &str, credential: &str) -> AtmResult<&Account> {
        let number = AccountNumber::parse(number)?;

        match self.accounts.entry(number) {
            Entry::Occupied(entry) => Err(AtmError::DuplicateAccount(entry.key().to_string())),
            Entry::Vacant(entry) => {
                let credential = Credential::new(credential)?;
                let account = Account::new(entry.key().clone(), credential);
                tracing::info!(account = %account.number(), "account created");
                Ok(entry.insert(account))
            }
        }
    }

    /// Check a credential against a registered account
    pub fn authenticate(&self, number: &str, credential: &str) -> AtmResult<&Account> {
        let account = self.lookup(number)?;
        if !account.verify_credential(credential) {
            tracing::warn!(account = %account.number(), "credential rejected");
            return Err(AtmError::InvalidCredential);
        }
        Ok(account)
    }

    /// Resolve an account without authentication
    pub fn lookup(&self, number: &str) -> AtmResult<&Account> {
        let number = number.trim();
        self.accounts
            .get(number)
            .ok_or_else(|| AtmError::account_not_found(number))
    }

    fn lookup_mut(&mut self, number: &str) -> AtmResult<&mut Account> {
        let number = number.trim();
        self.accounts
            .get_mut(number)
            .ok_or_else(|| AtmError::account_not_found(number))
    }

    /// Check if an account number is registered
    pub fn contains(&self, number: &str) -> bool {
        self.accounts.contains_key(number.trim())
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// All accounts, sorted by account number
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<_> = self.accounts.values().collect();
        accounts.sort_by(|a, b| a.number().cmp(b.number()));
        accounts
    }

    /// Sum of every balance in the ledger, or `None` if it does not fit in
    /// `i64` cents
    pub fn total_holdings(&self) -> Option<Money> {
        self.accounts
            .values()
            .try_fold(Money::zero(), |total, account| {
                total.checked_add(account.balance())
            })
    }

    /// The account bound to the session
    pub fn current_account(&self, session: &Session) -> AtmResult<&Account> {
        let number = session.require()?;
        self.lookup(number.as_str())
    }

    /// Deposit into the session's account
    pub fn deposit(&mut self, session: &Session, amount: Money) -> AtmResult<Transaction> {
        let number = session.require()?;
        let account = self.lookup_mut(number.as_str())?;
        let txn = account.deposit(amount)?.clone();
        tracing::info!(account = %number, amount = %amount, "deposit applied");
        Ok(txn)
    }

    /// Withdraw from the session's account
    pub fn withdraw(&mut self, session: &Session, amount: Money) -> AtmResult<Transaction> {
        let number = session.require()?;
        let account = self.lookup_mut(number.as_str())?;
        let txn = account.withdraw(amount)?.clone();
        tracing::info!(account = %number, amount = %amount, "withdrawal applied");
        Ok(txn)
    }

    /// Transaction history of the session's account
    pub fn history(&self, session: &Session) -> AtmResult<&[Transaction]> {
        Ok(self.current_account(session)?.history())
    }

    /// Balance of the session's account
    pub fn balance(&self, session: &Session) -> AtmResult<Money> {
        Ok(self.current_account(session)?.balance())
    }
}
