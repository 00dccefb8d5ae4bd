//! Account model
//!
//! An account owns its balance and its transaction history. Every mutation
//! checks its guards first and only then touches state, so a rejected
//! operation leaves the account exactly as it was.

use chrono::{DateTime, Utc};
use std::fmt;

use super::credential::Credential;
use super::ids::AccountNumber;
use super::money::Money;
use super::transaction::{Transaction, TransactionKind};
use crate::error::{AtmError, AtmResult};

/// A bank account held by the ledger
#[derive(Debug, Clone)]
pub struct Account {
    number: AccountNumber,
    credential: Credential,
    /// Never negative
    balance: Money,
    /// Append-only, in insertion order
    history: Vec<Transaction>,
    created_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with zero balance and empty history
    pub fn new(number: AccountNumber, credential: Credential) -> Self {
        Self {
            number,
            credential,
            balance: Money::zero(),
            history: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn number(&self) -> &AccountNumber {
        &self.number
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The transaction records, oldest first
    pub fn history(&self) -> &[Transaction] {
        &self.history
    }

    /// Exact comparison against the stored credential
    pub fn verify_credential(&self, candidate: &str) -> bool {
        self.credential.verify(candidate)
    }

    /// Check that `amount` can be credited
    pub fn ensure_can_credit(&self, amount: Money) -> AtmResult<()> {
        ensure_positive(amount)?;
        self.balance
            .checked_add(amount)
            .map(|_| ())
            .ok_or(AtmError::BalanceOverflow(amount))
    }

    /// Check that `amount` can be debited without going negative
    pub fn ensure_can_debit(&self, amount: Money) -> AtmResult<()> {
        ensure_positive(amount)?;
        if amount > self.balance {
            return Err(AtmError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        Ok(())
    }

    /// Deposit cash into the account
    pub fn deposit(&mut self, amount: Money) -> AtmResult<&Transaction> {
        self.credit(TransactionKind::Deposit, amount)
    }

    /// Withdraw cash from the account
    pub fn withdraw(&mut self, amount: Money) -> AtmResult<&Transaction> {
        self.debit(TransactionKind::Withdrawal, amount)
    }

    /// Debit side of a transfer
    ///
    /// Only the ledger should pair this with `transfer_in` on the
    /// counterparty; on its own it is just a labelled withdrawal.
    pub fn transfer_out(
        &mut self,
        amount: Money,
        counterparty: &AccountNumber,
    ) -> AtmResult<&Transaction> {
        self.debit(
            TransactionKind::TransferOut {
                counterparty: counterparty.clone(),
            },
            amount,
        )
    }

    /// Credit side of a transfer
    pub fn transfer_in(
        &mut self,
        amount: Money,
        counterparty: &AccountNumber,
    ) -> AtmResult<&Transaction> {
        self.credit(
            TransactionKind::TransferIn {
                counterparty: counterparty.clone(),
            },
            amount,
        )
    }

    fn credit(&mut self, kind: TransactionKind, amount: Money) -> AtmResult<&Transaction> {
        self.ensure_can_credit(amount)?;
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AtmError::BalanceOverflow(amount))?;
        Ok(self.record(kind, amount))
    }

    fn debit(&mut self, kind: TransactionKind, amount: Money) -> AtmResult<&Transaction> {
        self.ensure_can_debit(amount)?;
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(AtmError::BalanceOverflow(amount))?;
        Ok(self.record(kind, amount))
    }

    fn record(&mut self, kind: TransactionKind, amount: Money) -> &Transaction {
        self.history.push(Transaction::new(kind, amount));
        &self.history[self.history.len() - 1]
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number, self.balance)
    }
}

fn ensure_positive(amount: Money) -> AtmResult<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        Err(AtmError::InvalidAmount(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(number: &str) -> Account {
        Account::new(
            AccountNumber::parse(number).unwrap(),
            Credential::new("pw").unwrap(),
        )
    }

    #[test]
    fn test_new_account() {
        let account = account("111");
        assert_eq!(account.number().as_str(), "111");
        assert_eq!(account.balance(), Money::zero());
        assert!(account.history().is_empty());
        assert!(account.verify_credential("pw"));
        assert!(!account.verify_credential("PW"));
    }

    #[test]
    fn test_deposit() {
        let mut account = account("111");
        let txn = account.deposit(Money::from_dollars(100)).unwrap().clone();

        assert_eq!(txn.kind(), &TransactionKind::Deposit);
        assert_eq!(txn.amount(), Money::from_dollars(100));
        assert_eq!(account.balance(), Money::from_dollars(100));
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_deposit_then_withdraw_restores_balance() {
        let mut account = account("111");
        account.deposit(Money::from_dollars(40)).unwrap();
        let before = account.balance();

        account.deposit(Money::from_cents(1234)).unwrap();
        account.withdraw(Money::from_cents(1234)).unwrap();

        assert_eq!(account.balance(), before);
        let kinds: Vec<_> = account.history().iter().map(|t| t.kind().clone()).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Deposit,
                TransactionKind::Deposit,
                TransactionKind::Withdrawal
            ]
        );
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        let mut account = account("111");
        account.deposit(Money::from_dollars(10)).unwrap();

        for amount in [Money::zero(), Money::from_cents(-1)] {
            assert!(matches!(
                account.deposit(amount),
                Err(AtmError::InvalidAmount(_))
            ));
            assert!(matches!(
                account.withdraw(amount),
                Err(AtmError::InvalidAmount(_))
            ));
        }

        assert_eq!(account.balance(), Money::from_dollars(10));
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_insufficient_funds() {
        let mut account = account("111");
        account.deposit(Money::from_dollars(10)).unwrap();

        let err = account.withdraw(Money::from_cents(1001)).unwrap_err();
        assert!(matches!(
            err,
            AtmError::InsufficientFunds { requested, available }
                if requested.cents() == 1001 && available.cents() == 1000
        ));
        assert_eq!(account.balance(), Money::from_dollars(10));
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut account = account("111");
        account.deposit(Money::from_dollars(10)).unwrap();
        account.withdraw(Money::from_dollars(10)).unwrap();
        assert!(account.balance().is_zero());
    }

    #[test]
    fn test_overflow_rejected_before_mutation() {
        let mut account = account("111");
        account.deposit(Money::from_cents(i64::MAX)).unwrap();

        assert!(matches!(
            account.deposit(Money::from_cents(1)),
            Err(AtmError::BalanceOverflow(_))
        ));
        assert_eq!(account.balance().cents(), i64::MAX);
        assert_eq!(account.history().len(), 1);
    }

    #[test]
    fn test_transfer_records_counterparty() {
        let mut source = account("111");
        let mut dest = account("222");
        source.deposit(Money::from_dollars(50)).unwrap();

        source
            .transfer_out(Money::from_dollars(20), dest.number())
            .unwrap();
        let source_number = source.number().clone();
        dest.transfer_in(Money::from_dollars(20), &source_number)
            .unwrap();

        assert_eq!(
            source.history()[1].kind(),
            &TransactionKind::TransferOut {
                counterparty: AccountNumber::parse("222").unwrap()
            }
        );
        assert_eq!(
            dest.history()[0].kind(),
            &TransactionKind::TransferIn {
                counterparty: AccountNumber::parse("111").unwrap()
            }
        );
    }

    #[test]
    fn test_display() {
        let mut account = account("111");
        account.deposit(Money::from_cents(2550)).unwrap();
        assert_eq!(account.to_string(), "111 ($25.50)");
    }
}
