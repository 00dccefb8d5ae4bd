//! Transfer protocol
//!
//! A transfer is a paired debit on the source and credit on the destination.
//! All guards for both sides run before either account is touched, so a
//! rejected transfer never leaves half of the pair behind.

use super::Ledger;
use crate::error::{AtmError, AtmResult};
use crate::models::{Money, Transaction};
use crate::session::Session;

/// Result of a completed transfer
#[derive(Debug, Clone)]
pub struct TransferResult {
    /// The `TransferOut` record appended to the source account
    pub from_transaction: Transaction,
    /// The `TransferIn` record appended to the destination account
    pub to_transaction: Transaction,
}

impl Ledger {
    /// Transfer from the session's account to `destination`
    ///
    /// The destination only has to exist; it does not authenticate.
    pub fn transfer(
        &mut self,
        session: &Session,
        destination: &str,
        amount: Money,
    ) -> AtmResult<TransferResult> {
        let source = session.require()?.clone();
        self.transfer_between(source.as_str(), destination, amount)
    }

    /// Move `amount` between two registered accounts
    pub fn transfer_between(
        &mut self,
        from: &str,
        to: &str,
        amount: Money,
    ) -> AtmResult<TransferResult> {
        let source = self.lookup(from)?;
        let destination = self.lookup(to)?;
        let from_number = source.number().clone();
        let to_number = destination.number().clone();
        let same_account = from_number == to_number;

        if same_account && !self.allow_self_transfer {
            return Err(AtmError::SelfTransfer(from_number.to_string()));
        }

        source.ensure_can_debit(amount)?;
        // A self-transfer credits back what it just debited
        if !same_account {
            destination.ensure_can_credit(amount)?;
        }

        let from_transaction = self
            .lookup_mut(from_number.as_str())?
            .transfer_out(amount, &to_number)?
            .clone();
        let to_transaction = self
            .lookup_mut(to_number.as_str())?
            .transfer_in(amount, &from_number)?
            .clone();

        tracing::info!(
            from = %from_number,
            to = %to_number,
            amount = %amount,
            "transfer applied"
        );

        Ok(TransferResult {
            from_transaction,
            to_transaction,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountNumber, TransactionKind};

    fn funded_ledger() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.create("A", "pw").unwrap();
        ledger.create("B", "pw").unwrap();
        let mut session = Session::new();
        session.login(&ledger, "A", "pw").unwrap();
        ledger.deposit(&session, Money::from_dollars(100)).unwrap();
        ledger
    }

    fn number(s: &str) -> AccountNumber {
        AccountNumber::parse(s).unwrap()
    }

    #[test]
    fn test_transfer_moves_funds_and_records_both_sides() {
        let mut ledger = funded_ledger();
        let total_before = ledger.total_holdings();

        let result = ledger
            .transfer_between("A", "B", Money::from_dollars(20))
            .unwrap();

        assert_eq!(
            result.from_transaction.kind(),
            &TransactionKind::TransferOut {
                counterparty: number("B")
            }
        );
        assert_eq!(
            result.to_transaction.kind(),
            &TransactionKind::TransferIn {
                counterparty: number("A")
            }
        );

        let a = ledger.lookup("A").unwrap();
        let b = ledger.lookup("B").unwrap();
        assert_eq!(a.balance(), Money::from_dollars(80));
        assert_eq!(b.balance(), Money::from_dollars(20));
        assert_eq!(a.history().last(), Some(&result.from_transaction));
        assert_eq!(b.history().last(), Some(&result.to_transaction));
        assert_eq!(ledger.total_holdings(), total_before);
    }

    #[test]
    fn test_withdraw_then_transfer_example() {
        let mut ledger = funded_ledger();
        let mut session = Session::new();
        session.login(&ledger, "A", "pw").unwrap();

        ledger.withdraw(&session, Money::from_dollars(30)).unwrap();
        assert_eq!(ledger.balance(&session).unwrap(), Money::from_dollars(70));

        ledger
            .transfer(&session, "B", Money::from_dollars(20))
            .unwrap();
        assert_eq!(ledger.balance(&session).unwrap(), Money::from_dollars(50));
        assert_eq!(
            ledger.lookup("B").unwrap().balance(),
            Money::from_dollars(20)
        );
    }

    #[test]
    fn test_insufficient_funds_leaves_both_untouched() {
        let mut ledger = funded_ledger();

        let err = ledger
            .transfer_between("A", "B", Money::from_cents(10001))
            .unwrap_err();
        assert!(matches!(err, AtmError::InsufficientFunds { .. }));

        let a = ledger.lookup("A").unwrap();
        let b = ledger.lookup("B").unwrap();
        assert_eq!(a.balance(), Money::from_dollars(100));
        assert_eq!(a.history().len(), 1);
        assert!(b.balance().is_zero());
        assert!(b.history().is_empty());
    }

    #[test]
    fn test_invalid_amount_rejected() {
        let mut ledger = funded_ledger();
        for amount in [Money::zero(), Money::from_cents(-500)] {
            assert!(matches!(
                ledger.transfer_between("A", "B", amount),
                Err(AtmError::InvalidAmount(_))
            ));
        }
        assert_eq!(ledger.lookup("A").unwrap().history().len(), 1);
    }

    #[test]
    fn test_unknown_destination() {
        let mut ledger = funded_ledger();
        let err = ledger
            .transfer_between("A", "Z", Money::from_dollars(1))
            .unwrap_err();
        assert!(matches!(err, AtmError::AccountNotFound(ref n) if n == "Z"));
        assert_eq!(
            ledger.lookup("A").unwrap().balance(),
            Money::from_dollars(100)
        );
    }

    #[test]
    fn test_destination_overflow_rejected_before_debit() {
        let mut ledger = funded_ledger();
        ledger.create("C", "pw").unwrap();
        let mut session = Session::new();
        session.login(&ledger, "C", "pw").unwrap();
        ledger
            .deposit(&session, Money::from_cents(i64::MAX))
            .unwrap();

        assert!(matches!(
            ledger.transfer_between("A", "C", Money::from_dollars(1)),
            Err(AtmError::BalanceOverflow(_))
        ));
        assert_eq!(
            ledger.lookup("A").unwrap().balance(),
            Money::from_dollars(100)
        );
    }

    #[test]
    fn test_self_transfer_permitted_by_default() {
        let mut ledger = funded_ledger();

        let result = ledger
            .transfer_between("A", "A", Money::from_dollars(10))
            .unwrap();

        let a = ledger.lookup("A").unwrap();
        assert_eq!(a.balance(), Money::from_dollars(100));
        assert_eq!(a.history().len(), 3);
        assert_eq!(
            result.from_transaction.kind().counterparty(),
            Some(&number("A"))
        );
        assert_eq!(
            result.to_transaction.kind().counterparty(),
            Some(&number("A"))
        );
    }

    #[test]
    fn test_self_transfer_can_be_disabled() {
        let mut ledger = funded_ledger().with_self_transfer(false);

        assert!(matches!(
            ledger.transfer_between("A", "A", Money::from_dollars(10)),
            Err(AtmError::SelfTransfer(_))
        ));
        assert_eq!(ledger.lookup("A").unwrap().history().len(), 1);
    }

    #[test]
    fn test_transfer_requires_session() {
        let mut ledger = funded_ledger();
        assert!(matches!(
            ledger.transfer(&Session::new(), "B", Money::from_dollars(1)),
            Err(AtmError::NoActiveSession)
        ));
    }
}
