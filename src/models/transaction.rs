//! Transaction model
//!
//! A transaction is an immutable record of one balance-affecting event on a
//! single account. Transfers produce one record on each side, each naming the
//! other account as counterparty.

use chrono::{DateTime, Utc};
use std::fmt;

use super::ids::{AccountNumber, TransactionId};
use super::money::Money;

/// What kind of event a transaction records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    /// Cash deposited into the account
    Deposit,
    /// Cash withdrawn from the account
    Withdrawal,
    /// Funds sent to another account
    TransferOut { counterparty: AccountNumber },
    /// Funds received from another account
    TransferIn { counterparty: AccountNumber },
}

impl TransactionKind {
    /// Returns true for either side of a transfer
    pub fn is_transfer(&self) -> bool {
        matches!(self, Self::TransferOut { .. } | Self::TransferIn { .. })
    }

    /// Returns true if the event increased the balance
    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Deposit | Self::TransferIn { .. })
    }

    /// The other account involved, if this is a transfer
    pub fn counterparty(&self) -> Option<&AccountNumber> {
        match self {
            Self::TransferOut { counterparty } | Self::TransferIn { counterparty } => {
                Some(counterparty)
            }
            Self::Deposit | Self::Withdrawal => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::Withdrawal => write!(f, "Withdrawal"),
            Self::TransferOut { counterparty } => write!(f, "Transfer to {}", counterparty),
            Self::TransferIn { counterparty } => write!(f, "Transfer from {}", counterparty),
        }
    }
}

/// An immutable transaction record
///
/// Fields are private; a record can only be built by the owning account when
/// a mutation succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    id: TransactionId,
    kind: TransactionKind,
    /// Always positive; direction comes from `kind`
    amount: Money,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn new(kind: TransactionKind, amount: Money) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            amount,
            timestamp: Utc::now(),
        }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    pub fn kind(&self) -> &TransactionKind {
        &self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Amount with sign applied: positive for credits, negative for debits
    pub fn signed_amount(&self) -> Money {
        if self.kind.is_credit() {
            self.amount
        } else {
            -self.amount
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.amount)
    }
}
