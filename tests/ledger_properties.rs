//! Property tests for ledger invariants over random operation sequences.

use proptest::prelude::*;

use atm_sim::ledger::Ledger;
use atm_sim::models::{Money, TransactionKind};
use atm_sim::session::Session;
use atm_sim::AtmError;

const ACCOUNTS: [&str; 3] = ["A", "B", "C"];

#[derive(Debug, Clone)]
enum Op {
    Deposit(usize, i64),
    Withdraw(usize, i64),
    Transfer(usize, usize, i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    let account = 0..ACCOUNTS.len();
    let amount = -1_000i64..50_000;
    prop_oneof![
        (account.clone(), amount.clone()).prop_map(|(a, m)| Op::Deposit(a, m)),
        (account.clone(), amount.clone()).prop_map(|(a, m)| Op::Withdraw(a, m)),
        (account.clone(), account, amount).prop_map(|(a, b, m)| Op::Transfer(a, b, m)),
    ]
}

fn new_ledger() -> Ledger {
    let mut ledger = Ledger::new();
    for number in ACCOUNTS {
        ledger.create(number, "pw").unwrap();
    }
    ledger
}

fn session_for(ledger: &Ledger, index: usize) -> Session {
    let mut session = Session::new();
    session.login(ledger, ACCOUNTS[index], "pw").unwrap();
    session
}

/// Balance and history length for every account
fn snapshot(ledger: &Ledger) -> Vec<(Money, usize)> {
    ACCOUNTS
        .iter()
        .map(|n| {
            let account = ledger.lookup(n).unwrap();
            (account.balance(), account.history().len())
        })
        .collect()
}

proptest! {
    #[test]
    fn balances_never_negative_and_rejections_change_nothing(
        ops in prop::collection::vec(op_strategy(), 0..60)
    ) {
        let mut ledger = new_ledger();
        let mut external = 0i64;

        for op in ops {
            let before = snapshot(&ledger);
            let result = match op {
                Op::Deposit(a, cents) => {
                    let session = session_for(&ledger, a);
                    ledger.deposit(&session, Money::from_cents(cents)).map(|_| cents)
                }
                Op::Withdraw(a, cents) => {
                    let session = session_for(&ledger, a);
                    ledger.withdraw(&session, Money::from_cents(cents)).map(|_| -cents)
                }
                Op::Transfer(a, b, cents) => {
                    let session = session_for(&ledger, a);
                    ledger
                        .transfer(&session, ACCOUNTS[b], Money::from_cents(cents))
                        .map(|_| 0)
                }
            };

            match result {
                Ok(delta) => external += delta,
                Err(err) => {
                    prop_assert!(matches!(
                        err,
                        AtmError::InvalidAmount(_) | AtmError::InsufficientFunds { .. }
                    ), "unexpected error: {:?}", err);
                    prop_assert_eq!(snapshot(&ledger), before);
                }
            }

            for account in ledger.accounts() {
                prop_assert!(!account.balance().is_negative());
            }
            prop_assert_eq!(ledger.total_holdings(), Some(Money::from_cents(external)));
        }
    }

    #[test]
    fn deposit_then_withdraw_round_trips(
        initial in 0i64..1_000_000,
        cents in 1i64..1_000_000,
    ) {
        let mut ledger = new_ledger();
        let session = session_for(&ledger, 0);
        if initial > 0 {
            ledger.deposit(&session, Money::from_cents(initial)).unwrap();
        }
        let before = ledger.balance(&session).unwrap();
        let history_before = ledger.history(&session).unwrap().len();

        ledger.deposit(&session, Money::from_cents(cents)).unwrap();
        ledger.withdraw(&session, Money::from_cents(cents)).unwrap();

        prop_assert_eq!(ledger.balance(&session).unwrap(), before);
        let history = ledger.history(&session).unwrap();
        prop_assert_eq!(history.len(), history_before + 2);
        prop_assert_eq!(history[history_before].kind(), &TransactionKind::Deposit);
        prop_assert_eq!(history[history_before + 1].kind(), &TransactionKind::Withdrawal);
    }

    #[test]
    fn transfer_conserves_combined_balance(
        funded in 1i64..1_000_000,
        cents in 1i64..2_000_000,
    ) {
        let mut ledger = new_ledger();
        let session = session_for(&ledger, 0);
        ledger.deposit(&session, Money::from_cents(funded)).unwrap();

        let result = ledger.transfer(&session, "B", Money::from_cents(cents));
        let a = ledger.lookup("A").unwrap().balance().cents();
        let b = ledger.lookup("B").unwrap().balance().cents();

        prop_assert_eq!(a + b, funded);
        if cents <= funded {
            prop_assert!(result.is_ok());
            prop_assert_eq!(a, funded - cents);
            prop_assert_eq!(b, cents);
        } else {
            let insufficient = matches!(result, Err(AtmError::InsufficientFunds { .. }));
            prop_assert!(insufficient);
            prop_assert_eq!(b, 0);
        }
    }
}
