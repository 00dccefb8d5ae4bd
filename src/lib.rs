//! ATM simulator - in-memory bank accounts behind a console menu
//!
//! This library provides the core of the `atm` binary: an account ledger with
//! guarded balance mutations, per-account transaction history, and the
//! interactive menu loop that drives it.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Config directory and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (accounts, credentials, transactions, money)
//! - `ledger`: The account table and the transfer protocol
//! - `session`: Session context and the console menu loop
//! - `display`: Terminal formatting
//! - `logging`: Tracing setup
//!
//! # Example
//!
//! ```rust
//! use atm_sim::ledger::Ledger;
//! use atm_sim::models::Money;
//! use atm_sim::session::Session;
//!
//! let mut ledger = Ledger::new();
//! ledger.create("1001", "secret")?;
//! ledger.create("2002", "hunter2")?;
//!
//! let mut session = Session::new();
//! session.login(&ledger, "1001", "secret")?;
//! ledger.deposit(&session, Money::from_dollars(100))?;
//! ledger.transfer(&session, "2002", Money::from_dollars(20))?;
//!
//! assert_eq!(ledger.balance(&session)?, Money::from_dollars(80));
//! # Ok::<(), atm_sim::AtmError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod models;
pub mod session;

pub use error::{AtmError, AtmResult};
