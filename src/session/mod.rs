//! Interactive session
//!
//! The session context and the console menu loop that drives the ledger.

pub mod context;
pub mod menu;
pub mod runner;

pub use context::Session;
pub use menu::MenuOption;
pub use runner::Atm;
