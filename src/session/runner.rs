//! Console menu loop
//!
//! Reads menu choices, account numbers, passwords and amounts, and calls the
//! ledger with an explicit session. Domain errors are printed and the loop
//! carries on; I/O failures end it.

use std::io::{BufRead, Write};

use zeroize::Zeroizing;

use super::context::Session;
use super::menu::{render_menu, MenuOption};
use crate::config::Settings;
use crate::display::{format_account_summary, format_history, format_money};
use crate::error::{AtmError, AtmResult};
use crate::ledger::Ledger;
use crate::models::{AccountNumber, Money};

/// The interactive ATM
pub struct Atm<R, W> {
    ledger: Ledger,
    session: Session,
    settings: Settings,
    input: R,
    output: W,
    mask_credentials: bool,
}

impl<R: BufRead, W: Write> Atm<R, W> {
    /// Create an ATM over the given ledger and I/O streams
    ///
    /// Passwords are read as plain lines from `input` unless
    /// [`with_masked_credentials`](Self::with_masked_credentials) is enabled.
    pub fn new(ledger: Ledger, settings: Settings, input: R, output: W) -> Self {
        Self {
            ledger,
            session: Session::new(),
            settings,
            input,
            output,
            mask_credentials: false,
        }
    }

    /// Read passwords from the terminal with echo disabled
    pub fn with_masked_credentials(mut self, mask: bool) -> Self {
        self.mask_credentials = mask;
        self
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consume the ATM and hand back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until Quit or end of input
    pub fn run(&mut self) -> AtmResult<()> {
        writeln!(self.output, "Welcome to the ATM!")?;

        loop {
            write!(self.output, "{}", render_menu())?;

            let choice = match self.prompt("Enter your option: ") {
                Ok(choice) => choice,
                Err(AtmError::InputClosed) => break,
                Err(err) if err.is_recoverable() => {
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
                Err(err) => return Err(err),
            };

            let Some(option) = MenuOption::parse(&choice) else {
                writeln!(self.output, "Invalid option. Please try again.")?;
                continue;
            };

            if option == MenuOption::Quit {
                break;
            }

            match self.dispatch(option) {
                Ok(()) => {}
                Err(AtmError::InputClosed) => break,
                Err(err) if err.is_recoverable() => {
                    tracing::debug!(option = ?option, error = %err, "operation rejected");
                    writeln!(self.output, "{}", err)?;
                }
                Err(err) => return Err(err),
            }
        }

        if let Some(number) = self.session.logout() {
            tracing::info!(account = %number, "session closed");
        }
        writeln!(self.output, "Thank you for using the ATM!")?;
        self.output.flush()?;
        Ok(())
    }

    /// Perform a single menu action
    pub fn dispatch(&mut self, option: MenuOption) -> AtmResult<()> {
        if option.requires_session() {
            self.session.require()?;
        }

        match option {
            MenuOption::CreateAccount => self.create_account(),
            MenuOption::Login => self.login(),
            MenuOption::ShowHistory => self.show_history(),
            MenuOption::Withdraw => self.withdraw(),
            MenuOption::Deposit => self.deposit(),
            MenuOption::Transfer => self.transfer(),
            MenuOption::Quit => Ok(()),
        }
    }

    fn create_account(&mut self) -> AtmResult<()> {
        let raw = self.prompt("Enter a new account number: ")?;
        let number = AccountNumber::parse(&raw)?;
        if self.ledger.contains(number.as_str()) {
            return Err(AtmError::DuplicateAccount(number.to_string()));
        }

        let credential = self.prompt_credential("Enter a password for the account: ")?;
        let account = self.ledger.create(number.as_str(), &credential)?;
        writeln!(
            self.output,
            "Account {} created successfully.",
            account.number()
        )?;
        Ok(())
    }

    fn login(&mut self) -> AtmResult<()> {
        let number = self.prompt("Enter your account number: ")?;
        self.ledger.lookup(&number)?;

        let credential = self.prompt_credential("Enter your password: ")?;
        let account = self.session.login(&self.ledger, &number, &credential)?;
        let summary = format_account_summary(account, &self.settings);
        writeln!(
            self.output,
            "Login successful. Account selected: {}",
            account.number()
        )?;
        write!(self.output, "{}", summary)?;
        Ok(())
    }

    fn show_history(&mut self) -> AtmResult<()> {
        let account = self.ledger.current_account(&self.session)?;
        let text = format_history(account, &self.settings);
        write!(self.output, "{}", text)?;
        Ok(())
    }

    fn withdraw(&mut self) -> AtmResult<()> {
        let amount = self.prompt_amount("Enter the withdrawal amount: ")?;
        let txn = self.ledger.withdraw(&self.session, amount)?;
        let balance = self.ledger.balance(&self.session)?;
        writeln!(
            self.output,
            "{} withdrawn successfully. New balance: {}",
            format_money(txn.amount(), &self.settings),
            format_money(balance, &self.settings)
        )?;
        Ok(())
    }

    fn deposit(&mut self) -> AtmResult<()> {
        let amount = self.prompt_amount("Enter the deposit amount: ")?;
        let txn = self.ledger.deposit(&self.session, amount)?;
        let balance = self.ledger.balance(&self.session)?;
        writeln!(
            self.output,
            "{} deposited successfully. New balance: {}",
            format_money(txn.amount(), &self.settings),
            format_money(balance, &self.settings)
        )?;
        Ok(())
    }

    fn transfer(&mut self) -> AtmResult<()> {
        let destination = self.prompt("Enter the destination account number: ")?;
        self.ledger.lookup(&destination)?;

        let amount = self.prompt_amount("Enter the transfer amount: ")?;
        let result = self.ledger.transfer(&self.session, &destination, amount)?;
        let balance = self.ledger.balance(&self.session)?;
        let counterparty = result
            .from_transaction
            .kind()
            .counterparty()
            .map(ToString::to_string)
            .unwrap_or(destination);
        writeln!(
            self.output,
            "{} transferred successfully to {}. New balance: {}",
            format_money(result.from_transaction.amount(), &self.settings),
            counterparty,
            format_money(balance, &self.settings)
        )?;
        Ok(())
    }

    /// Print a prompt and read one trimmed line
    fn prompt(&mut self, label: &str) -> AtmResult<String> {
        Ok(self.read_line(label)?.trim().to_string())
    }

    fn prompt_amount(&mut self, label: &str) -> AtmResult<Money> {
        let raw = self.prompt(label)?;
        Money::parse(&raw).map_err(|e| AtmError::InvalidInput(e.to_string()))
    }

    /// Read a password, hidden when masking is on
    ///
    /// Only the line terminator is stripped; surrounding spaces are part of
    /// the password.
    fn prompt_credential(&mut self, label: &str) -> AtmResult<Zeroizing<String>> {
        if self.mask_credentials {
            self.output.flush()?;
            let secret = rpassword::prompt_password(label)?;
            return Ok(Zeroizing::new(secret));
        }

        let line = Zeroizing::new(self.read_line(label)?);
        Ok(Zeroizing::new(
            line.trim_end_matches(['\r', '\n']).to_string(),
        ))
    }

    fn read_line(&mut self, label: &str) -> AtmResult<String> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(AtmError::InputClosed);
        }
        String::from_utf8(buf)
            .map_err(|_| AtmError::InvalidInput("input is not valid UTF-8".to_string()))
    }
}
