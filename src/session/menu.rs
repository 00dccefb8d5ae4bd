//! Main menu options

use std::fmt;

/// An entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    CreateAccount,
    Login,
    ShowHistory,
    Withdraw,
    Deposit,
    Transfer,
    Quit,
}

impl MenuOption {
    /// All options in menu order
    pub const ALL: [MenuOption; 7] = [
        Self::CreateAccount,
        Self::Login,
        Self::ShowHistory,
        Self::Withdraw,
        Self::Deposit,
        Self::Transfer,
        Self::Quit,
    ];

    /// The number the user types to pick this option
    pub fn number(&self) -> u8 {
        match self {
            Self::CreateAccount => 1,
            Self::Login => 2,
            Self::ShowHistory => 3,
            Self::Withdraw => 4,
            Self::Deposit => 5,
            Self::Transfer => 6,
            Self::Quit => 7,
        }
    }

    /// Parse a menu choice typed by the user
    pub fn parse(s: &str) -> Option<Self> {
        let n: u8 = s.trim().parse().ok()?;
        Self::ALL.into_iter().find(|option| option.number() == n)
    }

    /// Options 3-6 act on the logged-in account
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Self::ShowHistory | Self::Withdraw | Self::Deposit | Self::Transfer
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::CreateAccount => "Create Account",
            Self::Login => "Login",
            Self::ShowHistory => "Transaction History",
            Self::Withdraw => "Withdraw",
            Self::Deposit => "Deposit",
            Self::Transfer => "Transfer",
            Self::Quit => "Quit",
        }
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// Render the full menu block
pub fn render_menu() -> String {
    let rule = "-".repeat(30);
    let mut output = String::new();
    output.push_str(&rule);
    output.push('\n');
    for option in MenuOption::ALL {
        output.push_str(&format!("{}\n", option));
    }
    output.push_str(&rule);
    output.push('\n');
    output
}
