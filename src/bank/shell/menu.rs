use std::str::FromStr;

use thiserror::Error;

pub const MENU: &str = "\nBanking System Menu:\n\
1. Create Account\n\
2. Deposit\n\
3. Withdraw\n\
4. Check Balance\n\
5. View Transaction History\n\
6. Exit";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MenuError {
    #[error("Invalid menu choice: {0:?}")]
    InvalidChoice(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    CreateAccount,
    Deposit,
    Withdraw,
    CheckBalance,
    ViewHistory,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = match s.trim() {
            "1" => MenuChoice::CreateAccount,
            "2" => MenuChoice::Deposit,
            "3" => MenuChoice::Withdraw,
            "4" => MenuChoice::CheckBalance,
            "5" => MenuChoice::ViewHistory,
            "6" => MenuChoice::Exit,
            other => return Err(MenuError::InvalidChoice(other.to_string())),
        };

        return Ok(choice);
    }
}
