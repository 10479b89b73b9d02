//! Interactive numbered menu driving the account model and the store.

mod menu;
mod password;

pub use menu::{MenuChoice, MenuError, MENU};
pub use password::PasswordPrompt;

use crate::models::Accounts;
use crate::store::{self, StorePaths};
use crate::{Money, Result};

use std::io::{BufRead, Write};

const ACCOUNT_PROMPT: &str = "Enter account number: ";
const PASSWORD_PROMPT: &str = "Enter account password: ";

const NOT_FOUND: &str = "Account not found!";
const ACCESS_DENIED: &str = "Incorrect password. Access denied.";
const WITHDRAWAL_DENIED: &str = "Incorrect password. Withdrawal denied.";
const INVALID_AMOUNT: &str = "Invalid amount. Please enter a valid number.";
const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 6.";
const GOODBYE: &str = "Exiting program. Thank you!";

/// The menu loop. Holds the terminal and file locations; the account
/// collection is handed to every operation explicitly.
pub struct Shell<I, O, P> {
    input: I,
    output: O,
    passwords: P,
    paths: StorePaths,
}

impl<I: BufRead, O: Write, P: PasswordPrompt> Shell<I, O, P> {
    pub fn new(input: I, output: O, passwords: P, paths: StorePaths) -> Self {
        return Self {
            input,
            output,
            passwords,
            paths,
        };
    }

    pub fn into_output(self) -> O {
        return self.output;
    }

    /// Runs until the exit choice is made or input ends
    pub fn run(&mut self, accounts: &mut Accounts) -> Result {
        loop {
            writeln!(self.output, "{MENU}")?;

            let line = match self.prompt("Enter your choice (1-6): ")? {
                Some(line) => line,
                None => {
                    log::debug!("Input closed, leaving menu loop");
                    writeln!(self.output)?;
                    break;
                }
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(e) => {
                    log::debug!("{e}");
                    writeln!(self.output, "{INVALID_CHOICE}")?;
                    continue;
                }
            };

            log::debug!("Menu choice: {choice:?}");

            match choice {
                MenuChoice::CreateAccount => self.create_account(accounts)?,
                MenuChoice::Deposit => self.deposit(accounts)?,
                MenuChoice::Withdraw => self.withdraw(accounts)?,
                MenuChoice::CheckBalance => self.check_balance(accounts)?,
                MenuChoice::ViewHistory => self.view_history(accounts)?,
                MenuChoice::Exit => break,
            }
        }

        writeln!(self.output, "{GOODBYE}")?;
        self.output.flush()?;

        return Ok(());
    }

    fn create_account(&mut self, accounts: &mut Accounts) -> Result {
        let Some(id) = self.prompt(ACCOUNT_PROMPT)? else {
            return Ok(());
        };
        let Some(password) = self.read_password()? else {
            return Ok(());
        };

        if accounts.exists(&id) {
            writeln!(
                self.output,
                "Account already exists. Please choose a different account number."
            )?;
            return Ok(());
        }

        accounts.create(&id, &password)?;
        log::debug!("Created account {id}");

        self.persist(accounts, &id)?;
        writeln!(self.output, "Account {id} created successfully!")?;

        return Ok(());
    }

    fn deposit(&mut self, accounts: &mut Accounts) -> Result {
        let Some(id) = self.prompt(ACCOUNT_PROMPT)? else {
            return Ok(());
        };
        let Some(amount) = self.prompt("Enter deposit amount: ")? else {
            return Ok(());
        };

        let Some(amount) = self.parse_amount(&amount)? else {
            return Ok(());
        };

        let Some(account) = accounts.find_mut(&id) else {
            writeln!(self.output, "{NOT_FOUND}")?;
            return Ok(());
        };

        let message = account.deposit(amount);
        writeln!(self.output, "{message}")?;

        self.persist(accounts, &id)?;

        return Ok(());
    }

    fn withdraw(&mut self, accounts: &mut Accounts) -> Result {
        let Some(id) = self.prompt(ACCOUNT_PROMPT)? else {
            return Ok(());
        };
        let Some(password) = self.read_password()? else {
            return Ok(());
        };
        let Some(amount) = self.prompt("Enter withdrawal amount: ")? else {
            return Ok(());
        };

        let Some(amount) = self.parse_amount(&amount)? else {
            return Ok(());
        };

        let Some(account) = accounts.find_mut(&id) else {
            writeln!(self.output, "{NOT_FOUND}")?;
            return Ok(());
        };

        if !account.verify_password(&password) {
            writeln!(self.output, "{WITHDRAWAL_DENIED}")?;
            return Ok(());
        }

        let outcome = account.withdraw(amount, Some(&password));
        writeln!(self.output, "{outcome}")?;

        if outcome.is_completed() {
            self.persist(accounts, &id)?;
        }

        return Ok(());
    }

    fn check_balance(&mut self, accounts: &Accounts) -> Result {
        let Some(id) = self.prompt(ACCOUNT_PROMPT)? else {
            return Ok(());
        };
        let Some(password) = self.read_password()? else {
            return Ok(());
        };

        match accounts.find(&id) {
            None => writeln!(self.output, "{NOT_FOUND}")?,
            Some(account) if !account.verify_password(&password) => {
                writeln!(self.output, "{ACCESS_DENIED}")?
            }
            Some(account) => writeln!(self.output, "{}", account.balance_summary())?,
        }

        return Ok(());
    }

    fn view_history(&mut self, accounts: &Accounts) -> Result {
        let Some(id) = self.prompt(ACCOUNT_PROMPT)? else {
            return Ok(());
        };
        let Some(password) = self.read_password()? else {
            return Ok(());
        };

        let account = match accounts.find(&id) {
            None => {
                writeln!(self.output, "{NOT_FOUND}")?;
                return Ok(());
            }
            Some(account) if !account.verify_password(&password) => {
                writeln!(self.output, "{ACCESS_DENIED}")?;
                return Ok(());
            }
            Some(account) => account,
        };

        let history = account.transaction_history();

        if history.is_empty() {
            writeln!(self.output, "No transactions recorded for this account.")?;
            return Ok(());
        }

        writeln!(self.output, "\nTransaction History for Account {id}:")?;
        for record in history {
            writeln!(self.output, "{record}")?;
        }

        return Ok(());
    }

    /// Rewrites the snapshot and appends the account's new history rows.
    /// A failed write is reported and the loop carries on; unwritten history
    /// stays pending until the next successful write.
    fn persist(&mut self, accounts: &mut Accounts, id: &str) -> Result {
        if let Err(e) = write_changes(&self.paths, accounts, id) {
            log::error!("{e:#}");
            writeln!(self.output, "Failed to save changes: {e:#}")?;
        }

        return Ok(());
    }

    /// A password that cannot be read cancels the current operation only
    fn read_password(&mut self) -> Result<Option<String>> {
        match self.passwords.read_password(PASSWORD_PROMPT) {
            Ok(password) => Ok(Some(password)),
            Err(e) => {
                log::error!("{e:#}");
                writeln!(self.output, "Couldn't read password: {e:#}")?;
                Ok(None)
            }
        }
    }

    fn parse_amount(&mut self, amount: &str) -> Result<Option<Money>> {
        match Money::parse(amount) {
            Ok(amount) => Ok(Some(amount)),
            Err(e) => {
                log::debug!("{e}");
                writeln!(self.output, "{INVALID_AMOUNT}")?;
                Ok(None)
            }
        }
    }

    /// Prints `text` and reads one line, without its line terminator.
    /// Returns `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);

        return Ok(Some(line));
    }
}

fn write_changes(paths: &StorePaths, accounts: &mut Accounts, id: &str) -> Result {
    store::save_accounts(&paths.accounts, accounts)?;

    if let Some(account) = accounts.find_mut(id) {
        store::append_history(&paths.history, account)?;
    }

    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{
        collections::VecDeque,
        fs,
        path::{Path, PathBuf},
    };

    struct ScriptedPasswords(VecDeque<&'static str>);

    impl PasswordPrompt for ScriptedPasswords {
        fn read_password(&mut self, _prompt: &str) -> Result<String> {
            Ok(self.0.pop_front().unwrap_or_default().to_string())
        }
    }

    struct NoTerminal;

    impl PasswordPrompt for NoTerminal {
        fn read_password(&mut self, _prompt: &str) -> Result<String> {
            Err(anyhow::anyhow!("No terminal available"))
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("csv-bank-shell-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn run_script(
        dir: &Path,
        accounts: &mut Accounts,
        input: &str,
        passwords: &[&'static str],
    ) -> String {
        let passwords = ScriptedPasswords(passwords.iter().copied().collect());
        let mut shell = Shell::new(input.as_bytes(), vec![], passwords, StorePaths::in_dir(dir));

        shell.run(accounts).unwrap();

        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn exit() {
        let dir = scratch_dir("exit");
        let mut accounts = Accounts::new();

        let output = run_script(&dir, &mut accounts, "6\n", &[]);

        assert!(output.contains("Banking System Menu:"));
        assert!(output.contains("Enter your choice (1-6): "));
        assert!(output.ends_with("Exiting program. Thank you!\n"));
        assert!(!StorePaths::in_dir(&dir).accounts.exists());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn invalid_choice() {
        let dir = scratch_dir("invalid-choice");
        let mut accounts = Accounts::new();

        let output = run_script(&dir, &mut accounts, "9\nabc\n6\n", &[]);

        assert_eq!(output.matches(INVALID_CHOICE).count(), 2);
        assert_eq!(output.matches("Banking System Menu:").count(), 3);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn end_of_input_exits() {
        let dir = scratch_dir("eof");
        let mut accounts = Accounts::new();

        let output = run_script(&dir, &mut accounts, "1\nA1\n", &["p"]);

        assert!(accounts.exists("A1"));
        assert!(output.ends_with("Exiting program. Thank you!\n"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn create_account() {
        let dir = scratch_dir("create");
        let mut accounts = Accounts::new();

        let output = run_script(&dir, &mut accounts, "1\nA1\n1\nA1\n6\n", &["p", "other"]);

        assert!(output.contains("Account A1 created successfully!"));
        assert!(output.contains("Account already exists. Please choose a different account number."));
        assert_eq!(accounts.len(), 1);
        assert!(accounts.find("A1").unwrap().verify_password("p"));

        let snapshot = fs::read_to_string(StorePaths::in_dir(&dir).accounts).unwrap();
        assert_eq!(snapshot, "Account Number,Password,Balance\nA1,p,0\n");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn deposit() {
        let dir = scratch_dir("deposit");
        let mut accounts = Accounts::new();
        accounts.create("A1", "p").unwrap();

        let output = run_script(&dir, &mut accounts, "2\nA1\n50\n2\nA1\nfifty\n2\nZZ\n5\n6\n", &[]);

        assert!(output.contains("Deposited 50. Current balance: 50"));
        assert!(output.contains(INVALID_AMOUNT));
        assert!(output.contains(NOT_FOUND));
        assert_eq!(accounts.find("A1").unwrap().balance(), Money(50.0));

        let history = fs::read_to_string(StorePaths::in_dir(&dir).history).unwrap();
        assert_eq!(history.lines().count(), 1);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn withdraw() {
        let dir = scratch_dir("withdraw");
        let mut accounts = Accounts::new();
        accounts.create("A1", "p").unwrap().deposit(Money(100.0));

        let output = run_script(
            &dir,
            &mut accounts,
            "3\nA1\n30\n3\nA1\n1000\n3\nA1\n10\n3\nA1\nlots\n3\nZZ\n1\n6\n",
            &["p", "p", "wrong", "p", "p"],
        );

        assert!(output.contains("Withdrew 30. Current balance: 70"));
        assert!(output.contains("Insufficient funds!"));
        assert!(output.contains(WITHDRAWAL_DENIED));
        assert!(output.contains(INVALID_AMOUNT));
        assert!(output.contains(NOT_FOUND));

        let account = accounts.find("A1").unwrap();
        assert_eq!(account.balance(), Money(70.0));
        assert_eq!(account.transaction_history().len(), 2);

        // Both the seeding deposit and the withdrawal were pending
        let history = fs::read_to_string(StorePaths::in_dir(&dir).history).unwrap();
        assert_eq!(history.lines().count(), 2);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn check_balance() {
        let dir = scratch_dir("balance");
        let mut accounts = Accounts::new();
        accounts.create("A1", "p").unwrap().deposit(Money(12.5));

        let output = run_script(
            &dir,
            &mut accounts,
            "4\nA1\n4\nA1\n4\nZZ\n6\n",
            &["p", "P", "p"],
        );

        assert!(output.contains("Account balance for account A1: 12.5"));
        assert!(output.contains(ACCESS_DENIED));
        assert!(output.contains(NOT_FOUND));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn view_history() {
        let dir = scratch_dir("history");
        let mut accounts = Accounts::new();
        accounts.create("A1", "p").unwrap().deposit(Money(100.0));
        accounts.create("B2", "q").unwrap();

        let output = run_script(
            &dir,
            &mut accounts,
            "5\nA1\n5\nB2\n5\nA1\n6\n",
            &["p", "q", "nope"],
        );

        let record = &accounts.find("A1").unwrap().transaction_history()[0];
        assert!(output.contains("\nTransaction History for Account A1:\n"));
        assert!(output.contains(&format!("{record}\n")));
        assert!(output.contains("No transactions recorded for this account."));
        assert!(output.contains(ACCESS_DENIED));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn unreadable_password_keeps_going() {
        let dir = scratch_dir("no-terminal");
        let mut accounts = Accounts::new();
        accounts.create("A1", "p").unwrap().deposit(Money(40.0));

        let mut shell = Shell::new(
            "1\nB2\n3\nA1\n4\nA1\n2\nA1\n5\n6\n".as_bytes(),
            vec![],
            NoTerminal,
            StorePaths::in_dir(&dir),
        );
        shell.run(&mut accounts).unwrap();
        let output = String::from_utf8(shell.into_output()).unwrap();

        assert_eq!(output.matches("Couldn't read password: No terminal available").count(), 3);
        assert!(!accounts.exists("B2"));
        assert!(output.contains("Deposited 5. Current balance: 45"));
        assert!(output.ends_with("Exiting program. Thank you!\n"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn failed_write_keeps_going() {
        let dir = scratch_dir("failed-write");
        let mut accounts = Accounts::new();
        accounts.create("A1", "p").unwrap();

        // A directory where the snapshot file should be makes every write fail
        fs::create_dir_all(StorePaths::in_dir(&dir).accounts).unwrap();

        let output = run_script(&dir, &mut accounts, "2\nA1\n5\n6\n", &[]);

        assert!(output.contains("Deposited 5. Current balance: 5"));
        assert!(output.contains("Failed to save changes:"));
        assert!(output.ends_with("Exiting program. Thank you!\n"));
        assert_eq!(accounts.find("A1").unwrap().transactions().unflushed().len(), 1);

        fs::remove_dir_all(dir).unwrap();
    }
}
