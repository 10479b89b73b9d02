use bank::shell::PasswordPrompt;
use bank::Result;

use anyhow::Context;

/// Reads passwords from the terminal without echoing them
pub struct HiddenPasswordPrompt;

impl PasswordPrompt for HiddenPasswordPrompt {
    fn read_password(&mut self, prompt: &str) -> Result<String> {
        let password =
            rpassword::prompt_password(prompt).context("Couldn't read password from terminal")?;

        return Ok(password);
    }
}
