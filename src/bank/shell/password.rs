use crate::Result;

/// Source of passwords for the shell. The terminal implementation must not
/// echo what is typed.
pub trait PasswordPrompt {
    fn read_password(&mut self, prompt: &str) -> Result<String>;
}
