mod config;
mod prompt;

use bank::{shell::Shell, store, Result};

use std::io;

fn main() -> Result {
    let config = config::configure_app()?;

    log::debug!("Application configured. Loading accounts...");

    let paths = config.paths;
    let mut accounts = store::load(&paths)?;

    log::debug!("Loaded {} accounts. Starting menu...", accounts.len());

    let stdin = io::stdin();
    let mut shell = Shell::new(
        stdin.lock(),
        io::stdout(),
        prompt::HiddenPasswordPrompt,
        paths,
    );

    shell.run(&mut accounts)?;

    log::debug!("Application finished successfully!");

    Ok(())
}
