use bank::store::StorePaths;
use bank::Result;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Level used unless `RUST_LOG` says otherwise. Skipped rows while loading
/// are reported at warn.
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: LevelFilter,
    pub paths: StorePaths,
}

impl Default for AppConfig {
    fn default() -> Self {
        return Self {
            log_level: DEFAULT_LOG_LEVEL,
            paths: StorePaths::default(),
        };
    }
}

/// Installs the stderr logger and returns where the ledger files live
pub fn configure_app() -> Result<AppConfig> {
    let config = AppConfig::default();

    SimpleLogger::new()
        .with_level(config.log_level)
        .env()
        .init()?;

    log::debug!(
        "Using accounts file {:?} and history file {:?}",
        config.paths.accounts,
        config.paths.history
    );

    return Ok(config);
}
