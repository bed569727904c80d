pub mod cli;
pub mod config;
pub mod driver;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod logging;
pub mod ui;

// Public API re-exports
pub use cli::Cli;
pub use config::{Config, Mode, ModeRequest};
pub use error::{ExtractError, RespStatError, Result, UserFriendlyError};

// Core functionality re-exports
pub use driver::{Driver, RunSummary, StatusTally};
pub use extractor::{extract, StatusCode};
pub use filter::{DesiredSet, FilterToken};
pub use ui::Diagnostics;

use std::io::{BufRead, Write};

/// Main library interface: a validated configuration bound to a driver.
pub struct RespStat {
    driver: Driver,
    diagnostics: Diagnostics,
}

impl RespStat {
    pub fn new(config: Config) -> Self {
        Self {
            driver: Driver::new(config),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Validates the command line and selects the mode. Reads no input.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Self::new(cli.load_config()?))
    }

    pub fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<RunSummary> {
        self.driver.run(input, output)
    }

    pub fn config(&self) -> &Config {
        self.driver.config()
    }

    /// Reports a fatal error on stderr, with usage guidance for usage errors.
    pub fn handle_error(&self, error: &RespStatError) {
        self.diagnostics
            .print_user_friendly_error(error, Some(Cli::usage().as_str()));
    }
}
