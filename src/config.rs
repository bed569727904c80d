use crate::error::{RespStatError, Result};
use crate::filter::DesiredSet;
use tracing::{debug, warn};

/// What a run does with each record. Chosen once, before input is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Count occurrences of each status code.
    Stats,
    /// Re-emit lines whose status code is in the set.
    Filter(DesiredSet),
    /// Re-emit lines whose status code could not be extracted.
    InvalidReport,
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Stats => "stats",
            Mode::Filter(_) => "filter",
            Mode::InvalidReport => "invalid-report",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
}

impl Config {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    /// Resolves the command surface into a mode, validating it up front.
    pub fn from_request(request: &ModeRequest) -> Result<Self> {
        request.validate()?;

        if request.invalid_only {
            return Ok(Self::new(Mode::InvalidReport));
        }

        if request.filters.is_empty() {
            if request.invert {
                warn!("--invert has no effect without filters; counting status codes instead");
            }
            return Ok(Self::new(Mode::Stats));
        }

        let desired = DesiredSet::build(request.filters.as_slice(), request.invert)?;
        if desired.is_empty() {
            warn!("the filters select no status codes; no lines will be printed");
        } else {
            debug!(codes = desired.len(), "built filter set");
        }
        Ok(Self::new(Mode::Filter(desired)))
    }
}

/// The raw mode-selecting inputs, as given on the command line.
#[derive(Debug, Default, Clone)]
pub struct ModeRequest {
    pub invalid_only: bool,
    pub invert: bool,
    pub filters: Vec<String>,
}

impl ModeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_invalid_only(mut self, invalid_only: bool) -> Self {
        self.invalid_only = invalid_only;
        self
    }

    pub fn with_invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    pub fn with_filters(mut self, filters: Vec<String>) -> Self {
        self.filters = filters;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.invalid_only && self.invert {
            return Err(RespStatError::Usage {
                message: "The invalid-line report cannot be combined with --invert".to_string(),
            });
        }

        if self.invalid_only && !self.filters.is_empty() {
            return Err(RespStatError::Usage {
                message: "The invalid-line report cannot be combined with filters".to_string(),
            });
        }

        Ok(())
    }
}
