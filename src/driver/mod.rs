pub mod tally;

pub use tally::StatusTally;

use crate::config::{Config, Mode};
use crate::error::{RespStatError, Result};
use crate::extractor::extract;
use std::io::{BufRead, Write};
use tracing::{debug, trace};

/// Counters describing one pass over the input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: u64,
    pub lines_emitted: u64,
    pub invalid_lines: u64,
}

/// Streams records through the extractor and acts on them according to the mode.
pub struct Driver {
    config: Config,
}

impl Driver {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Processes `input` line by line, writing results to `output`.
    ///
    /// Only the current line is held in memory. Emitted lines are written
    /// byte-for-byte and flushed as they match. A read error aborts the run
    /// immediately without writing anything further.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> Result<RunSummary> {
        debug!(mode = self.config.mode.name(), "processing input");

        let mut summary = RunSummary::default();
        let mut tally = StatusTally::new();
        let mut line = Vec::new();

        loop {
            line.clear();
            let read = input
                .read_until(b'\n', &mut line)
                .map_err(RespStatError::Input)?;
            if read == 0 {
                break;
            }
            summary.lines_read += 1;

            let outcome = extract(&line);
            if let Err(ref e) = outcome {
                summary.invalid_lines += 1;
                trace!(line = summary.lines_read, error = %e, "record rejected");
            }

            let emit = match &self.config.mode {
                Mode::Stats => {
                    tally.record(&outcome);
                    false
                }
                Mode::Filter(desired) => matches!(&outcome, Ok(code) if desired.contains(*code)),
                Mode::InvalidReport => outcome.is_err(),
            };

            // Emitted lines go out immediately so followed streams (`tail -f`) show them live.
            if emit {
                output
                    .write_all(&line)
                    .and_then(|()| output.flush())
                    .map_err(RespStatError::Output)?;
                summary.lines_emitted += 1;
            }
        }

        if let Mode::Stats = self.config.mode {
            tally
                .write_report(&mut output)
                .map_err(RespStatError::Output)?;
        }
        output.flush().map_err(RespStatError::Output)?;

        Ok(summary)
    }
}
