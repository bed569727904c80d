use crate::error::ExtractError;
use crate::extractor::StatusCode;
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Per-code occurrence counts plus the number of lines that failed extraction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTally {
    counts: BTreeMap<StatusCode, u64>,
    invalid_lines: u64,
}

impl StatusTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &Result<StatusCode, ExtractError>) {
        match outcome {
            Ok(code) => *self.counts.entry(*code).or_insert(0) += 1,
            Err(_) => self.invalid_lines += 1,
        }
    }

    #[cfg(test)]
    fn count(&self, code: StatusCode) -> u64 {
        self.counts.get(&code).copied().unwrap_or(0)
    }

    #[cfg(test)]
    fn invalid_lines(&self) -> u64 {
        self.invalid_lines
    }

    /// Seen codes with their counts, ascending by code.
    pub fn iter(&self) -> impl Iterator<Item = (StatusCode, u64)> + '_ {
        self.counts.iter().map(|(code, count)| (*code, *count))
    }

    /// Writes the invalid-line total (only when nonzero) and one line per seen code.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.invalid_lines > 0 {
            writeln!(out, "Invalid lines: {}", self.invalid_lines)?;
        }
        for (code, count) in self.iter() {
            writeln!(out, "Status code {}: {}x", code, count)?;
        }
        Ok(())
    }
}
