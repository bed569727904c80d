use crate::error::Result;
use crate::extractor::StatusCode;
use crate::filter::FilterToken;
use std::collections::BTreeSet;

/// The status codes a filter-mode run lets through.
///
/// Built once from the filter arguments and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesiredSet {
    codes: BTreeSet<StatusCode>,
}

impl DesiredSet {
    /// Builds the set from textual filter arguments.
    ///
    /// Every argument is validated before the set is touched, so an invalid
    /// token yields its error and no partial set. With `invert` the set starts
    /// full and tokens remove codes; otherwise it starts empty and tokens add
    /// them. Tokens apply in order.
    pub fn build<S: AsRef<str>>(args: &[S], invert: bool) -> Result<Self> {
        let tokens = args
            .iter()
            .map(|arg| arg.as_ref().parse::<FilterToken>())
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::from_tokens(&tokens, invert))
    }

    pub fn from_tokens(tokens: &[FilterToken], invert: bool) -> Self {
        let mut codes: BTreeSet<StatusCode> = if invert {
            StatusCode::all().collect()
        } else {
            BTreeSet::new()
        };

        for token in tokens {
            for code in token.codes() {
                if invert {
                    codes.remove(&code);
                } else {
                    codes.insert(code);
                }
            }
        }

        Self { codes }
    }

    pub fn contains(&self, code: StatusCode) -> bool {
        self.codes.contains(&code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[cfg(test)]
    fn iter(&self) -> impl Iterator<Item = StatusCode> + '_ {
        self.codes.iter().copied()
    }
}
