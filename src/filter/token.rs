use crate::error::{RespStatError, Result};
use crate::extractor::StatusCode;
use std::str::FromStr;

/// One positional filter argument: a single code or an inclusive range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterToken {
    Single(StatusCode),
    Range { min: StatusCode, max: StatusCode },
}

impl FilterToken {
    /// The codes this token selects, in ascending order.
    pub fn codes(&self) -> impl Iterator<Item = StatusCode> {
        let (min, max) = match *self {
            FilterToken::Single(code) => (code, code),
            FilterToken::Range { min, max } => (min, max),
        };
        StatusCode::span(min, max)
    }
}

impl FromStr for FilterToken {
    type Err = RespStatError;

    fn from_str(arg: &str) -> Result<Self> {
        let invalid = || RespStatError::InvalidArgument {
            arg: arg.to_string(),
        };
        let parse_code = |part: &str| {
            part.parse::<i64>()
                .ok()
                .and_then(StatusCode::new)
                .ok_or_else(invalid)
        };

        let parts: Vec<&str> = arg.split(':').collect();
        match parts.as_slice() {
            [single] => Ok(FilterToken::Single(parse_code(*single)?)),
            [min, max] => {
                let min = parse_code(*min)?;
                let max = parse_code(*max)?;
                if min > max {
                    return Err(invalid());
                }
                Ok(FilterToken::Range { min, max })
            }
            _ => Err(invalid()),
        }
    }
}
