use std::num::ParseIntError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RespStatError {
    #[error("Invalid argument '{arg}'")]
    InvalidArgument { arg: String },

    #[error("Usage error: {message}")]
    Usage { message: String },

    #[error("Reading standard input failed: {0}")]
    Input(#[source] std::io::Error),

    #[error("Writing standard output failed: {0}")]
    Output(#[source] std::io::Error),

    #[error("Logging setup failed: {message}")]
    Logging { message: String },
}

impl RespStatError {
    /// Usage-family errors are raised before any input is consumed.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            RespStatError::InvalidArgument { .. } | RespStatError::Usage { .. }
        )
    }

    /// A closed downstream pipe (e.g. `| head`) is a normal way for output to end.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(
            self,
            RespStatError::Output(e) if e.kind() == std::io::ErrorKind::BrokenPipe
        )
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_usage() {
            2
        } else if self.is_broken_pipe() {
            0
        } else {
            1
        }
    }
}

/// Why a single record could not yield a status code.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("record is not a valid JSON object: {0}")]
    MalformedRecord(#[source] serde_json::Error),

    #[error("response is empty")]
    EmptyResponse,

    #[error("invalid status line: expected at least 2 fields, found {fields}")]
    MalformedStatusLine { fields: usize },

    #[error("invalid status code '{field}'")]
    InvalidStatusCode {
        field: String,
        #[source]
        source: ParseIntError,
    },

    #[error("status code {value} is outside 100..=599")]
    OutOfRangeStatusCode { value: i64 },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for RespStatError {
    fn user_message(&self) -> String {
        match self {
            RespStatError::InvalidArgument { arg } => {
                format!("Invalid argument '{}'", arg)
            }
            RespStatError::Usage { message } => message.clone(),
            RespStatError::Input(e) => {
                format!("Reading standard input failed: {}", e)
            }
            RespStatError::Output(e) => {
                format!("Writing standard output failed: {}", e)
            }
            RespStatError::Logging { message } => {
                format!("Could not initialise logging: {}", message)
            }
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            RespStatError::InvalidArgument { .. } => Some(
                "Filters are single status codes like '404' or inclusive ranges like '500:599', with every value between 100 and 599.".to_string()
            ),
            RespStatError::Usage { .. } => Some(
                "Use -i on its own to list invalid lines, or pass filters (optionally with -v) to select lines by status code.".to_string()
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RespStatError>;
