use crate::config::{Config, ModeRequest};
use crate::error::Result;
use clap::{CommandFactory, Parser};

#[derive(Parser, Debug)]
#[command(name = "respstat")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Count and filter HTTP status codes in line-delimited JSON request logs")]
#[command(
    long_about = "respstat reads JSON records from standard input, one per line, and looks at \
                  the status line of the raw HTTP response stored in each record's \"Resp\" field.\n\n\
                  With no filters, the occurrences of each status code are counted and displayed.\n\
                  With one or more filters, only lines whose status code matches are printed.\n\
                  With -i, only lines whose status code could not be determined are printed."
)]
#[command(after_help = "FILTERS:\n  \
    A filter is a single status code like '200' or an inclusive range like '200:299'.\n  \
    All values must lie between 100 and 599.\n\n\
    EXAMPLES:\n  \
    respstat < requests.jsonl\n  \
    respstat 500:599 < requests.jsonl\n  \
    respstat -v 200 304 < requests.jsonl\n  \
    respstat -i < requests.jsonl")]
pub struct Cli {
    /// Print only lines whose status code could not be extracted
    #[arg(short = 'i', long = "invalid", conflicts_with_all = ["invert", "filters"])]
    pub invalid: bool,

    /// Invert the filter: print lines whose status code matches none of the filters
    #[arg(short = 'v', long)]
    pub invert: bool,

    /// Status codes ('404') or inclusive ranges ('500:599') to print
    #[arg(value_name = "FILTER")]
    pub filters: Vec<String>,

    /// Log verbosity on stderr (--verbose, --verbose --verbose, ...)
    #[arg(long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        Config::from_request(&self.mode_request())
    }

    pub fn mode_request(&self) -> ModeRequest {
        ModeRequest::new()
            .with_invalid_only(self.invalid)
            .with_invert(self.invert)
            .with_filters(self.filters.clone())
    }

    /// The one-line usage synopsis, as clap renders it.
    pub fn usage() -> String {
        Cli::command().render_usage().to_string()
    }
}
