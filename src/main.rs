use clap::Parser;
use respstat::{logging, Cli, Diagnostics, RespStat, RespStatError};
use std::io::{self, BufWriter};
use std::process;
use tracing::debug;

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.verbose) {
        print_startup_error(&e);
        return e.exit_code();
    }

    // Filters and mode conflicts are validated before any input is read
    let respstat = match RespStat::from_cli(&cli) {
        Ok(respstat) => respstat,
        Err(e) => {
            print_startup_error(&e);
            return e.exit_code();
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match respstat.run(stdin.lock(), BufWriter::new(stdout.lock())) {
        Ok(summary) => {
            debug!(
                mode = respstat.config().mode.name(),
                lines_read = summary.lines_read,
                lines_emitted = summary.lines_emitted,
                invalid_lines = summary.invalid_lines,
                "finished"
            );
            0
        }
        Err(e) => {
            if e.is_broken_pipe() {
                debug!("output closed early");
            } else {
                respstat.handle_error(&e);
            }
            e.exit_code()
        }
    }
}

fn print_startup_error(error: &RespStatError) {
    Diagnostics::new().print_user_friendly_error(error, Some(Cli::usage().as_str()));
}
