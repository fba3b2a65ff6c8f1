//! Gzip and plain-text file utility
//!
//! Compresses, decompresses, reverses, capitalizes, and counts the lines or
//! words of a single file. Each requested operation is reported on its own
//! line and a failure never prevents the others from running.

use std::io;
use std::process;

mod opts;

use opts::FileOpsOpts;

use fileops::{run_cli, Error};

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> io::Result<()> {
    let opts = FileOpsOpts::parse();
    let config = opts.config();
    init_logging(config.verbose);

    let stdout = io::stdout();
    let stderr = io::stderr();

    match run_cli(&opts.file, &config, &mut stdout.lock(), &mut stderr.lock()) {
        Ok(summary) => {
            log::debug!(
                "{} succeeded, {} failed",
                summary.succeeded,
                summary.failed
            );
            Ok(())
        }
        Err(err @ Error::MissingInput { .. }) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}
