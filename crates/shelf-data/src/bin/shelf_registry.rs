//! Shelf registry CLI for appending named shelves.
//!
//! This binary delegates to `shelf_data::shelf_registry_cli` for parsing and
//! update logic, keeping the CLI behaviour testable without spawning a process.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use shelf_data::shelf_registry_cli::{
    CliError, ParseOutcome, apply_update, parse_args, success_message,
};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            print_usage(io::stdout().lock());
            Ok(())
        }
        ParseOutcome::Options(options) => {
            let update = apply_update(&options)?;
            let message = success_message(&update, options.registry_path());
            write_line(&message);
            Ok(())
        }
    }
}

fn print_usage(mut out: impl Write) {
    let usage = concat!(
        "Usage: shelf-registry --registry <path> [options]\n",
        "\n",
        "Options:\n",
        "  --registry <path>       Path to the shelf registry JSON file\n",
        "  --name <name>           Shelf name to add (defaults to the seed prefix)\n",
        "  --seed-prefix <prefix>  Seed prefix for the shelf (defaults to the name)\n",
        "  --book-count <n>        Book count (defaults to 12)\n",
        "  -h, --help              Print this help output\n",
        "\n",
        "At least one of --name or --seed-prefix is required.\n",
    );
    if let Err(err) = out.write_all(usage.as_bytes()) {
        drop(err);
    }
}

fn write_line(message: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
        drop(err);
    }
}
