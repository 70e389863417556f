//! Prints a generated batch as JSON.
//!
//! Settings layer from `SHELF_DATA_*` environment variables, configuration
//! files and flags; see [`shelf_data::DumpSettings`].

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use shelf_data::{DumpError, DumpSettings, render_batch};
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
        Ok(json) => {
            if let Err(err) = writeln!(io::stdout().lock(), "{json}") {
                drop(err);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<String, DumpError> {
    let settings =
        DumpSettings::load_from_iter(env::args_os()).map_err(|err| DumpError::Config {
            message: err.to_string(),
        })?;
    render_batch(&settings)
}
