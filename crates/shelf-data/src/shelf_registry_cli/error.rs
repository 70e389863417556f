//! Failures of the `shelf-registry` command.

use thiserror::Error;

use crate::error::RegistryError;

/// Errors raised while parsing `shelf-registry` arguments or applying the
/// update.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// `--registry` was not given.
    #[error("--registry <path> is required")]
    MissingRegistryPath,
    /// Neither `--name` nor `--seed-prefix` was given.
    #[error("a shelf needs --name or --seed-prefix")]
    MissingShelfName,
    /// The last flag on the command line had no value.
    #[error("{flag} expects a value")]
    MissingValue {
        /// Flag left without a value.
        flag: &'static str,
    },
    /// The argument is not a known flag.
    #[error("unrecognised argument '{value}'")]
    UnknownArgument {
        /// The rejected argument.
        value: String,
    },
    /// A count could not be parsed as a non-negative integer.
    #[error("{flag} takes a non-negative integer, got '{value}': {message}")]
    InvalidNumber {
        /// Flag carrying the value.
        flag: &'static str,
        /// Text supplied on the command line.
        value: String,
        /// Parser message.
        message: String,
    },
    /// Loading, updating or saving the registry failed.
    #[error("shelf registry update failed: {source}")]
    RegistryError {
        /// Underlying registry error.
        #[from]
        #[source]
        source: RegistryError,
    },
}
