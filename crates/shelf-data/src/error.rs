//! Error types for the shelf-data crate.
//!
//! Each fallible surface gets its own semantic enum built with `thiserror`.
//! Book and transaction generation are infallible and have no error type.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when parsing, querying or writing a shelf registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The registry file could not be read.
    #[error("failed to read registry file at '{path}': {message}")]
    IoError {
        /// Path to the registry file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The registry JSON is malformed or missing required fields.
    #[error("invalid registry JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The registry version is not supported.
    #[error("unsupported registry version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the registry.
        actual: u32,
    },

    /// A shelf name is not a lowercase slug.
    #[error("invalid shelf name at index {index}: '{value}'")]
    InvalidShelfName {
        /// Index of the shelf in the array.
        index: usize,
        /// The rejected name.
        value: String,
    },

    /// The registry contains no shelf definitions.
    #[error("registry contains no shelf definitions")]
    EmptyShelves,

    /// The requested shelf was not found in the registry.
    #[error("shelf '{name}' not found in registry")]
    ShelfNotFound {
        /// The shelf name that was not found.
        name: String,
    },

    /// A shelf with the same name already exists.
    #[error("shelf '{name}' already exists in registry")]
    DuplicateShelfName {
        /// The duplicated shelf name.
        name: String,
    },

    /// The registry could not be serialized.
    #[error("failed to serialize registry: {message}")]
    SerializeError {
        /// Description of the serialization error.
        message: String,
    },

    /// The registry file could not be written.
    #[error("failed to write registry file at '{path}': {message}")]
    WriteError {
        /// Path that failed to write.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}

/// Errors that can occur while generating member profiles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// No candidate username passed validation within the attempt budget.
    #[error("failed to generate valid username after {max_attempts} attempts")]
    UsernameGenerationFailed {
        /// Number of attempts made before giving up.
        max_attempts: usize,
    },
}

/// Errors raised by key-value store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The key cannot be used as a storage slot.
    #[error("invalid store key '{key}'")]
    InvalidKey {
        /// The rejected key.
        key: String,
    },

    /// Reading a value failed.
    #[error("failed to read store key '{key}': {message}")]
    ReadError {
        /// Key being read.
        key: String,
        /// Description of the failure.
        message: String,
    },

    /// Writing a value failed.
    #[error("failed to write store key '{key}': {message}")]
    WriteError {
        /// Key being written.
        key: String,
        /// Description of the failure.
        message: String,
    },
}

/// Error returned when a record kind label is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown record kind '{value}'; expected books, users or transactions")]
pub struct UnknownRecordKind {
    /// The label that failed to parse.
    pub value: String,
}

/// Errors raised while rendering a batch for `shelf-dump`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DumpError {
    /// Settings could not be loaded from flags, environment or files.
    #[error("failed to load dump settings: {message}")]
    Config {
        /// Description of the configuration failure.
        message: String,
    },

    /// The registry path is not valid UTF-8.
    #[error("registry path '{}' is not valid UTF-8", path.display())]
    InvalidPath {
        /// The rejected path.
        path: PathBuf,
    },

    /// The registry could not be loaded or the shelf was missing.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Record generation failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// The batch could not be serialized.
    #[error("failed to serialize records: {message}")]
    Serialize {
        /// Description of the serialization failure.
        message: String,
    },
}
