//! CLI support for appending shelves to the shelf registry.
//!
//! The `shelf-registry` binary delegates to these functions so parsing and
//! the update flow can be exercised without spawning a process.

mod error;

use std::fmt;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;

pub use error::CliError;

use crate::registry::{ShelfDefinition, ShelfRegistry, open_registry_dir};

/// Book count stored when `--book-count` is omitted.
pub const DEFAULT_BOOK_COUNT: usize = 12;

/// Parsed options for the shelf registry CLI.
#[derive(Debug, Clone)]
pub struct Options {
    registry_path: Utf8PathBuf,
    name: Option<String>,
    seed_prefix: Option<String>,
    book_count: Option<usize>,
}

impl Options {
    /// Returns the registry path supplied for the update.
    ///
    /// # Example
    ///
    /// ```
    /// use shelf_data::shelf_registry_cli::{ParseOutcome, parse_args};
    ///
    /// let args = vec![
    ///     "--registry".to_string(),
    ///     "shelves.json".to_string(),
    ///     "--seed-prefix".to_string(),
    ///     "classics".to_string(),
    /// ];
    /// let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse") else {
    ///     panic!("expected options");
    /// };
    ///
    /// assert_eq!(options.registry_path(), "shelves.json");
    /// ```
    #[must_use]
    pub fn registry_path(&self) -> &Utf8Path {
        &self.registry_path
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Continue with the parsed options.
    Options(Options),
}

/// Result of adding a shelf to the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Update {
    /// Name of the shelf that was added.
    pub name: String,
    /// Seed prefix stored for the shelf.
    pub seed_prefix: String,
    /// Book count stored for the shelf.
    pub book_count: usize,
}

/// Parses CLI arguments into an update plan.
///
/// # Errors
///
/// Returns [`CliError`] when the registry path is missing, neither `--name`
/// nor `--seed-prefix` is given, a flag is unknown or a numeric value cannot
/// be parsed. Negative counts fail to parse.
///
/// # Example
///
/// ```
/// use shelf_data::shelf_registry_cli::{ParseOutcome, parse_args};
///
/// let args = vec![
///     "--registry".to_string(),
///     "shelves.json".to_string(),
///     "--name".to_string(),
///     "staff-picks".to_string(),
/// ];
///
/// let outcome = parse_args(args.into_iter()).expect("parse args");
/// assert!(matches!(outcome, ParseOutcome::Options(_)));
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut registry_path: Option<Utf8PathBuf> = None;
    let mut name: Option<String> = None;
    let mut seed_prefix: Option<String> = None;
    let mut book_count: Option<usize> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "--registry" => {
                let value = next_value(&mut args, "--registry")?;
                registry_path = Some(Utf8PathBuf::from(value));
            }
            "--name" => name = Some(next_value(&mut args, "--name")?),
            "--seed-prefix" => seed_prefix = Some(next_value(&mut args, "--seed-prefix")?),
            "--book-count" => {
                let value = next_value(&mut args, "--book-count")?;
                book_count = Some(parse_number(&value, "--book-count")?);
            }
            _ => return Err(CliError::UnknownArgument { value: arg }),
        }
    }

    let resolved_registry_path = registry_path.ok_or(CliError::MissingRegistryPath)?;
    if name.is_none() && seed_prefix.is_none() {
        return Err(CliError::MissingShelfName);
    }
    Ok(ParseOutcome::Options(Options {
        registry_path: resolved_registry_path,
        name,
        seed_prefix,
        book_count,
    }))
}

/// Applies the registry update and returns the added shelf details.
///
/// The shelf name and seed prefix default to each other, so a category shelf
/// such as `--seed-prefix classics` is stored as `classics`.
///
/// # Errors
///
/// Returns [`CliError`] when the registry cannot be read, the name is taken
/// or not a slug, or the updated registry cannot be written.
pub fn apply_update(options: &Options) -> Result<Update, CliError> {
    let (name, seed_prefix) = match (&options.name, &options.seed_prefix) {
        (Some(name), Some(prefix)) => (name.clone(), prefix.clone()),
        (Some(name), None) => (name.clone(), name.clone()),
        (None, Some(prefix)) => (prefix.clone(), prefix.clone()),
        (None, None) => return Err(CliError::MissingShelfName),
    };
    let (dir, file_name) = open_registry_dir(&options.registry_path)?;
    let registry = ShelfRegistry::from_file(&dir, file_name)?;
    let book_count = options.book_count.unwrap_or(DEFAULT_BOOK_COUNT);
    let shelf = ShelfDefinition::new(name.clone(), seed_prefix.clone(), book_count);
    let updated = registry.append_shelf(shelf)?;

    updated.write_to_file(&dir, file_name)?;
    info!(
        shelf = %name,
        seed_prefix = %seed_prefix,
        book_count,
        registry = %options.registry_path,
        "appended shelf to registry"
    );

    Ok(Update {
        name,
        seed_prefix,
        book_count,
    })
}

/// Formats the success message emitted by the CLI.
///
/// # Example
///
/// ```
/// use camino::Utf8Path;
/// use shelf_data::shelf_registry_cli::{Update, success_message};
///
/// let update = Update {
///     name: "staff-picks".to_string(),
///     seed_prefix: "staff".to_string(),
///     book_count: 6,
/// };
/// let message = success_message(&update, Utf8Path::new("shelves.json"));
///
/// assert!(message.contains("staff-picks"));
/// ```
#[must_use]
pub fn success_message(update: &Update, registry_path: &Utf8Path) -> String {
    format!(
        "Added shelf \"{}\" (seedPrefix={}, bookCount={}) to {}",
        update.name, update.seed_prefix, update.book_count, registry_path
    )
}

fn next_value<I>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { flag })
}

fn parse_number<T>(value: &str, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        flag,
        value: value.to_owned(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests;
