//! Unit tests for the shelf registry CLI helpers.

use std::sync::atomic::{AtomicUsize, Ordering};

use cap_std::{ambient_authority, fs::Dir};
use rstest::{fixture, rstest};

use super::*;
use crate::error::RegistryError;

const VALID_JSON: &str = r#"{
    "version": 1,
    "shelves": [{"name": "trending", "seedPrefix": "trending", "bookCount": 12}]
}"#;

struct RegistryFixture {
    path: Utf8PathBuf,
}

impl RegistryFixture {
    fn path(&self) -> Utf8PathBuf {
        self.path.clone()
    }

    fn load(&self) -> ShelfRegistry {
        let (dir, file_name) = open_registry_dir(&self.path).expect("open registry dir");
        ShelfRegistry::from_file(&dir, file_name).expect("load registry")
    }
}

impl Drop for RegistryFixture {
    fn drop(&mut self) {
        cleanup_path(&self.path);
    }
}

#[fixture]
fn registry_fixture() -> RegistryFixture {
    RegistryFixture {
        path: write_registry(VALID_JSON),
    }
}

fn options_for(path: Utf8PathBuf) -> Options {
    Options {
        registry_path: path,
        name: None,
        seed_prefix: None,
        book_count: None,
    }
}

#[test]
fn parse_args_returns_help_for_help_flag() {
    let args = vec!["--help".to_owned()];

    let outcome = parse_args(args.into_iter()).expect("parse args");

    assert!(matches!(outcome, ParseOutcome::Help));
}

#[test]
fn parse_args_requires_registry_path() {
    let args = vec!["--name".to_owned(), "staff-picks".to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert_eq!(err, CliError::MissingRegistryPath);
}

#[test]
fn parse_args_requires_name_or_seed_prefix() {
    let args = vec![
        "--registry".to_owned(),
        "shelves.json".to_owned(),
        "--book-count".to_owned(),
        "6".to_owned(),
    ];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert_eq!(err, CliError::MissingShelfName);
}

#[rstest]
#[case("--name", "staff-picks")]
#[case("--seed-prefix", "classics")]
fn parse_args_accepts_either_name_flag(#[case] flag: &str, #[case] value: &str) {
    let args = vec![
        "--registry".to_owned(),
        "shelves.json".to_owned(),
        flag.to_owned(),
        value.to_owned(),
    ];

    let outcome = parse_args(args.into_iter()).expect("parse args");

    assert!(matches!(outcome, ParseOutcome::Options(_)));
}

#[rstest]
#[case("--registry")]
#[case("--name")]
#[case("--seed-prefix")]
#[case("--book-count")]
fn parse_args_reports_missing_value(#[case] flag: &'static str) {
    let args = vec![flag.to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert_eq!(err, CliError::MissingValue { flag });
}

#[test]
fn parse_args_reports_unknown_arguments() {
    let args = vec![
        "--registry".to_owned(),
        "shelves.json".to_owned(),
        "--nope".to_owned(),
    ];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert_eq!(
        err,
        CliError::UnknownArgument {
            value: "--nope".to_owned(),
        }
    );
}

#[rstest]
#[case("--book-count", "-3")]
#[case("--book-count", "twelve")]
fn parse_args_reports_invalid_numbers(#[case] flag: &'static str, #[case] raw: &str) {
    let args = vec![
        "--registry".to_owned(),
        "shelves.json".to_owned(),
        "--name".to_owned(),
        "staff-picks".to_owned(),
        flag.to_owned(),
        raw.to_owned(),
    ];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    let CliError::InvalidNumber { flag: got, value, .. } = err else {
        panic!("expected invalid number error");
    };
    assert_eq!(got, flag);
    assert_eq!(value, raw);
}

#[test]
fn parse_args_parses_full_options() {
    let args = vec![
        "--registry".to_owned(),
        "shelves.json".to_owned(),
        "--name".to_owned(),
        "staff-picks".to_owned(),
        "--seed-prefix".to_owned(),
        "staff".to_owned(),
        "--book-count".to_owned(),
        "9".to_owned(),
    ];

    let ParseOutcome::Options(options) = parse_args(args.into_iter()).expect("parse args") else {
        panic!("expected options");
    };

    assert_eq!(options.registry_path, Utf8PathBuf::from("shelves.json"));
    assert_eq!(options.name.as_deref(), Some("staff-picks"));
    assert_eq!(options.seed_prefix.as_deref(), Some("staff"));
    assert_eq!(options.book_count, Some(9));
}

#[rstest]
fn apply_update_appends_explicit_shelf(registry_fixture: RegistryFixture) {
    let options = Options {
        name: Some("staff-picks".to_owned()),
        seed_prefix: Some("staff".to_owned()),
        book_count: Some(4),
        ..options_for(registry_fixture.path())
    };

    let update = apply_update(&options).expect("apply update");

    assert_eq!(
        update,
        Update {
            name: "staff-picks".to_owned(),
            seed_prefix: "staff".to_owned(),
            book_count: 4,
        }
    );
    let registry = registry_fixture.load();
    let shelf = registry.find_shelf("staff-picks").expect("shelf appended");
    assert_eq!(shelf.seed_prefix(), "staff");
    assert_eq!(shelf.book_count(), 4);
    assert_eq!(registry.shelves().len(), 2);
}

#[rstest]
fn apply_update_defaults_seed_prefix_and_count(registry_fixture: RegistryFixture) {
    let options = Options {
        name: Some("new-releases".to_owned()),
        ..options_for(registry_fixture.path())
    };

    let update = apply_update(&options).expect("apply update");

    assert_eq!(update.seed_prefix, "new-releases");
    assert_eq!(update.book_count, DEFAULT_BOOK_COUNT);
}

#[rstest]
fn apply_update_names_shelf_after_seed_prefix(registry_fixture: RegistryFixture) {
    let options = Options {
        seed_prefix: Some("classics".to_owned()),
        ..options_for(registry_fixture.path())
    };

    let update = apply_update(&options).expect("apply update");

    assert_eq!(update.name, "classics");
    assert_eq!(update.seed_prefix, "classics");
    let registry = registry_fixture.load();
    let shelf = registry.find_shelf("classics").expect("shelf appended");
    assert_eq!(shelf.seed_prefix(), "classics");
}

#[rstest]
fn apply_update_requires_name_or_seed_prefix(registry_fixture: RegistryFixture) {
    let err = apply_update(&options_for(registry_fixture.path())).expect_err("expected error");

    assert_eq!(err, CliError::MissingShelfName);
    assert_eq!(registry_fixture.load().shelves().len(), 1);
}

#[rstest]
fn apply_update_reports_duplicate_explicit_name(registry_fixture: RegistryFixture) {
    let options = Options {
        name: Some("trending".to_owned()),
        ..options_for(registry_fixture.path())
    };

    let err = apply_update(&options).expect_err("expected duplicate error");

    let CliError::RegistryError { source } = err else {
        panic!("expected registry error");
    };
    assert_eq!(
        source,
        RegistryError::DuplicateShelfName {
            name: "trending".to_owned(),
        }
    );
}

#[rstest]
#[case(Some("Not A Slug"), None)]
#[case(None, Some("Sci Fi"))]
fn apply_update_rejects_names_that_are_not_slugs(
    registry_fixture: RegistryFixture,
    #[case] name: Option<&str>,
    #[case] seed_prefix: Option<&str>,
) {
    let options = Options {
        name: name.map(str::to_owned),
        seed_prefix: seed_prefix.map(str::to_owned),
        ..options_for(registry_fixture.path())
    };

    let err = apply_update(&options).expect_err("expected invalid name");

    assert!(matches!(
        err,
        CliError::RegistryError {
            source: RegistryError::InvalidShelfName { .. }
        }
    ));
}

#[test]
fn apply_update_reports_registry_io_errors() {
    let path = unique_temp_path("missing.json");
    let options = Options {
        name: Some("staff-picks".to_owned()),
        ..options_for(path.clone())
    };

    let err = apply_update(&options).expect_err("expected error");

    let CliError::RegistryError {
        source: RegistryError::IoError { path: err_path, .. },
    } = err
    else {
        panic!("expected registry IO error");
    };
    assert_eq!(err_path, Utf8PathBuf::from("missing.json"));
    cleanup_path(&path);
}

#[test]
fn apply_update_reports_open_registry_dir_errors() {
    let path = unique_missing_path("shelves.json");
    let options = Options {
        name: Some("staff-picks".to_owned()),
        ..options_for(path.clone())
    };

    let err = apply_update(&options).expect_err("expected error");

    let CliError::RegistryError {
        source: RegistryError::IoError {
            path: err_path,
            message,
        },
    } = err
    else {
        panic!("expected registry IO error");
    };
    assert_eq!(err_path, path);
    assert!(!message.is_empty());
}

#[test]
fn success_message_formats_expected_output() {
    let update = Update {
        name: "staff-picks".to_owned(),
        seed_prefix: "staff".to_owned(),
        book_count: 6,
    };

    let message = success_message(&update, Utf8Path::new("shelves.json"));

    assert_eq!(
        message,
        "Added shelf \"staff-picks\" (seedPrefix=staff, bookCount=6) to shelves.json"
    );
}

fn write_registry(json: &str) -> Utf8PathBuf {
    let path = unique_temp_path("shelves.json");
    let (dir, file_name) = open_registry_dir(&path).expect("open registry dir");
    dir.write(file_name, json).expect("write registry");
    path
}

fn cleanup_path(path: &Utf8Path) {
    if let Some(parent) = path.parent() {
        let root = Dir::open_ambient_dir(".", ambient_authority()).expect("open workspace dir");
        drop(root.remove_dir_all(parent));
    }
}

fn unique_temp_path(file_name: &str) -> Utf8PathBuf {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let process_id = std::process::id();
    let dir = Utf8PathBuf::from("target")
        .join("shelf-data-tests")
        .join(format!("shelf-registry-cli-{process_id}-{counter}"));
    let root = Dir::open_ambient_dir(".", ambient_authority()).expect("open workspace dir");
    root.create_dir_all(&dir).expect("create temp dir");
    dir.join(file_name)
}

fn unique_missing_path(file_name: &str) -> Utf8PathBuf {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    Utf8PathBuf::from("target")
        .join("shelf-data-tests")
        .join(format!("shelf-registry-cli-missing-{counter}"))
        .join(file_name)
}
