//! Dump CLI settings loaded via OrthoConfig.
//!
//! Values layer from defaults, configuration files, `SHELF_DATA_*`
//! environment variables and command-line flags.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::record::RecordKind;

const DEFAULT_SHELF: &str = "trending";

fn default_registry_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("shelves.json")
}

/// Configuration values controlling which batch `shelf-dump` prints.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SHELF_DATA")]
pub struct DumpSettings {
    /// Shelf to generate, looked up in the registry.
    pub shelf: Option<String>,
    /// Record kind to print: books, users or transactions.
    #[ortho_config(default = RecordKind::Books)]
    pub kind: RecordKind,
    /// Optional override for the number of records generated.
    pub count: Option<usize>,
    /// Optional registry path override.
    pub registry_path: Option<PathBuf>,
}

impl DumpSettings {
    /// Return the configured shelf name, falling back to the default.
    #[must_use]
    pub fn shelf(&self) -> &str {
        self.shelf.as_deref().unwrap_or(DEFAULT_SHELF)
    }

    /// Return the configured registry path, falling back to the bundled
    /// fixture.
    #[must_use]
    pub fn registry_path(&self) -> PathBuf {
        self.registry_path
            .clone()
            .unwrap_or_else(default_registry_path)
    }
}
