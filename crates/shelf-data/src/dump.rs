//! Batch rendering behind the `shelf-dump` binary.

use camino::Utf8PathBuf;
use tracing::info;

use crate::config::DumpSettings;
use crate::error::DumpError;
use crate::generator::generate_records;
use crate::registry::{ShelfRegistry, open_registry_dir};

/// Generates the batch selected by `settings` and returns it as
/// pretty-printed JSON.
///
/// The shelf is looked up in the configured registry; its seed prefix drives
/// generation and its book count is used unless `count` overrides it.
///
/// # Errors
///
/// Returns [`DumpError`] if the registry cannot be loaded, the shelf is
/// missing, generation fails or serialization fails.
pub fn render_batch(settings: &DumpSettings) -> Result<String, DumpError> {
    let kind = settings.kind;
    let path = Utf8PathBuf::from_path_buf(settings.registry_path())
        .map_err(|path| DumpError::InvalidPath { path })?;
    let (dir, file_name) = open_registry_dir(&path)?;
    let registry = ShelfRegistry::from_file(&dir, file_name)?;
    let shelf = registry.find_shelf(settings.shelf())?;

    let count = settings.count.unwrap_or_else(|| shelf.book_count());
    let records = generate_records(kind, count, shelf.seed_prefix())?;
    info!(
        shelf = shelf.name(),
        kind = kind.as_str(),
        count = records.len(),
        "rendered batch"
    );

    serde_json::to_string_pretty(&records).map_err(|e| DumpError::Serialize {
        message: e.to_string(),
    })
}
