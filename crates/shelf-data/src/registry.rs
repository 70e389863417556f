//! Shelf registry types and JSON persistence.
//!
//! The registry names the shelves the front end renders. Each shelf pairs a
//! slug with the seed prefix its books are generated from and the number of
//! books to show. Registries are loaded from and written back to JSON inside
//! a capability directory.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde::{Deserialize, Serialize};

use crate::atomic_io::write_atomic;
use crate::error::RegistryError;
use crate::validation::is_valid_shelf_name;

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// A registry of named shelves.
///
/// # Example
///
/// ```
/// use shelf_data::ShelfRegistry;
///
/// let json = r#"{
///     "version": 1,
///     "shelves": [
///         {"name": "trending", "bookCount": 12},
///         {"name": "staff-picks", "seedPrefix": "staff", "bookCount": 6}
///     ]
/// }"#;
///
/// let registry = ShelfRegistry::from_json(json).expect("valid registry");
/// let shelf = registry.find_shelf("staff-picks").expect("shelf exists");
///
/// assert_eq!(registry.shelves().len(), 2);
/// assert_eq!(shelf.seed_prefix(), "staff");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfRegistry {
    version: u32,
    shelves: Vec<ShelfDefinition>,
}

impl ShelfRegistry {
    /// Parses a shelf registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed or missing required fields
    /// - The version is unsupported
    /// - The shelves array is empty
    /// - A shelf name is not a valid slug
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawShelfRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a shelf registry from `path` inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::IoError`] if the file cannot be read, or any
    /// error [`ShelfRegistry::from_json`] reports.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, RegistryError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| RegistryError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawShelfRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.shelves.is_empty() {
            return Err(RegistryError::EmptyShelves);
        }

        let mut shelves: Vec<ShelfDefinition> = Vec::with_capacity(raw.shelves.len());
        for (index, shelf) in raw.shelves.into_iter().enumerate() {
            if !is_valid_shelf_name(&shelf.name) {
                return Err(RegistryError::InvalidShelfName {
                    index,
                    value: shelf.name,
                });
            }
            if shelves.iter().any(|existing| existing.name == shelf.name) {
                return Err(RegistryError::DuplicateShelfName { name: shelf.name });
            }
            let seed_prefix = shelf.seed_prefix.unwrap_or_else(|| shelf.name.clone());
            shelves.push(ShelfDefinition {
                name: shelf.name,
                seed_prefix,
                book_count: shelf.book_count,
            });
        }

        Ok(Self {
            version: raw.version,
            shelves,
        })
    }

    /// Returns the registry version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns all shelf definitions in file order.
    #[must_use]
    pub fn shelves(&self) -> &[ShelfDefinition] {
        &self.shelves
    }

    /// Finds a shelf definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ShelfNotFound`] if no shelf has that name.
    pub fn find_shelf(&self, name: &str) -> Result<&ShelfDefinition, RegistryError> {
        self.shelves
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RegistryError::ShelfNotFound {
                name: name.to_owned(),
            })
    }

    /// Returns a copy of the registry with `shelf` appended.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidShelfName`] if the name is not a slug,
    /// or [`RegistryError::DuplicateShelfName`] if it is already taken.
    pub fn append_shelf(&self, shelf: ShelfDefinition) -> Result<Self, RegistryError> {
        if !is_valid_shelf_name(&shelf.name) {
            return Err(RegistryError::InvalidShelfName {
                index: self.shelves.len(),
                value: shelf.name,
            });
        }
        if self.shelves.iter().any(|s| s.name == shelf.name) {
            return Err(RegistryError::DuplicateShelfName { name: shelf.name });
        }

        let mut shelves = self.shelves.clone();
        shelves.push(shelf);
        Ok(Self {
            version: self.version,
            shelves,
        })
    }

    /// Serializes the registry as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SerializeError`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, RegistryError> {
        serde_json::to_string_pretty(&self.to_raw()).map_err(|e| RegistryError::SerializeError {
            message: e.to_string(),
        })
    }

    /// Writes the registry to `path` inside `dir`, replacing it atomically.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::SerializeError`] or
    /// [`RegistryError::WriteError`] if the registry cannot be written.
    pub fn write_to_file(&self, dir: &Dir, path: &Utf8Path) -> Result<(), RegistryError> {
        let mut json = self.to_json_pretty()?;
        json.push('\n');
        write_atomic(dir, path, &json).map_err(|e| RegistryError::WriteError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn to_raw(&self) -> RawShelfRegistry {
        RawShelfRegistry {
            version: self.version,
            shelves: self
                .shelves
                .iter()
                .map(|s| RawShelfDefinition {
                    name: s.name.clone(),
                    seed_prefix: Some(s.seed_prefix.clone()),
                    book_count: s.book_count,
                })
                .collect(),
        }
    }
}

/// A named shelf of generated books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfDefinition {
    name: String,
    seed_prefix: String,
    book_count: usize,
}

impl ShelfDefinition {
    /// Creates a shelf definition.
    ///
    /// The name is validated when the shelf is added to a registry.
    #[must_use]
    pub const fn new(name: String, seed_prefix: String, book_count: usize) -> Self {
        Self {
            name,
            seed_prefix,
            book_count,
        }
    }

    /// Returns the shelf name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the seed prefix books are generated from.
    #[must_use]
    pub fn seed_prefix(&self) -> &str {
        &self.seed_prefix
    }

    /// Returns the number of books on the shelf.
    #[must_use]
    pub const fn book_count(&self) -> usize {
        self.book_count
    }
}

/// Opens the directory holding the registry at `path` and returns it with
/// the registry's file name.
///
/// A bare file name resolves against the working directory.
pub(crate) fn open_registry_dir(path: &Utf8Path) -> Result<(Dir, &Utf8Path), RegistryError> {
    let file_name = path
        .file_name()
        .map(Utf8Path::new)
        .ok_or_else(|| RegistryError::IoError {
            path: path.to_path_buf(),
            message: "registry path has no file name".to_owned(),
        })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|e| {
        RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;
    Ok((dir, file_name))
}

/// Raw JSON representation for (de)serialization.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawShelfRegistry {
    version: u32,
    shelves: Vec<RawShelfDefinition>,
}

/// Raw JSON representation of a shelf definition.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawShelfDefinition {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seed_prefix: Option<String>,
    book_count: usize,
}
