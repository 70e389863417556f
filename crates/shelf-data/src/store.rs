//! Key-value persistence for generated batches.
//!
//! The front end caches generated shelves as serialized JSON text under
//! string keys. [`KeyValueStore`] is that port; [`MemoryStore`] and
//! [`DirStore`] are adapters. [`ShelfCache`] layers the load policy on top:
//! cached state that is missing, unreadable or malformed is logged and
//! replaced by a freshly generated batch, never surfaced as a failure.

use std::collections::HashMap;
use std::io;
use std::sync::{Mutex, PoisonError};

use camino::Utf8PathBuf;
use cap_std::fs::Dir;
use tracing::{debug, warn};

use crate::atomic_io::write_atomic;
use crate::error::StoreError;
use crate::generator::generate_book_batch;
use crate::record::Book;
use crate::validation::is_valid_shelf_name;

/// String-keyed storage for serialized values.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the key is invalid or the read fails.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the key is invalid or the write fails.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store keeping one `<key>.json` file per key inside a directory.
///
/// Keys must be shelf-name slugs so they map onto plain file names.
#[derive(Debug)]
pub struct DirStore {
    dir: Dir,
}

impl DirStore {
    /// Wraps an open capability directory.
    #[must_use]
    pub const fn new(dir: Dir) -> Self {
        Self { dir }
    }

    fn file_name(key: &str) -> Result<Utf8PathBuf, StoreError> {
        if is_valid_shelf_name(key) {
            Ok(Utf8PathBuf::from(format!("{key}.json")))
        } else {
            Err(StoreError::InvalidKey {
                key: key.to_owned(),
            })
        }
    }
}

impl KeyValueStore for DirStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let file_name = Self::file_name(key)?;
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::ReadError {
                key: key.to_owned(),
                message: err.to_string(),
            }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let file_name = Self::file_name(key)?;
        write_atomic(&self.dir, &file_name, value).map_err(|err| StoreError::WriteError {
            key: key.to_owned(),
            message: err.to_string(),
        })
    }
}

/// Loads shelves from a store, regenerating them when the cache is unusable.
#[derive(Debug)]
pub struct ShelfCache<S> {
    store: S,
}

impl<S: KeyValueStore> ShelfCache<S> {
    /// Creates a cache over `store`.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the books cached under `key`, or generates and caches
    /// `count` books for `seed_prefix` when the entry is missing, unreadable
    /// or not a valid book list.
    ///
    /// A cached list is returned as stored, so edits persisted by callers
    /// survive. Store failures are logged and never returned.
    ///
    /// # Example
    ///
    /// ```
    /// use shelf_data::{KeyValueStore, MemoryStore, ShelfCache, generate_book_batch};
    ///
    /// let cache = ShelfCache::new(MemoryStore::new());
    /// cache.store().set("trending", "{not json").expect("memory store accepts writes");
    ///
    /// let books = cache.load_books("trending", 4, "trending");
    ///
    /// assert_eq!(books, generate_book_batch(4, "trending"));
    /// ```
    #[must_use]
    pub fn load_books(&self, key: &str, count: usize, seed_prefix: &str) -> Vec<Book> {
        match self.store.get(key) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Book>>(&json) {
                Ok(books) => {
                    debug!(key, count = books.len(), "loaded cached shelf");
                    return books;
                }
                Err(err) => {
                    warn!(key, error = %err, "cached shelf is malformed; regenerating");
                }
            },
            Ok(None) => debug!(key, "no cached shelf; generating"),
            Err(err) => warn!(key, error = %err, "failed to read cached shelf; regenerating"),
        }

        let books = generate_book_batch(count, seed_prefix);
        self.save_books(key, &books);
        books
    }

    /// Persists `books` under `key`, logging failures.
    pub fn save_books(&self, key: &str, books: &[Book]) {
        let json = match serde_json::to_string(books) {
            Ok(json) => json,
            Err(err) => {
                warn!(key, error = %err, "failed to serialize shelf");
                return;
            }
        };
        if let Err(err) = self.store.set(key, &json) {
            warn!(key, error = %err, "failed to persist shelf");
        }
    }
}
