//! Deterministic mock records for the reading-tracker front end.
//!
//! Every book, member profile and reward transaction is derived from a
//! textual seed prefix and a record index through a sine-based scalar draw.
//! The same prefix and count always produce the same batch, on any machine
//! and at any time, which keeps shelves stable across reloads and makes the
//! output easy to assert against in tests.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Generating books, member profiles and reward transactions
//! - Loading and appending to a JSON shelf registry
//! - Caching generated shelves through a key-value store port
//! - Rendering a configured batch as JSON for the `shelf-dump` binary
//!
//! # Example
//!
//! ```
//! use shelf_data::{ShelfRegistry, generate_book_batch};
//!
//! let json = r#"{
//!     "version": 1,
//!     "shelves": [{"name": "trending", "bookCount": 3}]
//! }"#;
//!
//! let registry = ShelfRegistry::from_json(json).expect("valid registry");
//! let shelf = registry.find_shelf("trending").expect("shelf exists");
//! let books = generate_book_batch(shelf.book_count(), shelf.seed_prefix());
//!
//! assert_eq!(books.len(), 3);
//! assert!(books.iter().all(|book| book.has_consistent_rating()));
//! ```

mod atomic_io;
mod config;
mod dump;
mod error;
mod generator;
mod record;
mod registry;
mod scalar;
pub mod shelf_registry_cli;
mod store;
mod validation;
mod window;

pub use config::DumpSettings;
pub use dump::render_batch;
pub use error::{DumpError, GenerationError, RegistryError, StoreError, UnknownRecordKind};
pub use generator::{
    TRANSACTION_SEED_PREFIX, generate_book_batch, generate_records, generate_transaction_batch,
    generate_user_profiles, sort_books,
};
pub use record::{
    Book, ReadingStatus, RecordKind, RewardTransaction, SyntheticRecord, TransactionKind,
    UserProfile,
};
pub use registry::{ShelfDefinition, ShelfRegistry};
pub use scalar::{Field, base_seed, seeded_scalar};
pub use store::{DirStore, KeyValueStore, MemoryStore, ShelfCache};
pub use validation::{
    SHELF_NAME_MAX, USERNAME_MAX, USERNAME_MIN, is_valid_shelf_name, is_valid_username,
};
pub use window::{WINDOW_END_MILLIS, WINDOW_START_MILLIS, is_within_window, timestamp_in_window};
