//! Deterministic record generation from seed prefixes.
//!
//! Each field of each record consumes one scalar draw keyed by the seed
//! prefix, the record index and the field's fixed offset. Nothing is cached
//! between calls and the real clock is never read, so the same arguments
//! always produce the same batch.

mod books;
mod transactions;
mod users;

pub use books::{generate_book_batch, sort_books};
pub use transactions::{TRANSACTION_SEED_PREFIX, generate_transaction_batch};
pub use users::generate_user_profiles;

use crate::error::GenerationError;
use crate::record::{RecordKind, SyntheticRecord};

/// Generates a batch of any record kind.
///
/// Transactions always use [`TRANSACTION_SEED_PREFIX`] and ignore
/// `seed_prefix`.
///
/// # Errors
///
/// Returns [`GenerationError`] when member profile generation fails.
///
/// # Example
///
/// ```
/// use shelf_data::{RecordKind, generate_records};
///
/// let records = generate_records(RecordKind::Books, 2, "popular").expect("generated");
///
/// assert_eq!(records.len(), 2);
/// assert!(records.iter().all(|r| r.kind() == RecordKind::Books));
/// ```
pub fn generate_records(
    kind: RecordKind,
    count: usize,
    seed_prefix: &str,
) -> Result<Vec<SyntheticRecord>, GenerationError> {
    let records = match kind {
        RecordKind::Books => generate_book_batch(count, seed_prefix)
            .into_iter()
            .map(SyntheticRecord::Book)
            .collect(),
        RecordKind::Users => generate_user_profiles(count, seed_prefix)?
            .into_iter()
            .map(SyntheticRecord::UserProfile)
            .collect(),
        RecordKind::Transactions => generate_transaction_batch(count)
            .into_iter()
            .map(SyntheticRecord::RewardTransaction)
            .collect(),
    };
    Ok(records)
}
