//! Reward-points transaction history generation.

use tracing::debug;

use crate::record::{RewardTransaction, TransactionKind};
use crate::scalar::{Draws, Field, pick};
use crate::window::timestamp_in_window;

/// Seed prefix used for every transaction batch.
pub const TRANSACTION_SEED_PREFIX: &str = "rewards";

/// A transaction earns points when the draw exceeds this (about 60%).
const EARN_THRESHOLD: f64 = 0.4;

const EARN_AMOUNTS: [u32; 4] = [10, 25, 50, 100];
const SPEND_AMOUNTS: [u32; 4] = [50, 100, 200, 500];

const EARN_DESCRIPTIONS: [&str; 5] = [
    "Finished a book",
    "Wrote a review",
    "Completed a reading challenge",
    "Daily reading streak",
    "Invited a friend",
];

const SPEND_DESCRIPTIONS: [&str; 4] = [
    "Redeemed bookstore voucher",
    "Unlocked premium badge",
    "Donated to library fund",
    "Redeemed audiobook credit",
];

/// Generates `count` reward transactions from the fixed rewards seed.
///
/// Transaction `i` (1-based) has id `"txn-<i>"`. The batch reads as a history
/// feed: newest first, with ties kept in index order.
///
/// # Example
///
/// ```
/// use shelf_data::generate_transaction_batch;
///
/// let history = generate_transaction_batch(5);
///
/// assert_eq!(history.len(), 5);
/// assert!(history.windows(2).all(|w| match w {
///     [newer, older] => newer.occurred_at >= older.occurred_at,
///     _ => true,
/// }));
/// ```
#[must_use]
pub fn generate_transaction_batch(count: usize) -> Vec<RewardTransaction> {
    let draws = Draws::new(TRANSACTION_SEED_PREFIX);
    let mut transactions: Vec<RewardTransaction> = (1..=count)
        .map(|index| build_transaction(draws, index))
        .collect();
    transactions.sort_by(|left, right| right.occurred_at.cmp(&left.occurred_at));

    debug!(
        kind = "transactions",
        seed_prefix = TRANSACTION_SEED_PREFIX,
        count,
        "generated batch"
    );
    transactions
}

fn build_transaction(draws: Draws, index: usize) -> RewardTransaction {
    let kind = if draws.draw(index, Field::TransactionKind) > EARN_THRESHOLD {
        TransactionKind::Earn
    } else {
        TransactionKind::Spend
    };
    let (amounts, descriptions): (&[u32], &[&str]) = match kind {
        TransactionKind::Earn => (EARN_AMOUNTS.as_slice(), EARN_DESCRIPTIONS.as_slice()),
        TransactionKind::Spend => (SPEND_AMOUNTS.as_slice(), SPEND_DESCRIPTIONS.as_slice()),
    };

    RewardTransaction {
        id: format!("txn-{index}"),
        kind,
        amount: pick(draws.draw(index, Field::TransactionAmount), amounts).unwrap_or_default(),
        description: pick(draws.draw(index, Field::TransactionDescription), descriptions)
            .unwrap_or_default()
            .to_owned(),
        occurred_at: timestamp_in_window(draws.draw(index, Field::OccurredAt)),
    }
}
