//! Generated record types.
//!
//! Records are plain values. The generator builds them on demand and never
//! holds on to them, so callers may clone and mutate freely without affecting
//! later generations. Optional fields are omitted from JSON when unset.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::UnknownRecordKind;

/// Reading status of a book on a shelf.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingStatus {
    /// Currently being read.
    Reading,
    /// Read to the end.
    Finished,
    /// Queued for later.
    #[default]
    WantToRead,
}

/// A generated book entry.
///
/// `rating` is only ever set when `status` is [`ReadingStatus::Finished`].
///
/// # Example
///
/// ```
/// use shelf_data::{Book, ReadingStatus};
///
/// let book = Book {
///     id: "trending-1".to_owned(),
///     title: "Quiet Harbour".to_owned(),
///     author: "Author 7".to_owned(),
///     status: ReadingStatus::Reading,
///     rating: None,
///     notes: None,
///     cover_url: None,
///     isbn: None,
///     added_at: chrono::DateTime::default(),
///     page_count: 320,
///     author_bio: String::new(),
///     document_url: None,
/// };
///
/// assert!(book.has_consistent_rating());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Identifier of the form `<seed prefix>-<index>`.
    pub id: String,
    /// Book title.
    pub title: String,
    /// Author display name.
    pub author: String,
    /// Reading status.
    pub status: ReadingStatus,
    /// Star rating from 1 to 5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    /// Free-text reading notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Cover image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// ISBN-like identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,
    /// When the book was added to the shelf.
    pub added_at: DateTime<Utc>,
    /// Number of pages.
    pub page_count: u32,
    /// Short biography of the author.
    pub author_bio: String,
    /// Auxiliary document reference, such as a sample chapter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_url: Option<String>,
}

impl Book {
    /// Returns `true` when the rating is set only for finished books.
    #[must_use]
    pub const fn has_consistent_rating(&self) -> bool {
        match self.rating {
            Some(_) => matches!(self.status, ReadingStatus::Finished),
            None => true,
        }
    }
}

/// A generated member profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Identifier of the form `<seed prefix>-<index>`.
    pub id: String,
    /// Login handle.
    pub username: String,
    /// Human-readable name.
    pub display_name: String,
    /// One-line profile bio.
    pub bio: String,
    /// When the member joined.
    pub joined_at: DateTime<Utc>,
    /// Number of books marked finished.
    pub books_read: u32,
    /// Reward points available to spend.
    pub points_balance: u32,
    /// Favourite genre label.
    pub favourite_genre: String,
}

/// Direction of a reward-points transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Points credited to the member.
    #[default]
    Earn,
    /// Points redeemed by the member.
    Spend,
}

/// A generated reward-points transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardTransaction {
    /// Identifier of the form `txn-<index>`.
    pub id: String,
    /// Whether points were earned or spent.
    pub kind: TransactionKind,
    /// Points moved by the transaction.
    pub amount: u32,
    /// What the points were earned or spent on.
    pub description: String,
    /// When the transaction happened.
    pub occurred_at: DateTime<Utc>,
}

/// Any record the generator can produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "record", rename_all = "kebab-case")]
pub enum SyntheticRecord {
    /// A book entry.
    Book(Book),
    /// A member profile.
    UserProfile(UserProfile),
    /// A reward-points transaction.
    RewardTransaction(RewardTransaction),
}

impl SyntheticRecord {
    /// Returns the record's identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Book(book) => &book.id,
            Self::UserProfile(profile) => &profile.id,
            Self::RewardTransaction(transaction) => &transaction.id,
        }
    }

    /// Returns the kind of record held.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Book(_) => RecordKind::Books,
            Self::UserProfile(_) => RecordKind::Users,
            Self::RewardTransaction(_) => RecordKind::Transactions,
        }
    }
}

/// Selects which record variant a batch contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Book entries.
    #[default]
    Books,
    /// Member profiles.
    Users,
    /// Reward-points transactions.
    Transactions,
}

impl RecordKind {
    /// Returns the lowercase label used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Books => "books",
            Self::Users => "users",
            Self::Transactions => "transactions",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = UnknownRecordKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "books" | "book" => Ok(Self::Books),
            "users" | "user" => Ok(Self::Users),
            "transactions" | "transaction" => Ok(Self::Transactions),
            _ => Err(UnknownRecordKind {
                value: value.to_owned(),
            }),
        }
    }
}
