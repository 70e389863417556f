//! Seeded scalar draws.
//!
//! Every generated field comes from one call to [`seeded_scalar`]. The seed
//! for a draw is the sum of the seed prefix's character codes, the record's
//! 1-based index and a fixed per-field offset, so each field of each record
//! reads from its own point on the sine curve.
//!
//! The transform is `frac(sin(seed) * 10000)`. Thresholds in the generator
//! are tuned against this exact distribution, so it must not be swapped for
//! another PRNG.

/// Multiplier applied to the sine before taking the fractional part.
const SINE_MULTIPLIER: f64 = 10_000.0;

/// Maps an integer seed to a reproducible scalar in `[0, 1)`.
///
/// The seed is widened to `f64`, which is exact for magnitudes up to 2^53.
/// A fractional part that rounds up to `1.0` folds back to `0.0`.
///
/// # Examples
///
/// ```
/// use shelf_data::seeded_scalar;
///
/// let value = seeded_scalar(451);
/// assert!((0.0..1.0).contains(&value));
/// assert_eq!(value.to_bits(), seeded_scalar(451).to_bits());
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the draw is defined as a floating-point transform"
)]
#[expect(
    clippy::cast_precision_loss,
    reason = "seeds widen to f64 the way a JavaScript number would"
)]
pub fn seeded_scalar(seed: i64) -> f64 {
    let scaled = (seed as f64).sin() * SINE_MULTIPLIER;
    let fraction = scaled - scaled.floor();
    if fraction < 1.0 { fraction } else { 0.0 }
}

/// Sums the UTF-16 code units of `prefix`.
///
/// This matches the character codes a browser reports, so characters outside
/// the Basic Multilingual Plane contribute both surrogate halves.
///
/// # Examples
///
/// ```
/// use shelf_data::base_seed;
///
/// assert_eq!(base_seed(""), 0);
/// assert_eq!(base_seed("test"), 448);
/// ```
#[must_use]
pub fn base_seed(prefix: &str) -> i64 {
    prefix.encode_utf16().map(i64::from).sum()
}

/// Fields that consume a scalar draw, each with a fixed additive offset.
///
/// Offsets are part of the output contract: changing one changes every
/// record generated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Jitter inside the date window for a book's added timestamp.
    AddedAt,
    /// Digits of the ISBN-like string.
    Isbn,
    /// Book page count.
    PageCount,
    /// Reading status selection.
    Status,
    /// Author number.
    Author,
    /// Whether a finished book carries a rating.
    RatingPresence,
    /// Rating value.
    RatingValue,
    /// Whether notes are attached.
    NotesPresence,
    /// Title table index.
    Title,
    /// Whether a cover reference is attached.
    CoverPresence,
    /// Whether an auxiliary document reference is attached.
    DocumentPresence,
    /// Member first name.
    FirstName,
    /// Member last name.
    LastName,
    /// Member bio line.
    Bio,
    /// Member joined timestamp.
    JoinedAt,
    /// Number of books a member has read.
    BooksRead,
    /// Member reward points balance.
    PointsBalance,
    /// Member favourite genre.
    FavouriteGenre,
    /// Whether a transaction earns or spends points.
    TransactionKind,
    /// Transaction denomination.
    TransactionAmount,
    /// Transaction description.
    TransactionDescription,
    /// Transaction timestamp.
    OccurredAt,
}

impl Field {
    /// Returns the additive offset for this field.
    #[must_use]
    pub const fn offset(self) -> i64 {
        match self {
            Self::AddedAt => 0,
            Self::Isbn => 1,
            Self::PageCount => 2,
            Self::Status => 3,
            Self::Author => 4,
            Self::RatingPresence => 5,
            Self::RatingValue => 6,
            Self::NotesPresence => 7,
            Self::Title => 8,
            Self::CoverPresence => 9,
            Self::DocumentPresence => 10,
            Self::FirstName => 20,
            Self::LastName => 21,
            Self::Bio => 22,
            Self::JoinedAt => 23,
            Self::BooksRead => 24,
            Self::PointsBalance => 25,
            Self::FavouriteGenre => 26,
            Self::TransactionKind => 40,
            Self::TransactionAmount => 41,
            Self::TransactionDescription => 42,
            Self::OccurredAt => 43,
        }
    }
}

/// Draw source bound to one seed prefix.
///
/// Holds only the precomputed base seed, so copies are free and draws never
/// depend on call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Draws {
    base: i64,
}

impl Draws {
    pub(crate) fn new(seed_prefix: &str) -> Self {
        Self {
            base: base_seed(seed_prefix),
        }
    }

    /// Draws the scalar for `field` of the record at `index`.
    pub(crate) fn draw(self, index: usize, field: Field) -> f64 {
        self.draw_shifted(index, field, 0)
    }

    /// Draws with an extra shift, used when a field needs another attempt.
    pub(crate) fn draw_shifted(self, index: usize, field: Field, shift: i64) -> f64 {
        let index = i64::try_from(index).unwrap_or(i64::MAX);
        let seed = self
            .base
            .saturating_add(index)
            .saturating_add(field.offset())
            .saturating_add(shift);
        seeded_scalar(seed)
    }
}

/// Scales a draw onto `0..span`, i.e. `floor(draw * span)`.
///
/// The result is clamped below `span` so a table lookup can never overrun.
#[expect(
    clippy::float_arithmetic,
    reason = "draws are mapped onto integer ranges by scaling"
)]
#[expect(
    clippy::cast_precision_loss,
    reason = "spans are small table lengths and ranges"
)]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the scaled draw lies in [0, span) before truncation"
)]
pub(crate) fn scaled(draw: f64, span: u64) -> u64 {
    if span == 0 {
        return 0;
    }
    let value = (draw * span as f64).floor() as u64;
    value.min(span - 1)
}

/// Picks an entry from a fixed table using `floor(draw * len)`.
pub(crate) fn pick<T: Copy>(draw: f64, table: &[T]) -> Option<T> {
    let len = u64::try_from(table.len()).ok()?;
    let position = usize::try_from(scaled(draw, len)).ok()?;
    table.get(position).copied()
}
