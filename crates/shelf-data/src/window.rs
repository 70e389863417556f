//! Fixed historical date window for generated timestamps.
//!
//! Generated instants never depend on the real clock. Each one is placed
//! inside `[WINDOW_START_MILLIS, WINDOW_END_MILLIS)` by a scalar draw, so a
//! seed maps to the same timestamp on any day the generator runs.

use chrono::{DateTime, Utc};

/// Window start: 2023-01-01T00:00:00Z in Unix milliseconds.
pub const WINDOW_START_MILLIS: i64 = 1_672_531_200_000;

/// Window end: 2025-01-01T00:00:00Z in Unix milliseconds.
pub const WINDOW_END_MILLIS: i64 = 1_735_689_600_000;

/// Maps a scalar draw onto the window.
///
/// Computes `start + trunc(draw * (end - start))` in milliseconds, the same
/// truncation a browser `Date` applies to a fractional millisecond value.
///
/// # Examples
///
/// ```
/// use shelf_data::{WINDOW_START_MILLIS, timestamp_in_window};
///
/// let start = timestamp_in_window(0.0);
/// assert_eq!(start.timestamp_millis(), WINDOW_START_MILLIS);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the offset is a fraction of the window span"
)]
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    reason = "the span fits exactly in f64 and the product stays below it"
)]
pub fn timestamp_in_window(draw: f64) -> DateTime<Utc> {
    let span = WINDOW_END_MILLIS - WINDOW_START_MILLIS;
    let offset = ((draw * span as f64) as i64).clamp(0, span - 1);
    DateTime::from_timestamp_millis(WINDOW_START_MILLIS + offset).unwrap_or_default()
}

/// Returns `true` when `instant` falls inside the window.
#[must_use]
pub fn is_within_window(instant: &DateTime<Utc>) -> bool {
    (WINDOW_START_MILLIS..WINDOW_END_MILLIS).contains(&instant.timestamp_millis())
}
