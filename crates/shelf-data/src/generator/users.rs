//! Member profile generation.
//!
//! Names come from fake's fixed English name tables, indexed by scalar draws
//! rather than sampled through an RNG, so profiles stay reproducible.

use fake::locales::{Data, EN};
use tracing::debug;

use crate::error::GenerationError;
use crate::record::UserProfile;
use crate::scalar::{Draws, Field, pick, scaled};
use crate::validation::{USERNAME_MAX, is_valid_username, sanitize_username};
use crate::window::timestamp_in_window;

/// Maximum number of name draws tried before giving up on a username.
const MAX_USERNAME_ATTEMPTS: usize = 8;

/// Seed shift between successive username attempts.
const ATTEMPT_SHIFT: i64 = 100;

const BOOKS_READ_SPAN: u64 = 200;
const POINTS_SPAN: u64 = 5_000;

const BIOS: [&str; 8] = [
    "Reads a chapter every night before bed.",
    "Never leaves home without a paperback.",
    "Working through every classic on the list.",
    "Collects first editions and dog-eared favourites.",
    "Book club host and tireless recommender.",
    "Prefers audiobooks on the morning commute.",
    "Always halfway through three books at once.",
    "Annotates margins and argues with authors.",
];

const GENRES: [&str; 10] = [
    "Literary Fiction",
    "Mystery",
    "Science Fiction",
    "Fantasy",
    "Romance",
    "Historical Fiction",
    "Biography",
    "Poetry",
    "Thriller",
    "Non-Fiction",
];

/// Generates `count` member profiles for `seed_prefix`.
///
/// Profile `i` (1-based) has id `"<seed_prefix>-<i>"`; profiles keep index
/// order.
///
/// # Errors
///
/// Returns [`GenerationError::UsernameGenerationFailed`] if no drawn name
/// yields a valid username within the attempt budget.
///
/// # Example
///
/// ```
/// use shelf_data::{generate_user_profiles, is_valid_username};
///
/// let members = generate_user_profiles(4, "book-club").expect("profiles generate");
///
/// assert_eq!(members.len(), 4);
/// assert!(members.iter().all(|m| is_valid_username(&m.username)));
/// ```
pub fn generate_user_profiles(
    count: usize,
    seed_prefix: &str,
) -> Result<Vec<UserProfile>, GenerationError> {
    let draws = Draws::new(seed_prefix);
    let profiles = (1..=count)
        .map(|index| build_profile(draws, seed_prefix, index))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(kind = "users", seed_prefix, count, "generated batch");
    Ok(profiles)
}

fn build_profile(
    draws: Draws,
    seed_prefix: &str,
    index: usize,
) -> Result<UserProfile, GenerationError> {
    let identity = draw_identity(draws, index)?;

    let books_read =
        u32::try_from(scaled(draws.draw(index, Field::BooksRead), BOOKS_READ_SPAN))
            .unwrap_or_default();
    let points_balance =
        u32::try_from(scaled(draws.draw(index, Field::PointsBalance), POINTS_SPAN))
            .unwrap_or_default();

    Ok(UserProfile {
        id: format!("{seed_prefix}-{index}"),
        username: identity.username,
        display_name: format!("{} {}", identity.first, identity.last),
        bio: pick(draws.draw(index, Field::Bio), &BIOS)
            .unwrap_or_default()
            .to_owned(),
        joined_at: timestamp_in_window(draws.draw(index, Field::JoinedAt)),
        books_read,
        points_balance,
        favourite_genre: pick(draws.draw(index, Field::FavouriteGenre), &GENRES)
            .unwrap_or_default()
            .to_owned(),
    })
}

struct Identity {
    first: &'static str,
    last: &'static str,
    username: String,
}

/// Draws first and last names until they form a valid username.
fn draw_identity(draws: Draws, index: usize) -> Result<Identity, GenerationError> {
    let mut shift = 0;
    for _ in 0..MAX_USERNAME_ATTEMPTS {
        let first_name = pick(
            draws.draw_shifted(index, Field::FirstName, shift),
            <EN as Data>::NAME_FIRST_NAME,
        );
        let last_name = pick(
            draws.draw_shifted(index, Field::LastName, shift),
            <EN as Data>::NAME_LAST_NAME,
        );
        shift += ATTEMPT_SHIFT;

        let (Some(first), Some(last)) = (first_name, last_name) else {
            continue;
        };
        let username = username_candidate(first, last, index);
        if is_valid_username(&username) {
            return Ok(Identity {
                first,
                last,
                username,
            });
        }
    }

    Err(GenerationError::UsernameGenerationFailed {
        max_attempts: MAX_USERNAME_ATTEMPTS,
    })
}

/// Builds `first_last<index>`, trimming the name stem so the index survives
/// the length cap.
fn username_candidate(first: &str, last: &str, index: usize) -> String {
    let suffix = index.to_string();
    let budget = USERNAME_MAX.saturating_sub(suffix.len());
    let stem: String = sanitize_username(&format!("{first}_{last}"))
        .chars()
        .take(budget)
        .collect();
    format!("{stem}{suffix}")
}
