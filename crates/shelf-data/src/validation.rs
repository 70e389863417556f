//! Shelf-name and username rules.
//!
//! # Validation Rules
//!
//! Shelf names double as store keys and CLI arguments, so they are slugs:
//!
//! - 1 to 48 characters
//! - lowercase ASCII letters, digits and single hyphens
//! - no leading or trailing hyphen
//!
//! Generated usernames follow the product's handle rules:
//!
//! - 3 to 24 characters
//! - lowercase ASCII letters, digits and underscores
//! - must start with a letter

/// Maximum allowed length for a shelf name.
pub const SHELF_NAME_MAX: usize = 48;

/// Minimum allowed length for a username.
pub const USERNAME_MIN: usize = 3;

/// Maximum allowed length for a username.
pub const USERNAME_MAX: usize = 24;

/// Validates a shelf name.
///
/// # Examples
///
/// ```
/// use shelf_data::is_valid_shelf_name;
///
/// assert!(is_valid_shelf_name("trending"));
/// assert!(is_valid_shelf_name("new-releases-2024"));
/// assert!(!is_valid_shelf_name("New Releases"));
/// assert!(!is_valid_shelf_name("-leading"));
/// assert!(!is_valid_shelf_name("double--hyphen"));
/// ```
#[must_use]
pub fn is_valid_shelf_name(name: &str) -> bool {
    let length = name.chars().count();
    if !(1..=SHELF_NAME_MAX).contains(&length) {
        return false;
    }
    if name.starts_with('-') || name.ends_with('-') || name.contains("--") {
        return false;
    }
    name.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Validates a username.
///
/// # Examples
///
/// ```
/// use shelf_data::is_valid_username;
///
/// assert!(is_valid_username("ada_lovelace7"));
/// assert!(!is_valid_username("ab"));
/// assert!(!is_valid_username("7ada"));
/// assert!(!is_valid_username("Ada"));
/// ```
#[must_use]
pub fn is_valid_username(name: &str) -> bool {
    let length = name.chars().count();
    if !(USERNAME_MIN..=USERNAME_MAX).contains(&length) {
        return false;
    }
    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        return false;
    }
    name.chars().all(is_valid_username_char)
}

const fn is_valid_username_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

/// Lowercases a raw handle and replaces disallowed characters with
/// underscores. Length is not enforced.
#[must_use]
pub(crate) fn sanitize_username(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_lowercase())
        .map(|c| if is_valid_username_char(c) { c } else { '_' })
        .collect()
}
