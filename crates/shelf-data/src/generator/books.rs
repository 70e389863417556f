//! Book batch generation and ordering.

use std::cmp::Ordering;

use tracing::debug;

use crate::record::{Book, ReadingStatus};
use crate::scalar::{Draws, Field, pick, scaled};
use crate::window::timestamp_in_window;

/// Status table indexed by `floor(draw * 3)`.
const STATUSES: [ReadingStatus; 3] = [
    ReadingStatus::Reading,
    ReadingStatus::Finished,
    ReadingStatus::WantToRead,
];

/// A cover is attached when the draw exceeds this (about 90% of books).
const COVER_THRESHOLD: f64 = 0.1;

/// A finished book is rated when the draw exceeds this (about 70%).
const RATING_THRESHOLD: f64 = 0.3;

/// Notes are attached when the draw exceeds this (about 50%).
const NOTES_THRESHOLD: f64 = 0.5;

/// A sample document is attached when the draw exceeds this (about 20%).
const DOCUMENT_THRESHOLD: f64 = 0.8;

const AUTHOR_COUNT: u64 = 50;
const PAGE_COUNT_MIN: u32 = 150;
const PAGE_COUNT_SPAN: u64 = 400;
const RATING_MAX: u64 = 5;
const ISBN_SPAN: u64 = 100_000_000;

const TITLE_ADJECTIVES: [&str; 12] = [
    "Silent", "Hidden", "Crimson", "Forgotten", "Golden", "Midnight", "Wandering", "Broken",
    "Distant", "Quiet", "Burning", "Endless",
];

const TITLE_NOUNS: [&str; 12] = [
    "Garden", "River", "Kingdom", "Letters", "Harbour", "Orchard", "Library", "Mountain",
    "Lantern", "Archive", "Tide", "Horizon",
];

/// Generates `count` books for `seed_prefix`.
///
/// Book `i` (1-based) has id `"<seed_prefix>-<i>"`. The batch is ordered by
/// [`sort_books`]. The same arguments always produce the same batch; a count
/// of zero produces an empty one.
///
/// # Example
///
/// ```
/// use shelf_data::generate_book_batch;
///
/// let books = generate_book_batch(3, "trending");
///
/// assert_eq!(books.len(), 3);
/// assert_eq!(books.first().map(|b| b.id.as_str()), Some("trending-1"));
/// assert_eq!(books, generate_book_batch(3, "trending"));
/// ```
#[must_use]
pub fn generate_book_batch(count: usize, seed_prefix: &str) -> Vec<Book> {
    let draws = Draws::new(seed_prefix);
    let mut books: Vec<Book> = (1..=count)
        .map(|index| build_book(draws, seed_prefix, index))
        .collect();
    sort_books(&mut books);

    debug!(kind = "books", seed_prefix, count, "generated batch");
    books
}

/// Sorts books by id prefix, then numeric id suffix, then newest first.
///
/// The prefix is the text before the last `-` in the id. Ids without a
/// numeric suffix sort ahead of numbered ones sharing their prefix. The sort
/// is stable.
pub fn sort_books(books: &mut [Book]) {
    books.sort_by(compare_books);
}

fn compare_books(left: &Book, right: &Book) -> Ordering {
    let (left_prefix, left_suffix) = split_id(&left.id);
    let (right_prefix, right_suffix) = split_id(&right.id);
    left_prefix
        .cmp(right_prefix)
        .then(left_suffix.cmp(&right_suffix))
        .then_with(|| right.added_at.cmp(&left.added_at))
}

fn split_id(id: &str) -> (&str, Option<u64>) {
    match id.rsplit_once('-') {
        Some((prefix, suffix)) => (prefix, suffix.parse().ok()),
        None => (id, None),
    }
}

fn build_book(draws: Draws, seed_prefix: &str, index: usize) -> Book {
    let id = format!("{seed_prefix}-{index}");

    let status =
        pick(draws.draw(index, Field::Status), &STATUSES).unwrap_or(ReadingStatus::Reading);
    let rating = (status == ReadingStatus::Finished
        && draws.draw(index, Field::RatingPresence) > RATING_THRESHOLD)
        .then(|| rating_value(draws.draw(index, Field::RatingValue)));

    let author_number = scaled(draws.draw(index, Field::Author), AUTHOR_COUNT) + 1;
    let author = format!("Author {author_number}");

    let notes = (draws.draw(index, Field::NotesPresence) > NOTES_THRESHOLD)
        .then(|| format!("Reading notes for book {index} on the {seed_prefix} shelf."));
    let cover_url = (draws.draw(index, Field::CoverPresence) > COVER_THRESHOLD)
        .then(|| format!("/covers/{id}.jpg"));
    let document_url = (draws.draw(index, Field::DocumentPresence) > DOCUMENT_THRESHOLD)
        .then(|| format!("/documents/{id}-sample.pdf"));

    let isbn_digits = scaled(draws.draw(index, Field::Isbn), ISBN_SPAN);
    let check = index.checked_rem(10).unwrap_or_default();
    let isbn = Some(format!("978-0-{isbn_digits:08}-{check}"));

    let page_offset = u32::try_from(scaled(draws.draw(index, Field::PageCount), PAGE_COUNT_SPAN))
        .unwrap_or_default();

    let author_bio = format!(
        "{author} writes novels about ordinary people in extraordinary places \
         and has been a favourite of book clubs for over a decade."
    );

    Book {
        id,
        title: book_title(draws.draw(index, Field::Title)),
        author,
        status,
        rating,
        notes,
        cover_url,
        isbn,
        added_at: timestamp_in_window(draws.draw(index, Field::AddedAt)),
        page_count: PAGE_COUNT_MIN + page_offset,
        author_bio,
        document_url,
    }
}

fn rating_value(draw: f64) -> u8 {
    u8::try_from(scaled(draw, RATING_MAX) + 1).unwrap_or(1)
}

/// Builds a title from one draw over the adjective × noun grid.
fn book_title(draw: f64) -> String {
    let nouns = u64::try_from(TITLE_NOUNS.len()).unwrap_or(1);
    let adjectives = u64::try_from(TITLE_ADJECTIVES.len()).unwrap_or(1);
    let cell = scaled(draw, adjectives * nouns);
    let row = usize::try_from(cell.checked_div(nouns).unwrap_or_default()).unwrap_or_default();
    let column = usize::try_from(cell.checked_rem(nouns).unwrap_or_default()).unwrap_or_default();

    let adjective = TITLE_ADJECTIVES.get(row).copied().unwrap_or("Untitled");
    let noun = TITLE_NOUNS.get(column).copied().unwrap_or("Book");
    format!("The {adjective} {noun}")
}

#[cfg(test)]
mod tests {
    //! Unit coverage for book field mapping and ordering.

    use std::collections::HashSet;

    use rstest::rstest;

    use super::*;
    use crate::scalar::{base_seed, seeded_scalar};
    use crate::window::is_within_window;

    #[test]
    fn zero_count_yields_empty_batch() {
        assert!(generate_book_batch(0, "trending").is_empty());
    }

    #[rstest]
    #[case(1, "test")]
    #[case(5, "trending")]
    #[case(12, "new-releases")]
    #[case(3, "")]
    fn batch_has_requested_count(#[case] count: usize, #[case] prefix: &str) {
        assert_eq!(generate_book_batch(count, prefix).len(), count);
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(
            generate_book_batch(25, "popular"),
            generate_book_batch(25, "popular")
        );
    }

    #[test]
    fn literal_test_seed_matches_sine_draws() {
        let books = generate_book_batch(1, "test");
        let [book] = books.as_slice() else {
            panic!("expected exactly one book, got {}", books.len());
        };

        let t_seed = base_seed("test") + 1;
        let draw = seeded_scalar(t_seed + 3);
        let expected = STATUSES
            .get(usize::try_from(scaled(draw, 3)).expect("index fits"))
            .copied();

        assert_eq!(book.id, "test-1");
        assert_eq!(Some(book.status), expected);
        assert!((150..=549).contains(&book.page_count));
    }

    #[test]
    fn literal_test_seed_golden_fields() {
        let books = generate_book_batch(1, "test");
        let book = books.first().expect("one book");

        assert_eq!(book.status, ReadingStatus::Reading);
        assert_eq!(book.rating, None);
        assert_eq!(book.author, "Author 4");
        assert_eq!(book.page_count, 220);
        assert_eq!(book.isbn.as_deref(), Some("978-0-16274964-1"));
        assert_eq!(book.cover_url.as_deref(), Some("/covers/test-1.jpg"));
        assert_eq!(book.notes, None);
        assert_eq!(book.document_url, None);
    }

    #[test]
    fn ratings_only_on_finished_books() {
        for prefix in ["trending", "popular", "classics", "x"] {
            for book in generate_book_batch(100, prefix) {
                assert!(book.has_consistent_rating(), "inconsistent rating: {book:?}");
                if let Some(rating) = book.rating {
                    assert!((1..=5).contains(&rating));
                }
            }
        }
    }

    #[test]
    fn finished_books_are_sometimes_rated() {
        let books = generate_book_batch(100, "classics");
        assert!(books.iter().any(|b| b.rating.is_some()));
        assert!(books.iter().any(|b| b.status == ReadingStatus::Finished));
    }

    #[test]
    fn ids_are_unique_and_contiguous() {
        let books = generate_book_batch(100, "x");
        let ids: HashSet<&str> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), 100);
        for index in 1..=100 {
            assert!(ids.contains(format!("x-{index}").as_str()));
        }
    }

    #[test]
    fn batch_is_ordered_by_numeric_suffix() {
        let books = generate_book_batch(20, "trending");
        let suffixes: Vec<Option<u64>> = books.iter().map(|b| split_id(&b.id).1).collect();
        let expected: Vec<Option<u64>> = (1..=20).map(Some).collect();
        assert_eq!(suffixes, expected);
    }

    #[test]
    fn sorting_restores_generation_order() {
        let books = generate_book_batch(30, "popular");
        let mut shuffled = books.clone();
        shuffled.reverse();
        shuffled.rotate_left(7);
        sort_books(&mut shuffled);
        assert_eq!(shuffled, books);
    }

    #[test]
    fn sorting_breaks_ties_by_newest_first() {
        let mut books = generate_book_batch(2, "tie");
        let mut older = books.first().cloned().expect("book");
        let mut newer = older.clone();
        older.added_at = timestamp_in_window(0.1);
        newer.added_at = timestamp_in_window(0.9);
        books = vec![older.clone(), newer.clone()];
        sort_books(&mut books);
        assert_eq!(books, vec![newer, older]);
    }

    #[test]
    fn sorting_orders_prefixes_lexicographically() {
        let mut books = generate_book_batch(2, "popular");
        books.extend(generate_book_batch(2, "classics"));
        sort_books(&mut books);
        let ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["classics-1", "classics-2", "popular-1", "popular-2"]);
    }

    #[test]
    fn hyphenated_prefixes_sort_by_numeric_suffix() {
        let books = generate_book_batch(11, "new-releases");
        assert_eq!(books.get(1).map(|b| b.id.as_str()), Some("new-releases-2"));
        assert_eq!(books.last().map(|b| b.id.as_str()), Some("new-releases-11"));
    }

    #[test]
    fn different_prefixes_diverge() {
        assert_ne!(
            generate_book_batch(5, "trending"),
            generate_book_batch(5, "popular")
        );
    }

    #[test]
    fn fields_stay_in_range() {
        for book in generate_book_batch(100, "ranges") {
            assert!((150..=549).contains(&book.page_count));
            assert!(is_within_window(&book.added_at));
            let author_number: u64 = book
                .author
                .strip_prefix("Author ")
                .and_then(|n| n.parse().ok())
                .expect("author number");
            assert!((1..=50).contains(&author_number));
            assert!(book.title.starts_with("The "));
            let isbn = book.isbn.as_deref().expect("isbn is always generated");
            assert_eq!(isbn.len(), "978-0-00000000-0".len());
        }
    }

    #[test]
    fn most_books_have_covers() {
        let books = generate_book_batch(200, "covers");
        let with_cover = books.iter().filter(|b| b.cover_url.is_some()).count();
        assert!(with_cover > 150, "only {with_cover} of 200 books had covers");
    }

    #[test]
    fn caller_mutation_does_not_leak_into_later_batches() {
        let mut first = generate_book_batch(3, "shared");
        if let Some(book) = first.first_mut() {
            book.title = "Edited".to_owned();
            book.rating = Some(5);
        }
        let second = generate_book_batch(3, "shared");
        assert_ne!(second.first().map(|b| b.title.as_str()), Some("Edited"));
    }

    #[rstest]
    #[case("trending-12", ("trending", Some(12)))]
    #[case("new-releases-3", ("new-releases", Some(3)))]
    #[case("-1", ("", Some(1)))]
    #[case("custom", ("custom", None))]
    #[case("user-abc", ("user", None))]
    fn split_id_separates_prefix_and_suffix(
        #[case] id: &str,
        #[case] expected: (&str, Option<u64>),
    ) {
        assert_eq!(split_id(id), expected);
    }
}
