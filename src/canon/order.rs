//! The canonical book ordering and its lookup structures.
//!
//! `Canon` is the single source of truth for book order. It is built
//! once from the 66-book Protestant listing and never mutated; every
//! other component borrows it.

use rustc_hash::FxHashMap;

use crate::core::QuizError;

use super::book::BookId;

/// The 66 books in Protestant canonical order.
const BOOK_NAMES: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Books whose canonical position players most often misplace.
///
/// Mostly minor prophets and short epistles. Question generation samples
/// from this pool with elevated probability.
const HARD_BOOK_NAMES: [&str; 24] = [
    "Obadiah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Philemon",
    "Jude",
    "2 John",
    "3 John",
    "2 Peter",
    "2 Thessalonians",
    "2 Timothy",
    "Titus",
    "Colossians",
    "1 Thessalonians",
    "Lamentations",
    "Song of Solomon",
    "Ezekiel",
    "Amos",
    "Micah",
    "Hosea",
    "Joel",
];

/// Immutable registry of books in canonical order.
///
/// Provides position lookups by name and by ID, distance queries, and
/// the two sampling pools (all books, hard books).
///
/// ## Example
///
/// ```
/// use canon_duel::canon::Canon;
///
/// let canon = Canon::protestant();
///
/// let genesis = canon.lookup("Genesis").unwrap();
/// let exodus = canon.lookup("Exodus").unwrap();
///
/// assert!(canon.is_before(genesis, exodus));
/// assert_eq!(canon.distance(genesis, exodus), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Canon {
    names: Vec<&'static str>,
    index: FxHashMap<&'static str, BookId>,
    hard: Vec<BookId>,
}

impl Canon {
    /// Build the 66-book Protestant canon.
    ///
    /// Panics if the book listing contains a duplicate name or if a
    /// hard-pool name is missing from the listing. Both would be bugs
    /// in the embedded data, not runtime conditions.
    #[must_use]
    pub fn protestant() -> Self {
        let names: Vec<&'static str> = BOOK_NAMES.to_vec();

        let mut index = FxHashMap::default();
        for (position, &name) in names.iter().enumerate() {
            let id = BookId::new(position as u8);
            if index.insert(name, id).is_some() {
                panic!("Book {name:?} listed twice in the canon");
            }
        }

        let mut hard: Vec<BookId> = HARD_BOOK_NAMES
            .iter()
            .map(|&name| {
                *index
                    .get(name)
                    .unwrap_or_else(|| panic!("Hard book {name:?} not in the canon"))
            })
            .collect();
        hard.sort_unstable();

        Self { names, index, hard }
    }

    /// Look up a book by name.
    pub fn lookup(&self, name: &str) -> Result<BookId, QuizError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| QuizError::UnknownBook {
                name: name.to_string(),
            })
    }

    /// Name of a book.
    ///
    /// Panics if the ID is out of range. IDs are only issued by this
    /// canon, so a bad one indicates a caller mixing canons.
    #[must_use]
    pub fn name(&self, id: BookId) -> &'static str {
        self.names[id.index()]
    }

    /// Zero-based canonical position of a book.
    #[must_use]
    pub fn position(&self, id: BookId) -> usize {
        id.index()
    }

    /// One-based book number as printed in tables of contents.
    #[must_use]
    pub fn number(&self, id: BookId) -> usize {
        id.index() + 1
    }

    /// Does `a` come before `b` in canonical order?
    #[must_use]
    pub fn is_before(&self, a: BookId, b: BookId) -> bool {
        a.index() < b.index()
    }

    /// Absolute distance between two books' positions.
    #[must_use]
    pub fn distance(&self, a: BookId, b: BookId) -> usize {
        a.index().abs_diff(b.index())
    }

    /// Is this book in the hard pool?
    #[must_use]
    pub fn is_hard(&self, id: BookId) -> bool {
        self.hard.contains(&id)
    }

    /// All books in canonical order.
    #[must_use]
    pub fn books(&self) -> Vec<BookId> {
        (0..self.names.len()).map(|i| BookId::new(i as u8)).collect()
    }

    /// The hard pool, in canonical order.
    #[must_use]
    pub fn hard_books(&self) -> &[BookId] {
        &self.hard
    }

    /// Number of books in the canon.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the canon is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for Canon {
    fn default() -> Self {
        Self::protestant()
    }
}
