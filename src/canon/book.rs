//! Book identifiers.

use serde::{Deserialize, Serialize};

/// Identifies a book by its zero-based position in canonical order.
///
/// The identifier IS the position: `BookId(0)` is Genesis, `BookId(65)`
/// is Revelation. Ordering comparisons between IDs therefore agree with
/// canonical order for free.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BookId(pub u8);

impl BookId {
    /// Create a book ID from a canonical position.
    #[must_use]
    pub const fn new(position: u8) -> Self {
        Self(position)
    }

    /// Zero-based canonical position.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Book({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_position() {
        let id = BookId::new(18);
        assert_eq!(id.index(), 18);
        assert_eq!(format!("{}", id), "Book(18)");
    }

    #[test]
    fn test_book_id_ordering_matches_position() {
        assert!(BookId::new(0) < BookId::new(65));
        assert!(BookId::new(39) > BookId::new(38));
        assert_eq!(BookId::new(7), BookId::new(7));
    }
}
