//! Unordered pair keys for repeat detection.

use serde::{Deserialize, Serialize};

use crate::canon::BookId;

/// Canonical key for an unordered pair of distinct books.
///
/// `(a, b)` and `(b, a)` produce the same key, so a statement about the
/// same two books can never be asked twice in one match regardless of
/// which book ends up as the subject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey {
    lo: BookId,
    hi: BookId,
}

impl PairKey {
    /// Build the key for an unordered pair.
    ///
    /// Panics if both IDs refer to the same book; callers filter those
    /// out before keying.
    #[must_use]
    pub fn new(a: BookId, b: BookId) -> Self {
        assert!(a != b, "Pair key requires two distinct books");
        if a < b {
            Self { lo: a, hi: b }
        } else {
            Self { lo: b, hi: a }
        }
    }

    /// The earlier book of the pair in canonical order.
    #[must_use]
    pub const fn lo(self) -> BookId {
        self.lo
    }

    /// The later book of the pair in canonical order.
    #[must_use]
    pub const fn hi(self) -> BookId {
        self.hi
    }

    /// Canonical distance between the two books.
    #[must_use]
    pub fn distance(self) -> usize {
        self.hi.index() - self.lo.index()
    }
}
