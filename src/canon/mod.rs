//! The book canon: ordering, lookup, and sampling pools.
//!
//! Everything downstream treats canonical order as opaque data owned by
//! `Canon`. Questions never hardcode positions.

pub mod book;
pub mod order;

pub use book::BookId;
pub use order::Canon;
