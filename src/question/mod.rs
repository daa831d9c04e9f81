//! Question generation: pair keys, sampling policy, and the generator.

pub mod generator;
pub mod pair;
pub mod policy;

pub use generator::{Question, QuestionGenerator, Relation};
pub use pair::PairKey;
pub use policy::{PairPolicy, Rejection};
