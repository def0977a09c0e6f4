//! Predicate prelude for convenient imports
//!
//! ```rust
//! use requisite::predicate::prelude::*;
//!
//! let az = PredicateExt::<str>::and(starts_with("a"), ends_with("z"));
//! assert!(az.check("abcz"));
//! ```

pub use super::chain::{Chain, Connective};
pub use super::combinators::{Predicate, PredicateExt};
pub use super::string::{contains, ends_with, equal_to, not_blank, not_empty, starts_with};
