//! Predicates and the ways to compose them
//!
//! A requirement is built out of [`Predicate`]s. Any `Fn(&T) -> bool` is a
//! predicate, and this module adds:
//!
//! - [`PredicateExt`] for composing predicates statically (`And`, `Or`, `Not`)
//! - [`Chain`], the runtime composition chain used by
//!   [`PredicateBuilder`](crate::requirement::PredicateBuilder)
//! - a handful of ready-made string predicates
//!
//! Composition never applies operator precedence. Predicates are combined
//! pairwise, left to right, in the order they are written.
//!
//! # Example
//!
//! ```rust
//! use requisite::predicate::*;
//!
//! let chain: Chain<str> = Chain::new(not_blank()).and(equal_to("passing the test"));
//! assert!(chain.check("passing the test"));
//! assert!(!chain.check(" "));
//! ```

mod chain;
mod combinators;
mod string;

pub mod prelude;

pub use chain::{Chain, Connective};
pub use combinators::{And, Not, Or, Predicate, PredicateExt};
pub use string::{
    contains, ends_with, equal_to, not_blank, not_empty, starts_with, Contains, EndsWith, EqualTo,
    NotBlank, NotEmpty, StartsWith,
};
