//! # Requisite
//!
//! Fluent requirements for assertions and validations.
//!
//! A requirement binds a subject, composes predicates over it and turns a
//! failed check into an error chosen by the caller:
//!
//! ```rust
//! use requisite::require;
//! use requisite::predicate::{ends_with, starts_with};
//!
//! #[derive(Debug, PartialEq)]
//! struct BadCode(String);
//!
//! fn check_code(code: &str) -> Result<(), BadCode> {
//!     require(code)
//!         .to_satisfy(starts_with("a"))
//!         .and(ends_with("z"))
//!         .otherwise(|| BadCode(code.to_string()))
//! }
//!
//! assert_eq!(check_code("abcz"), Ok(()));
//! assert_eq!(check_code(" az "), Err(BadCode(" az ".to_string())));
//! ```
//!
//! The error is only built when the check fails. `and` and `or` are applied
//! strictly in the order they are written, with no precedence between them:
//! `a.or(b).and(c)` is `(a or b) and c`.
//!
//! The [`testing`] module adds a small builder for table-driven tests:
//!
//! ```rust
//! use requisite::testing::test_cases;
//!
//! let table = test_cases().add((1, 2)).add((3, 4)).build().unwrap();
//! assert_eq!(table.into_vec(), vec![(1, 2), (3, 4)]);
//!
//! assert!(test_cases::<(i32, i32)>().build().is_err());
//! ```
//!
//! ## Features
//!
//! - `tracing`: debug events for unsatisfied requirements and case tables
//! - `serde`: `Serialize`/`Deserialize` for [`predicate::Connective`] and
//!   [`testing::CaseTable`]
//! - `proptest`: `Arbitrary` for [`predicate::Connective`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod predicate;
pub mod requirement;
pub mod testing;

// Re-exports
pub use predicate::{Chain, Connective, Predicate, PredicateExt};
pub use requirement::{require, PredicateBuilder, RequirementBuilder};
pub use testing::{test_cases, CaseTable, EmptyTable, TestCases};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::predicate::prelude::*;
    pub use crate::requirement::{require, PredicateBuilder, RequirementBuilder};
    pub use crate::testing::{test_cases, CaseFailed, CaseTable, EmptyTable, TestCases};
}
