//! Testing utilities
//!
//! Helpers for the test code that exercises requirements:
//!
//! - [`test_cases`] collects the rows of a table-driven test and builds a
//!   non-empty [`CaseTable`]
//! - [`cases!`](crate::cases) does the same in one expression
//! - [`assert_satisfied!`](crate::assert_satisfied) and
//!   [`assert_unsatisfied!`](crate::assert_unsatisfied) check a requirement
//!   without going through an error value
//!
//! # Examples
//!
//! ## Table-driven cases
//!
//! ```rust
//! use requisite::require;
//! use requisite::predicate::{ends_with, starts_with};
//! use requisite::testing::test_cases;
//!
//! test_cases()
//!     .add(" z")
//!     .add("a ")
//!     .add(" az ")
//!     .build()
//!     .unwrap()
//!     .run(|subject| {
//!         let checked = require(subject)
//!             .to_satisfy(starts_with("a"))
//!             .and(ends_with("z"))
//!             .otherwise(|| "not a..z");
//!         assert_eq!(checked, Err("not a..z"));
//!     });
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use requisite::{assert_satisfied, assert_unsatisfied, require};
//! use requisite::predicate::{ends_with, starts_with};
//!
//! assert_satisfied!(require("abcz").to_satisfy(starts_with("a")).or(ends_with("z")));
//! assert_unsatisfied!(require("xy").to_satisfy(starts_with("a")).or(ends_with("z")));
//! ```

mod error;
mod table;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::{CaseFailed, EmptyTable};
pub use table::{test_cases, CaseTable, TestCases};

/// Build a [`CaseTable`] from a list of rows.
///
/// Expands to `test_cases().add(row)...build()`, so the result is a
/// `Result<CaseTable<_>, EmptyTable>`.
///
/// # Example
///
/// ```rust
/// use requisite::cases;
/// use requisite::testing::{CaseTable, EmptyTable};
///
/// let table = cases![(1, 2), (3, 4)].unwrap();
/// assert_eq!(table.into_vec(), vec![(1, 2), (3, 4)]);
///
/// let empty: Result<CaseTable<(i32, i32)>, EmptyTable> = cases![];
/// assert_eq!(empty, Err(EmptyTable));
/// ```
#[macro_export]
macro_rules! cases {
    () => {
        $crate::testing::test_cases().build()
    };
    ($($row:expr),+ $(,)?) => {
        $crate::testing::test_cases()$(.add($row))+.build()
    };
}

/// Assert that a requirement holds.
///
/// Takes a [`PredicateBuilder`](crate::requirement::PredicateBuilder) and
/// panics, showing the subject, if it is not satisfied.
///
/// # Example
///
/// ```rust
/// use requisite::{assert_satisfied, require};
///
/// assert_satisfied!(require(&10).to_satisfy(|n: &i32| *n > 5));
/// ```
#[macro_export]
macro_rules! assert_satisfied {
    ($requirement:expr) => {{
        let requirement = $requirement;
        let subject = requirement.subject();
        if !requirement.is_satisfied() {
            panic!(
                "Expected requirement to be satisfied, but it was not: {:?}",
                subject
            );
        }
    }};
}

/// Assert that a requirement does not hold.
///
/// Takes a [`PredicateBuilder`](crate::requirement::PredicateBuilder) and
/// panics, showing the subject, if it is satisfied.
///
/// # Example
///
/// ```rust
/// use requisite::{assert_unsatisfied, require};
///
/// assert_unsatisfied!(require(&1).to_satisfy(|n: &i32| *n > 5));
/// ```
#[macro_export]
macro_rules! assert_unsatisfied {
    ($requirement:expr) => {{
        let requirement = $requirement;
        let subject = requirement.subject();
        if requirement.is_satisfied() {
            panic!(
                "Expected requirement not to be satisfied, but it was: {:?}",
                subject
            );
        }
    }};
}
