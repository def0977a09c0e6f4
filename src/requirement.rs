//! Fluent requirements over a single subject
//!
//! A requirement is written in three steps:
//!
//! 1. [`require`] binds the subject,
//! 2. [`RequirementBuilder::to_satisfy`] gives the first predicate, optionally
//!    followed by [`and`](PredicateBuilder::and) / [`or`](PredicateBuilder::or),
//! 3. [`otherwise`](PredicateBuilder::otherwise) evaluates the composed
//!    predicate and turns a failure into the caller's error.
//!
//! ```rust
//! use requisite::require;
//!
//! fn parse_id(raw: &str) -> Result<u32, String> {
//!     require(raw)
//!         .to_satisfy(|s: &str| !s.is_empty())
//!         .and(|s: &str| s.chars().all(|c| c.is_ascii_digit()))
//!         .otherwise(|| format!("'{}' is not an id", raw))?;
//!     raw.parse().map_err(|_| format!("'{}' is out of range", raw))
//! }
//!
//! assert_eq!(parse_id("42"), Ok(42));
//! assert_eq!(parse_id("4x"), Err("'4x' is not an id".to_string()));
//! ```
//!
//! # Evaluation order
//!
//! `and` and `or` have the same precedence and are applied in the order they
//! are written. `a.or(b).and(c)` means `(a or b) and c`. Each step
//! short-circuits on its own: the right-hand predicate of a step is skipped
//! when the result so far already decides that step.
//!
//! A predicate that panics aborts the evaluation; the error factory is not
//! called in that case.

use std::fmt;

use crate::predicate::{Chain, Predicate};

/// Start a requirement on `subject`.
///
/// # Example
///
/// ```rust
/// use requisite::require;
///
/// let checked = require(&7).to_satisfy(|n: &i32| n % 2 == 1).otherwise(|| "even");
/// assert_eq!(checked, Ok(()));
/// ```
pub fn require<T: ?Sized>(subject: &T) -> RequirementBuilder<'_, T> {
    RequirementBuilder { subject }
}

/// A subject waiting for its first predicate.
///
/// Created by [`require`].
#[derive(Debug)]
pub struct RequirementBuilder<'a, T: ?Sized> {
    subject: &'a T,
}

impl<'a, T: ?Sized> RequirementBuilder<'a, T> {
    /// The subject under test.
    pub fn subject(&self) -> &'a T {
        self.subject
    }

    /// Give the first predicate the subject has to satisfy.
    pub fn to_satisfy<P>(self, predicate: P) -> PredicateBuilder<'a, T>
    where
        P: Predicate<T> + 'a,
    {
        PredicateBuilder {
            subject: self.subject,
            chain: Chain::new(predicate),
        }
    }
}

/// Composes predicates over a bound subject and evaluates them.
///
/// Every method takes the builder by value, so a requirement cannot be
/// extended or evaluated again once a terminal method has run.
pub struct PredicateBuilder<'a, T: ?Sized> {
    subject: &'a T,
    chain: Chain<'a, T>,
}

impl<'a, T: ?Sized> PredicateBuilder<'a, T> {
    /// Combine `predicate` with the result so far using AND.
    pub fn and<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<T> + 'a,
    {
        self.chain = self.chain.and(predicate);
        self
    }

    /// Combine `predicate` with the result so far using OR.
    pub fn or<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<T> + 'a,
    {
        self.chain = self.chain.or(predicate);
        self
    }

    /// Evaluate the requirement, producing `error()` if it does not hold.
    ///
    /// `error` runs at most once and only on failure. Its value is returned
    /// as is.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requisite::require;
    /// use requisite::predicate::{ends_with, starts_with};
    ///
    /// let az = require(" az ")
    ///     .to_satisfy(starts_with("a"))
    ///     .and(ends_with("z"))
    ///     .otherwise(|| "expected a..z");
    /// assert_eq!(az, Err("expected a..z"));
    /// ```
    pub fn otherwise<E, F>(self, error: F) -> Result<(), E>
    where
        F: FnOnce() -> E,
    {
        self.otherwise_with(|_| error())
    }

    /// Like [`otherwise`](Self::otherwise), but the error factory gets the
    /// subject so it can describe what failed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requisite::require;
    ///
    /// let result = require("xy")
    ///     .to_satisfy(|s: &str| s.starts_with('a'))
    ///     .or(|s: &str| s.ends_with('z'))
    ///     .otherwise_with(|s| format!("'{}' neither starts with a nor ends with z", s));
    /// assert_eq!(
    ///     result,
    ///     Err("'xy' neither starts with a nor ends with z".to_string())
    /// );
    /// ```
    pub fn otherwise_with<E, F>(self, error: F) -> Result<(), E>
    where
        F: FnOnce(&'a T) -> E,
    {
        let subject = self.subject;
        if self.is_satisfied() {
            Ok(())
        } else {
            Err(error(subject))
        }
    }

    /// Evaluate the requirement without producing an error.
    pub fn is_satisfied(self) -> bool {
        let satisfied = self.chain.check(self.subject);
        if !satisfied {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                "Requirement not satisfied by a chain of {} predicates",
                self.chain.len()
            );
        }
        satisfied
    }

    /// The subject under test.
    pub fn subject(&self) -> &'a T {
        self.subject
    }

    /// Release the composed predicate, dropping the subject.
    ///
    /// Useful to write a requirement once and check it against other values.
    ///
    /// ```rust
    /// use requisite::require;
    /// use requisite::predicate::{starts_with, Predicate};
    ///
    /// let chain = require("").to_satisfy(starts_with("a")).or(starts_with("b")).into_chain();
    /// assert!(chain.check("bee"));
    /// assert!(!chain.check("sea"));
    /// ```
    pub fn into_chain(self) -> Chain<'a, T> {
        self.chain
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for PredicateBuilder<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateBuilder")
            .field("subject", &self.subject)
            .field("chain", &self.chain)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{ends_with, equal_to, not_blank, starts_with};
    use std::cell::Cell;

    #[derive(Debug, PartialEq)]
    struct Rejected(&'static str);

    #[test]
    fn test_true_predicate_passes() {
        let subject = String::from("anything");
        let result = require(&subject)
            .to_satisfy(|s: &String| !s.is_empty())
            .otherwise(|| Rejected("empty"));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_false_predicate_returns_supplied_error() {
        let result = require(&Some(3))
            .to_satisfy(Option::is_none)
            .otherwise(|| Rejected("present"));
        assert_eq!(result, Err(Rejected("present")));
    }

    #[test]
    fn test_error_factory_is_lazy() {
        let calls = Cell::new(0);
        let factory = || {
            calls.set(calls.get() + 1);
            Rejected("unused")
        };
        assert!(require("ok").to_satisfy(not_blank()).otherwise(factory).is_ok());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_error_factory_runs_once_on_failure() {
        let calls = Cell::new(0);
        let factory = || {
            calls.set(calls.get() + 1);
            Rejected("blank")
        };
        assert!(require(" ").to_satisfy(not_blank()).otherwise(factory).is_err());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_error_is_returned_unchanged() {
        let boxed = Box::new(Rejected("boxed"));
        let address = &*boxed as *const Rejected;

        let err = require(&0)
            .to_satisfy(|n: &i32| *n > 0)
            .otherwise(move || boxed)
            .unwrap_err();

        assert_eq!(&*err as *const Rejected, address);
    }

    #[test]
    fn test_and_requires_both() {
        for subject in [" z", "a ", " az "] {
            let result = require(subject)
                .to_satisfy(starts_with("a"))
                .and(ends_with("z"))
                .otherwise(|| Rejected("and"));
            assert_eq!(result, Err(Rejected("and")), "subject {:?}", subject);
        }

        let result = require("az")
            .to_satisfy(starts_with("a"))
            .and(ends_with("z"))
            .otherwise(|| Rejected("and"));
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_or_requires_either() {
        for subject in ["abcz", "ab ", "cz"] {
            let result = require(subject)
                .to_satisfy(starts_with("a"))
                .or(ends_with("z"))
                .otherwise(|| Rejected("or"));
            assert_eq!(result, Ok(()), "subject {:?}", subject);
        }

        let result = require("xy")
            .to_satisfy(starts_with("a"))
            .or(ends_with("z"))
            .otherwise(|| Rejected("or"));
        assert_eq!(result, Err(Rejected("or")));
    }

    #[test]
    fn test_connectives_apply_in_written_order() {
        // t or a and b: precedence would give true, left to right gives false
        let result = require("test")
            .to_satisfy(starts_with("t"))
            .or(starts_with("a"))
            .and(starts_with("b"))
            .otherwise(|| Rejected("order"));
        assert_eq!(result, Err(Rejected("order")));
    }

    #[test]
    fn test_short_circuit_skips_decided_steps_only() {
        let evaluated = Cell::new(0u8);
        let mark = |bit: u8, result: bool| {
            let evaluated = &evaluated;
            move |_: &str| {
                evaluated.set(evaluated.get() | bit);
                result
            }
        };

        // (true or X) and true: X skipped, the AND step still runs
        let satisfied = require("s")
            .to_satisfy(mark(0b001, true))
            .or(mark(0b010, false))
            .and(mark(0b100, true))
            .is_satisfied();

        assert!(satisfied);
        assert_eq!(evaluated.get(), 0b101);
    }

    #[test]
    fn test_otherwise_with_sees_subject() {
        let result = require("NOT passing the test")
            .to_satisfy(not_blank())
            .and(equal_to("passing the test"))
            .otherwise_with(|s| format!("got {:?}", s));
        assert_eq!(result, Err("got \"NOT passing the test\"".to_string()));
    }

    #[test]
    #[should_panic(expected = "predicate exploded")]
    fn test_predicate_panic_bypasses_factory() {
        let _ = require(&1)
            .to_satisfy(|_: &i32| -> bool { panic!("predicate exploded") })
            .otherwise(|| -> Rejected { panic!("factory must not run") });
    }

    #[test]
    fn test_subject_accessors() {
        let value = 5;
        let requirement = require(&value);
        assert!(std::ptr::eq(requirement.subject(), &value));
        let builder = requirement.to_satisfy(|n: &i32| *n == 5);
        assert_eq!(*builder.subject(), 5);
    }

    #[test]
    fn test_debug_output() {
        let builder = require("az").to_satisfy(starts_with("a")).or(ends_with("z"));
        assert_eq!(
            format!("{:?}", builder),
            "PredicateBuilder { subject: \"az\", chain: Chain { len: 2, connectives: [Or] } }"
        );
    }

    #[cfg(feature = "tracing")]
    mod tracing_tests {
        use super::*;
        use tracing_test::traced_test;

        #[test]
        #[traced_test]
        fn test_unsatisfied_requirement_is_logged() {
            let _ = require("xy")
                .to_satisfy(starts_with("a"))
                .or(ends_with("z"))
                .otherwise(|| Rejected("or"));
            assert!(logs_contain(
                "Requirement not satisfied by a chain of 2 predicates"
            ));
        }

        #[test]
        #[traced_test]
        fn test_satisfied_requirement_is_silent() {
            let _ = require("az").to_satisfy(starts_with("a")).otherwise(|| Rejected("a"));
            assert!(!logs_contain("Requirement not satisfied"));
        }
    }
}
