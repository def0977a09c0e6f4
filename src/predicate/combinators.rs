//! Core predicate trait and static logical combinators
//!
//! [`Predicate`] is what every requirement is made of. [`PredicateExt`]
//! composes predicates ahead of time into concrete `And`/`Or`/`Not` types,
//! for the cases where a requirement reads better as one named predicate
//! than as a long builder chain.

/// A boolean test over values of type `T`.
///
/// Implemented for every `Fn(&T) -> bool`, so plain closures and function
/// items can be used wherever a predicate is expected.
///
/// # Example
///
/// ```rust
/// use requisite::predicate::*;
///
/// let short = |s: &str| s.len() < 4;
/// assert!(short.check("abc"));
/// assert!(!short.check("abcd"));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for composing predicates into a single value.
///
/// Composition is plain nesting, so `a.or(b).and(c)` is `(a or b) and c`,
/// exactly like the builder chain on
/// [`PredicateBuilder`](crate::requirement::PredicateBuilder).
///
/// # Example
///
/// ```rust
/// use requisite::predicate::*;
///
/// let identifier = PredicateExt::<str>::and(not_empty(), PredicateExt::<str>::not(starts_with("_")));
/// assert!(identifier.check("name"));
/// assert!(!identifier.check("_name"));
/// assert!(!identifier.check(""));
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic. `other` is only checked when `self` holds.
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic. `other` is only checked when `self` fails.
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}
