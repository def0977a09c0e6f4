//! String predicates
//!
//! Every predicate here checks both `str` and `String` subjects, so it works
//! with `require("literal")` as well as `require(&owned)`.

use super::combinators::Predicate;

// Implements `Predicate<str>` and `Predicate<String>` from one body over `&str`.
macro_rules! impl_str_predicate {
    (<$param:ident> $ty:ty, |$this:ident, $value:ident| $body:expr) => {
        impl<$param: AsRef<str>> Predicate<str> for $ty {
            #[inline]
            fn check(&self, $value: &str) -> bool {
                let $this = self;
                $body
            }
        }

        impl<$param: AsRef<str>> Predicate<String> for $ty {
            #[inline]
            fn check(&self, value: &String) -> bool {
                let $this = self;
                let $value: &str = value.as_str();
                $body
            }
        }
    };
    ($ty:ty, |$this:ident, $value:ident| $body:expr) => {
        impl Predicate<str> for $ty {
            #[inline]
            fn check(&self, $value: &str) -> bool {
                let $this = self;
                $body
            }
        }

        impl Predicate<String> for $ty {
            #[inline]
            fn check(&self, value: &String) -> bool {
                let $this = self;
                let $value: &str = value.as_str();
                $body
            }
        }
    };
}

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl_str_predicate!(NotEmpty, |_this, value| !value.is_empty());

/// Create a predicate that checks if a string is not empty.
///
/// # Example
///
/// ```rust
/// use requisite::predicate::*;
///
/// assert!(not_empty().check("hello"));
/// assert!(not_empty().check(" "));
/// assert!(!not_empty().check(""));
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks if a string has at least one non-whitespace char.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotBlank;

impl_str_predicate!(NotBlank, |_this, value| !value.trim().is_empty());

/// Create a predicate that checks if a string is not blank.
///
/// Empty and whitespace-only strings are blank.
///
/// # Example
///
/// ```rust
/// use requisite::predicate::*;
///
/// assert!(not_blank().check(" a "));
/// assert!(!not_blank().check(" \t\n"));
/// assert!(!not_blank().check(""));
/// ```
pub fn not_blank() -> NotBlank {
    NotBlank
}

/// Predicate that checks if a string starts with a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith<S>(pub S);

impl_str_predicate!(<S> StartsWith<S>, |this, value| value.starts_with(this.0.as_ref()));

/// Create a predicate that checks if a string starts with `prefix`.
///
/// # Example
///
/// ```rust
/// use requisite::predicate::*;
///
/// assert!(starts_with("a").check("az"));
/// assert!(!starts_with("a").check(" az"));
/// ```
pub fn starts_with<S: AsRef<str>>(prefix: S) -> StartsWith<S> {
    StartsWith(prefix)
}

/// Predicate that checks if a string ends with a suffix.
#[derive(Clone, Debug)]
pub struct EndsWith<S>(pub S);

impl_str_predicate!(<S> EndsWith<S>, |this, value| value.ends_with(this.0.as_ref()));

/// Create a predicate that checks if a string ends with `suffix`.
///
/// # Example
///
/// ```rust
/// use requisite::predicate::*;
///
/// assert!(ends_with("z").check("az"));
/// assert!(!ends_with("z").check("az "));
/// ```
pub fn ends_with<S: AsRef<str>>(suffix: S) -> EndsWith<S> {
    EndsWith(suffix)
}

/// Predicate that checks if a string contains a substring.
#[derive(Clone, Debug)]
pub struct Contains<S>(pub S);

impl_str_predicate!(<S> Contains<S>, |this, value| value.contains(this.0.as_ref()));

/// Create a predicate that checks if a string contains `substring`.
///
/// # Example
///
/// ```rust
/// use requisite::predicate::*;
///
/// assert!(contains("@").check("user@example.com"));
/// assert!(!contains("@").check("invalid"));
/// ```
pub fn contains<S: AsRef<str>>(substring: S) -> Contains<S> {
    Contains(substring)
}

/// Predicate that checks if a string is exactly equal to an expected one.
#[derive(Clone, Debug)]
pub struct EqualTo<S>(pub S);

impl_str_predicate!(<S> EqualTo<S>, |this, value| value == this.0.as_ref());

/// Create a predicate that checks if a string equals `expected`.
///
/// # Example
///
/// ```rust
/// use requisite::predicate::*;
///
/// assert!(equal_to("passingTest").check("passingTest"));
/// assert!(!equal_to("passingTest").check("passingtest"));
/// ```
pub fn equal_to<S: AsRef<str>>(expected: S) -> EqualTo<S> {
    EqualTo(expected)
}
