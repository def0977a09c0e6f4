//! Runtime composition chains
//!
//! A [`Chain`] records predicates together with the [`Connective`] that joins
//! each one to everything before it. Evaluation folds the links strictly in
//! the order they were recorded: `a.or(b).and(c)` is `(a or b) and c`, never
//! `a or (b and c)`.

use std::fmt;

use super::combinators::Predicate;

/// How a link combines with the result accumulated so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connective {
    /// Logical AND.
    And,
    /// Logical OR.
    Or,
}

impl Connective {
    /// Apply one binary step.
    ///
    /// `next` is only called when `acc` does not already decide the step.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requisite::predicate::Connective;
    ///
    /// assert!(!Connective::And.apply(false, || unreachable!()));
    /// assert!(Connective::Or.apply(true, || unreachable!()));
    /// assert!(Connective::Or.apply(false, || true));
    /// ```
    #[inline]
    pub fn apply(self, acc: bool, next: impl FnOnce() -> bool) -> bool {
        match self {
            Connective::And => acc && next(),
            Connective::Or => acc || next(),
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connective::And => f.write_str("and"),
            Connective::Or => f.write_str("or"),
        }
    }
}

/// An ordered, non-empty chain of predicates joined by connectives.
///
/// The first predicate has no connective. The chain itself is a
/// [`Predicate`], so a composed chain can be checked against many values or
/// nested inside another chain.
///
/// # Example
///
/// ```rust
/// use requisite::predicate::*;
///
/// let chain: Chain<str> = Chain::new(starts_with("t"))
///     .or(starts_with("a"))
///     .and(starts_with("b"));
///
/// // (true or false) and false
/// assert!(!chain.check("test"));
/// assert_eq!(chain.len(), 3);
/// ```
pub struct Chain<'p, T: ?Sized> {
    first: Box<dyn Predicate<T> + 'p>,
    links: Vec<(Connective, Box<dyn Predicate<T> + 'p>)>,
}

impl<'p, T: ?Sized> Chain<'p, T> {
    /// Start a chain from its first predicate.
    pub fn new<P>(first: P) -> Self
    where
        P: Predicate<T> + 'p,
    {
        Chain {
            first: Box::new(first),
            links: Vec::new(),
        }
    }

    /// Append `predicate` joined by `connective`.
    pub fn push<P>(&mut self, connective: Connective, predicate: P)
    where
        P: Predicate<T> + 'p,
    {
        self.links.push((connective, Box::new(predicate)));
    }

    /// Append `predicate` with AND.
    pub fn and<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<T> + 'p,
    {
        self.push(Connective::And, predicate);
        self
    }

    /// Append `predicate` with OR.
    pub fn or<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<T> + 'p,
    {
        self.push(Connective::Or, predicate);
        self
    }

    /// Number of predicates in the chain. Never zero.
    pub fn len(&self) -> usize {
        self.links.len() + 1
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The connectives of every link after the first, in order.
    pub fn connectives(&self) -> impl Iterator<Item = Connective> + '_ {
        self.links.iter().map(|(connective, _)| *connective)
    }
}

impl<T: ?Sized> Predicate<T> for Chain<'_, T> {
    fn check(&self, value: &T) -> bool {
        self.links
            .iter()
            .fold(self.first.check(value), |acc, (connective, predicate)| {
                connective.apply(acc, || predicate.check(value))
            })
    }
}

impl<T: ?Sized> fmt::Debug for Chain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("len", &self.len())
            .field("connectives", &self.connectives().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Connective {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Connective::And => serializer.serialize_unit_variant("Connective", 0, "and"),
            Connective::Or => serializer.serialize_unit_variant("Connective", 1, "or"),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Connective {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        match name.as_ref() {
            "and" => Ok(Connective::And),
            "or" => Ok(Connective::Or),
            other => Err(serde::de::Error::unknown_variant(other, &["and", "or"])),
        }
    }
}

#[cfg(feature = "proptest")]
impl proptest::arbitrary::Arbitrary for Connective {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;
        prop_oneof![Just(Connective::And), Just(Connective::Or)].boxed()
    }
}
