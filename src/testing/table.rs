//! Test case collector and the non-empty table it builds.

use super::error::{CaseFailed, EmptyTable};

/// Create an empty test case collector.
///
/// # Example
///
/// ```rust
/// use requisite::testing::test_cases;
///
/// let table = test_cases().add((1, 2)).add((3, 4)).build().unwrap();
/// assert_eq!(table.into_vec(), vec![(1, 2), (3, 4)]);
/// ```
pub fn test_cases<R>() -> TestCases<R> {
    TestCases::new()
}

/// Collects the rows of a table-driven test.
///
/// Each row holds the parameters of one case, usually as a tuple. Rows are
/// kept in insertion order with no deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCases<R> {
    rows: Vec<R>,
}

impl<R> TestCases<R> {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Append one test case.
    pub fn add(mut self, row: R) -> Self {
        self.rows.push(row);
        self
    }

    /// Finish the table.
    ///
    /// Fails with [`EmptyTable`] when no case was added.
    pub fn build(self) -> Result<CaseTable<R>, EmptyTable> {
        let table = CaseTable::try_from(self.rows);
        #[cfg(feature = "tracing")]
        {
            match &table {
                Ok(table) => tracing::debug!("Built test case table with {} rows", table.len()),
                Err(_) => tracing::warn!("Test case table built without any test cases"),
            }
        }
        table
    }
}

impl<R> Default for TestCases<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// An ordered, non-empty table of test cases.
///
/// Produced by [`TestCases::build`]; always holds at least one row, so
/// [`first`](Self::first) never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseTable<R> {
    head: R,
    tail: Vec<R>,
}

impl<R> CaseTable<R> {
    /// The first test case.
    pub fn first(&self) -> &R {
        &self.head
    }

    /// The last test case.
    pub fn last(&self) -> &R {
        self.tail.last().unwrap_or(&self.head)
    }

    /// Number of test cases. Never zero.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over the test cases in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        std::iter::once(&self.head).chain(self.tail.iter())
    }

    /// Convert into a plain vector of rows.
    pub fn into_vec(self) -> Vec<R> {
        let mut rows = Vec::with_capacity(self.len());
        rows.push(self.head);
        rows.extend(self.tail);
        rows
    }

    /// Call `case` on every row, in order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requisite::testing::test_cases;
    ///
    /// test_cases()
    ///     .add((2, 4))
    ///     .add((3, 9))
    ///     .build()
    ///     .unwrap()
    ///     .run(|(n, square)| assert_eq!(n * n, square));
    /// ```
    pub fn run<F>(self, mut case: F)
    where
        F: FnMut(R),
    {
        for row in self {
            case(row);
        }
    }

    /// Call `case` on every row until one returns an error.
    ///
    /// Rows after the first failure are not visited.
    ///
    /// # Example
    ///
    /// ```rust
    /// use requisite::testing::test_cases;
    ///
    /// let outcome = test_cases()
    ///     .add(("az", true))
    ///     .add(("za", true))
    ///     .build()
    ///     .unwrap()
    ///     .try_run(|(input, expected)| {
    ///         let actual = input.starts_with('a');
    ///         if actual == expected {
    ///             Ok(())
    ///         } else {
    ///             Err(format!("{:?}: expected {}", input, expected))
    ///         }
    ///     });
    ///
    /// let failure = outcome.unwrap_err();
    /// assert_eq!(failure.index, 1);
    /// assert_eq!(failure.error, "\"za\": expected true");
    /// ```
    pub fn try_run<E, F>(self, mut case: F) -> Result<(), CaseFailed<E>>
    where
        F: FnMut(R) -> Result<(), E>,
    {
        for (index, row) in self.into_iter().enumerate() {
            if let Err(error) = case(row) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Test case #{} failed", index);
                return Err(CaseFailed::new(index, error));
            }
        }
        Ok(())
    }
}

impl<R> TryFrom<Vec<R>> for CaseTable<R> {
    type Error = EmptyTable;

    fn try_from(mut rows: Vec<R>) -> Result<Self, Self::Error> {
        if rows.is_empty() {
            return Err(EmptyTable);
        }
        let head = rows.remove(0);
        Ok(Self { head, tail: rows })
    }
}

impl<R> IntoIterator for CaseTable<R> {
    type Item = R;
    type IntoIter = std::iter::Chain<std::iter::Once<R>, std::vec::IntoIter<R>>;

    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self.head).chain(self.tail)
    }
}

impl<R> std::ops::Index<usize> for CaseTable<R> {
    type Output = R;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.head,
            _ => &self.tail[index - 1],
        }
    }
}
