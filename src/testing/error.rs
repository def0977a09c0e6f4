//! Error types for table-driven tests.

use std::fmt;

/// Error returned when a test case table is built without any rows.
///
/// # Examples
///
/// ```rust
/// use requisite::testing::{test_cases, EmptyTable};
///
/// let table = test_cases::<(i32, i32)>().build();
/// assert_eq!(table.unwrap_err(), EmptyTable);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyTable;

impl fmt::Display for EmptyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("there are no test cases")
    }
}

impl std::error::Error for EmptyTable {}

/// Error returned by [`CaseTable::try_run`](super::CaseTable::try_run) for
/// the first row that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailed<E> {
    /// Zero-based position of the failing row.
    pub index: usize,
    /// The error the row produced.
    pub error: E,
}

impl<E> CaseFailed<E> {
    /// Create a new CaseFailed error.
    pub fn new(index: usize, error: E) -> Self {
        Self { index, error }
    }

    /// Extract the row's error, discarding the index.
    pub fn into_error(self) -> E {
        self.error
    }
}

impl<E: fmt::Display> fmt::Display for CaseFailed<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "test case #{} failed: {}", self.index, self.error)
    }
}

impl<E: std::error::Error + 'static> std::error::Error for CaseFailed<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
