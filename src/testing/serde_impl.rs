//! Serde support for case tables (feature-gated)
//!
//! A [`CaseTable`] serializes as a plain sequence of rows. Deserializing
//! checks that the sequence is not empty, so a table loaded from a fixture
//! file keeps the same guarantee as one produced by
//! [`TestCases::build`](super::TestCases::build).
//!
//! ```rust,ignore
//! use requisite::testing::CaseTable;
//!
//! let table: CaseTable<(String, bool)> =
//!     serde_json::from_str(r#"[["abcz", true], ["xy", false]]"#).unwrap();
//! assert_eq!(table.len(), 2);
//!
//! assert!(serde_json::from_str::<CaseTable<(String, bool)>>("[]").is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::CaseTable;

impl<R: Serialize> Serialize for CaseTable<R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, R: Deserialize<'de>> Deserialize<'de> for CaseTable<R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<R>::deserialize(deserializer)?;
        CaseTable::try_from(rows).map_err(serde::de::Error::custom)
    }
}
