use crate::email::{canonical_emails, CanonicalOptions};
use crate::error::{Result, ScrubError, TableKind};
use crate::table::Table;
use std::collections::HashSet;

/// Canonical addresses that must never be kept. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct SuppressionSet {
    addresses: HashSet<String>,
}

impl SuppressionSet {
    /// Collect every canonical address found in `column` of a suppression table.
    ///
    /// Cells may hold several addresses; all of them are suppressed. Missing or
    /// address-free cells contribute nothing.
    pub fn build(table: &Table, column: &str, options: CanonicalOptions) -> Result<Self> {
        let index = table
            .column_index(column)
            .ok_or_else(|| ScrubError::ColumnNotFound {
                table: TableKind::Suppression,
                column: Some(column.to_string()),
            })?;

        Ok(Self::from_column(table, index, options))
    }

    pub(crate) fn from_column(table: &Table, index: usize, options: CanonicalOptions) -> Self {
        let addresses = table
            .column(index)
            .flat_map(|cell| canonical_emails(cell, options))
            .collect();

        Self { addresses }
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.addresses.contains(canonical)
    }

    /// True if any of the given canonical addresses is suppressed
    pub fn matches_any<S: AsRef<str>>(&self, emails: &[S]) -> bool {
        emails.iter().any(|e| self.contains(e.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SuppressionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            addresses: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_canonicalizes_and_unions() {
        let table = Table::from_rows(
            ["Email", "Status"],
            [
                ["S@Sup.com", "unsubscribed"],
                ["x+news@gmail.com; y@other.org", "bounced"],
                ["", "spam"],
                ["no address here", "manual"],
            ],
        );

        let set = SuppressionSet::build(&table, "Email", CanonicalOptions::default()).unwrap();

        assert_eq!(set.len(), 3);
        assert!(set.contains("s@sup.com"));
        assert!(set.contains("x@gmail.com"));
        assert!(set.contains("y@other.org"));
        assert!(!set.contains("x+news@gmail.com"));
    }

    #[test]
    fn test_build_respects_flags() {
        let table = Table::from_rows(["Email"], [["x+news@gmail.com"]]);
        let options = CanonicalOptions {
            collapse_plus: false,
            collapse_dots: false,
        };

        let set = SuppressionSet::build(&table, "Email", options).unwrap();
        assert!(set.contains("x+news@gmail.com"));
        assert!(!set.contains("x@gmail.com"));
    }

    #[test]
    fn test_build_missing_column() {
        let table = Table::from_rows(["Address"], [["a@b.com"]]);
        let err = SuppressionSet::build(&table, "Email", CanonicalOptions::default()).unwrap_err();
        assert!(matches!(err, ScrubError::ColumnNotFound { .. }));
    }

    #[test]
    fn test_matches_any() {
        let set: SuppressionSet = ["s@sup.com"].into_iter().collect();
        assert!(set.matches_any(&["a@b.com", "s@sup.com"]));
        assert!(!set.matches_any(&["a@b.com"]));
        assert!(!set.matches_any::<String>(&[]));
    }
}
