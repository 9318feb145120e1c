mod duplicates;

pub use duplicates::DuplicateTracker;

use crate::email::{canonical_emails, CanonicalOptions};
use crate::suppression::SuppressionSet;
use crate::table::Row;
use shared_types::{DedupeMode, RemovalReason, ScrubOptions};

/// Switches that drive row classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifyOptions {
    pub dedupe: bool,
    pub dedupe_mode: DedupeMode,
    pub drop_invalid: bool,
    pub canonical: CanonicalOptions,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self::from(&ScrubOptions::default())
    }
}

impl From<&ScrubOptions> for ClassifyOptions {
    fn from(options: &ScrubOptions) -> Self {
        Self {
            dedupe: options.dedupe,
            dedupe_mode: options.dedupe_mode,
            drop_invalid: options.drop_invalid,
            canonical: CanonicalOptions::from(options),
        }
    }
}

/// What happens to a client row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Kept,
    Removed(RemovalReason),
    /// Dropped as a repeat before classification (prune mode only)
    Pruned,
}

/// Outcome for one client row, by position in the original table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub row: usize,
    pub disposition: Disposition,
}

impl Verdict {
    pub fn is_kept(&self) -> bool {
        self.disposition == Disposition::Kept
    }

    pub fn reason(&self) -> Option<RemovalReason> {
        match self.disposition {
            Disposition::Removed(reason) => Some(reason),
            _ => None,
        }
    }
}

/// Canonical addresses found in a client row's email cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEmails {
    pub emails: Vec<String>,
}

impl RowEmails {
    /// The row's identity for duplicate detection, empty when the row has no address
    pub fn primary(&self) -> &str {
        self.emails.first().map(String::as_str).unwrap_or("")
    }
}

/// Pick the removal reason by fixed priority: suppression, then invalid, then duplicate.
pub fn removal_reason(
    emails: &[String],
    is_duplicate: bool,
    suppression: &SuppressionSet,
    options: &ClassifyOptions,
) -> Option<RemovalReason> {
    if suppression.matches_any(emails) {
        return Some(RemovalReason::SuppressionMatch);
    }
    if options.drop_invalid && emails.is_empty() {
        return Some(RemovalReason::EmptyOrInvalidEmail);
    }
    if options.dedupe && is_duplicate {
        return Some(RemovalReason::DuplicateInClient);
    }
    None
}

/// Classify every client row, preserving row order.
///
/// The suppression set must be fully built beforehand. Duplicate detection
/// compares each row's primary address against all strictly earlier rows,
/// whatever their own outcome.
pub fn classify(
    rows: &[Row],
    email_column: usize,
    suppression: &SuppressionSet,
    options: &ClassifyOptions,
) -> Vec<Verdict> {
    let mut tracker = DuplicateTracker::new();
    let prune = options.dedupe && options.dedupe_mode == DedupeMode::Prune;

    rows.iter()
        .enumerate()
        .map(|(row, cells)| {
            // Rows built outside `Table` may be shorter than the header
            let emails = match cells.get(email_column) {
                Some(cell) => canonical_emails(cell, options.canonical),
                None => Vec::new(),
            };
            let found = RowEmails { emails };
            let is_duplicate = tracker.observe(found.primary());

            let disposition = if prune && is_duplicate {
                Disposition::Pruned
            } else {
                match removal_reason(&found.emails, is_duplicate, suppression, options) {
                    Some(reason) => Disposition::Removed(reason),
                    None => Disposition::Kept,
                }
            };

            Verdict { row, disposition }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Cell, Table};

    fn client(emails: &[&str]) -> Table {
        Table::from_rows(["Email"], emails.iter().map(|e| [*e]))
    }

    fn dispositions(verdicts: &[Verdict]) -> Vec<Disposition> {
        verdicts.iter().map(|v| v.disposition).collect()
    }

    #[test]
    fn test_scenario_defaults() {
        let table = client(&["x@y.com", "x@y.com", "", "s@sup.com"]);
        let suppression: SuppressionSet = ["s@sup.com"].into_iter().collect();

        let verdicts = classify(table.rows(), 0, &suppression, &ClassifyOptions::default());

        assert_eq!(
            dispositions(&verdicts),
            vec![
                Disposition::Kept,
                Disposition::Removed(RemovalReason::DuplicateInClient),
                Disposition::Removed(RemovalReason::EmptyOrInvalidEmail),
                Disposition::Removed(RemovalReason::SuppressionMatch),
            ]
        );
        assert_eq!(verdicts.iter().map(|v| v.row).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_suppressed_duplicate_reports_suppression() {
        let table = client(&["S@sup.com", "s@sup.com"]);
        let suppression: SuppressionSet = ["s@sup.com"].into_iter().collect();

        let verdicts = classify(table.rows(), 0, &suppression, &ClassifyOptions::default());

        assert_eq!(verdicts[1].reason(), Some(RemovalReason::SuppressionMatch));
    }

    #[test]
    fn test_any_address_in_cell_can_match_suppression() {
        let table = client(&["keep@a.com, s@sup.com"]);
        let suppression: SuppressionSet = ["s@sup.com"].into_iter().collect();

        let verdicts = classify(table.rows(), 0, &suppression, &ClassifyOptions::default());
        assert_eq!(verdicts[0].reason(), Some(RemovalReason::SuppressionMatch));
    }

    #[test]
    fn test_duplicates_use_primary_address_only() {
        // Second row's primary differs even though it shares a secondary address
        let table = client(&["a@x.com b@x.com", "b@x.com", "c@x.com a@x.com"]);
        let verdicts = classify(
            table.rows(),
            0,
            &SuppressionSet::default(),
            &ClassifyOptions::default(),
        );

        assert!(verdicts.iter().all(Verdict::is_kept));
    }

    #[test]
    fn test_duplicates_follow_canonical_form() {
        let table = client(&["Jo+a@gmail.com", "jo+b@GMAIL.com"]);
        let verdicts = classify(
            table.rows(),
            0,
            &SuppressionSet::default(),
            &ClassifyOptions::default(),
        );

        assert!(verdicts[0].is_kept());
        assert_eq!(verdicts[1].reason(), Some(RemovalReason::DuplicateInClient));
    }

    #[test]
    fn test_empty_rows_are_not_duplicates_of_each_other() {
        let table = client(&["", "", "no address"]);
        let options = ClassifyOptions {
            drop_invalid: false,
            ..Default::default()
        };

        let verdicts = classify(table.rows(), 0, &SuppressionSet::default(), &options);
        assert!(verdicts.iter().all(Verdict::is_kept));
    }

    #[test]
    fn test_missing_cell_is_invalid() {
        let mut table = Table::new(vec!["Email".into()]);
        table.push_row(vec![Cell::Missing]);

        let verdicts = classify(
            table.rows(),
            0,
            &SuppressionSet::default(),
            &ClassifyOptions::default(),
        );
        assert_eq!(verdicts[0].reason(), Some(RemovalReason::EmptyOrInvalidEmail));
    }

    #[test]
    fn test_short_row_counts_as_missing_cell() {
        let rows: Vec<Row> = vec![
            vec![Cell::Text("Ann".into()), Cell::Text("ann@a.com".into())],
            vec![Cell::Text("Bob".into())],
        ];

        let verdicts = classify(&rows, 1, &SuppressionSet::default(), &ClassifyOptions::default());

        assert!(verdicts[0].is_kept());
        assert_eq!(verdicts[1].reason(), Some(RemovalReason::EmptyOrInvalidEmail));
    }

    #[test]
    fn test_disabled_checks_keep_rows() {
        let table = client(&["x@y.com", "x@y.com", ""]);
        let options = ClassifyOptions {
            dedupe: false,
            drop_invalid: false,
            ..Default::default()
        };

        let verdicts = classify(table.rows(), 0, &SuppressionSet::default(), &options);
        assert!(verdicts.iter().all(Verdict::is_kept));
    }

    #[test]
    fn test_prune_mode_drops_repeats_before_suppression() {
        let table = client(&["x@y.com", "x@y.com", "s@sup.com", "s@sup.com", "", ""]);
        let suppression: SuppressionSet = ["s@sup.com"].into_iter().collect();
        let options = ClassifyOptions {
            dedupe_mode: DedupeMode::Prune,
            ..Default::default()
        };

        let verdicts = classify(table.rows(), 0, &suppression, &options);

        assert_eq!(
            dispositions(&verdicts),
            vec![
                Disposition::Kept,
                Disposition::Pruned,
                Disposition::Removed(RemovalReason::SuppressionMatch),
                Disposition::Pruned,
                Disposition::Removed(RemovalReason::EmptyOrInvalidEmail),
                Disposition::Removed(RemovalReason::EmptyOrInvalidEmail),
            ]
        );
    }

    #[test]
    fn test_prune_mode_ignored_without_dedupe() {
        let table = client(&["x@y.com", "x@y.com"]);
        let options = ClassifyOptions {
            dedupe: false,
            dedupe_mode: DedupeMode::Prune,
            ..Default::default()
        };

        let verdicts = classify(table.rows(), 0, &SuppressionSet::default(), &options);
        assert!(verdicts.iter().all(Verdict::is_kept));
    }

    #[test]
    fn test_removal_reason_priority() {
        let suppression: SuppressionSet = ["s@sup.com"].into_iter().collect();
        let options = ClassifyOptions::default();
        let suppressed = vec!["s@sup.com".to_string()];

        assert_eq!(
            removal_reason(&suppressed, true, &suppression, &options),
            Some(RemovalReason::SuppressionMatch)
        );
        assert_eq!(
            removal_reason(&[], true, &suppression, &options),
            Some(RemovalReason::EmptyOrInvalidEmail)
        );
        assert_eq!(
            removal_reason(&["a@b.com".to_string()], true, &suppression, &options),
            Some(RemovalReason::DuplicateInClient)
        );
        assert_eq!(
            removal_reason(&["a@b.com".to_string()], false, &suppression, &options),
            None
        );
    }
}
