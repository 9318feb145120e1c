use crate::classifier::{Disposition, Verdict};
use crate::table::{Cell, Table};
use shared_types::{DedupeMode, ScrubOptions, ScrubSummary};

/// Header of the column prepended to removed rows
pub const REASON_COLUMN: &str = "Reason";

/// Kept rows, removed rows with reasons, and tallies for one run
#[derive(Debug, Clone)]
pub struct ScrubReport {
    pub kept: Table,
    pub removed: Table,
    pub summary: ScrubSummary,
}

impl ScrubReport {
    /// Human-readable summary of the run
    pub fn message(&self) -> String {
        self.summary.to_string()
    }
}

/// Partition client rows by verdict, keeping original order and columns.
pub fn assemble(client: &Table, verdicts: &[Verdict], options: &ScrubOptions) -> ScrubReport {
    let mut kept = Table::new(client.headers().to_vec());

    let mut removed_headers = Vec::with_capacity(client.headers().len() + 1);
    removed_headers.push(REASON_COLUMN.to_string());
    removed_headers.extend(client.headers().iter().cloned());
    let mut removed = Table::new(removed_headers);

    let mut summary = ScrubSummary {
        rows_before: client.len(),
        collapse_plus: options.collapse_plus,
        collapse_dots: options.collapse_dots,
        dedupe_mode: if options.dedupe {
            options.dedupe_mode
        } else {
            DedupeMode::Tag
        },
        ..Default::default()
    };

    for verdict in verdicts {
        let row = &client.rows()[verdict.row];
        match verdict.disposition {
            Disposition::Kept => {
                summary.kept += 1;
                kept.push_row(row.clone());
            }
            Disposition::Removed(reason) => {
                summary.record_removal(reason);
                let mut cells = Vec::with_capacity(row.len() + 1);
                cells.push(Cell::Text(reason.as_str().to_string()));
                cells.extend(row.iter().cloned());
                removed.push_row(cells);
            }
            Disposition::Pruned => summary.pruned_duplicates += 1,
        }
    }

    ScrubReport {
        kept,
        removed,
        summary,
    }
}
