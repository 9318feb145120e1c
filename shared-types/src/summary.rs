use crate::options::DedupeMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Why a client row was removed, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
pub enum RemovalReason {
    SuppressionMatch,
    EmptyOrInvalidEmail,
    DuplicateInClient,
}

impl RemovalReason {
    /// Label written to the `Reason` column of the removed-rows table
    pub fn as_str(&self) -> &'static str {
        match self {
            RemovalReason::SuppressionMatch => "suppression_match",
            RemovalReason::EmptyOrInvalidEmail => "empty_or_invalid_email",
            RemovalReason::DuplicateInClient => "duplicate_in_client",
        }
    }
}

impl fmt::Display for RemovalReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tallies for one scrub run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct ScrubSummary {
    pub rows_before: usize,
    pub removed_total: usize,
    pub removed_suppression: usize,
    pub removed_invalid: usize,
    pub removed_duplicate: usize,
    pub pruned_duplicates: usize,
    pub kept: usize,
    pub collapse_plus: bool,
    pub collapse_dots: bool,
    pub dedupe_mode: DedupeMode,
}

impl ScrubSummary {
    pub fn record_removal(&mut self, reason: RemovalReason) {
        self.removed_total += 1;
        match reason {
            RemovalReason::SuppressionMatch => self.removed_suppression += 1,
            RemovalReason::EmptyOrInvalidEmail => self.removed_invalid += 1,
            RemovalReason::DuplicateInClient => self.removed_duplicate += 1,
        }
    }
}

impl fmt::Display for ScrubSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Done.")?;
        writeln!(f, "- Rows before filter: {}", group_thousands(self.rows_before))?;
        writeln!(f, "- Removed total: {}", group_thousands(self.removed_total))?;
        writeln!(
            f,
            "  • Suppression matches: {}",
            group_thousands(self.removed_suppression)
        )?;
        writeln!(
            f,
            "  • Empty/invalid emails: {}",
            group_thousands(self.removed_invalid)
        )?;
        writeln!(
            f,
            "  • Duplicates in client: {}",
            group_thousands(self.removed_duplicate)
        )?;
        if self.dedupe_mode == DedupeMode::Prune {
            writeln!(
                f,
                "  • Duplicates pruned before filtering: {}",
                group_thousands(self.pruned_duplicates)
            )?;
        }
        writeln!(f, "- Kept (ready to upload): {}", group_thousands(self.kept))?;
        write!(
            f,
            "- Gmail canonicalization: plus={}, dots={}",
            on_off(self.collapse_plus),
            on_off(self.collapse_dots)
        )
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "ON"
    } else {
        "OFF"
    }
}

/// Format a count with comma thousands separators, e.g. `12,345`
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
