use crate::error::{Result, ScrubError, TableKind};
use crate::table::Table;

/// Header names tried in order, compared case-insensitively
pub const CANDIDATE_EMAIL_COLUMNS: &[&str] = &[
    "email",
    "e-mail",
    "Email",
    "EMAIL",
    "Email Address",
    "email_address",
    "EmailAddress",
    "user_email",
];

/// Find the email column among `headers`.
///
/// Known names win in priority order; otherwise the first header that
/// contains "mail" anywhere.
pub fn detect_email_column(headers: &[String]) -> Option<usize> {
    let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();

    CANDIDATE_EMAIL_COLUMNS
        .iter()
        .find_map(|candidate| {
            let candidate = candidate.to_lowercase();
            lowered.iter().position(|h| *h == candidate)
        })
        .or_else(|| lowered.iter().position(|h| h.contains("mail")))
}

/// Resolve the email column for a table from an explicit name or auto-detection.
/// An explicit name must match a header exactly.
pub fn resolve_email_column(
    table: &Table,
    explicit: Option<&str>,
    kind: TableKind,
) -> Result<usize> {
    let found = match explicit {
        Some(name) => table.column_index(name),
        None => detect_email_column(table.headers()),
    };

    found.ok_or_else(|| ScrubError::ColumnNotFound {
        table: kind,
        column: explicit.map(str::to_string),
    })
}
