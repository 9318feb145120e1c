use crate::classifier::{classify, ClassifyOptions};
use crate::column::resolve_email_column;
use crate::email::CanonicalOptions;
use crate::error::{Result, ScrubError, TableKind};
use crate::report::{assemble, ScrubReport};
use crate::suppression::SuppressionSet;
use crate::table::{load_table, CsvParser, Table};
use shared_types::ScrubOptions;
use std::path::Path;
use tracing::{debug, info};

/// Run one scrub over already-loaded tables.
///
/// All expected failures (missing table, empty table, undetectable column)
/// are checked before any classification work starts.
pub fn scrub(
    client: Option<&Table>,
    suppression: Option<&Table>,
    options: &ScrubOptions,
) -> Result<ScrubReport> {
    let client = client.ok_or(ScrubError::MissingInput(TableKind::Client))?;
    let suppression = suppression.ok_or(ScrubError::MissingInput(TableKind::Suppression))?;

    if client.is_empty() {
        return Err(ScrubError::EmptyTable {
            table: TableKind::Client,
        });
    }
    if suppression.is_empty() {
        return Err(ScrubError::EmptyTable {
            table: TableKind::Suppression,
        });
    }

    let explicit = options.email_column_override();
    let client_column = resolve_email_column(client, explicit, TableKind::Client)?;
    let suppression_column = resolve_email_column(suppression, explicit, TableKind::Suppression)?;
    debug!(
        "Using email columns '{}' (client) and '{}' (suppression)",
        client.headers()[client_column],
        suppression.headers()[suppression_column]
    );

    let suppression_set =
        SuppressionSet::from_column(suppression, suppression_column, CanonicalOptions::from(options));
    debug!("Suppression set holds {} addresses", suppression_set.len());

    let verdicts = classify(
        client.rows(),
        client_column,
        &suppression_set,
        &ClassifyOptions::from(options),
    );
    let report = assemble(client, &verdicts, options);

    info!(
        "Scrubbed {} client rows: {} kept, {} removed, {} pruned",
        report.summary.rows_before,
        report.summary.kept,
        report.summary.removed_total,
        report.summary.pruned_duplicates
    );

    Ok(report)
}

/// Parse CSV inputs and scrub them
pub fn scrub_csv(
    client: Option<&[u8]>,
    suppression: Option<&[u8]>,
    options: &ScrubOptions,
) -> Result<ScrubReport> {
    let parser = CsvParser::new();
    let client = client.map(|c| parser.parse_table(c)).transpose()?;
    let suppression = suppression.map(|s| parser.parse_table(s)).transpose()?;

    scrub(client.as_ref(), suppression.as_ref(), options)
}

/// Load both tables from disk and scrub them. A path that does not exist
/// counts as a missing input.
pub fn scrub_files(
    client: Option<&Path>,
    suppression: Option<&Path>,
    options: &ScrubOptions,
) -> Result<ScrubReport> {
    let client = load_existing(client, TableKind::Client)?;
    let suppression = load_existing(suppression, TableKind::Suppression)?;

    scrub(Some(&client), Some(&suppression), options)
}

fn load_existing(path: Option<&Path>, kind: TableKind) -> Result<Table> {
    match path {
        Some(path) if path.is_file() => load_table(path),
        _ => Err(ScrubError::MissingInput(kind)),
    }
}
