use std::fmt;

/// Which input table an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Client,
    Suppression,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Client => write!(f, "Client"),
            TableKind::Suppression => write!(f, "Suppression"),
        }
    }
}

/// Scrub error types
#[derive(Debug, thiserror::Error)]
pub enum ScrubError {
    #[error("Missing input: {0} table was not provided")]
    MissingInput(TableKind),

    #[error("{table} table has no rows")]
    EmptyTable { table: TableKind },

    #[error("Email column not found in {table} table{}", looked_for(.column))]
    ColumnNotFound {
        table: TableKind,
        column: Option<String>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Malformed table: {0}")]
    Malformed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrubError {
    /// True for the failure categories detected before classification starts
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            ScrubError::MissingInput(_)
                | ScrubError::EmptyTable { .. }
                | ScrubError::ColumnNotFound { .. }
        )
    }

    /// Single human-readable message returned in place of output
    pub fn user_message(&self) -> String {
        match self {
            ScrubError::MissingInput(_) => "Please upload both files.".to_string(),
            ScrubError::EmptyTable { table } => format!("{table} file has no rows."),
            ScrubError::ColumnNotFound { .. } => {
                "Could not detect the email column. Please enter it explicitly.".to_string()
            }
            other => format!("Unexpected failure: {other}"),
        }
    }
}

fn looked_for(column: &Option<String>) -> String {
    column
        .as_ref()
        .map(|c| format!(" (looked for '{c}')"))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, ScrubError>;
