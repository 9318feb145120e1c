use crate::error::Result;
use crate::table::spreadsheet::{looks_like_workbook, parse_workbook};
use crate::table::{CsvParser, Table};
use std::fs;
use std::path::Path;

/// How a table file is read, chosen from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Delimited(u8),
    Spreadsheet,
    /// No known extension: CSV first, then spreadsheet
    Unknown,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => TableFormat::Delimited(b','),
            "tsv" | "tab" => TableFormat::Delimited(b'\t'),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => TableFormat::Spreadsheet,
            _ => TableFormat::Unknown,
        }
    }

    pub fn parse(self, content: &[u8]) -> Result<Table> {
        match self {
            TableFormat::Delimited(delimiter) => {
                CsvParser::with_delimiter(delimiter).parse_table(content)
            }
            TableFormat::Spreadsheet => parse_workbook(content),
            TableFormat::Unknown if looks_like_workbook(content) => parse_workbook(content),
            TableFormat::Unknown => CsvParser::new()
                .parse_table(content)
                .or_else(|csv_err| parse_workbook(content).map_err(|_| csv_err)),
        }
    }
}

/// Read a table from disk, choosing the reader from the file extension
pub fn load_table(path: &Path) -> Result<Table> {
    let format = TableFormat::from_path(path);
    let content = fs::read(path)?;
    let table = format.parse(&content)?;

    tracing::debug!(
        "Loaded {} rows with {} columns from {} ({:?})",
        table.len(),
        table.headers().len(),
        path.display(),
        format
    );

    Ok(table)
}
