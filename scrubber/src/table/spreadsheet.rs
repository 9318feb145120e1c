use crate::error::{Result, ScrubError};
use crate::table::{Cell, Table};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;

/// Leading bytes of the container formats a workbook can come in
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";
const OLE_MAGIC: &[u8] = &[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// True when `content` starts like an xlsx/ods (zip) or legacy xls (OLE) file
pub fn looks_like_workbook(content: &[u8]) -> bool {
    content.starts_with(ZIP_MAGIC) || content.starts_with(OLE_MAGIC)
}

/// Read the first worksheet of a workbook into a table.
///
/// The first non-empty row is the header row. Rows with no values at all are
/// skipped, like blank lines in CSV input.
pub fn parse_workbook(content: &[u8]) -> Result<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(content.to_vec()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ScrubError::Malformed("workbook has no worksheets".to_string()))??;

    let mut rows = range
        .rows()
        .filter(|row| row.iter().any(|value| !matches!(value, Data::Empty)));

    let Some(header_row) = rows.next() else {
        return Ok(Table::default());
    };
    let headers = header_row.iter().map(header_text).collect();

    let mut table = Table::new(headers);
    for row in rows {
        table.push_row(row.iter().map(to_cell).collect());
    }

    Ok(table)
}

fn header_text(value: &Data) -> String {
    match value {
        Data::Empty => String::new(),
        other => other.to_string().trim_start_matches('\u{feff}').to_string(),
    }
}

fn to_cell(value: &Data) -> Cell {
    match value {
        Data::Empty | Data::Error(_) => Cell::Missing,
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::String(s) => Cell::from_field(s),
        other => Cell::from_field(&other.to_string()),
    }
}
