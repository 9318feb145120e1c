use crate::error::{Result, ScrubError};
use crate::table::{Cell, Table};
use csv::{ReaderBuilder, WriterBuilder};

pub struct CsvParser {
    delimiter: u8,
    has_headers: bool,
}

impl CsvParser {
    pub fn new() -> Self {
        Self {
            delimiter: b',',
            has_headers: true,
        }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self {
            delimiter,
            ..Self::new()
        }
    }

    /// Parse delimited text into a table. Empty fields become `Cell::Missing`.
    pub fn parse_table(&self, content: &[u8]) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .flexible(true)
            .from_reader(content);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if i == 0 {
                    h.trim_start_matches('\u{feff}').to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();
        let width = headers.len();

        let mut table = Table::new(headers);

        for result in reader.records() {
            let record = result?;
            if record.len() > width {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                return Err(ScrubError::Malformed(format!(
                    "line {} has {} fields, header has {}",
                    line,
                    record.len(),
                    width
                )));
            }
            table.push_row(record.iter().map(Cell::from_field).collect());
        }

        Ok(table)
    }

    /// Serialize a table with its header row; missing cells are written empty
    pub fn write_table(&self, table: &Table) -> Result<Vec<u8>> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(Vec::new());

        writer.write_record(table.headers())?;
        for row in table.rows() {
            writer.write_record(row.iter().map(|cell| cell.to_string()))?;
        }

        writer
            .into_inner()
            .map_err(|e| ScrubError::Io(e.into_error()))
    }
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new()
    }
}
