//! Tabular input loading and column selection.
//!
//! Everything downstream of this module works on strings: cells are coerced
//! to text here, at the ingestion boundary, so the scorer never sees anything
//! but `&str`. Loader artifact columns (an unnamed positional index, or the
//! `Unnamed: 0` header a round-tripped index export produces) are dropped on
//! load and never reach user-visible output.

use std::io;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::error::SentimentError;

/// Placeholder column name reported when [`ColumnSpec::First`] is asked of a
/// table with no columns at all.
pub const FIRST_COLUMN_PLACEHOLDER: &str = "(first column)";

/// Which column of the input holds the text to score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSpec {
    /// A named column (observed defaults: `review`, `tweets`).
    Name(String),
    /// Whatever column appears first.
    First,
}

/// A rectangular named-column table of strings.
///
/// Rows may arrive shorter than the header (flexible CSV input); missing
/// trailing cells read as empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Build a table, dropping any loader index-artifact columns.
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let keep: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|(_, name)| !is_index_artifact(name))
            .map(|(i, _)| i)
            .collect();

        if keep.len() == headers.len() {
            return Self { headers, rows };
        }

        let headers = keep.iter().map(|&i| headers[i].clone()).collect();
        let rows = rows
            .into_iter()
            .map(|row| {
                keep.iter()
                    .map(|&i| row.get(i).cloned().unwrap_or_default())
                    .collect()
            })
            .collect();
        Self { headers, rows }
    }

    /// Load a table from a file path, dispatching on the extension
    /// (case-insensitive): `.csv`, `.xlsx`, or `.xls`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::UnsupportedFormat`] for any other extension
    /// before touching the file, or a wrapped I/O, CSV, or spreadsheet error
    /// when reading fails.
    pub fn from_path(path: &Path) -> Result<Self, SentimentError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_lowercase();

        match extension.as_str() {
            "csv" => {
                let file = std::fs::File::open(path)?;
                Self::from_csv_reader(io::BufReader::new(file))
            }
            "xlsx" | "xls" => Self::from_spreadsheet_path(path),
            _ => Err(SentimentError::UnsupportedFormat { extension }),
        }
    }

    /// Parse comma-delimited text. The first record is the header row.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Csv`] on malformed input.
    pub fn from_csv_reader<R: io::Read>(reader: R) -> Result<Self, SentimentError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()?
            .iter()
            .map(ToString::to_string)
            .collect();

        let mut rows = Vec::new();
        for record in csv_reader.records() {
            let record = record?;
            rows.push(record.iter().map(ToString::to_string).collect());
        }

        Ok(Self::new(headers, rows))
    }

    /// Read the first worksheet of an `.xlsx`/`.xls` workbook. The first row
    /// is the header row; every cell is coerced to its display text.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Spreadsheet`] when the workbook cannot be
    /// opened or has no readable worksheet.
    pub fn from_spreadsheet_path(path: &Path) -> Result<Self, SentimentError> {
        let mut workbook = open_workbook_auto(path)?;
        let Some(sheet) = workbook.sheet_names().first().cloned() else {
            return Ok(Self::new(Vec::new(), Vec::new()));
        };
        let range = workbook.worksheet_range(&sheet)?;

        let mut cells = range.rows().map(|row| {
            row.iter()
                .map(|cell| match cell {
                    Data::Empty => String::new(),
                    other => other.to_string(),
                })
                .collect::<Vec<String>>()
        });

        let headers = cells.next().unwrap_or_default();
        let rows = cells.collect();
        Ok(Self::new(headers, rows))
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell text at (`row`, `col`); missing trailing cells read as `""`.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map_or("", String::as_str)
    }

    /// Resolve a column spec to `(index, name)`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::MissingColumn`] naming the expected column
    /// when it is absent (for [`ColumnSpec::First`] on a column-less table,
    /// the name is [`FIRST_COLUMN_PLACEHOLDER`]).
    pub fn resolve_column(&self, spec: &ColumnSpec) -> Result<(usize, &str), SentimentError> {
        match spec {
            ColumnSpec::Name(name) => self
                .headers
                .iter()
                .position(|h| h == name)
                .map(|i| (i, self.headers[i].as_str()))
                .ok_or_else(|| SentimentError::MissingColumn {
                    column: name.clone(),
                }),
            ColumnSpec::First => self
                .headers
                .first()
                .map(|h| (0, h.as_str()))
                .ok_or_else(|| SentimentError::MissingColumn {
                    column: FIRST_COLUMN_PLACEHOLDER.to_string(),
                }),
        }
    }
}

/// Loader artifact headers: the unnamed positional index, or the name a
/// round-tripped index export arrives under.
fn is_index_artifact(name: &str) -> bool {
    name.is_empty() || name == "Unnamed: 0"
}
