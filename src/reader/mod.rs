//! Source table loading.
//!
//! Reads the raw export into a [`SourceTable`]: headers plus one JSON object
//! per row, keyed by source column name. The concrete format is picked by
//! file extension:
//!
//! - `.xlsx` / `.xls` / `.xlsm` / `.xlsb` / `.ods` - the official workbook
//!   export ([`workbook`]), header on the third physical row
//! - `.csv` / `.tsv` / `.txt` - delimited text ([`delimited`]) with
//!   encoding and delimiter auto-detection
//!
//! No schema knowledge lives here; every column of the source is kept and
//! the mapper decides what survives.

pub mod delimited;
pub mod workbook;

use std::path::Path;

use serde_json::Value;

use crate::error::{SourceError, SourceResult};

/// How the table was decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceFormat {
    /// Spreadsheet workbook; carries the sheet the data came from.
    Workbook { sheet: String },
    /// Delimited text; carries the detected encoding and delimiter.
    Delimited { encoding: String, delimiter: char },
}

/// A source table loaded into memory.
#[derive(Debug, Clone)]
pub struct SourceTable {
    /// Column headers, in source order.
    pub headers: Vec<String>,
    /// Rows as JSON objects keyed by header. Cells are strings, numbers,
    /// booleans, or null for empty/unreadable cells.
    pub rows: Vec<Value>,
    /// Format metadata for operator display.
    pub format: SourceFormat,
}

/// Load a source table, dispatching on the file extension.
pub fn read_source(path: &Path) -> SourceResult<SourceTable> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => workbook::read_workbook(path),
        "csv" | "tsv" | "txt" => delimited::read_delimited(path),
        other => Err(SourceError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_extension_rejected() {
        let err = read_source(Path::new("livsmedel.pdf")).unwrap_err();
        assert!(matches!(err, SourceError::UnsupportedFormat(ref e) if e == "pdf"));
    }

    #[test]
    fn test_missing_extension_rejected() {
        let err = read_source(Path::new("livsmedel")).unwrap_err();
        assert!(matches!(err, SourceError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_source(Path::new("/nonexistent/livsmedel.csv")).unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }
}
