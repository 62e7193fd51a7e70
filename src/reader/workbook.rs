//! Workbook reading for the official spreadsheet export.
//!
//! The export carries two metadata rows (database name, extraction date)
//! above the actual header row, so the first sheet is read with a fixed
//! skip before the header. Cells keep their workbook types: numbers stay
//! numbers, empty and error cells become null.

use calamine::{open_workbook_auto, Data, Reader};
use serde_json::{Map, Value};
use std::path::Path;

use super::{SourceFormat, SourceTable};
use crate::error::{SourceError, SourceResult};

/// Metadata rows above the header row in the official export.
pub const HEADER_SKIP_ROWS: usize = 2;

/// Read the first sheet of a workbook file.
pub fn read_workbook(path: &Path) -> SourceResult<SourceTable> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| SourceError::Parse(format!("cannot open workbook: {e}")))?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(SourceError::EmptyTable)?;

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| SourceError::Parse(format!("cannot read sheet '{sheet}': {e}")))?;

    let (headers, rows) = rows_to_records(range.rows(), HEADER_SKIP_ROWS)?;

    Ok(SourceTable {
        headers,
        rows,
        format: SourceFormat::Workbook { sheet },
    })
}

/// Convert sheet rows into headers plus JSON object rows, skipping the
/// leading metadata rows.
fn rows_to_records<'a, I>(mut rows: I, skip: usize) -> SourceResult<(Vec<String>, Vec<Value>)>
where
    I: Iterator<Item = &'a [Data]>,
{
    let header_row = rows.nth(skip).ok_or(SourceError::NoHeaders)?;
    let headers: Vec<String> = header_row.iter().map(header_text).collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(SourceError::NoHeaders);
    }

    let mut records = Vec::new();

    for row in rows {
        let mut obj = Map::new();
        for (i, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let cell = row.get(i).map(cell_value).unwrap_or(Value::Null);
            obj.insert(header.clone(), cell);
        }
        records.push(Value::Object(obj));
    }

    Ok((headers, records))
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Value::Null
            } else {
                Value::String(trimmed.to_string())
            }
        }
        Data::Float(f) => serde_json::Number::from_f64(*f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        Data::Int(i) => Value::Number((*i).into()),
        Data::Bool(b) => Value::Bool(*b),
        other => Value::String(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records_of(rows: &[Vec<Data>], skip: usize) -> SourceResult<(Vec<String>, Vec<Value>)> {
        rows_to_records(rows.iter().map(|r| r.as_slice()), skip)
    }

    #[test]
    fn test_metadata_rows_skipped() {
        let rows = vec![
            vec![Data::String("Livsmedelsdatabasen".into())],
            vec![Data::String("Uttag 2024-01-15".into())],
            vec![
                Data::String("Livsmedelsnamn".into()),
                Data::String("Energi (kcal)".into()),
            ],
            vec![Data::String("Äpple".into()), Data::Float(52.0)],
        ];

        let (headers, records) = records_of(&rows, HEADER_SKIP_ROWS).unwrap();

        assert_eq!(headers, vec!["Livsmedelsnamn", "Energi (kcal)"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["Livsmedelsnamn"], "Äpple");
        assert_eq!(records[0]["Energi (kcal)"], 52.0);
    }

    #[test]
    fn test_numeric_cells_stay_numeric() {
        let rows = vec![
            vec![Data::String("a".into()), Data::String("b".into())],
            vec![Data::Float(1.5), Data::Int(2)],
        ];

        let (_, records) = records_of(&rows, 0).unwrap();
        assert_eq!(records[0]["a"], 1.5);
        assert_eq!(records[0]["b"], 2);
    }

    #[test]
    fn test_empty_and_error_cells_become_null() {
        let rows = vec![
            vec![
                Data::String("a".into()),
                Data::String("b".into()),
                Data::String("c".into()),
            ],
            vec![
                Data::Empty,
                Data::Error(calamine::CellErrorType::Div0),
                Data::String("  ".into()),
            ],
        ];

        let (_, records) = records_of(&rows, 0).unwrap();
        assert_eq!(records[0]["a"], Value::Null);
        assert_eq!(records[0]["b"], Value::Null);
        assert_eq!(records[0]["c"], Value::Null);
    }

    #[test]
    fn test_short_rows_padded_with_null() {
        let rows = vec![
            vec![Data::String("a".into()), Data::String("b".into())],
            vec![Data::String("x".into())],
        ];

        let (_, records) = records_of(&rows, 0).unwrap();
        assert_eq!(records[0]["b"], Value::Null);
    }

    #[test]
    fn test_too_few_rows_is_no_headers() {
        let rows = vec![vec![Data::String("metadata".into())]];
        assert!(matches!(
            records_of(&rows, HEADER_SKIP_ROWS).unwrap_err(),
            SourceError::NoHeaders
        ));
    }

    #[test]
    fn test_blank_header_row_is_no_headers() {
        let rows = vec![vec![Data::Empty, Data::Empty]];
        assert!(matches!(
            records_of(&rows, 0).unwrap_err(),
            SourceError::NoHeaders
        ));
    }
}
