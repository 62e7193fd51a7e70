//! Delimited text reading with encoding and delimiter auto-detection.
//!
//! Exports of the source database circulate both as UTF-8 and as
//! ISO-8859-1/Windows-1252 files, with `;` or `,` delimiters, so nothing
//! here assumes one fixed flavor: the raw bytes are sniffed with chardet,
//! decoded, and the delimiter is picked by counting candidates in the
//! header line. The header is expected on the first row.

use serde_json::{json, Map, Value};
use std::path::Path;

use super::{SourceFormat, SourceTable};
use crate::error::{SourceError, SourceResult};

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the detected encoding.
///
/// Unknown charsets fall back to lossy UTF-8; a malformed cell must not
/// abort the run.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.to_string()
        }
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.to_string(),
        _ => String::from_utf8_lossy(bytes).to_string(),
    }
}

/// Detect the delimiter by counting occurrences in the header line.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [';', ',', '\t', '|'];
    let mut best_sep = ';';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Read a delimited file with auto-detection of encoding and delimiter.
pub fn read_delimited(path: &Path) -> SourceResult<SourceTable> {
    let bytes = std::fs::read(path)?;

    let encoding = detect_encoding(&bytes);
    let content = decode_content(&bytes, &encoding);
    let delimiter = detect_delimiter(&content);

    let (headers, rows) = parse_records(&content, delimiter)?;

    Ok(SourceTable {
        headers,
        rows,
        format: SourceFormat::Delimited {
            encoding,
            delimiter,
        },
    })
}

/// Parse delimited content into headers and JSON object rows.
///
/// Several source column names contain the delimiter candidates themselves
/// ("Fett, totalt (g)"), so parsing goes through a real CSV reader with
/// quote handling rather than a plain split.
pub fn parse_records(content: &str, delimiter: char) -> SourceResult<(Vec<String>, Vec<Value>)> {
    if content.trim().is_empty() {
        return Err(SourceError::EmptyTable);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| SourceError::Parse(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(SourceError::NoHeaders);
    }

    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|e| SourceError::Parse(e.to_string()))?;

        let mut obj = Map::new();
        for (i, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let raw = record.get(i).map(str::trim).unwrap_or("");
            let cell = if raw.is_empty() {
                Value::Null
            } else {
                json!(raw)
            };
            obj.insert(header.clone(), cell);
        }
        rows.push(Value::Object(obj));
    }

    Ok((headers, rows))
}
