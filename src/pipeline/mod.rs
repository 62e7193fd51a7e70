//! Pipeline driver: load, map, classify, persist.
//!
//! One synchronous batch run over the whole table. Fatal errors (source
//! unreadable, required columns missing) abort before the output file is
//! touched; cell-level problems were already recovered during mapping and
//! never stop the run.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::classify::RuleSet;
use crate::error::{PipelineResult, SourceError};
use crate::models::FoodRecord;
use crate::reader::{read_source, SourceFormat, SourceTable};
use crate::report::{log_info, log_success};
use crate::schema;

/// Fixed output file name; re-running overwrites it.
pub const OUTPUT_FILENAME: &str = "LivsmedelsDB_Cleaned_Vegan.csv";

/// Options for a cleaning run.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    /// Output path override. Defaults to [`OUTPUT_FILENAME`] in the
    /// working directory.
    pub output: Option<PathBuf>,

    /// Number of rows echoed back in the summary preview.
    pub preview_rows: usize,
}

impl Default for CleanOptions {
    fn default() -> Self {
        Self {
            output: None,
            preview_rows: 10,
        }
    }
}

/// One line of the operator preview.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewRow {
    pub name: String,
    pub category: String,
    pub is_vegan: bool,
}

/// Result of a cleaning run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    /// Where the cleaned table was written.
    pub output_path: PathBuf,
    /// Total rows written (equals the source row count).
    pub total: usize,
    /// Rows classified vegan.
    pub vegan_count: usize,
    /// The first rows, for operator sanity-checking.
    pub preview: Vec<PreviewRow>,
}

/// Run the full pipeline on one source file.
///
/// Reads the source table, checks the required columns once, maps and
/// classifies every row in order, and writes the cleaned CSV. Exactly one
/// output file per run; re-running overwrites it.
pub fn run(source: &Path, options: &CleanOptions) -> PipelineResult<PipelineSummary> {
    log_info(format!("Reading source table: {}", source.display()));
    let table = read_source(source)?;
    describe_table(&table);

    if table.rows.is_empty() {
        return Err(SourceError::EmptyTable.into());
    }

    schema::validate_headers(&table.headers)?;
    log_success(format!(
        "All {} required columns present",
        schema::COLUMN_MAP.len()
    ));

    let rules = RuleSet::standard();
    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let mut record = schema::map_row(row);
        record.is_vegan = rules.is_vegan(&record);
        records.push(record);
    }

    let vegan_count = records.iter().filter(|r| r.is_vegan).count();
    log_success(format!(
        "Classified {} rows, {} vegan",
        records.len(),
        vegan_count
    ));

    let output_path = options
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(OUTPUT_FILENAME));
    write_output(&output_path, &records)?;
    log_success(format!("Wrote {}", output_path.display()));

    let preview = records
        .iter()
        .take(options.preview_rows)
        .map(|r| PreviewRow {
            name: r.name.clone(),
            category: r.category.clone(),
            is_vegan: r.is_vegan,
        })
        .collect();

    Ok(PipelineSummary {
        output_path,
        total: records.len(),
        vegan_count,
        preview,
    })
}

fn describe_table(table: &SourceTable) {
    match &table.format {
        SourceFormat::Workbook { sheet } => {
            log_info(format!("Workbook sheet '{}': {} rows", sheet, table.rows.len()));
        }
        SourceFormat::Delimited {
            encoding,
            delimiter,
        } => {
            log_info(format!(
                "Delimited text ({}, delimiter '{}'): {} rows",
                encoding,
                format_delimiter(*delimiter),
                table.rows.len()
            ));
        }
    }
}

/// Format delimiter for display
fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

/// Write all records in order. The writer is scoped to this function and
/// flushed before returning, on success or error.
fn write_output(path: &Path, records: &[FoodRecord]) -> PipelineResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
