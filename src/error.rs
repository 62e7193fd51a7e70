//! Error types for the cleaning pipeline.
//!
//! - [`SourceError`] - source table reading errors
//! - [`MappingError`] - canonical schema precondition errors
//! - [`PipelineError`] - top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// Source Reading Errors
// =============================================================================

/// Errors while reading the source table.
///
/// All of these are fatal for the run; no output is written.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to read file.
    #[error("Failed to read source file: {0}")]
    Io(#[from] std::io::Error),

    /// File opened but could not be parsed as tabular data.
    #[error("Source is not parseable as a table: {0}")]
    Parse(String),

    /// Table parsed but holds no data rows.
    #[error("Source table contains no data rows")]
    EmptyTable,

    /// No usable header row.
    #[error("No header row found in source table")]
    NoHeaders,

    /// File extension does not name a supported table format.
    #[error("Unsupported source format '.{0}' (expected .xlsx or .csv)")]
    UnsupportedFormat(String),
}

// =============================================================================
// Schema Mapping Errors
// =============================================================================

/// Errors while mapping the source schema onto the canonical one.
#[derive(Debug, Error)]
pub enum MappingError {
    /// One or more required source columns are absent. Detected once at
    /// load time; carries every missing column, not just the first.
    #[error("Missing required source columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline orchestration errors.
///
/// This is the main error type returned by [`crate::pipeline::run`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Source reading error.
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Schema precondition error.
    #[error("Schema error: {0}")]
    Mapping(#[from] MappingError),

    /// Output serialization error.
    #[error("Failed to write output: {0}")]
    Output(#[from] csv::Error),

    /// Output IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for source reading operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Result type for schema mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
