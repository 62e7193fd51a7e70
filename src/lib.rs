//! # Foodclean - food database cleaning and vegan classification
//!
//! Foodclean ingests the raw Livsmedelsverket food-composition export,
//! maps its Swedish columns onto a canonical English schema, derives an
//! `IsVegan` flag for every item, and writes the cleaned table as CSV.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Source file │────▶│   Reader    │────▶│ Map+Classify│────▶│ Cleaned CSV │
//! │ (xlsx/csv)  │     │ (auto-fmt)  │     │ (rule set)  │     │ (+IsVegan)  │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use foodclean::{run, CleanOptions};
//! use std::path::Path;
//!
//! fn main() {
//!     let summary = run(Path::new("livsmedel.xlsx"), &CleanOptions::default()).unwrap();
//!     println!("{} of {} items vegan", summary.vegan_count, summary.total);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - The canonical output record
//! - [`reader`] - Source table loading (workbook and delimited text)
//! - [`schema`] - Column mapping and cell coercion
//! - [`classify`] - The vegan rule engine
//! - [`pipeline`] - Full-run orchestration
//! - [`report`] - Operator logging

// Core modules
pub mod error;
pub mod models;

// Ingestion
pub mod reader;

// Mapping and classification
pub mod classify;
pub mod schema;

// Orchestration
pub mod pipeline;

// Logging
pub mod report;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{MappingError, PipelineError, SourceError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::FoodRecord;

// =============================================================================
// Re-exports - Reader
// =============================================================================

pub use reader::{read_source, SourceFormat, SourceTable};

// =============================================================================
// Re-exports - Schema
// =============================================================================

pub use schema::{map_row, validate_headers, COLUMN_MAP};

// =============================================================================
// Re-exports - Classification
// =============================================================================

pub use classify::{rules_description, Rule, RuleMatch, RuleSet, Subject};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use pipeline::{run, CleanOptions, PipelineSummary, PreviewRow, OUTPUT_FILENAME};
