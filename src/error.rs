//! Error types for loading and rendering a chart.

use std::path::PathBuf;

/// Fatal errors. Any of these leaves the chart unrendered; the only recovery is a fresh load.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("Failed to read table '{path}': {source}")]
    Unreachable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[cfg(feature = "polars")]
    #[error("Failed to parse table: {0}")]
    Parse(#[from] polars::prelude::PolarsError),
    #[error("Table has no '{0}' column")]
    MissingColumn(&'static str),
    #[error("Category '{0}' appears more than once")]
    DuplicateCategory(String),
    #[error("Category '{category}' has a value that is {reason}")]
    InvalidValue {
        category: String,
        reason: QualityReason,
    },
    #[error("Invalid chart configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Why a value cell was not accepted as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityReason {
    NotANumber,
    NotFinite,
    Negative,
}

/// Non-fatal problem with a single record, kept on the `RowSet` for inspection.
#[derive(Clone, Debug, PartialEq)]
pub struct DataQualityIssue {
    /// Zero-based record index in source order.
    pub line: usize,
    pub category: String,
    pub raw: String,
    pub reason: QualityReason,
}

impl std::fmt::Display for QualityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            QualityReason::NotANumber => "not a number",
            QualityReason::NotFinite => "not finite",
            QualityReason::Negative => "negative",
        })
    }
}

impl std::fmt::Display for DataQualityIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "record {} ('{}'): value '{}' is {}",
            self.line, self.category, self.raw, self.reason
        )
    }
}
