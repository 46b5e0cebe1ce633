//! Error types for data ingestion.

use thiserror::Error;

/// Unified error type for reading conformer and embedding data.
#[derive(Error, Debug)]
pub enum IoError {
    /// Underlying filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV-level errors (framing, encoding)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Structural problem in a `.cor` file
    #[error("{source_name}:{line}: {message}")]
    MalformedCor {
        source_name: String,
        line: usize,
        message: String,
    },

    /// A configured column is absent from the CSV header
    #[error("column `{column}` not found in {source_name}")]
    MissingColumn {
        source_name: String,
        column: String,
    },

    /// A CSV field failed to parse as the expected number
    #[error("{source_name} row {row}: {message}")]
    MalformedRow {
        source_name: String,
        row: usize,
        message: String,
    },

    /// Geometry validation failed while building core types
    #[error(transparent)]
    Path(#[from] rmsd_map_core::PathError),
}

impl IoError {
    /// Creates a `.cor` structure error with source and line context.
    pub fn malformed_cor(
        source_name: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        IoError::MalformedCor {
            source_name: source_name.into(),
            line,
            message: message.into(),
        }
    }

    /// Creates a missing-column error.
    pub fn missing_column(source_name: impl Into<String>, column: impl Into<String>) -> Self {
        IoError::MissingColumn {
            source_name: source_name.into(),
            column: column.into(),
        }
    }

    /// Creates a malformed-row error with 1-based data row context.
    pub fn malformed_row(
        source_name: impl Into<String>,
        row: usize,
        message: impl Into<String>,
    ) -> Self {
        IoError::MalformedRow {
            source_name: source_name.into(),
            row,
            message: message.into(),
        }
    }
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_location() {
        let err = IoError::malformed_cor("frag.cor", 12, "expected 7 fields, got 5");
        assert_eq!(err.to_string(), "frag.cor:12: expected 7 fields, got 5");

        let err = IoError::missing_column("umaps.csv", "Y");
        assert_eq!(err.to_string(), "column `Y` not found in umaps.csv");
    }
}
