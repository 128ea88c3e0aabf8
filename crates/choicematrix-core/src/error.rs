//! Error types for ChoiceMatrix

use thiserror::Error;

/// Main error type for matrix parsing.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// The header row lacks the row-identifier column.
    #[error("matrix header has no `chartId` column")]
    MissingIdColumn,

    /// A header cell is empty, so the column cannot be addressed by name.
    #[error("matrix header contains an unnamed column at index {0}")]
    UnnamedColumn(usize),

    /// Two columns share the same choice-group name.
    #[error("duplicate choice group `{0}` in matrix header")]
    DuplicateChoiceGroup(String),
}

/// Result type alias for matrix operations.
pub type Result<T> = std::result::Result<T, MatrixError>;
