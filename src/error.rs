use thiserror::Error;

/// Convenience result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Error type returned by the load path.
///
/// A single enum covers everything that can go wrong between opening the
/// source file and producing the in-memory match list. The first failure
/// aborts the whole load; no partial list is ever returned.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// A record does not have the expected seven-field layout.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A score field could not be parsed as a non-negative integer.
    #[error("line {line}: failed to parse field '{field}': {message} (raw='{raw}')")]
    Parse {
        line: usize,
        field: &'static str,
        raw: String,
        message: String,
    },
}
