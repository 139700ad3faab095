use thiserror::Error;

use crate::driver::DriverError;
use crate::types::Row;

#[derive(Debug, Error)]
pub enum VerticaBackendError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Constraint violation, either raised by the driver or produced by an
    /// explicit `ANALYZE_CONSTRAINTS` check. Carries the failing row count
    /// and the first offending row when known.
    #[error("Integrity error: {message}")]
    IntegrityError {
        message: String,
        row_count: usize,
        first_row: Option<Row>,
    },

    #[error(transparent)]
    DatabaseError(DriverError),

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("SQL execution error: {0}")]
    ExecutionError(String),
}

/// Uniform translation applied at every call into the driver: the driver's
/// integrity kind becomes our integrity error, anything else the generic
/// database error, with the driver's message preserved either way.
impl From<DriverError> for VerticaBackendError {
    fn from(err: DriverError) -> Self {
        if err.is_integrity() {
            VerticaBackendError::IntegrityError {
                message: err.message().to_string(),
                row_count: 0,
                first_row: None,
            }
        } else {
            VerticaBackendError::DatabaseError(err)
        }
    }
}

impl VerticaBackendError {
    pub fn is_integrity(&self) -> bool {
        matches!(self, VerticaBackendError::IntegrityError { .. })
    }
}
