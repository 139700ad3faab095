// Downward driver surface.
//
// The adapter consumes a fixed subset of the native Vertica client: connect,
// cursor, execute, executemany, the three fetch calls, and the driver's
// error taxonomy. That subset is spelled out here as explicit traits rather
// than a catch-all pass-through, so every forwarded capability is visible in
// the signature.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::ConnectionParams;
use crate::types::{Row, SqlValue};

/// The native driver's error classification, re-exported as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Data,
    Operational,
    Integrity,
    Internal,
    Programming,
    NotSupported,
    Database,
    Interface,
}

/// An error raised by the native driver.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct DriverError {
    kind: ErrorKind,
    message: String,
}

impl DriverError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Constraint violations get a dedicated upward error type; everything
    /// else is a generic database error.
    pub fn is_integrity(&self) -> bool {
        self.kind == ErrorKind::Integrity
    }
}

/// Entry point of a native Vertica client library.
#[async_trait]
pub trait Driver: Send + Sync {
    type Connection: NativeConnection;

    /// Open a new connection with fully assembled parameters.
    async fn connect(&self, params: &ConnectionParams) -> Result<Self::Connection, DriverError>;
}

/// An open native connection.
#[async_trait]
pub trait NativeConnection: Send + Sync {
    type Cursor: NativeCursor;

    async fn cursor(&self) -> Result<Self::Cursor, DriverError>;
}

/// A native statement/result handle.
///
/// Statements use `?` positional placeholders. `row_count` reports the
/// driver's row count for the last executed statement, `-1` when unknown.
#[async_trait]
pub trait NativeCursor: Send {
    async fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<(), DriverError>;

    async fn execute_many(
        &mut self,
        sql: &str,
        param_sets: &[Vec<SqlValue>],
    ) -> Result<(), DriverError>;

    async fn fetch_one(&mut self) -> Result<Option<Row>, DriverError>;

    async fn fetch_many(&mut self, size: usize) -> Result<Vec<Row>, DriverError>;

    async fn fetch_all(&mut self) -> Result<Vec<Row>, DriverError>;

    fn row_count(&self) -> i64;
}
