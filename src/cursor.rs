use tracing::debug;

use crate::driver::NativeCursor;
use crate::error::VerticaBackendError;
use crate::types::{Row, SqlValue};

/// Wrapper around the native cursor that adapts parameter encoding, result
/// normalization and error types to what the framework expects.
///
/// The last executed statement and parameters are kept for debugging only.
pub struct VerticaCursor<C: NativeCursor> {
    cursor: C,
    utc_timestamps: bool,
    last_sql: String,
    last_params: Vec<SqlValue>,
}

/// Convert parameters into the encoding the driver accepts: booleans become
/// integer 1/0, everything else passes through unchanged.
pub fn format_params(params: &[SqlValue]) -> Vec<SqlValue> {
    params
        .iter()
        .map(|p| match p {
            SqlValue::Bool(true) => SqlValue::Int(1),
            SqlValue::Bool(false) => SqlValue::Int(0),
            other => other.clone(),
        })
        .collect()
}

impl<C: NativeCursor> VerticaCursor<C> {
    pub fn new(cursor: C, utc_timestamps: bool) -> Self {
        Self {
            cursor,
            utc_timestamps,
            last_sql: String::new(),
            last_params: Vec::new(),
        }
    }

    /// Execute a single statement.
    ///
    /// # Errors
    /// Driver errors are translated: integrity kind to
    /// `VerticaBackendError::IntegrityError`, anything else to
    /// `VerticaBackendError::DatabaseError`.
    pub async fn execute(
        &mut self,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<(), VerticaBackendError> {
        self.last_sql = sql.to_string();
        let params = format_params(params);
        self.last_params = params.clone();
        debug!(sql, params = params.len(), "executing statement");
        self.cursor.execute(sql, &params).await?;
        Ok(())
    }

    /// Execute one statement once per parameter set.
    ///
    /// An empty parameter list against a statement containing a positional
    /// placeholder is a no-op; the original target driver rejected that
    /// combination.
    ///
    /// # Errors
    /// Same translation as [`execute`](Self::execute).
    pub async fn execute_many(
        &mut self,
        sql: &str,
        param_sets: &[Vec<SqlValue>],
    ) -> Result<(), VerticaBackendError> {
        if param_sets.is_empty() && sql.contains('?') {
            return Ok(());
        }
        self.last_sql = sql.to_string();
        let formatted: Vec<Vec<SqlValue>> =
            param_sets.iter().map(|set| format_params(set)).collect();
        debug!(sql, sets = formatted.len(), "executing batch statement");
        self.cursor.execute_many(sql, &formatted).await?;
        Ok(())
    }

    fn format_row(&self, row: Row) -> Row {
        if !self.utc_timestamps {
            return row;
        }
        row.into_iter()
            .map(|value| match value {
                SqlValue::Timestamp(dt) => SqlValue::TimestampTz(dt.and_utc()),
                other => other,
            })
            .collect()
    }

    /// Fetch the next row, `None` once the result set is exhausted.
    pub async fn fetch_one(&mut self) -> Result<Option<Row>, VerticaBackendError> {
        let row = self.cursor.fetch_one().await?;
        Ok(row.map(|r| self.format_row(r)))
    }

    pub async fn fetch_many(&mut self, size: usize) -> Result<Vec<Row>, VerticaBackendError> {
        let rows = self.cursor.fetch_many(size).await?;
        Ok(rows.into_iter().map(|r| self.format_row(r)).collect())
    }

    pub async fn fetch_all(&mut self) -> Result<Vec<Row>, VerticaBackendError> {
        let rows = self.cursor.fetch_all().await?;
        Ok(rows.into_iter().map(|r| self.format_row(r)).collect())
    }

    /// Iteration forwards to the native cursor one row at a time.
    pub async fn next_row(&mut self) -> Result<Option<Row>, VerticaBackendError> {
        self.fetch_one().await
    }

    /// Row count reported by the driver for the last statement, `-1` when
    /// unknown.
    pub fn row_count(&self) -> i64 {
        self.cursor.row_count()
    }

    pub fn last_sql(&self) -> &str {
        &self.last_sql
    }

    pub fn last_params(&self) -> &[SqlValue] {
        &self.last_params
    }

    pub fn into_inner(self) -> C {
        self.cursor
    }
}
