//! Vertica-specific SQL dialect fragments and operations.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::cursor::VerticaCursor;
use crate::driver::NativeCursor;
use crate::error::VerticaBackendError;
use crate::types::SqlValue;

/// Longest identifier Vertica accepts.
pub const MAX_NAME_LENGTH: usize = 128;

lazy_static! {
    /// Lookup name to SQL comparison fragment. Wildcard parameters for the
    /// LIKE/ILIKE forms are supplied by the caller.
    pub static ref OPERATORS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("exact", "= ?");
        m.insert("iexact", "ILIKE ?");
        m.insert("contains", "LIKE ?");
        m.insert("icontains", "ILIKE ?");
        m.insert("regex", "REGEXP BINARY ?");
        m.insert("iregex", "REGEXP ?");
        m.insert("gt", "> ?");
        m.insert("gte", ">= ?");
        m.insert("lt", "< ?");
        m.insert("lte", "<= ?");
        m.insert("startswith", "LIKE ?");
        m.insert("endswith", "LIKE ?");
        m.insert("istartswith", "ILIKE ?");
        m.insert("iendswith", "ILIKE ?");
        m
    };
}

/// SQL fragment for a lookup name, `None` for lookups this dialect does not
/// define.
pub fn operator(lookup: &str) -> Option<&'static str> {
    OPERATORS.get(lookup).copied()
}

/// Wrap an identifier in double quotes. Quoting once is enough.
pub fn quote_name(name: &str) -> String {
    if name.starts_with('"') && name.ends_with('"') {
        return name.to_string();
    }
    format!("\"{name}\"")
}

/// Fetch the value last generated by the table's backing sequence.
///
/// # Errors
/// `ExecutionError` when the sequence query yields no scalar.
pub async fn last_insert_id<C: NativeCursor>(
    cursor: &mut VerticaCursor<C>,
    table_name: &str,
    _pk_name: &str,
) -> Result<i64, VerticaBackendError> {
    cursor
        .execute(&format!("SELECT currval('{table_name}_seq')"), &[])
        .await?;
    let row = cursor.fetch_one().await?;
    row.and_then(|r| r.first().and_then(SqlValue::as_int))
        .ok_or_else(|| {
            VerticaBackendError::ExecutionError(format!(
                "sequence {table_name}_seq returned no value"
            ))
        })
}

/// Run the batch constraint check for a table.
///
/// # Errors
/// `IntegrityError` when any constraint fails, carrying the failing row
/// count and the first offending row as diagnostic payload.
pub async fn validate_constraints<C: NativeCursor>(
    cursor: &mut VerticaCursor<C>,
    table_name: &str,
) -> Result<(), VerticaBackendError> {
    cursor
        .execute(
            "SELECT ANALYZE_CONSTRAINTS(?)",
            &[SqlValue::Text(table_name.to_string())],
        )
        .await?;
    let row_count = cursor.row_count();
    if row_count > 0 {
        let first_row = cursor.fetch_one().await?;
        return Err(VerticaBackendError::IntegrityError {
            message: "Constraints failed".to_string(),
            row_count: row_count as usize,
            first_row,
        });
    }
    Ok(())
}
