use crate::cursor::VerticaCursor;
use crate::driver::NativeCursor;
use crate::error::VerticaBackendError;
use crate::types::SqlValue;

/// Names of the tables in the current database.
///
/// # Errors
/// Returns errors from query execution, translated.
pub async fn table_names<C: NativeCursor>(
    cursor: &mut VerticaCursor<C>,
) -> Result<Vec<String>, VerticaBackendError> {
    cursor
        .execute("SELECT table_name FROM v_catalog.tables", &[])
        .await?;
    let rows = cursor.fetch_all().await?;
    let mut names = Vec::with_capacity(rows.len());
    for row in rows {
        if let Some(SqlValue::Text(name)) = row.into_iter().next() {
            names.push(name);
        }
    }
    Ok(names)
}
