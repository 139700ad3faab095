//! Convenient imports for common functionality.

pub use crate::config::{ConnectionParams, DatabaseSettings};
pub use crate::connection::VerticaConnection;
pub use crate::cursor::VerticaCursor;
pub use crate::driver::{Driver, DriverError, ErrorKind, NativeConnection, NativeCursor};
pub use crate::error::VerticaBackendError;
pub use crate::ops::{MAX_NAME_LENGTH, operator, quote_name};
pub use crate::schema::{ColumnAttributes, ColumnType, column_sql};
pub use crate::types::{Row, SqlValue};
