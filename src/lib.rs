//! Database backend adapter for Vertica.
//!
//! Translates a generic ORM backend contract (connection settings, cursor
//! behavior, type mapping, dialect fragments) into calls against a native
//! Vertica client driver. Pooling, query execution and transaction
//! semantics all live in the driver or the framework; this crate is the
//! compatibility layer between the two.

pub mod config;
pub mod connection;
pub mod cursor;
pub mod driver;
pub mod error;
pub mod introspection;
pub mod ops;
pub mod prelude;
pub mod schema;
#[cfg(feature = "test-utils")]
pub mod test_utils;
pub mod types;

pub use config::{ConnectionParams, DatabaseSettings};
pub use connection::VerticaConnection;
pub use cursor::VerticaCursor;
pub use error::VerticaBackendError;
pub use types::{Row, SqlValue};
