use tracing::debug;

use crate::config::{ConnectionParams, DatabaseSettings};
use crate::cursor::VerticaCursor;
use crate::driver::{Driver, NativeConnection};
use crate::error::VerticaBackendError;

/// One framework-managed database session over a native connection.
///
/// No per-connection state initialization is needed beyond what `open`
/// does; autocommit is a session property toggled with a literal statement
/// because the driver exposes no native switch.
#[derive(Debug)]
pub struct VerticaConnection<C: NativeConnection> {
    connection: C,
    utc_timestamps: bool,
}

impl<C: NativeConnection> VerticaConnection<C> {
    /// Build connection parameters from settings and open a new native
    /// connection.
    ///
    /// # Errors
    /// `ConfigError` when the settings are incomplete, otherwise whatever
    /// the driver's connect call raises, translated.
    pub async fn open<D>(
        driver: &D,
        settings: &DatabaseSettings,
    ) -> Result<Self, VerticaBackendError>
    where
        D: Driver<Connection = C>,
    {
        let params = ConnectionParams::from_settings(settings)?;
        debug!(database = %params.database, "opening connection");
        let connection = driver.connect(&params).await?;
        Ok(Self {
            connection,
            utc_timestamps: settings.use_tz,
        })
    }

    /// Open a new cursor, wrapped for the framework.
    pub async fn cursor(&self) -> Result<VerticaCursor<C::Cursor>, VerticaBackendError> {
        let cursor = self.connection.cursor().await?;
        Ok(VerticaCursor::new(cursor, self.utc_timestamps))
    }

    /// Toggle session autocommit with a literal statement.
    pub async fn set_autocommit(&self, autocommit: bool) -> Result<(), VerticaBackendError> {
        let mode = if autocommit { "ON" } else { "OFF" };
        let mut cursor = self.cursor().await?;
        cursor
            .execute(&format!("SET SESSION AUTOCOMMIT TO {mode}"), &[])
            .await
    }

    /// Liveness probe. Any database error during `SELECT 1` means the
    /// connection is not usable; the error itself is swallowed.
    pub async fn is_usable(&self) -> bool {
        match self.cursor().await {
            Ok(mut cursor) => cursor.execute("SELECT 1", &[]).await.is_ok(),
            Err(_) => false,
        }
    }

    pub fn into_inner(self) -> C {
        self.connection
    }
}
