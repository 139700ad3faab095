use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::VerticaBackendError;

/// Framework-supplied database settings.
///
/// Mirrors the standard settings dictionary: name, credentials, address and
/// a free-form options map forwarded to the driver. `autocommit` is session
/// behavior handled by the connection wrapper, never a driver parameter;
/// `use_tz` makes the cursor stamp naive datetimes with UTC on the way out.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub options: HashMap<String, JsonValue>,
    #[serde(default)]
    pub autocommit: bool,
    #[serde(default)]
    pub use_tz: bool,
}

/// Keyword parameters in the shape the driver's connect call expects.
///
/// Built fresh per connection attempt and discarded after use.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionParams {
    pub database: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    /// Recognized driver options plus anything framework-specific, passed
    /// through unchanged.
    pub options: HashMap<String, JsonValue>,
}

impl ConnectionParams {
    /// Assemble driver connection parameters from framework settings.
    ///
    /// Options are merged in verbatim, except an `autocommit` key which is
    /// stripped before the driver sees it. Credentials and address fields
    /// are forwarded only when non-empty.
    ///
    /// # Errors
    /// Returns `VerticaBackendError::ConfigError` when the database name is
    /// missing.
    pub fn from_settings(settings: &DatabaseSettings) -> Result<Self, VerticaBackendError> {
        if settings.name.is_empty() {
            return Err(VerticaBackendError::ConfigError(
                "database settings are improperly configured; please supply the name value"
                    .to_string(),
            ));
        }

        let mut options = settings.options.clone();
        options.remove("autocommit");

        Ok(ConnectionParams {
            database: settings.name.clone(),
            user: non_empty(&settings.user),
            password: non_empty(&settings.password),
            host: non_empty(&settings.host),
            port: settings.port,
            options,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
