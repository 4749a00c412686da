//! Environment-driven server configuration.

use std::env;

/// Runtime configuration sourced from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
    /// SQLite database file path.
    pub database_path: String,
}

impl ServerConfig {
    const DEFAULT_HOST: &'static str = "127.0.0.1";
    const DEFAULT_PORT: u16 = 4000;
    const DEFAULT_DATABASE_PATH: &'static str = "todos.db";

    /// Reads configuration from `HOST`, `PORT`, and `SQLITE_PATH`, falling
    /// back to defaults for absent variables.
    ///
    /// An unparseable `PORT` is ignored with a warning rather than aborting
    /// startup.
    #[must_use]
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_owned());
        let port = env::var("PORT")
            .ok()
            .and_then(|raw| {
                raw.parse()
                    .inspect_err(|_| tracing::warn!(value = %raw, "ignoring unparseable PORT"))
                    .ok()
            })
            .unwrap_or(Self::DEFAULT_PORT);
        let database_path =
            env::var("SQLITE_PATH").unwrap_or_else(|_| Self::DEFAULT_DATABASE_PATH.to_owned());

        Self {
            host,
            port,
            database_path,
        }
    }
}
