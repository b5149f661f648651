//! Database credentials and endpoint, read once at startup.

use std::fmt;

use sqlx::postgres::PgConnectOptions;

/// Port used when the DSN does not name one.
const DEFAULT_PORT: u16 = 5432;

/// Errors produced while loading or interpreting [`DbConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("Invalid DB_DSN '{dsn}': {reason}")]
    InvalidDsn { dsn: String, reason: String },
}

/// Immutable database configuration.
///
/// | Env Var       | Meaning                                           |
/// |---------------|---------------------------------------------------|
/// | `DB_USER`     | database user                                     |
/// | `DB_PASSWORD` | database password                                 |
/// | `DB_DSN`      | `host[:port]/database` or a `postgres://` URL     |
#[derive(Clone)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub dsn: String,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("dsn", &self.dsn)
            .finish()
    }
}

impl DbConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Empty values are treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        Ok(Self {
            user: require("DB_USER")?,
            password: require("DB_PASSWORD")?,
            dsn: require("DB_DSN")?,
        })
    }

    /// Build sqlx connect options from the DSN and credentials.
    ///
    /// Credentials from the config always win over any embedded in a URL DSN.
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        let dsn = self.dsn.trim();

        let options = if dsn.starts_with("postgres://") || dsn.starts_with("postgresql://") {
            dsn.parse::<PgConnectOptions>()
                .map_err(|e| self.invalid_dsn(e.to_string()))?
        } else {
            self.parse_easy_connect(dsn)?
        };

        Ok(options.username(&self.user).password(&self.password))
    }

    /// Parse the `host[:port]/database` form.
    fn parse_easy_connect(&self, dsn: &str) -> Result<PgConnectOptions, ConfigError> {
        let (authority, database) = dsn
            .split_once('/')
            .ok_or_else(|| self.invalid_dsn("expected host[:port]/database"))?;

        if database.is_empty() {
            return Err(self.invalid_dsn("database name is empty"));
        }

        let (host, port) = match authority.rsplit_once(':') {
            Some((host, port)) => {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| self.invalid_dsn(format!("invalid port '{port}'")))?;
                (host, port)
            }
            None => (authority, DEFAULT_PORT),
        };

        if host.is_empty() {
            return Err(self.invalid_dsn("host is empty"));
        }

        Ok(PgConnectOptions::new_without_pgpass()
            .host(host)
            .port(port)
            .database(database))
    }

    fn invalid_dsn(&self, reason: impl Into<String>) -> ConfigError {
        ConfigError::InvalidDsn {
            dsn: self.dsn.clone(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn config(dsn: &str) -> DbConfig {
        DbConfig {
            user: "shop".into(),
            password: "s3cret".into(),
            dsn: dsn.into(),
        }
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn from_lookup_reads_all_three_values() {
        let cfg = DbConfig::from_lookup(lookup_from(&[
            ("DB_USER", "shop"),
            ("DB_PASSWORD", "s3cret"),
            ("DB_DSN", "localhost:5432/shop"),
        ]))
        .unwrap();

        assert_eq!(cfg.user, "shop");
        assert_eq!(cfg.password, "s3cret");
        assert_eq!(cfg.dsn, "localhost:5432/shop");
    }

    #[test]
    fn from_lookup_reports_first_missing_key() {
        let err = DbConfig::from_lookup(lookup_from(&[("DB_USER", "shop")])).unwrap_err();
        assert_matches!(err, ConfigError::Missing("DB_PASSWORD"));
    }

    #[test]
    fn blank_value_counts_as_missing() {
        let err = DbConfig::from_lookup(lookup_from(&[
            ("DB_USER", "shop"),
            ("DB_PASSWORD", "s3cret"),
            ("DB_DSN", "   "),
        ]))
        .unwrap_err();
        assert_matches!(err, ConfigError::Missing("DB_DSN"));
    }

    #[test]
    fn easy_connect_with_port() {
        let opts = config("db.internal:6543/retail").connect_options().unwrap();
        assert_eq!(opts.get_host(), "db.internal");
        assert_eq!(opts.get_port(), 6543);
        assert_eq!(opts.get_database(), Some("retail"));
        assert_eq!(opts.get_username(), "shop");
    }

    #[test]
    fn easy_connect_defaults_port() {
        let opts = config("localhost/retail").connect_options().unwrap();
        assert_eq!(opts.get_port(), DEFAULT_PORT);
    }

    #[test]
    fn url_dsn_credentials_are_overridden() {
        let opts = config("postgres://other:pw@pg.example.com:5433/retail")
            .connect_options()
            .unwrap();
        assert_eq!(opts.get_host(), "pg.example.com");
        assert_eq!(opts.get_port(), 5433);
        assert_eq!(opts.get_username(), "shop");
    }

    #[test]
    fn dsn_without_database_is_rejected() {
        assert_matches!(
            config("localhost:5432").connect_options(),
            Err(ConfigError::InvalidDsn { .. })
        );
        assert_matches!(
            config("localhost:5432/").connect_options(),
            Err(ConfigError::InvalidDsn { .. })
        );
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = config("localhost:pg/retail").connect_options().unwrap_err();
        assert!(err.to_string().contains("invalid port 'pg'"));
    }

    #[test]
    fn debug_output_hides_password() {
        let rendered = format!("{:?}", config("localhost/retail"));
        assert!(!rendered.contains("s3cret"));
    }
}
