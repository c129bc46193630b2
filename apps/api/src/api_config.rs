use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use tollgate_core::AppError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub storage_fallback: bool,
    pub frontend_url: Option<String>,
    pub api_host: String,
    pub api_port: u16,
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let migrate_only = env::args().nth(1).as_deref() == Some("migrate");
        Self::from_lookup(migrate_only, |name| env::var(name).ok())
    }

    pub fn from_lookup(
        migrate_only: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let database_url = non_empty("DATABASE_URL");
        let database_max_connections = non_empty("DATABASE_MAX_CONNECTIONS")
            .map(|value| {
                value.parse::<u32>().map_err(|error| {
                    AppError::Validation(format!("invalid DATABASE_MAX_CONNECTIONS: {error}"))
                })
            })
            .transpose()?
            .unwrap_or(10)
            .max(1);
        let storage_fallback = non_empty("STORAGE_FALLBACK")
            .map(|value| !value.eq_ignore_ascii_case("false"))
            .unwrap_or(true);

        let frontend_url = non_empty("FRONTEND_URL");
        let api_host = non_empty("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = non_empty("API_PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3001);

        if migrate_only && database_url.is_none() {
            return Err(AppError::Validation(
                "DATABASE_URL is required to run migrations".to_owned(),
            ));
        }

        Ok(Self {
            migrate_only,
            database_url,
            database_max_connections,
            storage_fallback,
            frontend_url,
            api_host,
            api_port,
        })
    }

    /// Returns the database to migrate when running in migrate-only mode.
    pub fn migration_database_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|_| self.migrate_only)
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Validation(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::ApiConfig;

    fn config_from(
        pairs: &[(&str, &str)],
        migrate_only: bool,
    ) -> Result<ApiConfig, tollgate_core::AppError> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
            .collect();
        ApiConfig::from_lookup(migrate_only, |name| values.get(name).cloned())
    }

    #[test]
    fn defaults_apply_without_environment() {
        let config = config_from(&[], false).unwrap_or_else(|_| unreachable!());

        assert!(config.database_url.is_none());
        assert!(config.storage_fallback);
        assert_eq!(config.database_max_connections, 10);
        assert_eq!(config.api_port, 3001);
        assert_eq!(
            config.socket_address().map(|address| address.to_string()).ok(),
            Some("127.0.0.1:3001".to_owned())
        );
    }

    #[test]
    fn blank_database_url_counts_as_unset() {
        let config = config_from(&[("DATABASE_URL", "   ")], false);
        assert!(config.is_ok_and(|config| config.database_url.is_none()));
    }

    #[test]
    fn storage_fallback_can_be_disabled() {
        let config = config_from(&[("STORAGE_FALLBACK", "FALSE")], false);
        assert!(config.is_ok_and(|config| !config.storage_fallback));
    }

    #[test]
    fn migrate_mode_requires_database_url() {
        assert!(config_from(&[], true).is_err());

        let config = config_from(&[("DATABASE_URL", "postgres://localhost/tollgate")], true);
        assert!(config.is_ok_and(|config| {
            config.migration_database_url() == Some("postgres://localhost/tollgate")
        }));
    }

    #[test]
    fn serving_mode_has_no_migration_target() {
        let config = config_from(&[("DATABASE_URL", "postgres://localhost/tollgate")], false);
        assert!(config.is_ok_and(|config| config.migration_database_url().is_none()));
    }

    #[test]
    fn invalid_host_is_rejected() {
        let config = config_from(&[("API_HOST", "not-an-ip")], false)
            .unwrap_or_else(|_| unreachable!());
        assert!(config.socket_address().is_err());
    }
}
