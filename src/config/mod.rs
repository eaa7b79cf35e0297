use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub warehouse: StoreConfig,
    pub tracker: StoreConfig,
    pub pool: PoolConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

/// Connection parameters for one of the two backing stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = parse_environment(env::var("APP_ENV").ok().as_deref());

        let pool = match environment {
            Environment::Production => PoolConfig {
                max_connections: 20,
                acquire_timeout_secs: 5,
            },
            Environment::Development => PoolConfig {
                max_connections: 10,
                acquire_timeout_secs: 30,
            },
        }
        .with_env_overrides();

        Self {
            environment,
            warehouse: StoreConfig::from_env("WAREHOUSE_DB", "warehouse"),
            tracker: StoreConfig::from_env("TRACKER_DB", "learner_tracking"),
            pool,
        }
    }
}

impl StoreConfig {
    /// Read host/port/database/credentials from `<prefix>_HOST` etc.,
    /// falling back to local defaults.
    fn from_env(prefix: &str, default_database: &str) -> Self {
        let var = |suffix: &str| env::var(format!("{}_{}", prefix, suffix)).ok();

        Self {
            host: var("HOST").unwrap_or_else(|| "localhost".to_string()),
            port: var("PORT").and_then(|v| v.parse().ok()).unwrap_or(5432),
            database: var("NAME").unwrap_or_else(|| default_database.to_string()),
            user: var("USER").unwrap_or_else(|| "postgres".to_string()),
            password: var("PASSWORD").unwrap_or_default(),
        }
    }
}

impl PoolConfig {
    fn with_env_overrides(mut self) -> Self {
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.max_connections = v.parse().unwrap_or(self.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_ACQUIRE_TIMEOUT") {
            self.acquire_timeout_secs = v.parse().unwrap_or(self.acquire_timeout_secs);
        }
        self
    }
}

fn parse_environment(value: Option<&str>) -> Environment {
    match value {
        Some("production") | Some("prod") => Environment::Production,
        _ => Environment::Development,
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_defaults_to_development() {
        assert!(matches!(parse_environment(None), Environment::Development));
        assert!(matches!(parse_environment(Some("staging")), Environment::Development));
    }

    #[test]
    fn environment_recognizes_production_aliases() {
        assert!(matches!(parse_environment(Some("production")), Environment::Production));
        assert!(matches!(parse_environment(Some("prod")), Environment::Production));
    }
}
