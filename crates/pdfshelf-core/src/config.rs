//! Configuration module
//!
//! Configuration is read once at startup from the process environment (with `.env`
//! support via dotenvy). Storage settings are optional: a missing value does not
//! stop the server, it is reported per request instead.

use std::env;

use crate::models::KeyStrategy;

// Common constants
const SERVER_PORT: u16 = 8000;
const DEFAULT_REGION: &str = "auto";
const SESSION_TTL_SECS: u64 = 7 * 24 * 60 * 60;
const PRESIGNED_URL_TTL_SECS: u64 = 3600;
const MAX_UPLOAD_SIZE_MB: usize = 25;

/// Base server configuration
#[derive(Clone, Debug)]
pub struct BaseConfig {
    pub server_port: u16,
    pub environment: String,
    pub max_upload_size_bytes: usize,
}

/// Object storage configuration.
///
/// Every field except `region` is optional; `missing_vars` reports which required
/// variables are absent so callers can surface a descriptive error.
#[derive(Clone, Debug, Default)]
pub struct StorageSettings {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    pub bucket: Option<String>,
    pub endpoint: Option<String>,
    /// Overrides `endpoint` when set (R2 custom domain).
    pub custom_domain: Option<String>,
    pub region: String,
}

impl StorageSettings {
    /// Endpoint to talk to: the custom domain when configured, otherwise the endpoint.
    pub fn resolved_endpoint(&self) -> Option<&str> {
        self.custom_domain
            .as_deref()
            .or(self.endpoint.as_deref())
    }

    /// Names of required storage variables that are not set.
    pub fn missing_vars(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.access_key_id.is_none() {
            missing.push("R2_ACCESS_KEY_ID");
        }
        if self.secret_access_key.is_none() {
            missing.push("R2_SECRET_ACCESS_KEY");
        }
        if self.bucket.is_none() {
            missing.push("R2_BUCKET_NAME");
        }
        if self.resolved_endpoint().is_none() {
            missing.push("R2_ENDPOINT");
        }
        missing
    }
}

/// Authentication configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub login_password: String,
    pub session_ttl_secs: u64,
}

// Keeps the password out of debug output and logs.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("login_password", &"<redacted>")
            .field("session_ttl_secs", &self.session_ttl_secs)
            .finish()
    }
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub base: BaseConfig,
    pub storage: StorageSettings,
    pub auth: AuthConfig,
    pub key_strategy: KeyStrategy,
    pub presigned_url_ttl_secs: u64,
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let environment = var("ENVIRONMENT")
            .or_else(|| var("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let server_port = match var("SERVER_PORT") {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("Invalid SERVER_PORT '{}': {}", port, e))?,
            None => SERVER_PORT,
        };

        let max_upload_size_mb = var("MAX_UPLOAD_SIZE_MB")
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(MAX_UPLOAD_SIZE_MB);

        let storage = StorageSettings {
            access_key_id: var("R2_ACCESS_KEY_ID"),
            secret_access_key: var("R2_SECRET_ACCESS_KEY"),
            bucket: var("R2_BUCKET_NAME"),
            endpoint: var("R2_ENDPOINT"),
            custom_domain: var("R2_CUSTOM_DOMAIN"),
            region: var("R2_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
        };

        let auth = AuthConfig {
            login_password: var("LOGIN_PASSWORD").unwrap_or_default(),
            session_ttl_secs: var("SESSION_TTL_SECS")
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(SESSION_TTL_SECS),
        };

        let key_strategy = match var("KEY_STRATEGY") {
            Some(raw) => raw.parse::<KeyStrategy>()?,
            None => KeyStrategy::default(),
        };

        let presigned_url_ttl_secs = var("PRESIGNED_URL_TTL_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(PRESIGNED_URL_TTL_SECS);

        Ok(Config {
            base: BaseConfig {
                server_port,
                environment,
                max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
            },
            storage,
            auth,
            key_strategy,
            presigned_url_ttl_secs,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.base.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.base.server_port
    }

    pub fn environment(&self) -> &str {
        &self.base.environment
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.base.max_upload_size_bytes
    }

    pub fn storage(&self) -> &StorageSettings {
        &self.storage
    }

    pub fn login_password(&self) -> &str {
        &self.auth.login_password
    }

    pub fn session_ttl_secs(&self) -> u64 {
        self.auth.session_ttl_secs
    }

    pub fn key_strategy(&self) -> KeyStrategy {
        self.key_strategy
    }

    pub fn presigned_url_ttl_secs(&self) -> u64 {
        self.presigned_url_ttl_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.server_port(), 8000);
        assert_eq!(config.environment(), "development");
        assert_eq!(config.storage().region, "auto");
        assert_eq!(config.presigned_url_ttl_secs(), 3600);
        assert_eq!(config.key_strategy(), KeyStrategy::UuidPrefix);
        assert_eq!(config.max_upload_size_bytes(), 25 * 1024 * 1024);
        assert!(!config.is_production());
    }

    #[test]
    fn missing_storage_vars_are_reported_by_name() {
        let config = Config::from_lookup(lookup(&[("R2_BUCKET_NAME", "docs")])).unwrap();
        assert_eq!(
            config.storage().missing_vars(),
            vec!["R2_ACCESS_KEY_ID", "R2_SECRET_ACCESS_KEY", "R2_ENDPOINT"]
        );
    }

    #[test]
    fn custom_domain_overrides_endpoint() {
        let config = Config::from_lookup(lookup(&[
            ("R2_ENDPOINT", "https://acct.r2.cloudflarestorage.com"),
            ("R2_CUSTOM_DOMAIN", "https://files.example.com"),
        ]))
        .unwrap();
        assert_eq!(
            config.storage().resolved_endpoint(),
            Some("https://files.example.com")
        );
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = Config::from_lookup(lookup(&[("R2_ACCESS_KEY_ID", "  ")])).unwrap();
        assert!(config.storage().access_key_id.is_none());
    }

    #[test]
    fn invalid_key_strategy_is_rejected() {
        assert!(Config::from_lookup(lookup(&[("KEY_STRATEGY", "random")])).is_err());
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(Config::from_lookup(lookup(&[("SERVER_PORT", "http")])).is_err());
    }

    #[test]
    fn production_detection_accepts_short_form() {
        let config = Config::from_lookup(lookup(&[("APP_ENV", "prod")])).unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn debug_output_redacts_password() {
        let config = Config::from_lookup(lookup(&[("LOGIN_PASSWORD", "hunter2")])).unwrap();
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
