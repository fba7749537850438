use std::path::PathBuf;

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "FIELDCRAFT_ENV";
const CONFIG_DIR_ENV: &str = "FIELDCRAFT_CONFIG_DIR";

/// Canonical variable names used by the hosted store; honored as fallbacks
/// for the store section when the layered sources leave it unset.
const STORE_URL_ENV: &str = "SUPABASE_URL";
const STORE_KEY_ENV: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

/// Top-level configuration structure loaded from layered sources.
///
/// Built once at process start and passed by reference into handler
/// construction; nothing reads the process environment after load.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, and environment overlay.
    pub fn load() -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                // Default to repo root `config` directory.
                std::env::current_dir()
                    .map(|cwd| cwd.join("config"))
                    .expect("unable to resolve current directory")
            });

        let base_path = config_dir.join("base.toml");
        let environment_filename = format!("{}.toml", environment);
        let environment_path = config_dir.join(environment_filename);

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(config::Environment::with_prefix("FIELDCRAFT").separator("_"));

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        // Override environment field with parsed enum variant.
        settings.environment = match environment.as_str() {
            "local" => Environment::Local,
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            other => {
                return Err(anyhow!(
                    "unsupported environment '{}'; expected local/staging/production",
                    other
                ));
            }
        };

        // The hosted store's own variable names fill in anything the
        // layered sources left empty.
        if settings.store.url.is_empty() {
            if let Ok(url) = std::env::var(STORE_URL_ENV) {
                settings.store.url = url;
            }
        }
        if settings.store.service_role_key.is_empty() {
            if let Ok(key) = std::env::var(STORE_KEY_ENV) {
                settings.store.service_role_key = key;
            }
        }

        Ok(settings)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "ServerSettings::default_host")]
    pub host: String,
    #[serde(default = "ServerSettings::default_port")]
    pub port: u16,
    #[serde(default = "ServerSettings::default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl ServerSettings {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    fn default_port() -> u16 {
        8080
    }

    fn default_request_timeout_ms() -> u64 {
        15000
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            request_timeout_ms: Self::default_request_timeout_ms(),
        }
    }
}

/// Connection settings for the hosted store.
///
/// Absent or invalid values are not validated at startup; they surface as
/// store-call failures at request time.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub service_role_key: String,
    #[serde(default = "StoreSettings::default_videos_table")]
    pub videos_table: String,
    #[serde(default = "StoreSettings::default_suggestions_table")]
    pub suggestions_table: String,
}

impl StoreSettings {
    fn default_videos_table() -> String {
        "videos".to_string()
    }

    fn default_suggestions_table() -> String {
        "improvement_suggestions".to_string()
    }
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            service_role_key: String::new(),
            videos_table: Self::default_videos_table(),
            suggestions_table: Self::default_suggestions_table(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_environment_is_local() {
        let settings = Settings::default();
        assert_eq!(settings.environment, Environment::Local);
    }

    #[test]
    fn default_server_binds_all_interfaces() {
        let settings = Settings::default();
        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 8080);
    }

    #[test]
    fn default_store_tables_match_hosted_schema() {
        let settings = Settings::default();
        assert_eq!(settings.store.videos_table, "videos");
        assert_eq!(settings.store.suggestions_table, "improvement_suggestions");
    }
}
