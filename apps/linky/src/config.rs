use anyhow::{bail, Context, Result};

use crate::render::images::DEFAULT_IMAGE_BASE_URL;

pub const DEFAULT_APP_NAME: &str = "Awesome Linky Thingy";

/// Where profiles come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSourceConfig {
    /// Built-in demo profile for every name.
    Static,
    /// JSON object of profiles keyed by name, read at startup.
    File { path: String },
    /// External service answering `GET <url>/<name>`.
    Http { url: String, timeout_secs: u64 },
}

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but unusable.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub app_name: String,
    pub image_base_url: String,
    pub profile_source: ProfileSourceConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let profile_source = match get("PROFILE_SOURCE").as_deref().unwrap_or("static") {
            "static" => ProfileSourceConfig::Static,
            "file" => ProfileSourceConfig::File {
                path: require(&get, "PROFILES_PATH")?,
            },
            "http" => ProfileSourceConfig::Http {
                url: require(&get, "PROFILES_URL")?,
                timeout_secs: get("PROFILE_FETCH_TIMEOUT_SECS")
                    .unwrap_or_else(|| "5".to_string())
                    .parse::<u64>()
                    .context("PROFILE_FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
            },
            other => bail!("PROFILE_SOURCE must be one of static, file, http (got '{other}')"),
        };

        Ok(Config {
            port: get("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            app_name: get("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            image_base_url: get("IMAGE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_IMAGE_BASE_URL.to_string()),
            profile_source,
        })
    }
}

fn require(get: &impl Fn(&str) -> Option<String>, key: &str) -> Result<String> {
    get(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_serve_the_static_profile() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.app_name, "Awesome Linky Thingy");
        assert_eq!(config.image_base_url, "https://source.unsplash.com");
        assert_eq!(config.profile_source, ProfileSourceConfig::Static);
    }

    #[test]
    fn file_source_needs_a_path() {
        assert!(config_from(&[("PROFILE_SOURCE", "file")]).is_err());

        let config =
            config_from(&[("PROFILE_SOURCE", "file"), ("PROFILES_PATH", "profiles.json")])
                .unwrap();
        assert_eq!(
            config.profile_source,
            ProfileSourceConfig::File {
                path: "profiles.json".to_string()
            }
        );
    }

    #[test]
    fn http_source_reads_url_and_timeout() {
        let config = config_from(&[
            ("PROFILE_SOURCE", "http"),
            ("PROFILES_URL", "http://profiles.local/api"),
            ("PROFILE_FETCH_TIMEOUT_SECS", "2"),
        ])
        .unwrap();
        assert_eq!(
            config.profile_source,
            ProfileSourceConfig::Http {
                url: "http://profiles.local/api".to_string(),
                timeout_secs: 2
            }
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("PROFILE_SOURCE", "redis")]).is_err());
        assert!(config_from(&[
            ("PROFILE_SOURCE", "http"),
            ("PROFILES_URL", "http://x"),
            ("PROFILE_FETCH_TIMEOUT_SECS", "-1"),
        ])
        .is_err());
    }
}
