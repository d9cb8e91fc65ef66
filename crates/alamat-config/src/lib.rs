use std::env;

use serde::{Deserialize, Serialize};

use self::onemap::OneMapConfig;

pub mod onemap;

fn default_provider() -> String {
    "onemap".to_string()
}

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Provider the app verifies with, by metadata name
    #[serde(default = "default_provider")]
    pub provider: String,
    pub onemap: OneMapConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            onemap: OneMapConfig::default(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();

        if let Ok(provider) = env::var("ALAMAT_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(base_url) = env::var("ONEMAP_BASE_URL") {
            config.onemap.base_url = base_url;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.provider, "onemap");
        assert!(config.onemap.enabled);
        assert_eq!(config.onemap.base_url, "https://developers.onemap.sg");
    }

    #[test]
    fn test_env_overrides() {
        unsafe {
            env::set_var("ALAMAT_PROVIDER", "nominatim");
            env::set_var("ONEMAP_BASE_URL", "http://localhost:9999");
        }

        let config = Config::new();

        // restore the environment before asserting
        unsafe {
            env::remove_var("ALAMAT_PROVIDER");
            env::remove_var("ONEMAP_BASE_URL");
        }

        assert_eq!(config.provider, "nominatim");
        assert_eq!(config.onemap.base_url, "http://localhost:9999");
    }
}
