//! Configuration management

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

/// Base name of the optional config file (danceverse.toml, danceverse.json, ...)
const CONFIG_FILE: &str = "danceverse";

/// Environment prefix (LDV_COACH__API_KEY, LDV_COACH__MODEL, ...)
const ENV_PREFIX: &str = "LDV";

/// Unprefixed credential variables, checked in order when no key is configured
const API_KEY_FALLBACK_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub coach: CoachConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoachConfig {
    /// No key means the coach is disabled
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

/// Load config from the working directory and environment.
pub fn load_config() -> Result<Config> {
    load_config_from(Path::new("."))
}

/// Load config with the config file looked up in `dir`.
pub fn load_config_from(dir: &Path) -> Result<Config> {
    let config = ::config::Config::builder()
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&dir.join(CONFIG_FILE).to_string_lossy()).required(false),
        )
        // Override with environment variables (LDV_COACH__API_KEY, etc.)
        .add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut config: Config = config.try_deserialize()?;

    // Blank keys count as absent
    config.coach.api_key = config.coach.api_key.filter(|k| !k.trim().is_empty());
    if config.coach.api_key.is_none() {
        config.coach.api_key = API_KEY_FALLBACK_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|k| !k.trim().is_empty());
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    const VARS: [&str; 5] = [
        "LDV_COACH__API_KEY",
        "LDV_COACH__MODEL",
        "LDV_COACH__TIMEOUT_SECS",
        "GEMINI_API_KEY",
        "API_KEY",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_file_or_env() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.coach.api_key, None);
        assert_eq!(config.coach.model, "gemini-3-flash-preview");
        assert_eq!(
            config.coach.endpoint,
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(config.coach.timeout_secs, 20);
    }

    #[test]
    #[serial]
    fn test_file_then_env_override() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("danceverse.toml"),
            "[coach]\napi_key = \"from-file\"\nmodel = \"file-model\"\n",
        )
        .unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.coach.api_key.as_deref(), Some("from-file"));
        assert_eq!(config.coach.model, "file-model");

        std::env::set_var("LDV_COACH__MODEL", "env-model");
        std::env::set_var("LDV_COACH__TIMEOUT_SECS", "5");
        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.coach.model, "env-model");
        assert_eq!(config.coach.timeout_secs, 5);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_unprefixed_key_fallbacks() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();

        std::env::set_var("API_KEY", "plain-key");
        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.coach.api_key.as_deref(), Some("plain-key"));

        std::env::set_var("GEMINI_API_KEY", "gemini-key");
        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.coach.api_key.as_deref(), Some("gemini-key"));

        std::env::set_var("LDV_COACH__API_KEY", "prefixed-key");
        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.coach.api_key.as_deref(), Some("prefixed-key"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_key_is_absent() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("LDV_COACH__API_KEY", "   ");

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.coach.api_key, None);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_single_underscore_after_prefix() {
        clear_env();
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("LDV_COACH__API_KEY", "env-key");
        std::env::set_var("LDV_COACH__MODEL", "env-model");

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.coach.api_key.as_deref(), Some("env-key"));
        assert_eq!(config.coach.model, "env-model");
        clear_env();
    }
}
