//! Config loader — reads `~/.wasend/config.json` and merges env vars.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.wasend/config.json`
//! 3. Environment variables `WASEND_<SECTION>__<FIELD>` (override JSON)
//!
//! A missing or unreadable file is not fatal: the loader falls back to
//! defaults, which leave the credential fields empty.

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::Config;

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load configuration from the default path + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    load_config_from_path(&config_path)
}

/// Load config from a specific file path.
fn load_config_from_path(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return apply_env_overrides(Config::default());
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return apply_env_overrides(Config::default());
        }
    };

    let config: Config = match serde_json::from_str(&content) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to parse config JSON: {}", e);
            return apply_env_overrides(Config::default());
        }
    };

    apply_env_overrides(config)
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    // Ensure parent directory exists
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    std::fs::write(&config_path, json)?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply environment variable overrides on top of a loaded config.
///
/// Env var format: `WASEND_<SECTION>__<FIELD>` (double underscore as delimiter).
///
/// Supported overrides:
/// - `WASEND_API__ACCOUNT_SID` → `api.account_sid`
/// - `WASEND_API__AUTH_TOKEN` → `api.auth_token`
/// - `WASEND_API__FROM_NUMBER` → `api.from_number`
/// - `WASEND_API__BASE_URL` → `api.base_url`
/// - `WASEND_BROWSER__DRIVER_URL` → `browser.driver_url`
/// - `WASEND_BROWSER__WAIT_SECONDS` → `browser.wait_seconds`
/// - `WASEND_BROWSER__CLOSE_TAB` → `browser.close_tab`
fn apply_env_overrides(mut config: Config) -> Config {
    if let Ok(val) = std::env::var("WASEND_API__ACCOUNT_SID") {
        config.api.account_sid = val;
    }
    if let Ok(val) = std::env::var("WASEND_API__AUTH_TOKEN") {
        config.api.auth_token = val;
    }
    if let Ok(val) = std::env::var("WASEND_API__FROM_NUMBER") {
        config.api.from_number = val;
    }
    if let Ok(val) = std::env::var("WASEND_API__BASE_URL") {
        config.api.base_url = Some(val);
    }

    if let Ok(val) = std::env::var("WASEND_BROWSER__DRIVER_URL") {
        config.browser.driver_url = val;
    }
    if let Ok(val) = std::env::var("WASEND_BROWSER__WAIT_SECONDS") {
        if let Ok(n) = val.parse::<u32>() {
            config.browser.wait_seconds = n;
        }
    }
    if let Ok(val) = std::env::var("WASEND_BROWSER__CLOSE_TAB") {
        config.browser.close_tab = val == "true" || val == "1";
    }

    config
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_missing_file() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.json"));
        // Should return defaults; an absent file is not an error
        assert_eq!(config.browser.wait_seconds, 15);
        assert!(config.api.from_number.is_empty());
    }

    #[test]
    fn test_load_valid_json() {
        let file = write_temp_json(
            r#"{
            "api": {
                "accountSid": "AC123",
                "fromNumber": "+14155238886"
            },
            "browser": {
                "waitSeconds": 20
            }
        }"#,
        );

        let config = load_config_from_path(file.path());
        assert_eq!(config.api.from_number, "+14155238886");
        assert_eq!(config.browser.wait_seconds, 20);
        // Default preserved
        assert!(config.api.auth_token.is_empty());
    }

    #[test]
    fn test_load_invalid_json_returns_defaults() {
        let file = write_temp_json("not valid json {{{");
        let config = load_config_from_path(file.path());
        assert_eq!(config.browser.wait_seconds, 15);
    }

    #[test]
    fn test_load_empty_json() {
        let file = write_temp_json("{}");
        let config = load_config_from_path(file.path());
        assert!(config.api.auth_token.is_empty());
        assert_eq!(config.browser.wait_seconds, 15);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.api.auth_token = "token-test".to_string();
        config.browser.wait_seconds = 25;

        save_config(&config, Some(&path)).unwrap();

        let reloaded = load_config_from_path(&path);
        assert_eq!(reloaded.api.auth_token, "token-test");
        assert_eq!(reloaded.browser.wait_seconds, 25);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        save_config(&Config::default(), Some(&path)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_env_override_account_sid() {
        std::env::set_var("WASEND_API__ACCOUNT_SID", "AC-env");
        let config = apply_env_overrides(Config::default());
        assert_eq!(config.api.account_sid, "AC-env");
        std::env::remove_var("WASEND_API__ACCOUNT_SID");
    }

    #[test]
    fn test_env_override_driver_url() {
        std::env::set_var("WASEND_BROWSER__DRIVER_URL", "http://127.0.0.1:9100");
        let config = apply_env_overrides(Config::default());
        assert_eq!(config.browser.driver_url, "http://127.0.0.1:9100");
        std::env::remove_var("WASEND_BROWSER__DRIVER_URL");
    }

    #[test]
    fn test_env_override_close_tab() {
        std::env::set_var("WASEND_BROWSER__CLOSE_TAB", "false");
        let config = apply_env_overrides(Config::default());
        assert!(!config.browser.close_tab);
        std::env::remove_var("WASEND_BROWSER__CLOSE_TAB");
    }

    #[test]
    fn test_saved_json_uses_camel_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        save_config(&Config::default(), Some(&path)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let raw: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert!(raw["browser"].get("waitSeconds").is_some());
        assert!(raw["browser"].get("wait_seconds").is_none());
    }
}
