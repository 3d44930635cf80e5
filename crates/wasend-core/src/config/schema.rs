//! Configuration schema — typed model of `~/.wasend/config.json`.
//!
//! Hierarchy: `Config` → `ApiConfig`, `BrowserConfig`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.
//! We use `#[serde(rename_all = "camelCase")]` to handle the conversion.

use serde::{Deserialize, Serialize};

use crate::types::ApiCredentials;

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration — loaded from `~/.wasend/config.json` + env vars.
///
/// Resolved once at process start and passed by reference from there;
/// nothing re-reads it at dispatch time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub api: ApiConfig,
    pub browser: BrowserConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            browser: BrowserConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────
// Api
// ─────────────────────────────────────────────

/// Cloud API credentials and endpoint override.
///
/// All fields default to empty: an unconfigured section is not an
/// error, it only means the cloud channel will reject dispatches until
/// credentials are supplied.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiConfig {
    /// Account SID for basic auth.
    #[serde(default)]
    pub account_sid: String,
    /// Auth token paired with the account SID.
    #[serde(default)]
    pub auth_token: String,
    /// Sender number registered with the provider.
    #[serde(default)]
    pub from_number: String,
    /// Custom API base URL (overrides the provider default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("account_sid_set", &!self.account_sid.is_empty())
            .field("auth_token_set", &!self.auth_token.is_empty())
            .field("from_number", &self.from_number)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ApiConfig {
    /// Whether all three credential fields are set.
    pub fn is_configured(&self) -> bool {
        !self.account_sid.is_empty()
            && !self.auth_token.is_empty()
            && !self.from_number.is_empty()
    }

    /// Snapshot the stored credentials for dispatching.
    pub fn credentials(&self) -> ApiCredentials {
        ApiCredentials::new(&self.account_sid, &self.auth_token, &self.from_number)
    }
}

// ─────────────────────────────────────────────
// Browser
// ─────────────────────────────────────────────

/// Local browser automation driver settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowserConfig {
    /// Driver base URL. Empty = default (`http://127.0.0.1:8777`).
    #[serde(default)]
    pub driver_url: String,
    /// Seconds the driver lets WhatsApp Web settle before triggering
    /// the send.
    #[serde(default = "default_wait_seconds")]
    pub wait_seconds: u32,
    /// Close the chat tab after an instant send completes.
    #[serde(default = "default_true")]
    pub close_tab: bool,
}

fn default_wait_seconds() -> u32 {
    15
}

fn default_true() -> bool {
    true
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            driver_url: String::new(),
            wait_seconds: 15,
            close_tab: true,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api.account_sid.is_empty());
        assert!(config.api.base_url.is_none());
        assert!(config.browser.driver_url.is_empty());
        assert_eq!(config.browser.wait_seconds, 15);
        assert!(config.browser.close_tab);
    }

    #[test]
    fn test_config_from_json_camel_case() {
        let json = serde_json::json!({
            "api": {
                "accountSid": "AC123",
                "authToken": "secret",
                "fromNumber": "+14155238886"
            },
            "browser": {
                "driverUrl": "http://127.0.0.1:9000",
                "waitSeconds": 25,
                "closeTab": false
            }
        });

        let config: Config = serde_json::from_value(json).unwrap();
        assert_eq!(config.api.account_sid, "AC123");
        assert_eq!(config.api.auth_token, "secret");
        assert_eq!(config.api.from_number, "+14155238886");
        assert_eq!(config.browser.driver_url, "http://127.0.0.1:9000");
        assert_eq!(config.browser.wait_seconds, 25);
        assert!(!config.browser.close_tab);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let json = serde_json::json!({
            "api": {
                "accountSid": "AC123"
            }
        });

        let config: Config = serde_json::from_value(json).unwrap();
        assert_eq!(config.api.account_sid, "AC123");
        assert!(config.api.auth_token.is_empty());
        // Browser section untouched
        assert_eq!(config.browser.wait_seconds, 15);
        assert!(config.browser.close_tab);
    }

    #[test]
    fn test_empty_json_gives_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.browser.wait_seconds, 15);
        assert!(!config.api.is_configured());
    }

    #[test]
    fn test_config_json_uses_camel_case() {
        let config = Config::default();
        let json = serde_json::to_value(&config).unwrap();
        assert!(json["api"].get("accountSid").is_some());
        assert!(json["browser"].get("waitSeconds").is_some());
        assert!(json["browser"].get("closeTab").is_some());
        // Should NOT have snake_case keys
        assert!(json["api"].get("account_sid").is_none());
        assert!(json["browser"].get("wait_seconds").is_none());
    }

    #[test]
    fn test_is_configured() {
        let mut api = ApiConfig::default();
        assert!(!api.is_configured());

        api.account_sid = "AC123".into();
        api.auth_token = "secret".into();
        assert!(!api.is_configured());

        api.from_number = "+14155238886".into();
        assert!(api.is_configured());
    }

    #[test]
    fn test_credentials_snapshot() {
        let api = ApiConfig {
            account_sid: "AC123".into(),
            auth_token: "secret".into(),
            from_number: "+14155238886".into(),
            base_url: None,
        };
        let creds = api.credentials();
        assert_eq!(creds.account_sid, "AC123");
        assert_eq!(creds.auth_token, "secret");
        assert_eq!(creds.from_number, "+14155238886");
        assert!(creds.is_complete());
    }

    #[test]
    fn test_api_config_debug_redacts_secrets() {
        let api = ApiConfig {
            account_sid: "AC123".into(),
            auth_token: "secret-token".into(),
            from_number: "+14155238886".into(),
            base_url: None,
        };
        let rendered = format!("{api:?}");
        assert!(!rendered.contains("AC123"));
        assert!(!rendered.contains("secret-token"));
    }

    #[test]
    fn test_config_serialization_round_trip() {
        let mut config = Config::default();
        config.api.account_sid = "AC999".into();
        config.browser.wait_seconds = 30;

        let json_str = serde_json::to_string_pretty(&config).unwrap();
        let back: Config = serde_json::from_str(&json_str).unwrap();
        assert_eq!(back.api.account_sid, "AC999");
        assert_eq!(back.browser.wait_seconds, 30);
    }
}
