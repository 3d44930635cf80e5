//! `wasend send` — dispatch one message through a channel.
//!
//! Flags override config: credential flags beat the `api` section of
//! the config file, which in turn was loaded over the defaults. The
//! command exits nonzero when the dispatch fails, so it scripts cleanly.

use anyhow::{bail, Result};
use clap::Args;

use wasend_channels::Dispatcher;
use wasend_core::config::{load_config, Config};
use wasend_core::{ApiCredentials, ChannelKind, MessageRequest, ScheduleSpec};

use crate::helpers;

/// Arguments for the send command.
#[derive(Args)]
pub struct SendArgs {
    /// Recipient phone number, with country code (e.g. +15551234567)
    #[arg(short, long)]
    pub to: String,

    /// Message text
    #[arg(short, long)]
    pub message: String,

    /// Delivery channel: "browser" or "cloud-api"
    #[arg(long, default_value = "browser", value_parser = parse_channel)]
    pub via: ChannelKind,

    /// Delay before sending, in minutes (browser channel only)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=60))]
    pub delay: Option<u32>,

    /// Account SID for the cloud API (overrides config)
    #[arg(long)]
    pub account_sid: Option<String>,

    /// Auth token for the cloud API (overrides config)
    #[arg(long)]
    pub auth_token: Option<String>,

    /// Sender number for the cloud API (overrides config)
    #[arg(long)]
    pub from_number: Option<String>,

    /// Enable debug logging
    #[arg(long, default_value_t = false)]
    pub logs: bool,
}

/// Parse a `--via` value.
fn parse_channel(s: &str) -> Result<ChannelKind, String> {
    s.parse()
}

/// Resolve credentials: explicit flags win over the config file.
fn merge_credentials(config: &Config, args: &SendArgs) -> ApiCredentials {
    let base = config.api.credentials();
    ApiCredentials::new(
        args.account_sid.clone().unwrap_or(base.account_sid),
        args.auth_token.clone().unwrap_or(base.auth_token),
        args.from_number.clone().unwrap_or(base.from_number),
    )
}

/// Run the send command.
pub async fn run(args: SendArgs) -> Result<()> {
    if args.delay.is_some() && args.via == ChannelKind::CloudApi {
        bail!("--delay only applies to the browser channel");
    }

    let schedule = match args.delay {
        Some(minutes) => ScheduleSpec::Delayed { minutes },
        None => ScheduleSpec::Instant,
    };

    let config = load_config(None);
    let credentials = merge_credentials(&config, &args);
    let dispatcher = Dispatcher::from_config(&config);

    // An immediate browser send blocks while the driver works the page;
    // tell the user before the pause, not after.
    if args.via == ChannelKind::Browser && schedule == ScheduleSpec::Instant {
        helpers::print_wait_notice(config.browser.wait_seconds);
    }

    let result = dispatcher
        .dispatch(
            &MessageRequest::new(args.to, args.message),
            args.via,
            schedule,
            &credentials,
        )
        .await;

    helpers::print_result(&result, args.via);

    if !result.is_success() {
        std::process::exit(1);
    }
    Ok(())
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_overrides(
        account_sid: Option<&str>,
        auth_token: Option<&str>,
        from_number: Option<&str>,
    ) -> SendArgs {
        SendArgs {
            to: "+15551234567".to_string(),
            message: "hello".to_string(),
            via: ChannelKind::CloudApi,
            delay: None,
            account_sid: account_sid.map(String::from),
            auth_token: auth_token.map(String::from),
            from_number: from_number.map(String::from),
            logs: false,
        }
    }

    fn config_with_api() -> Config {
        let mut config = Config::default();
        config.api.account_sid = "AC-config".to_string();
        config.api.auth_token = "token-config".to_string();
        config.api.from_number = "+14155238886".to_string();
        config
    }

    #[test]
    fn test_parse_channel() {
        assert_eq!(parse_channel("browser").unwrap(), ChannelKind::Browser);
        assert_eq!(parse_channel("cloud-api").unwrap(), ChannelKind::CloudApi);
        assert!(parse_channel("carrier-pigeon").is_err());
    }

    #[test]
    fn test_merge_credentials_prefers_flags() {
        let config = config_with_api();
        let args = args_with_overrides(Some("AC-flag"), None, Some("+15550000000"));

        let creds = merge_credentials(&config, &args);
        assert_eq!(creds.account_sid, "AC-flag");
        assert_eq!(creds.auth_token, "token-config");
        assert_eq!(creds.from_number, "+15550000000");
    }

    #[test]
    fn test_merge_credentials_falls_back_to_config() {
        let config = config_with_api();
        let args = args_with_overrides(None, None, None);

        let creds = merge_credentials(&config, &args);
        assert_eq!(creds.account_sid, "AC-config");
        assert_eq!(creds.auth_token, "token-config");
        assert_eq!(creds.from_number, "+14155238886");
    }
}
