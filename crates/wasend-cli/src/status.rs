//! `wasend status` — show configuration and channel status.
//!
//! Shows the config path, the browser driver settings, and which cloud
//! API credentials are present. Secret values are never echoed, only
//! their presence. `--probe` additionally pings the driver's health
//! endpoint.

use anyhow::Result;
use colored::Colorize;

use wasend_channels::BrowserChannel;
use wasend_core::config::{get_config_path, load_config};

/// Run the status command.
pub async fn run(probe: bool) -> Result<()> {
    let config = load_config(None);
    let config_path = get_config_path();

    println!();
    println!("{}", "💬 wasend Status".cyan().bold());
    println!();

    // Config
    let config_exists = config_path.exists();
    println!(
        "  {:<18} {} {}",
        "Config:".bold(),
        config_path.display(),
        if config_exists {
            "✓".green().to_string()
        } else {
            "(not found)".red().to_string()
        }
    );

    // Browser channel
    let browser = BrowserChannel::new(
        config.browser.driver_url.clone(),
        config.browser.wait_seconds,
        config.browser.close_tab,
    );
    println!("  {:<18} {}", "Driver:".bold(), browser.driver_url());
    println!(
        "  {:<18} {}",
        "Browser:".bold(),
        format!(
            "wait: {}s | close tab: {}",
            config.browser.wait_seconds, config.browser.close_tab
        )
        .dimmed()
    );

    if probe {
        let up = browser.health_check().await;
        println!(
            "  {:<18} {}",
            "Driver probe:".bold(),
            if up {
                format!("{} (driver is up)", "✓".green())
            } else {
                format!("{}", "✗ unreachable".red())
            }
        );
    }

    // Cloud API credentials (presence only, never values)
    println!();
    println!("  {}", "Cloud API:".bold());
    print_key_status("Account SID", !config.api.account_sid.is_empty());
    print_key_status("Auth token", !config.api.auth_token.is_empty());
    print_key_status("Sender number", !config.api.from_number.is_empty());

    println!();

    Ok(())
}

/// Print one credential's presence without echoing its value.
fn print_key_status(label: &str, set: bool) {
    let status = if set {
        format!("{} (set)", "✓".green())
    } else {
        format!("{}", "· not configured".dimmed())
    };
    println!("    {:<16} {}", label, status);
}
