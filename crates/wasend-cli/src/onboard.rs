//! `wasend onboard` — initialize configuration.
//!
//! Creates `~/.wasend/config.json` with defaults and points the user at
//! the two things the defaults cannot provide: a logged-in WhatsApp Web
//! session for the browser channel, and credentials for the cloud one.

use anyhow::{Context, Result};
use colored::Colorize;

use wasend_core::config::{get_config_path, save_config, Config};

/// Run the onboard command.
pub fn run() -> Result<()> {
    println!();
    println!("{}", "💬 wasend — Setup".cyan().bold());
    println!();

    let config_path = get_config_path();

    if config_path.exists() {
        println!(
            "  {} config already exists at {}",
            "✓".green(),
            config_path.display()
        );
    } else {
        save_config(&Config::default(), Some(&config_path))
            .with_context(|| format!("failed to write {}", config_path.display()))?;
        println!(
            "  {} created config at {}",
            "✓".green(),
            config_path.display()
        );
    }

    println!();
    println!("  {}", "Next steps:".bold());
    println!("    1. Start the automation driver and log in to WhatsApp Web once;");
    println!("       the browser channel reuses that session.");
    println!(
        "    2. For the cloud channel, fill the {} section of the config",
        "api".cyan()
    );
    println!("       (account SID, auth token, sender number).");
    println!();
    println!(
        "{}",
        "  Setup complete! Try `wasend send --to +15551234567 --message \"hi\"`.".green()
    );
    println!();

    Ok(())
}
