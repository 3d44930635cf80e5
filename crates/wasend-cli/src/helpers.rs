//! Shared CLI helpers — outcome rendering and user-facing hints.

use colored::Colorize;

use wasend_core::{ChannelKind, DispatchResult, ErrorKind};

/// Print the heads-up shown before an immediate browser send.
pub fn print_wait_notice(wait_seconds: u32) {
    println!();
    println!(
        "{}",
        format!(
            "Opening WhatsApp Web; leave the browser alone for ~{wait_seconds}s while the message goes out."
        )
        .dimmed()
    );
}

/// Print a dispatch outcome.
pub fn print_result(result: &DispatchResult, via: ChannelKind) {
    println!();
    match result {
        DispatchResult::Success { confirmation_id } => {
            println!("{}", "✓ Message sent!".green().bold());
            if confirmation_id.is_empty() {
                // Not an error: the browser channel simply has no receipt.
                if via == ChannelKind::Browser {
                    println!("{}", "  (browser sends have no delivery receipt)".dimmed());
                }
            } else {
                println!("  confirmation: {confirmation_id}");
            }
        }
        DispatchResult::Failure { kind, detail } => {
            println!("{} {}", "✗ Send failed:".red().bold(), detail);
            if let Some(hint) = hint_for(*kind) {
                println!("  {}", hint.dimmed());
            }
        }
    }
    println!();
}

/// A next-step hint per failure kind.
fn hint_for(kind: ErrorKind) -> Option<&'static str> {
    match kind {
        ErrorKind::Validation | ErrorKind::InvalidSchedule => {
            Some("check the number, message, and delay, then try again")
        }
        ErrorKind::Automation => {
            Some("is the automation driver running and WhatsApp Web logged in?")
        }
        ErrorKind::ProviderRejected => Some("check the account credentials and sender number"),
        ErrorKind::Unexpected => Some("this looks transient; try again in a moment"),
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
