//! Browser channel — drives the local WhatsApp Web automation driver.
//!
//! The driver is a small HTTP bridge in front of the user's own logged-in
//! browser session: `POST /send` opens a conversation tab, types the
//! message, and sends it; `POST /schedule` queues a send for a wall-clock
//! time; `GET /health` reports whether a session is live. The driver owns
//! all timing — an immediate send returns once the page has settled (and
//! the tab closed, when configured), while a scheduled send returns as
//! soon as the job is queued.
//!
//! This channel never produces a confirmation token: WhatsApp Web has no
//! delivery receipt to read back, so a completed send maps to
//! `Delivery::accepted()`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use wasend_core::{ChannelError, Delivery, Outbound, SendWindow};

use crate::base::Channel;

/// Default driver endpoint when the config leaves it blank.
pub const DEFAULT_DRIVER_URL: &str = "http://127.0.0.1:8777";

// ─────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────

/// Body of `POST /send`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendTask<'a> {
    phone: &'a str,
    message: &'a str,
    wait_seconds: u32,
    close_tab: bool,
}

/// Body of `POST /schedule`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleTask<'a> {
    phone: &'a str,
    message: &'a str,
    hour: u32,
    minute: u32,
}

/// The field we read from a driver error reply.
#[derive(Debug, Deserialize)]
struct DriverReply {
    #[serde(default)]
    error: String,
}

// ─────────────────────────────────────────────
// BrowserChannel
// ─────────────────────────────────────────────

/// Delivery through the local browser automation driver.
pub struct BrowserChannel {
    /// HTTP client (shared, connection-pooled).
    client: reqwest::Client,
    /// Driver base URL.
    driver_url: String,
    /// Seconds the driver lets the page settle after an immediate send.
    wait_seconds: u32,
    /// Whether the driver closes the tab after an immediate send.
    close_tab: bool,
}

impl BrowserChannel {
    /// Create a channel against the given driver.
    ///
    /// An empty `driver_url` selects `DEFAULT_DRIVER_URL`.
    pub fn new(driver_url: String, wait_seconds: u32, close_tab: bool) -> Self {
        let driver_url = if driver_url.trim().is_empty() {
            DEFAULT_DRIVER_URL.to_string()
        } else {
            driver_url
        };

        // Generous timeout: an immediate send blocks for the settle wait
        // plus whatever WhatsApp Web needs to load.
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to build HTTP client");

        BrowserChannel {
            client,
            driver_url,
            wait_seconds,
            close_tab,
        }
    }

    /// The resolved driver base URL.
    pub fn driver_url(&self) -> &str {
        &self.driver_url
    }

    /// Build a full driver endpoint URL.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.driver_url.trim_end_matches('/'), path)
    }

    /// Probe `GET /health` and report whether the driver has a live session.
    pub async fn health_check(&self) -> bool {
        let url = self.endpoint("health");
        match self
            .client
            .get(&url)
            .timeout(std::time::Duration::from_secs(5))
            .send()
            .await
        {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// POST one task to the driver and classify the outcome.
    async fn post_task<T: Serialize>(&self, path: &str, task: &T) -> Result<(), ChannelError> {
        let url = self.endpoint(path);

        let result = self.client.post(&url).json(task).send().await;

        let response = match result {
            Ok(resp) => resp,
            Err(e) => {
                warn!(url = %url, error = %e, "Driver request failed");
                return Err(ChannelError::Automation(format!(
                    "driver unreachable at {}: {}",
                    self.driver_url, e
                )));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let detail = match response.json::<DriverReply>().await {
                Ok(reply) if !reply.error.is_empty() => reply.error,
                _ => format!("driver returned HTTP {}", status.as_u16()),
            };
            warn!(status = %status, detail = %detail, "Driver reported an error");
            return Err(ChannelError::Automation(detail));
        }

        Ok(())
    }
}

#[async_trait]
impl Channel for BrowserChannel {
    fn name(&self) -> &str {
        "browser"
    }

    async fn send(&self, outbound: &Outbound) -> Result<Delivery, ChannelError> {
        let request = &outbound.request;

        match outbound.window {
            SendWindow::Immediate => {
                debug!(
                    wait_seconds = self.wait_seconds,
                    close_tab = self.close_tab,
                    "Sending through browser driver"
                );
                let task = SendTask {
                    phone: &request.recipient,
                    message: &request.body,
                    wait_seconds: self.wait_seconds,
                    close_tab: self.close_tab,
                };
                self.post_task("send", &task).await?;
                info!("Browser send completed");
            }
            SendWindow::At { hour, minute } => {
                debug!(hour, minute, "Scheduling through browser driver");
                let task = ScheduleTask {
                    phone: &request.recipient,
                    message: &request.body,
                    hour,
                    minute,
                };
                self.post_task("schedule", &task).await?;
                info!(hour, minute, "Browser send queued");
            }
        }

        Ok(Delivery::accepted())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
