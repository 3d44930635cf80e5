//! Twilio channel — WhatsApp delivery through Twilio's REST API.
//!
//! One form-encoded `POST` to the account's Messages endpoint per send,
//! authenticated with HTTP basic auth from the per-call credentials.
//! Twilio addresses WhatsApp recipients with a `whatsapp:` prefix, so
//! the channel adds it to `To`; the configured sender number is
//! forwarded in `From` exactly as given.
//!
//! A 2xx reply carries the created message's `sid`, which becomes the
//! confirmation token. A non-2xx reply is a `ProviderRejected` whose
//! detail preserves the provider's own message verbatim; transport
//! faults and unreadable replies are `Unexpected`.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

use wasend_core::{ChannelError, Delivery, Outbound};

use crate::base::Channel;

/// Default API base when the config leaves it blank.
pub const DEFAULT_API_BASE: &str = "https://api.twilio.com";

/// Address prefix Twilio uses for WhatsApp recipients.
const WHATSAPP_PREFIX: &str = "whatsapp:";

// ─────────────────────────────────────────────
// Wire types
// ─────────────────────────────────────────────

/// The field we read from a created-message reply.
#[derive(Debug, Deserialize)]
struct MessageResponse {
    sid: String,
}

/// The field we read from a Twilio error reply.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

// ─────────────────────────────────────────────
// TwilioChannel
// ─────────────────────────────────────────────

/// Delivery through Twilio's REST messaging API.
pub struct TwilioChannel {
    /// HTTP client (shared, connection-pooled).
    client: reqwest::Client,
    /// API base URL, without the version path.
    api_base: String,
}

impl TwilioChannel {
    /// Create a channel against the given API base.
    ///
    /// `None` or an empty string selects `DEFAULT_API_BASE`; tests pass
    /// a mock server's URL here.
    pub fn new(api_base: Option<String>) -> Self {
        let api_base = api_base
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        TwilioChannel { client, api_base }
    }

    /// Build the full Messages endpoint URL for one account.
    fn messages_url(&self, account_sid: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        format!("{}/2010-04-01/Accounts/{}/Messages.json", base, account_sid)
    }
}

#[async_trait]
impl Channel for TwilioChannel {
    fn name(&self) -> &str {
        "cloud-api"
    }

    async fn send(&self, outbound: &Outbound) -> Result<Delivery, ChannelError> {
        let request = &outbound.request;
        let credentials = &outbound.credentials;

        let url = self.messages_url(&credentials.account_sid);
        let to = format!("{}{}", WHATSAPP_PREFIX, request.recipient);
        let form = [
            ("To", to.as_str()),
            ("From", credentials.from_number.as_str()),
            ("Body", request.body.as_str()),
        ];

        debug!("Calling provider API");

        let result = self
            .client
            .post(&url)
            .basic_auth(&credentials.account_sid, Some(&credentials.auth_token))
            .form(&form)
            .send()
            .await;

        let response = match result {
            Ok(resp) => resp,
            Err(e) => {
                warn!(error = %e, "Provider request failed");
                return Err(ChannelError::Unexpected(format!("request failed: {}", e)));
            }
        };

        let status = response.status();
        if !status.is_success() {
            let raw = match response.text().await {
                Ok(text) => text,
                Err(e) => {
                    return Err(ChannelError::Unexpected(format!(
                        "failed to read provider reply: {}",
                        e
                    )))
                }
            };
            // Twilio error bodies are JSON with a human-readable message;
            // anything else is passed through with the status attached.
            let detail = match serde_json::from_str::<ProviderErrorBody>(&raw) {
                Ok(body) => body.message,
                Err(_) => format!("HTTP {}: {}", status.as_u16(), raw),
            };
            warn!(status = %status, detail = %detail, "Provider rejected the message");
            return Err(ChannelError::ProviderRejected(detail));
        }

        match response.json::<MessageResponse>().await {
            Ok(created) => {
                info!(sid = %created.sid, "Provider accepted the message");
                Ok(Delivery::confirmed(created.sid))
            }
            Err(e) => Err(ChannelError::Unexpected(format!(
                "failed to parse provider response: {}",
                e
            ))),
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
