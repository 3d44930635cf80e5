//! Domain types — the request, envelope, and result of one dispatch.
//!
//! A caller builds one `MessageRequest` per send attempt, picks a
//! `ChannelKind`, and receives a `DispatchResult` back. None of these
//! types is retained by the core after the call returns, and none holds
//! a reference to another beyond the envelope handed to the channel.

use serde::{Deserialize, Serialize};

use crate::schedule::SendWindow;

// ─────────────────────────────────────────────
// MessageRequest
// ─────────────────────────────────────────────

/// One message to one recipient. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageRequest {
    /// Recipient phone number including country code (e.g. `"+15551234567"`).
    pub recipient: String,
    /// Message text. Must be non-empty.
    pub body: String,
}

impl MessageRequest {
    /// Create a new request.
    pub fn new(recipient: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            body: body.into(),
        }
    }

    /// Check that both fields carry content.
    ///
    /// Whitespace-only input counts as empty. Returns the first problem
    /// as a human-readable message.
    pub fn validate(&self) -> Result<(), String> {
        if self.recipient.trim().is_empty() {
            return Err("recipient number is required".to_string());
        }
        if self.body.trim().is_empty() {
            return Err("message body is required".to_string());
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────
// ChannelKind
// ─────────────────────────────────────────────

/// The two supported delivery mechanisms. No third value is representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChannelKind {
    /// Drive the local WhatsApp Web session through the automation driver.
    Browser,
    /// Call the cloud messaging provider's REST API.
    CloudApi,
}

impl ChannelKind {
    /// Stable name used in logs and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelKind::Browser => "browser",
            ChannelKind::CloudApi => "cloud-api",
        }
    }
}

impl std::str::FromStr for ChannelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "browser" => Ok(ChannelKind::Browser),
            "cloud-api" => Ok(ChannelKind::CloudApi),
            other => Err(format!(
                "unknown channel '{other}' (expected 'browser' or 'cloud-api')"
            )),
        }
    }
}

// ─────────────────────────────────────────────
// ApiCredentials
// ─────────────────────────────────────────────

/// Opaque credentials for the cloud API channel.
///
/// The core never interprets these values; it only checks presence and
/// forwards them to the channel. `Debug` deliberately omits the secret
/// values so they cannot leak through logging.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ApiCredentials {
    /// Account identifier used for basic auth and the endpoint path.
    pub account_sid: String,
    /// Auth token paired with the account SID.
    pub auth_token: String,
    /// Sender number registered with the provider (e.g. `"+14155238886"`).
    pub from_number: String,
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("account_sid_set", &!self.account_sid.is_empty())
            .field("auth_token_set", &!self.auth_token.is_empty())
            .field("from_number", &self.from_number)
            .finish()
    }
}

impl ApiCredentials {
    /// Create a credentials snapshot.
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        from_number: impl Into<String>,
    ) -> Self {
        Self {
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            from_number: from_number.into(),
        }
    }

    /// Name of the first empty field, if any. Whitespace counts as empty.
    pub fn missing_field(&self) -> Option<&'static str> {
        if self.account_sid.trim().is_empty() {
            return Some("account SID");
        }
        if self.auth_token.trim().is_empty() {
            return Some("auth token");
        }
        if self.from_number.trim().is_empty() {
            return Some("sender number");
        }
        None
    }

    /// Whether all three fields are set.
    pub fn is_complete(&self) -> bool {
        self.missing_field().is_none()
    }
}

// ─────────────────────────────────────────────
// Outbound
// ─────────────────────────────────────────────

/// The envelope handed to a channel for one send.
///
/// Channels ignore the fields they do not need: the browser channel
/// never reads `credentials`, the cloud channel never reads `window`.
#[derive(Clone, Debug)]
pub struct Outbound {
    /// The validated request.
    pub request: MessageRequest,
    /// When the channel should act.
    pub window: SendWindow,
    /// Credentials for channels that authenticate per call.
    pub credentials: ApiCredentials,
}

impl Outbound {
    /// Create a new envelope.
    pub fn new(request: MessageRequest, window: SendWindow, credentials: ApiCredentials) -> Self {
        Self {
            request,
            window,
            credentials,
        }
    }
}

// ─────────────────────────────────────────────
// Delivery
// ─────────────────────────────────────────────

/// Raw channel outcome, before normalization into a `DispatchResult`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Delivery {
    /// Provider receipt, when the channel produces one.
    pub confirmation_id: Option<String>,
}

impl Delivery {
    /// The channel finished (or queued the work) but has no receipt to show.
    pub fn accepted() -> Self {
        Self {
            confirmation_id: None,
        }
    }

    /// The channel finished and the provider returned a message id.
    pub fn confirmed(id: impl Into<String>) -> Self {
        Self {
            confirmation_id: Some(id.into()),
        }
    }
}

// ─────────────────────────────────────────────
// DispatchResult
// ─────────────────────────────────────────────

/// Kind of dispatch failure, as shown to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    /// A required input field was empty.
    Validation,
    /// The delay was outside the allowed range.
    InvalidSchedule,
    /// The browser automation driver failed.
    Automation,
    /// The provider received the request and rejected it.
    ProviderRejected,
    /// A transport fault or a reply that could not be interpreted.
    Unexpected,
}

impl ErrorKind {
    /// Stable name used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::InvalidSchedule => "invalid-schedule",
            ErrorKind::Automation => "automation",
            ErrorKind::ProviderRejected => "provider-rejected",
            ErrorKind::Unexpected => "unexpected",
        }
    }
}

/// The uniform outcome of one dispatch.
///
/// A browser send that completes carries an empty confirmation id:
/// that channel has no delivery receipt, and the empty token is the
/// documented way to say so. Token presence must not be used to tell
/// which channel ran.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum DispatchResult {
    /// The channel finished without a classified failure.
    #[serde(rename_all = "camelCase")]
    Success {
        /// Provider message id, or `""` when the channel has no receipt.
        confirmation_id: String,
    },
    /// The dispatch was rejected or the channel failed.
    #[serde(rename_all = "camelCase")]
    Failure {
        /// What class of failure this is.
        kind: ErrorKind,
        /// Human-readable detail, preserved verbatim from the source.
        detail: String,
    },
}

impl DispatchResult {
    /// Build a success result.
    pub fn success(confirmation_id: impl Into<String>) -> Self {
        DispatchResult::Success {
            confirmation_id: confirmation_id.into(),
        }
    }

    /// Build a failure result.
    pub fn failure(kind: ErrorKind, detail: impl Into<String>) -> Self {
        DispatchResult::Failure {
            kind,
            detail: detail.into(),
        }
    }

    /// Whether this is a `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, DispatchResult::Success { .. })
    }

    /// The failure kind, if this is a `Failure`.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            DispatchResult::Failure { kind, .. } => Some(*kind),
            DispatchResult::Success { .. } => None,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
