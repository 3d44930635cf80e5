//! Channel error taxonomy — every delivery failure, classified.
//!
//! Channels never let a raw transport or driver fault escape: each is
//! wrapped in a `ChannelError` whose detail string survives into the
//! `DispatchResult` unchanged.

use thiserror::Error;

use crate::types::ErrorKind;

/// A classified failure raised by a delivery channel.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ChannelError {
    /// The browser automation driver failed: unreachable, timed out,
    /// or reported an error for the send or schedule call.
    #[error("automation failure: {0}")]
    Automation(String),

    /// The provider received the request and rejected it (bad auth,
    /// malformed number, rate limit, quota). The detail carries the
    /// provider's own message verbatim.
    #[error("provider rejected: {0}")]
    ProviderRejected(String),

    /// A transport-level fault or a reply the channel could not
    /// interpret.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl ChannelError {
    /// The result kind this error maps to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChannelError::Automation(_) => ErrorKind::Automation,
            ChannelError::ProviderRejected(_) => ErrorKind::ProviderRejected,
            ChannelError::Unexpected(_) => ErrorKind::Unexpected,
        }
    }

    /// The detail message, without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            ChannelError::Automation(detail)
            | ChannelError::ProviderRejected(detail)
            | ChannelError::Unexpected(detail) => detail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(ChannelError::Automation("x".into()).kind(), ErrorKind::Automation);
        assert_eq!(
            ChannelError::ProviderRejected("x".into()).kind(),
            ErrorKind::ProviderRejected
        );
        assert_eq!(ChannelError::Unexpected("x".into()).kind(), ErrorKind::Unexpected);
    }

    #[test]
    fn test_detail_is_verbatim() {
        let err = ChannelError::ProviderRejected("Invalid From Number".into());
        assert_eq!(err.detail(), "Invalid From Number");
    }

    #[test]
    fn test_display_includes_detail() {
        let err = ChannelError::Automation("driver unreachable".into());
        assert!(err.to_string().contains("driver unreachable"));
        assert!(err.to_string().contains("automation"));
    }
}
