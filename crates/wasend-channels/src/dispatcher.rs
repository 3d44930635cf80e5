//! Dispatcher — validation, scheduling, and channel routing for one send.
//!
//! `dispatch` is the single entry point of the crate. It never panics
//! and never returns `Err`: every outcome, including rejections that
//! happen before a channel is touched, is folded into the
//! `DispatchResult` the caller renders. One call performs at most one
//! channel attempt; there are no retries and no background work.

use std::sync::Arc;

use tracing::{debug, info, warn};

use wasend_core::config::Config;
use wasend_core::{
    ApiCredentials, ChannelKind, DispatchResult, ErrorKind, MessageRequest, Outbound,
    ScheduleSpec, SendWindow,
};

use crate::base::Channel;
use crate::browser::BrowserChannel;
use crate::twilio::TwilioChannel;

/// Routes validated requests to the selected channel and normalizes the
/// outcome.
///
/// Holds one instance per channel kind. Both are stateless between
/// calls, so a single `Dispatcher` serves any number of sequential
/// dispatches without carryover.
pub struct Dispatcher {
    browser: Arc<dyn Channel>,
    cloud: Arc<dyn Channel>,
}

impl Dispatcher {
    /// Create a dispatcher over explicit channel instances.
    pub fn new(browser: Arc<dyn Channel>, cloud: Arc<dyn Channel>) -> Self {
        Self { browser, cloud }
    }

    /// Create a dispatcher wired from config.
    pub fn from_config(config: &Config) -> Self {
        let browser = BrowserChannel::new(
            config.browser.driver_url.clone(),
            config.browser.wait_seconds,
            config.browser.close_tab,
        );
        let cloud = TwilioChannel::new(config.api.base_url.clone());
        Self::new(Arc::new(browser), Arc::new(cloud))
    }

    /// Dispatch one message through one channel.
    ///
    /// Order of checks:
    /// 1. request fields — an empty recipient or body is a `Validation`
    ///    failure, reported before any channel is invoked;
    /// 2. credentials — the cloud channel additionally requires all
    ///    three credential fields, checked here for the same reason;
    /// 3. schedule — resolved against the clock now, browser path only
    ///    (the API path has no scheduling; its sends go out at once);
    /// 4. the selected channel runs, and its outcome or classified
    ///    error becomes the `DispatchResult`.
    pub async fn dispatch(
        &self,
        request: &MessageRequest,
        kind: ChannelKind,
        schedule: ScheduleSpec,
        credentials: &ApiCredentials,
    ) -> DispatchResult {
        if let Err(problem) = request.validate() {
            warn!(channel = kind.as_str(), problem = %problem, "Rejected invalid request");
            return DispatchResult::failure(ErrorKind::Validation, problem);
        }

        if kind == ChannelKind::CloudApi {
            if let Some(field) = credentials.missing_field() {
                warn!(channel = kind.as_str(), field, "Rejected incomplete credentials");
                return DispatchResult::failure(
                    ErrorKind::Validation,
                    format!("{field} is required"),
                );
            }
        }

        let window = match kind {
            ChannelKind::Browser => match schedule.resolve() {
                Ok(window) => window,
                Err(e) => {
                    warn!(channel = kind.as_str(), error = %e, "Rejected unusable schedule");
                    return DispatchResult::failure(ErrorKind::InvalidSchedule, e.to_string());
                }
            },
            ChannelKind::CloudApi => SendWindow::Immediate,
        };

        let channel = match kind {
            ChannelKind::Browser => &self.browser,
            ChannelKind::CloudApi => &self.cloud,
        };

        debug!(
            channel = channel.name(),
            immediate = window.is_immediate(),
            "Dispatching"
        );

        let outbound = Outbound::new(request.clone(), window, credentials.clone());

        match channel.send(&outbound).await {
            Ok(delivery) => {
                info!(channel = channel.name(), "Dispatch succeeded");
                DispatchResult::success(delivery.confirmation_id.unwrap_or_default())
            }
            Err(e) => {
                warn!(
                    channel = channel.name(),
                    kind = e.kind().as_str(),
                    error = %e,
                    "Dispatch failed"
                );
                DispatchResult::failure(e.kind(), e.detail())
            }
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
