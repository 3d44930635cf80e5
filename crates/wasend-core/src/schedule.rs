//! Schedule resolution — turning a delay into the moment a channel acts.
//!
//! A `ScheduleSpec` says *how* the caller wants the send timed; the
//! `SendWindow` is that wish resolved against a clock, at dispatch time,
//! never earlier. Calendar arithmetic is chrono's, so a delay that
//! crosses midnight lands on the correct wall-clock time of the next day
//! (23:58 plus five minutes resolves to 00:03).

use chrono::{DateTime, Duration, Local, TimeZone, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ─────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────

/// Smallest accepted delay.
pub const MIN_DELAY_MINUTES: u32 = 1;

/// Largest accepted delay.
pub const MAX_DELAY_MINUTES: u32 = 60;

// ─────────────────────────────────────────────
// ScheduleSpec
// ─────────────────────────────────────────────

/// When the caller wants the message to go out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScheduleSpec {
    /// Send as soon as the channel can act.
    Instant,
    /// Send after a whole number of minutes, between
    /// `MIN_DELAY_MINUTES` and `MAX_DELAY_MINUTES` inclusive.
    Delayed { minutes: u32 },
}

/// A schedule resolution problem.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The delay fell outside the accepted 1..=60 minute range.
    #[error("delay must be between 1 and 60 minutes, got {minutes}")]
    DelayOutOfRange { minutes: u32 },
}

impl ScheduleSpec {
    /// Resolve against the local clock.
    pub fn resolve(&self) -> Result<SendWindow, ScheduleError> {
        self.resolve_from(Local::now())
    }

    /// Resolve against an explicit clock (for testability).
    ///
    /// `Instant` resolves to `Immediate` for any `now`. `Delayed` adds
    /// the delay to `now` and projects the target's hour and minute;
    /// the range is checked here even though callers clamp their input,
    /// so an out-of-range value can never reach a channel.
    pub fn resolve_from<Tz: TimeZone>(&self, now: DateTime<Tz>) -> Result<SendWindow, ScheduleError> {
        match *self {
            ScheduleSpec::Instant => Ok(SendWindow::Immediate),
            ScheduleSpec::Delayed { minutes } => {
                if !(MIN_DELAY_MINUTES..=MAX_DELAY_MINUTES).contains(&minutes) {
                    return Err(ScheduleError::DelayOutOfRange { minutes });
                }
                let target = now + Duration::minutes(i64::from(minutes));
                Ok(SendWindow::At {
                    hour: target.hour(),
                    minute: target.minute(),
                })
            }
        }
    }
}

// ─────────────────────────────────────────────
// SendWindow
// ─────────────────────────────────────────────

/// The resolution of a `ScheduleSpec`: when the channel should act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SendWindow {
    /// Act now.
    Immediate,
    /// Act at this wall-clock time.
    ///
    /// Only hour and minute are carried because that is all the
    /// downstream automation driver accepts; a delay that crossed
    /// midnight is therefore indistinguishable from the same time
    /// on the following day.
    At { hour: u32, minute: u32 },
}

impl SendWindow {
    /// Whether this window means "act now".
    pub fn is_immediate(&self) -> bool {
        matches!(self, SendWindow::Immediate)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
