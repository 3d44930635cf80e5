//! wasend Core — domain types, schedule resolution, and configuration.
//!
//! This crate provides:
//! - **types**: `MessageRequest`, `Outbound`, `Delivery`, `DispatchResult` and friends
//! - **schedule**: `ScheduleSpec` → `SendWindow` resolution against a clock
//! - **error**: `ChannelError`, the classified failure surface of delivery channels
//! - **config**: schema + loader for `~/.wasend/config.json`
//! - **utils**: data-directory path helpers

pub mod config;
pub mod error;
pub mod schedule;
pub mod types;
pub mod utils;

pub use error::ChannelError;
pub use schedule::{ScheduleSpec, SendWindow};
pub use types::{
    ApiCredentials, ChannelKind, Delivery, DispatchResult, ErrorKind, MessageRequest, Outbound,
};
