//! Wasend Channels — WhatsApp delivery channel integrations.
//!
//! This crate provides:
//! - **base**: The `Channel` trait that both delivery paths implement
//! - **browser**: `BrowserChannel` — drives the local WhatsApp Web automation driver
//! - **twilio**: `TwilioChannel` — sends through Twilio's REST messaging API
//! - **dispatcher**: `Dispatcher` — validation, routing, and outcome normalization
//!
//! Every public entry point converges on a `wasend_core::DispatchResult`;
//! no channel fault escapes as a panic or an unclassified error.

pub mod base;
pub mod browser;
pub mod dispatcher;
pub mod twilio;

pub use base::Channel;
pub use browser::BrowserChannel;
pub use dispatcher::Dispatcher;
pub use twilio::TwilioChannel;
