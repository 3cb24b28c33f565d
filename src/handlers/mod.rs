//! Event handlers module
//!
//! This module contains services for resolving user intents:
//! - `dialer` - send/call resolution against permissions and validation
//! - `dialog` - permission dialog responses

mod dialer;
mod dialog;

pub use dialer::{CallDisposition, DialerService, SmsDisposition};
pub use dialog::{DialogOutcome, DialogService};
