//! Domain error types for dialtui
//!
//! Provides structured error types for different domains:
//! - `ValidationError` for phone/message input validation
//! - `PermissionError` for the permission coordinator
//! - `TelephonyError` for SMS and call dispatch
//! - `DialtuiError` as the top-level error type

use thiserror::Error;

/// Top-level error type for dialtui
#[derive(Debug, Error)]
pub enum DialtuiError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Permission error: {0}")]
    Permission(#[from] PermissionError),

    #[error("Telephony error: {0}")]
    Telephony(#[from] TelephonyError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Errors from input validation
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Wrong phone number format")]
    InvalidPhoneFormat,

    #[error("Wrong message format")]
    InvalidMessageFormat,
}

/// Errors from the permission coordinator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PermissionError {
    #[error("Permission '{0}' not granted yet")]
    NotGranted(String),

    #[error("Permission '{0}' was never registered")]
    Unregistered(String),
}

/// Errors from SMS and call dispatch
#[derive(Debug, Error)]
pub enum TelephonyError {
    #[error("Failed to send message: {0}")]
    SendFailed(String),

    #[error("mmcli failed: {0}")]
    CommandFailed(String),
}

/// Result type alias for DialtuiError
pub type Result<T> = std::result::Result<T, DialtuiError>;
