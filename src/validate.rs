//! Input validation for phone numbers and message text.
//!
//! Validation runs at the moment of action (send or call), never while
//! typing, and is never cached.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// Maximum number of characters in the dialed number.
pub const MAX_PHONE_LEN: usize = 18;

/// Maximum number of characters in an SMS body.
pub const MAX_SMS_LEN: usize = 160;

// Spanish numbers, with or without an international prefix. The first
// digit after the prefix must be 6, 7, 8 or 9, followed by exactly 8
// more digits.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+34|0034|34)?[6789][0-9]{8}$").unwrap());

// Letters, digits, whitespace and punctuation. The trailing characters
// are the ASCII symbols POSIX counts as punctuation but Unicode files
// under \p{S}.
static SMS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^[\p{{L}}\p{{N}}\s\p{{P}}$+<=>^`|~]{{1,{MAX_SMS_LEN}}}$"
    ))
    .unwrap()
});

/// Whether the string is a well-formed phone number. Full-string match.
pub fn is_valid_phone(number: &str) -> bool {
    PHONE_RE.is_match(number)
}

/// Whether the string is a well-formed SMS body. Full-string match.
pub fn is_valid_message(text: &str) -> bool {
    SMS_RE.is_match(text)
}

/// Validate the pair used for an SMS send. The phone error wins when
/// both inputs are invalid.
pub fn validate_sms(number: &str, text: &str) -> Result<(), ValidationError> {
    if !is_valid_phone(number) {
        return Err(ValidationError::InvalidPhoneFormat);
    }
    if !is_valid_message(text) {
        return Err(ValidationError::InvalidMessageFormat);
    }
    Ok(())
}

/// Validate the number for a voice call.
pub fn validate_call(number: &str) -> Result<(), ValidationError> {
    if is_valid_phone(number) {
        Ok(())
    } else {
        Err(ValidationError::InvalidPhoneFormat)
    }
}
