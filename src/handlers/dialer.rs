//! Dialer service: resolving what a send or call press does.
//!
//! The permission check comes first; an ungranted permission turns the
//! press into a request and the action is deferred until the user
//! presses again. Validation runs at the moment of action.

use crate::error::ValidationError;
use crate::permission::{PERM_PLACE_CALL, PERM_SEND_SMS, PermissionCoordinator};
use crate::validate;

/// What a send-SMS press resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum SmsDisposition {
    /// Permission missing; request it and defer the send.
    RequestPermission(&'static str),
    /// Inputs valid; dispatch with exactly these values.
    Dispatch { number: String, text: String },
    /// Validation failed; surface exactly this error.
    Invalid(ValidationError),
}

/// What a place-call press resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum CallDisposition {
    RequestPermission(&'static str),
    Dispatch { number: String },
    Invalid(ValidationError),
}

/// Service resolving dialer actions against permissions and validation.
pub struct DialerService;

impl DialerService {
    /// Resolve a send-SMS press.
    pub fn send_sms(
        coordinator: &PermissionCoordinator,
        number: &str,
        text: &str,
    ) -> SmsDisposition {
        if !coordinator.has_permission(PERM_SEND_SMS) {
            return SmsDisposition::RequestPermission(PERM_SEND_SMS);
        }

        match validate::validate_sms(number, text) {
            Ok(()) => SmsDisposition::Dispatch {
                number: number.to_string(),
                text: text.to_string(),
            },
            Err(e) => SmsDisposition::Invalid(e),
        }
    }

    /// Resolve a place-call press.
    pub fn place_call(coordinator: &PermissionCoordinator, number: &str) -> CallDisposition {
        if !coordinator.has_permission(PERM_PLACE_CALL) {
            return CallDisposition::RequestPermission(PERM_PLACE_CALL);
        }

        match validate::validate_call(number) {
            Ok(()) => CallDisposition::Dispatch {
                number: number.to_string(),
            },
            Err(e) => CallDisposition::Invalid(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::sync::mpsc;

    use super::*;
    use crate::permission::FakeGateway;

    fn coordinator(gateway: Arc<FakeGateway>) -> PermissionCoordinator {
        let (tx, _rx) = mpsc::channel(8);
        let mut coordinator = PermissionCoordinator::new(gateway, tx);
        coordinator.add_permission(PERM_PLACE_CALL, "i", "n", "d", "g", "p");
        coordinator.add_permission(PERM_SEND_SMS, "i", "n", "d", "g", "p");
        coordinator
    }

    #[test]
    fn test_send_without_permission_requests_it() {
        let gateway = Arc::new(FakeGateway::default());
        let coordinator = coordinator(Arc::clone(&gateway));

        assert_eq!(
            DialerService::send_sms(&coordinator, "612345678", "Hello!"),
            SmsDisposition::RequestPermission(PERM_SEND_SMS)
        );
    }

    #[test]
    fn test_send_dispatches_exact_values() {
        let gateway = Arc::new(FakeGateway::default());
        gateway.grant(PERM_SEND_SMS);
        let coordinator = coordinator(Arc::clone(&gateway));

        assert_eq!(
            DialerService::send_sms(&coordinator, "612345678", "Hello!"),
            SmsDisposition::Dispatch {
                number: "612345678".to_string(),
                text: "Hello!".to_string(),
            }
        );
    }

    #[test]
    fn test_phone_error_beats_message_error() {
        let gateway = Arc::new(FakeGateway::default());
        gateway.grant(PERM_SEND_SMS);
        let coordinator = coordinator(Arc::clone(&gateway));

        // Both invalid: the phone error is the one surfaced
        assert_eq!(
            DialerService::send_sms(&coordinator, "123", ""),
            SmsDisposition::Invalid(ValidationError::InvalidPhoneFormat)
        );
        // Only the message invalid
        assert_eq!(
            DialerService::send_sms(&coordinator, "612345678", ""),
            SmsDisposition::Invalid(ValidationError::InvalidMessageFormat)
        );
    }

    #[test]
    fn test_call_flow() {
        let gateway = Arc::new(FakeGateway::default());
        let coordinator = coordinator(Arc::clone(&gateway));

        assert_eq!(
            DialerService::place_call(&coordinator, "612345678"),
            CallDisposition::RequestPermission(PERM_PLACE_CALL)
        );

        gateway.grant(PERM_PLACE_CALL);
        assert_eq!(
            DialerService::place_call(&coordinator, "612345678"),
            CallDisposition::Dispatch {
                number: "612345678".to_string(),
            }
        );
        assert_eq!(
            DialerService::place_call(&coordinator, "61234"),
            CallDisposition::Invalid(ValidationError::InvalidPhoneFormat)
        );
    }
}
