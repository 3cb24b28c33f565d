//! System permission gateway.
//!
//! The gateway answers three questions about a permission identifier:
//! is it currently granted, will the user grant it now, and can the
//! user still be prompted at all.

use std::process::Command;

use crate::log;

/// Live access to the system's permission state.
///
/// `request` blocks until the system prompt resolves, so callers run it
/// on a blocking task off the UI loop.
pub trait PermissionGateway: Send + Sync {
    /// Current grant status. Queried live, never cached.
    fn check(&self, identifier: &str) -> bool;

    /// Show the system prompt and wait for the user's answer.
    fn request(&self, identifier: &str) -> bool;

    /// Whether the user can still be prompted for this identifier.
    /// False once the denial is permanent.
    fn should_show_rationale(&self, identifier: &str) -> bool;

    /// Request a batch of identifiers, one outcome per identifier.
    fn request_many(&self, identifiers: &[String]) -> Vec<(String, bool)> {
        identifiers
            .iter()
            .map(|id| (id.clone(), self.request(id)))
            .collect()
    }
}

/// Gateway backed by polkit's `pkcheck`.
pub struct PolkitGateway;

impl PolkitGateway {
    fn pkcheck(&self, identifier: &str, interactive: bool) -> Option<std::process::Output> {
        let mut cmd = Command::new("pkcheck");
        cmd.arg("--action-id")
            .arg(identifier)
            .arg("--process")
            .arg(std::process::id().to_string());
        if interactive {
            cmd.arg("--allow-user-interaction");
        }

        match cmd.output() {
            Ok(output) => Some(output),
            Err(e) => {
                log::log(&format!("pkcheck failed to spawn: {}", e));
                None
            }
        }
    }
}

impl PermissionGateway for PolkitGateway {
    fn check(&self, identifier: &str) -> bool {
        self.pkcheck(identifier, false)
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn request(&self, identifier: &str) -> bool {
        log::log_event(&format!("requesting permission {}", identifier));
        self.pkcheck(identifier, true)
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    fn should_show_rationale(&self, identifier: &str) -> bool {
        // pkcheck reports a denial that authentication could still lift
        // as a challenge; anything else is final for this identifier.
        match self.pkcheck(identifier, false) {
            Some(output) if output.status.success() => false,
            Some(output) => {
                let text = String::from_utf8_lossy(&output.stderr).to_lowercase();
                text.contains("challenge") || text.contains("authentication")
            }
            None => false,
        }
    }
}
