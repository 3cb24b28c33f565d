//! Permission registry, request state machine, and system gateway.

mod coordinator;
mod dialog;
mod gateway;

pub use coordinator::{PermissionCoordinator, PermissionRequest, RequestState};
pub use dialog::{DialogAction, DialogChoice, DialogKind, PermissionDialog};
pub use gateway::{PermissionGateway, PolkitGateway};

#[cfg(test)]
pub use gateway::testing::FakeGateway;

/// Polkit action id guarding SMS sends.
pub const PERM_SEND_SMS: &str = "org.freedesktop.ModemManager1.Messaging";

/// Polkit action id guarding voice calls.
pub const PERM_PLACE_CALL: &str = "org.freedesktop.ModemManager1.Voice";
