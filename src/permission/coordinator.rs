//! Permission registry and request state machine.
//!
//! The coordinator owns the registered permissions, tracks the one
//! request that may be in flight, and turns each asynchronous outcome
//! into the dialog the user should see next.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::error::PermissionError;
use crate::log;
use crate::platform::PlatformEvent;

use super::dialog::PermissionDialog;
use super::gateway::PermissionGateway;

/// User-facing messages for one registered permission.
///
/// Immutable after registration. `info` and `denied` are carried for
/// callers that want to explain a permission up front or after a plain
/// denial; the three dialogs use `needed`, `granted` and
/// `permanently_denied`.
#[derive(Debug, Clone)]
pub struct PermissionRequest {
    pub identifier: String,
    pub info: String,
    pub needed: String,
    #[allow(dead_code)] // Carried for callers explaining a plain denial
    pub denied: String,
    pub granted: String,
    pub permanently_denied: String,
}

/// Request-flow state. One request may be outstanding at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Requested { identifiers: Vec<String> },
}

/// Registry plus request state machine.
pub struct PermissionCoordinator {
    order: Vec<String>,
    entries: HashMap<String, PermissionRequest>,
    state: RequestState,
    gateway: Arc<dyn PermissionGateway>,
    events: mpsc::Sender<PlatformEvent>,
}

impl PermissionCoordinator {
    pub fn new(gateway: Arc<dyn PermissionGateway>, events: mpsc::Sender<PlatformEvent>) -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
            state: RequestState::Idle,
            gateway,
            events,
        }
    }

    /// Register a permission and its display messages.
    ///
    /// Identifiers are unique: re-registering replaces the messages and
    /// keeps the original position.
    pub fn add_permission(
        &mut self,
        identifier: &str,
        info: &str,
        needed: &str,
        denied: &str,
        granted: &str,
        permanently_denied: &str,
    ) {
        if !self.entries.contains_key(identifier) {
            self.order.push(identifier.to_string());
        }
        self.entries.insert(
            identifier.to_string(),
            PermissionRequest {
                identifier: identifier.to_string(),
                info: info.to_string(),
                needed: needed.to_string(),
                denied: denied.to_string(),
                granted: granted.to_string(),
                permanently_denied: permanently_denied.to_string(),
            },
        );
    }

    /// Live grant check against the gateway.
    pub fn has_permission(&self, identifier: &str) -> bool {
        self.gateway.check(identifier)
    }

    /// Whether every registered permission is currently granted.
    pub fn has_all_needed(&self) -> bool {
        self.order.iter().all(|id| self.gateway.check(id))
    }

    /// Every registered permission, in registration order.
    pub fn registered(&self) -> Vec<&PermissionRequest> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id))
            .collect()
    }

    /// Registered permissions that are currently not granted.
    pub fn rejected(&self) -> Vec<&PermissionRequest> {
        self.order
            .iter()
            .filter(|id| !self.gateway.check(id))
            .filter_map(|id| self.entries.get(id))
            .collect()
    }

    /// Current request-flow state.
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Begin the single-permission flow.
    ///
    /// The request runs on a blocking task; the outcome arrives later as
    /// a [`PlatformEvent::PermissionOutcome`]. Ignored while another
    /// request is outstanding.
    pub fn request_one(&mut self, identifier: &str) {
        if self.state != RequestState::Idle {
            log::log("permission request already in flight, ignoring");
            return;
        }
        self.state = RequestState::Requested {
            identifiers: vec![identifier.to_string()],
        };

        let gateway = Arc::clone(&self.gateway);
        let events = self.events.clone();
        let identifier = identifier.to_string();
        tokio::task::spawn_blocking(move || {
            let granted = gateway.request(&identifier);
            let _ = events.blocking_send(PlatformEvent::PermissionOutcome {
                identifier,
                granted,
            });
        });
    }

    /// Begin the batch flow for every registered permission.
    pub fn request_all_needed(&mut self) {
        if self.state != RequestState::Idle {
            log::log("permission request already in flight, ignoring");
            return;
        }
        let identifiers = self.order.clone();
        self.state = RequestState::Requested {
            identifiers: identifiers.clone(),
        };

        let gateway = Arc::clone(&self.gateway);
        let events = self.events.clone();
        tokio::task::spawn_blocking(move || {
            let results = gateway.request_many(&identifiers);
            let _ = events.blocking_send(PlatformEvent::BatchPermissionOutcome { results });
        });
    }

    /// React to a single-permission outcome.
    ///
    /// Returns the dialog to queue. An outcome naming an identifier that
    /// was never registered is a silent no-op apart from the log line,
    /// matching the reference flow's lookup behavior.
    pub fn on_outcome(&mut self, identifier: &str, granted: bool) -> Option<PermissionDialog> {
        self.state = RequestState::Idle;

        let Some(entry) = self.entries.get(identifier) else {
            log::log(&format!(
                "outcome for unregistered permission {}, dropping",
                identifier
            ));
            return None;
        };
        Some(self.dialog_for(entry, granted))
    }

    /// React to a batch outcome.
    ///
    /// If everything was granted there is nothing to show. Otherwise
    /// every identifier in the batch gets its own dialog; unregistered
    /// identifiers are reported back as errors.
    pub fn on_batch_outcome(
        &mut self,
        results: &[(String, bool)],
    ) -> (Vec<PermissionDialog>, Vec<PermissionError>) {
        self.state = RequestState::Idle;

        if results.iter().all(|(_, granted)| *granted) {
            return (Vec::new(), Vec::new());
        }

        let mut dialogs = Vec::new();
        let mut errors = Vec::new();
        for (identifier, granted) in results {
            match self.entries.get(identifier) {
                Some(entry) => dialogs.push(self.dialog_for(entry, *granted)),
                None => errors.push(PermissionError::Unregistered(identifier.clone())),
            }
        }
        (dialogs, errors)
    }

    /// The three-way branch: granted, denied-softly, denied-permanently.
    fn dialog_for(&self, entry: &PermissionRequest, granted: bool) -> PermissionDialog {
        if granted {
            PermissionDialog::granted(entry.granted.clone())
        } else if self.gateway.should_show_rationale(&entry.identifier) {
            PermissionDialog::denied_soft(&entry.identifier, entry.needed.clone())
        } else {
            PermissionDialog::denied_hard(entry.permanently_denied.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::DialogKind;
    use crate::permission::gateway::testing::FakeGateway;

    fn coordinator_with(
        gateway: Arc<FakeGateway>,
    ) -> (PermissionCoordinator, mpsc::Receiver<PlatformEvent>) {
        let (tx, rx) = mpsc::channel(8);
        (PermissionCoordinator::new(gateway, tx), rx)
    }

    fn register(coordinator: &mut PermissionCoordinator, id: &str) {
        coordinator.add_permission(
            id,
            "info",
            "needed",
            "denied",
            "granted",
            "permanently denied",
        );
    }

    #[test]
    fn test_identifiers_are_unique() {
        let gateway = Arc::new(FakeGateway::default());
        let (mut coordinator, _rx) = coordinator_with(Arc::clone(&gateway));

        register(&mut coordinator, "perm.a");
        register(&mut coordinator, "perm.b");
        coordinator.add_permission("perm.a", "i2", "n2", "d2", "g2", "p2");

        assert_eq!(coordinator.rejected().len(), 2);
        // Re-registration kept the original position and took the new messages
        assert_eq!(coordinator.rejected()[0].identifier, "perm.a");
        assert_eq!(coordinator.rejected()[0].needed, "n2");
    }

    #[test]
    fn test_has_permission_is_live() {
        let gateway = Arc::new(FakeGateway::default());
        let (mut coordinator, _rx) = coordinator_with(Arc::clone(&gateway));
        register(&mut coordinator, "perm.a");

        assert!(!coordinator.has_permission("perm.a"));
        gateway.grant("perm.a");
        assert!(coordinator.has_permission("perm.a"));
        gateway.revoke("perm.a");
        assert!(!coordinator.has_permission("perm.a"));
    }

    #[test]
    fn test_has_all_needed_and_rejected() {
        let gateway = Arc::new(FakeGateway::default());
        let (mut coordinator, _rx) = coordinator_with(Arc::clone(&gateway));
        register(&mut coordinator, "perm.a");
        register(&mut coordinator, "perm.b");

        gateway.grant("perm.a");
        assert!(!coordinator.has_all_needed());
        assert_eq!(coordinator.rejected().len(), 1);
        assert_eq!(coordinator.rejected()[0].identifier, "perm.b");

        gateway.grant("perm.b");
        assert!(coordinator.has_all_needed());
        assert!(coordinator.rejected().is_empty());
    }

    #[test]
    fn test_granted_outcome_shows_info_dialog() {
        let gateway = Arc::new(FakeGateway::default());
        let (mut coordinator, _rx) = coordinator_with(gateway);
        register(&mut coordinator, "perm.a");

        let dialog = coordinator.on_outcome("perm.a", true).unwrap();
        assert_eq!(dialog.kind, DialogKind::Granted);
        assert_eq!(dialog.body, "granted");
    }

    #[test]
    fn test_soft_denial_offers_retry() {
        let gateway = Arc::new(FakeGateway::default());
        gateway.allow_rationale("perm.a");
        let (mut coordinator, _rx) = coordinator_with(gateway);
        register(&mut coordinator, "perm.a");

        let dialog = coordinator.on_outcome("perm.a", false).unwrap();
        assert_eq!(dialog.kind, DialogKind::DeniedSoft);
        assert_eq!(dialog.body, "needed");
    }

    #[test]
    fn test_hard_denial_offers_settings() {
        let gateway = Arc::new(FakeGateway::default());
        let (mut coordinator, _rx) = coordinator_with(gateway);
        register(&mut coordinator, "perm.a");

        let dialog = coordinator.on_outcome("perm.a", false).unwrap();
        assert_eq!(dialog.kind, DialogKind::DeniedHard);
        assert_eq!(dialog.body, "permanently denied");
    }

    #[test]
    fn test_unregistered_outcome_is_dropped() {
        let gateway = Arc::new(FakeGateway::default());
        let (mut coordinator, _rx) = coordinator_with(gateway);

        assert!(coordinator.on_outcome("perm.ghost", true).is_none());
        assert_eq!(*coordinator.state(), RequestState::Idle);
    }

    #[test]
    fn test_batch_all_granted_shows_nothing() {
        let gateway = Arc::new(FakeGateway::default());
        let (mut coordinator, _rx) = coordinator_with(gateway);
        register(&mut coordinator, "perm.a");
        register(&mut coordinator, "perm.b");

        let results = vec![
            ("perm.a".to_string(), true),
            ("perm.b".to_string(), true),
        ];
        let (dialogs, errors) = coordinator.on_batch_outcome(&results);
        assert!(dialogs.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_batch_with_denial_branches_per_identifier() {
        let gateway = Arc::new(FakeGateway::default());
        gateway.allow_rationale("perm.b");
        let (mut coordinator, _rx) = coordinator_with(gateway);
        register(&mut coordinator, "perm.a");
        register(&mut coordinator, "perm.b");
        register(&mut coordinator, "perm.c");

        let results = vec![
            ("perm.a".to_string(), true),
            ("perm.b".to_string(), false),
            ("perm.c".to_string(), false),
        ];
        let (dialogs, errors) = coordinator.on_batch_outcome(&results);
        assert!(errors.is_empty());
        assert_eq!(dialogs.len(), 3);
        assert_eq!(dialogs[0].kind, DialogKind::Granted);
        assert_eq!(dialogs[1].kind, DialogKind::DeniedSoft);
        assert_eq!(dialogs[2].kind, DialogKind::DeniedHard);
    }

    #[test]
    fn test_batch_reports_unregistered_identifiers() {
        let gateway = Arc::new(FakeGateway::default());
        let (mut coordinator, _rx) = coordinator_with(gateway);
        register(&mut coordinator, "perm.a");

        let results = vec![
            ("perm.a".to_string(), false),
            ("perm.ghost".to_string(), false),
        ];
        let (dialogs, errors) = coordinator.on_batch_outcome(&results);
        assert_eq!(dialogs.len(), 1);
        assert_eq!(
            errors,
            vec![PermissionError::Unregistered("perm.ghost".to_string())]
        );
    }

    #[tokio::test]
    async fn test_request_one_round_trip() {
        let gateway = Arc::new(FakeGateway::default());
        gateway.answer_requests_with(true);
        let (mut coordinator, mut rx) = coordinator_with(gateway);
        register(&mut coordinator, "perm.a");

        coordinator.request_one("perm.a");
        assert_eq!(
            *coordinator.state(),
            RequestState::Requested {
                identifiers: vec!["perm.a".to_string()]
            }
        );
        // A second request while one is outstanding is ignored
        coordinator.request_one("perm.a");

        let event = rx.recv().await.unwrap();
        match event {
            PlatformEvent::PermissionOutcome { identifier, granted } => {
                assert_eq!(identifier, "perm.a");
                assert!(granted);
                let dialog = coordinator.on_outcome(&identifier, granted).unwrap();
                assert_eq!(dialog.kind, DialogKind::Granted);
            }
            other => panic!("unexpected event: {:?}", other),
        }
        assert_eq!(*coordinator.state(), RequestState::Idle);
    }

    #[tokio::test]
    async fn test_request_all_needed_round_trip() {
        let gateway = Arc::new(FakeGateway::default());
        gateway.answer_requests_with(false);
        let (mut coordinator, mut rx) = coordinator_with(gateway);
        register(&mut coordinator, "perm.a");
        register(&mut coordinator, "perm.b");

        coordinator.request_all_needed();
        let event = rx.recv().await.unwrap();
        match event {
            PlatformEvent::BatchPermissionOutcome { results } => {
                assert_eq!(results.len(), 2);
                let (dialogs, errors) = coordinator.on_batch_outcome(&results);
                assert_eq!(dialogs.len(), 2);
                assert!(errors.is_empty());
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
