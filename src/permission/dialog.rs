//! Dialog state for permission outcomes.
//!
//! Each resolved permission request produces one dialog. The three
//! outcomes map to three dialog shapes: an informational acknowledge,
//! a retry offer, and a settings redirect.

/// What a dialog choice does when accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    /// Close the dialog, nothing else.
    Close,
    /// Re-dispatch the request for this permission.
    Retry(String),
    /// Open the system permission settings.
    OpenSettings,
}

/// A selectable dialog choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogChoice {
    pub label: &'static str,
    pub action: DialogAction,
}

/// Which outcome produced the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Granted,
    DeniedSoft,
    DeniedHard,
}

/// A queued permission dialog with selectable choices.
#[derive(Debug, Clone)]
pub struct PermissionDialog {
    pub kind: DialogKind,
    pub title: &'static str,
    pub body: String,
    pub choices: Vec<DialogChoice>,
    pub selected: usize,
}

impl PermissionDialog {
    /// Informational dialog shown once after a grant.
    pub fn granted(body: String) -> Self {
        Self {
            kind: DialogKind::Granted,
            title: "Permission granted",
            body,
            choices: vec![DialogChoice {
                label: "Ok",
                action: DialogAction::Close,
            }],
            selected: 0,
        }
    }

    /// Denied, but the user may still be asked again.
    pub fn denied_soft(identifier: &str, body: String) -> Self {
        Self {
            kind: DialogKind::DeniedSoft,
            title: "Permission denied",
            body,
            choices: vec![
                DialogChoice {
                    label: "Ask again",
                    action: DialogAction::Retry(identifier.to_string()),
                },
                DialogChoice {
                    label: "Cancel",
                    action: DialogAction::Close,
                },
            ],
            selected: 0,
        }
    }

    /// Denied permanently; only the system settings can lift it.
    pub fn denied_hard(body: String) -> Self {
        Self {
            kind: DialogKind::DeniedHard,
            title: "Permission permanently denied",
            body,
            choices: vec![
                DialogChoice {
                    label: "Open settings",
                    action: DialogAction::OpenSettings,
                },
                DialogChoice {
                    label: "Cancel",
                    action: DialogAction::Close,
                },
            ],
            selected: 0,
        }
    }

    /// Navigate to the next choice.
    pub fn select_next(&mut self) {
        if !self.choices.is_empty() {
            self.selected = (self.selected + 1) % self.choices.len();
        }
    }

    /// Navigate to the previous choice.
    pub fn select_prev(&mut self) {
        if !self.choices.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.choices.len() - 1);
        }
    }

    /// The currently selected choice.
    pub fn selected_choice(&self) -> Option<&DialogChoice> {
        self.choices.get(self.selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps() {
        let mut dialog = PermissionDialog::denied_soft("perm.test", "body".to_string());
        assert_eq!(dialog.selected, 0);

        dialog.select_next();
        assert_eq!(dialog.selected, 1);
        dialog.select_next();
        assert_eq!(dialog.selected, 0);

        dialog.select_prev();
        assert_eq!(dialog.selected, 1);
    }

    #[test]
    fn test_hard_denial_leads_to_settings() {
        let dialog = PermissionDialog::denied_hard("gone".to_string());
        assert_eq!(dialog.kind, DialogKind::DeniedHard);
        assert_eq!(
            dialog.selected_choice().map(|c| &c.action),
            Some(&DialogAction::OpenSettings)
        );
    }

    #[test]
    fn test_soft_denial_leads_to_retry() {
        let dialog = PermissionDialog::denied_soft("perm.test", "ask".to_string());
        assert_eq!(
            dialog.selected_choice().map(|c| &c.action),
            Some(&DialogAction::Retry("perm.test".to_string()))
        );
    }
}
