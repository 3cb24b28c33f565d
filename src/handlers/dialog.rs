//! Permission dialog handling service
//!
//! Centralizes resolving the dialog on screen into the outcome the
//! event loop acts on.

use crate::app::App;
use crate::permission::DialogAction;

/// Outcome of accepting or dismissing the front dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Dialog closed, nothing further.
    Closed,
    /// Re-dispatch the request for this permission.
    Retry(String),
    /// Open the system permission settings.
    OpenSettings,
}

/// Service for handling permission dialogs
pub struct DialogService;

impl DialogService {
    /// Accept the selected choice of the dialog on screen.
    ///
    /// Returns the outcome to act on, or None if no dialog is showing.
    pub fn accept(app: &mut App) -> Option<DialogOutcome> {
        let dialog = app.pop_dialog()?;
        let choice = dialog.selected_choice()?;

        Some(match &choice.action {
            DialogAction::Close => DialogOutcome::Closed,
            DialogAction::Retry(identifier) => DialogOutcome::Retry(identifier.clone()),
            DialogAction::OpenSettings => DialogOutcome::OpenSettings,
        })
    }

    /// Dismiss the dialog on screen with no further action.
    pub fn dismiss(app: &mut App) -> Option<DialogOutcome> {
        app.pop_dialog()?;
        Some(DialogOutcome::Closed)
    }

    /// Navigate to the next dialog choice
    pub fn select_next(app: &mut App) {
        if let Some(dialog) = app.dialog_mut() {
            dialog.select_next();
        }
    }

    /// Navigate to the previous dialog choice
    pub fn select_prev(app: &mut App) {
        if let Some(dialog) = app.dialog_mut() {
            dialog.select_prev();
        }
    }

    /// Select a choice directly (mouse click)
    pub fn select(app: &mut App, index: usize) {
        if let Some(dialog) = app.dialog_mut() {
            if index < dialog.choices.len() {
                dialog.selected = index;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::PermissionDialog;

    #[test]
    fn test_accept_soft_denial_retries() {
        let mut app = App::new();
        app.push_dialog(PermissionDialog::denied_soft("perm.a", "needed".to_string()));

        assert_eq!(
            DialogService::accept(&mut app),
            Some(DialogOutcome::Retry("perm.a".to_string()))
        );
        assert!(app.dialog().is_none());
    }

    #[test]
    fn test_accept_hard_denial_opens_settings() {
        let mut app = App::new();
        app.push_dialog(PermissionDialog::denied_hard("gone".to_string()));

        assert_eq!(
            DialogService::accept(&mut app),
            Some(DialogOutcome::OpenSettings)
        );
    }

    #[test]
    fn test_dismiss_surfaces_next_dialog() {
        let mut app = App::new();
        app.push_dialog(PermissionDialog::denied_soft("perm.a", "a".to_string()));
        app.push_dialog(PermissionDialog::granted("b".to_string()));

        assert_eq!(DialogService::dismiss(&mut app), Some(DialogOutcome::Closed));
        assert_eq!(app.dialog().map(|d| d.body.as_str()), Some("b"));
    }

    #[test]
    fn test_navigating_changes_accepted_choice() {
        let mut app = App::new();
        app.push_dialog(PermissionDialog::denied_soft("perm.a", "a".to_string()));

        DialogService::select_next(&mut app);
        assert_eq!(DialogService::accept(&mut app), Some(DialogOutcome::Closed));
    }

    #[test]
    fn test_accept_without_dialog_is_none() {
        let mut app = App::new();
        assert_eq!(DialogService::accept(&mut app), None);
    }
}
