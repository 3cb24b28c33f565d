//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputMode};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    // A queued permission dialog captures input in any mode
    if app.dialog().is_some() {
        return handle_dialog_mode(key);
    }

    match app.input_mode {
        InputMode::Dial => handle_dial_mode(key),
        InputMode::Compose => handle_compose_mode(key),
        InputMode::Help => handle_help_mode(key),
    }
}

fn handle_dial_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('?') => Action::OpenHelp,

        // Keypad
        KeyCode::Char(c @ ('0'..='9' | '+')) => Action::DigitPressed(c),
        KeyCode::Backspace | KeyCode::Delete => Action::DeleteDigit,

        // Actions
        KeyCode::Char('s') => Action::SendSms,
        KeyCode::Char('c') => Action::PlaceCall,
        KeyCode::Char('p') => Action::RequestAllPermissions,

        // Compose the message text
        KeyCode::Char('m') | KeyCode::Char('i') | KeyCode::Tab | KeyCode::Enter => {
            Action::EnterCompose
        }

        _ => Action::None,
    }
}

fn handle_compose_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc => Action::ExitCompose,
        KeyCode::Enter => Action::SendSms,

        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::ClearMessage
        }

        // Navigation - emacs style
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::MessageHome,
        KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::MessageEnd,
        KeyCode::Home => Action::MessageHome,
        KeyCode::End => Action::MessageEnd,

        // Word navigation
        KeyCode::Left if key.modifiers.contains(KeyModifiers::ALT) => Action::MessageWordLeft,
        KeyCode::Right if key.modifiers.contains(KeyModifiers::ALT) => Action::MessageWordRight,
        KeyCode::Char('b') if key.modifiers.contains(KeyModifiers::ALT) => Action::MessageWordLeft,
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::ALT) => Action::MessageWordRight,

        // Word/line deletion
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::MessageDeleteWordBack
        }
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::ALT) => {
            Action::MessageDeleteWordBack
        }
        KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::MessageKillLine
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::MessageKillToStart
        }

        KeyCode::Left => Action::MessageLeft,
        KeyCode::Right => Action::MessageRight,
        KeyCode::Backspace => Action::MessageBackspace,
        KeyCode::Delete => Action::MessageDelete,

        KeyCode::Char(c) => Action::MessageChar(c),

        _ => Action::None,
    }
}

fn handle_dialog_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => Action::DialogAccept,
        KeyCode::Char('n') | KeyCode::Esc => Action::DialogDismiss,
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Right | KeyCode::Tab => Action::DialogDown,
        KeyCode::Char('k') | KeyCode::Up | KeyCode::Left => Action::DialogUp,
        _ => Action::None,
    }
}

fn handle_help_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Action::CloseHelp,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::PermissionDialog;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_dial_mode_keypad() {
        let app = App::new();
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('6'))),
            Action::DigitPressed('6')
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('+'))),
            Action::DigitPressed('+')
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Backspace)),
            Action::DeleteDigit
        );
        assert_eq!(handle_key_event(&app, key(KeyCode::Char('s'))), Action::SendSms);
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('c'))),
            Action::PlaceCall
        );
    }

    #[test]
    fn test_dialog_captures_keys_in_any_mode() {
        let mut app = App::new();
        app.enter_compose();
        app.push_dialog(PermissionDialog::granted("ok".to_string()));

        assert_eq!(
            handle_key_event(&app, key(KeyCode::Enter)),
            Action::DialogAccept
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Esc)),
            Action::DialogDismiss
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('j'))),
            Action::DialogDown
        );
    }

    #[test]
    fn test_compose_mode_edits_message() {
        let mut app = App::new();
        app.enter_compose();

        assert_eq!(
            handle_key_event(&app, key(KeyCode::Char('h'))),
            Action::MessageChar('h')
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Enter)),
            Action::SendSms
        );
        assert_eq!(
            handle_key_event(&app, key(KeyCode::Esc)),
            Action::ExitCompose
        );
    }
}
