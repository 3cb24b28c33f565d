use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::permission::PermissionDialog;
use crate::tui::InteractionRegistry;
use crate::validate::MAX_PHONE_LEN;

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Spinner frames for the sending animation
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Dial,    // Keypad entry
    Compose, // Editing the message text
    Help,    // Help popup showing hotkeys and permissions
}

/// Bounded buffer holding the dialed number.
///
/// Cleared only by user deletion, never automatically.
#[derive(Debug, Clone, Default)]
pub struct PhoneBuffer {
    digits: String,
}

impl PhoneBuffer {
    /// Append a keypad character. No-op once the buffer is full.
    pub fn push(&mut self, c: char) {
        if self.digits.chars().count() < MAX_PHONE_LEN {
            self.digits.push(c);
        }
    }

    /// Remove the last character. No-op when empty.
    pub fn pop(&mut self) {
        self.digits.pop();
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }
}

/// Free-text message field with cursor editing.
#[derive(Debug, Clone, Default)]
pub struct MessageInput {
    pub text: String,
    pub cursor: usize, // byte offset, always on a char boundary
}

impl MessageInput {
    /// Add a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor].char_indices().last().map(|(i, _)| i)
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if let Some(i) = self.prev_boundary() {
            self.text.remove(i);
            self.cursor = i;
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    /// Move cursor left
    pub fn left(&mut self) {
        if let Some(i) = self.prev_boundary() {
            self.cursor = i;
        }
    }

    /// Move cursor right
    pub fn right(&mut self) {
        if let Some(c) = self.text[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Move cursor to start of input
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end of input
    pub fn end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Move cursor to the start of the previous word
    pub fn word_left(&mut self) {
        let mut boundary = self.cursor;
        let mut chars: Vec<(usize, char)> = self.text[..self.cursor].char_indices().collect();

        // Skip any whitespace immediately before cursor
        while let Some(&(i, c)) = chars.last() {
            if c.is_whitespace() {
                boundary = i;
                chars.pop();
            } else {
                break;
            }
        }

        // Skip the word itself
        while let Some(&(i, c)) = chars.last() {
            if !c.is_whitespace() {
                boundary = i;
                chars.pop();
            } else {
                break;
            }
        }

        self.cursor = boundary;
    }

    /// Move cursor past the end of the next word
    pub fn word_right(&mut self) {
        let mut chars = self.text[self.cursor..].chars().peekable();
        let mut offset = 0;

        while let Some(c) = chars.peek().copied() {
            if c.is_whitespace() {
                offset += c.len_utf8();
                chars.next();
            } else {
                break;
            }
        }
        while let Some(c) = chars.peek().copied() {
            if !c.is_whitespace() {
                offset += c.len_utf8();
                chars.next();
            } else {
                break;
            }
        }

        self.cursor += offset;
    }

    /// Delete the word before cursor
    pub fn delete_word_back(&mut self) {
        let end = self.cursor;
        self.word_left();
        self.text.drain(self.cursor..end);
    }

    /// Delete from cursor to end of line
    pub fn kill_line(&mut self) {
        self.text.truncate(self.cursor);
    }

    /// Delete from cursor to start of line
    pub fn kill_to_start(&mut self) {
        self.text.drain(..self.cursor);
        self.cursor = 0;
    }

    /// Clear the whole input
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// Short-lived on-screen notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

pub struct App {
    pub input_mode: InputMode,
    pub phone: PhoneBuffer,
    pub message: MessageInput,
    /// Queued permission dialogs; the front one is on screen.
    pub dialogs: VecDeque<PermissionDialog>,
    pub toast: Option<Toast>,
    /// An SMS dispatch is in flight.
    pub sending: bool,
    pub spinner_frame: usize,
    pub interactions: InteractionRegistry,
    /// (identifier, info message) pairs shown in the help popup.
    pub permission_notes: Vec<(String, String)>,
}

impl App {
    pub fn new() -> Self {
        Self {
            input_mode: InputMode::Dial,
            phone: PhoneBuffer::default(),
            message: MessageInput::default(),
            dialogs: VecDeque::new(),
            toast: None,
            sending: false,
            spinner_frame: 0,
            interactions: InteractionRegistry::new(),
            permission_notes: Vec::new(),
        }
    }

    /// The dialog currently on screen, if any.
    pub fn dialog(&self) -> Option<&PermissionDialog> {
        self.dialogs.front()
    }

    pub fn dialog_mut(&mut self) -> Option<&mut PermissionDialog> {
        self.dialogs.front_mut()
    }

    /// Queue a dialog behind whatever is already showing.
    pub fn push_dialog(&mut self, dialog: PermissionDialog) {
        self.dialogs.push_back(dialog);
    }

    /// Close the current dialog; the next queued one surfaces.
    pub fn pop_dialog(&mut self) -> Option<PermissionDialog> {
        self.dialogs.pop_front()
    }

    /// Show a toast, replacing any current one.
    pub fn show_toast(&mut self, text: impl Into<String>, kind: ToastKind) {
        self.toast = Some(Toast {
            text: text.into(),
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Record a successful SMS dispatch.
    pub fn sms_sent(&mut self, number: &str) {
        self.sending = false;
        self.show_toast(format!("Message sent to {}", number), ToastKind::Success);
    }

    /// Record a failed SMS dispatch; `reason` is embedded verbatim.
    pub fn sms_failed(&mut self, reason: &str) {
        self.sending = false;
        self.show_toast(
            format!("{}! Failed to send message", reason),
            ToastKind::Error,
        );
    }

    /// Enter compose mode for the message text
    pub fn enter_compose(&mut self) {
        self.input_mode = InputMode::Compose;
    }

    /// Exit to dial mode
    pub fn exit_compose(&mut self) {
        self.input_mode = InputMode::Dial;
    }

    /// Open the help popup
    pub fn open_help(&mut self) {
        self.input_mode = InputMode::Help;
    }

    /// Close the help popup
    pub fn close_help(&mut self) {
        self.input_mode = InputMode::Dial;
    }

    /// Advance the spinner and expire stale toasts.
    pub fn tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        if self
            .toast
            .as_ref()
            .is_some_and(|t| t.shown_at.elapsed() >= TOAST_TTL)
        {
            self.toast = None;
        }
    }

    /// Get current spinner character
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permission::PermissionDialog;
    use crate::validate::MAX_PHONE_LEN;

    #[test]
    fn test_phone_buffer_is_bounded() {
        let mut phone = PhoneBuffer::default();
        for _ in 0..MAX_PHONE_LEN {
            phone.push('6');
        }
        assert_eq!(phone.len(), MAX_PHONE_LEN);

        // Append at capacity is a no-op
        phone.push('7');
        assert_eq!(phone.len(), MAX_PHONE_LEN);
        assert!(!phone.as_str().contains('7'));
    }

    #[test]
    fn test_phone_buffer_delete_on_empty_is_noop() {
        let mut phone = PhoneBuffer::default();
        phone.pop();
        assert!(phone.is_empty());

        phone.push('6');
        phone.push('1');
        phone.pop();
        assert_eq!(phone.as_str(), "6");
    }

    #[test]
    fn test_message_editing_handles_multibyte() {
        let mut message = MessageInput::default();
        for c in "día".chars() {
            message.insert_char(c);
        }
        assert_eq!(message.text, "día");
        assert_eq!(message.char_count(), 3);

        message.left();
        message.left();
        message.backspace();
        assert_eq!(message.text, "ía");

        message.end();
        message.backspace();
        assert_eq!(message.text, "í");
    }

    #[test]
    fn test_message_word_motions() {
        let mut message = MessageInput::default();
        for c in "hola mundo".chars() {
            message.insert_char(c);
        }

        message.word_left();
        assert_eq!(message.cursor, 5);
        message.word_left();
        assert_eq!(message.cursor, 0);
        message.word_right();
        assert_eq!(message.cursor, 4);

        message.end();
        message.delete_word_back();
        assert_eq!(message.text, "hola ");
    }

    #[test]
    fn test_dialog_queue_is_fifo() {
        let mut app = App::new();
        app.push_dialog(PermissionDialog::granted("first".to_string()));
        app.push_dialog(PermissionDialog::granted("second".to_string()));

        assert_eq!(app.dialog().map(|d| d.body.as_str()), Some("first"));
        app.pop_dialog();
        assert_eq!(app.dialog().map(|d| d.body.as_str()), Some("second"));
        app.pop_dialog();
        assert!(app.dialog().is_none());
    }

    #[test]
    fn test_sms_outcome_toasts() {
        let mut app = App::new();
        app.sending = true;
        app.sms_sent("612345678");
        assert!(!app.sending);
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert!(toast.text.contains("612345678"));

        app.sending = true;
        app.sms_failed("modem timed out");
        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.text.starts_with("modem timed out!"));
    }
}
