//! Action enum for decoupling input handling from state changes.
//!
//! Actions represent user intents that can be logged, replayed, or customized.

/// Actions that can be dispatched from event handlers.
///
/// These represent user intents and are processed by the App to update state.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Application ===
    /// Quit the application
    Quit,

    // === Mode switching ===
    /// Enter compose mode for the message text
    EnterCompose,
    /// Exit to dial mode
    ExitCompose,
    /// Open help popup
    OpenHelp,
    /// Close help popup
    CloseHelp,

    // === Keypad ===
    /// Append a keypad character to the number
    DigitPressed(char),
    /// Remove the last dialed character
    DeleteDigit,

    // === Telephony ===
    /// Validate and send the SMS
    SendSms,
    /// Validate and start a voice call
    PlaceCall,
    /// Request every registered permission at once
    RequestAllPermissions,

    // === Message editing ===
    /// Add character at cursor
    MessageChar(char),
    /// Delete character before cursor
    MessageBackspace,
    /// Delete character at cursor
    MessageDelete,
    /// Move cursor left
    MessageLeft,
    /// Move cursor right
    MessageRight,
    /// Move cursor to start
    MessageHome,
    /// Move cursor to end
    MessageEnd,
    /// Move cursor word left
    MessageWordLeft,
    /// Move cursor word right
    MessageWordRight,
    /// Delete word before cursor
    MessageDeleteWordBack,
    /// Delete to end of line
    MessageKillLine,
    /// Delete to start of line
    MessageKillToStart,
    /// Clear the message text
    ClearMessage,

    // === Permission dialog ===
    /// Navigate dialog choices up
    DialogUp,
    /// Navigate dialog choices down
    DialogDown,
    /// Select a dialog choice directly
    SelectDialogChoice(usize),
    /// Accept the selected dialog choice
    DialogAccept,
    /// Dismiss the dialog with no further action
    DialogDismiss,

    // === No-op ===
    /// No action to take
    None,
}
