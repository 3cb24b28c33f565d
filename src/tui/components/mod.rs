//! UI components for the TUI.
//!
//! This module organizes UI rendering into logical components.
//!
//! # Component Organization
//!
//! - `number_display` - Dialed number with length indicator
//! - `keypad` - Clickable digit grid and action buttons
//! - `message_panel` - Message text editor panel
//! - `permission_dialog` - Permission outcome dialog
//! - `help_popup` - Help overlay with keybindings and permissions
//! - `status_bar` - Toast line and hotkey bar

mod help_popup;
mod keypad;
mod message_panel;
mod number_display;
mod permission_dialog;
mod status_bar;

// Re-export all render functions for use in ui.rs
pub use help_popup::render_help_popup;
pub use keypad::render_keypad;
pub use message_panel::render_message_panel;
pub use number_display::render_number_display;
pub use permission_dialog::render_permission_dialog;
pub use status_bar::{render_hotkeys, render_status_line};

/// Wrap text to fit within width, preserving words where possible.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }

    let mut result = vec![];

    for line in text.split('\n') {
        let mut current_line = String::new();
        let mut current_char_count = 0;

        for word in line.split_whitespace() {
            let word_char_count = word.chars().count();

            if current_char_count == 0 {
                current_line = word.to_string();
                current_char_count = word_char_count;
            } else if current_char_count + 1 + word_char_count > width {
                result.push(std::mem::take(&mut current_line));
                current_line = word.to_string();
                current_char_count = word_char_count;
            } else {
                current_line.push(' ');
                current_line.push_str(word);
                current_char_count += 1 + word_char_count;
            }
        }

        result.push(current_line);
    }

    if result.is_empty() {
        result.push(String::new());
    }

    result
}
