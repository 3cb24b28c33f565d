use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, InputMode};

use super::components::{
    render_help_popup, render_hotkeys, render_keypad, render_message_panel,
    render_number_display, render_permission_dialog, render_status_line,
};
use super::theme::*;

pub fn render(frame: &mut Frame, app: &mut App) {
    // Click regions are rebuilt every frame
    app.interactions.clear();

    let area = frame.area();

    // Main vertical layout: logo, content, status line, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Logo + spacing
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Status line (toast / sending spinner)
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);

    if app.input_mode == InputMode::Help {
        render_help_popup(frame, main_layout[1], app);
    } else {
        render_dialer(frame, main_layout[1], app);
    }

    render_status_line(frame, main_layout[2], app);
    render_hotkeys(frame, main_layout[3], app);
}

/// Render the dialer screen: number display, keypad, message panel, and
/// the permission dialog when one is queued.
fn render_dialer(frame: &mut Frame, area: Rect, app: &mut App) {
    let has_dialog = app.dialog().is_some();

    let rows = if has_dialog {
        Layout::vertical([
            Constraint::Length(3), // Number display
            Constraint::Min(0),    // Keypad | message
            Constraint::Length(8), // Permission dialog
        ])
        .split(area)
    } else {
        Layout::vertical([
            Constraint::Length(3), // Number display
            Constraint::Min(0),    // Keypad | message
        ])
        .split(area)
    };

    render_number_display(frame, rows[0], app);

    // Horizontal split: keypad | gap | message panel
    let content = Layout::horizontal([
        Constraint::Length(22), // Keypad grid
        Constraint::Length(1),  // Gap
        Constraint::Min(0),     // Message panel
    ])
    .split(rows[1]);

    render_keypad(frame, content[0], app);
    render_message_panel(frame, content[2], app);

    if has_dialog {
        render_permission_dialog(frame, rows[2], app);
    }
}

fn render_logo(frame: &mut Frame, area: Rect) {
    // Center the colorful "dialtui" logo
    let padding = (area.width.saturating_sub(7)) / 2;
    let centered = Line::from(vec![
        Span::raw(" ".repeat(padding as usize)),
        Span::styled("d", Style::new().fg(LOGO_CORAL).bold()),
        Span::styled("i", Style::new().fg(LOGO_GOLD).bold()),
        Span::styled("a", Style::new().fg(LOGO_LIGHT_BLUE).bold()),
        Span::styled("l", Style::new().fg(LOGO_MINT).bold()),
        Span::styled("t", Style::new().fg(LOGO_CORAL).bold()),
        Span::styled("u", Style::new().fg(LOGO_GOLD).bold()),
        Span::styled("i", Style::new().fg(LOGO_LIGHT_BLUE).bold()),
    ]);

    let paragraph = Paragraph::new(centered);
    frame.render_widget(paragraph, area);
}
