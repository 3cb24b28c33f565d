//! Status bar components - toast line and hotkey bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, InputMode, ToastKind};
use crate::tui::theme::*;

/// Render the status line: sending spinner or the current toast.
pub fn render_status_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.sending {
        Line::from(vec![
            Span::styled(format!(" {} ", app.spinner()), Style::new().fg(LOGO_MINT)),
            Span::styled("sending…", Style::new().fg(LOGO_MINT)),
        ])
    } else if let Some(toast) = &app.toast {
        let color = match toast.kind {
            ToastKind::Info => LOGO_GOLD,
            ToastKind::Success => LOGO_MINT,
            ToastKind::Error => LOGO_CORAL,
        };
        Line::from(vec![
            Span::raw(" "),
            Span::styled(toast.text.clone(), Style::new().fg(color)),
        ])
    } else {
        Line::raw("")
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the context-sensitive hotkey bar.
pub fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let hotkeys = if app.dialog().is_some() {
        Line::from(vec![
            Span::styled("[j/k]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" choose • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[y/Enter]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" accept • ", Style::new().fg(TEXT_DIM)),
            Span::styled("[n/Esc]", Style::new().fg(TEXT_WHITE)),
            Span::styled(" dismiss", Style::new().fg(TEXT_DIM)),
        ])
    } else {
        match app.input_mode {
            InputMode::Dial => Line::from(vec![
                Span::styled("[0-9 +]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" dial • ", Style::new().fg(TEXT_DIM)),
                Span::styled("[s]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" sms • ", Style::new().fg(TEXT_DIM)),
                Span::styled("[c]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" call • ", Style::new().fg(TEXT_DIM)),
                Span::styled("[m]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" message • ", Style::new().fg(TEXT_DIM)),
                Span::styled("[p]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" permissions • ", Style::new().fg(TEXT_DIM)),
                Span::styled("[?]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" help • ", Style::new().fg(TEXT_DIM)),
                Span::styled("[q]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" quit", Style::new().fg(TEXT_DIM)),
            ]),
            InputMode::Compose => Line::from(vec![
                Span::styled("[Enter]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" send • ", Style::new().fg(TEXT_DIM)),
                Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" done • ", Style::new().fg(TEXT_DIM)),
                Span::styled("[C-c]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" clear", Style::new().fg(TEXT_DIM)),
            ]),
            InputMode::Help => Line::from(vec![
                Span::styled("[Esc]", Style::new().fg(TEXT_WHITE)),
                Span::styled(" close", Style::new().fg(TEXT_DIM)),
            ]),
        }
    };

    frame.render_widget(Paragraph::new(hotkeys), area);
}
