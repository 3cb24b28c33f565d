//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::app::App;
use crate::tui::theme::*;

/// Render the help popup with keyboard shortcuts and the permissions
/// this app relies on.
pub fn render_help_popup(frame: &mut Frame, area: Rect, app: &App) {
    // Calculate centered popup area
    let popup_width = 56u16;
    let popup_height = 24u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![];

    lines.push(Line::from(vec![Span::styled(
        "Keyboard Shortcuts",
        Style::new().fg(TEXT_WHITE).bold(),
    )]));
    lines.push(Line::raw(""));

    lines.push(Line::styled(
        "Dial Mode",
        Style::new().fg(LOGO_LIGHT_BLUE).bold(),
    ));
    for (keys, what) in [
        ("0-9 +", "Dial a digit"),
        ("Bksp", "Delete last digit"),
        ("s", "Send SMS"),
        ("c", "Place call"),
        ("m / i", "Write the message"),
        ("p", "Request all permissions"),
        ("q", "Quit"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<8}", keys), Style::new().fg(TEXT_WHITE)),
            Span::styled(what, Style::new().fg(TEXT_DIM)),
        ]));
    }
    lines.push(Line::raw(""));

    lines.push(Line::styled(
        "Compose Mode",
        Style::new().fg(LOGO_MINT).bold(),
    ));
    for (keys, what) in [
        ("Enter", "Send SMS"),
        ("Esc", "Back to dial mode"),
        ("C-a/C-e", "Start / end of message"),
        ("C-w/C-k", "Delete word / to end"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<8}", keys), Style::new().fg(TEXT_WHITE)),
            Span::styled(what, Style::new().fg(TEXT_DIM)),
        ]));
    }
    lines.push(Line::raw(""));

    // The permissions this app asks for
    lines.push(Line::styled(
        "Permissions",
        Style::new().fg(LOGO_GOLD).bold(),
    ));
    for (identifier, info) in &app.permission_notes {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::new().fg(LOGO_GOLD)),
            Span::styled(identifier.clone(), Style::new().fg(TEXT_WHITE)),
        ]));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(info.clone(), Style::new().fg(TEXT_DIM)),
        ]));
    }
    lines.push(Line::raw(""));

    // Footer
    lines.push(Line::from(vec![
        Span::styled("Press ", Style::new().fg(TEXT_DIM)),
        Span::styled("?", Style::new().fg(TEXT_WHITE)),
        Span::styled(" or ", Style::new().fg(TEXT_DIM)),
        Span::styled("Esc", Style::new().fg(TEXT_WHITE)),
        Span::styled(" to close", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(LOGO_LIGHT_BLUE))
        .style(Style::new().bg(Color::Black));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, popup_area);
}
