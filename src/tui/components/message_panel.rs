//! Message panel component - the SMS text editor.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, InputMode};
use crate::events::Action;
use crate::tui::interaction::{ClickRegion, InteractiveRegion};
use crate::tui::theme::*;
use crate::validate::MAX_SMS_LEN;

/// Render the message editor, with a block cursor while composing.
pub fn render_message_panel(frame: &mut Frame, area: Rect, app: &mut App) {
    let is_compose = app.input_mode == InputMode::Compose;
    let count = format!(" {}/{} ", app.message.char_count(), MAX_SMS_LEN);

    let border_style = if is_compose {
        Style::new().fg(LOGO_MINT)
    } else {
        Style::new().fg(TEXT_DIM)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::styled(" Message ", Style::new().fg(LOGO_MINT)))
        .title(Line::styled(count, Style::new().fg(TEXT_DIM)).right_aligned());

    let line = if is_compose {
        // Split around the cursor so it renders as an inverted cell
        let before = &app.message.text[..app.message.cursor];
        let at = app.message.text[app.message.cursor..].chars().next();
        let after = match at {
            Some(c) => &app.message.text[app.message.cursor + c.len_utf8()..],
            None => "",
        };
        let cursor_cell = at.map(String::from).unwrap_or_else(|| " ".to_string());

        Line::from(vec![
            Span::styled(before.to_string(), Style::new().fg(TEXT_WHITE)),
            Span::styled(cursor_cell, Style::new().fg(Color::Black).bg(LOGO_MINT)),
            Span::styled(after.to_string(), Style::new().fg(TEXT_WHITE)),
        ])
    } else if app.message.text.is_empty() {
        Line::styled("press [m] to write a message", Style::new().fg(TEXT_DIM))
    } else {
        Line::styled(app.message.text.clone(), Style::new().fg(TEXT_DIM))
    };

    let paragraph = Paragraph::new(line).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, area);

    // Clicking the panel starts composing
    app.interactions.register(InteractiveRegion::clickable(
        "message_panel",
        ClickRegion::new(area.x, area.y, area.width, area.height),
        Action::EnterCompose,
    ));
}
