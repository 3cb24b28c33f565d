//! Number display component - the dialed number and its length bound.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::tui::theme::*;
use crate::validate::MAX_PHONE_LEN;

/// Render the dialed number.
pub fn render_number_display(frame: &mut Frame, area: Rect, app: &App) {
    let count = format!(" {}/{} ", app.phone.len(), MAX_PHONE_LEN);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM))
        .title(Line::styled(" Number ", Style::new().fg(LOGO_LIGHT_BLUE)))
        .title(Line::styled(count, Style::new().fg(TEXT_DIM)).right_aligned());

    let display = if app.phone.is_empty() {
        Line::styled("dial a number", Style::new().fg(TEXT_DIM))
    } else {
        Line::styled(
            app.phone.as_str().to_string(),
            Style::new().fg(TEXT_WHITE).bold(),
        )
    };

    let paragraph = Paragraph::new(display).block(block);
    frame.render_widget(paragraph, area);
}
