//! Permission dialog component.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::events::Action;
use crate::permission::DialogAction;
use crate::tui::interaction::{ClickRegion, InteractiveRegion};
use crate::tui::theme::*;

use super::wrap_text;

/// Render the permission dialog at the bottom of the screen.
pub fn render_permission_dialog(frame: &mut Frame, area: Rect, app: &mut App) {
    let Some(dialog) = app.dialog().cloned() else {
        return;
    };

    let mut lines: Vec<Line> = vec![];

    // Header
    lines.push(Line::from(vec![
        Span::styled("⚠ ", Style::new().fg(LOGO_GOLD)),
        Span::styled(dialog.title, Style::new().fg(LOGO_GOLD).bold()),
    ]));

    // Body, wrapped to the panel width
    let body_lines = wrap_text(&dialog.body, area.width.saturating_sub(2) as usize);
    let body_line_count = body_lines.len();
    for body_line in body_lines {
        lines.push(Line::styled(body_line, Style::new().fg(TEXT_WHITE)));
    }
    lines.push(Line::raw(""));

    // Choices
    for (i, choice) in dialog.choices.iter().enumerate() {
        let is_selected = i == dialog.selected;
        let cursor = if is_selected { "> " } else { "  " };

        let icon = match &choice.action {
            DialogAction::Close => "✓",
            DialogAction::Retry(_) => "↻",
            DialogAction::OpenSettings => "⚙",
        };

        let style = if is_selected {
            Style::new().fg(TEXT_WHITE).bold()
        } else {
            Style::new().fg(TEXT_DIM)
        };

        lines.push(Line::from(vec![
            Span::styled(cursor, style),
            Span::styled(icon, style),
            Span::styled(" ", style),
            Span::styled(choice.label, style),
        ]));
    }

    // Help text
    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("[y/Enter]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" accept • ", Style::new().fg(TEXT_DIM)),
        Span::styled("[n/Esc]", Style::new().fg(TEXT_WHITE)),
        Span::styled(" dismiss", Style::new().fg(TEXT_DIM)),
    ]));

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::new().fg(LOGO_GOLD));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);

    // Register click regions for each choice. Choices start after the
    // top border, header, body lines and one blank line.
    let choices_start_y = area.y + 1 + 1 + body_line_count as u16 + 1;

    for i in 0..dialog.choices.len() {
        let choice_y = choices_start_y + i as u16;
        if choice_y < area.y + area.height {
            let bounds = ClickRegion::new(area.x, choice_y, area.width, 1);
            app.interactions.register(
                InteractiveRegion::clickable(
                    "dialog_choice",
                    bounds,
                    Action::SelectDialogChoice(i),
                )
                .with_priority(100), // Captures clicks over the keypad
            );
        }
    }
}
