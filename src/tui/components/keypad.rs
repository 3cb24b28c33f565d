//! Keypad component - clickable digit grid and action buttons.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::events::Action;
use crate::tui::interaction::{ClickRegion, InteractiveRegion};
use crate::tui::theme::*;

// '<' stands in for the delete key
const KEY_ROWS: [[char; 3]; 4] = [
    ['1', '2', '3'],
    ['4', '5', '6'],
    ['7', '8', '9'],
    ['+', '0', '<'],
];

const KEY_WIDTH: u16 = 7;
const KEY_HEIGHT: u16 = 3;

/// Render the keypad grid and the SMS/CALL buttons, registering a click
/// region per key.
pub fn render_keypad(frame: &mut Frame, area: Rect, app: &mut App) {
    for (row, keys) in KEY_ROWS.iter().enumerate() {
        for (col, &key) in keys.iter().enumerate() {
            let cell = Rect {
                x: area.x + col as u16 * KEY_WIDTH,
                y: area.y + row as u16 * KEY_HEIGHT,
                width: KEY_WIDTH,
                height: KEY_HEIGHT,
            };
            if cell.right() > area.right() || cell.bottom() > area.bottom() {
                continue;
            }

            let (label, action) = match key {
                '<' => ("⌫".to_string(), Action::DeleteDigit),
                c => (c.to_string(), Action::DigitPressed(c)),
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::new().fg(TEXT_DIM));
            let paragraph = Paragraph::new(Line::styled(label, Style::new().fg(TEXT_WHITE)))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(paragraph, cell);

            app.interactions.register(InteractiveRegion::clickable(
                "keypad_key",
                ClickRegion::new(cell.x, cell.y, cell.width, cell.height),
                action,
            ));
        }
    }

    // Action buttons under the grid
    let buttons = [
        ("SMS", Action::SendSms, LOGO_MINT),
        ("CALL", Action::PlaceCall, LOGO_CORAL),
    ];
    let button_width = (KEY_WIDTH * 3) / 2;
    let buttons_y = area.y + KEY_ROWS.len() as u16 * KEY_HEIGHT;

    for (i, (label, action, color)) in buttons.into_iter().enumerate() {
        let cell = Rect {
            x: area.x + i as u16 * button_width,
            y: buttons_y,
            width: button_width,
            height: KEY_HEIGHT,
        };
        if cell.right() > area.right() || cell.bottom() > area.bottom() {
            continue;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::new().fg(color));
        let paragraph = Paragraph::new(Line::styled(label, Style::new().fg(color).bold()))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, cell);

        app.interactions.register(InteractiveRegion::clickable(
            "keypad_action",
            ClickRegion::new(cell.x, cell.y, cell.width, cell.height),
            action,
        ));
    }
}
