//! Layout components (form card, status bar)

use crate::app::App;
use crate::state::{Field, FieldKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form card grows
const MAX_CARD_WIDTH: u16 = 72;

/// Split the screen into the form card area and the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (centered_card(chunks[0]), chunks[1])
}

/// Center a card of at most `MAX_CARD_WIDTH` columns horizontally
fn centered_card(area: Rect) -> Rect {
    let width = area.width.min(MAX_CARD_WIDTH);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    if app.config.show_help() {
        spans.push(Span::styled(
            format!(" {} ", get_hints(app)),
            Style::default().fg(Color::Gray),
        ));
    }

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for the focused row
fn get_hints(app: &App) -> String {
    let submit = crate::platform::SUBMIT_SHORTCUT;
    let focused = app.form.focused_field();
    match focused.map(Field::kind) {
        None => "Enter:submit  Tab:next  Esc:quit".to_string(),
        Some(FieldKind::Select) => format!("←/→:choose  Tab:next  {submit}:submit  Esc:quit"),
        Some(FieldKind::Checkbox) => format!("Space:toggle  Tab:next  {submit}:submit  Esc:quit"),
        Some(FieldKind::Text) if focused.is_some_and(Field::is_multiline) => {
            format!("Enter:newline  Tab:next  {submit}:submit  Esc:quit")
        }
        Some(FieldKind::Text) => format!("Tab:next  {submit}:submit  Esc:quit"),
    }
}
