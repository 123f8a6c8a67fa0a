//! Field rendering utilities for forms

use crate::state::FieldError;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Height of the error line under each field
pub const ERROR_HEIGHT: u16 = 1;

fn border_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Split a field slot into the input box and the error line beneath it
pub fn split_with_error(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(ERROR_HEIGHT)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw a text field
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    is_multiline: bool,
) {
    let style = border_style(is_active);
    let cursor = if is_active { "▌" } else { "" };

    let content = if is_multiline {
        let mut lines: Vec<Line> = value.split('\n').map(|l| Line::from(l.to_string())).collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a select field showing its current option
pub fn draw_select(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    option: &str,
    is_unset: bool,
    is_active: bool,
) {
    let style = border_style(is_active);
    let option_style = if is_unset {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let mut spans = Vec::new();
    if is_active {
        spans.push(Span::styled("◂ ", style));
    }
    spans.push(Span::styled(option, option_style));
    if is_active {
        spans.push(Span::styled(" ▸", style));
    }

    let block = Block::default()
        .title(format!(" {} ", label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the consent checkbox
pub fn draw_checkbox(frame: &mut Frame, area: Rect, label: &str, checked: bool, is_active: bool) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let label_style = if is_active {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let line = Line::from(vec![
        Span::styled(mark, border_style(is_active)),
        Span::raw(" "),
        Span::styled(label, label_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw a field's validation message, if any
pub fn draw_error(frame: &mut Frame, area: Rect, error: Option<&FieldError>) {
    if let Some(error) = error {
        let paragraph =
            Paragraph::new(error.to_string()).style(Style::default().fg(Color::Red));
        frame.render_widget(paragraph, area);
    }
}
