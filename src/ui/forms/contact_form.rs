//! Contact form rendering

use super::field_renderer::{
    draw_checkbox, draw_error, draw_field, draw_select, split_with_error, ERROR_HEIGHT,
};
use crate::app::App;
use crate::state::{ContactForm, Field, FieldKind, SelectOption, SuccessBanner};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a single-line field plus its error line
const FIELD_HEIGHT: u16 = 3 + ERROR_HEIGHT;
/// Height of the message box plus its error line
const MESSAGE_HEIGHT: u16 = 6 + ERROR_HEIGHT;
const BANNER_HEIGHT: u16 = 3;

/// Draw the contact form card
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;

    let block = Block::default()
        .title(" Contact Us ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner_height = if form.is_submitted() { BANNER_HEIGHT } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner_height),  // Success banner
            Constraint::Length(FIELD_HEIGHT),   // First / last name
            Constraint::Length(FIELD_HEIGHT),   // Email
            Constraint::Length(FIELD_HEIGHT),   // Query type / support request
            Constraint::Length(MESSAGE_HEIGHT), // Message
            Constraint::Length(1 + ERROR_HEIGHT), // Consent
            Constraint::Length(BUTTON_HEIGHT),  // Submit
            Constraint::Min(0),
        ])
        .split(inner);

    if form.is_submitted() {
        draw_banner(frame, chunks[0]);
    }

    let names = split_pair(chunks[1]);
    draw_form_field(frame, names[0], form, Field::FirstName);
    draw_form_field(frame, names[1], form, Field::LastName);

    draw_form_field(frame, chunks[2], form, Field::Email);

    let selects = split_pair(chunks[3]);
    draw_form_field(frame, selects[0], form, Field::QueryType);
    draw_form_field(frame, selects[1], form, Field::SupportRequest);

    draw_form_field(frame, chunks[4], form, Field::Message);
    draw_form_field(frame, chunks[5], form, Field::Consent);

    // Always enabled: there is no pending state
    render_button(frame, chunks[6], "Submit", form.is_submit_focused());
}

fn split_pair(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area)
}

fn draw_banner(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(SuccessBanner::MESSAGE)
        .style(Style::default().fg(Color::Green))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(banner, area);
}

/// Draw one field with its error line
fn draw_form_field(frame: &mut Frame, area: Rect, form: &ContactForm, field: Field) {
    let (input_area, error_area) = split_with_error(area);
    let values = form.values();
    let is_active = form.focused_field() == Some(field);

    match field.kind() {
        FieldKind::Text => draw_field(
            frame,
            input_area,
            field.label(),
            values.text(field).unwrap_or_default(),
            is_active,
            field.is_multiline(),
        ),
        FieldKind::Select => {
            let (option, is_unset) = match field {
                Field::SupportRequest => (
                    values.support_request.label(),
                    values.support_request.is_unset(),
                ),
                _ => (values.query_type.label(), values.query_type.is_unset()),
            };
            draw_select(frame, input_area, field.label(), option, is_unset, is_active);
        }
        FieldKind::Checkbox => draw_checkbox(
            frame,
            input_area,
            field.label(),
            values.consent,
            is_active,
        ),
    }

    draw_error(frame, error_area, form.errors().get(field));
}
