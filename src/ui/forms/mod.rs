//! Form rendering module
//!
//! - `field_renderer`: text fields and searchable selects
//! - `document_form`: document create/edit
//! - `requirement_form`: required document create/edit

mod document_form;
mod field_renderer;
mod requirement_form;

use super::components::{render_button, BUTTON_HEIGHT};
use super::widgets::render_placeholder;
use crate::app::App;
use crate::state::{FormButton, FormPhase, FormState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

/// Draw whichever editor is mounted
pub fn draw_editor(frame: &mut Frame, area: Rect, app: &App) {
    let title = app.state.current_route.title();
    match &app.state.form {
        FormState::Document(form) => document_form::draw(frame, area, title, form),
        FormState::Requirement(form) => requirement_form::draw(frame, area, title, form),
        FormState::None => render_placeholder(frame, area, title, "Opening editor..."),
    }
}

/// Rows of the buttons area: banner line plus the buttons
const BUTTONS_AREA_HEIGHT: u16 = BUTTON_HEIGHT + 2;

/// Draw the failure banner (if any) above the submit and back buttons
fn draw_buttons_row(
    frame: &mut Frame,
    area: Rect,
    submit_label: &str,
    selected: FormButton,
    is_active: bool,
    phase: FormPhase,
    banner: Option<&str>,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(BUTTON_HEIGHT)])
        .split(area);

    let notice = match (phase, banner) {
        (FormPhase::Submitting, _) => Some(Span::styled(
            "Saving...",
            Style::default().fg(Color::Yellow),
        )),
        (_, Some(message)) => Some(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )),
        _ => None,
    };
    if let Some(notice) = notice {
        frame.render_widget(
            Paragraph::new(Line::from(notice)).wrap(Wrap { trim: true }),
            rows[0],
        );
    }

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Min(0),
        ])
        .split(rows[1]);

    let enabled = phase == FormPhase::Ready;
    render_button(
        frame,
        buttons[0],
        submit_label,
        is_active && selected == FormButton::Submit,
        enabled,
    );
    render_button(
        frame,
        buttons[2],
        "Back",
        is_active && selected == FormButton::Back,
        true,
    );
}
