//! Document form rendering (create and edit)

use super::field_renderer::{draw_field, draw_help_text, TEXT_FIELD_HEIGHT};
use super::{draw_buttons_row, BUTTONS_AREA_HEIGHT};
use crate::platform::SAVE_SHORTCUT;
use crate::state::{DocumentForm, Form, FormPhase};
use crate::ui::widgets::render_placeholder;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, title: &str, form: &DocumentForm) {
    if form.phase == FormPhase::Loading {
        render_placeholder(frame, area, title, "Loading document...");
        return;
    }

    let block = Block::default()
        .title(match form.mode.key() {
            Some(id) => format!(" {title} #{id} "),
            None => format!(" {title} "),
        })
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TEXT_FIELD_HEIGHT),   // Description
            Constraint::Length(TEXT_FIELD_HEIGHT),   // Status
            Constraint::Length(BUTTONS_AREA_HEIGHT), // Banner + buttons
            Constraint::Min(0),
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    let active = form.active_field();
    for index in 0..2 {
        if let Some(field) = form.get_field(index) {
            draw_field(frame, chunks[index], field, active == index);
        }
    }

    draw_buttons_row(
        frame,
        chunks[2],
        form.mode.submit_label(),
        form.selected_button,
        form.is_buttons_row_active(),
        form.phase,
        form.banner.as_deref(),
    );

    draw_help_text(
        frame,
        chunks[4],
        &[("Tab", "next field"), (SAVE_SHORTCUT, "save"), ("Esc", "back")],
    );
}
