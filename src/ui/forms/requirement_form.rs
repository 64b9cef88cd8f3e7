//! Required document form rendering (create and edit)

use super::field_renderer::{draw_combobox_field, draw_help_text};
use super::{draw_buttons_row, BUTTONS_AREA_HEIGHT};
use crate::platform::{RELOAD_SHORTCUT, SAVE_SHORTCUT};
use crate::state::{Form, FormPhase, RequirementForm};
use crate::ui::widgets::render_placeholder;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Rows of an unfocused select: borders, choice, error line
const COLLAPSED_HEIGHT: u16 = 4;

pub fn draw(frame: &mut Frame, area: Rect, title: &str, form: &RequirementForm) {
    if form.phase == FormPhase::Loading {
        render_placeholder(frame, area, title, "Loading required document...");
        return;
    }

    let block = Block::default()
        .title(match form.mode.key() {
            Some(key) => format!(
                " {title} {}/{} ",
                key.document_type_id, key.internship_type_id
            ),
            None => format!(" {title} "),
        })
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    // The focused select expands to show its options
    let active = form.active_field();
    let select_height = |index: usize| {
        if index == active && !form.options_loading {
            Constraint::Min(COLLAPSED_HEIGHT + 2)
        } else {
            Constraint::Length(COLLAPSED_HEIGHT)
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            select_height(0),                        // Document type
            select_height(1),                        // Internship type
            Constraint::Length(BUTTONS_AREA_HEIGHT), // Banner + buttons
            Constraint::Length(1),                   // Help text
        ])
        .margin(1)
        .split(area);

    for index in 0..2 {
        if let Some(field) = form.get_field(index) {
            draw_combobox_field(
                frame,
                chunks[index],
                field,
                active == index,
                form.options_loading,
            );
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
        chunks[3],
        &[
            ("Tab", "next field"),
            ("Enter", "choose"),
            (SAVE_SHORTCUT, "save"),
            (RELOAD_SHORTCUT, "reload options"),
            ("Esc", "back"),
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EditorMode, SelectOption};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(form: &RequirementForm) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw(frame, area, "New required document", form);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn form_with_options() -> RequirementForm {
        let mut form = RequirementForm::new(EditorMode::Create);
        form.apply_options(
            vec![
                SelectOption::new("1", "RG"),
                SelectOption::new("2", "CPF"),
            ],
            vec![SelectOption::new("3", "Obrigatório")],
        );
        form
    }

    #[test]
    fn test_focused_select_lists_its_options() {
        let screen = render(&form_with_options());
        assert!(screen.contains("RG"));
        assert!(screen.contains("CPF"));
        // The internship type select is collapsed
        assert!(!screen.contains("Obrigatório"));
        assert!(screen.contains("Create"));
    }

    #[test]
    fn test_options_loading_is_shown() {
        let mut form = RequirementForm::new(EditorMode::Create);
        form.options_loading = true;
        let screen = render(&form);
        assert!(screen.contains("Loading options"));
    }

    #[test]
    fn test_banner_is_shown() {
        let mut form = form_with_options();
        form.banner = Some("Could not load options".to_string());
        let screen = render(&form);
        assert!(screen.contains("Could not load options"));
    }
}
