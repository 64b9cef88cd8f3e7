//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows a text field takes: borders, value, error line
pub const TEXT_FIELD_HEIGHT: u16 = 4;

fn border_style(field: &FormField, is_active: bool) -> Style {
    if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// The value with a cursor, or the placeholder when empty
fn value_line(field: &FormField, is_active: bool) -> Line<'static> {
    let value = field.display_value();
    let mut spans = vec![if value.is_empty() {
        Span::styled(field.placeholder, Style::default().fg(Color::DarkGray))
    } else if is_active {
        Span::styled(value, Style::default().fg(Color::Cyan))
    } else {
        Span::raw(value)
    }];
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }
    Line::from(spans)
}

fn error_line(field: &FormField) -> Line<'static> {
    match &field.error {
        Some(err) => Line::from(Span::styled(
            err.to_string(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(""),
    }
}

/// Draw a text field: label in the border, the value, and its validation error
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let lines = vec![
        value_line(field, is_active),
        error_line(field),
    ];

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(field, is_active));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw a searchable select: the current choice, the filter being typed and,
/// while focused, the options that match it
pub fn draw_combobox_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    loading: bool,
) {
    let Some(combo) = field.combobox() else {
        draw_field(frame, area, field, is_active);
        return;
    };

    let mut lines = vec![value_line(field, false)];
    if field.error.is_some() {
        lines.push(error_line(field));
    }

    if loading {
        lines.push(Line::from(Span::styled(
            "Loading options...",
            Style::default().fg(Color::DarkGray),
        )));
    } else if is_active {
        lines.push(Line::from(vec![
            Span::styled("Filter: ", Style::default().fg(Color::DarkGray)),
            Span::styled(combo.query().to_string(), Style::default().fg(Color::Cyan)),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        ]));

        let filtered = combo.filtered();
        if filtered.is_empty() {
            let message = if combo.options().is_empty() {
                "No options available"
            } else {
                "No matching options"
            };
            lines.push(Line::from(Span::styled(
                message,
                Style::default().fg(Color::DarkGray),
            )));
        }
        // Keep the highlighted option inside the rows left below the filter
        let used = lines.len() as u16 + 2;
        let visible = area.height.saturating_sub(used).max(1) as usize;
        let skip = (combo.highlighted() + 1).saturating_sub(visible);
        for (idx, option) in filtered.iter().enumerate().skip(skip).take(visible) {
            let is_highlighted = idx == combo.highlighted();
            let marker = if combo.selected_value() == Some(option.value.as_str()) {
                "✓ "
            } else {
                "  "
            };
            let style = if is_highlighted {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(
                format!("{marker}{}", option.label),
                style,
            )));
        }
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style(field, is_active));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw help text at the bottom of a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, action) in hints {
        spans.push(Span::styled(key.to_string(), Style::default().fg(Color::Cyan)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
