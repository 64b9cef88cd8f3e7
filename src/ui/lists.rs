//! Document and required-document list views

use super::widgets::render_placeholder;
use super::render_scrollable_list;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Draw the documents list
pub fn draw_documents(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!("Documents ({})", app.state.documents.len());
    if app.state.list_loading {
        render_placeholder(frame, area, &title, "Loading documents...");
        return;
    }
    if app.state.documents.is_empty() {
        render_placeholder(
            frame,
            area,
            &title,
            "No documents found.\nPress 'n' to create a new document.",
        );
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .documents
        .iter()
        .enumerate()
        .map(|(idx, doc)| {
            let id = doc
                .id
                .map(|id| format!("#{id}"))
                .unwrap_or_else(|| "#?".to_string());
            row(
                idx == app.state.selected_index,
                format!("{id:>6}"),
                doc.description.clone(),
                doc.status.clone(),
            )
        })
        .collect();

    render_list(frame, area, &title, items, app.state.selected_index);
}

/// Draw the required documents list
pub fn draw_requirements(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!("Required documents ({})", app.state.requirements.len());
    if app.state.list_loading {
        render_placeholder(frame, area, &title, "Loading required documents...");
        return;
    }
    if app.state.requirements.is_empty() {
        render_placeholder(
            frame,
            area,
            &title,
            "No required documents found.\nPress 'n' to add one.",
        );
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .requirements
        .iter()
        .enumerate()
        .map(|(idx, requirement)| {
            row(
                idx == app.state.selected_index,
                format!(
                    "{:>4}/{:<4}",
                    requirement.document_type_id, requirement.internship_type_id
                ),
                format!("document type {}", requirement.document_type_id),
                format!("internship type {}", requirement.internship_type_id),
            )
        })
        .collect();

    render_list(frame, area, &title, items, app.state.selected_index);
}

fn row(is_selected: bool, key: String, main: String, detail: String) -> ListItem<'static> {
    let prefix = if is_selected { "▸" } else { " " };
    let style = if is_selected {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };

    ListItem::new(Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(key, Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(main, style),
        Span::raw("  "),
        Span::styled(detail, Style::default().fg(Color::DarkGray)),
    ]))
}

fn render_list(frame: &mut Frame, area: Rect, title: &str, items: Vec<ListItem>, selected: usize) {
    let list = List::new(items).block(
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    render_scrollable_list(frame, area, list, selected);
}
