//! Layout components (header, status bar)

use crate::app::App;
use crate::platform::{RELOAD_SHORTCUT, SAVE_SHORTCUT};
use crate::state::Route;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the header: screen title and the route path
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let route = &app.state.current_route;
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " EstagioTech admin ",
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw(" "),
        Span::styled(route.title(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {route}"), Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![if app.is_busy() {
        Span::styled(" ⟳ ", Style::default().fg(Color::Yellow))
    } else {
        Span::raw("   ")
    }];

    let hints = get_route_hints(&app.state.current_route);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        app.state.backend_url.as_str(),
        Style::default().fg(Color::Blue),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the current route
fn get_route_hints(route: &Route) -> String {
    match route {
        Route::DocumentList => "j/k:nav  Enter:edit  n:new  r:reload  Tab:required docs  q:quit"
            .to_string(),
        Route::RequirementList => {
            "j/k:nav  Enter:edit  n:new  r:reload  Tab:documents  q:quit".to_string()
        }
        Route::DocumentEditor(_) => format!("Tab:next  {SAVE_SHORTCUT}:save  Esc:back"),
        Route::RequirementEditor(_) => format!(
            "Tab:next  type:filter  Up/Down:pick  {SAVE_SHORTCUT}:save  {RELOAD_SHORTCUT}:reload options  Esc:back"
        ),
    }
}
