//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod lists;
mod widgets;

use crate::app::App;
use crate::state::Route;
use ratatui::Frame;

pub use widgets::render_scrollable_list;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, main_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app);

    match &app.state.current_route {
        Route::DocumentList => lists::draw_documents(frame, main_area, app),
        Route::RequirementList => lists::draw_requirements(frame, main_area, app),
        Route::DocumentEditor(_) | Route::RequirementEditor(_) => {
            forms::draw_editor(frame, main_area, app)
        }
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog overlays everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApiClientTrait;
    use crate::state::{Document, DocumentForm, EditorMode, FormState};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
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

    fn app_on(route: Route, form: FormState) -> App {
        let mut app = App::new(Arc::new(MockApiClientTrait::new()), "http://backend/api/");
        app.state.current_route = route;
        app.state.form = form;
        app
    }

    #[test]
    fn test_create_editor_shows_create_button() {
        let form = DocumentForm::new(EditorMode::Create);
        let app = app_on(Route::DocumentEditor(None), FormState::Document(form));

        let screen = render(&app);
        assert!(screen.contains("New document"));
        assert!(screen.contains("Create"));
        assert!(!screen.contains("Save changes"));
    }

    #[test]
    fn test_edit_editor_shows_save_changes_button() {
        let mut form = DocumentForm::new(EditorMode::Edit(5));
        form.load(&Document {
            id: Some(5),
            description: "RG".to_string(),
            status: "A".to_string(),
        });
        let app = app_on(Route::DocumentEditor(Some(5)), FormState::Document(form));

        let screen = render(&app);
        assert!(screen.contains("Save changes"));
        assert!(screen.contains("RG"));
    }

    #[test]
    fn test_loading_editor_hides_fields() {
        let form = DocumentForm::new(EditorMode::Edit(5));
        let app = app_on(Route::DocumentEditor(Some(5)), FormState::Document(form));

        let screen = render(&app);
        assert!(screen.contains("Loading"));
    }

    #[test]
    fn test_error_dialog_overlays_list() {
        let mut app = app_on(Route::DocumentList, FormState::None);
        app.state.push_error("Could not load documents");

        let screen = render(&app);
        assert!(screen.contains("Error"));
        assert!(screen.contains("Could not load documents"));
    }

    #[test]
    fn test_document_list_rows() {
        let mut app = app_on(Route::DocumentList, FormState::None);
        app.state.documents = vec![Document {
            id: Some(7),
            description: "Termo de compromisso".to_string(),
            status: "A".to_string(),
        }];

        let screen = render(&app);
        assert!(screen.contains("Termo de compromisso"));
        assert!(screen.contains("#7"));
    }
}
