//! Application state definitions

use super::{Document, DocumentRequirement, FormState, Route};
use std::collections::VecDeque;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_route: Route,

    // Editor
    pub form: FormState,

    // List data
    pub documents: Vec<Document>,
    pub requirements: Vec<DocumentRequirement>,
    pub list_loading: bool,

    // Selection
    pub selected_index: usize,

    // UI state
    pub status_message: Option<String>,
    pub errors: VecDeque<String>,
    pub backend_url: String,
}

impl AppState {
    /// Move selection down
    pub fn move_selection_down(&mut self) {
        let max = self.list_len();
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
    }

    /// Number of rows in the list shown by the current route
    pub fn list_len(&self) -> usize {
        match self.current_route {
            Route::DocumentList => self.documents.len(),
            Route::RequirementList => self.requirements.len(),
            _ => 0,
        }
    }

    pub fn selected_document(&self) -> Option<&Document> {
        self.documents.get(self.selected_index)
    }

    pub fn selected_requirement(&self) -> Option<&DocumentRequirement> {
        self.requirements.get(self.selected_index)
    }

    /// Queue an error for the modal error dialog
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push_back(message.into());
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_documents(count: usize) -> AppState {
        AppState {
            documents: (1..=count as i64)
                .map(|id| Document {
                    id: Some(id),
                    ..Document::empty()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_route_is_document_list() {
        let state = AppState::default();
        assert_eq!(state.current_route, Route::DocumentList);
        assert!(matches!(state.form, FormState::None));
    }

    #[test]
    fn test_move_selection_stops_at_last_row() {
        let mut state = state_with_documents(2);
        state.move_selection_down();
        state.move_selection_down();
        assert_eq!(state.selected_index, 1);
        assert_eq!(state.selected_document().and_then(|d| d.id), Some(2));
    }

    #[test]
    fn test_move_selection_up_stops_at_zero() {
        let mut state = state_with_documents(2);
        state.move_selection_up();
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_move_selection_on_empty_list() {
        let mut state = AppState::default();
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
        assert!(state.selected_document().is_none());
    }

    #[test]
    fn test_list_len_follows_route() {
        let mut state = state_with_documents(3);
        assert_eq!(state.list_len(), 3);
        state.current_route = Route::RequirementList;
        assert_eq!(state.list_len(), 0);
        state.current_route = Route::DocumentEditor(None);
        assert_eq!(state.list_len(), 0);
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        assert!(!state.has_errors());
        state.push_error("first");
        state.push_error("second");
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
    }
}
