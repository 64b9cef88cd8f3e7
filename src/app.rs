//! Application state and core logic

use crate::api::{ApiClientTrait, ApiError};
use crate::platform::{RELOAD_SHORTCUT, SAVE_ALT_MODIFIER, SAVE_SHORTCUT};
use crate::state::{
    document_type_options, internship_type_options, AppState, DocumentForm, EditorMode,
    FormButton, FormPhase, FormState, RequirementForm, Route,
};
use crate::tasks::{TaskEvent, TaskOutput, TaskRunner};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Backend client shared with spawned tasks
    api: Arc<dyn ApiClientTrait>,
    /// Backend calls of the mounted screen
    tasks: TaskRunner,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance. Nothing is mounted until [`App::start`].
    pub fn new(api: Arc<dyn ApiClientTrait>, backend_url: impl Into<String>) -> Self {
        let state = AppState {
            backend_url: backend_url.into(),
            ..Default::default()
        };

        Self {
            state,
            api,
            tasks: TaskRunner::new(),
            quit: false,
        }
    }

    /// Mount the first screen
    pub fn start(&mut self, route: Route) {
        tracing::info!(%route, "starting");
        self.state.current_route = route;
        self.mount();
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether any backend call is still running
    pub fn is_busy(&self) -> bool {
        self.tasks.in_flight() > 0
    }

    #[cfg(test)]
    pub fn mount_id(&self) -> crate::tasks::MountId {
        self.tasks.mount()
    }

    /// Navigate to a new route, dropping the current screen and anything it had in flight
    pub fn navigate(&mut self, route: Route) {
        tracing::info!(from = %self.state.current_route, to = %route, "navigate");
        self.tasks.remount();
        self.state.current_route = route;
        self.state.form = FormState::None;
        self.state.reset_selection();
        self.mount();
    }

    /// Start the loads the current route needs
    fn mount(&mut self) {
        match self.state.current_route {
            Route::DocumentList => {
                self.state.list_loading = true;
                let api = Arc::clone(&self.api);
                self.tasks.spawn(async move {
                    TaskOutput::DocumentsListed(api.list_documents().await)
                });
            }
            Route::RequirementList => {
                self.state.list_loading = true;
                let api = Arc::clone(&self.api);
                self.tasks.spawn(async move {
                    TaskOutput::RequirementsListed(api.list_requirements().await)
                });
            }
            Route::DocumentEditor(id) => {
                let mode = EditorMode::from_route(id);
                self.state.form = FormState::Document(DocumentForm::new(mode));
                if let EditorMode::Edit(id) = mode {
                    let api = Arc::clone(&self.api);
                    self.tasks.spawn(async move {
                        TaskOutput::DocumentLoaded(api.get_document(id).await)
                    });
                }
            }
            Route::RequirementEditor(key) => {
                let mode = EditorMode::from_route(key);
                self.state.form = FormState::Requirement(RequirementForm::new(mode));
                match mode {
                    EditorMode::Edit(key) => {
                        let api = Arc::clone(&self.api);
                        self.tasks.spawn(async move {
                            TaskOutput::RequirementLoaded(api.get_requirement(key).await)
                        });
                    }
                    // The empty record counts as loaded, so its options load right away
                    EditorMode::Create => self.load_options(),
                }
            }
        }
    }

    /// Fetch both reference lists for the requirement editor
    fn load_options(&mut self) {
        let FormState::Requirement(form) = &mut self.state.form else {
            return;
        };
        if form.options_loading {
            return;
        }
        form.options_loading = true;
        form.banner = None;

        let api = Arc::clone(&self.api);
        self.tasks.spawn(async move {
            let result = tokio::try_join!(api.list_document_types(), api.list_internship_types())
                .map(|(document_types, internship_types)| {
                    (
                        document_type_options(&document_types),
                        internship_type_options(&internship_types),
                    )
                });
            TaskOutput::OptionsLoaded(result)
        });
    }

    /// Apply every finished task without waiting. Called once per UI tick.
    pub fn process_events(&mut self) {
        while let Some(event) = self.tasks.try_next() {
            self.apply_event(event);
        }
    }

    /// Wait until nothing is in flight, applying results as they arrive
    #[cfg(test)]
    pub async fn settle(&mut self) {
        while let Some(event) = self.tasks.next().await {
            self.apply_event(event);
        }
    }

    fn apply_event(&mut self, event: TaskEvent) {
        if event.mount != self.tasks.mount() {
            tracing::debug!(mount = event.mount, "dropping result of an unmounted screen");
            return;
        }

        match event.output {
            TaskOutput::Cancelled => {}
            TaskOutput::DocumentsListed(result) => {
                self.state.list_loading = false;
                match result {
                    Ok(documents) => self.state.documents = documents,
                    Err(err) => {
                        tracing::warn!(error = %err, "failed to list documents");
                        self.state
                            .push_error(format!("Could not load documents: {err}"));
                    }
                }
            }
            TaskOutput::RequirementsListed(result) => {
                self.state.list_loading = false;
                match result {
                    Ok(requirements) => self.state.requirements = requirements,
                    Err(err) => {
                        tracing::warn!(error = %err, "failed to list required documents");
                        self.state
                            .push_error(format!("Could not load required documents: {err}"));
                    }
                }
            }
            TaskOutput::DocumentLoaded(result) => match result {
                Ok(document) => {
                    if let FormState::Document(form) = &mut self.state.form {
                        form.load(&document);
                    }
                }
                Err(err) => self.load_failed("document", err),
            },
            TaskOutput::RequirementLoaded(result) => match result {
                Ok(requirement) => {
                    if let FormState::Requirement(form) = &mut self.state.form {
                        form.load(&requirement);
                    }
                    self.load_options();
                }
                Err(err) => self.load_failed("required document", err),
            },
            TaskOutput::OptionsLoaded(result) => {
                if let FormState::Requirement(form) = &mut self.state.form {
                    match result {
                        Ok((document_types, internship_types)) => {
                            form.apply_options(document_types, internship_types);
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "failed to load selection options");
                            form.options_loading = false;
                            form.banner = Some(format!(
                                "Could not load options: {err}. Press {RELOAD_SHORTCUT} to retry."
                            ));
                        }
                    }
                }
            }
            TaskOutput::Saved(result) => match result {
                Ok(()) => {
                    tracing::info!(route = %self.state.current_route, "record saved");
                    let list = self.state.current_route.list_route();
                    self.navigate(list);
                    self.state.status_message = Some("Saved".to_string());
                }
                Err(err) => {
                    tracing::warn!(route = %self.state.current_route, error = %err, "save failed");
                    self.state.form.fail_submit(format!(
                        "Could not save: {err}. Press {SAVE_SHORTCUT} to retry."
                    ));
                }
            },
        }
    }

    /// A missing record goes back to the list with a note; other failures raise the error dialog
    fn load_failed(&mut self, what: &str, err: ApiError) {
        let list = self.state.current_route.list_route();
        tracing::warn!(route = %self.state.current_route, error = %err, "failed to load {what}");
        self.navigate(list);
        if err.is_not_found() {
            self.state.status_message = Some(format!("The {what} no longer exists"));
        } else {
            self.state.push_error(format!("Could not load {what}: {err}"));
        }
    }

    /// Validate the mounted form and send it. Ignored while a previous write is in flight.
    fn submit(&mut self) {
        let api = Arc::clone(&self.api);
        match &mut self.state.form {
            FormState::None => {}
            FormState::Document(form) => {
                let Some(document) = form.begin_submit() else {
                    return;
                };
                let mode = form.mode;
                tracing::info!(?mode, "submitting document");
                self.tasks.spawn(async move {
                    let result = match mode {
                        EditorMode::Create => api.create_document(&document).await,
                        EditorMode::Edit(id) => api.update_document(id, &document).await,
                    };
                    TaskOutput::Saved(result)
                });
            }
            FormState::Requirement(form) => {
                let Some(requirement) = form.begin_submit() else {
                    return;
                };
                let mode = form.mode;
                tracing::info!(?mode, "submitting required document");
                self.tasks.spawn(async move {
                    let result = match mode {
                        EditorMode::Create => api.create_requirement(&requirement).await,
                        EditorMode::Edit(key) => api.update_requirement(key, &requirement).await,
                    };
                    TaskOutput::Saved(result)
                });
            }
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        self.state.status_message = None;

        if self.state.current_route.is_editor() {
            self.handle_editor_key(key);
        } else {
            self.handle_list_key(key);
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.state.move_selection_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.move_selection_down(),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Char('n') => {
                let route = match self.state.current_route {
                    Route::RequirementList => Route::RequirementEditor(None),
                    _ => Route::DocumentEditor(None),
                };
                self.navigate(route);
            }
            KeyCode::Char('r') => {
                self.tasks.remount();
                self.mount();
            }
            KeyCode::Tab | KeyCode::BackTab => {
                let route = match self.state.current_route {
                    Route::DocumentList => Route::RequirementList,
                    _ => Route::DocumentList,
                };
                self.navigate(route);
            }
            _ => {}
        }
    }

    fn open_selected(&mut self) {
        let route = match self.state.current_route {
            Route::DocumentList => match self.state.selected_document().map(|d| d.id) {
                Some(Some(id)) => Route::DocumentEditor(Some(id)),
                Some(None) => {
                    self.state
                        .push_error("The selected document has no identifier");
                    return;
                }
                None => return,
            },
            Route::RequirementList => match self.state.selected_requirement() {
                Some(requirement) => Route::RequirementEditor(Some(requirement.key())),
                None => return,
            },
            _ => return,
        };
        self.navigate(route);
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.leave_editor();
                return;
            }
            // Save (Ctrl+S, or Cmd+W / Ctrl+W)
            KeyCode::Char('s') if ctrl => {
                self.submit();
                return;
            }
            KeyCode::Char('w') if key.modifiers.contains(SAVE_ALT_MODIFIER) => {
                self.submit();
                return;
            }
            KeyCode::Char('r') if ctrl => {
                self.load_options();
                return;
            }
            KeyCode::Tab => {
                self.state.form.next_field();
                return;
            }
            KeyCode::BackTab => {
                self.state.form.prev_field();
                return;
            }
            _ => {}
        }

        // Back stays usable while a load or write is pending
        if self.state.form.is_buttons_row_active()
            && key.code == KeyCode::Enter
            && self.state.form.selected_button() == Some(FormButton::Back)
        {
            self.leave_editor();
            return;
        }

        if self.state.form.phase() != Some(FormPhase::Ready) {
            return;
        }

        if self.state.form.is_buttons_row_active() {
            self.handle_buttons_key(key);
            return;
        }

        match key.code {
            KeyCode::Up => {
                if let Some(combo) = self.active_combobox() {
                    combo.highlight_prev();
                }
            }
            KeyCode::Down => {
                if let Some(combo) = self.active_combobox() {
                    combo.highlight_next();
                }
            }
            KeyCode::Enter => {
                let selected = self.active_combobox().map(|combo| combo.select_highlighted());
                match selected {
                    Some(true) => {
                        if let Some(field) = self.state.form.get_active_field_mut() {
                            field.error = None;
                        }
                        self.state.form.next_field();
                    }
                    // Nothing matches the filter; stay on the control
                    Some(false) => {}
                    None => self.state.form.next_field(),
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
    }

    fn handle_buttons_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Right => {
                if let Some(button) = self.state.form.selected_button_mut() {
                    button.toggle();
                }
            }
            KeyCode::Enter => match self.state.form.selected_button() {
                Some(FormButton::Submit) => self.submit(),
                Some(FormButton::Back) => self.leave_editor(),
                None => {}
            },
            _ => {}
        }
    }

    fn active_combobox(&mut self) -> Option<&mut crate::state::Combobox> {
        self.state
            .form
            .get_active_field_mut()
            .and_then(|field| field.combobox_mut())
    }

    fn leave_editor(&mut self) {
        let list = self.state.current_route.list_route();
        self.navigate(list);
    }
}
