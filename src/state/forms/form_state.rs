//! Form state management and the two record editor forms

use super::field::FormField;
use super::validation::ValidationErrors;
use crate::state::{Document, DocumentRequirement, RequirementKey, SelectOption};

/// Whether the editor creates a record or updates the one it was opened with.
///
/// Decided once when the editor is mounted, from the identifier in the route.
/// An `Edit` carries that identifier and every update is addressed with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode<K> {
    Create,
    Edit(K),
}

impl<K: Copy> EditorMode<K> {
    pub fn from_route(id: Option<K>) -> Self {
        match id {
            Some(id) => Self::Edit(id),
            None => Self::Create,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, Self::Edit(_))
    }

    pub fn key(&self) -> Option<K> {
        match self {
            Self::Create => None,
            Self::Edit(key) => Some(*key),
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Edit(_) => "Save changes",
        }
    }
}

/// Lifecycle of an editor between mount and navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Waiting for the record being edited
    Loading,
    #[default]
    Ready,
    /// A create/update call is in flight
    Submitting,
}

/// Buttons on the last row of every editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Back,
}

impl FormButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Submit => Self::Back,
            Self::Back => Self::Submit,
        };
    }
}

/// Trait for common form operations
pub trait Form {
    /// Number of rows, including the buttons row
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field();
        self.get_field_mut(index)
    }
    fn is_buttons_row_active(&self) -> bool {
        self.active_field() == self.field_count() - 1
    }
}

/// Copy validation errors onto the fields they belong to
fn mark_errors<F: Form>(form: &mut F, errors: &ValidationErrors) {
    for index in 0..form.field_count() {
        if let Some(field) = form.get_field_mut(index) {
            field.error = errors.get(field.name).cloned();
        }
    }
}

/// Enum representing the mounted editor, if any
#[derive(Debug, Clone, Default)]
pub enum FormState {
    #[default]
    None,
    Document(DocumentForm),
    Requirement(RequirementForm),
}

impl FormState {
    pub fn next_field(&mut self) {
        match self {
            FormState::None => {}
            FormState::Document(f) => f.next_field(),
            FormState::Requirement(f) => f.next_field(),
        }
    }

    pub fn prev_field(&mut self) {
        match self {
            FormState::None => {}
            FormState::Document(f) => f.prev_field(),
            FormState::Requirement(f) => f.prev_field(),
        }
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        match self {
            FormState::None => None,
            FormState::Document(f) => f.get_active_field_mut(),
            FormState::Requirement(f) => f.get_active_field_mut(),
        }
    }

    pub fn is_buttons_row_active(&self) -> bool {
        match self {
            FormState::None => false,
            FormState::Document(f) => f.is_buttons_row_active(),
            FormState::Requirement(f) => f.is_buttons_row_active(),
        }
    }

    pub fn selected_button_mut(&mut self) -> Option<&mut FormButton> {
        match self {
            FormState::None => None,
            FormState::Document(f) => Some(&mut f.selected_button),
            FormState::Requirement(f) => Some(&mut f.selected_button),
        }
    }

    pub fn selected_button(&self) -> Option<FormButton> {
        match self {
            FormState::None => None,
            FormState::Document(f) => Some(f.selected_button),
            FormState::Requirement(f) => Some(f.selected_button),
        }
    }

    pub fn phase(&self) -> Option<FormPhase> {
        match self {
            FormState::None => None,
            FormState::Document(f) => Some(f.phase),
            FormState::Requirement(f) => Some(f.phase),
        }
    }

    /// Leave `Submitting` and show why the write failed
    pub fn fail_submit(&mut self, message: String) {
        match self {
            FormState::None => {}
            FormState::Document(f) => {
                f.phase = FormPhase::Ready;
                f.banner = Some(message);
            }
            FormState::Requirement(f) => {
                f.phase = FormPhase::Ready;
                f.banner = Some(message);
            }
        }
    }
}

// Document Form
#[derive(Debug, Clone)]
pub struct DocumentForm {
    pub mode: EditorMode<i64>,
    pub phase: FormPhase,
    pub description: FormField,
    pub status: FormField,
    pub active_field_index: usize,
    pub selected_button: FormButton,
    /// Error shown above the buttons after a failed write
    pub banner: Option<String>,
}

impl DocumentForm {
    pub fn new(mode: EditorMode<i64>) -> Self {
        Self {
            mode,
            phase: if mode.is_edit() {
                FormPhase::Loading
            } else {
                FormPhase::Ready
            },
            description: FormField::text(
                "descricaoDocumento",
                "Document description",
                "Describe the document type",
            ),
            status: FormField::text(
                "situacaoDocumento",
                "Document status",
                "Describe the document status",
            ),
            active_field_index: 0,
            selected_button: FormButton::Submit,
            banner: None,
        }
    }

    /// Fill the fields from the loaded record
    pub fn load(&mut self, document: &Document) {
        if let (Some(expected), Some(actual)) = (self.mode.key(), document.id) {
            if expected != actual {
                tracing::warn!(expected, actual, "backend returned a different document id");
            }
        }
        self.description.set_text(document.description.clone());
        self.status.set_text(document.status.clone());
        self.phase = FormPhase::Ready;
    }

    /// The record a submission sends. In edit mode the id always comes from
    /// the route the editor was opened with. A loaded record carrying a
    /// different id is logged by `load` and the route id still wins.
    pub fn validate(&self) -> Result<Document, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let description = self.description.validate_text().unwrap_or_else(|e| {
            errors.insert(self.description.name, e);
            String::new()
        });
        let status = self.status.validate_text().unwrap_or_else(|e| {
            errors.insert(self.status.name, e);
            String::new()
        });

        errors.into_result(|| Document {
            id: self.mode.key(),
            description,
            status,
        })
    }

    /// Validate and enter `Submitting`. `None` when the form is not ready or invalid.
    pub fn begin_submit(&mut self) -> Option<Document> {
        if self.phase != FormPhase::Ready {
            return None;
        }
        let result = self.validate();
        match result {
            Ok(document) => {
                mark_errors(self, &ValidationErrors::default());
                self.banner = None;
                self.phase = FormPhase::Submitting;
                Some(document)
            }
            Err(errors) => {
                mark_errors(self, &errors);
                None
            }
        }
    }
}

impl Form for DocumentForm {
    fn field_count(&self) -> usize {
        3 // description, status, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.description),
            1 => Some(&mut self.status),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.description),
            1 => Some(&self.status),
            // Index 2 is buttons row, no FormField for it
            _ => None,
        }
    }
}

// Document Requirement Form
#[derive(Debug, Clone)]
pub struct RequirementForm {
    pub mode: EditorMode<RequirementKey>,
    pub phase: FormPhase,
    pub document_type: FormField,
    pub internship_type: FormField,
    pub options_loading: bool,
    pub active_field_index: usize,
    pub selected_button: FormButton,
    pub banner: Option<String>,
}

impl RequirementForm {
    pub fn new(mode: EditorMode<RequirementKey>) -> Self {
        Self {
            mode,
            phase: if mode.is_edit() {
                FormPhase::Loading
            } else {
                FormPhase::Ready
            },
            document_type: FormField::choice(
                "idTipoDocumento",
                "Document type",
                "Search document types",
            ),
            internship_type: FormField::choice(
                "idTipoEstagio",
                "Internship type",
                "Search internship types",
            ),
            options_loading: false,
            active_field_index: 0,
            selected_button: FormButton::Submit,
            banner: None,
        }
    }

    /// Preselect both controls from the loaded association
    pub fn load(&mut self, requirement: &DocumentRequirement) {
        if requirement.document_type_id != 0 {
            if let Some(combo) = self.document_type.combobox_mut() {
                combo.select_value(requirement.document_type_id.to_string());
            }
        }
        if requirement.internship_type_id != 0 {
            if let Some(combo) = self.internship_type.combobox_mut() {
                combo.select_value(requirement.internship_type_id.to_string());
            }
        }
        self.phase = FormPhase::Ready;
    }

    /// Give each control its own option list
    pub fn apply_options(
        &mut self,
        document_types: Vec<SelectOption>,
        internship_types: Vec<SelectOption>,
    ) {
        if let Some(combo) = self.document_type.combobox_mut() {
            combo.set_options(document_types);
        }
        if let Some(combo) = self.internship_type.combobox_mut() {
            combo.set_options(internship_types);
        }
        self.options_loading = false;
    }

    /// The association a submission sends, built from the two selections
    pub fn validate(&self) -> Result<DocumentRequirement, ValidationErrors> {
        let mut errors = ValidationErrors::default();
        let document_type_id = self.document_type.validate_integer().unwrap_or_else(|e| {
            errors.insert(self.document_type.name, e);
            0
        });
        let internship_type_id = self.internship_type.validate_integer().unwrap_or_else(|e| {
            errors.insert(self.internship_type.name, e);
            0
        });

        errors.into_result(|| match self.mode {
            // The association being edited is identified by its ids; the
            // body repeats the loaded key whatever the controls now show
            EditorMode::Edit(key) => {
                if key.document_type_id != document_type_id
                    || key.internship_type_id != internship_type_id
                {
                    tracing::warn!(
                        ?key,
                        document_type_id,
                        internship_type_id,
                        "selection differs from the loaded key; sending the loaded key"
                    );
                }
                DocumentRequirement::from(key)
            }
            EditorMode::Create => DocumentRequirement {
                document_type_id,
                internship_type_id,
            },
        })
    }

    pub fn begin_submit(&mut self) -> Option<DocumentRequirement> {
        if self.phase != FormPhase::Ready {
            return None;
        }
        let result = self.validate();
        match result {
            Ok(requirement) => {
                mark_errors(self, &ValidationErrors::default());
                self.banner = None;
                self.phase = FormPhase::Submitting;
                Some(requirement)
            }
            Err(errors) => {
                mark_errors(self, &errors);
                None
            }
        }
    }
}

impl Form for RequirementForm {
    fn field_count(&self) -> usize {
        3 // document type, internship type, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.document_type),
            1 => Some(&mut self.internship_type),
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.document_type),
            1 => Some(&self.internship_type),
            _ => None,
        }
    }
}
