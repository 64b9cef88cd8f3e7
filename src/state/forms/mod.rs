//! Form domain layer
//!
//! Type-safe form handling for the create/edit editors: field values,
//! selection controls and the validation schema each form applies.

mod combobox;
mod field;
mod form_state;
mod validation;

pub use combobox::Combobox;
pub use field::FormField;
pub use form_state::{
    DocumentForm, EditorMode, Form, FormButton, FormPhase, FormState, RequirementForm,
};
pub use validation::ValidationError;
