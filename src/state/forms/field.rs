//! Form field value objects

use super::combobox::Combobox;
use super::validation::ValidationError;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(Combobox),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration, value and last validation error
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: FieldValue,
    pub error: Option<ValidationError>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder,
            value: FieldValue::Text(String::new()),
            error: None,
        }
    }

    /// Create a new selection field backed by its own option list
    pub fn choice(name: &'static str, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder,
            value: FieldValue::Choice(Combobox::new()),
            error: None,
        }
    }

    /// Get the text value (returns empty string for choice fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(_) => "",
        }
    }

    pub fn combobox(&self) -> Option<&Combobox> {
        match &self.value {
            FieldValue::Choice(c) => Some(c),
            FieldValue::Text(_) => None,
        }
    }

    pub fn combobox_mut(&mut self) -> Option<&mut Combobox> {
        match &mut self.value {
            FieldValue::Choice(c) => Some(c),
            FieldValue::Text(_) => None,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: impl Into<String>) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = value.into();
        }
    }

    /// Push a character to the text or to the choice filter
    pub fn push_char(&mut self, c: char) {
        self.error = None;
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Choice(combo) => combo.push_query(c),
        }
    }

    /// Remove the last character from the text or from the choice filter
    pub fn pop_char(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => {
                s.pop();
            }
            FieldValue::Choice(combo) => combo.pop_query(),
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(combo) => match (combo.selected_label(), combo.selected_value()) {
                (Some(label), _) => label.to_string(),
                (None, Some(value)) => format!("#{value}"),
                (None, None) => String::new(),
            },
        }
    }

    /// The field value as a string, as the schema sees it
    pub fn validate_text(&self) -> Result<String, ValidationError> {
        Ok(self.as_text().to_string())
    }

    /// The selected option's value as an integer id. Text fields have no
    /// selection and always report `Required`.
    pub fn validate_integer(&self) -> Result<i64, ValidationError> {
        let raw = self
            .combobox()
            .and_then(Combobox::selected_value)
            .unwrap_or_default();
        if raw.is_empty() {
            return Err(ValidationError::Required { label: self.label });
        }
        raw.parse()
            .map_err(|_| ValidationError::NotANumber { label: self.label })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SelectOption;

    #[test]
    fn test_text_field_editing() {
        let mut field = FormField::text("descricao", "Description", "");
        field.push_char('R');
        field.push_char('G');
        assert_eq!(field.as_text(), "RG");
        field.pop_char();
        assert_eq!(field.display_value(), "R");
    }

    #[test]
    fn test_text_validation_accepts_any_string() {
        let field = FormField::text("descricao", "Description", "");
        assert_eq!(field.validate_text(), Ok(String::new()));
    }

    #[test]
    fn test_choice_typing_filters_instead_of_selecting() {
        let mut field = FormField::choice("tipo", "Type", "");
        field.push_char('x');
        let combo = field.combobox().unwrap();
        assert_eq!(combo.query(), "x");
        assert_eq!(combo.selected_value(), None);
    }

    #[test]
    fn test_unselected_choice_is_required() {
        let field = FormField::choice("tipo", "Type", "");
        assert_eq!(
            field.validate_integer(),
            Err(ValidationError::Required { label: "Type" })
        );
    }

    #[test]
    fn test_selected_choice_parses_id() {
        let mut field = FormField::choice("tipo", "Type", "");
        let combo = field.combobox_mut().unwrap();
        combo.set_options(vec![SelectOption::new("4", "Termo")]);
        combo.select_value("4");
        assert_eq!(field.validate_integer(), Ok(4));
        assert_eq!(field.display_value(), "Termo");
    }

    #[test]
    fn test_non_numeric_selection_is_rejected() {
        let mut field = FormField::choice("tipo", "Type", "");
        field.combobox_mut().unwrap().select_value("abc");
        assert_eq!(
            field.validate_integer(),
            Err(ValidationError::NotANumber { label: "Type" })
        );
    }

    #[test]
    fn test_text_field_has_no_integer_value() {
        let mut field = FormField::text("id", "Id", "");
        field.set_text("12");
        assert_eq!(
            field.validate_integer(),
            Err(ValidationError::Required { label: "Id" })
        );
    }

    #[test]
    fn test_unloaded_selection_displays_raw_value() {
        let mut field = FormField::choice("tipo", "Type", "");
        field.combobox_mut().unwrap().select_value("9");
        assert_eq!(field.display_value(), "#9");
    }

    #[test]
    fn test_typing_clears_error() {
        let mut field = FormField::text("descricao", "Description", "");
        field.error = Some(ValidationError::Required {
            label: "Description",
        });
        field.push_char('a');
        assert!(field.error.is_none());
    }
}
