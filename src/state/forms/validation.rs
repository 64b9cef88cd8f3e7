//! Field-level validation

use std::collections::BTreeMap;
use thiserror::Error;

/// Why a single field was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    Required { label: &'static str },
    #[error("{label} must be a whole number")]
    NotANumber { label: &'static str },
}

/// All rejected fields of one submission, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<&'static str, ValidationError>);

impl ValidationErrors {
    pub fn insert(&mut self, field: &'static str, error: ValidationError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: &str) -> Option<&ValidationError> {
        self.0.get(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `Ok(value)` when nothing was collected
    pub fn into_result<T>(self, value: impl FnOnce() -> T) -> Result<T, Self> {
        if self.is_empty() {
            Ok(value())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            ValidationError::Required {
                label: "Document type"
            }
            .to_string(),
            "Document type is required"
        );
        assert_eq!(
            ValidationError::NotANumber { label: "Id" }.to_string(),
            "Id must be a whole number"
        );
    }

    #[test]
    fn test_empty_errors_yield_value() {
        let errors = ValidationErrors::default();
        assert_eq!(errors.into_result(|| 7), Ok(7));
    }

    #[test]
    fn test_collected_errors_block_value() {
        let mut errors = ValidationErrors::default();
        errors.insert("a", ValidationError::Required { label: "A" });
        errors.insert("b", ValidationError::NotANumber { label: "B" });
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.to_string(), "2 field(s) failed validation");

        let result = errors.into_result(|| ());
        let errors = result.unwrap_err();
        assert_eq!(
            errors.get("a"),
            Some(&ValidationError::Required { label: "A" })
        );
    }
}
