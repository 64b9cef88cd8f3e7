//! Backend records and the option lists derived from them

use serde::{Deserialize, Serialize};

/// Document record (`/Documento`)
///
/// A missing `documento_id` marks a record that has not been created yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(
        rename = "documentoId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<i64>,
    #[serde(rename = "descricaoDocumento", default)]
    pub description: String,
    #[serde(rename = "situacaoDocumento", default)]
    pub status: String,
}

impl Document {
    /// The zero-valued record a create screen starts from
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Composite identifier of a [`DocumentRequirement`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequirementKey {
    pub document_type_id: i64,
    pub internship_type_id: i64,
}

/// Association between a document type and an internship type (`/documentonecessario`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRequirement {
    #[serde(rename = "idTipoDocumento", default)]
    pub document_type_id: i64,
    #[serde(rename = "idTipoEstagio", default)]
    pub internship_type_id: i64,
}

impl DocumentRequirement {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn key(&self) -> RequirementKey {
        RequirementKey {
            document_type_id: self.document_type_id,
            internship_type_id: self.internship_type_id,
        }
    }
}

impl From<RequirementKey> for DocumentRequirement {
    fn from(key: RequirementKey) -> Self {
        Self {
            document_type_id: key.document_type_id,
            internship_type_id: key.internship_type_id,
        }
    }
}

/// Reference record from `/tipodocumento`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentType {
    #[serde(rename = "idTipoDocumento", default)]
    pub id: Option<i64>,
    #[serde(rename = "descricaoTipoDocumento", default)]
    pub description: String,
}

/// Reference record from `/tipoestagio`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternshipType {
    #[serde(rename = "idTipoEstagio")]
    pub id: i64,
    #[serde(rename = "descricaoTipoEstagio", default)]
    pub description: String,
}

/// One entry of a selection control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Options for the document type control, keyed by id.
///
/// Types the backend returned without an id cannot be referenced by a
/// requirement, so they are left out.
pub fn document_type_options(types: &[DocumentType]) -> Vec<SelectOption> {
    types
        .iter()
        .filter_map(|t| match t.id {
            Some(id) => Some(SelectOption::new(id.to_string(), t.description.clone())),
            None => {
                tracing::warn!(
                    description = %t.description,
                    "skipping document type without id"
                );
                None
            }
        })
        .collect()
}

/// Options for the internship type control, keyed by id
pub fn internship_type_options(types: &[InternshipType]) -> Vec<SelectOption> {
    types
        .iter()
        .map(|t| SelectOption::new(t.id.to_string(), t.description.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_document_deserializes_backend_shape() {
        let doc: Document = serde_json::from_value(json!({
            "documentoId": 5,
            "descricaoDocumento": "RG",
            "situacaoDocumento": "Ativo"
        }))
        .unwrap();

        assert_eq!(
            doc,
            Document {
                id: Some(5),
                description: "RG".to_string(),
                status: "Ativo".to_string(),
            }
        );
    }

    #[test]
    fn test_new_document_omits_id() {
        let doc = Document {
            id: None,
            description: "CPF".to_string(),
            status: "Ativo".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({"descricaoDocumento": "CPF", "situacaoDocumento": "Ativo"})
        );
    }

    #[test]
    fn test_empty_document_is_zero_valued() {
        let doc = Document::empty();
        assert!(doc.id.is_none());
        assert!(doc.description.is_empty());
        assert!(doc.status.is_empty());
    }

    #[test]
    fn test_document_ignores_unknown_fields() {
        let doc: Document =
            serde_json::from_str(r#"{"documentoId": 1, "key": 1, "extra": "x"}"#).unwrap();
        assert_eq!(doc.id, Some(1));
        assert_eq!(doc.description, "");
    }

    #[test]
    fn test_requirement_key_round_trip() {
        let req = DocumentRequirement {
            document_type_id: 4,
            internship_type_id: 2,
        };
        assert_eq!(DocumentRequirement::from(req.key()), req);
    }

    #[test]
    fn test_requirement_serializes_both_ids() {
        let req = DocumentRequirement {
            document_type_id: 4,
            internship_type_id: 2,
        };
        assert_eq!(
            serde_json::to_value(req).unwrap(),
            json!({"idTipoDocumento": 4, "idTipoEstagio": 2})
        );
    }

    #[test]
    fn test_document_type_options_use_ids() {
        let types = vec![
            DocumentType {
                id: Some(1),
                description: "Termo de compromisso".to_string(),
            },
            DocumentType {
                id: None,
                description: "Sem id".to_string(),
            },
        ];
        assert_eq!(
            document_type_options(&types),
            vec![SelectOption::new("1", "Termo de compromisso")]
        );
    }

    #[test]
    fn test_internship_type_options_use_ids() {
        let types = vec![InternshipType {
            id: 3,
            description: "Obrigatório".to_string(),
        }];
        assert_eq!(
            internship_type_options(&types),
            vec![SelectOption::new("3", "Obrigatório")]
        );
    }
}
