//! Trait abstraction for the backend client to enable mocking in tests

use super::ApiError;
use crate::state::{Document, DocumentRequirement, DocumentType, InternshipType, RequirementKey};
use async_trait::async_trait;

/// Backend operations used by the admin screens
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClientTrait: Send + Sync {
    /// `GET /Documento`
    async fn list_documents(&self) -> Result<Vec<Document>, ApiError>;

    /// `GET /Documento/{id}`
    async fn get_document(&self, id: i64) -> Result<Document, ApiError>;

    /// `POST /Documento`
    async fn create_document(&self, document: &Document) -> Result<(), ApiError>;

    /// `PUT /Documento/{id}`
    async fn update_document(&self, id: i64, document: &Document) -> Result<(), ApiError>;

    /// `GET /tipodocumento`
    async fn list_document_types(&self) -> Result<Vec<DocumentType>, ApiError>;

    /// `GET /tipoestagio`
    async fn list_internship_types(&self) -> Result<Vec<InternshipType>, ApiError>;

    /// `GET /documentonecessario`
    async fn list_requirements(&self) -> Result<Vec<DocumentRequirement>, ApiError>;

    /// `GET /documentonecessario/{d}/{e}`
    async fn get_requirement(&self, key: RequirementKey)
        -> Result<DocumentRequirement, ApiError>;

    /// `POST /documentonecessario`
    async fn create_requirement(&self, requirement: &DocumentRequirement)
        -> Result<(), ApiError>;

    /// `PUT /documentonecessario/{d}/{e}`, addressed by the key the record was loaded with
    async fn update_requirement(
        &self,
        key: RequirementKey,
        requirement: &DocumentRequirement,
    ) -> Result<(), ApiError>;
}
