//! HTTP client for the EstagioTech REST backend

use super::paths;
use super::traits::ApiClientTrait;
use super::ApiError;
use crate::state::{Document, DocumentRequirement, DocumentType, InternshipType, RequirementKey};
use async_trait::async_trait;
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api/";

/// Client for the backend's JSON endpoints
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client rooted at `base_url`. Endpoint paths are resolved below it.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        let base_url = normalize_base(base_url)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path)?;
        tracing::debug!(%url, "GET");

        let response = self.http.get(url).send().await?;
        let body = check_status(response, path)?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let url = self.url(path)?;
        tracing::debug!(%method, %url, "sending record");

        let response = self.http.request(method, url).json(body).send().await?;
        check_status(response, path)?;
        Ok(())
    }
}

/// Make sure the base URL ends with a slash so relative joins keep its last segment
fn normalize_base(base_url: &str) -> Result<Url, ApiError> {
    let mut base = base_url.trim().to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Ok(Url::parse(&base)?)
}

fn check_status(response: Response, path: &str) -> Result<Response, ApiError> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(ApiError::NotFound {
            path: path.to_string(),
        }),
        status if !status.is_success() => Err(ApiError::Status {
            status: status.as_u16(),
            path: path.to_string(),
        }),
        _ => Ok(response),
    }
}

#[async_trait]
impl ApiClientTrait for ApiClient {
    async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        self.get_json(paths::DOCUMENTS).await
    }

    async fn get_document(&self, id: i64) -> Result<Document, ApiError> {
        self.get_json(&paths::document(id)).await
    }

    async fn create_document(&self, document: &Document) -> Result<(), ApiError> {
        self.send_json(Method::POST, paths::DOCUMENTS, document)
            .await
    }

    async fn update_document(&self, id: i64, document: &Document) -> Result<(), ApiError> {
        self.send_json(Method::PUT, &paths::document(id), document)
            .await
    }

    async fn list_document_types(&self) -> Result<Vec<DocumentType>, ApiError> {
        self.get_json(paths::DOCUMENT_TYPES).await
    }

    async fn list_internship_types(&self) -> Result<Vec<InternshipType>, ApiError> {
        self.get_json(paths::INTERNSHIP_TYPES).await
    }

    async fn list_requirements(&self) -> Result<Vec<DocumentRequirement>, ApiError> {
        self.get_json(paths::REQUIREMENTS).await
    }

    async fn get_requirement(
        &self,
        key: RequirementKey,
    ) -> Result<DocumentRequirement, ApiError> {
        self.get_json(&paths::requirement(key)).await
    }

    async fn create_requirement(
        &self,
        requirement: &DocumentRequirement,
    ) -> Result<(), ApiError> {
        self.send_json(Method::POST, paths::REQUIREMENTS, requirement)
            .await
    }

    async fn update_requirement(
        &self,
        key: RequirementKey,
        requirement: &DocumentRequirement,
    ) -> Result<(), ApiError> {
        self.send_json(Method::PUT, &paths::requirement(key), requirement)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = ApiClient::new("http://localhost:5000/api", None).unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:5000/api/");
    }

    #[test]
    fn test_url_keeps_base_path() {
        let client = ApiClient::new("http://localhost:5000/api/", None).unwrap();
        let url = client.url(&paths::document(5)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5000/api/Documento/5");
    }

    #[test]
    fn test_url_for_composite_key() {
        let client = ApiClient::new(DEFAULT_BASE_URL, None).unwrap();
        let key = RequirementKey {
            document_type_id: 2,
            internship_type_id: 9,
        };
        let url = client.url(&paths::requirement(key)).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:5000/api/documentonecessario/2/9"
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = ApiClient::new("not a url", None);
        assert!(matches!(result, Err(ApiError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_timeout_is_accepted() {
        let client = ApiClient::new(DEFAULT_BASE_URL, Some(Duration::from_secs(5)));
        assert!(client.is_ok());
    }

    #[test]
    fn test_unreachable_backend_is_a_network_error() {
        // Nothing listens on port 1
        let client = ApiClient::new("http://127.0.0.1:1/api/", Some(Duration::from_secs(5))).unwrap();
        let result = tokio_test::block_on(client.list_documents());
        let err = tokio_test::assert_err!(result);
        assert!(matches!(err, ApiError::Network(_)));
        assert!(!err.is_not_found());
    }
}
