use async_trait::async_trait;
use contracts::domain::a001_category::{Category, CategoryId};
use contracts::shared::pagination::PageEnvelope;
use gloo_net::http::{Request, Response};
use serde::Serialize;

use crate::shared::api_utils::join_url;
use crate::shared::config::AppConfig;
use crate::shared::error::ApiError;

/// Remote collection of categories
#[async_trait(?Send)]
pub trait CategoryApi {
    /// `GET {collection}?page={page}`
    async fn list(&self, page: u32) -> Result<PageEnvelope<Category>, ApiError>;

    /// `DELETE {collection}/{id}`
    async fn delete(&self, id: &CategoryId) -> Result<(), ApiError>;

    /// `POST {collection}/{id}/ban` — деактивация
    async fn ban(&self, id: &CategoryId) -> Result<(), ApiError>;

    /// `POST {collection}/{id}/unban` — активация
    async fn unban(&self, id: &CategoryId) -> Result<(), ApiError>;
}

#[derive(Debug, Serialize)]
struct ListQuery {
    page: u32,
}

/// URL layout of the category collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEndpoints {
    collection_url: String,
}

impl CategoryEndpoints {
    pub fn new(base_url: &str, collection: &str) -> Self {
        Self {
            collection_url: join_url(base_url, collection),
        }
    }

    pub fn list(&self, page: u32) -> String {
        let query = serde_qs::to_string(&ListQuery { page: page.max(1) })
            .unwrap_or_else(|_| format!("page={}", page.max(1)));
        format!("{}?{}", self.collection_url, query)
    }

    pub fn item(&self, id: &CategoryId) -> String {
        format!(
            "{}/{}",
            self.collection_url,
            urlencoding::encode(id.as_str())
        )
    }

    pub fn ban(&self, id: &CategoryId) -> String {
        format!("{}/ban", self.item(id))
    }

    pub fn unban(&self, id: &CategoryId) -> String {
        format!("{}/unban", self.item(id))
    }
}

/// `CategoryApi` over the browser fetch API
#[derive(Debug, Clone)]
pub struct HttpCategoryApi {
    endpoints: CategoryEndpoints,
}

impl HttpCategoryApi {
    pub fn new(base_url: &str, collection: &str) -> Self {
        Self {
            endpoints: CategoryEndpoints::new(base_url, collection),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.api_base(), &config.api.collection)
    }
}

/// Turn non-2xx responses into `ApiError::Server`, reading the body for an
/// `{ "error": ... }` message.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::from_response(status, &body))
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    ensure_success(response).await
}

async fn post_empty(url: &str) -> Result<(), ApiError> {
    let request = Request::post(url)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await.map(|_| ())
}

#[async_trait(?Send)]
impl CategoryApi for HttpCategoryApi {
    async fn list(&self, page: u32) -> Result<PageEnvelope<Category>, ApiError> {
        let request = Request::get(&self.endpoints.list(page))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = send(request).await?;

        response
            .json::<PageEnvelope<Category>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn delete(&self, id: &CategoryId) -> Result<(), ApiError> {
        let request = Request::delete(&self.endpoints.item(id))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        send(request).await.map(|_| ())
    }

    async fn ban(&self, id: &CategoryId) -> Result<(), ApiError> {
        post_empty(&self.endpoints.ban(id)).await
    }

    async fn unban(&self, id: &CategoryId) -> Result<(), ApiError> {
        post_empty(&self.endpoints.unban(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> CategoryEndpoints {
        CategoryEndpoints::new("http://localhost:3000", "api/v1/categories")
    }

    #[test]
    fn test_list_url() {
        assert_eq!(
            endpoints().list(2),
            "http://localhost:3000/api/v1/categories?page=2"
        );
        // страницы нумеруются с 1
        assert_eq!(
            endpoints().list(0),
            "http://localhost:3000/api/v1/categories?page=1"
        );
    }

    #[test]
    fn test_item_urls() {
        let id = CategoryId::new("7");
        assert_eq!(
            endpoints().item(&id),
            "http://localhost:3000/api/v1/categories/7"
        );
        assert_eq!(
            endpoints().ban(&id),
            "http://localhost:3000/api/v1/categories/7/ban"
        );
        assert_eq!(
            endpoints().unban(&id),
            "http://localhost:3000/api/v1/categories/7/unban"
        );
    }

    #[test]
    fn test_id_is_percent_encoded() {
        let id = CategoryId::new("a/b c");
        assert_eq!(
            endpoints().item(&id),
            "http://localhost:3000/api/v1/categories/a%2Fb%20c"
        );
    }

    #[test]
    fn test_relative_base() {
        let endpoints = CategoryEndpoints::new("", "api/v1/categories");
        assert_eq!(endpoints.list(1), "/api/v1/categories?page=1");
    }
}
