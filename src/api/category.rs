//! Category resource endpoints.

use async_trait::async_trait;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::api::types::{Category, CategoryId, ItemBody, ListBody, NewCategory};

const BASE_PATH: &str = "/category";

/// Operations the category screen needs from the service.
///
/// Implemented over HTTP by [`HttpCategoryApi`]; tests substitute stubs.
#[async_trait]
pub trait CategoryApi: Send + Sync {
    /// `GET /category/`
    async fn list(&self) -> Result<Vec<Category>, ApiError>;

    /// `POST /category/`, returning the stored category with its id.
    async fn create(&self, category: &NewCategory) -> Result<Category, ApiError>;

    /// `PUT /category/{id}` with the full category.
    async fn update(&self, id: &CategoryId, category: &Category) -> Result<Category, ApiError>;

    /// `DELETE /category/{id}`
    async fn delete(&self, id: &CategoryId) -> Result<(), ApiError>;
}

pub struct HttpCategoryApi {
    client: ApiClient,
}

impl HttpCategoryApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

fn item_path(id: &CategoryId) -> String {
    format!("{}/{}", BASE_PATH, id)
}

#[async_trait]
impl CategoryApi for HttpCategoryApi {
    async fn list(&self) -> Result<Vec<Category>, ApiError> {
        let body: ListBody = self.client.get(&format!("{}/", BASE_PATH)).await?;
        Ok(body.into_categories())
    }

    async fn create(&self, category: &NewCategory) -> Result<Category, ApiError> {
        let body: ItemBody = self
            .client
            .post(&format!("{}/", BASE_PATH), category)
            .await?;
        let created = body.into_category();
        tracing::info!(id = ?created.id, name = %created.name, "Category created");
        Ok(created)
    }

    async fn update(&self, id: &CategoryId, category: &Category) -> Result<Category, ApiError> {
        let body: ItemBody = self.client.put(&item_path(id), category).await?;
        tracing::info!(id = %id, "Category updated");
        Ok(body.into_category())
    }

    async fn delete(&self, id: &CategoryId) -> Result<(), ApiError> {
        self.client.delete(&item_path(id)).await?;
        tracing::info!(id = %id, "Category deleted");
        Ok(())
    }
}
