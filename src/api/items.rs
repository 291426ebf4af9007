use std::sync::Arc;

use poem_openapi::{OpenApi, Tags, param::Path, payload::Json};

use crate::app_data::AppData;
use crate::config::DatabaseConnections;
use crate::errors::ApiError;
use crate::types::dto::items::{
    CreateItemApiResponse, CreateItemRequest, DeleteItemApiResponse, Item, UpdateItemRequest,
};

/// Item endpoints
///
/// Each handler opens one scoped session, runs a single store operation in it and
/// commits. Any error returns before the commit and the dropped session rolls back.
pub struct ItemsApi {
    app_data: Arc<AppData>,
}

impl ItemsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// List all items
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(&self) -> Result<Json<Vec<Item>>, ApiError> {
        let txn = self.app_data.connections.begin_session().await?;
        let items = self.app_data.item_store.list(&txn).await?;
        DatabaseConnections::commit_session(txn).await?;

        Ok(Json(items.into_iter().map(Item::from).collect()))
    }

    /// Create a new item
    ///
    /// Returns the stored item with its generated ID
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, body: Json<CreateItemRequest>) -> Result<CreateItemApiResponse, ApiError> {
        let txn = self.app_data.connections.begin_session().await?;
        let item = self.app_data.item_store.create(&txn, body.0).await?;
        DatabaseConnections::commit_session(txn).await?;

        Ok(CreateItemApiResponse::Created(Json(item.into())))
    }

    /// Get a specific item by ID
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<i64>) -> Result<Json<Item>, ApiError> {
        let txn = self.app_data.connections.begin_session().await?;
        let item = self.app_data.item_store.get(&txn, id.0).await?;
        DatabaseConnections::commit_session(txn).await?;

        Ok(Json(item.into()))
    }

    /// Update an item
    ///
    /// Only the fields present in the body are changed
    #[oai(path = "/items/:id", method = "patch", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        id: Path<i64>,
        body: Json<UpdateItemRequest>,
    ) -> Result<Json<Item>, ApiError> {
        let txn = self.app_data.connections.begin_session().await?;
        let item = self.app_data.item_store.update(&txn, id.0, body.0).await?;
        DatabaseConnections::commit_session(txn).await?;

        Ok(Json(item.into()))
    }

    /// Delete an item
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, id: Path<i64>) -> Result<DeleteItemApiResponse, ApiError> {
        let txn = self.app_data.connections.begin_session().await?;
        self.app_data.item_store.delete(&txn, id.0).await?;
        DatabaseConnections::commit_session(txn).await?;

        Ok(DeleteItemApiResponse::NoContent)
    }
}
