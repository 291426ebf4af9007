use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder};

use crate::errors::InternalError;
use crate::errors::internal::ResourceError;
use crate::stores::find_existing;
use crate::types::db::item::{self, Entity as Items};
use crate::types::dto::items::{CreateItemRequest, UpdateItemRequest};
use crate::types::internal::ResourceKind;

/// ItemStore implements the CRUD contract for the `items` table
///
/// Every method takes the caller's connection or session so the whole request
/// runs inside one scoped session.
#[derive(Debug, Default)]
pub struct ItemStore {}

impl ItemStore {
    pub fn new() -> Self {
        Self {}
    }

    /// List all items in insertion order
    pub async fn list(&self, conn: &impl ConnectionTrait) -> Result<Vec<item::Model>, InternalError> {
        Items::find()
            .order_by_asc(item::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_items", e))
    }

    /// Insert a new item and return the stored row with its generated id
    pub async fn create(
        &self,
        conn: &impl ConnectionTrait,
        request: CreateItemRequest,
    ) -> Result<item::Model, InternalError> {
        let model = request
            .into_active_model()
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("create_item", e))?;

        tracing::debug!(item_id = model.id, "Item created");
        Ok(model)
    }

    /// Get an item by id
    ///
    /// # Returns
    /// * `Ok(Model)` - The item
    /// * `Err(InternalError::Resource)` - No item with that id
    /// * `Err(InternalError::Database)` - Store failure
    pub async fn get(&self, conn: &impl ConnectionTrait, id: i64) -> Result<item::Model, InternalError> {
        find_existing::<Items>(conn, ResourceKind::Item, id, "get_item").await
    }

    /// Apply a partial update to an existing item
    ///
    /// Only the fields present in `request` are written. An update carrying no
    /// fields returns the stored row without issuing a write.
    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        id: i64,
        request: UpdateItemRequest,
    ) -> Result<item::Model, InternalError> {
        let existing = find_existing::<Items>(conn, ResourceKind::Item, id, "get_item_for_update").await?;

        let mut active_model: item::ActiveModel = existing.clone().into();
        request.apply_to(&mut active_model);

        if !active_model.is_changed() {
            return Ok(existing);
        }

        let updated = active_model
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_item", e))?;

        tracing::debug!(item_id = id, "Item updated");
        Ok(updated)
    }

    /// Delete an item permanently
    pub async fn delete(&self, conn: &impl ConnectionTrait, id: i64) -> Result<(), InternalError> {
        let result = Items::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        if result.rows_affected == 0 {
            return Err(ResourceError::not_found(ResourceKind::Item, id).into());
        }

        tracing::debug!(item_id = id, "Item deleted");
        Ok(())
    }
}
