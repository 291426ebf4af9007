use poem_openapi::{ApiResponse, Object, payload::Json, types::MaybeUndefined};
use sea_orm::{ActiveValue::NotSet, Set};

use crate::types::db::item;

/// Request model for creating a new item
#[derive(Object, Debug, Clone)]
pub struct CreateItemRequest {
    /// Name of the item
    pub name: String,

    /// Description of the item (required here, nullable once stored)
    pub description: String,

    /// Price of the item
    pub price: f64,
}

impl CreateItemRequest {
    pub fn into_active_model(self) -> item::ActiveModel {
        item::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            description: Set(Some(self.description)),
            price: Set(self.price),
        }
    }
}

/// Request model for a partial item update
///
/// Absent fields are left untouched. `description: null` clears the description;
/// `null` for `name` or `price` is treated as absent since those columns are not nullable.
#[derive(Object, Debug, Clone, Default)]
pub struct UpdateItemRequest {
    /// New name
    pub name: Option<String>,

    /// New description, or null to clear it
    pub description: MaybeUndefined<String>,

    /// New price
    pub price: Option<f64>,
}

impl UpdateItemRequest {
    /// Merge present fields into the active model
    pub fn apply_to(self, model: &mut item::ActiveModel) {
        if let Some(name) = self.name {
            model.name = Set(name);
        }
        match self.description {
            MaybeUndefined::Value(description) => model.description = Set(Some(description)),
            MaybeUndefined::Null => model.description = Set(None),
            MaybeUndefined::Undefined => {}
        }
        if let Some(price) = self.price {
            model.price = Set(price);
        }
    }
}

/// Response model representing an item
#[derive(Object, Debug, Clone, PartialEq)]
pub struct Item {
    /// Unique identifier for the item
    pub id: i64,

    /// Name of the item
    pub name: String,

    /// Description of the item
    pub description: Option<String>,

    /// Price of the item
    pub price: f64,
}

impl From<item::Model> for Item {
    fn from(model: item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
        }
    }
}

/// API response for item creation
#[derive(ApiResponse)]
pub enum CreateItemApiResponse {
    /// Item created
    #[oai(status = 201)]
    Created(Json<Item>),
}

/// API response for item deletion
#[derive(ApiResponse)]
pub enum DeleteItemApiResponse {
    /// Item deleted
    #[oai(status = 204)]
    NoContent,
}
