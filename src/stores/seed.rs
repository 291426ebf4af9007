use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, Set};

use crate::errors::InternalError;
use crate::types::db::item::{self, Entity as Items};

const SAMPLE_ITEMS: [(&str, &str, f64); 3] = [
    ("Widget", "A useful widget for your desk", 9.99),
    ("Gadget", "A fancy gadget with buttons", 19.99),
    ("Gizmo", "An amazing gizmo that does things", 29.99),
];

/// Insert the sample items when the `items` table is empty
///
/// Returns the number of rows inserted (0 when the table already had data).
pub async fn seed_sample_items(conn: &impl ConnectionTrait) -> Result<u64, InternalError> {
    let existing = Items::find()
        .count(conn)
        .await
        .map_err(|e| InternalError::database("count_items_for_seed", e))?;

    if existing > 0 {
        tracing::debug!(existing, "Items table not empty, skipping seed");
        return Ok(0);
    }

    let rows = SAMPLE_ITEMS.iter().map(|(name, description, price)| item::ActiveModel {
        name: Set(name.to_string()),
        description: Set(Some(description.to_string())),
        price: Set(*price),
        ..Default::default()
    });

    Items::insert_many(rows)
        .exec(conn)
        .await
        .map_err(|e| InternalError::database("seed_sample_items", e))?;

    tracing::info!("Database seeded with {} sample items", SAMPLE_ITEMS.len());
    Ok(SAMPLE_ITEMS.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::ItemStore;
    use crate::stores::test_support::setup_test_db;
    use crate::types::dto::items::CreateItemRequest;

    #[tokio::test]
    async fn test_seed_fills_empty_table() {
        let db = setup_test_db().await;

        assert_eq!(seed_sample_items(&db).await.unwrap(), 3);

        let items = ItemStore::new().list(&db).await.unwrap();
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Widget", "Gadget", "Gizmo"]);
        assert_eq!(items[1].price, 19.99);
    }

    #[tokio::test]
    async fn test_seed_is_skipped_when_data_exists() {
        let db = setup_test_db().await;
        ItemStore::new()
            .create(
                &db,
                CreateItemRequest {
                    name: "Mine".to_string(),
                    description: "Already here".to_string(),
                    price: 1.0,
                },
            )
            .await
            .unwrap();

        assert_eq!(seed_sample_items(&db).await.unwrap(), 0);
        assert_eq!(ItemStore::new().list(&db).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_seed_twice_inserts_once() {
        let db = setup_test_db().await;

        seed_sample_items(&db).await.unwrap();
        assert_eq!(seed_sample_items(&db).await.unwrap(), 0);
        assert_eq!(ItemStore::new().list(&db).await.unwrap().len(), 3);
    }
}
