// Stores layer - Data access for the item and task tables
pub mod item_store;
pub mod seed;
pub mod task_store;

pub use item_store::ItemStore;
pub use task_store::TaskStore;

use sea_orm::{ConnectionTrait, EntityTrait, PrimaryKeyTrait};

use crate::errors::InternalError;
use crate::errors::internal::ResourceError;
use crate::types::internal::ResourceKind;

/// Fetch a row by primary key, turning a miss into `ResourceError::NotFound`
pub(crate) async fn find_existing<E>(
    conn: &impl ConnectionTrait,
    resource: ResourceKind,
    id: i64,
    operation: &str,
) -> Result<E::Model, InternalError>
where
    E: EntityTrait,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i64>,
{
    E::find_by_id(id)
        .one(conn)
        .await
        .map_err(|e| InternalError::database(operation, e))?
        .ok_or_else(|| ResourceError::not_found(resource, id).into())
}

#[cfg(test)]
pub(crate) mod test_support {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{Database, DatabaseConnection};

    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to create test database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }
}
