use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, QueryOrder, Set};

use crate::errors::InternalError;
use crate::errors::internal::ResourceError;
use crate::stores::find_existing;
use crate::types::db::task::{self, Entity as Tasks};
use crate::types::dto::tasks::{CreateTaskRequest, UpdateTaskRequest};
use crate::types::internal::ResourceKind;
use crate::types::internal::timestamp::now_timestamp;

/// TaskStore implements the CRUD contract for the `tasks` table
///
/// Like `ItemStore`, every method runs on the caller's session; timestamps are
/// stamped here rather than by the handlers.
#[derive(Debug, Default)]
pub struct TaskStore {}

impl TaskStore {
    pub fn new() -> Self {
        Self {}
    }

    /// List all tasks in insertion order
    pub async fn list(&self, conn: &impl ConnectionTrait) -> Result<Vec<task::Model>, InternalError> {
        Tasks::find()
            .order_by_asc(task::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_tasks", e))
    }

    /// Insert a new task with `completed = false`, `created_at = now` and no `updated_at`
    pub async fn create(
        &self,
        conn: &impl ConnectionTrait,
        request: CreateTaskRequest,
    ) -> Result<task::Model, InternalError> {
        let model = request
            .into_active_model(now_timestamp())
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("create_task", e))?;

        tracing::debug!(task_id = model.id, "Task created");
        Ok(model)
    }

    /// Get a task by id
    ///
    /// # Returns
    /// * `Ok(Model)` - The task
    /// * `Err(InternalError::Resource)` - No task with that id
    /// * `Err(InternalError::Database)` - Store failure
    pub async fn get(&self, conn: &impl ConnectionTrait, id: i64) -> Result<task::Model, InternalError> {
        find_existing::<Tasks>(conn, ResourceKind::Task, id, "get_task").await
    }

    /// Apply a partial update and stamp `updated_at`
    ///
    /// Every successful update re-persists the row, so `updated_at` moves even
    /// when the payload carries no fields.
    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        id: i64,
        request: UpdateTaskRequest,
    ) -> Result<task::Model, InternalError> {
        let existing = find_existing::<Tasks>(conn, ResourceKind::Task, id, "get_task_for_update").await?;

        let mut active_model: task::ActiveModel = existing.into();
        request.apply_to(&mut active_model);
        active_model.updated_at = Set(Some(now_timestamp()));

        let updated = active_model
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_task", e))?;

        tracing::debug!(task_id = id, "Task updated");
        Ok(updated)
    }

    /// Delete a task permanently; a second delete of the same id is NotFound
    pub async fn delete(&self, conn: &impl ConnectionTrait, id: i64) -> Result<(), InternalError> {
        let result = Tasks::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_task", e))?;

        if result.rows_affected == 0 {
            return Err(ResourceError::not_found(ResourceKind::Task, id).into());
        }

        tracing::debug!(task_id = id, "Task deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::test_support::setup_test_db;

    fn test_task() -> CreateTaskRequest {
        CreateTaskRequest {
            title: "Test Task".to_string(),
            description: Some("A test task".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let db = setup_test_db().await;
        let store = TaskStore::new();
        let before = now_timestamp();

        let created = store.create(&db, test_task()).await.unwrap();

        assert!(created.id > 0);
        assert_eq!(created.title, "Test Task");
        assert_eq!(created.description.as_deref(), Some("A test task"));
        assert!(!created.completed);
        assert!(created.created_at >= before);
        assert_eq!(created.updated_at, None);
        assert_eq!(store.get(&db, created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_without_description() {
        let db = setup_test_db().await;
        let store = TaskStore::new();

        let created = store
            .create(
                &db,
                CreateTaskRequest {
                    title: "Bare".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(created.description, None);
    }

    #[tokio::test]
    async fn test_update_marks_completed_and_stamps_updated_at() {
        let db = setup_test_db().await;
        let store = TaskStore::new();
        let created = store.create(&db, test_task()).await.unwrap();

        let updated = store
            .update(
                &db,
                created.id,
                UpdateTaskRequest {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, created.title);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_list_in_insertion_order() {
        let db = setup_test_db().await;
        let store = TaskStore::new();
        assert!(store.list(&db).await.unwrap().is_empty());

        for title in ["Task 1", "Task 2"] {
            store
                .create(
                    &db,
                    CreateTaskRequest {
                        title: title.to_string(),
                        description: None,
                    },
                )
                .await
                .unwrap();
        }

        let titles: Vec<String> = store.list(&db).await.unwrap().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Task 1".to_string(), "Task 2".to_string()]);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let db = setup_test_db().await;
        let store = TaskStore::new();

        assert!(store.get(&db, 999).await.unwrap_err().is_not_found());
        assert!(store
            .update(&db, 999, UpdateTaskRequest::default())
            .await
            .unwrap_err()
            .is_not_found());
        assert!(store.delete(&db, 999).await.unwrap_err().is_not_found());
        assert!(store.get(&db, 3_000_000_000).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let db = setup_test_db().await;
        let store = TaskStore::new();
        let created = store.create(&db, test_task()).await.unwrap();

        store.delete(&db, created.id).await.unwrap();
        assert!(store.get(&db, created.id).await.unwrap_err().is_not_found());
    }
}
