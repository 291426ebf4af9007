use std::sync::Arc;

use poem_openapi::{OpenApi, Tags, param::Path, payload::Json};

use crate::app_data::AppData;
use crate::config::DatabaseConnections;
use crate::errors::ApiError;
use crate::types::dto::tasks::{
    CreateTaskApiResponse, CreateTaskRequest, DeleteTaskApiResponse, Task, UpdateTaskRequest,
};

/// Task endpoints
///
/// Each handler opens one scoped session, runs a single store operation in it and
/// commits before mapping the row to its read shape. Any error before the commit
/// drops the session, which rolls it back.
pub struct TasksApi {
    app_data: Arc<AppData>,
}

impl TasksApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self { app_data }
    }
}

/// API tags for task endpoints
#[derive(Tags)]
enum ApiTags {
    /// Task management endpoints
    Tasks,
}

#[OpenApi]
impl TasksApi {
    /// List all tasks
    #[oai(path = "/tasks", method = "get", tag = "ApiTags::Tasks")]
    async fn list_tasks(&self) -> Result<Json<Vec<Task>>, ApiError> {
        let txn = self.app_data.connections.begin_session().await?;
        let tasks = self.app_data.task_store.list(&txn).await?;
        DatabaseConnections::commit_session(txn).await?;

        let tasks = tasks
            .into_iter()
            .map(Task::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Json(tasks))
    }

    /// Create a new task
    #[oai(path = "/tasks", method = "post", tag = "ApiTags::Tasks")]
    async fn create_task(&self, body: Json<CreateTaskRequest>) -> Result<CreateTaskApiResponse, ApiError> {
        let txn = self.app_data.connections.begin_session().await?;
        let task = self.app_data.task_store.create(&txn, body.0).await?;
        DatabaseConnections::commit_session(txn).await?;

        Ok(CreateTaskApiResponse::Created(Json(Task::try_from(task)?)))
    }

    /// Get a specific task by ID
    #[oai(path = "/tasks/:id", method = "get", tag = "ApiTags::Tasks")]
    async fn get_task(&self, id: Path<i64>) -> Result<Json<Task>, ApiError> {
        let txn = self.app_data.connections.begin_session().await?;
        let task = self.app_data.task_store.get(&txn, id.0).await?;
        DatabaseConnections::commit_session(txn).await?;

        Ok(Json(Task::try_from(task)?))
    }

    /// Update a task
    ///
    /// Only the fields present in the body are changed; `updated_at` is refreshed
    #[oai(path = "/tasks/:id", method = "patch", tag = "ApiTags::Tasks")]
    async fn update_task(
        &self,
        id: Path<i64>,
        body: Json<UpdateTaskRequest>,
    ) -> Result<Json<Task>, ApiError> {
        let txn = self.app_data.connections.begin_session().await?;
        let task = self.app_data.task_store.update(&txn, id.0, body.0).await?;
        DatabaseConnections::commit_session(txn).await?;

        Ok(Json(Task::try_from(task)?))
    }

    /// Delete a task
    #[oai(path = "/tasks/:id", method = "delete", tag = "ApiTags::Tasks")]
    async fn delete_task(&self, id: Path<i64>) -> Result<DeleteTaskApiResponse, ApiError> {
        let txn = self.app_data.connections.begin_session().await?;
        self.app_data.task_store.delete(&txn, id.0).await?;
        DatabaseConnections::commit_session(txn).await?;

        Ok(DeleteTaskApiResponse::NoContent)
    }
}
