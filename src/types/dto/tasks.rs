use poem_openapi::{ApiResponse, Object, payload::Json, types::MaybeUndefined};
use sea_orm::{ActiveValue::NotSet, Set};

use crate::errors::InternalError;
use crate::types::db::task;
use crate::types::internal::timestamp::to_rfc3339;

/// Request model for creating a new task
#[derive(Object, Debug, Clone)]
pub struct CreateTaskRequest {
    /// Title of the task
    pub title: String,

    /// Optional description of the task
    pub description: Option<String>,
}

impl CreateTaskRequest {
    /// Build the row to insert; `completed` starts false and `updated_at` empty
    pub fn into_active_model(self, created_at: i64) -> task::ActiveModel {
        task::ActiveModel {
            id: NotSet,
            title: Set(self.title),
            description: Set(self.description),
            completed: Set(false),
            created_at: Set(created_at),
            updated_at: Set(None),
        }
    }
}

/// Request model for a partial task update
#[derive(Object, Debug, Clone, Default)]
pub struct UpdateTaskRequest {
    /// New title
    pub title: Option<String>,

    /// New description, or null to clear it
    pub description: MaybeUndefined<String>,

    /// New completion state
    pub completed: Option<bool>,
}

impl UpdateTaskRequest {
    pub fn apply_to(self, model: &mut task::ActiveModel) {
        if let Some(title) = self.title {
            model.title = Set(title);
        }
        match self.description {
            MaybeUndefined::Value(description) => model.description = Set(Some(description)),
            MaybeUndefined::Null => model.description = Set(None),
            MaybeUndefined::Undefined => {}
        }
        if let Some(completed) = self.completed {
            model.completed = Set(completed);
        }
    }
}

/// Response model representing a task
#[derive(Object, Debug, Clone, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: i64,

    /// Title of the task
    pub title: String,

    /// Optional description of the task
    pub description: Option<String>,

    /// Whether the task is done
    pub completed: bool,

    /// Creation time (ISO 8601 format)
    pub created_at: String,

    /// Time of the last update (ISO 8601 format), null if never updated
    pub updated_at: Option<String>,
}

impl TryFrom<task::Model> for Task {
    type Error = InternalError;

    fn try_from(model: task::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            title: model.title,
            description: model.description,
            completed: model.completed,
            created_at: to_rfc3339(model.created_at)?,
            updated_at: model.updated_at.map(to_rfc3339).transpose()?,
        })
    }
}

/// API response for task creation
#[derive(ApiResponse)]
pub enum CreateTaskApiResponse {
    /// Task created
    #[oai(status = 201)]
    Created(Json<Task>),
}

/// API response for task deletion
#[derive(ApiResponse)]
pub enum DeleteTaskApiResponse {
    /// Task deleted
    #[oai(status = 204)]
    NoContent,
}
