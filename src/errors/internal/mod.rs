use thiserror::Error;

pub mod database;
pub mod resource;

pub use database::DatabaseError;
pub use resource::ResourceError;

/// Internal error type for store and session operations
///
/// Infrastructure errors (database, parse) sit next to the resource domain errors.
/// Not exposed via API - endpoints must convert through `ApiError::from_internal_error`.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    #[error(transparent)]
    Resource(#[from] ResourceError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, InternalError::Resource(ResourceError::NotFound { .. }))
    }
}
