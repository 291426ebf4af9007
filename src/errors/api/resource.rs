use crate::errors::internal::{InternalError, ResourceError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error response for resource endpoints
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,
}

/// Error responses shared by the item and task endpoints
#[derive(ApiResponse, Debug)]
pub enum ApiError {
    /// Referenced resource does not exist
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Request payload or path parameter failed validation
    #[oai(status = 422)]
    ValidationFailed(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ApiError {
    /// Create a NotFound error for the named resource ("Item", "Task")
    pub fn not_found(resource: impl fmt::Display) -> Self {
        ApiError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message: format!("{} not found", resource),
            status_code: 404,
        }))
    }

    /// Create a ValidationFailed error carrying the parser's detail
    pub fn validation_failed(detail: impl Into<String>) -> Self {
        ApiError::ValidationFailed(Json(ErrorResponse {
            error: "validation_error".to_string(),
            message: detail.into(),
            status_code: 422,
        }))
    }

    /// Convert InternalError to ApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Infrastructure details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match &err {
            InternalError::Resource(ResourceError::NotFound { resource, id }) => {
                tracing::debug!("{} {} not found", resource, id);
                Self::not_found(resource)
            }
            InternalError::Database(_) => {
                tracing::error!("Store failure: {}", err);
                Self::internal_server_error()
            }
            InternalError::Parse { value_type, .. } => {
                tracing::error!("Parse error for {}: {}", value_type, err);
                Self::internal_server_error()
            }
        }
    }

    /// Generic 500 without internal details
    fn internal_server_error() -> Self {
        ApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An internal error occurred".to_string(),
            status_code: 500,
        }))
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.body().message.clone()
    }

    /// HTTP status code carried by the variant
    pub fn status_code(&self) -> u16 {
        self.body().status_code
    }

    fn body(&self) -> &ErrorResponse {
        match self {
            ApiError::NotFound(json) => &json.0,
            ApiError::ValidationFailed(json) => &json.0,
            ApiError::InternalError(json) => &json.0,
        }
    }
}

impl From<InternalError> for ApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
