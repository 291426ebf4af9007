use poem::middleware::Cors;
use poem_openapi::error::{ContentTypeError, ParsePathError, ParseRequestPayloadError};

use crate::config::AppSettings;
use crate::errors::ApiError;

/// Turn a body that failed to parse into a 422 before any handler runs
pub async fn payload_validation_error(err: ParseRequestPayloadError) -> ApiError {
    tracing::debug!("Rejected request payload: {}", err);
    ApiError::validation_failed(err.to_string())
}

/// Turn a path id that failed to parse (e.g. `/items/abc`) into a 422
pub async fn path_validation_error(err: ParsePathError) -> ApiError {
    tracing::debug!("Rejected path parameter: {}", err);
    ApiError::validation_failed(err.to_string())
}

/// A body sent without `Content-Type: application/json` is a validation failure, not a 415
pub async fn content_type_validation_error(err: ContentTypeError) -> ApiError {
    tracing::debug!("Rejected request content type: {}", err);
    ApiError::validation_failed(err.to_string())
}

/// CORS policy from settings: credentials allowed, any method and header
pub fn cors_middleware(settings: &AppSettings) -> Cors {
    let cors = Cors::new().allow_credentials(true);

    if settings.allows_any_origin() {
        return cors;
    }

    settings
        .cors_allowed_origins()
        .iter()
        .fold(cors, |cors, origin| cors.allow_origin(origin.as_str()))
}
