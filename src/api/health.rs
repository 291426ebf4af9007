use poem_openapi::{OpenApi, Tags, payload::Json};
use crate::types::dto::common::{HealthResponse, RootResponse};
use chrono::Utc;

/// Health check and service info API
pub struct HealthApi;

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

#[OpenApi]
impl HealthApi {
    /// Service info
    ///
    /// Confirms the API is running and points at the docs
    #[oai(path = "/", method = "get", tag = "ApiTags::Health")]
    async fn root(&self) -> Json<RootResponse> {
        Json(RootResponse {
            message: "Hackathon API is running!".to_string(),
            docs: "/docs".to_string(),
        })
    }

    /// Health check endpoint
    ///
    /// Returns the current status of the API service
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
