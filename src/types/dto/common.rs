use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Response model for the root endpoint
#[derive(Object, Debug)]
pub struct RootResponse {
    /// Greeting confirming the service is up
    pub message: String,

    /// Path of the interactive API documentation
    pub docs: String,
}
