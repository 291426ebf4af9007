// API layer - HTTP endpoints
pub mod health;
pub mod helpers;
pub mod items;
pub mod tasks;

use std::sync::Arc;

pub use health::HealthApi;
pub use items::ItemsApi;
pub use tasks::TasksApi;

use poem::middleware::Tracing;
use poem::{Endpoint, EndpointExt, IntoEndpoint, Route};
use poem_openapi::OpenApiService;

use crate::app_data::AppData;
use crate::config::AppSettings;

/// Compose the full HTTP surface
///
/// ```text
/// /              root info      (HealthApi)
/// /health        liveness       (HealthApi)
/// /items[/:id]   ItemsApi
/// /tasks[/:id]   TasksApi
/// /docs          Swagger UI
/// /openapi.json  OpenAPI document
/// ```
pub fn build_routes(app_data: Arc<AppData>, settings: &AppSettings) -> impl Endpoint + use<> {
    let api_service = OpenApiService::new(
        (
            HealthApi,
            ItemsApi::new(app_data.clone()),
            TasksApi::new(app_data),
        ),
        "Hackathon API",
        env!("CARGO_PKG_VERSION"),
    )
    .description("Backend API for items and tasks")
    .server(format!("http://localhost:{}", settings.server_port()));

    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    let api = api_service
        .into_endpoint()
        .catch_error(helpers::payload_validation_error)
        .catch_error(helpers::path_validation_error)
        .catch_error(helpers::content_type_validation_error);

    Route::new()
        .nest("/docs", ui)
        .at("/openapi.json", spec)
        .nest("/", api)
        .with(helpers::cors_middleware(settings))
        .with(Tracing)
}
