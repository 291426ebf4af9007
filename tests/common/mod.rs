// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use hackathon_api::AppData;
use hackathon_api::api::build_routes;
use hackathon_api::config::{AppSettings, MockEnvironment};
use poem::Endpoint;
use poem::test::{TestClient, TestResponse};
use serde_json::Value;

/// Settings pointing at a fresh in-memory database, seeding disabled
pub fn test_settings(extra: &[(&str, &str)]) -> AppSettings {
    let env = MockEnvironment::empty()
        .with_var("DATABASE_URL", "sqlite::memory:")
        .with_var("SEED_SAMPLE_DATA", "false")
        .with_vars(extra);

    AppSettings::from_env_provider(Arc::new(env)).expect("Failed to load test settings")
}

/// Builds the full router over a migrated in-memory database
pub async fn setup_test_app_with(settings: AppSettings) -> TestClient<impl Endpoint> {
    let app_data = AppData::init(&settings)
        .await
        .expect("Failed to initialize test AppData");

    TestClient::new(build_routes(Arc::new(app_data), &settings))
}

pub async fn setup_test_app() -> TestClient<impl Endpoint> {
    setup_test_app_with(test_settings(&[])).await
}

/// Reads the response body as JSON
pub async fn json_body(resp: TestResponse) -> Value {
    resp.0
        .into_body()
        .into_json::<Value>()
        .await
        .expect("Response body is not JSON")
}
