mod common;

use chrono::DateTime;
use common::{json_body, setup_test_app};
use poem::http::StatusCode;
use serde_json::{Value, json};

async fn create_task<E: poem::Endpoint>(cli: &poem::test::TestClient<E>, payload: Value) -> Value {
    let resp = cli.post("/tasks").body_json(&payload).send().await;
    resp.assert_status(StatusCode::CREATED);
    json_body(resp).await
}

#[tokio::test]
async fn test_get_tasks_empty() {
    let cli = setup_test_app().await;

    let resp = cli.get("/tasks").send().await;
    resp.assert_status_is_ok();
    assert_eq!(json_body(resp).await, json!([]));
}

#[tokio::test]
async fn test_create_task_applies_defaults() {
    let cli = setup_test_app().await;

    let task = create_task(&cli, json!({"title": "Test Task", "description": "A test task"})).await;

    assert!(task["id"].as_i64().is_some());
    assert_eq!(task["title"], "Test Task");
    assert_eq!(task["description"], "A test task");
    assert_eq!(task["completed"], false);
    let created_at = task["created_at"].as_str().expect("created_at is populated");
    assert!(DateTime::parse_from_rfc3339(created_at).is_ok());
    // Present and null, not omitted
    assert!(task.as_object().unwrap().contains_key("updated_at"));
    assert!(task["updated_at"].is_null());

    let id = task["id"].as_i64().unwrap();
    let fetched = json_body(cli.get(format!("/tasks/{}", id)).send().await).await;
    assert_eq!(fetched, task);
}

#[tokio::test]
async fn test_create_task_without_description() {
    let cli = setup_test_app().await;

    let task = create_task(&cli, json!({"title": "Bare"})).await;
    assert!(task["description"].is_null());
    assert!(task.as_object().unwrap().contains_key("description"));
}

#[tokio::test]
async fn test_create_task_missing_title() {
    let cli = setup_test_app().await;

    let resp = cli
        .post("/tasks")
        .body_json(&json!({"description": "No title"}))
        .send()
        .await;
    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json_body(cli.get("/tasks").send().await).await, json!([]));
}

#[tokio::test]
async fn test_create_task_malformed_json() {
    let cli = setup_test_app().await;

    let resp = cli
        .post("/tasks")
        .content_type("application/json")
        .body("{\"title\": ")
        .send()
        .await;
    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_get_tasks_multiple() {
    let cli = setup_test_app().await;
    create_task(&cli, json!({"title": "Task 1", "description": "First task"})).await;
    create_task(&cli, json!({"title": "Task 2", "description": "Second task"})).await;

    let tasks = json_body(cli.get("/tasks").send().await).await;
    let tasks = tasks.as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["title"], "Task 1");
    assert_eq!(tasks[1]["title"], "Task 2");
}

#[tokio::test]
async fn test_task_response_fields() {
    let cli = setup_test_app().await;
    create_task(&cli, json!({"title": "Field Test", "description": "Testing fields"})).await;

    let tasks = json_body(cli.get("/tasks").send().await).await;
    let task = tasks[0].as_object().unwrap();
    for field in ["id", "title", "description", "completed", "created_at", "updated_at"] {
        assert!(task.contains_key(field), "missing field {}", field);
    }
}

#[tokio::test]
async fn test_update_task_partial() {
    let cli = setup_test_app().await;
    let task = create_task(&cli, json!({"title": "Write docs", "description": "README"})).await;
    let id = task["id"].as_i64().unwrap();

    let resp = cli
        .patch(format!("/tasks/{}", id))
        .body_json(&json!({"completed": true}))
        .send()
        .await;
    resp.assert_status_is_ok();

    let updated = json_body(resp).await;
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["title"], "Write docs");
    assert_eq!(updated["description"], "README");
    assert_eq!(updated["created_at"], task["created_at"]);
    assert!(updated["updated_at"].is_string());
}

#[tokio::test]
async fn test_update_task_clears_description() {
    let cli = setup_test_app().await;
    let task = create_task(&cli, json!({"title": "t", "description": "d"})).await;
    let id = task["id"].as_i64().unwrap();

    let updated = json_body(
        cli.patch(format!("/tasks/{}", id))
            .body_json(&json!({"description": null}))
            .send()
            .await,
    )
    .await;
    assert!(updated["description"].is_null());
    assert_eq!(updated["title"], "t");
}

#[tokio::test]
async fn test_update_task_not_found() {
    let cli = setup_test_app().await;

    let resp = cli
        .patch("/tasks/999")
        .body_json(&json!({"completed": true}))
        .send()
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["message"], "Task not found");
}

#[tokio::test]
async fn test_get_task_not_found() {
    let cli = setup_test_app().await;

    cli.get("/tasks/999")
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_task() {
    let cli = setup_test_app().await;
    let task = create_task(&cli, json!({"title": "To Delete", "description": "Will be deleted"})).await;
    let id = task["id"].as_i64().unwrap();

    cli.delete(format!("/tasks/{}", id))
        .send()
        .await
        .assert_status(StatusCode::NO_CONTENT);

    cli.get(format!("/tasks/{}", id))
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);

    cli.delete(format!("/tasks/{}", id))
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_task_not_found() {
    let cli = setup_test_app().await;

    cli.delete("/tasks/999")
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_task_id_beyond_32_bits_is_not_found() {
    let cli = setup_test_app().await;

    cli.get("/tasks/3000000000")
        .send()
        .await
        .assert_status(StatusCode::NOT_FOUND);

    let resp = cli.delete("/tasks/3000000000").send().await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["message"], "Task not found");
}

#[tokio::test]
async fn test_non_numeric_task_id_is_validation_error() {
    let cli = setup_test_app().await;

    cli.get("/tasks/abc")
        .send()
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    cli.delete("/tasks/abc")
        .send()
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_task_without_content_type() {
    let cli = setup_test_app().await;
    let task = create_task(&cli, json!({"title": "Keep"})).await;
    let id = task["id"].as_i64().unwrap();

    cli.patch(format!("/tasks/{}", id))
        .body(r#"{"title": "Changed"}"#)
        .send()
        .await
        .assert_status(StatusCode::UNPROCESSABLE_ENTITY);

    let fetched = json_body(cli.get(format!("/tasks/{}", id)).send().await).await;
    assert_eq!(fetched["title"], "Keep");
}
