//! HTTP-level integration tests for the project endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_project, delete, get, post_json, post_raw_json, project_payload, put_json,
};
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/projects", project_payload(1001, "Plaza")).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["pid"], 1001);
    assert_eq!(json["projectName"], "Plaza");
    assert_eq!(json["type"], "NEW");
    assert_eq!(json["startDate"], "2025-01-15");
    assert_eq!(json["completionDate"], serde_json::Value::Null);
    assert_eq!(json["isDraft"], false);
    assert!(json["createdAt"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_coerces_string_pid_and_timestamp_dates(pool: PgPool) {
    let mut payload = project_payload(0, "Coerced");
    payload["pid"] = json!("2002");
    payload["startDate"] = json!("2025-02-01T00:00:00.000Z");

    let json = create_project(&pool, payload).await;
    assert_eq!(json["pid"], 2002);
    assert_eq!(json["startDate"], "2025-02-01");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_without_is_draft_defaults_to_published(pool: PgPool) {
    let mut payload = project_payload(1001, "Default");
    payload.as_object_mut().unwrap().remove("isDraft");

    let json = create_project(&pool, payload).await;
    assert_eq!(json["isDraft"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_duplicate_pid_returns_400(pool: PgPool) {
    create_project(&pool, project_payload(1001, "First")).await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(app, "/api/projects", project_payload(1001, "Second")).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "DUPLICATE_KEY");
    assert_eq!(json["error"], "A project with this PID already exists.");

    let list = body_json(get(common::build_test_app(pool), "/api/projects").await).await;
    assert_eq!(list["meta"]["total"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_blank_field_returns_400(pool: PgPool) {
    let mut payload = project_payload(1001, "Blank");
    payload["ministryDept"] = json!("  ");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/projects", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("ministry_dept"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_missing_field_is_rejected(pool: PgPool) {
    let mut payload = project_payload(1001, "Missing");
    payload.as_object_mut().unwrap().remove("status");

    let app = common::build_test_app(pool);
    let response = post_json(app, "/api/projects", payload).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("status"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_malformed_json_returns_json_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_raw_json(app, "/api/projects", "{not json").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_numeric_id_returns_json_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_non_numeric_page_returns_json_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects?page=abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("page"));
}

// ---------------------------------------------------------------------------
// Fetch / update / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_project_by_id(pool: PgPool) {
    let created = create_project(&pool, project_payload(1001, "Get Me")).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["projectName"], "Get Me");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_project_partially(pool: PgPool) {
    let created = create_project(&pool, project_payload(1001, "Original")).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/projects/{id}"),
        json!({
            "id": 424242,
            "projectName": "Updated",
            "type": "ONGOING",
            "startDate": null
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["projectName"], "Updated");
    assert_eq!(json["type"], "ONGOING");
    assert_eq!(json["startDate"], serde_json::Value::Null);
    assert_eq!(json["ministryDept"], created["ministryDept"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/api/projects/999999", json!({"status": "x"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_to_existing_pid_returns_400(pool: PgPool) {
    create_project(&pool, project_payload(1001, "A")).await;
    let b = create_project(&pool, project_payload(1002, "B")).await;
    let id = b["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(app, &format!("/api/projects/{id}"), json!({"pid": "1001"})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "DUPLICATE_KEY");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_project_then_fetch_returns_404(pool: PgPool) {
    let created = create_project(&pool, project_payload(1001, "Doomed")).await;
    let id = created["id"].as_i64().unwrap();

    let response = delete(common::build_test_app(pool.clone()), &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(common::build_test_app(pool.clone()), &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(common::build_test_app(pool), &format!("/api/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_returns_envelope_with_meta(pool: PgPool) {
    for pid in 1..=12 {
        create_project(&pool, project_payload(pid, &format!("P{pid}"))).await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects?page=2&pageSize=5&sortBy=pid&sortOrder=asc").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["meta"]["total"], 12);
    assert_eq!(json["meta"]["page"], 2);
    assert_eq!(json["meta"]["pageSize"], 5);
    assert_eq!(json["meta"]["totalPages"], 3);

    let pids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["pid"].as_i64().unwrap())
        .collect();
    assert_eq!(pids, vec![6, 7, 8, 9, 10]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_filters_combine(pool: PgPool) {
    let mut a = project_payload(1, "Water Works");
    a["fundAvailable"] = json!("FUNDED");
    let mut b = project_payload(2, "Water Tower");
    b["fundAvailable"] = json!("NO");
    let mut c = project_payload(3, "Road");
    c["fundAvailable"] = json!("FUNDED");
    let mut d = project_payload(4, "Water Draft");
    d["fundAvailable"] = json!("FUNDED");
    d["isDraft"] = json!(true);
    for payload in [a, b, c, d] {
        create_project(&pool, payload).await;
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(
        get(app, "/api/projects?search=WATER&fundAvailable=FUNDED&isDraft=false").await,
    )
    .await;
    assert_eq!(json["meta"]["total"], 1);
    assert_eq!(json["data"][0]["pid"], 1);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/projects?search=water&isDraft=all").await).await;
    assert_eq!(json["meta"]["total"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_blank_params_are_ignored(pool: PgPool) {
    create_project(&pool, project_payload(1, "Only")).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/projects?search=&type=&fundAvailable=&isDraft=").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["meta"]["total"], 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_rejects_unknown_sort_and_enum_values(pool: PgPool) {
    for uri in [
        "/api/projects?sortBy=password",
        "/api/projects?sortOrder=sideways",
        "/api/projects?type=ARCHIVED",
        "/api/projects?fundAvailable=MAYBE",
    ] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_page_past_end_is_empty(pool: PgPool) {
    create_project(&pool, project_payload(1, "Only")).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/projects?page=9").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 0);
    assert_eq!(json["meta"]["total"], 1);
    assert_eq!(json["meta"]["totalPages"], 1);
}
