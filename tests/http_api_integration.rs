//! HTTP-level integration tests for the todo API.
//!
//! Each test wires the real handler stack over the in-memory repository
//! and drives it through actix's test service, asserting on status codes
//! and exact JSON bodies.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code indexes JSON arrays after length checks"
)]

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, Error, test, web};
use mockable::DefaultClock;
use serde_json::{Value, json};
use std::sync::Arc;
use taskbook::http;
use taskbook::todo::{adapters::memory::InMemoryTodoRepository, services::TodoService};

async fn spawn_app()
-> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    let service = TodoService::new(
        Arc::new(InMemoryTodoRepository::new()),
        Arc::new(DefaultClock),
    );
    test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .app_data(http::json_config())
            .configure(http::configure)
            .default_service(web::route().to(http::fallback_not_found)),
    )
    .await
}

async fn post_todo<S>(app: &S, body: Value) -> ServiceResponse<BoxBody>
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let request = test::TestRequest::post()
        .uri("/todos")
        .set_json(body)
        .to_request();
    test::call_service(app, request).await
}

#[actix_web::test]
async fn create_and_fetch_round_trip() {
    let app = spawn_app().await;

    let created = post_todo(&app, json!({"title": "  Buy milk  ", "priority": "medium"})).await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let created_body: Value = test::read_body_json(created).await;

    assert_eq!(created_body["title"], json!("Buy milk"));
    assert_eq!(created_body["completed"], json!(false));
    assert_eq!(created_body["priority"], json!("medium"));
    let created_at = created_body["createdAt"]
        .as_str()
        .expect("createdAt should be a string");
    let parsed = chrono::DateTime::parse_from_rfc3339(created_at)
        .expect("createdAt should be RFC 3339");
    let age = chrono::Utc::now().signed_duration_since(parsed);
    assert!(age.num_seconds().abs() < 5, "createdAt should be near now");

    let id = created_body["id"].as_i64().expect("id should be an integer");
    let fetched = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/todos/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let fetched_body: Value = test::read_body_json(fetched).await;
    assert_eq!(fetched_body, created_body);
}

#[actix_web::test]
async fn create_validation_failures_return_400_with_field() {
    let app = spawn_app().await;

    let blank = post_todo(&app, json!({"title": "   "})).await;
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);
    let blank_body: Value = test::read_body_json(blank).await;
    assert_eq!(
        blank_body,
        json!({"error": {"message": "Title is required", "field": "title"}})
    );

    let long_title = "x".repeat(201);
    let oversized = post_todo(&app, json!({"title": long_title})).await;
    assert_eq!(oversized.status(), StatusCode::BAD_REQUEST);
    let oversized_body: Value = test::read_body_json(oversized).await;
    assert_eq!(
        oversized_body,
        json!({"error": {"message": "Title is too long (max 200)", "field": "title"}})
    );

    let priority = post_todo(&app, json!({"title": "ok", "priority": "urgent"})).await;
    assert_eq!(priority.status(), StatusCode::BAD_REQUEST);
    let priority_body: Value = test::read_body_json(priority).await;
    assert_eq!(
        priority_body,
        json!({"error": {"message": "Invalid priority", "field": "priority"}})
    );
}

#[actix_web::test]
async fn list_applies_filters_and_orders_newest_first() {
    let app = spawn_app().await;

    let alpha = post_todo(&app, json!({"title": "Alpha search item", "priority": "high"})).await;
    let alpha_body: Value = test::read_body_json(alpha).await;
    let beta = post_todo(&app, json!({"title": "Beta search item", "priority": "medium"})).await;
    let beta_body: Value = test::read_body_json(beta).await;
    let gamma = post_todo(&app, json!({"title": "Gamma other item"})).await;
    let gamma_body: Value = test::read_body_json(gamma).await;

    let complete_gamma = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/todos/{}", gamma_body["id"]))
            .set_json(json!({"completed": true}))
            .to_request(),
    )
    .await;
    assert_eq!(complete_gamma.status(), StatusCode::OK);

    let by_search = test::call_service(
        &app,
        test::TestRequest::get().uri("/todos?q=search").to_request(),
    )
    .await;
    assert_eq!(by_search.status(), StatusCode::OK);
    let by_search_body: Value = test::read_body_json(by_search).await;
    let matches = by_search_body.as_array().expect("array body");
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0]["id"], beta_body["id"]);
    assert_eq!(matches[1]["id"], alpha_body["id"]);

    let by_status = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/todos?status=completed")
            .to_request(),
    )
    .await;
    let by_status_body: Value = test::read_body_json(by_status).await;
    let completed = by_status_body.as_array().expect("array body");
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0]["id"], gamma_body["id"]);

    let by_priority = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/todos?priority=high")
            .to_request(),
    )
    .await;
    let by_priority_body: Value = test::read_body_json(by_priority).await;
    let high = by_priority_body.as_array().expect("array body");
    assert_eq!(high.len(), 1);
    assert_eq!(high[0]["id"], alpha_body["id"]);

    let empty = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/todos?q=nomatch")
            .to_request(),
    )
    .await;
    assert_eq!(empty.status(), StatusCode::OK);
    let empty_body: Value = test::read_body_json(empty).await;
    assert_eq!(empty_body, json!([]));
}

#[actix_web::test]
async fn list_rejects_invalid_filters() {
    let app = spawn_app().await;

    let bad_status = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/todos?status=weird")
            .to_request(),
    )
    .await;
    assert_eq!(bad_status.status(), StatusCode::BAD_REQUEST);
    let bad_status_body: Value = test::read_body_json(bad_status).await;
    assert_eq!(
        bad_status_body,
        json!({"error": {"message": "Invalid status (all|completed|pending)", "field": "status"}})
    );

    let bad_priority = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/todos?priority=urgent")
            .to_request(),
    )
    .await;
    assert_eq!(bad_priority.status(), StatusCode::BAD_REQUEST);
    let bad_priority_body: Value = test::read_body_json(bad_priority).await;
    assert_eq!(
        bad_priority_body,
        json!({"error": {"message": "Invalid priority", "field": "priority"}})
    );
}

#[actix_web::test]
async fn update_merges_patch_fields() {
    let app = spawn_app().await;

    let created = post_todo(&app, json!({"title": "Original", "priority": "high"})).await;
    let created_body: Value = test::read_body_json(created).await;
    let id = created_body["id"].as_i64().expect("integer id");

    let toggled = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/todos/{id}"))
            .set_json(json!({"completed": true}))
            .to_request(),
    )
    .await;
    assert_eq!(toggled.status(), StatusCode::OK);
    let toggled_body: Value = test::read_body_json(toggled).await;
    assert_eq!(toggled_body["completed"], json!(true));
    assert_eq!(toggled_body["title"], json!("Original"));
    assert_eq!(toggled_body["priority"], json!("high"));

    let renamed = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/todos/{id}"))
            .set_json(json!({"title": "Renamed", "priority": "low"}))
            .to_request(),
    )
    .await;
    assert_eq!(renamed.status(), StatusCode::OK);
    let renamed_body: Value = test::read_body_json(renamed).await;
    assert_eq!(renamed_body["title"], json!("Renamed"));
    assert_eq!(renamed_body["priority"], json!("low"));
    assert_eq!(renamed_body["completed"], json!(true));
    assert_eq!(renamed_body["createdAt"], created_body["createdAt"]);

    let rejected = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&format!("/todos/{id}"))
            .set_json(json!({"title": ""}))
            .to_request(),
    )
    .await;
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn delete_removes_the_row_permanently() {
    let app = spawn_app().await;

    let created = post_todo(&app, json!({"title": "Ephemeral"})).await;
    let created_body: Value = test::read_body_json(created).await;
    let id = created_body["id"].as_i64().expect("integer id");

    let deleted = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/todos/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);
    let body = test::read_body(deleted).await;
    assert!(body.is_empty(), "204 response must have an empty body");

    let fetched = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/todos/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
    let fetched_body: Value = test::read_body_json(fetched).await;
    assert_eq!(fetched_body, json!({"error": {"message": "Todo not found"}}));

    let deleted_again = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/todos/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(deleted_again.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn missing_ids_and_routes_report_not_found() {
    let app = spawn_app().await;

    let unknown = test::call_service(
        &app,
        test::TestRequest::get().uri("/todos/99999999").to_request(),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);

    let non_numeric = test::call_service(
        &app,
        test::TestRequest::get().uri("/todos/abc").to_request(),
    )
    .await;
    assert_eq!(non_numeric.status(), StatusCode::NOT_FOUND);
    let non_numeric_body: Value = test::read_body_json(non_numeric).await;
    assert_eq!(
        non_numeric_body,
        json!({"error": {"message": "Todo not found"}})
    );

    let update_unknown = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/todos/99999999")
            .set_json(json!({"completed": true}))
            .to_request(),
    )
    .await;
    assert_eq!(update_unknown.status(), StatusCode::NOT_FOUND);

    let unmatched = test::call_service(
        &app,
        test::TestRequest::get().uri("/unmatched").to_request(),
    )
    .await;
    assert_eq!(unmatched.status(), StatusCode::NOT_FOUND);
    let unmatched_body: Value = test::read_body_json(unmatched).await;
    assert_eq!(
        unmatched_body,
        json!({"error": {"message": "Resource not found"}})
    );
}

#[actix_web::test]
async fn root_reports_service_information() {
    let app = spawn_app().await;

    let response = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({"ok": true, "service": "taskbook-api"}));
}

#[actix_web::test]
async fn malformed_json_body_is_a_bad_request() {
    let app = spawn_app().await;

    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/todos")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, json!({"error": {"message": "Invalid JSON body"}}));
}
