//! Tests for quiz HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use quizdesk_model::{Announcement, Quiz};
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::ports::{DocumentStoreError, MockQuizStore, ResourceService};
use crate::domain::{ResourceServiceImpl, TRACE_ID_HEADER};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{quiz_payload, test_app};
use crate::outbound::memory::InMemoryDocumentStore;

fn failing_state() -> HttpState {
    let mut store = MockQuizStore::new();
    store
        .expect_find_all()
        .returning(|| Err(DocumentStoreError::connection("connection refused")));
    let quizzes: Arc<dyn ResourceService<Quiz>> =
        Arc::new(ResourceServiceImpl::<Quiz, _>::new(Arc::new(store)));
    let announcements: Arc<dyn ResourceService<Announcement>> = Arc::new(
        ResourceServiceImpl::<Announcement, _>::new(Arc::new(
            InMemoryDocumentStore::<Announcement>::new(),
        )),
    );
    HttpState::new(quizzes, announcements)
}

#[rstest]
#[actix_web::test]
async fn create_returns_created_envelope() {
    let app = actix_test::init_service(test_app(HttpState::in_memory())).await;
    let req = actix_test::TestRequest::post()
        .uri("/quizzes")
        .set_json(quiz_payload())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    assert!(res.headers().contains_key(TRACE_ID_HEADER));
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Quiz created successfully"));
    assert_eq!(body["data"]["title"], json!("T"));
    assert!(body["data"]["_id"].is_string());
}

#[rstest]
#[actix_web::test]
async fn created_quiz_appears_in_list() {
    let app = actix_test::init_service(test_app(HttpState::in_memory())).await;
    let create = actix_test::TestRequest::post()
        .uri("/quizzes")
        .set_json(quiz_payload())
        .to_request();
    let created: Value = actix_test::call_and_read_body_json(&app, create).await;

    let list = actix_test::TestRequest::get().uri("/quizzes").to_request();
    let listed: Value = actix_test::call_and_read_body_json(&app, list).await;

    assert_eq!(listed["message"], json!("Quizzes retrieved successfully"));
    assert_eq!(listed["count"], json!(1));
    assert_eq!(listed["data"][0]["_id"], created["data"]["_id"]);
}

#[rstest]
#[case("title", "\"title\" is required")]
#[case("difficulty", "\"difficulty\" is required")]
#[actix_web::test]
async fn create_rejects_missing_fields(#[case] field: &str, #[case] detail: &str) {
    let app = actix_test::init_service(test_app(HttpState::in_memory())).await;
    let mut payload = quiz_payload();
    payload
        .as_object_mut()
        .expect("object payload")
        .remove(field);
    let req = actix_test::TestRequest::post()
        .uri("/quizzes")
        .set_json(payload)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({"success": false, "message": "Validation failed", "error": detail})
    );
}

#[rstest]
#[actix_web::test]
async fn update_with_malformed_id_leaves_store_untouched() {
    let app = actix_test::init_service(test_app(HttpState::in_memory())).await;
    let create = actix_test::TestRequest::post()
        .uri("/quizzes")
        .set_json(quiz_payload())
        .to_request();
    let _: Value = actix_test::call_and_read_body_json(&app, create).await;

    let mut changed = quiz_payload();
    changed["title"] = json!("Changed");
    let req = actix_test::TestRequest::put()
        .uri("/quizzes/badid")
        .set_json(changed)
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], json!("Invalid quiz ID format"));

    let list = actix_test::TestRequest::get().uri("/quizzes").to_request();
    let listed: Value = actix_test::call_and_read_body_json(&app, list).await;
    assert_eq!(listed["data"][0]["title"], json!("T"));
}

#[rstest]
#[actix_web::test]
async fn update_replaces_all_fields() {
    let app = actix_test::init_service(test_app(HttpState::in_memory())).await;
    let create = actix_test::TestRequest::post()
        .uri("/quizzes")
        .set_json(quiz_payload())
        .to_request();
    let created: Value = actix_test::call_and_read_body_json(&app, create).await;
    let id = created["data"]["_id"].as_str().expect("identifier");

    let replacement = json!({
        "title": "T2",
        "description": "D2",
        "questionCount": 8,
        "duration": 20,
        "difficulty": "hard",
        "category": "C2",
    });
    let req = actix_test::TestRequest::put()
        .uri(&format!("/quizzes/{id}"))
        .set_json(&replacement)
        .to_request();
    let res = actix_test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], json!("Quiz updated successfully"));

    let mut expected = replacement;
    expected["_id"] = json!(id);
    assert_eq!(body["data"], expected);
}

#[rstest]
#[actix_web::test]
async fn update_of_unknown_quiz_is_not_found() {
    let app = actix_test::init_service(test_app(HttpState::in_memory())).await;
    let req = actix_test::TestRequest::put()
        .uri("/quizzes/6f1c2a0e-8d3b-4f6a-9c1e-2b7d5a4e3f10")
        .set_json(quiz_payload())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], json!("Quiz not found"));
    assert_eq!(body["error"], json!("No quiz exists with the provided ID"));
}

#[rstest]
#[actix_web::test]
async fn delete_with_malformed_id_is_bad_request() {
    let app = actix_test::init_service(test_app(HttpState::in_memory())).await;
    let req = actix_test::TestRequest::delete()
        .uri("/quizzes/12345")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn list_maps_store_fault_to_server_error() {
    let app = actix_test::init_service(test_app(failing_state())).await;
    let req = actix_test::TestRequest::get().uri("/quizzes").to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace-id header")
        .to_str()
        .expect("ascii header")
        .to_owned();
    assert!(!trace_id.is_empty());
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["message"], json!("Failed to retrieve quizzes"));
    assert!(
        body["error"]
            .as_str()
            .is_some_and(|detail| detail.contains("connection refused"))
    );
}

#[rstest]
#[actix_web::test]
async fn malformed_json_body_is_validation_failure() {
    let app = actix_test::init_service(test_app(HttpState::in_memory())).await;
    let req = actix_test::TestRequest::post()
        .uri("/quizzes")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"title\": ")
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["message"], json!("Validation failed"));
}
