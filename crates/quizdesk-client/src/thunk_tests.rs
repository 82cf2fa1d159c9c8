//! Lifecycle tests for the async actions against a mocked transport.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use quizdesk_model::{Difficulty, Quiz, QuizDraft};
use rstest::{fixture, rstest};
use serde_json::json;

use super::*;
use crate::action::Action;
use crate::reducer::RootState;
use crate::transport::TransportError;

mockall::mock! {
    Transport {}

    #[async_trait]
    impl Transport for Transport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
    }
}

#[fixture]
fn draft() -> QuizDraft {
    QuizDraft {
        title: "T".to_owned(),
        description: "D".to_owned(),
        question_count: 5,
        duration: 10,
        difficulty: Difficulty::Easy,
        category: "C".to_owned(),
    }
}

fn quiz_json(id: &DocumentId, title: &str) -> Value {
    json!({
        "_id": id.to_string(),
        "title": title,
        "description": "D",
        "questionCount": 5,
        "duration": 10,
        "difficulty": "easy",
        "category": "C",
    })
}

fn shared(transport: MockTransport) -> Arc<dyn Transport> {
    Arc::new(transport)
}

fn respond(status: u16, body: Value) -> Arc<dyn Transport> {
    let mut transport = MockTransport::new();
    transport.expect_send().times(1).returning(move |_| {
        Ok(ApiResponse {
            status,
            body: Some(body.clone()),
        })
    });
    shared(transport)
}

#[rstest]
#[tokio::test]
async fn fetch_all_replaces_items_with_server_list() {
    let id = DocumentId::generate();
    let mut transport = MockTransport::new();
    let store = Arc::new(Store::new());
    transport
        .expect_send()
        .withf(|request| request.method == Method::Get && request.path == "/quizzes")
        .times(1)
        .returning(move |_| {
            Ok(ApiResponse {
                status: 200,
                body: Some(json!({
                    "success": true,
                    "message": "Quizzes retrieved successfully",
                    "data": [quiz_json(&id, "T")],
                    "count": 1,
                })),
            })
        });

    let items = fetch_all::<Quiz>(&store, &shared(transport))
        .await
        .expect("fetch succeeds");

    assert_eq!(items.len(), 1);
    let state = store.state();
    assert!(!state.quizzes.loading);
    assert_eq!(state.quizzes.items, items);
}

#[rstest]
#[tokio::test]
async fn fetch_all_is_loading_while_request_is_in_flight() {
    let store = Arc::new(Store::new());
    let mut transport = MockTransport::new();
    let (seen_tx, seen_rx) = std::sync::mpsc::channel();
    let observer = store.subscribe();
    transport.expect_send().times(1).returning(move |_| {
        seen_tx
            .send(observer.borrow().quizzes.loading)
            .expect("record loading flag");
        Ok(ApiResponse {
            status: 200,
            body: Some(json!([])),
        })
    });

    fetch_all::<Quiz>(&store, &shared(transport))
        .await
        .expect("fetch succeeds");

    assert!(seen_rx.recv().expect("loading flag recorded"));
    assert!(!store.state().quizzes.loading);
}

#[rstest]
#[case(
    500,
    json!({"success": false, "message": "Failed to retrieve quizzes", "error": "connection refused"}),
    "Failed to retrieve quizzes: connection refused"
)]
#[case(500, json!({"success": false, "message": "Failed to retrieve quizzes"}), "Failed to retrieve quizzes")]
#[case(502, json!("<html>bad gateway</html>"), "Request failed with status code 502")]
#[case(200, json!({"success": false, "error": "quota exceeded"}), "quota exceeded")]
#[tokio::test]
async fn fetch_all_rejection_records_reason(
    #[case] status: u16,
    #[case] body: Value,
    #[case] expected: &str,
) {
    let store = Arc::new(Store::new());
    let transport = respond(status, body);

    let rejection = fetch_all::<Quiz>(&store, &transport)
        .await
        .expect_err("fetch rejected");

    assert_eq!(rejection.reason(), expected);
    assert_eq!(rejection.status(), Some(status));
    let state = store.state();
    assert!(!state.quizzes.loading);
    assert_eq!(state.quizzes.error.as_deref(), Some(expected));
}

#[rstest]
#[tokio::test]
async fn network_fault_is_rejected_with_transport_message() {
    let store = Arc::new(Store::new());
    let mut transport = MockTransport::new();
    transport.expect_send().times(1).returning(|_| {
        Err(TransportError::Network {
            message: "connection refused".to_owned(),
        })
    });

    let rejection = fetch_all::<quizdesk_model::Announcement>(&store, &shared(transport))
        .await
        .expect_err("network fault");

    assert_eq!(rejection.reason(), "network error: connection refused");
    assert_eq!(rejection.status(), None);
    assert_eq!(
        store.state().announcements.error.as_deref(),
        Some("network error: connection refused")
    );
}

#[rstest]
#[tokio::test]
async fn undecodable_success_body_falls_back_to_operation_reason() {
    let store = Arc::new(Store::new());
    let transport = respond(200, json!({"success": true, "data": "not a list"}));

    let rejection = fetch_all::<Quiz>(&store, &transport)
        .await
        .expect_err("undecodable list");

    assert!(rejection.reason().starts_with("Failed to fetch quizzes: "));
}

#[rstest]
#[tokio::test]
async fn add_posts_draft_and_appends_created_document(draft: QuizDraft) {
    let id = DocumentId::generate();
    let store = Arc::new(Store::new());
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|request| {
            request.method == Method::Post
                && request.path == "/quizzes"
                && request.body.as_ref().and_then(|body| body.get("questionCount"))
                    == Some(&json!(5))
        })
        .times(1)
        .returning(move |_| {
            Ok(ApiResponse {
                status: 201,
                body: Some(json!({
                    "success": true,
                    "message": "Quiz created successfully",
                    "data": quiz_json(&id, "T"),
                })),
            })
        });

    let created = add::<Quiz>(&store, &shared(transport), &draft)
        .await
        .expect("add succeeds");

    assert_eq!(created.id, id);
    assert_eq!(store.items::<Quiz>(), vec![created]);
}

#[rstest]
#[tokio::test]
async fn add_rejection_leaves_state_and_error_untouched(draft: QuizDraft) {
    let store = Arc::new(Store::new());
    let transport = respond(
        400,
        json!({"success": false, "message": "Validation failed", "error": "\"title\" is required"}),
    );

    let rejection = add::<Quiz>(&store, &transport, &draft)
        .await
        .expect_err("validation failure");

    assert_eq!(
        rejection.reason(),
        "Validation failed: \"title\" is required"
    );
    assert_eq!(store.state(), RootState::default());
}

#[rstest]
#[tokio::test]
async fn success_without_data_is_rejected(draft: QuizDraft) {
    let store = Arc::new(Store::new());
    let transport = respond(201, json!({"success": true, "message": "Quiz created successfully"}));

    let rejection = add::<Quiz>(&store, &transport, &draft)
        .await
        .expect_err("missing data");

    assert!(rejection.reason().starts_with("Failed to add quiz: "));
    assert!(store.items::<Quiz>().is_empty());
}

#[rstest]
#[tokio::test]
async fn update_replaces_document_in_place(mut draft: QuizDraft) {
    let id = DocumentId::generate();
    let store = Arc::new(Store::new());
    store.dispatch(Action::Quizzes(ResourceAction::Add(Lifecycle::Fulfilled(
        Quiz::from_draft(id, draft.clone()),
    ))));
    draft.title = "Renamed".to_owned();
    let path = format!("/quizzes/{id}");
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(move |request| request.method == Method::Put && request.path == path)
        .times(1)
        .returning(move |_| {
            Ok(ApiResponse {
                status: 200,
                body: Some(json!({
                    "success": true,
                    "message": "Quiz updated successfully",
                    "data": quiz_json(&id, "Renamed"),
                })),
            })
        });

    update::<Quiz>(&store, &shared(transport), &id, &draft)
        .await
        .expect("update succeeds");

    let items = store.items::<Quiz>();
    assert_eq!(items.len(), 1);
    assert_eq!(items.first().map(|quiz| quiz.title.as_str()), Some("Renamed"));
}

#[rstest]
#[tokio::test]
async fn update_of_missing_document_reports_not_found(draft: QuizDraft) {
    let store = Arc::new(Store::new());
    let transport = respond(
        404,
        json!({"success": false, "message": "Quiz not found", "error": "No quiz exists with the provided ID"}),
    );

    let rejection = update::<Quiz>(&store, &transport, &DocumentId::generate(), &draft)
        .await
        .expect_err("not found");

    assert_eq!(rejection.status(), Some(404));
    assert_eq!(
        rejection.reason(),
        "Quiz not found: No quiz exists with the provided ID"
    );
}

#[rstest]
#[tokio::test]
async fn delete_removes_document_by_id(draft: QuizDraft) {
    let id = DocumentId::generate();
    let store = Arc::new(Store::new());
    store.dispatch(Action::Quizzes(ResourceAction::Add(Lifecycle::Fulfilled(
        Quiz::from_draft(id, draft),
    ))));
    let transport = respond(
        200,
        json!({"success": true, "message": "Quiz deleted successfully", "data": quiz_json(&id, "T")}),
    );

    let removed = delete::<Quiz>(&store, &transport, &id)
        .await
        .expect("delete succeeds");

    assert_eq!(removed, id);
    assert!(store.items::<Quiz>().is_empty());
}

#[rstest]
#[tokio::test]
async fn empty_failure_body_uses_status_reason() {
    let store = Arc::new(Store::new());
    let mut transport = MockTransport::new();
    transport.expect_send().times(1).returning(|_| {
        Ok(ApiResponse {
            status: 503,
            body: None,
        })
    });

    let rejection = delete::<Quiz>(&store, &shared(transport), &DocumentId::generate())
        .await
        .expect_err("unavailable");

    assert_eq!(rejection.reason(), "Request failed with status code 503");
}

/// Answers after `delay`, like a slow network.
struct DelayedTransport {
    delay: Duration,
    response: ApiResponse,
}

#[async_trait]
impl Transport for DelayedTransport {
    async fn send(&self, _request: ApiRequest) -> Result<ApiResponse, TransportError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.response.clone())
    }
}

#[rstest]
#[tokio::test]
async fn fetch_settles_after_caller_stops_waiting() {
    let id = DocumentId::generate();
    let store = Arc::new(Store::new());
    let transport: Arc<dyn Transport> = Arc::new(DelayedTransport {
        delay: Duration::from_millis(200),
        response: ApiResponse {
            status: 200,
            body: Some(json!([quiz_json(&id, "T")])),
        },
    });

    let outcome = tokio::time::timeout(
        Duration::from_millis(20),
        fetch_all::<Quiz>(&store, &transport),
    )
    .await;
    assert!(outcome.is_err(), "caller gave up before the response");
    assert!(store.state().quizzes.loading);

    let mut changes = store.subscribe();
    tokio::time::timeout(
        Duration::from_secs(2),
        changes.wait_for(|state| !state.quizzes.loading),
    )
    .await
    .expect("fetch settles")
    .expect("store alive");

    let state = store.state();
    assert!(state.quizzes.error.is_none());
    assert_eq!(state.quizzes.items.first().map(|quiz| quiz.id), Some(id));
}
