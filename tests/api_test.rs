mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use quizdesk::{names, router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> axum::Router {
    let db = common::create_test_db().await;
    router(AppState::new(db))
}

async fn send(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    let body = match body {
        Some(value) => Body::from(value.to_string()),
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(req.body(body).expect("request build should succeed"))
        .await
        .expect("router should respond");

    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("response should be JSON")
    };
    (status, value)
}

async fn send_raw(
    app: &axum::Router,
    method: Method,
    uri: &str,
    body: &str,
) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request build should succeed");
    let resp = app.clone().oneshot(req).await.expect("router should respond");
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    (status, serde_json::from_slice(&bytes).expect("response should be JSON"))
}

fn geo() -> Value {
    json!({
        "title": "Geo",
        "questions": [{"text": "Capital of France?", "type": "INPUT"}]
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn created_quiz_can_be_fetched_by_id() {
    let app = app().await;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/quizzes")
        .header("content-type", "application/json")
        .body(Body::from(geo().to_string()))
        .expect("request build should succeed");
    let resp = app.clone().oneshot(req).await.expect("router should respond");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp.headers()["location"].to_str().unwrap().to_string();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let created: Value = serde_json::from_slice(&bytes).unwrap();

    let id = created["id"].as_str().expect("id").to_string();
    assert_eq!(location, names::quiz_url(&id));
    assert_eq!(created["title"], "Geo");
    assert!(created["createdAt"].is_string());

    let (status, fetched) = send(&app, Method::GET, &format!("/quizzes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let question = &fetched["questions"][0];
    assert_eq!(question["text"], "Capital of France?");
    assert_eq!(question["type"], "INPUT");
    assert!(question.get("options").is_none(), "options must be absent");
}

#[tokio::test]
async fn checkbox_options_come_back_as_an_array() {
    let app = app().await;

    let body = json!({
        "title": "Colours",
        "questions": [{
            "text": "Favourite colour?",
            "type": "CHECKBOX",
            "options": ["Red", "Blue", "Green"]
        }]
    });
    let (_, created) = send(&app, Method::POST, "/quizzes", Some(body)).await;
    let id = created["id"].as_str().unwrap();

    let (_, fetched) = send(&app, Method::GET, &format!("/quizzes/{id}"), None).await;
    assert_eq!(fetched["questions"][0]["options"], json!(["Red", "Blue", "Green"]));
}

#[tokio::test]
async fn list_is_a_projection_ordered_newest_first() {
    let app = app().await;

    for title in ["Old", "New"] {
        let body = json!({
            "title": title,
            "questions": [
                {"text": "One", "type": "BOOLEAN"},
                {"text": "Two", "type": "INPUT"}
            ]
        });
        send(&app, Method::POST, "/quizzes", Some(body)).await;
    }

    let (status, list) = send(&app, Method::GET, "/quizzes", None).await;
    assert_eq!(status, StatusCode::OK);

    let list = list.as_array().expect("array");
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["title"], "New");
    assert_eq!(list[1]["title"], "Old");
    for entry in list {
        assert_eq!(entry["questionCount"], 2);
        assert!(entry.get("questions").is_none());
        assert!(entry["id"].is_string());
    }
}

#[tokio::test]
async fn invalid_payloads_are_rejected_without_mutation() {
    let app = app().await;

    let cases = [
        json!({"title": "", "questions": [{"text": "Q", "type": "INPUT"}]}),
        json!({"questions": [{"text": "Q", "type": "INPUT"}]}),
        json!({"title": "No questions", "questions": []}),
        json!({"title": "Blank text", "questions": [{"text": " ", "type": "BOOLEAN"}]}),
        json!({"title": "Bare checkbox", "questions": [{"text": "Pick", "type": "CHECKBOX"}]}),
        json!({
            "title": "Stray",
            "questions": [{"text": "Yes?", "type": "BOOLEAN", "options": ["Y"]}]
        }),
        json!({"title": "Unknown type", "questions": [{"text": "Q", "type": "RADIO"}]}),
    ];

    for body in cases {
        let (status, error) = send(&app, Method::POST, "/quizzes", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "expected 400 for {body}");
        assert!(error["error"].is_string(), "expected error message for {body}");
    }

    let (_, list) = send(&app, Method::GET, "/quizzes", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn malformed_json_is_an_input_error() {
    let app = app().await;
    let (status, error) = send_raw(&app, Method::POST, "/quizzes", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["error"]
        .as_str()
        .unwrap()
        .starts_with("invalid request body"));
}

#[tokio::test]
async fn unknown_ids_are_not_found() {
    let app = app().await;
    let uri = "/quizzes/01ARZ3NDEKTSV4RRFFQ69G5FAV";

    let (status, error) = send(&app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(error["error"].as_str().unwrap().contains("not found"));

    let (status, _) = send(&app, Method::PATCH, uri, Some(geo())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The PATCH did not create anything.
    let (_, list) = send(&app, Method::GET, "/quizzes", None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn patch_replaces_title_and_questions() {
    let app = app().await;

    let (_, created) = send(&app, Method::POST, "/quizzes", Some(geo())).await;
    let id = created["id"].as_str().unwrap();
    let old_question_id = created["questions"][0]["id"].clone();

    let update = json!({
        "title": "Geography",
        "questions": [
            {"text": "Capital of France?", "type": "INPUT"},
            {"text": "Continents", "type": "CHECKBOX", "options": ["Europe", "Asia"]}
        ]
    });
    let (status, updated) =
        send(&app, Method::PATCH, &format!("/quizzes/{id}"), Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "Geography");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let (_, fetched) = send(&app, Method::GET, &format!("/quizzes/{id}"), None).await;
    assert_eq!(fetched, updated);

    let questions = fetched["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 2);
    assert_ne!(questions[0]["id"], old_question_id);
    assert_eq!(questions[1]["options"], json!(["Europe", "Asia"]));
}

#[tokio::test]
async fn invalid_patch_leaves_quiz_unchanged() {
    let app = app().await;

    let (_, created) = send(&app, Method::POST, "/quizzes", Some(geo())).await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        Method::PATCH,
        &format!("/quizzes/{id}"),
        Some(json!({"title": "Emptied", "questions": []})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, fetched) = send(&app, Method::GET, &format!("/quizzes/{id}"), None).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn delete_removes_the_quiz() {
    let app = app().await;

    let (_, created) = send(&app, Method::POST, "/quizzes", Some(geo())).await;
    let uri = format!("/quizzes/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
