use armin_common::models::ContactInquiry;
use armin_common::services::{
    BoxFuture, BoxedError, InquiryStore, NotificationResult, NotificationService,
};
use armin_contact::{routes, ContactState, InquiryNotifier};
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tower::ServiceExt;

// --- In-memory collaborators ---

#[derive(Default)]
struct MemoryStore {
    records: Mutex<Vec<ContactInquiry>>,
}

impl InquiryStore for MemoryStore {
    type Error = BoxedError;

    fn insert(&self, inquiry: ContactInquiry) -> BoxFuture<'_, (), Self::Error> {
        Box::pin(async move {
            self.records.lock().unwrap().push(inquiry);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, Vec<ContactInquiry>, Self::Error> {
        Box::pin(async move { Ok(self.records.lock().unwrap().clone()) })
    }
}

struct FailingStore;

impl InquiryStore for FailingStore {
    type Error = BoxedError;

    fn insert(&self, _inquiry: ContactInquiry) -> BoxFuture<'_, (), Self::Error> {
        Box::pin(async { Err(BoxedError("connection refused".into())) })
    }

    fn list(&self) -> BoxFuture<'_, Vec<ContactInquiry>, Self::Error> {
        Box::pin(async { Err(BoxedError("connection refused".into())) })
    }
}

#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<(String, String, String)>>,
    fail: bool,
}

impl NotificationService for RecordingNotifier {
    type Error = BoxedError;

    fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
        _is_html: bool,
    ) -> BoxFuture<'_, NotificationResult, Self::Error> {
        let email = (to.to_string(), subject.to_string(), body.to_string());
        Box::pin(async move {
            self.sent.lock().unwrap().push(email);
            if self.fail {
                return Err(BoxedError("provider unreachable".into()));
            }
            Ok(NotificationResult {
                id: "mock-1".to_string(),
                status: "sent".to_string(),
            })
        })
    }
}

// --- Helpers ---

fn valid_payload() -> Value {
    json!({
        "name": "Test User",
        "email": "test@example.com",
        "phone": "+44 123 456 7890",
        "service": "Property Analysis",
        "message": "Hello"
    })
}

fn app(
    store: Option<Arc<dyn InquiryStore<Error = BoxedError>>>,
    notifier: Option<Arc<RecordingNotifier>>,
) -> Router {
    let notifier = notifier.map(|n| InquiryNotifier::new(n, "owner@example.com"));
    routes(Arc::new(ContactState::new(store, notifier)))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_contact() -> Request<Body> {
    Request::builder()
        .uri("/contact")
        .body(Body::empty())
        .unwrap()
}

async fn wait_for_emails(notifier: &RecordingNotifier, count: usize) {
    for _ in 0..100 {
        if notifier.sent.lock().unwrap().len() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

// --- Tests ---

#[tokio::test]
async fn test_valid_submission_echoes_fields_with_id_and_timestamp() {
    let app = app(None, None);
    let started = Utc::now();

    let (status, body) = send(&app, post_json(&valid_payload())).await;

    assert_eq!(status, StatusCode::OK);
    for field in ["name", "email", "phone", "service", "message"] {
        assert_eq!(body[field], valid_payload()[field]);
    }
    assert!(!body["id"].as_str().unwrap().is_empty());
    let created_at: DateTime<Utc> = body["created_at"].as_str().unwrap().parse().unwrap();
    assert!(created_at >= started);
}

#[tokio::test]
async fn test_each_submission_gets_a_new_id() {
    let app = app(None, None);
    let (_, first) = send(&app, post_json(&valid_payload())).await;
    let (_, second) = send(&app, post_json(&valid_payload())).await;
    assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_invalid_submission_is_rejected_without_side_effects() {
    let store = Arc::new(MemoryStore::default());
    let notifier = Arc::new(RecordingNotifier::default());
    let app = app(Some(store.clone()), Some(notifier.clone()));

    let (status, body) = send(
        &app,
        post_json(&json!({
            "name": "",
            "email": "invalid-email",
            "service": "",
            "message": ""
        })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], 422);
    let fields: Vec<&str> = body["error"]["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["name", "email", "service", "message"]);

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(store.records.lock().unwrap().is_empty());
    assert!(notifier.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_fields_are_reported_as_422() {
    let app = app(None, None);
    let (status, body) = send(&app, post_json(&json!({ "email": "test@example.com" }))).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["details"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_malformed_body_is_reported_as_422() {
    let app = app(None, None);

    let malformed = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(&app, malformed).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let wrong_type = post_json(&json!({ "name": 42, "email": "a@b.co", "service": "x", "message": "y" }));
    let (status, _) = send(&app, wrong_type).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let no_content_type = Request::builder()
        .method("POST")
        .uri("/contact")
        .body(Body::from(valid_payload().to_string()))
        .unwrap();
    let (status, _) = send(&app, no_content_type).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_wrong_field_type_is_named_in_details() {
    let app = app(None, None);

    for bad_name in [Value::Null, json!(123)] {
        let mut payload = valid_payload();
        payload["name"] = bad_name;
        let (status, body) = send(&app, post_json(&payload)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let details = body["error"]["details"].as_array().expect("details array");
        assert_eq!(details.len(), 1);
        assert_eq!(details[0]["field"], "name");
    }
}

#[tokio::test]
async fn test_unparseable_body_has_no_details() {
    let app = app(None, None);
    let malformed = Request::builder()
        .method("POST")
        .uri("/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    let (status, body) = send(&app, malformed).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].get("details").is_none());
    assert!(body["error"]["message"].is_string());
}

#[tokio::test]
async fn test_stored_inquiry_appears_in_listing() {
    let store = Arc::new(MemoryStore::default());
    let app = app(Some(store.clone()), None);

    let (_, created) = send(&app, post_json(&valid_payload())).await;
    let (status, listed) = send(&app, get_contact()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn test_store_failure_does_not_fail_the_request() {
    let app = app(Some(Arc::new(FailingStore)), None);

    let (status, _) = send(&app, post_json(&valid_payload())).await;
    assert_eq!(status, StatusCode::OK);

    let (status, listed) = send(&app, get_contact()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_listing_is_not_mounted_without_a_store() {
    let app = app(None, None);
    let (status, _) = send(&app, get_contact()).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_notification_is_sent_to_the_owner() {
    let notifier = Arc::new(RecordingNotifier::default());
    let app = app(None, Some(notifier.clone()));

    let (status, created) = send(&app, post_json(&valid_payload())).await;
    assert_eq!(status, StatusCode::OK);

    wait_for_emails(&notifier, 1).await;
    let sent = notifier.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let (to, subject, body) = &sent[0];
    assert_eq!(to, "owner@example.com");
    assert_eq!(subject, "New Contact Inquiry from Test User");
    assert!(body.contains(created["id"].as_str().unwrap()));
}

#[tokio::test]
async fn test_notification_failure_does_not_fail_the_request() {
    let notifier = Arc::new(RecordingNotifier {
        fail: true,
        ..RecordingNotifier::default()
    });
    let store = Arc::new(MemoryStore::default());
    let app = app(Some(store.clone()), Some(notifier.clone()));

    let (status, _) = send(&app, post_json(&valid_payload())).await;
    assert_eq!(status, StatusCode::OK);

    wait_for_emails(&notifier, 1).await;
    assert_eq!(notifier.sent.lock().unwrap().len(), 1);
    assert_eq!(store.records.lock().unwrap().len(), 1);
}
