use armin_backend::{build_router, AppState};
use armin_config::{AppConfig, CorsConfig, DatabaseConfig, EmailConfig};
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn database() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        name: None,
    }
}

fn email(base_url: &str) -> EmailConfig {
    EmailConfig {
        api_key: "re_test_key".to_string(),
        sender: "website@arminshopfitting.com".to_string(),
        recipient: "info@arminshopfitting.com".to_string(),
        api_base_url: Some(base_url.to_string()),
        timeout_secs: Some(2),
    }
}

fn with_database() -> AppConfig {
    AppConfig {
        use_database: true,
        database: Some(database()),
        ..AppConfig::default()
    }
}

fn with_email(base_url: &str) -> AppConfig {
    AppConfig {
        use_email: true,
        email: Some(email(base_url)),
        ..AppConfig::default()
    }
}

async fn app(config: AppConfig) -> Router {
    let state = AppState::new(Arc::new(config)).await;
    build_router(&state)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_contact(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn valid_inquiry() -> Value {
    json!({
        "name": "Test User",
        "email": "test@example.com",
        "phone": "+44 123 456 7890",
        "service": "Property Analysis",
        "message": "Hello"
    })
}

fn invalid_inquiry() -> Value {
    json!({
        "name": "",
        "email": "invalid-email",
        "service": "",
        "message": ""
    })
}

async fn wait_for_requests(server: &MockServer, count: usize) -> usize {
    for _ in 0..200 {
        let received = server.received_requests().await.unwrap_or_default().len();
        if received >= count {
            return received;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    server.received_requests().await.unwrap_or_default().len()
}

#[tokio::test]
async fn test_root_message() {
    let app = app(AppConfig::default()).await;

    for uri in ["/api/", "/api"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body, json!({ "message": "Armin Shopfitting API" }));
    }
}

#[tokio::test]
async fn test_catalog_endpoints_are_idempotent() {
    let app = app(AppConfig::default()).await;

    for uri in ["/api/projects", "/api/testimonials"] {
        let (status, first) = send(&app, get(uri)).await;
        let (_, second) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first, second);
        assert_eq!(first.as_array().unwrap().len(), 3);
    }

    let (_, projects) = send(&app, get("/api/projects")).await;
    assert_eq!(projects[0]["title"], "Girkin Offices");
    assert_eq!(projects[2]["location"], "Nationwide, UK");
}

#[tokio::test]
async fn test_submission_is_persisted_and_listed() {
    let app = app(with_database()).await;
    let started = Utc::now();

    let (status, created) = send(&app, post_contact(valid_inquiry())).await;
    assert_eq!(status, StatusCode::OK);
    for field in ["name", "email", "phone", "service", "message"] {
        assert_eq!(created[field], valid_inquiry()[field]);
    }
    let created_at: DateTime<Utc> = created["created_at"].as_str().unwrap().parse().unwrap();
    assert!(created_at >= started);

    let (status, listed) = send(&app, get("/api/contact")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn test_listing_keeps_submission_order() {
    let app = app(with_database()).await;

    let mut ids = Vec::new();
    for name in ["First", "Second", "Third"] {
        let mut inquiry = valid_inquiry();
        inquiry["name"] = json!(name);
        let (_, created) = send(&app, post_contact(inquiry)).await;
        ids.push(created["id"].clone());
    }

    let (_, listed) = send(&app, get("/api/contact")).await;
    let listed_ids: Vec<Value> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].clone())
        .collect();
    assert_eq!(listed_ids, ids);
    assert_ne!(ids[0], ids[1]);
}

#[tokio::test]
async fn test_invalid_submission_has_no_side_effects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "x" })))
        .expect(0)
        .mount(&server)
        .await;

    let config = AppConfig {
        use_database: true,
        database: Some(database()),
        ..with_email(&server.uri())
    };
    let app = app(config).await;

    let (status, body) = send(&app, post_contact(invalid_inquiry())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], 422);
    assert_eq!(body["error"]["details"].as_array().unwrap().len(), 4);

    let (_, listed) = send(&app, get("/api/contact")).await;
    assert_eq!(listed, json!([]));

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_notification_is_emailed_to_recipient() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .and(body_partial_json(json!({
            "from": "website@arminshopfitting.com",
            "to": ["info@arminshopfitting.com"],
            "subject": "New Contact Inquiry from Test User"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "email_1" })))
        .expect(1)
        .mount(&server)
        .await;

    let app = app(with_email(&server.uri())).await;

    let (status, _) = send(&app, post_contact(valid_inquiry())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(wait_for_requests(&server, 1).await, 1);
}

#[tokio::test]
async fn test_provider_error_still_returns_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/emails"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let app = app(with_email(&server.uri())).await;

    let (status, created) = send(&app, post_contact(valid_inquiry())).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!created["id"].as_str().unwrap().is_empty());
    assert_eq!(wait_for_requests(&server, 1).await, 1);
}

#[tokio::test]
async fn test_unreachable_provider_still_returns_success() {
    // Nothing listens on the discard port
    let app = app(with_email("http://127.0.0.1:9")).await;

    let (status, _) = send(&app, post_contact(valid_inquiry())).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_listing_is_only_served_with_persistence() {
    let app = app(AppConfig::default()).await;

    let (status, _) = send(&app, get("/api/contact")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(&app, post_contact(valid_inquiry())).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_wildcard_cors_allows_any_origin() {
    let app = app(AppConfig::default()).await;

    let request = Request::builder()
        .uri("/api/projects")
        .header(header::ORIGIN, "https://anywhere.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_explicit_cors_origin_allows_credentials() {
    let config = AppConfig {
        cors: CorsConfig {
            allowed_origins: vec!["https://arminshopfitting.com".to_string()],
        },
        ..AppConfig::default()
    };
    let app = app(config).await;

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/contact")
        .header(header::ORIGIN, "https://arminshopfitting.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(preflight).await.unwrap();
    let headers = response.headers();

    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "https://arminshopfitting.com"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");

    let foreign = Request::builder()
        .uri("/api/projects")
        .header(header::ORIGIN, "https://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(foreign).await.unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
