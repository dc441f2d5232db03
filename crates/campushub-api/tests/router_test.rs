//! Router-level tests for the HTTP surface.
//!
//! Every request here is answered before a database query would run:
//! validation failures, authentication-gate rejections, the fixed-
//! credential admin path, and the session cookie lifecycle. The pool is
//! created lazily and never connected.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;
use uuid::Uuid;

use campushub_api::app::{build_app, build_state};
use campushub_auth::jwt::TokenEncoder;
use campushub_core::config::app::ServerConfig;
use campushub_core::config::auth::AuthConfig;
use campushub_core::config::logging::LoggingConfig;
use campushub_core::config::storage::{LocalStorageConfig, StorageConfig};
use campushub_core::config::{AppConfig, DatabaseConfig};
use campushub_entity::principal::PrincipalRole;

fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: "router-test-secret".into(),
        admin_email: "admin@x.com".into(),
        admin_password: "hunter2".into(),
        ..AuthConfig::default()
    }
}

fn test_config() -> AppConfig {
    let blob_root = std::env::temp_dir().join(format!("campushub-router-test-{}", Uuid::new_v4()));

    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            url: "postgres://localhost:5432/campushub_test".into(),
            max_connections: 1,
            min_connections: 0,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        auth: test_auth_config(),
        storage: StorageConfig {
            local: LocalStorageConfig {
                root: blob_root.to_string_lossy().into_owned(),
                public_base_url: "http://localhost:5000/blobs".into(),
            },
            ..StorageConfig::default()
        },
        logging: LoggingConfig::default(),
    }
}

async fn test_app() -> Router {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect_lazy(&config.database.url)
        .expect("lazy pool");

    let state = build_state(config, pool).await.expect("state");
    build_app(state)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_is_public() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_profile_rejects_missing_and_malformed_tokens() {
    let app = test_app().await;

    let response = app.clone().oneshot(get("/api/profile/me")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/profile/me")
        .header(header::COOKIE, "token=not-a-jwt")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Not authenticated");
}

#[tokio::test]
async fn test_profile_rejects_expired_token() {
    let app = test_app().await;

    // Same secret, negative TTL: the token is already expired at issue.
    let expired_encoder = TokenEncoder::new(&AuthConfig {
        token_ttl_days: -1,
        ..test_auth_config()
    });
    let (token, _) = expired_encoder
        .issue(Uuid::new_v4(), PrincipalRole::Student)
        .unwrap();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/profile/me")
        .header(header::COOKIE, format!("token={token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upload_requires_authentication_before_reading_body() {
    let app = test_app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/resources/upload")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_login_rejects_bad_credentials() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(post_json(
            "/api/auth/admin/login",
            r#"{"email":"admin@x.com","password":"wrong"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Invalid credentials");

    // Missing fields are a validation failure, not an auth failure.
    let response = app
        .oneshot(post_json("/api/auth/admin/login", "{}"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_admin_login_sets_session_cookie() {
    let app = test_app().await;

    let response = app
        .oneshot(post_json(
            "/api/auth/admin/login",
            r#"{"email":"admin@x.com","password":"hunter2"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("session cookie set")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=None"));

    let body = body_json(response).await;
    assert_eq!(body["user"]["role"], "admin");
    assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn test_admin_token_passes_gate_without_store_lookup() {
    let app = test_app().await;

    let encoder = TokenEncoder::new(&test_auth_config());
    let (token, _) = encoder.issue(Uuid::nil(), PrincipalRole::Admin).unwrap();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/profile/me")
        .header(header::COOKIE, format!("token={token}"))
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["user"]["role"], "admin");
    assert_eq!(body["uploadedResources"], serde_json::json!([]));
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/auth/logout")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("clearing cookie set")
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("Max-Age=0"));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=None"));
}

#[tokio::test]
async fn test_listing_rejects_unknown_type_filter() {
    let app = test_app().await;

    let response = app
        .oneshot(get("/api/resources?type=video"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_student_signup_validates_required_fields() {
    let app = test_app().await;

    let boundary = "XTESTBOUNDARY";
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\nA\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"email\"\r\n\r\na@x.com\r\n\
         --{b}\r\nContent-Disposition: form-data; name=\"password\"\r\n\r\npw12345\r\n\
         --{b}--\r\n",
        b = boundary
    );

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/auth/student/signup")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["message"], "Required fields missing");
}
