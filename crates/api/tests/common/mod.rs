#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use coachhub_api::auth::jwt::{generate_access_token, JwtConfig};
use coachhub_api::auth::password::hash_password;
use coachhub_api::cache::ResponseCache;
use coachhub_api::config::ServerConfig;
use coachhub_api::router::build_app_router;
use coachhub_api::state::AppState;
use coachhub_core::roles::ROLE_ADMIN;
use coachhub_db::models::admin::AdminCredentials;
use coachhub_db::repositories::AdminRepo;
use coachhub_messaging::{MessageGateway, MessagingConfig};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        cache_ttl_secs: 300,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hs256".to_string(),
            expiry_mins: 60,
        },
    }
}

fn build_state(
    pool: PgPool,
    config: &ServerConfig,
    messaging: Option<MessagingConfig>,
) -> AppState {
    AppState {
        pool,
        config: Arc::new(config.clone()),
        cache: Arc::new(ResponseCache::new(Duration::from_secs(
            config.cache_ttl_secs,
        ))),
        messaging: messaging.map(|c| Arc::new(MessageGateway::new(c).unwrap())),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and no messaging gateway.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    build_app_router(build_state(pool, &config, None), &config)
}

/// Same as [`build_test_app`] but with a messaging gateway pointed at
/// `messaging`'s webhooks.
pub fn build_test_app_with_messaging(pool: PgPool, messaging: MessagingConfig) -> Router {
    let config = test_config();
    build_app_router(build_state(pool, &config, Some(messaging)), &config)
}

/// Seed the admin account and return a valid bearer token for it.
pub async fn admin_token(pool: &PgPool) -> String {
    let admin = AdminRepo::upsert(
        pool,
        &AdminCredentials {
            username: TEST_ADMIN_USERNAME.to_string(),
            password_hash: hash_password(TEST_ADMIN_PASSWORD).unwrap(),
        },
    )
    .await
    .expect("admin seed should succeed");
    generate_access_token(admin.id, ROLE_ADMIN, &test_config().jwt).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn send_delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None, None).await
}
