#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{Duration, TimeZone, Utc};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use vidhub_api::auth::jwt::{generate_access_token, JwtConfig};
use vidhub_api::config::ServerConfig;
use vidhub_api::router::build_app_router;
use vidhub_api::state::AppState;
use vidhub_core::types::DbId;
use vidhub_db::models::user::CreateUser;
use vidhub_db::models::video::{CreateVideo, Video};
use vidhub_db::repositories::{UserRepo, VideoRepo};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the application router over `pool` with the production middleware stack.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// A seeded user and a valid bearer token for them.
pub struct TestUser {
    pub id: DbId,
    pub token: String,
}

pub async fn seed_user(pool: &PgPool, username: &str) -> TestUser {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            full_name: format!("{username} full"),
            avatar: None,
        },
    )
    .await
    .unwrap();
    let token = generate_access_token(user.id, &test_config().jwt).unwrap();
    TestUser { id: user.id, token }
}

/// Insert a published video with `created_at` pinned `minute` minutes after
/// a fixed epoch.
pub async fn seed_video(pool: &PgPool, owner_id: DbId, title: &str, minute: i64) -> Video {
    let video = VideoRepo::create(
        pool,
        &CreateVideo {
            owner_id,
            title: title.to_string(),
            description: format!("about {title}"),
            video_file: "https://cdn.example.com/v.mp4".to_string(),
            thumbnail: "https://cdn.example.com/t.jpg".to_string(),
            duration: 60.0,
        },
    )
    .await
    .unwrap();

    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let created_at = epoch + Duration::minutes(minute);
    sqlx::query("UPDATE videos SET created_at = $2 WHERE id = $1")
        .bind(video.id)
        .bind(created_at)
        .execute(pool)
        .await
        .unwrap();
    video
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
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

/// Unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn post_empty(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn patch_json(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn patch_empty(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(token), None).await
}

pub async fn delete(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// The `id` field of every element of `data`.
pub fn data_ids(json: &serde_json::Value) -> Vec<DbId> {
    json["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}
