/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - In-memory test database with the real migrations applied
/// - The full router under test
/// - Request/response helpers and registration shortcuts

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use sqlx::SqlitePool;
use taskflow_api::app::{build_router, AppState};
use taskflow_api::config::{ApiConfig, Config, DatabaseConfig, JwtConfig};
use taskflow_shared::db::migrations::run_migrations;
use taskflow_shared::db::pool;
use tower::Service as _;

/// Fixed secret so tests never depend on the environment
pub const TEST_JWT_SECRET: &str = "test-secret-key-at-least-32-bytes-long";

/// Test context containing the database and the router under test
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context with a fresh in-memory database
    pub async fn new() -> anyhow::Result<Self> {
        let config = Config {
            api: ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            jwt: JwtConfig {
                secret: TEST_JWT_SECRET.to_string(),
            },
        };

        // A single connection keeps the in-memory database alive and shared
        let db = pool::create_pool(pool::DatabaseConfig {
            url: config.database.url.clone(),
            max_connections: 1,
            ..Default::default()
        })
        .await?;

        run_migrations(&db).await?;

        let state = AppState::new(db.clone(), config);
        let app = build_router(state);

        Ok(TestContext { db, app })
    }

    /// Sends a JSON request through the router, returns status + parsed body
    pub async fn request(
        &mut self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.app.call(request).await.unwrap();
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };

        (status, value)
    }

    /// Registers a user and returns its (token, user_id)
    pub async fn register(&mut self, email: &str, password: &str) -> (String, i64) {
        let (status, body) = self
            .request(
                "POST",
                "/api/register",
                None,
                Some(json!({ "email": email, "password": password })),
            )
            .await;

        assert_eq!(status, StatusCode::OK, "register should succeed: {}", body);

        (
            body["token"].as_str().unwrap().to_string(),
            body["userId"].as_i64().unwrap(),
        )
    }

    /// Creates a group and returns its id
    pub async fn create_group(&mut self, token: &str, name: &str) -> i64 {
        let (status, body) = self
            .request(
                "POST",
                "/api/groups",
                Some(token),
                Some(json!({ "name": name })),
            )
            .await;

        assert_eq!(status, StatusCode::OK, "group create should succeed: {}", body);
        body["id"].as_i64().unwrap()
    }

    /// Creates a member and returns its id
    pub async fn create_member(&mut self, token: &str, group_id: i64, name: &str) -> i64 {
        let (status, body) = self
            .request(
                "POST",
                &format!("/api/groups/{}/members", group_id),
                Some(token),
                Some(json!({ "name": name })),
            )
            .await;

        assert_eq!(status, StatusCode::OK, "member create should succeed: {}", body);
        body["id"].as_i64().unwrap()
    }

    /// Creates a task and returns its id
    pub async fn create_task(&mut self, token: &str, member_id: i64, title: &str) -> i64 {
        let (status, body) = self
            .request(
                "POST",
                &format!("/api/members/{}/tasks", member_id),
                Some(token),
                Some(json!({ "title": title })),
            )
            .await;

        assert_eq!(status, StatusCode::OK, "task create should succeed: {}", body);
        body["id"].as_i64().unwrap()
    }
}
