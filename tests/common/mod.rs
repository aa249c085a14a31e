//! Shared helpers for database-backed integration tests.
//!
//! These tests need a disposable PostgreSQL database named by
//! `LIBRARY_TEST_DATABASE_URL`; run them with `cargo test -- --ignored`.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use library_api::{AppState, build_app};
use library_core::config::{AppConfig, AuthConfig, DatabaseConfig};
use library_database::DatabasePool;
use library_database::repositories::UserRepository;
use library_entity::user::{UpdateUser, UserRole};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: DatabasePool,
}

/// Test response with status and parsed JSON body
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    /// Connects, migrates, and empties the test database.
    pub async fn new() -> Self {
        let url = std::env::var("LIBRARY_TEST_DATABASE_URL")
            .expect("LIBRARY_TEST_DATABASE_URL must point at a disposable database");

        let config = AppConfig {
            database: DatabaseConfig {
                url,
                max_connections: 4,
                min_connections: 0,
                ..DatabaseConfig::default()
            },
            auth: AuthConfig {
                jwt_secret: "integration-secret".to_string(),
                hash_memory_kib: 1024,
                hash_iterations: 1,
                hash_parallelism: 1,
                ..AuthConfig::default()
            },
            ..AppConfig::default()
        };

        let db_pool = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");
        library_database::migration::run_migrations(db_pool.pool())
            .await
            .expect("Failed to run migrations");
        Self::clean_database(&db_pool).await;

        let state = AppState::new(config, db_pool.clone()).expect("Failed to build state");
        Self {
            router: build_app(state),
            db_pool,
        }
    }

    async fn clean_database(pool: &DatabasePool) {
        sqlx::query("TRUNCATE books, authors, users RESTART IDENTITY CASCADE")
            .execute(pool.pool())
            .await
            .expect("Failed to clean database");
    }

    /// Sends a JSON request, optionally with a bearer token.
    pub async fn request(
        &self,
        method: &str,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        TestResponse { status, body }
    }

    /// Registers a user through the API and returns a token for them.
    ///
    /// Admins are promoted directly in the database before signing in.
    pub async fn login_as(&self, username: &str, role: UserRole) -> String {
        let email = format!("{username}@example.com");
        let response = self
            .request(
                "POST",
                "/auth/sign-up",
                Some(json!({ "username": username, "email": email, "password": "secret1" })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);

        if role == UserRole::Admin {
            let repo = UserRepository::new(self.db_pool.pool().clone());
            let user = repo.find_by_username(username).await.unwrap().unwrap();
            repo.update(
                user.id,
                &UpdateUser {
                    username: user.username,
                    email: user.email,
                    role,
                },
            )
            .await
            .unwrap();
        }

        let response = self
            .request(
                "POST",
                "/auth/sign-in",
                Some(json!({ "username": username, "password": "secret1" })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response.body["data"]["access_token"]
            .as_str()
            .unwrap()
            .to_string()
    }
}
