use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use marketplace_api::{
    auth::OtpPurpose,
    config::AppConfig,
    create_app, db,
    entities::user,
    AppState,
};

const TEST_JWT_SECRET: &str = "k9Qz3vXw7rT2mN8bL5cJ1hG4fD6sA0pE9uY3iR7oW2qM5xV8zK1nB4jH6gC3tF0d";

pub const ADMIN_PHONE: &str = "+15550000001";
pub const USER_PHONE: &str = "+15550009999";

/// Helper harness for spinning up an application backed by a throwaway
/// SQLite database file.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    db_file: String,
    admin_token: String,
}

impl TestApp {
    /// Construct a new test application with fresh database state.
    pub async fn new() -> Self {
        let db_file = format!("marketplace_test_{}.db", Uuid::new_v4().simple());

        let mut cfg = AppConfig::new(
            format!("sqlite://{db_file}?mode=rwc"),
            TEST_JWT_SECRET.to_string(),
            3600,
            "127.0.0.1".to_string(),
            18_080,
            "test".to_string(),
        );
        cfg.db_max_connections = 1;
        cfg.db_min_connections = 1;
        cfg.admin_phone_numbers = Some(ADMIN_PHONE.to_string());

        let pool = db::establish_connection_from_app_config(&cfg)
            .await
            .expect("failed to create test database");
        db::run_migrations(&pool)
            .await
            .expect("failed to run migrations in tests");

        let state = AppState::new(Arc::new(pool), cfg);
        let router = create_app(state.clone());

        let admin = state
            .services
            .users
            .get_or_create_by_phone(ADMIN_PHONE, &[ADMIN_PHONE.to_string()])
            .await
            .expect("seed admin user");
        let admin_token = state
            .auth
            .generate_token(&admin)
            .expect("issue admin token")
            .token;

        Self {
            router,
            state,
            db_file,
            admin_token,
        }
    }

    /// Bearer token for the seeded admin user.
    pub fn admin_token(&self) -> &str {
        &self.admin_token
    }

    /// Create a regular (non-admin) user and return a token for them.
    pub async fn user_token(&self) -> String {
        let user = self
            .state
            .services
            .users
            .get_or_create_by_phone(USER_PHONE, &[])
            .await
            .expect("seed regular user");
        self.state
            .auth
            .generate_token(&user)
            .expect("issue user token")
            .token
    }

    /// Seed a known OTP code for a destination, bypassing delivery.
    pub fn issue_otp(&self, purpose: OtpPurpose, destination: &str) -> String {
        self.state.otp.issue(purpose, destination)
    }

    pub async fn find_user_by_phone(&self, phone: &str) -> Option<user::Model> {
        self.state
            .services
            .users
            .find_by_phone(phone)
            .await
            .expect("user lookup")
    }

    /// Send a request against the router with an optional bearer token.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> axum::response::Response {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(tok) = token {
            builder = builder.header("authorization", format!("Bearer {}", tok));
        }

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        let request = builder.body(body).expect("failed to build request");
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request")
    }

    /// Convenience helper for admin-authenticated JSON requests.
    pub async fn request_as_admin(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> axum::response::Response {
        let token = self.admin_token.clone();
        self.request(method, uri, body, Some(&token)).await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_file);
    }
}

/// Read a response body as JSON.
pub async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body is not valid json")
}
