/*!
 * # Marketplace API
 *
 * Backend for a marketplace catalog: sections, a two-level category tree,
 * and products carrying section-type-specific detail records. Writes are
 * restricted to admins; sessions start with a phone OTP login.
 */

pub mod auth;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod services;
pub mod tracing;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware,
    routing::{get, post, put},
    Extension, Router,
};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::auth::{AuthConfig, AuthRouterExt, AuthService, OtpStore};
use crate::config::AppConfig;
use crate::services::AppServices;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: AppConfig,
    pub services: AppServices,
    pub auth: Arc<AuthService>,
    pub otp: Arc<OtpStore>,
}

impl AppState {
    pub fn new(db: Arc<DatabaseConnection>, config: AppConfig) -> Self {
        let services = AppServices::new(db.clone());
        let auth = Arc::new(AuthService::new(AuthConfig::new(
            config.jwt_secret.clone(),
            Duration::from_secs(config.jwt_expiration as u64),
        )));
        let otp = Arc::new(OtpStore::new(
            Duration::from_secs(config.otp_ttl_secs),
            config.otp_max_attempts,
        ));

        Self {
            db,
            config,
            services,
            auth,
            otp,
        }
    }
}

fn section_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::sections::create_section))
        .route(
            "/:id",
            put(handlers::sections::update_section).delete(handlers::sections::delete_section),
        )
        .with_role("admin")
        .merge(
            Router::new()
                .route("/", get(handlers::sections::list_sections))
                .route("/:id", get(handlers::sections::get_section))
                .route("/slug/:slug", get(handlers::sections::get_section_by_slug)),
        )
}

fn category_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::categories::create_category))
        .route(
            "/:id",
            put(handlers::categories::update_category)
                .delete(handlers::categories::delete_category),
        )
        .with_role("admin")
        .merge(
            Router::new()
                .route("/", get(handlers::categories::list_categories))
                .route("/:id", get(handlers::categories::get_category))
                .route(
                    "/slug/:slug",
                    get(handlers::categories::get_category_by_slug),
                ),
        )
}

fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::products::create_product))
        .route(
            "/:id",
            put(handlers::products::update_product).delete(handlers::products::delete_product),
        )
        .with_role("admin")
        .merge(
            Router::new()
                .route("/", get(handlers::products::list_products))
                .route("/:id", get(handlers::products::get_product))
                .route("/slug/:slug", get(handlers::products::get_product_by_slug)),
        )
}

fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/onboard", post(handlers::auth::onboard))
        .route("/onboard-verify", post(handlers::auth::onboard_verify))
        .route("/me", get(handlers::auth::me))
        .route("/logout", post(handlers::auth::logout))
        .with_auth()
        .merge(
            Router::new()
                .route("/login", post(handlers::auth::login))
                .route("/verify-login", post(handlers::auth::verify_login)),
        )
}

fn build_cors(config: &AppConfig) -> CorsLayer {
    if config.should_allow_permissive_cors() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let mut cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            HeaderName::from_static(crate::tracing::REQUEST_ID_HEADER),
        ]);

    if config.cors_allow_credentials {
        cors = cors.allow_credentials(true);
    }

    cors
}

/// Assemble the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let api = Router::new()
        .nest("/section", section_routes())
        .nest("/category", category_routes())
        .nest("/product", product_routes());

    let cors = build_cors(&state.config);

    Router::new()
        .nest("/api/v1", api)
        .nest("/auth", auth_routes())
        .route("/health", get(handlers::health::health))
        .route("/status", get(handlers::health::status))
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
        )
        .layer(
            ServiceBuilder::new()
                .layer(Extension(state.auth.clone()))
                .layer(middleware::from_fn(crate::tracing::request_id_middleware))
                .layer(crate::tracing::configure_http_tracing())
                .layer(cors)
                .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permissive_cors_in_development() {
        let cfg = AppConfig::new(
            "sqlite::memory:".into(),
            "k9Qz3vXw7rT2mN8bL5cJ1hG4fD6sA0pE9uY3iR7oW2qM5xV8zK1nB4jH6gC3tF0d".into(),
            3600,
            "127.0.0.1".into(),
            8080,
            "development".into(),
        );
        assert!(cfg.should_allow_permissive_cors());
        // builds without panicking
        let _ = build_cors(&cfg);
    }

    #[test]
    fn restrictive_cors_with_origin_list() {
        let mut cfg = AppConfig::new(
            "sqlite::memory:".into(),
            "k9Qz3vXw7rT2mN8bL5cJ1hG4fD6sA0pE9uY3iR7oW2qM5xV8zK1nB4jH6gC3tF0d".into(),
            3600,
            "127.0.0.1".into(),
            8080,
            "production".into(),
        );
        cfg.cors_allowed_origins = Some("https://admin.example.com".into());
        let _ = build_cors(&cfg);
    }
}
