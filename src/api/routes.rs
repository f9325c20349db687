//! Router configuration for the API.
//!
//! This module provides centralized route registration and middleware
//! configuration for the application.

use std::time::Duration;

use axum::{
    Extension, Json, Router,
    http::{StatusCode, Uri},
    middleware,
};
use tower_http::timeout::TimeoutLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::dto::ErrorResponse;
use crate::api::handlers;
use crate::api::middleware::{RequestId, logging_middleware, request_id_middleware};
use crate::config::settings::ServerConfig;
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// # Middleware Order
/// Middleware is applied in reverse order of declaration (last added runs first):
/// 1. Request ID middleware (runs first) - generates/propagates request IDs
/// 2. Logging middleware (runs second) - logs requests with request IDs
/// 3. Timeout layer - aborts requests exceeding `server.request_timeout`
///
/// # Routes
/// - `GET /configuration` - Configuration snapshot
/// - `/swagger-ui`, `/api-docs/openapi.json` - API documentation
/// - Any other path - JSON 404 response
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    Router::new()
        .merge(handlers::configuration::configuration_routes())
        .fallback(not_found)
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Middleware is applied in reverse order - last added runs first
        // So logging runs after request_id has set the ID
        .layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout)))
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
}

/// Fallback handler for unknown paths.
async fn not_found(
    request_id: Option<Extension<RequestId>>,
    uri: Uri,
) -> (StatusCode, Json<ErrorResponse>) {
    let mut body = ErrorResponse::new("NOT_FOUND", &format!("No route for {}", uri.path()));
    if let Some(Extension(RequestId(id))) = request_id {
        body = body.with_request_id(&id);
    }
    (StatusCode::NOT_FOUND, Json(body))
}
