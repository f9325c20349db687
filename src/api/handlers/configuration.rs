//! Configuration snapshot endpoint handlers.
//!
//! This module exposes the process-wide configuration snapshot as read-only
//! JSON. The snapshot is loaded once at startup, so handlers here have no
//! error path: every request serializes the same immutable structure.

use crate::api::doc::CONFIGURATION_TAG;
use crate::api::dto::ConfigurationResponse;
use crate::state::AppState;
use axum::{Router, extract::State, response::Json, routing::get};

/// Creates configuration snapshot routes.
///
/// # Routes
/// - `GET /configuration` - Current configuration snapshot
pub fn configuration_routes() -> Router<AppState> {
    Router::new().route("/configuration", get(get_configuration))
}

/// Configuration snapshot endpoint.
///
/// Returns the JSON serialization of the configuration snapshot loaded at
/// startup. Repeated calls return identical bodies for the lifetime of the
/// process.
///
/// # Responses
/// - `200 OK` - The current configuration snapshot
#[utoipa::path(
    get,
    path = "/configuration",
    responses(
        (status = 200, description = "Current configuration snapshot", body = ConfigurationResponse)
    ),
    tag = CONFIGURATION_TAG
)]
pub async fn get_configuration(State(state): State<AppState>) -> Json<ConfigurationResponse> {
    Json(ConfigurationResponse::from(state.snapshot()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, CredentialsConfig, StorageConfig};
    use std::collections::BTreeMap;

    fn sample_state() -> AppState {
        AppState::new(AppConfig {
            port: 8080,
            credentials: CredentialsConfig {
                username: "svc".to_string(),
                secret: "abc".to_string(),
            },
            services: BTreeMap::from([(
                "billing".to_string(),
                "http://billing.internal:9000".to_string(),
            )]),
            storage: StorageConfig {
                url: "s3://storage.internal:9000".to_string(),
                bucket: "confview".to_string(),
            },
        })
    }

    #[tokio::test]
    async fn test_get_configuration_returns_snapshot() {
        let state = sample_state();
        let Json(response) = get_configuration(State(state.clone())).await;

        assert_eq!(response.port, 8080);
        assert_eq!(response.credentials.username, "svc");
        assert_eq!(response.credentials.secret, "abc");
        assert_eq!(
            response.services.get("billing").map(String::as_str),
            Some("http://billing.internal:9000")
        );
        assert_eq!(response.storage.bucket, "confview");
    }

    #[tokio::test]
    async fn test_get_configuration_is_idempotent() {
        let state = sample_state();
        let Json(first) = get_configuration(State(state.clone())).await;
        let Json(second) = get_configuration(State(state)).await;

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
