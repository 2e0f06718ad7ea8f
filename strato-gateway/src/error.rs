//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use strato_cloud::CloudError;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The network provisioning API failed. Resources created before the
    /// failing call are left in place; there is no rollback.
    #[error("provisioning failed: {0}")]
    Provision(#[source] CloudError),

    /// The record store failed.
    #[error("record store failed: {0}")]
    Store(#[source] CloudError),

    /// The identity provider did not resolve the presented token.
    #[error("unauthorized: {0}")]
    Unauthorized(#[source] CloudError),

    /// The requested route is not one of the known routes.
    #[error("Route not found")]
    RouteNotFound,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            GatewayError::Provision(e) | GatewayError::Store(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": e.to_string()}),
            ),
            GatewayError::Unauthorized(e) => (
                StatusCode::UNAUTHORIZED,
                json!({"error": "Unauthorized", "details": e.to_string()}),
            ),
            GatewayError::RouteNotFound => {
                (StatusCode::NOT_FOUND, json!({"error": "Route not found"}))
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn gateway_error_status_codes_map_correctly() {
        let provision = GatewayError::Provision(CloudError::Api("boom".to_owned()));
        assert_eq!(
            provision.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let store = GatewayError::Store(CloudError::Api("boom".to_owned()));
        assert_eq!(
            store.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );

        let unauthorized = GatewayError::Unauthorized(CloudError::MissingToken);
        assert_eq!(
            unauthorized.into_response().status(),
            StatusCode::UNAUTHORIZED
        );

        let not_found = GatewayError::RouteNotFound;
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn gateway_error_display_includes_source_message() {
        let err = GatewayError::Provision(CloudError::Api("quota exceeded".to_owned()));
        let msg = err.to_string();
        assert!(
            msg.contains("quota exceeded"),
            "Display must include the source message, got {msg}"
        );
    }
}
