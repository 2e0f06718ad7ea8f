//! Axum route handlers for the Strato gateway API.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use strato_cloud::NetworkAttribute;
use strato_core::{
    subnet_cidr, NetworkId, NetworkRecord, SubnetId, UserIdentity, DEFAULT_CIDR_BLOCK,
    DEFAULT_SUBNET_COUNT,
};

use crate::{error::GatewayError, state::AppState};

// ── Shared state ─────────────────────────────────────────────────────────────

type Gateway = Arc<AppState>;

// ── Request / response types ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateVpcBody {
    #[serde(default = "default_cidr_block")]
    pub cidr_block: String,
    #[serde(default = "default_subnet_count")]
    pub subnet_count: u32,
}

fn default_cidr_block() -> String {
    DEFAULT_CIDR_BLOCK.to_owned()
}

fn default_subnet_count() -> u32 {
    DEFAULT_SUBNET_COUNT
}

#[derive(Debug, Serialize)]
pub struct CreateVpcResponse {
    pub message: String,
    pub network_id: NetworkId,
    pub subnet_ids: Vec<SubnetId>,
}

#[derive(Debug, Serialize)]
pub struct AuthenticateResponse {
    pub message: String,
    pub user: UserIdentity,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router with the given collaborator handles.
pub fn create_router(state: Gateway) -> Router {
    Router::new()
        .route("/create-vpc", post(create_vpc))
        .route("/get-vpcs", get(get_vpcs))
        .route("/authenticate", post(authenticate))
        .route("/health", get(health))
        .fallback(route_not_found)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// Fallback for unknown routes. Reached without touching any
/// collaborator.
pub async fn route_not_found() -> GatewayError {
    GatewayError::RouteNotFound
}

/// `POST /create-vpc` — provision a network with subnets and persist a
/// record of it.
///
/// `cidr_block` defaults to `10.0.0.0/16` and `subnet_count` to 2.
/// Subnet blocks follow the fixed `10.0.{i}.0/24` scheme regardless of
/// the chosen `cidr_block`.
///
/// # Errors
/// Returns [`GatewayError::Provision`] or [`GatewayError::Store`] if any
/// of the external calls fail. A failure partway through leaves the
/// network and any subnets created so far in place; nothing is rolled
/// back.
pub async fn create_vpc(
    State(state): State<Gateway>,
    Json(body): Json<CreateVpcBody>,
) -> Result<impl IntoResponse, GatewayError> {
    let network_id = state
        .provisioner
        .create_network(&body.cidr_block)
        .await
        .map_err(GatewayError::Provision)?;

    // Two independent attribute calls; a failure on the second leaves
    // the first applied.
    state
        .provisioner
        .set_attribute(&network_id, NetworkAttribute::DnsSupport)
        .await
        .map_err(GatewayError::Provision)?;
    state
        .provisioner
        .set_attribute(&network_id, NetworkAttribute::DnsHostnames)
        .await
        .map_err(GatewayError::Provision)?;

    let mut subnet_ids = Vec::new();
    for i in 0..body.subnet_count {
        let subnet_id = state
            .provisioner
            .create_subnet(&network_id, &subnet_cidr(i))
            .await
            .map_err(GatewayError::Provision)?;
        subnet_ids.push(subnet_id);
    }

    let record = NetworkRecord::new(network_id.clone(), subnet_ids.clone());
    state.store.put(record).await.map_err(GatewayError::Store)?;

    tracing::info!(
        network_id = %network_id,
        subnets = subnet_ids.len(),
        "VPC created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateVpcResponse {
            message: "VPC created".to_owned(),
            network_id,
            subnet_ids,
        }),
    ))
}

/// `GET /get-vpcs` — return all persisted provisioning records.
///
/// # Errors
/// Returns [`GatewayError::Store`] if the scan fails.
pub async fn get_vpcs(
    State(state): State<Gateway>,
) -> Result<impl IntoResponse, GatewayError> {
    let records = state.store.scan().await.map_err(GatewayError::Store)?;
    Ok((StatusCode::OK, Json(records)))
}

/// `POST /authenticate` — resolve the bearer token in the
/// `Authorization` header to a user.
///
/// The header value is forwarded verbatim, absent included; the identity
/// client rejects an absent token itself.
///
/// # Errors
/// Returns [`GatewayError::Unauthorized`] for any identity failure,
/// missing header included.
pub async fn authenticate(
    State(state): State<Gateway>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, GatewayError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let user = state
        .identity
        .resolve_user(token)
        .await
        .map_err(GatewayError::Unauthorized)?;

    Ok((
        StatusCode::OK,
        Json(AuthenticateResponse {
            message: "User authenticated".to_owned(),
            user,
        }),
    ))
}
