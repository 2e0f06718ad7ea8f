//! HTTP-backed collaborator clients.
//!
//! One client per external service, each holding the `host:port`
//! authority of its endpoint and speaking the service's JSON-over-HTTP
//! surface via [`crate::rest::api_request`].

use async_trait::async_trait;
use hyper::Method;
use serde::Deserialize;

use strato_core::{NetworkId, NetworkRecord, SubnetId, UserIdentity};

use crate::api::{IdentityProvider, NetworkAttribute, NetworkProvisioner, RecordStore};
use crate::rest::api_request;
use crate::CloudError;

// ── Network provisioning ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CreateNetworkResponse {
    network_id: String,
}

#[derive(Debug, Deserialize)]
struct CreateSubnetResponse {
    subnet_id: String,
}

/// Client for the network provisioning API.
#[derive(Debug, Clone)]
pub struct HttpNetworkProvisioner {
    /// `host:port` of the provisioning endpoint.
    endpoint: String,
}

impl HttpNetworkProvisioner {
    /// Create a client for the given `host:port` endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    /// Create a client pointing at the default local endpoint.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new("127.0.0.1:7401")
    }
}

#[async_trait]
impl NetworkProvisioner for HttpNetworkProvisioner {
    async fn create_network(&self, cidr_block: &str) -> Result<NetworkId, CloudError> {
        let body = serde_json::json!({ "cidr_block": cidr_block });
        let resp = api_request(
            &self.endpoint,
            Method::POST,
            "/networks",
            None,
            Some(body.to_string()),
        )
        .await?;

        let parsed: CreateNetworkResponse =
            serde_json::from_str(&resp).map_err(|e| CloudError::UnexpectedResponse {
                endpoint: format!("{}/networks", self.endpoint),
                reason: e.to_string(),
            })?;

        tracing::info!(network_id = %parsed.network_id, "network created");
        Ok(NetworkId::new(parsed.network_id))
    }

    async fn set_attribute(
        &self,
        network: &NetworkId,
        attribute: NetworkAttribute,
    ) -> Result<(), CloudError> {
        let body = serde_json::json!({
            "attribute": attribute.as_str(),
            "value": true,
        });
        api_request(
            &self.endpoint,
            Method::PUT,
            &format!("/networks/{network}/attributes"),
            None,
            Some(body.to_string()),
        )
        .await?;
        Ok(())
    }

    async fn create_subnet(
        &self,
        network: &NetworkId,
        cidr_block: &str,
    ) -> Result<SubnetId, CloudError> {
        let body = serde_json::json!({ "cidr_block": cidr_block });
        let resp = api_request(
            &self.endpoint,
            Method::POST,
            &format!("/networks/{network}/subnets"),
            None,
            Some(body.to_string()),
        )
        .await?;

        let parsed: CreateSubnetResponse =
            serde_json::from_str(&resp).map_err(|e| CloudError::UnexpectedResponse {
                endpoint: format!("{}/networks/{network}/subnets", self.endpoint),
                reason: e.to_string(),
            })?;

        Ok(SubnetId::new(parsed.subnet_id))
    }
}

// ── Record store ─────────────────────────────────────────────────────────────

/// Client for the managed record table.
#[derive(Debug, Clone)]
pub struct HttpRecordStore {
    /// `host:port` of the table endpoint.
    endpoint: String,
}

impl HttpRecordStore {
    /// Create a client for the given `host:port` endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    /// Create a client pointing at the default local endpoint.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new("127.0.0.1:7402")
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn put(&self, record: NetworkRecord) -> Result<(), CloudError> {
        let body = serde_json::to_string(&record)
            .map_err(|e| CloudError::Api(format!("encode record: {e}")))?;
        api_request(
            &self.endpoint,
            Method::PUT,
            &format!("/records/{}", record.id),
            None,
            Some(body),
        )
        .await?;
        Ok(())
    }

    /// Scan issues a single request; if the backing table pages its
    /// results, only the first page is returned.
    async fn scan(&self) -> Result<Vec<NetworkRecord>, CloudError> {
        let resp = api_request(&self.endpoint, Method::GET, "/records", None, None).await?;

        serde_json::from_str(&resp).map_err(|e| CloudError::UnexpectedResponse {
            endpoint: format!("{}/records", self.endpoint),
            reason: e.to_string(),
        })
    }
}

// ── Identity provider ────────────────────────────────────────────────────────

/// Client for the identity provider.
#[derive(Debug, Clone)]
pub struct HttpIdentityProvider {
    /// `host:port` of the identity endpoint.
    endpoint: String,
}

impl HttpIdentityProvider {
    /// Create a client for the given `host:port` endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    /// Create a client pointing at the default local endpoint.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new("127.0.0.1:7403")
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn resolve_user(
        &self,
        access_token: Option<&str>,
    ) -> Result<UserIdentity, CloudError> {
        let token = access_token.ok_or(CloudError::MissingToken)?;

        // Any failure to resolve the token, transport included, is a
        // rejection from the caller's point of view.
        let resp = api_request(&self.endpoint, Method::GET, "/user", Some(token), None)
            .await
            .map_err(|e| CloudError::TokenRejected { reason: e.to_string() })?;

        serde_json::from_str(&resp).map_err(|e| CloudError::UnexpectedResponse {
            endpoint: format!("{}/user", self.endpoint),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolve_user_without_token_is_rejected_client_side() {
        // No request must be issued: the endpoint is unroutable and the
        // call still has to fail fast with MissingToken.
        let provider = HttpIdentityProvider::new("192.0.2.1:1");
        let result = provider.resolve_user(None).await;
        assert!(
            matches!(result, Err(CloudError::MissingToken)),
            "absent token must be rejected by the client itself"
        );
    }
}
