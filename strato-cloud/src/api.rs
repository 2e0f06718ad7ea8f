//! Collaborator service abstractions.
//!
//! The gateway talks to three external managed services: a network
//! provisioning API, a record store, and an identity provider. Each is
//! behind a trait so handlers can be wired against substitutable
//! implementations.

use async_trait::async_trait;

use strato_core::{NetworkId, NetworkRecord, SubnetId, UserIdentity};

use crate::CloudError;

/// Network attributes that can be enabled on a provisioned network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum NetworkAttribute {
    /// DNS resolution support within the network.
    DnsSupport,
    /// DNS hostname assignment for instances in the network.
    DnsHostnames,
}

impl NetworkAttribute {
    /// Wire name of the attribute, as the provisioning API expects it.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DnsSupport => "dns_support",
            Self::DnsHostnames => "dns_hostnames",
        }
    }
}

/// Virtual network provisioning API.
///
/// Implementations must be `Send + Sync` to allow use across async tasks.
/// Calls block until the service responds or errors; there is no retry
/// or rollback layer above them.
#[async_trait]
pub trait NetworkProvisioner: Send + Sync {
    /// Create a network spanning the given address block.
    ///
    /// # Errors
    /// Returns [`CloudError::Api`] if the provisioning call fails.
    async fn create_network(&self, cidr_block: &str) -> Result<NetworkId, CloudError>;

    /// Enable an attribute on an existing network.
    ///
    /// # Errors
    /// Returns [`CloudError::Api`] if the provisioning call fails.
    async fn set_attribute(
        &self,
        network: &NetworkId,
        attribute: NetworkAttribute,
    ) -> Result<(), CloudError>;

    /// Create a subnet within an existing network.
    ///
    /// # Errors
    /// Returns [`CloudError::Api`] if the provisioning call fails.
    async fn create_subnet(
        &self,
        network: &NetworkId,
        cidr_block: &str,
    ) -> Result<SubnetId, CloudError>;
}

/// Key-value table holding provisioning records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persist a record. Records are write-once; `put` is never called
    /// twice for the same [`strato_core::RecordId`].
    ///
    /// # Errors
    /// Returns [`CloudError::Api`] if the store call fails.
    async fn put(&self, record: NetworkRecord) -> Result<(), CloudError>;

    /// Retrieve all records via a full scan.
    ///
    /// # Errors
    /// Returns [`CloudError::Api`] if the store call fails.
    async fn scan(&self) -> Result<Vec<NetworkRecord>, CloudError>;
}

/// Identity provider resolving access tokens to users.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve an access token to the user it belongs to.
    ///
    /// The token is forwarded verbatim; callers perform no scheme or
    /// format validation. An absent token is still forwarded and is
    /// rejected by the client itself.
    ///
    /// # Errors
    /// Returns [`CloudError::MissingToken`] if `access_token` is `None`.
    /// Returns [`CloudError::TokenRejected`] if the provider does not
    /// accept the token.
    async fn resolve_user(&self, access_token: Option<&str>)
        -> Result<UserIdentity, CloudError>;
}
