//! Shared application state: collaborator handles injected at startup.

use std::sync::Arc;

use strato_cloud::{IdentityProvider, NetworkProvisioner, RecordStore};

/// Collaborator handles shared by every handler.
///
/// Handles are created once per process in `main` and injected here, so
/// handlers never reach for ambient globals and tests can substitute
/// fakes per collaborator.
pub struct AppState {
    /// The network provisioning API.
    pub provisioner: Arc<dyn NetworkProvisioner>,

    /// The record table.
    pub store: Arc<dyn RecordStore>,

    /// The identity provider.
    pub identity: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Bundle the three collaborator handles.
    #[must_use]
    pub fn new(
        provisioner: Arc<dyn NetworkProvisioner>,
        store: Arc<dyn RecordStore>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            provisioner,
            store,
            identity,
        }
    }
}
