//! Provisioning record — the unit persisted to the record store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{NetworkId, RecordId, SubnetId};

/// Record of one successful network provisioning call.
///
/// Created once per provisioning call and never mutated afterwards;
/// deletion is out of scope. `subnet_ids` holds exactly as many entries
/// as subnets were requested, in creation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct NetworkRecord {
    /// Unique identifier for this record.
    pub id: RecordId,

    /// The network assigned by the provisioning API.
    pub network_id: NetworkId,

    /// Subnets created within the network, in creation order.
    pub subnet_ids: Vec<SubnetId>,

    /// Timestamp when the record was created.
    pub created_at: DateTime<Utc>,
}

impl NetworkRecord {
    /// Create a record with a fresh [`RecordId`].
    #[must_use]
    pub fn new(network_id: NetworkId, subnet_ids: Vec<SubnetId>) -> Self {
        Self {
            id: RecordId::new(),
            network_id,
            subnet_ids,
            created_at: Utc::now(),
        }
    }
}
