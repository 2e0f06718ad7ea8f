//! Core domain types for the Strato VPC provisioning gateway.
//!
//! Defines the fundamental types shared across the workspace: record and
//! resource identifiers, the persisted provisioning record, the resolved
//! user identity, and the subnet address-block derivation scheme.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod cidr;
pub mod id;
pub mod identity;
pub mod record;

pub use cidr::{subnet_cidr, DEFAULT_CIDR_BLOCK, DEFAULT_SUBNET_COUNT};
pub use id::{NetworkId, RecordId, SubnetId};
pub use identity::{UserAttribute, UserIdentity};
pub use record::NetworkRecord;

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn subnet_cidr_follows_third_octet_scheme() {
        assert_eq!(subnet_cidr(0), "10.0.0.0/24");
        assert_eq!(subnet_cidr(1), "10.0.1.0/24");
        assert_eq!(subnet_cidr(2), "10.0.2.0/24");
    }

    #[test]
    fn default_block_and_count_match_contract() {
        assert_eq!(DEFAULT_CIDR_BLOCK, "10.0.0.0/16");
        assert_eq!(DEFAULT_SUBNET_COUNT, 2);
    }

    #[test]
    fn record_id_display_is_uuid_format() {
        let id = RecordId::new();
        let s = id.to_string();
        assert_eq!(s.len(), 36, "hyphenated UUID must be 36 chars, got {s}");
        assert_eq!(s, id.as_uuid().to_string());
    }

    #[test]
    fn record_ids_are_unique_per_creation() {
        let a = RecordId::new();
        let b = RecordId::new();
        assert_ne!(a, b, "two freshly generated record IDs must differ");
    }

    #[test]
    fn network_record_new_assigns_fresh_id_and_keeps_subnet_order() {
        let subnets = vec![
            SubnetId::new("subnet-a"),
            SubnetId::new("subnet-b"),
            SubnetId::new("subnet-c"),
        ];
        let record = NetworkRecord::new(NetworkId::new("vpc-123"), subnets.clone());

        assert_eq!(record.network_id.as_str(), "vpc-123");
        assert_eq!(record.subnet_ids, subnets, "subnet order must be preserved");

        let other = NetworkRecord::new(NetworkId::new("vpc-123"), Vec::new());
        assert_ne!(record.id, other.id, "each record must get its own ID");
    }

    #[test]
    fn network_record_serializes_all_fields() {
        let record = NetworkRecord::new(
            NetworkId::new("vpc-42"),
            vec![SubnetId::new("subnet-42")],
        );
        let json = match serde_json::to_value(&record) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json["network_id"], "vpc-42");
        assert_eq!(json["subnet_ids"][0], "subnet-42");
        assert!(json["id"].is_string(), "record id must serialize as a string");
        assert!(json["created_at"].is_string(), "created_at must serialize");
    }

    #[test]
    fn user_identity_round_trips_attributes() {
        let identity = UserIdentity::new(
            "alice",
            vec![UserAttribute::new("email", "alice@example.com")],
        );
        assert_eq!(identity.username, "alice");
        assert_eq!(identity.attributes[0].name, "email");
        assert_eq!(identity.attributes[0].value, "alice@example.com");
    }

    proptest! {
        #[test]
        fn subnet_cidr_always_24_with_index_as_third_octet(index in 0u32..=255) {
            let block = subnet_cidr(index);
            prop_assert!(block.starts_with("10.0."));
            prop_assert!(block.ends_with(".0/24"));
            let octet: u32 = block
                .trim_start_matches("10.0.")
                .trim_end_matches(".0/24")
                .parse()
                .expect("third octet must be numeric");
            prop_assert_eq!(octet, index);
        }
    }
}
