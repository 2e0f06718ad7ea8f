//! Integration tests against live collaborator services.
//!
//! These exercise the HTTP clients end to end and require the
//! collaborator endpoints to be running locally on their default ports.

use strato_cloud::{
    HttpIdentityProvider, HttpNetworkProvisioner, HttpRecordStore, IdentityProvider,
    NetworkAttribute, NetworkProvisioner, RecordStore,
};
use strato_core::{subnet_cidr, NetworkRecord, DEFAULT_CIDR_BLOCK};

#[tokio::test]
#[ignore = "requires a network provisioning API at 127.0.0.1:7401"]
async fn provision_network_with_attributes_and_subnets() {
    let provisioner = HttpNetworkProvisioner::with_defaults();

    let network_id = provisioner
        .create_network(DEFAULT_CIDR_BLOCK)
        .await
        .expect("network creation should succeed");

    provisioner
        .set_attribute(&network_id, NetworkAttribute::DnsSupport)
        .await
        .expect("enabling DNS support should succeed");
    provisioner
        .set_attribute(&network_id, NetworkAttribute::DnsHostnames)
        .await
        .expect("enabling DNS hostnames should succeed");

    let subnet_id = provisioner
        .create_subnet(&network_id, &subnet_cidr(0))
        .await
        .expect("subnet creation should succeed");
    assert!(!subnet_id.as_str().is_empty(), "subnet ID must be non-empty");
}

#[tokio::test]
#[ignore = "requires a record table at 127.0.0.1:7402"]
async fn put_record_then_scan_finds_it() {
    let store = HttpRecordStore::with_defaults();

    let record = NetworkRecord::new(strato_core::NetworkId::new("vpc-itest"), Vec::new());
    let id = record.id;
    store.put(record).await.expect("put should succeed");

    let records = store.scan().await.expect("scan should succeed");
    assert!(
        records.iter().any(|r| r.id == id),
        "scan must include the record just written"
    );
}

#[tokio::test]
#[ignore = "requires an identity provider at 127.0.0.1:7403"]
async fn resolve_user_with_live_token() {
    let token = std::env::var("STRATO_TEST_TOKEN").expect("set STRATO_TEST_TOKEN");
    let provider = HttpIdentityProvider::with_defaults();

    let identity = provider
        .resolve_user(Some(&token))
        .await
        .expect("a valid token should resolve");
    assert!(!identity.username.is_empty(), "username must be non-empty");
}
