//! Descriptor identity across requests, clones, and concurrent tasks

use std::sync::Arc;

use fleet_api::clusters::DeleteClusterInput;
use fleet_api::testing::StubTransport;
use fleet_api::{Availability, FleetClient, OperationKind};
use serde_json::json;

fn stub_client() -> (Arc<StubTransport>, FleetClient) {
    let transport = Arc::new(StubTransport::new());
    let client = FleetClient::builder()
        .transport(transport.clone())
        .build()
        .expect("client with stub transport builds");
    (transport, client)
}

#[test]
fn test_registry_lists_every_operation_once() {
    let (_transport, client) = stub_client();

    assert_eq!(client.registry().len(), OperationKind::ALL.len());
    assert!(!client.registry().is_empty());
    for kind in OperationKind::ALL {
        let op = client.operation(kind);
        assert_eq!(op.kind, kind);
        assert_eq!(op.http_method, "POST");
        assert_eq!(op.http_path, "/");
    }

    let names: Vec<&str> = client.registry().iter().map(|op| op.name).collect();
    let mut deduped = names.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), names.len());
}

#[test]
fn test_descriptors_are_pointer_identical_across_requests() {
    let (_transport, client) = stub_client();
    let direct = client.operation(OperationKind::DeleteCluster);

    let first = client.delete_cluster_request(DeleteClusterInput {
        cluster: Some("default".to_string()),
    });
    let second = client.delete_cluster_request(DeleteClusterInput {
        cluster: Some("build-farm".to_string()),
    });

    assert!(std::ptr::eq(direct, first.operation()));
    assert!(std::ptr::eq(first.operation(), second.operation()));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_clones_observe_one_registry() {
    let (_transport, client) = stub_client();
    let baseline = client.operation(OperationKind::RunTask) as *const _ as usize;

    let mut handles = Vec::new();
    for _ in 0..128 {
        let clone = client.clone();
        handles.push(tokio::spawn(async move {
            clone.operation(OperationKind::RunTask) as *const _ as usize
        }));
    }

    for observed in futures::future::join_all(handles).await {
        assert_eq!(observed.expect("lookup task completes"), baseline);
    }
}

#[tokio::test]
async fn test_requests_only_touch_the_transport_on_send() {
    let (transport, client) = stub_client();

    let request = client.delete_cluster_request(DeleteClusterInput {
        cluster: Some("build-farm".to_string()),
    });
    assert!(transport.calls().is_empty());

    request.send().await.expect("empty reply decodes");
    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "DeleteCluster");
    assert_eq!(calls[0].1, json!({"cluster": "build-farm"}));
}

#[test]
fn test_only_deregister_task_definition_is_unverified() {
    let (_transport, client) = stub_client();
    assert_eq!(
        client
            .operation(OperationKind::DeregisterTaskDefinition)
            .availability,
        Availability::Unverified
    );

    let unverified: Vec<&str> = client
        .registry()
        .iter()
        .filter(|op| op.availability == Availability::Unverified)
        .map(|op| op.name)
        .collect();
    assert_eq!(unverified, vec!["DeregisterTaskDefinition"]);
}
