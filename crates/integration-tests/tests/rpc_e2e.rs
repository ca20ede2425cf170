//! End-to-End RPC Tests
//!
//! Starts the JSON-RPC server on an ephemeral port and drives it through the SDK.

use std::sync::Arc;

use deskqueue_api_rpc::{RpcServer, RpcServerConfig, ServerHandle};
use deskqueue_core::port::time_provider::SystemTimeProvider;
use deskqueue_infra_memory::InMemoryQueueRepository;
use deskqueue_sdk::{DeskQueueClient, ServiceType};

async fn start_daemon() -> (DeskQueueClient, ServerHandle) {
    let config = RpcServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    let server = RpcServer::new(
        config,
        Arc::new(InMemoryQueueRepository::new()),
        Arc::new(SystemTimeProvider),
    );

    let (addr, handle) = server.start().await.unwrap();
    let client = DeskQueueClient::connect(format!("http://{}", addr))
        .await
        .unwrap();

    (client, handle)
}

fn names(clients: &[deskqueue_sdk::Client]) -> Vec<(&str, usize)> {
    clients
        .iter()
        .map(|c| (c.name.as_str(), c.position))
        .collect()
}

#[tokio::test]
async fn test_rpc_ana_bia_scenario() {
    let (client, handle) = start_daemon().await;

    assert!(client.list().await.unwrap().is_empty());

    let ana = client.append("Ana", ServiceType::Normal).await.unwrap();
    assert_eq!(ana.position, 0);
    assert!(!ana.served);

    let bia = client.append("Bia", ServiceType::Priority).await.unwrap();
    assert_eq!(bia.position, 1);
    assert_eq!(bia.service_type, ServiceType::Priority);
    assert!(bia.arrival_time >= ana.arrival_time);

    let clients = client.list().await.unwrap();
    assert_eq!(names(&clients), vec![("Ana", 0), ("Bia", 1)]);

    let advanced = client.advance().await.unwrap();
    assert_eq!(advanced.message, "Queue advanced successfully");
    assert_eq!(advanced.served.name, "Ana");
    assert!(advanced.served.served);

    let clients = client.list().await.unwrap();
    assert_eq!(names(&clients), vec![("Bia", 0)]);
    assert_eq!(client.get(0).await.unwrap().name, "Bia");

    let removed = client.remove(0).await.unwrap();
    assert_eq!(removed.position, 0);
    assert_eq!(removed.message, "Client at position 0 removed successfully");

    assert!(client.list().await.unwrap().is_empty());

    handle.stop().unwrap();
    handle.stopped().await;
}

#[tokio::test]
async fn test_rpc_error_kinds() {
    let (client, handle) = start_daemon().await;

    let err = client.advance().await.unwrap_err();
    assert!(err.is_not_found(), "got {:?}", err);

    let err = client.get(0).await.unwrap_err();
    assert!(err.is_not_found(), "got {:?}", err);

    let err = client.append("a".repeat(21), ServiceType::Normal).await.unwrap_err();
    assert!(err.is_invalid_argument(), "got {:?}", err);

    let err = client.append_raw("Ana", "X").await.unwrap_err();
    assert!(err.is_invalid_argument(), "got {:?}", err);

    client.append("Ana", ServiceType::Normal).await.unwrap();

    let err = client.remove(1).await.unwrap_err();
    assert!(err.is_not_found(), "got {:?}", err);

    let err = client.remove(-1).await.unwrap_err();
    assert!(err.is_not_found(), "got {:?}", err);

    assert_eq!(client.list().await.unwrap().len(), 1);

    handle.stop().unwrap();
    handle.stopped().await;
}

#[tokio::test]
async fn test_rpc_stats() {
    let (client, handle) = start_daemon().await;

    client.append("Ana", ServiceType::Normal).await.unwrap();
    client.append("Bia", ServiceType::Priority).await.unwrap();

    let stats = client.stats().await.unwrap();
    assert_eq!(stats.waiting, 2);
    assert_eq!(stats.normal_waiting, 1);
    assert_eq!(stats.priority_waiting, 1);

    handle.stop().unwrap();
    handle.stopped().await;
}
