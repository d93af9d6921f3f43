//! Integration tests for host-bridge against a local mock host.
//!
//! Run:
//!   cargo test -p host-bridge --test host_tests

use std::time::Duration;

use host_bridge::{HostConfig, HttpHostBridge};
use mockito::Server;
use panel_core::{ErrorKind, HostBridge};

fn bridge_for(server: &Server) -> HttpHostBridge {
    let config = HostConfig::new(server.url()).with_poll_interval(Duration::from_millis(10));
    HttpHostBridge::new(config).unwrap()
}

#[tokio::test]
async fn test_ticket_before_handshake_fails() {
    let server = Server::new_async().await;
    let bridge = bridge_for(&server);

    let err = bridge.ticket_data().await.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Host);
    assert!(err.message.contains("not initialized"));
}

#[tokio::test]
async fn test_handshake_then_ticket() {
    let mut server = Server::new_async().await;
    let handshake = server
        .mock("GET", "/handshake")
        .with_status(200)
        .create_async()
        .await;
    let ticket = server
        .mock("GET", "/ticket")
        .with_status(200)
        .with_body(
            r#"{
                "ticket.requester.email": "a@b.com",
                "ticket.subject": "<b>Help</b>",
                "ticket.description": "It broke"
            }"#,
        )
        .create_async()
        .await;

    let bridge = bridge_for(&server);
    bridge.handshake().await.unwrap();
    assert!(bridge.is_connected());

    let record = bridge.ticket_data().await.unwrap();
    handshake.assert_async().await;
    ticket.assert_async().await;

    assert_eq!(record.requester_email, "a@b.com");
    assert_eq!(record.subject, "<b>Help</b>");
    assert_eq!(record.description, "It broke");
}

#[tokio::test]
async fn test_missing_fields_default_to_empty() {
    let mut server = Server::new_async().await;
    let _handshake = server
        .mock("GET", "/handshake")
        .with_status(200)
        .create_async()
        .await;
    let _ticket = server
        .mock("GET", "/ticket")
        .with_status(200)
        .with_body(r#"{"ticket.subject": "Only subject", "ticket.description": null}"#)
        .create_async()
        .await;

    let bridge = bridge_for(&server);
    bridge.handshake().await.unwrap();
    let record = bridge.ticket_data().await.unwrap();

    assert_eq!(record.requester_email, "");
    assert_eq!(record.subject, "Only subject");
    assert_eq!(record.description, "");
}

#[tokio::test]
async fn test_ticket_fetch_failure_is_host_error() {
    let mut server = Server::new_async().await;
    let _handshake = server
        .mock("GET", "/handshake")
        .with_status(200)
        .create_async()
        .await;
    let _ticket = server
        .mock("GET", "/ticket")
        .with_status(500)
        .create_async()
        .await;

    let bridge = bridge_for(&server);
    bridge.handshake().await.unwrap();
    let err = bridge.ticket_data().await.unwrap_err();

    assert_eq!(err.kind, ErrorKind::Host);
    assert_eq!(
        err.message,
        "Failed to fetch ticket data: HTTP 500: Internal Server Error"
    );
}

#[tokio::test]
async fn test_handshake_keeps_polling_while_not_ready() {
    let mut server = Server::new_async().await;
    let _handshake = server
        .mock("GET", "/handshake")
        .with_status(503)
        .expect_at_least(2)
        .create_async()
        .await;

    let bridge = bridge_for(&server);
    let result = tokio::time::timeout(Duration::from_millis(200), bridge.handshake()).await;

    assert!(result.is_err(), "handshake should still be pending");
    assert!(!bridge.is_connected());
}
