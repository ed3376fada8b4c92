//! Integration tests for the Warden session client

#![cfg(feature = "client")]

use std::net::TcpListener;
use std::time::Duration;
use warden_core::{KeepAlive, KeepAliveOutcome};
use warden_http::{ClientError, SessionClient};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_client_builder() {
    let client = SessionClient::builder()
        .base_url("http://localhost:8080/")
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.base_url(), "http://localhost:8080");
    assert_eq!(client.keep_alive_path(), "/api/keep-alive");
}

#[tokio::test]
async fn test_client_builder_requires_base_url() {
    let result = SessionClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_client_builder_rejects_relative_path() {
    let result = SessionClient::builder()
        .base_url("http://localhost:8080")
        .keep_alive_path("api/keep-alive")
        .build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_keep_alive_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/keep-alive"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SessionClient::new(mock_server.uri()).unwrap();

    assert_eq!(client.ping().await, KeepAliveOutcome::Confirmed);
}

#[tokio::test]
async fn test_keep_alive_no_content_is_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/keep-alive"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = SessionClient::new(mock_server.uri()).unwrap();

    assert!(client.keep_alive().await.is_ok());
}

#[tokio::test]
async fn test_custom_keep_alive_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/session/ping"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SessionClient::builder()
        .base_url(mock_server.uri())
        .keep_alive_path("/session/ping")
        .build()
        .unwrap();

    assert_eq!(client.ping().await, KeepAliveOutcome::Confirmed);
}

#[tokio::test]
async fn test_unauthorized_is_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/keep-alive"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Session expired"))
        .mount(&mock_server)
        .await;

    let client = SessionClient::new(mock_server.uri()).unwrap();

    let result = client.keep_alive().await;
    assert!(matches!(result, Err(ClientError::Unauthorized(ref m)) if m == "Session expired"));
    assert_eq!(
        client.ping().await,
        KeepAliveOutcome::Rejected { status: 401 }
    );
}

#[tokio::test]
async fn test_server_error_is_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/keep-alive"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = SessionClient::new(mock_server.uri()).unwrap();

    assert_eq!(
        client.ping().await,
        KeepAliveOutcome::Rejected { status: 500 }
    );
}

#[tokio::test]
async fn test_redirect_to_login_is_rejection() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/keep-alive"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/login"))
        .mount(&mock_server)
        .await;
    Mock::given(path("/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = SessionClient::new(mock_server.uri()).unwrap();

    assert_eq!(
        client.ping().await,
        KeepAliveOutcome::Rejected { status: 302 }
    );
}

#[tokio::test]
async fn test_unreachable_server() {
    // Reserve a port, then release it so nothing is listening there.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = SessionClient::new(format!("http://127.0.0.1:{port}")).unwrap();

    let result = client.keep_alive().await;
    assert!(matches!(result, Err(ClientError::Request(_))));
    assert_eq!(client.ping().await, KeepAliveOutcome::Unreachable);
}

#[tokio::test]
async fn test_timeout_is_unreachable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/keep-alive"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = SessionClient::builder()
        .base_url(mock_server.uri())
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    assert!(matches!(
        client.keep_alive().await,
        Err(ClientError::Request(ref e)) if e.is_timeout()
    ));
    assert_eq!(client.ping().await, KeepAliveOutcome::Unreachable);
}

#[tokio::test]
async fn test_default_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/keep-alive"))
        .and(header("user-agent", "warden-client/0.1.0"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SessionClient::new(mock_server.uri()).unwrap();

    assert_eq!(client.ping().await, KeepAliveOutcome::Confirmed);
}

#[tokio::test]
async fn test_custom_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/keep-alive"))
        .and(header("user-agent", "portal-frontend/2.3"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = SessionClient::builder()
        .base_url(mock_server.uri())
        .user_agent("portal-frontend/2.3")
        .build()
        .unwrap();

    assert_eq!(client.ping().await, KeepAliveOutcome::Confirmed);
}
