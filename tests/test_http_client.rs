use abz_client::application::models::{TokenResponse, UsersResponse};
use abz_client::config::Config;
use abz_client::error::AppError;
use abz_client::transport::http_client::{AbzHttpClient, AbzHttpClientImpl};
use mockito::{Matcher, Server};
use std::sync::Arc;
use tokio_test::block_on;

// Helper function to create a client pointing at the mock server
fn create_test_client(server_url: &str) -> AbzHttpClientImpl {
    let config = Arc::new(Config::with_base_url(server_url));
    AbzHttpClientImpl::new(config).expect("Failed to create HTTP client")
}

#[test]
fn test_get_token_success() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/token")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success":true,"token":"abc123"}"#)
        .create();

    let client = create_test_client(&server.url());
    let resp: TokenResponse =
        block_on(client.get("/token", &[])).expect("token call should succeed");

    assert!(resp.success);
    assert_eq!(resp.token, "abc123");
    mock.assert();
}

#[test]
fn test_path_without_leading_slash_is_normalized() {
    let mut server = Server::new();

    let mock = server
        .mock("GET", "/token")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(r#"{"success":true,"token":"xyz"}"#)
        .create();

    let client = create_test_client(&server.url());
    let resp: TokenResponse = block_on(client.get("token", &[])).expect("call should succeed");

    assert_eq!(resp.token, "xyz");
    mock.assert();
}

#[test]
fn test_non_success_status_maps_to_unexpected() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/users")
        .with_status(404)
        .with_body("not consulted")
        .create();

    let client = create_test_client(&server.url());
    let err = block_on(client.get::<UsersResponse>("/users", &[])).unwrap_err();

    assert!(err.to_string().contains("404"));
    match err {
        AppError::Unexpected(status) => assert_eq!(status.as_u16(), 404),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn test_server_error_status_maps_to_unexpected() {
    let mut server = Server::new();

    let _mock = server.mock("GET", "/positions").with_status(500).create();

    let client = create_test_client(&server.url());
    let err = block_on(client.get::<TokenResponse>("/positions", &[])).unwrap_err();

    assert!(err.to_string().contains("500"));
    match err {
        AppError::Unexpected(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn test_malformed_body_maps_to_json_error() {
    let mut server = Server::new();

    let _mock = server
        .mock("GET", "/token")
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body("{not valid json")
        .create();

    let client = create_test_client(&server.url());
    let err = block_on(client.get::<TokenResponse>("/token", &[])).unwrap_err();

    match err {
        AppError::Json(_) => (),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn test_duplicate_query_keys_last_write_wins() {
    let mut server = Server::new();

    // only page=2 must survive, and page keeps its first-seen position
    let mock = server
        .mock("GET", "/users")
        .match_query(Matcher::Exact("page=2&count=6".to_string()))
        .with_status(200)
        .with_header("Content-Type", "application/json")
        .with_body(
            r#"{"success":true,"users":[],"total_pages":0,"total_users":0,"count":0,
                "links":{"next_url":null,"prev_url":null}}"#,
        )
        .create();

    let client = create_test_client(&server.url());
    let params = vec![
        ("page".to_string(), "1".to_string()),
        ("count".to_string(), "6".to_string()),
        ("page".to_string(), "2".to_string()),
    ];
    let resp: UsersResponse =
        block_on(client.get("/users", &params)).expect("users call should succeed");

    assert!(resp.success);
    mock.assert();
}

#[test]
fn test_connection_failure_maps_to_network() {
    // nothing listens on the discard port
    let client = create_test_client("http://127.0.0.1:9");
    let err = block_on(client.get::<TokenResponse>("/token", &[])).unwrap_err();

    match err {
        AppError::Network(_) => (),
        other => panic!("Unexpected error: {other:?}"),
    }
}
