//! Release check tests against a mock GitHub API

use shelf_rpc::update::{is_newer, latest_version, CURRENT_VERSION};
use shelf_rpc::RpcError;
use wiremock::matchers::{header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RELEASE_PATH: &str = "/repos/shelf-rpc/shelf-rpc/releases/latest";

#[tokio::test]
async fn test_latest_version_strips_prefix() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(RELEASE_PATH))
        .and(header_exists("user-agent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tag_name": "v99.0.0",
            "name": "Shelf RPC 99"
        })))
        .mount(&mock_server)
        .await;

    let url = format!("{}{}", mock_server.uri(), RELEASE_PATH);
    let latest = latest_version(&reqwest::Client::new(), &url).await.unwrap();

    assert_eq!(latest, "99.0.0");
    assert!(is_newer(&latest, CURRENT_VERSION));
}

#[tokio::test]
async fn test_rate_limited_api_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(RELEASE_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_string("rate limited"))
        .mount(&mock_server)
        .await;

    let url = format!("{}{}", mock_server.uri(), RELEASE_PATH);
    let err = latest_version(&reqwest::Client::new(), &url)
        .await
        .unwrap_err();

    match err {
        RpcError::UpdateCheck(msg) => assert!(msg.contains("403")),
        e => panic!("Expected UpdateCheck error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_current_release_is_not_newer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(RELEASE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "tag_name": format!("v{}", CURRENT_VERSION)
        })))
        .mount(&mock_server)
        .await;

    let url = format!("{}{}", mock_server.uri(), RELEASE_PATH);
    let latest = latest_version(&reqwest::Client::new(), &url).await.unwrap();

    assert!(!is_newer(&latest, CURRENT_VERSION));
}
