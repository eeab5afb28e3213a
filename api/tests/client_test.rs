//! Integration tests for the API client wrapper.
//!
//! These tests exercise the full request pipeline against a local mock
//! server: channel selection → header injection → failure normalization →
//! body parsing.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use quill_api::{ApiClient, ApiConfig, ApiError, PostDraft, PostId, PostPatch, StaticToken};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    let config = ApiConfig::default()
        .with_base_url(format!("{}/api", server.uri()))
        .with_timeout(Duration::from_secs(2));
    ApiClient::new(config).expect("client should build")
}

fn client_with_token(server: &MockServer, token: &str) -> ApiClient {
    let config = ApiConfig::default()
        .with_base_url(format!("{}/api", server.uri()))
        .with_timeout(Duration::from_secs(2));
    ApiClient::with_token_provider(config, Arc::new(StaticToken::new(token)))
        .expect("client should build")
}

// ============================================================================
// Failure normalization
// ============================================================================

/// Any rejection with body `{"message":"X"}` must surface exactly `"X"`.
#[tokio::test]
async fn structured_error_body_becomes_the_bare_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
            "message": "X"
        })))
        .mount(&server)
        .await;

    let err = client_for(&server).posts().list(1).await.unwrap_err();

    assert!(matches!(err, ApiError::Api(_)));
    assert_eq!(err.to_string(), "X");
}

/// A non-JSON failure body keeps the status code and raw text.
#[tokio::test]
async fn unstructured_error_body_falls_back_to_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let err = client_for(&server).posts().list(1).await.unwrap_err();

    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, "bad gateway");
        },
        other => panic!("expected status error, got {other:?}"),
    }
}

/// Connection-level failures surface as a transport message.
#[tokio::test]
async fn unreachable_server_yields_transport_error() {
    // Port 9 (discard) is never listening locally
    let config = ApiConfig::default()
        .with_base_url("http://127.0.0.1:9/api")
        .with_timeout(Duration::from_millis(500));
    let client = ApiClient::new(config).expect("client should build");

    let err = client.posts().list(1).await.unwrap_err();

    assert!(matches!(err, ApiError::Transport(_)));
    assert!(!err.to_string().is_empty());
}

// ============================================================================
// Endpoints
// ============================================================================

#[tokio::test]
async fn list_parses_pagination_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [{ "id": "5", "content": "{}", "title": "five" }],
            "page": 2,
            "totalPages": 4
        })))
        .mount(&server)
        .await;

    let page = client_for(&server).posts().list(2).await.unwrap();

    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 4);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].id, PostId::from("5"));
}

#[tokio::test]
async fn create_sends_draft_and_returns_created_post() {
    let server = MockServer::start().await;

    let mut draft = PostDraft {
        content: "{\"blocks\":[]}".to_string(),
        ..Default::default()
    };
    draft
        .extra
        .insert("title".to_string(), serde_json::json!("hello"));

    Mock::given(method("POST"))
        .and(path("/api/posts"))
        .and(body_json(serde_json::json!({
            "content": "{\"blocks\":[]}",
            "title": "hello"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "id": "p-9",
            "content": "{\"blocks\":[]}",
            "title": "hello"
        })))
        .mount(&server)
        .await;

    let created = client_for(&server).posts().create(&draft).await.unwrap();

    assert_eq!(created.id, PostId::from("p-9"));
}

#[tokio::test]
async fn update_patches_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/api/posts/p-3"))
        .and(body_json(serde_json::json!({ "content": "new" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "p-3",
            "content": "new"
        })))
        .mount(&server)
        .await;

    let patch = PostPatch {
        content: Some("new".to_string()),
        ..Default::default()
    };

    let updated = client_for(&server)
        .posts()
        .update(&PostId::from("p-3"), &patch)
        .await
        .unwrap();

    assert_eq!(updated.content, "new");
}

#[tokio::test]
async fn get_unwraps_the_post_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts/p-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "post": { "id": "p-1", "content": "{\"blocks\":[1]}" }
        })))
        .mount(&server)
        .await;

    let post = client_for(&server)
        .posts()
        .get(&PostId::from("p-1"))
        .await
        .unwrap();

    assert_eq!(post.id, PostId::from("p-1"));
    assert_eq!(post.content, "{\"blocks\":[1]}");
}

#[tokio::test]
async fn delete_accepts_an_empty_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/posts/p-2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client_for(&server)
        .posts()
        .delete(&PostId::from("p-2"))
        .await
        .unwrap();
}

// ============================================================================
// Private channel authorization
// ============================================================================

/// With a provider, mutations carry the token as the `authorization` header.
#[tokio::test]
async fn private_channel_attaches_authorization_header() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/posts/p-8"))
        .and(header("authorization", "Bearer tkn"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_with_token(&server, "Bearer tkn")
        .posts()
        .delete(&PostId::from("p-8"))
        .await
        .unwrap();
}

/// Without a provider, the header is omitted entirely.
#[tokio::test]
async fn private_channel_omits_header_without_provider() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/posts/p-8"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    client_for(&server)
        .posts()
        .delete(&PostId::from("p-8"))
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

/// Reads go out on the public channel: no authorization header even when
/// a token provider is configured.
#[tokio::test]
async fn public_channel_never_sends_the_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [],
            "page": 1,
            "totalPages": 1
        })))
        .mount(&server)
        .await;

    client_with_token(&server, "Bearer tkn")
        .posts()
        .list(1)
        .await
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}
