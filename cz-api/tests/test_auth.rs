//! Authentication gating: authenticated endpoints refuse to run without a
//! token, and public endpoints never send one.

mod common;

use cz_api::{Collection, Document, Media, Webhook};
use cz_core::error::{CzError, CzResult};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn every_authenticated_call_fails_without_token_and_sends_nothing() {
    let server = MockServer::start().await;
    common::expect_no_requests(&server).await;
    let client = common::public_client(&server);

    let dir = TempDir::new().unwrap();
    let upload = dir.path().join("logo.png");
    std::fs::write(&upload, b"png").unwrap();
    let download = dir.path().join("out.bin");

    let doc = Document::default();
    let col = Collection::new("posts", "Posts");
    let media = Media::with_alt_text("alt");
    let hook = Webhook::new("n", "https://example.com", ["document.created"], "POST");

    let results: Vec<(&str, CzResult<()>)> = vec![
        ("documents", client.documents("c1").await.map(drop)),
        ("create_document", client.create_document("c1", &doc).await.map(drop)),
        ("update_document", client.update_document("c1", "d1", &doc).await.map(drop)),
        ("delete_document", client.delete_document("c1", "d1").await),
        ("collections", client.collections().await.map(drop)),
        ("collection", client.collection("c1").await.map(drop)),
        ("create_collection", client.create_collection(&col).await.map(drop)),
        ("update_collection", client.update_collection("c1", &col).await.map(drop)),
        ("delete_collection", client.delete_collection("c1").await),
        ("collection_schema", client.collection_schema("c1").await.map(drop)),
        ("collection_fields", client.collection_fields("c1").await.map(drop)),
        ("field_types", client.field_types().await.map(drop)),
        ("media_list", client.media_list().await.map(drop)),
        ("upload_media", client.upload_media(&upload).await.map(drop)),
        ("media", client.media("m1").await.map(drop)),
        ("update_media", client.update_media("m1", &media).await.map(drop)),
        ("delete_media", client.delete_media("m1").await),
        ("download_media", client.download_media("m1", &download).await.map(drop)),
        ("webhooks", client.webhooks().await.map(drop)),
        ("create_webhook", client.create_webhook(&hook).await.map(drop)),
        ("update_webhook", client.update_webhook("w1", &hook).await.map(drop)),
        ("delete_webhook", client.delete_webhook("w1").await),
    ];

    for (name, result) in results {
        match result {
            Err(CzError::MissingCredential) => {}
            other => panic!("{name}: expected MissingCredential, got {other:?}"),
        }
    }

    assert_eq!(common::request_count(&server).await, 0);
    assert!(!download.exists(), "download must not create the file");
}

#[tokio::test]
async fn non_empty_token_is_sent_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collections"))
        .and(header("authorization", "Bearer  padded-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::client_with_token(&server, " padded-token");
    assert!(client.collections().await.unwrap().is_empty());
}

#[tokio::test]
async fn authenticated_calls_send_bearer_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collections"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::authed_client(&server);
    let cols = client.collections().await.unwrap();
    assert!(cols.is_empty());
}

#[tokio::test]
async fn public_calls_never_send_authorization() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/documents/collection/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/documents/collection/c1/d1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"uuid": "d1"})))
        .mount(&server)
        .await;

    // Even a client holding a token must not attach it.
    let client = common::authed_client(&server);
    client.public_documents("c1").await.unwrap();
    client.public_document("c1", "d1").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    for req in &requests {
        assert!(
            req.headers.get("authorization").is_none(),
            "public request to {} carried an Authorization header",
            req.url
        );
    }
}
