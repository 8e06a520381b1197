//! Collection management and schema introspection.

mod common;

use cz_api::{Collection, CollectionField};
use cz_core::error::CzError;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

#[tokio::test]
async fn create_collection_roundtrips_through_echo() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/collections"))
        .respond_with(|req: &Request| {
            ResponseTemplate::new(201)
                .insert_header("content-type", "application/json")
                .set_body_bytes(req.body.clone())
        })
        .expect(1)
        .mount(&server)
        .await;

    let col = Collection::new("posts", "Posts")
        .with_description("Blog posts")
        .with_field(CollectionField::new("title", "text").required());

    let client = common::authed_client(&server);
    let created = client.create_collection(&col).await.unwrap();

    assert_eq!(created, col);
    assert_eq!(created.fields[0].name, "title");
    assert_eq!(created.fields[0].field_type, "text");
    assert!(created.fields[0].required);
}

#[tokio::test]
async fn create_collection_omits_unique_when_false() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"uuid": "c1"})))
        .mount(&server)
        .await;

    let col = Collection::new("posts", "Posts")
        .with_field(CollectionField::new("title", "text"))
        .with_field(CollectionField::new("slug", "text").unique());

    let client = common::authed_client(&server);
    client.create_collection(&col).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(sent["fields"][0].get("unique").is_none());
    assert_eq!(sent["fields"][1]["unique"], true);
    assert_eq!(sent["display_name"], "Posts");
    assert_eq!(sent["is_public"], false);
}

#[tokio::test]
async fn list_and_get_collections() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collections"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"uuid": "c1", "name": "posts", "display_name": "Posts", "description": "", "is_public": true, "fields": []},
            {"uuid": "c2", "name": "pages", "display_name": "Pages", "description": "", "is_public": false, "fields": null}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/collections/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": "c1", "name": "posts", "display_name": "Posts", "is_public": true,
            "fields": [{"name": "title", "type": "text", "display_name": "Title", "required": true, "unique": true}]
        })))
        .mount(&server)
        .await;

    let client = common::authed_client(&server);
    let cols = client.collections().await.unwrap();
    assert_eq!(cols.len(), 2);
    assert!(cols[0].is_public);
    assert!(cols[1].fields.is_empty());

    let col = client.collection("c1").await.unwrap();
    let title = col.field("title").unwrap();
    assert!(title.unique);
    assert_eq!(title.display_name, "Title");
}

#[tokio::test]
async fn update_and_delete_collection() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/collections/c1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "uuid": "c1", "name": "posts", "display_name": "Articles"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/collections/c1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = common::authed_client(&server);
    let updated = client
        .update_collection("c1", &Collection::new("posts", "Articles"))
        .await
        .unwrap();
    assert_eq!(updated.display_name, "Articles");
    client.delete_collection("c1").await.unwrap();
}

#[tokio::test]
async fn schema_is_an_open_ordered_mapping() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collections/c1/schema"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/json")
                .set_body_string(
                    r#"{"zeta":{"type":"text"},"alpha":[1,2],"version":3,"strict":true}"#,
                ),
        )
        .mount(&server)
        .await;

    let client = common::authed_client(&server);
    let schema = client.collection_schema("c1").await.unwrap();

    let keys: Vec<&str> = schema.keys().map(String::as_str).collect();
    assert_eq!(keys, ["zeta", "alpha", "version", "strict"]);
    assert_eq!(schema["zeta"]["type"], "text");
    assert_eq!(schema["version"], 3);
}

#[tokio::test]
async fn schema_must_be_an_object() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collections/c1/schema"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "a", "map"])))
        .mount(&server)
        .await;

    let client = common::authed_client(&server);
    let err = client.collection_schema("c1").await.unwrap_err();
    assert!(matches!(err, CzError::Serialization(_)));
}

#[tokio::test]
async fn fields_and_field_types() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/collections/c1/fields"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "title", "type": "text", "display_name": "Title", "required": true},
            {"name": "body", "type": "richtext", "display_name": "Body", "required": false}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/collections/field-types"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!(["text", "richtext", "number", "boolean", "media"])),
        )
        .mount(&server)
        .await;

    let client = common::authed_client(&server);
    let fields = client.collection_fields("c1").await.unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[1].field_type, "richtext");
    assert!(!fields[1].required);

    let types = client.field_types().await.unwrap();
    assert_eq!(types.len(), 5);
    assert!(types.iter().any(|t| t == "media"));
}
