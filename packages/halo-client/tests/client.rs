use halo_client::{HaloClient, HaloError, PostRequest};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn post_json(name: &str, title: &str, slug: &str) -> serde_json::Value {
    json!({
        "apiVersion": "content.halo.run/v1alpha1",
        "kind": "Post",
        "metadata": { "name": name },
        "spec": {
            "title": title,
            "slug": slug,
            "deleted": false,
            "publish": false,
            "pinned": false,
            "allowComment": true,
            "visible": "PUBLIC",
            "priority": 0,
            "excerpt": { "autoGenerate": true, "raw": "" },
            "categories": [],
            "tags": [],
            "htmlMetas": []
        },
        "status": { "permalink": format!("/archives/{slug}") }
    })
}

fn content_json(raw: &str) -> serde_json::Value {
    json!({ "raw": raw, "content": format!("<p>{raw}</p>"), "rawType": "markdown" })
}

#[tokio::test]
async fn get_post_fetches_post_and_head_content_with_bearer_auth() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apis/content.halo.run/v1alpha1/posts/post-1"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json("post-1", "Hello", "hello")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/apis/api.console.halo.run/v1alpha1/posts/post-1/head-content"))
        .and(header("Authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(content_json("Hello world")))
        .expect(1)
        .mount(&server)
        .await;

    let client = HaloClient::new(server.uri(), "secret-token");
    let fetched = client.get_post("post-1").await.unwrap().unwrap();

    assert_eq!(fetched.post.metadata.name, "post-1");
    assert_eq!(fetched.post.spec.title, "Hello");
    assert_eq!(fetched.content.raw, "Hello world");
}

#[tokio::test]
async fn get_post_maps_404_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apis/content.halo.run/v1alpha1/posts/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = HaloClient::new(server.uri(), "secret-token");
    assert!(client.get_post("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn get_post_surfaces_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apis/content.halo.run/v1alpha1/posts/post-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let client = HaloClient::new(server.uri(), "secret-token");
    let err = client.get_post("post-1").await.unwrap_err();
    match err {
        HaloError::Api { status, ref message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn create_post_sends_combined_body_to_console_endpoint() {
    let server = MockServer::start().await;

    let mut params = PostRequest::default();
    params.post.metadata.name = "client-generated".to_string();
    params.post.spec.title = "Hello".to_string();
    params.content.raw = "# Hello".to_string();

    Mock::given(method("POST"))
        .and(path("/apis/api.console.halo.run/v1alpha1/posts"))
        .and(body_partial_json(json!({
            "post": { "metadata": { "name": "client-generated" }, "spec": { "title": "Hello" } },
            "content": { "raw": "# Hello", "rawType": "markdown" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(post_json("client-generated", "Hello", "hello")))
        .expect(1)
        .mount(&server)
        .await;

    let client = HaloClient::new(server.uri(), "secret-token");
    let created = client.create_post(&params).await.unwrap();
    assert_eq!(created.metadata.name, "client-generated");
}

#[tokio::test]
async fn list_and_create_taxonomies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apis/content.halo.run/v1alpha1/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 0,
            "size": 0,
            "total": 1,
            "items": [{
                "apiVersion": "content.halo.run/v1alpha1",
                "kind": "Category",
                "metadata": { "name": "category-abc" },
                "spec": { "displayName": "Tech", "slug": "tech", "priority": 0, "children": [] }
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/apis/content.halo.run/v1alpha1/tags"))
        .and(body_partial_json(json!({
            "metadata": { "generateName": "tag-" },
            "spec": { "displayName": "AI", "slug": "ai", "color": "#ffffff" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "apiVersion": "content.halo.run/v1alpha1",
            "kind": "Tag",
            "metadata": { "name": "tag-xyz" },
            "spec": { "displayName": "AI", "slug": "ai", "color": "#ffffff" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HaloClient::new(server.uri(), "secret-token");

    let categories = client.list_categories().await.unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0].spec.display_name, "Tech");

    let tag = halo_client::Tag::for_create("AI", "ai");
    let created = client.create_tag(&tag).await.unwrap();
    assert_eq!(created.metadata.name, "tag-xyz");
}

#[tokio::test]
async fn base_url_trailing_slashes_are_stripped() {
    let client = HaloClient::new("https://blog.example.com///", "t");
    assert_eq!(client.base_url(), "https://blog.example.com");
}
