use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use ipnt::domain::config::ApiConfig;
use ipnt_server::Server;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::{TempDir, tempdir};
use tower::ServiceExt;

const NODES: &str = r#"{ "nodes": [
    { "id": "rep01.ip3.ipnt.uk", "name": "Town Hall", "meshRole": "repeater", "memberId": "m1",
      "location": { "lat": 52.05, "lng": 1.15 } },
    { "id": "sec01.ip3.ipnt.uk", "name": "Secret Bunker", "isPublic": false },
    { "id": "cli01.ip4.ipnt.uk", "name": "Dockside", "meshRole": "client", "customField": [1, 2] }
] }"#;

fn data_dir() -> TempDir {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("config.json"), r#"{ "siteName": "Ipswich Mesh" }"#).expect("config");
    fs::write(dir.path().join("nodes.json"), NODES).expect("nodes");
    fs::write(
        dir.path().join("members.json"),
        r#"{ "members": [ { "id": "m1", "name": "Alice" }, { "id": "m2", "name": "Bob", "isPublic": false } ] }"#,
    )
    .expect("members");
    fs::create_dir(dir.path().join("public")).expect("public dir");
    fs::write(dir.path().join("public/site.css"), "body { margin: 0; }").expect("css");
    dir
}

fn server(dir: &Path) -> Server {
    let mut cfg = ApiConfig::default();
    cfg.storage.data_dir = dir.to_path_buf();
    cfg.storage.static_dir = dir.join("public");
    Server::builder().config(cfg).build().expect("server should build")
}

async fn get(server: &Server, uri: &str) -> (StatusCode, HeaderMap, String) {
    let request = Request::get(uri).body(Body::empty()).expect("request");
    let response = server.router().oneshot(request).await.expect("infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, headers, String::from_utf8(body.to_vec()).expect("utf-8"))
}

#[tokio::test]
async fn api_data_mirrors_public_entries() {
    let dir = data_dir();
    let (status, _, body) = get(&server(dir.path()), "/api/data").await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).expect("json");
    let object = json.as_object().expect("object");
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["config", "members", "nodes"]);

    assert_eq!(json["config"]["siteName"], "Ipswich Mesh");
    assert_eq!(json["nodes"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["members"].as_array().map(Vec::len), Some(1));
    assert_eq!(json["nodes"][1]["customField"], serde_json::json!([1, 2]));
    assert!(!body.contains("Secret Bunker"));
}

#[tokio::test]
async fn home_page_renders_without_members_file() {
    let dir = data_dir();
    fs::remove_file(dir.path().join("members.json")).expect("remove");

    let (status, headers, body) = get(&server(dir.path()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE].to_str().expect("ascii").starts_with("text/html"));
    assert!(body.contains(r#"id="total-nodes">2</span>"#));
    assert!(body.contains(r#"id="total-members">0</span>"#));
    assert!(body.contains(r#"id="coverage-area">50</span>"#));
}

#[tokio::test]
async fn short_link_redirects_permanently() {
    let dir = data_dir();
    let server = server(dir.path());

    let (status, headers, _) = get(&server, "/ip3/rep01").await;
    assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(headers[header::LOCATION], "/nodes/ip3/rep01");

    let (_, headers, _) = get(&server, "/ip3/odd%20name").await;
    assert_eq!(headers[header::LOCATION], "/nodes/ip3/odd%20name");
}

#[tokio::test]
async fn node_detail_resolves_short_identifier() {
    let dir = data_dir();
    let server = server(dir.path());

    let (status, _, body) = get(&server, "/nodes/ip3/rep01").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"id="node-detail""#));
    assert!(body.contains("<dd>Alice</dd>"));

    let (status, _, body) = get(&server, "/nodes/ip3/zzz").await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains(r#"id="node-detail""#));
    assert!(body.contains("Dockside"));
}

#[tokio::test]
async fn private_node_is_never_resolved() {
    let dir = data_dir();
    let (_, _, body) = get(&server(dir.path()), "/nodes/ip3/sec01").await;
    assert!(!body.contains("Secret Bunker"));
}

#[tokio::test]
async fn node_listing_applies_query_filter() {
    let dir = data_dir();
    let (status, _, body) = get(&server(dir.path()), "/nodes/?role=client").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"<span id="shown-count">1</span>"#));
    assert!(body.contains(r#"<span id="repeater-count">0</span>"#));
}

#[tokio::test]
async fn checkbox_switches_never_reject_the_page() {
    let dir = data_dir();
    let server = server(dir.path());

    for uri in ["/nodes/?online=1", "/nodes/?online", "/nodes/?online=on", "/nodes/?online=maybe"] {
        let (status, _, body) = get(&server, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert!(body.contains(r#"<span id="shown-count">2</span>"#), "{uri}");
    }

    let (status, _, body) = get(&server, "/nodes/ip3/rep01?testing=yes").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"id="node-detail""#));
}

#[tokio::test]
async fn section_paths_gain_a_trailing_slash() {
    let dir = data_dir();
    let server = server(dir.path());

    for (uri, location) in [
        ("/nodes", "/nodes/"),
        ("/members", "/members/"),
        ("/contact", "/contact/"),
        ("/nodes?role=client&online=1", "/nodes/?role=client&online=1"),
    ] {
        let (status, headers, _) = get(&server, uri).await;
        assert_eq!(status, StatusCode::MOVED_PERMANENTLY, "{uri}");
        assert_eq!(headers[header::LOCATION], location);
    }
}

#[tokio::test]
async fn members_and_contact_pages_render() {
    let dir = data_dir();
    let server = server(dir.path());

    let (status, _, body) = get(&server, "/members/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<strong>Alice</strong>"));
    assert!(!body.contains("Bob"));

    let (status, _, body) = get(&server, "/contact/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<title>Contact | Ipswich Mesh</title>"));
}

#[tokio::test]
async fn malformed_data_is_a_server_error() {
    let dir = data_dir();
    fs::write(dir.path().join("nodes.json"), "{ \"nodes\": [").expect("write");
    let server = server(dir.path());

    let (status, _, body) = get(&server, "/api/data").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body.contains("nodes.json"));

    let (status, _, _) = get(&server, "/").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_and_api_reference_are_served() {
    let dir = data_dir();
    let server = server(dir.path());

    let (status, headers, body) = get(&server, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CACHE_CONTROL], "no-store, no-cache, must-revalidate");
    let json: Value = serde_json::from_str(&body).expect("json");
    assert_eq!(json["status"], "up");

    let (status, _, body) = get(&server, "/api").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("/api/data") || body.contains("IPNT mesh site"));
}

#[tokio::test]
async fn static_assets_are_served_apart_from_data() {
    let dir = data_dir();
    let server = server(dir.path());

    let (status, _, body) = get(&server, "/assets/site.css").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("margin"));

    let (status, _, _) = get(&server, "/assets/nodes.json").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
