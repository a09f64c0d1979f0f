use ipnt_directory::{NodeFilter, Snapshot};
use ipnt_domain::models::Document;
use ipnt_pages::views::{ContactView, HomeView, MembersView, NodesView};
use ipnt_pages::{Page, Renderer};
use serde_json::{Value, json};

fn doc(value: Value) -> Document {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn snapshot() -> Snapshot {
    Snapshot::from_documents(
        doc(json!({
            "siteName": "Ipswich Mesh",
            "contact": { "email": "hello@ipnt.uk" }
        })),
        &doc(json!({ "nodes": [
            { "id": "rep01.ip3.ipnt.uk", "name": "Town Hall", "hardware": "Heltec V3",
              "meshRole": "repeater", "memberId": "m1", "location": { "lat": 52.0, "lng": 1.0 } },
            { "id": "sec01.ip3.ipnt.uk", "name": "Secret Bunker", "isPublic": false },
            { "id": "cli01.ip4.ipnt.uk", "name": "Dock <Client>", "meshRole": "client" }
        ] })),
        &doc(json!({ "members": [ { "id": "m1", "name": "Alice" } ] })),
    )
}

fn renderer() -> Renderer {
    Renderer::new().expect("bundled templates compile")
}

#[test]
fn home_page_shows_stats() {
    let snapshot = snapshot();
    let html = renderer().render(Page::Home, &HomeView::new(&snapshot)).expect("render");

    assert!(html.contains("<title>Ipswich Mesh</title>"));
    assert!(html.contains(r#"<span class="value" id="total-nodes">2</span>"#));
    assert!(html.contains(r#"<span class="value" id="total-members">1</span>"#));
    assert!(html.contains(r#"<span class="value" id="coverage-area">50</span>"#));
    assert!(!html.contains("Secret Bunker"));
}

#[test]
fn home_page_renders_without_any_data() {
    let snapshot = Snapshot::default();
    let html = renderer().render(Page::Home, &HomeView::new(&snapshot)).expect("render");

    assert!(html.contains("<title>IPNT</title>"));
    assert!(html.contains(r#"id="total-members">0</span>"#));
}

#[test]
fn node_listing_escapes_names_and_embeds_safe_json() {
    let snapshot = snapshot();
    let filter = NodeFilter::default();
    let html = renderer()
        .render(Page::Nodes, &NodesView::new(&snapshot, &filter, None))
        .expect("render");

    assert!(html.contains("Dock &lt;Client&gt;"));
    assert!(html.contains(r#"<a href="/nodes/ip3/rep01">Town Hall</a>"#));
    assert!(html.contains(r"Dock \u003cClient\u003e"));
    assert!(!html.contains("Dock <Client>"));
    assert!(!html.contains("node-detail"));
}

#[test]
fn node_detail_panel_lists_owner() {
    let snapshot = snapshot();
    let filter = NodeFilter::default();
    let current = snapshot.find_node("ip3", "rep01", "ipnt.uk");
    let html = renderer()
        .render(Page::Nodes, &NodesView::new(&snapshot, &filter, current))
        .expect("render");

    assert!(html.contains(r#"id="node-detail""#));
    assert!(html.contains("<dd>Alice</dd>"));
    assert!(html.contains("<dd>52.0, 1.0</dd>"));
}

#[test]
fn active_filter_marks_selected_option() {
    let snapshot = snapshot();
    let filter = NodeFilter { role: Some("client".to_owned()), ..NodeFilter::default() };
    let html = renderer()
        .render(Page::Nodes, &NodesView::new(&snapshot, &filter, None))
        .expect("render");

    assert!(html.contains(r#"<option value="client" selected>client</option>"#));
    assert!(html.contains(r#"<span id="shown-count">1</span>"#));
    assert!(html.contains(r#"<a href="/nodes/">Clear</a>"#));
}

#[test]
fn members_page_counts_nodes() {
    let snapshot = snapshot();
    let html = renderer().render(Page::Members, &MembersView::new(&snapshot)).expect("render");

    assert!(html.contains("<strong>Alice</strong>"));
    assert!(html.contains(r#"data-member="m1">1 nodes</span>"#));
    assert!(html.contains(r#"<a href="/nodes/?owner=m1">View nodes</a>"#));
}

#[test]
fn contact_page_uses_config_only() {
    let snapshot = snapshot();
    let html = renderer().render(Page::Contact, &ContactView::new(&snapshot)).expect("render");

    assert!(html.contains("mailto:hello@ipnt.uk"));
    assert!(!html.contains("Town Hall"));
}
