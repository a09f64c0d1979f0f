use ipnt_domain::config::{ApiConfig, LogConfig, ServerConfig, SiteConfig, StorageConfig};
use serde_json::json;
use std::path::PathBuf;

#[test]
fn config_defaults_are_sane() {
    let server = ServerConfig::default();
    assert_eq!(server.port, 5000);
    assert!(server.ssl.is_none());

    let storage = StorageConfig::default();
    assert_eq!(storage.data_dir, PathBuf::from("data"));
    assert_eq!(storage.static_dir, PathBuf::from("assets"));

    assert_eq!(SiteConfig::default().domain, "ipnt.uk");

    let log = LogConfig::default();
    assert_eq!(log.level, "info");
    assert!(log.dir.is_none());
}

#[test]
fn api_config_deserializes() {
    let raw = json!({
        "server": { "address": "::", "port": 8080 },
        "storage": { "data_dir": "/srv/ipnt/data" },
        "site": { "domain": "mesh.example" },
        "log": { "level": "debug", "json": true }
    });

    let cfg: ApiConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.storage.data_dir, PathBuf::from("/srv/ipnt/data"));
    assert_eq!(cfg.storage.static_dir, PathBuf::from("assets"), "missing keys keep defaults");
    assert_eq!(cfg.site.domain, "mesh.example");
    assert!(cfg.log.json);
}

#[test]
fn empty_document_yields_defaults() {
    let cfg: ApiConfig = serde_json::from_value(json!({})).expect("config deserialize");
    assert_eq!(cfg.server.port, 5000);
    assert_eq!(cfg.site.domain, "ipnt.uk");
}

#[test]
fn mutation_does_not_leak_into_clones() {
    let original = ApiConfig::default();
    let mut changed = original.clone();
    changed.server.port = 9000;

    assert_eq!(original.server.port, 5000);
    assert_eq!(changed.server.port, 9000);
}
