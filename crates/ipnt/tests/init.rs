use ipnt::domain::config::ApiConfig;
use ipnt::features::{directory::Directory, is_enabled, pages::Pages};
use tempfile::tempdir;

#[test]
fn registers_directory_and_pages() {
    let dir = tempdir().expect("tempdir");
    let mut config = ApiConfig::default();
    config.storage.data_dir = dir.path().to_path_buf();
    config.site.domain = "mesh.example".to_owned();

    let slices = ipnt::init(&config).expect("init");
    assert_eq!(slices.len(), 2);

    let directory = slices.iter().find_map(|slice| slice.downcast_ref::<Directory>()).expect("directory");
    assert_eq!(directory.domain, "mesh.example");
    assert_eq!(directory.store.root(), dir.path());
    assert!(slices.iter().any(|slice| slice.downcast_ref::<Pages>().is_some()));
}

#[test]
fn blank_domain_is_rejected() {
    let mut config = ApiConfig::default();
    config.site.domain = "  ".to_owned();
    assert!(ipnt::init(&config).is_err());
}

#[test]
fn slices_are_always_enabled() {
    assert!(is_enabled("directory"));
    assert!(is_enabled("pages"));
    assert!(!is_enabled("metrics"));
}
