use std::io::Write;

use client_registry::build_store;
use client_registry::models::config::ServerConfig;
use client_registry::models::seed::{SeedError, load_seed_file};

fn config(seed_file: Option<String>) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        seed_file,
    }
}

#[test]
fn seeds_only_valid_unique_clients() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[
            {{"firstName": "A", "lastName": "B", "idNumber": "8001015009087", "mobileNumber": "1"}},
            {{"firstName": "C", "lastName": "D", "idNumber": "7878", "mobileNumber": "2"}},
            {{"firstName": "E", "lastName": "F", "idNumber": "8001015009087", "mobileNumber": "3"}},
            {{"firstName": "G", "lastName": "H", "idNumber": "8001015009080"}}
        ]"#
    )
    .unwrap();

    let path = file.path().to_string_lossy().into_owned();
    let store = build_store(&config(Some(path))).unwrap();

    let names: Vec<_> = store
        .snapshot()
        .into_iter()
        .map(|c| c.first_name)
        .collect();
    assert_eq!(names, vec!["A", "G"]);
}

#[test]
fn store_is_empty_without_seed_file() {
    let store = build_store(&config(None)).unwrap();
    assert!(store.snapshot().is_empty());
}

#[test]
fn malformed_seed_file_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{\"firstName\": \"A\"}}").unwrap();

    assert!(matches!(load_seed_file(file.path()), Err(SeedError::Json(_))));

    let path = file.path().to_string_lossy().into_owned();
    assert!(build_store(&config(Some(path))).is_err());
}

#[test]
fn missing_seed_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    assert!(matches!(load_seed_file(&path), Err(SeedError::Io(_))));
}
