mod common;

use camino::Utf8PathBuf;
use std::fs;
use type_gen_settings_lib::core::seed::import_seed;
use type_gen_settings_lib::core::store::{ConfyStore, DocumentStore};
use type_gen_settings_lib::models::error::SError;
use type_gen_settings_lib::models::settings::{AppTypeRow, SettingsDocument};

fn setup() -> (tempfile::TempDir, Utf8PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).unwrap();
    (tmp, root)
}

#[test]
fn test_import_seed_saves_to_store() {
    let (_tmp, root) = setup();
    let seed = root.join("seed.json");
    fs::write(
        &seed,
        r#"{
            "export_to_root": 0,
            "type_settings": [
                {"app_name": "crm", "app_path": "frontend/src", "doctype": "App Type Generation Paths"}
            ]
        }"#,
    )
    .unwrap();

    let store = ConfyStore::new(root.join("settings.toml"));
    let doc = import_seed(&seed, &store).unwrap();

    assert!(!doc.export_to_root);
    assert_eq!(doc.type_settings, vec![AppTypeRow::new("crm", "frontend/src")]);
    assert_eq!(store.load().unwrap(), doc);
}

#[test]
fn test_import_seed_overlays_only_present_keys() {
    let (_tmp, root) = setup();
    let store = ConfyStore::new(root.join("settings.toml"));
    let mut existing = common::doc(false, &[("crm", "src")]);
    existing.root_output_path = "types".into();
    store.save(&existing).unwrap();

    let seed = root.join("seed.json");
    fs::write(&seed, r#"{"export_to_root": 1}"#).unwrap();

    let doc = import_seed(&seed, &store).unwrap();
    assert!(doc.export_to_root);
    assert_eq!(doc.root_output_path, "types");
    assert_eq!(doc.type_settings, existing.type_settings);
}

#[test]
fn test_invalid_seed_is_not_saved() {
    let (_tmp, root) = setup();
    let store = ConfyStore::new(root.join("settings.toml"));
    let seed = root.join("seed.json");
    fs::write(
        &seed,
        r#"{"type_settings": [{"app_name": "crm", "app_path": "src"}, {"app_name": "hrms", "app_path": ""}]}"#,
    )
    .unwrap();

    let err = import_seed(&seed, &store).unwrap_err();
    match err {
        SError::Validation(v) => assert_eq!(v.row_index, 2),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(store.load().unwrap(), SettingsDocument::default());
}

#[test]
fn test_missing_seed_file_is_io_error() {
    let (_tmp, root) = setup();
    let store = ConfyStore::new(root.join("settings.toml"));
    let err = import_seed(&root.join("absent.json"), &store).unwrap_err();
    assert!(matches!(err, SError::IOError(_)));
}
