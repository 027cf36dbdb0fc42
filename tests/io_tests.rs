use serde_json::{json, Value};

use freezetable::error::StoreError;
use freezetable::io::json_io::{self, JsonIoError};
use freezetable::io::kv_store::{JsonFileStore, KeyValueStore, MemoryStore};

#[test]
fn test_load_table_config_object() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("table.json");
    std::fs::write(
        &path,
        r#"{
            "data": [{"zeta": "1", "alpha": "2"}],
            "width": [50, 100, 100],
            "freezeColNum": 2,
            "firstCellContent": "count",
            "upperHeader": true,
            "bgColors": {"cornerCell": "cyan"}
        }"#,
    )
    .unwrap();

    let config = json_io::load_table_config(&path, 120.0).unwrap();
    assert_eq!(config.columns(), vec!["zeta", "alpha"]);
    assert_eq!(config.width, vec![50.0, 100.0, 100.0]);
    assert_eq!(config.freeze_col_num, Some(2));
    assert_eq!(config.freeze_header_num, None);
    assert_eq!(config.first_cell_content, "count");
    assert!(config.upper_header);
    assert_eq!(config.bg_colors.corner_cell.as_deref(), Some("cyan"));
}

#[test]
fn test_load_table_config_bare_rows_gets_default_widths() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rows.json");
    std::fs::write(&path, r#"[{"name":"Alice","age":30},{"name":"Bob","age":25}]"#).unwrap();

    let config = json_io::load_table_config(&path, 120.0).unwrap();
    assert_eq!(config.data.len(), 2);
    assert_eq!(config.width, vec![120.0; 3]);
    assert_eq!(config.data[1]["age"], Value::Number(25.into()));
}

#[test]
fn test_load_table_config_rejects_scalar_root() {
    let err = json_io::parse_table_config("42", 100.0).unwrap_err();
    assert!(matches!(err, JsonIoError::UnsupportedRoot));
}

#[test]
fn test_load_table_config_rows_must_be_objects() {
    let err = json_io::parse_table_config("[1, 2, 3]", 100.0).unwrap_err();
    assert!(matches!(err, JsonIoError::NotArrayOfObjects));
}

#[test]
fn test_load_table_config_missing_file() {
    let err = json_io::load_table_config(std::path::Path::new("/nonexistent/rows.json"), 100.0)
        .unwrap_err();
    assert!(matches!(err, JsonIoError::Io(_)));
}

#[test]
fn test_load_table_config_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "{not json}").unwrap();

    let err = json_io::load_table_config(&path, 100.0).unwrap_err();
    assert!(matches!(err, JsonIoError::Parse(_)));
}

#[test]
fn test_memory_store_operations() {
    let mut store = MemoryStore::new();
    assert!(!store.contains_key("k").unwrap());
    store.store("k", &json!({"a": 1})).unwrap();
    assert!(store.contains_key("k").unwrap());
    assert_eq!(store.get("k").unwrap(), Some(json!({"a": 1})));
    store.remove("k").unwrap();
    assert_eq!(store.get("k").unwrap(), None);
}

#[test]
fn test_json_file_store_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::open(dir.path().join("store.json")).unwrap();
    assert!(!store.contains_key("anything").unwrap());
}

#[test]
fn test_json_file_store_persists_across_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.store("workout-data", &json!([1, 2])).unwrap();
    store.store("other", &json!("x")).unwrap();
    store.remove("other").unwrap();

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get("workout-data").unwrap(), Some(json!([1, 2])));
    assert!(!reopened.contains_key("other").unwrap());
}

#[test]
fn test_json_file_store_rejects_non_object_root() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    std::fs::write(&path, "[]").unwrap();

    let err = JsonFileStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::NotAnObject));
}
