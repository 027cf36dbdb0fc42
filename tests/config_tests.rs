use std::collections::HashMap;
use std::path::PathBuf;

use freezetable::config::{AppSettings, FONTS_VAR, OPEN_VAR, STORE_VAR};

fn settings_from(vars: &[(&str, &str)]) -> AppSettings {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppSettings::from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn test_defaults_without_variables() {
    assert_eq!(settings_from(&[]), AppSettings::default());
    assert_eq!(AppSettings::default().open_path, None);
}

#[test]
fn test_variables_override_defaults() {
    let settings = settings_from(&[
        (OPEN_VAR, "/tmp/table.json"),
        (STORE_VAR, "/tmp/store.json"),
        (FONTS_VAR, "/tmp/fonts"),
    ]);
    assert_eq!(settings.open_path, Some(PathBuf::from("/tmp/table.json")));
    assert_eq!(settings.store_path, PathBuf::from("/tmp/store.json"));
    assert_eq!(settings.fonts_dir, PathBuf::from("/tmp/fonts"));
}

#[test]
fn test_blank_variables_are_ignored() {
    let settings = settings_from(&[(OPEN_VAR, "  "), (STORE_VAR, "")]);
    assert_eq!(settings, AppSettings::default());
}
