use std::collections::HashMap;

use serde_json::json;

use super::*;

fn entry(key: &str, value: &str) -> ConfigEntry {
    ConfigEntry {
        key: key.to_owned(),
        description: String::new(),
        value: value.to_owned(),
    }
}

#[test]
fn payload_wraps_values_under_values_key() {
    let entries = vec![entry("EMAIL_DOMAIN", "vui.edu.vn"), entry("GPA_MIN", "2.0")];
    let payload = config_payload(&entries, &HashMap::new());
    assert_eq!(
        payload,
        json!({"values": {"EMAIL_DOMAIN": "vui.edu.vn", "GPA_MIN": "2.0"}})
    );
}

#[test]
fn payload_layers_edits_over_loaded_values() {
    let entries = vec![entry("EMAIL_DOMAIN", "vui.edu.vn"), entry("GPA_MIN", "2.0")];
    let mut edits = HashMap::new();
    edits.insert("GPA_MIN".to_owned(), "2.5".to_owned());
    let payload = config_payload(&entries, &edits);
    assert_eq!(
        payload,
        json!({"values": {"EMAIL_DOMAIN": "vui.edu.vn", "GPA_MIN": "2.5"}})
    );
}

#[test]
fn payload_ignores_edits_for_removed_keys() {
    let entries = vec![entry("GPA_MIN", "2.0")];
    let mut edits = HashMap::new();
    edits.insert("GONE".to_owned(), "x".to_owned());
    let payload = config_payload(&entries, &edits);
    assert_eq!(payload, json!({"values": {"GPA_MIN": "2.0"}}));
}
