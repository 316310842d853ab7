use super::*;
use crate::kinds::{ElementKind, KindEntry};

#[test]
fn default_config_uses_story_kinds() {
    let config = ResizeConfig::default();
    assert_eq!(config.kinds, KindTable::story_defaults());
}

#[test]
fn empty_document_falls_back_to_story_kinds() {
    let config = ResizeConfig::from_json_str("{}").unwrap();
    assert_eq!(config.kinds, KindTable::story_defaults());
}

#[test]
fn kinds_document_replaces_defaults() {
    let config = ResizeConfig::from_json_str(
        r#"{ "kinds": { "caption": { "has_overflow_target": true, "selector_role": "text" } } }"#,
    )
    .unwrap();
    assert_eq!(config.kinds.len(), 1);
    assert_eq!(config.kinds.lookup(&ElementKind::new("caption")), KindEntry::TEXT);
    assert_eq!(config.kinds.lookup(&ElementKind::new("image")), KindEntry::PLAIN);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = ResizeConfig::from_json_str("{ kinds: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert_eq!(err.error_code(), "E_CONFIG_PARSE");
}

#[test]
fn missing_file_is_io_error() {
    let err = ResizeConfig::from_path(Path::new("/nonexistent/story-resize.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert_eq!(err.error_code(), "E_CONFIG_IO");
    assert!(err.to_string().contains("/nonexistent/story-resize.json"));
}

#[test]
fn from_path_reads_file() {
    let path = std::env::temp_dir().join(format!("story-resize-config-{}.json", uuid::Uuid::new_v4()));
    std::fs::write(&path, r#"{ "kinds": { "image": { "selector_role": "image" } } }"#).unwrap();
    let config = ResizeConfig::from_path(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(config.kinds.lookup(&ElementKind::new("image")), KindEntry::IMAGE);
}

// The variable is process-wide, so every from_env case runs in this one test.
#[test]
fn from_env_follows_config_path_variable() {
    // SAFETY: no other test reads or writes STORY_RESIZE_CONFIG.
    unsafe { std::env::remove_var(CONFIG_PATH_ENV) };
    assert_eq!(ResizeConfig::from_env().unwrap(), ResizeConfig::default());

    let missing = std::env::temp_dir().join(format!("story-resize-missing-{}.json", uuid::Uuid::new_v4()));
    // SAFETY: as above.
    unsafe { std::env::set_var(CONFIG_PATH_ENV, &missing) };
    let err = ResizeConfig::from_env().unwrap_err();
    assert_eq!(err.error_code(), "E_CONFIG_IO");

    let path = std::env::temp_dir().join(format!("story-resize-env-{}.json", uuid::Uuid::new_v4()));
    std::fs::write(&path, r#"{ "kinds": {} }"#).unwrap();
    // SAFETY: as above.
    unsafe { std::env::set_var(CONFIG_PATH_ENV, &path) };
    let config = ResizeConfig::from_env();
    // SAFETY: as above.
    unsafe { std::env::remove_var(CONFIG_PATH_ENV) };
    std::fs::remove_file(&path).unwrap();
    assert!(config.unwrap().kinds.is_empty());
}
