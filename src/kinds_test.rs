use serde_json::json;

use super::*;

fn kind(name: &str) -> ElementKind {
    ElementKind::new(name)
}

// =============================================================
// KindEntry
// =============================================================

#[test]
fn text_entry_has_overflow_role_only() {
    assert_eq!(KindEntry::TEXT.overflow_role(), Some(SelectorRole::Text));
    assert_eq!(KindEntry::TEXT.preview_role(), None);
    assert!(!KindEntry::TEXT.is_image());
}

#[test]
fn image_entry_has_preview_role_only() {
    assert_eq!(KindEntry::IMAGE.overflow_role(), None);
    assert_eq!(KindEntry::IMAGE.preview_role(), Some(SelectorRole::Image));
    assert!(KindEntry::IMAGE.is_image());
}

#[test]
fn plain_entry_has_no_roles() {
    assert_eq!(KindEntry::PLAIN.overflow_role(), None);
    assert_eq!(KindEntry::PLAIN.preview_role(), None);
}

#[test]
fn text_role_without_overflow_flag_is_unconstrained() {
    let entry = KindEntry { has_overflow_target: false, selector_role: SelectorRole::Text };
    assert_eq!(entry.overflow_role(), None);
}

#[test]
fn overflow_flag_without_text_role_is_ignored() {
    let entry = KindEntry { has_overflow_target: true, selector_role: SelectorRole::None };
    assert_eq!(entry.overflow_role(), None);
}

// =============================================================
// KindTable
// =============================================================

#[test]
fn story_defaults_cover_known_kinds() {
    let table = KindTable::story_defaults();
    assert_eq!(table.len(), 5);
    assert_eq!(table.lookup(&kind("image")), KindEntry::IMAGE);
    for name in ["text", "post-title", "post-author", "post-date"] {
        assert_eq!(table.lookup(&kind(name)), KindEntry::TEXT, "{name}");
    }
}

#[test]
fn unknown_kind_is_plain() {
    let table = KindTable::story_defaults();
    assert!(!table.contains(&kind("video")));
    assert_eq!(table.lookup(&kind("video")), KindEntry::PLAIN);
}

#[test]
fn register_adds_and_replaces() {
    let mut table = KindTable::empty();
    assert!(table.is_empty());
    assert_eq!(table.register(kind("quote"), KindEntry::TEXT), None);
    assert_eq!(table.register(kind("quote"), KindEntry::PLAIN), Some(KindEntry::TEXT));
    assert_eq!(table.lookup(&kind("quote")), KindEntry::PLAIN);
}

#[test]
fn table_deserializes_from_json_object() {
    let table: KindTable = serde_json::from_value(json!({
        "image": { "has_overflow_target": false, "selector_role": "image" },
        "caption": { "has_overflow_target": true, "selector_role": "text" },
        "shape": {}
    }))
    .unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.lookup(&kind("caption")), KindEntry::TEXT);
    assert_eq!(table.lookup(&kind("shape")), KindEntry::PLAIN);
}

#[test]
fn table_rejects_unknown_role() {
    let result: Result<KindTable, _> =
        serde_json::from_value(json!({ "x": { "selector_role": "video" } }));
    assert!(result.is_err());
}

#[test]
fn element_kind_display_is_name() {
    assert_eq!(kind("post-date").to_string(), "post-date");
    assert_eq!(kind("post-date").as_str(), "post-date");
}
