use super::*;

#[test]
fn empty_host_resolves_nothing() {
    let host = StaticHost::new();
    let id = Uuid::new_v4();
    assert_eq!(host.overflow_target(id, SelectorRole::Text), None);
    assert_eq!(host.preview_target(id, SelectorRole::Image), None);
    assert_eq!(host.natural_size(TargetId(1)), None);
    assert_eq!(host.rendered_size(id), None);
}

#[test]
fn overflow_target_resolves_for_text_role_only() {
    let id = Uuid::new_v4();
    let host = StaticHost::new().with_overflow_target(id, TargetId(7), Dimensions::new(200.0, 40.0));
    assert_eq!(host.overflow_target(id, SelectorRole::Text), Some(TargetId(7)));
    assert_eq!(host.overflow_target(id, SelectorRole::Image), None);
    assert_eq!(host.natural_size(TargetId(7)), Some(Dimensions::new(200.0, 40.0)));
}

#[test]
fn targets_are_scoped_to_their_element() {
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let host = StaticHost::new().with_preview_target(a, TargetId(3));
    assert_eq!(host.preview_target(a, SelectorRole::Image), Some(TargetId(3)));
    assert_eq!(host.preview_target(b, SelectorRole::Image), None);
}

#[test]
fn set_natural_size_replaces_previous_value() {
    let id = Uuid::new_v4();
    let mut host = StaticHost::new().with_overflow_target(id, TargetId(1), Dimensions::new(100.0, 20.0));
    host.set_natural_size(TargetId(1), Dimensions::new(100.0, 60.0));
    assert_eq!(host.natural_size(TargetId(1)), Some(Dimensions::new(100.0, 60.0)));
}

#[test]
fn rendered_size_round_trips() {
    let id = Uuid::new_v4();
    let host = StaticHost::new().with_rendered_size(id, Dimensions::new(640.0, 480.0));
    assert_eq!(host.rendered_size(id), Some(Dimensions::new(640.0, 480.0)));
}
