use freezetable::state::scroll_sync::{Axis, AxisState, ScrollSync, Translate};

#[test]
fn test_starts_at_rest_at_zero() {
    let sync = ScrollSync::new();
    assert_eq!(sync.offset_x(), 0.0);
    assert_eq!(sync.offset_y(), 0.0);
    assert_eq!(sync.state(Axis::Horizontal), AxisState::AtRest);
    assert_eq!(sync.state(Axis::Vertical), AxisState::AtRest);
    assert_eq!(sync.overlay_transform().css(), "transform: translate(0px, 0px);");
}

#[test]
fn test_overlay_transform_negates_offsets() {
    let mut sync = ScrollSync::new();
    sync.on_horizontal_scroll(120.0);
    sync.on_vertical_scroll(45.5);
    assert_eq!(sync.overlay_transform(), Translate { x: -120.0, y: -45.5 });
    assert_eq!(sync.header_transform(), Translate { x: -120.0, y: 0.0 });
    assert_eq!(sync.frozen_column_transform(), Translate { x: 0.0, y: -45.5 });
}

#[test]
fn test_axes_are_independent() {
    let mut sync = ScrollSync::new();
    sync.on_horizontal_scroll(30.0);
    assert_eq!(sync.state(Axis::Horizontal), AxisState::Scrolling);
    assert_eq!(sync.state(Axis::Vertical), AxisState::AtRest);
    assert_eq!(sync.offset_y(), 0.0);
}

#[test]
fn test_last_write_wins() {
    let mut sync = ScrollSync::new();
    for x in [10.0, 80.0, 35.0] {
        sync.on_horizontal_scroll(x);
    }
    assert_eq!(sync.offset_x(), 35.0);
}

#[test]
fn test_reapplying_same_offset_does_not_drift() {
    let mut sync = ScrollSync::new();
    sync.on_horizontal_scroll(64.0);
    sync.on_vertical_scroll(12.0);
    let first = sync.overlay_transform();
    for _ in 0..100 {
        sync.on_horizontal_scroll(64.0);
        sync.on_vertical_scroll(12.0);
    }
    assert_eq!(sync.overlay_transform(), first);
}

#[test]
fn test_scroll_end_settles_axis_and_keeps_offset() {
    let mut sync = ScrollSync::new();
    let seq = sync.on_vertical_scroll(90.0);
    assert!(sync.is_scrolling());

    assert!(sync.on_scroll_end(Axis::Vertical, seq));
    assert_eq!(sync.state(Axis::Vertical), AxisState::AtRest);
    assert_eq!(sync.offset_y(), 90.0);
    assert!(!sync.is_scrolling());
}

#[test]
fn test_stale_scroll_end_is_ignored() {
    let mut sync = ScrollSync::new();
    let first = sync.on_horizontal_scroll(10.0);
    let latest = sync.on_horizontal_scroll(25.0);
    assert_ne!(first, latest);

    assert!(!sync.on_scroll_end(Axis::Horizontal, first));
    assert_eq!(sync.state(Axis::Horizontal), AxisState::Scrolling);

    assert!(sync.on_scroll_end(Axis::Horizontal, latest));
    assert_eq!(sync.state(Axis::Horizontal), AxisState::AtRest);
    assert_eq!(sync.offset_x(), 25.0);
}

#[test]
fn test_scroll_end_on_other_axis_is_ignored() {
    let mut sync = ScrollSync::new();
    let seq = sync.on_horizontal_scroll(40.0);
    sync.on_vertical_scroll(5.0);

    assert!(sync.on_scroll_end(Axis::Horizontal, seq));
    assert_eq!(sync.state(Axis::Vertical), AxisState::Scrolling);
    assert!(sync.is_scrolling());
}

#[test]
fn test_scroll_end_twice_changes_nothing() {
    let mut sync = ScrollSync::new();
    let seq = sync.on_vertical_scroll(8.0);
    assert!(sync.on_scroll_end(Axis::Vertical, seq));
    assert!(!sync.on_scroll_end(Axis::Vertical, seq));
}
