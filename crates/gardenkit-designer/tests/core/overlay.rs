use gardenkit_core::{BedGroup, BedGroupGuiPosition, GuiPositions};
use gardenkit_designer::{BedOverlay, CanvasSurface, OverlayEvent, PointerInput, Viewport};

/// Bed group drawn as a 20m x 20m outline (one 19.4m wide bed, 18m long, 30cm spacing).
fn group(id: &str) -> BedGroup {
    BedGroup {
        id: id.to_string(),
        label: id.to_uppercase(),
        count: 1,
        width_in_centimeters: 1940.0,
        spacing_in_centimeters: 30.0,
        length_in_meters: 19.4,
    }
}

fn placed(entries: &[(&str, f64, f64, f64)]) -> GuiPositions {
    entries
        .iter()
        .map(|(id, x, y, r)| (id.to_string(), BedGroupGuiPosition::new(*x, *y, *r)))
        .collect()
}

fn surface() -> Viewport {
    Viewport::for_site(100.0, 100.0, 100.0)
}

#[test]
fn test_move_commit_updates_placement() {
    let mut vp = surface();
    let mut overlay = BedOverlay::with_groups(
        100.0,
        &[group("a")],
        placed(&[("a", 30.0, 30.0, 90.0)]),
    );

    overlay.handle_pointer(&PointerInput::down(1, 40.0, 40.0), &mut vp);
    assert_eq!(vp.pointer_capture_target(1), Some("a"));
    overlay.handle_pointer(&PointerInput::moved(1, 50.0, 45.0), &mut vp);
    let events = overlay.handle_pointer(&PointerInput::up(1, 50.0, 45.0), &mut vp);

    let expected = placed(&[("a", 40.0, 35.0, 90.0)]);
    assert_eq!(events, vec![OverlayEvent::GuiPositionsChanged(expected.clone())]);
    assert_eq!(overlay.gui_positions(), &expected);
    assert_eq!(vp.pointer_capture_target(1), None);
}

#[test]
fn test_commit_creates_missing_entry_from_origin() {
    let mut vp = surface();
    let mut overlay = BedOverlay::with_groups(100.0, &[group("a")], GuiPositions::new());

    overlay.handle_pointer(&PointerInput::down(1, 10.0, 10.0), &mut vp);
    overlay.handle_pointer(&PointerInput::moved(1, 15.0, 10.0), &mut vp);
    overlay.handle_pointer(&PointerInput::up(1, 15.0, 10.0), &mut vp);

    let entry = overlay.gui_positions().get("a").copied().unwrap();
    assert_eq!(entry, BedGroupGuiPosition::new(5.0, 0.0, 0.0));
}

#[test]
fn test_commit_prunes_deleted_groups() {
    let mut vp = surface();
    let stale = placed(&[("a", 0.0, 0.0, 0.0), ("deleted", 5.0, 5.0, 0.0)]);
    let mut overlay = BedOverlay::with_groups(100.0, &[group("a")], stale);
    assert_eq!(overlay.gui_positions().len(), 2);

    overlay.handle_pointer(&PointerInput::down(1, 10.0, 10.0), &mut vp);
    overlay.handle_pointer(&PointerInput::up(1, 20.0, 10.0), &mut vp);

    assert_eq!(overlay.gui_positions().len(), 1);
    assert!(overlay.gui_positions().contains_key("a"));
}

#[test]
fn test_click_selects_group() {
    let mut vp = surface();
    let mut overlay = BedOverlay::with_groups(
        100.0,
        &[group("a"), group("b")],
        placed(&[("a", 0.0, 0.0, 0.0), ("b", 50.0, 50.0, 0.0)]),
    );

    overlay.handle_pointer(&PointerInput::down(3, 60.0, 60.0), &mut vp);
    let events = overlay.handle_pointer(&PointerInput::up(3, 60.0, 60.0), &mut vp);

    assert!(events.contains(&OverlayEvent::Selected("b".to_string())));
    assert_eq!(overlay.selected_id(), Some("b"));
    assert!(overlay.control("b").unwrap().is_selected());
    assert!(!overlay.control("a").unwrap().is_selected());
}

#[test]
fn test_topmost_group_receives_pointer() {
    let mut vp = surface();
    let mut overlay = BedOverlay::with_groups(
        100.0,
        &[group("below"), group("above")],
        placed(&[("below", 0.0, 0.0, 0.0), ("above", 10.0, 10.0, 0.0)]),
    );

    overlay.handle_pointer(&PointerInput::down(1, 15.0, 15.0), &mut vp);
    assert_eq!(vp.pointer_capture_target(1), Some("above"));
}

#[test]
fn test_pointer_outside_groups_does_nothing() {
    let mut vp = surface();
    let mut overlay = BedOverlay::with_groups(100.0, &[group("a")], GuiPositions::new());

    overlay.handle_pointer(&PointerInput::down(1, 90.0, 90.0), &mut vp);
    let events = overlay.handle_pointer(&PointerInput::up(1, 90.0, 90.0), &mut vp);

    assert!(events.is_empty());
    assert_eq!(vp.pointer_capture_target(1), None);
    assert!(overlay.controls().iter().all(|c| !c.is_dragging()));
}

#[test]
fn test_captured_pointer_keeps_reaching_control() {
    let mut vp = surface();
    let mut overlay = BedOverlay::with_groups(100.0, &[group("a")], GuiPositions::new());

    overlay.handle_pointer(&PointerInput::down(1, 10.0, 10.0), &mut vp);
    // Far outside the group, still clamped into the canvas
    overlay.handle_pointer(&PointerInput::moved(1, 500.0, 10.0), &mut vp);
    overlay.handle_pointer(&PointerInput::up(1, 500.0, 10.0), &mut vp);

    let entry = overlay.gui_positions().get("a").copied().unwrap();
    assert_eq!((entry.x, entry.y), (80.0, 0.0));
}

#[test]
fn test_simultaneous_gestures_do_not_interfere() {
    let mut vp = surface();
    let mut overlay = BedOverlay::with_groups(
        100.0,
        &[group("a"), group("b")],
        placed(&[("a", 0.0, 0.0, 0.0), ("b", 50.0, 50.0, 0.0)]),
    );

    overlay.handle_pointer(&PointerInput::down(1, 10.0, 10.0), &mut vp);
    overlay.handle_pointer(&PointerInput::down(2, 60.0, 60.0), &mut vp);
    overlay.handle_pointer(&PointerInput::moved(1, 15.0, 10.0), &mut vp);
    overlay.handle_pointer(&PointerInput::moved(2, 60.0, 70.0), &mut vp);
    overlay.handle_pointer(&PointerInput::up(2, 60.0, 70.0), &mut vp);
    overlay.handle_pointer(&PointerInput::up(1, 15.0, 10.0), &mut vp);

    let positions = overlay.gui_positions();
    assert_eq!(positions["a"], BedGroupGuiPosition::new(5.0, 0.0, 0.0));
    assert_eq!(positions["b"], BedGroupGuiPosition::new(50.0, 60.0, 0.0));
}

#[test]
fn test_lost_capture_commits_gesture() {
    let mut vp = surface();
    let mut overlay = BedOverlay::with_groups(100.0, &[group("a")], GuiPositions::new());

    overlay.handle_pointer(&PointerInput::down(4, 10.0, 10.0), &mut vp);
    overlay.handle_pointer(&PointerInput::moved(4, 12.0, 30.0), &mut vp);
    let events = overlay.handle_lost_pointer_capture(4);

    assert_eq!(events.len(), 1);
    let entry = overlay.gui_positions().get("a").copied().unwrap();
    assert_eq!((entry.x, entry.y), (2.0, 20.0));
}

#[test]
fn test_hover_marks_only_hovered_group() {
    let mut vp = surface();
    let mut overlay = BedOverlay::with_groups(
        100.0,
        &[group("a"), group("b")],
        placed(&[("a", 0.0, 0.0, 0.0), ("b", 50.0, 50.0, 0.0)]),
    );

    overlay.handle_pointer(&PointerInput::moved(1, 10.0, 10.0), &mut vp);
    assert!(overlay.control("a").unwrap().gesture_mode().is_some());
    assert!(overlay.control("b").unwrap().gesture_mode().is_none());

    overlay.handle_pointer(&PointerInput::moved(1, 60.0, 60.0), &mut vp);
    assert!(overlay.control("a").unwrap().gesture_mode().is_none());
    assert!(overlay.control("b").unwrap().gesture_mode().is_some());
}
