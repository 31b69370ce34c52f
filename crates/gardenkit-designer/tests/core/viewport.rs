use gardenkit_core::{Point, Rect};
use gardenkit_designer::{CanvasSurface, Viewport};

fn assert_close(actual: Point, expected: Point) {
    assert!(
        actual.distance_to(&expected) < 1e-9,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new(1200.0, 800.0);
    assert_eq!(vp.zoom(), 1.0);
    assert_eq!(vp.pan_x(), 0.0);
    assert_eq!(vp.pan_y(), 0.0);
    assert!(vp.screen_transform().is_none());
}

#[test]
fn test_site_fills_square_client() {
    let vp = Viewport::for_site(800.0, 800.0, 40.0);
    assert_close(vp.client_to_canvas(400.0, 200.0).unwrap(), Point::new(20.0, 10.0));
    assert_close(vp.canvas_to_client(40.0, 40.0).unwrap(), Point::new(800.0, 800.0));
}

#[test]
fn test_site_is_letterboxed_in_wide_client() {
    // 40m square in 1200x800: 20px per meter, 200px bars left and right
    let vp = Viewport::for_site(1200.0, 800.0, 40.0);
    assert_close(vp.canvas_to_client(0.0, 0.0).unwrap(), Point::new(200.0, 0.0));
    assert_close(vp.client_to_canvas(600.0, 400.0).unwrap(), Point::new(20.0, 20.0));
}

#[test]
fn test_zoom_range() {
    let mut vp = Viewport::default();
    vp.set_zoom(2.0);
    assert_eq!(vp.zoom(), 2.0);

    vp.set_zoom(0.05); // Out of range, should stay at 2.0
    assert_eq!(vp.zoom(), 2.0);

    vp.set_zoom(0.5);
    assert_eq!(vp.zoom(), 0.5);
}

#[test]
fn test_pan_shifts_canvas() {
    let mut vp = Viewport::for_site(100.0, 100.0, 100.0);
    vp.pan_by(10.0, -5.0);
    assert_close(vp.client_to_canvas(10.0, -5.0).unwrap(), Point::ZERO);
    vp.reset();
    assert_close(vp.client_to_canvas(10.0, 10.0).unwrap(), Point::new(10.0, 10.0));
}

#[test]
fn test_zoom_at_keeps_point_fixed() {
    let mut vp = Viewport::for_site(100.0, 100.0, 100.0);
    let before = vp.client_to_canvas(30.0, 70.0).unwrap();
    vp.zoom_at(Point::new(30.0, 70.0), 4.0);
    let after = vp.client_to_canvas(30.0, 70.0).unwrap();
    assert_close(after, before);
    assert_eq!(vp.zoom(), 4.0);
}

#[test]
fn test_capture_release_requires_owner() {
    let mut vp = Viewport::default();
    vp.set_pointer_capture("a", 1);
    vp.release_pointer_capture("b", 1);
    assert_eq!(vp.pointer_capture_target(1), Some("a"));
    vp.release_pointer_capture("a", 1);
    assert_eq!(vp.pointer_capture_target(1), None);
}

#[test]
fn test_view_box_is_reported() {
    let mut vp = Viewport::default();
    assert_eq!(vp.view_box(), None);
    vp.set_view_box(Rect::new(0.0, 0.0, 25.0, 25.0));
    assert_eq!(vp.view_box(), Some(Rect::new(0.0, 0.0, 25.0, 25.0)));
    assert!(vp.to_string().starts_with("Zoom: 1.00x"));
}
