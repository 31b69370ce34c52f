//! Mapping between client (screen pixel) coordinates and canvas user space.
//!
//! The rendering surface owns the current screen transform of the canvas.
//! It may change between two events (page scroll, zoom, resize), so every
//! conversion queries it again instead of caching it.

use gardenkit_core::{transform_rect, AffineMatrix, Point, Rect};

use crate::control::PointerId;

/// The rendering surface the bed overlay is drawn on.
///
/// Geometry queries return `None` while the surface is not laid out yet.
pub trait CanvasSurface {
    /// Transform from canvas user space (meters) to client pixels.
    fn screen_transform(&self) -> Option<AffineMatrix>;

    /// Declared logical view box of the canvas in user space units.
    fn view_box(&self) -> Option<Rect>;

    /// Routes all further events of `pointer_id` to `target` until released.
    fn set_pointer_capture(&mut self, target: &str, pointer_id: PointerId);

    /// Ends a capture previously set by `target`.
    fn release_pointer_capture(&mut self, target: &str, pointer_id: PointerId);

    /// Returns the target currently capturing `pointer_id`, if any.
    fn pointer_capture_target(&self, pointer_id: PointerId) -> Option<&str>;
}

/// Maps a client point into the space described by `screen_transform`
/// (the transform from that space to client pixels).
///
/// Returns `None` when the transform cannot be inverted.
pub fn pointer_to_local(client: Point, screen_transform: &AffineMatrix) -> Option<Point> {
    screen_transform
        .inverse()
        .map(|inverse| inverse.transform_point(client))
}

/// Maps a client point into canvas user space.
pub fn pointer_to_canvas(client: Point, surface: &dyn CanvasSurface) -> Option<Point> {
    let ctm = surface.screen_transform()?;
    pointer_to_local(client, &ctm)
}

/// Converts a client-space bounding box into canvas user space.
pub fn bounding_box_in_local_space(client_bounds: &Rect, surface: &dyn CanvasSurface) -> Option<Rect> {
    let inverse = surface.screen_transform()?.inverse()?;
    Some(transform_rect(client_bounds, &inverse))
}

/// The canvas view box, if the surface is laid out.
pub fn canvas_view_box(surface: &dyn CanvasSurface) -> Option<Rect> {
    surface.view_box().filter(|vb| !vb.is_empty())
}
