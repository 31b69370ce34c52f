//! Viewport and coordinate transformation for the bed overlay.
//!
//! Maps the overlay's logical view box (meters) onto the client area it is
//! displayed in (pixels). The view box is letterboxed into the client area
//! the way an SVG `preserveAspectRatio="xMidYMid meet"` would, then zoom
//! and pan are applied on top. The viewport also keeps the pointer capture
//! table so that a gesture keeps reaching the control that started it.

use std::collections::HashMap;
use std::fmt;

use gardenkit_core::{AffineMatrix, Point, Rect};

use crate::control::PointerId;
use crate::coordinates::CanvasSurface;

const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 50.0;

/// Screen placement of the overlay canvas.
#[derive(Debug, Clone)]
pub struct Viewport {
    client_width: f64,
    client_height: f64,
    view_box: Option<Rect>,
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    captures: HashMap<PointerId, String>,
}

impl Viewport {
    /// Creates a viewport for a client area. No view box is set until
    /// [`Viewport::set_view_box`] is called, so the surface reports no geometry.
    pub fn new(client_width: f64, client_height: f64) -> Self {
        Self {
            client_width,
            client_height,
            view_box: None,
            zoom: 1.0,
            pan_x: 0.0,
            pan_y: 0.0,
            captures: HashMap::new(),
        }
    }

    /// Creates a viewport showing a square site of `size_in_meters`.
    pub fn for_site(client_width: f64, client_height: f64, size_in_meters: f64) -> Self {
        let mut viewport = Self::new(client_width, client_height);
        viewport.set_view_box(Rect::new(0.0, 0.0, size_in_meters, size_in_meters));
        viewport
    }

    pub fn client_width(&self) -> f64 {
        self.client_width
    }

    pub fn client_height(&self) -> f64 {
        self.client_height
    }

    /// Sets the client area size (typically called when the page resizes).
    pub fn set_client_size(&mut self, width: f64, height: f64) {
        self.client_width = width;
        self.client_height = height;
    }

    pub fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    /// Gets the current zoom level (1.0 = view box fits the client area).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, ignored outside 0.1 to 50.0.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom > MIN_ZOOM && zoom < MAX_ZOOM {
            self.zoom = zoom;
        }
    }

    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    /// Sets the pan offset in client pixels (e.g. after the page scrolled).
    pub fn set_pan(&mut self, x: f64, y: f64) {
        self.pan_x = x;
        self.pan_y = y;
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Resets zoom and pan so the view box fits the client area again.
    pub fn reset(&mut self) {
        self.zoom = 1.0;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Scale and offset that letterbox the view box into the client area.
    fn fit(&self, view_box: &Rect) -> Option<(f64, f64, f64)> {
        if view_box.is_empty() || self.client_width <= 0.0 || self.client_height <= 0.0 {
            return None;
        }
        let scale = (self.client_width / view_box.width).min(self.client_height / view_box.height);
        let offset_x = (self.client_width - view_box.width * scale) / 2.0;
        let offset_y = (self.client_height - view_box.height * scale) / 2.0;
        Some((scale, offset_x, offset_y))
    }

    /// Converts client pixel coordinates to canvas coordinates.
    pub fn client_to_canvas(&self, client_x: f64, client_y: f64) -> Option<Point> {
        let inverse = self.screen_transform()?.inverse()?;
        Some(inverse.transform_point(Point::new(client_x, client_y)))
    }

    /// Converts canvas coordinates to client pixel coordinates.
    pub fn canvas_to_client(&self, x: f64, y: f64) -> Option<Point> {
        Some(self.screen_transform()?.transform_point(Point::new(x, y)))
    }

    /// Zooms about a client point, keeping that point fixed on screen.
    pub fn zoom_at(&mut self, client: Point, new_zoom: f64) {
        if new_zoom <= MIN_ZOOM || new_zoom >= MAX_ZOOM {
            return;
        }
        let ratio = new_zoom / self.zoom;
        self.pan_x = client.x - (client.x - self.pan_x) * ratio;
        self.pan_y = client.y - (client.y - self.pan_y) * ratio;
        self.zoom = new_zoom;
    }
}

impl CanvasSurface for Viewport {
    fn screen_transform(&self) -> Option<AffineMatrix> {
        let view_box = self.view_box?;
        let (scale, offset_x, offset_y) = self.fit(&view_box)?;
        Some(
            AffineMatrix::translation(self.pan_x, self.pan_y)
                .then(&AffineMatrix::scale(self.zoom, self.zoom))
                .then(&AffineMatrix::translation(offset_x, offset_y))
                .then(&AffineMatrix::scale(scale, scale))
                .then(&AffineMatrix::translation(-view_box.x, -view_box.y)),
        )
    }

    fn view_box(&self) -> Option<Rect> {
        self.view_box
    }

    fn set_pointer_capture(&mut self, target: &str, pointer_id: PointerId) {
        self.captures.insert(pointer_id, target.to_string());
    }

    fn release_pointer_capture(&mut self, target: &str, pointer_id: PointerId) {
        if self.captures.get(&pointer_id).is_some_and(|t| t == target) {
            self.captures.remove(&pointer_id);
        }
    }

    fn pointer_capture_target(&self, pointer_id: PointerId) -> Option<&str> {
        self.captures.get(&pointer_id).map(String::as_str)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Zoom: {:.2}x | Pan: ({:.1}, {:.1})",
            self.zoom, self.pan_x, self.pan_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 800.0)
    }
}
