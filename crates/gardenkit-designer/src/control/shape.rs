//! Geometry of a bed group as drawn on the canvas.

use gardenkit_core::{BedGroup, Point, Rect};

/// Dimensions of a bed group in canvas units (meters).
///
/// The group is laid out in its own frame with the outline's top-left corner
/// at the origin: `count` beds of `width x length` side by side, separated
/// and surrounded by `spacing`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BedGroupShape {
    pub count: u32,
    pub width: f64,
    pub length: f64,
    pub spacing: f64,
}

impl BedGroupShape {
    pub fn new(count: u32, width: f64, length: f64, spacing: f64) -> Self {
        Self {
            count,
            width,
            length,
            spacing,
        }
    }

    /// Shape of a stored bed group, converted to meters.
    pub fn from_bed_group(group: &BedGroup) -> Self {
        Self::new(
            group.count,
            group.width_in_meters(),
            group.length_in_meters,
            group.spacing_in_meters(),
        )
    }

    pub fn total_width(&self) -> f64 {
        f64::from(self.count) * (self.width + self.spacing) + self.spacing
    }

    pub fn total_height(&self) -> f64 {
        self.length + 2.0 * self.spacing
    }

    /// Outline in the group's own frame.
    pub fn outline(&self) -> Rect {
        Rect::new(0.0, 0.0, self.total_width(), self.total_height())
    }

    /// Center of the outline in the group's own frame; rotations pivot here.
    pub fn center(&self) -> Point {
        Point::new(self.total_width() / 2.0, self.total_height() / 2.0)
    }

    /// X offset of the `index`-th bed inside the outline.
    pub fn bed_x(&self, index: u32) -> f64 {
        self.spacing + f64::from(index) * (self.width + self.spacing)
    }

    /// Rectangles of the individual beds in the group's own frame.
    pub fn beds(&self) -> Vec<Rect> {
        (0..self.count)
            .map(|i| Rect::new(self.bed_x(i), self.spacing, self.width, self.length))
            .collect()
    }

    /// A group without beds or without area is not drawn and cannot be dragged.
    pub fn is_renderable(&self) -> bool {
        self.count > 0 && self.total_width() > 0.0 && self.total_height() > 0.0
    }
}
