//! 2D geometry primitives for the layout canvas.
//!
//! Provides small value types for points, rectangles and affine matrices,
//! plus the helpers the bed editor uses to keep shapes inside the canvas:
//! - [`transform_rect`]: map an axis-aligned rectangle through a matrix
//! - [`constrain_to_box`]: clamp a point into a rectangle
//! - [`get_offset_bbox`]: the range of legal translations of one rectangle inside another
//!
//! Matrices follow the SVG convention: `(a, b, c, d, e, f)` maps a point as
//!
//! ```text
//! x' = a * x + c * y + e
//! y' = b * x + d * y + f
//! ```

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;

/// A point (or offset vector) in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Angle of the vector from `origin` to this point, in degrees.
    pub fn angle_from(&self, origin: &Point) -> f64 {
        (self.y - origin.y).atan2(self.x - origin.x).to_degrees()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Rectangle given by its origin and extent.
///
/// Edges are derived as `left = x`, `right = x + width`, `top = y` and
/// `bottom = y + height`. A negative extent is kept as is, so an inverted
/// rectangle reports `left > right`; [`constrain_to_box`] relies on that to
/// snap onto the left/top edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from its edges.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left(), self.top())
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns `true` if the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.width.abs() < EPSILON || self.height.abs() < EPSILON
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Returns the rectangle moved by `offset`.
    pub fn translated(&self, offset: Point) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.x, self.y, self.width, self.height)
    }
}

/// 2D affine transformation matrix (SVG/DOM layout).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineMatrix {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl AffineMatrix {
    pub const IDENTITY: AffineMatrix = AffineMatrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn translation(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation by `angle_deg` degrees about the origin (clockwise on a y-down canvas).
    pub fn rotation(angle_deg: f64) -> Self {
        let (s, c) = angle_deg.to_radians().sin_cos();
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    /// Rotation about `(cx, cy)`, equivalent to SVG `rotate(angle cx cy)`.
    pub fn rotation_about(angle_deg: f64, cx: f64, cy: f64) -> Self {
        Self::translation(cx, cy)
            .then(&Self::rotation(angle_deg))
            .then(&Self::translation(-cx, -cy))
    }

    /// Composes two transforms as `self * inner`: `inner` is applied first.
    ///
    /// This matches the reading order of an SVG transform list, where
    /// `translate(..) rotate(..)` rotates first and translates second.
    pub fn then(&self, inner: &AffineMatrix) -> AffineMatrix {
        AffineMatrix {
            a: self.a * inner.a + self.c * inner.b,
            b: self.b * inner.a + self.d * inner.b,
            c: self.a * inner.c + self.c * inner.d,
            d: self.b * inner.c + self.d * inner.d,
            e: self.a * inner.e + self.c * inner.f + self.e,
            f: self.b * inner.e + self.d * inner.f + self.f,
        }
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Returns the inverse transform, or `None` for a singular matrix.
    pub fn inverse(&self) -> Option<AffineMatrix> {
        let det = self.determinant();
        if det.abs() < EPSILON || !det.is_finite() {
            return None;
        }
        Some(AffineMatrix {
            a: self.d / det,
            b: -self.b / det,
            c: -self.c / det,
            d: self.a / det,
            e: (self.c * self.f - self.d * self.e) / det,
            f: (self.b * self.e - self.a * self.f) / det,
        })
    }

    pub fn transform_point(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }
}

impl Default for AffineMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for AffineMatrix {
    type Output = AffineMatrix;

    fn mul(self, rhs: AffineMatrix) -> AffineMatrix {
        self.then(&rhs)
    }
}

/// Maps the top-left and bottom-right corners of `rect` through `matrix` and
/// returns the axis-aligned rectangle spanned by the two mapped corners.
///
/// Only meant for axis-preserving transforms (translate/scale), which is what
/// screen-to-canvas matrices are. Rotations are not accounted for.
pub fn transform_rect(rect: &Rect, matrix: &AffineMatrix) -> Rect {
    let top_left = matrix.transform_point(rect.top_left());
    let bottom_right = matrix.transform_point(rect.bottom_right());
    Rect::from_edges(
        top_left.x.min(bottom_right.x),
        top_left.y.min(bottom_right.y),
        top_left.x.max(bottom_right.x),
        top_left.y.max(bottom_right.y),
    )
}

/// Clamps each coordinate of `point` into the extent of `bounds`.
///
/// An inverted box (`left > right` or `top > bottom`) always yields its
/// left/top edge. This is deliberate: a shape larger than the canvas is
/// pinned to the canvas's leading edge, so exactly one offset is valid on
/// that axis and a drag cannot move it.
pub fn constrain_to_box(point: Point, bounds: &Rect) -> Point {
    Point::new(
        point.x.min(bounds.right()).max(bounds.left()),
        point.y.min(bounds.bottom()).max(bounds.top()),
    )
}

/// Computes the rectangle of translation offsets that keep `inner` inside `outer`.
///
/// When `inner` is larger than `outer` along an axis the result is inverted on
/// that axis; clamping with [`constrain_to_box`] then aligns the leading edges.
pub fn get_offset_bbox(inner: &Rect, outer: &Rect) -> Rect {
    Rect::from_edges(
        outer.left() - inner.left(),
        outer.top() - inner.top(),
        outer.right() - inner.right(),
        outer.bottom() - inner.bottom(),
    )
}
