//! # GardenKit Core
//!
//! Core types and utilities for GardenKit.
//! Provides the 2D geometry primitives used by the bed layout editor,
//! the persisted garden model (bed groups, their on-canvas placement and
//! the site location) and the shared error type.

pub mod constants;
pub mod data;
pub mod error;
pub mod geometry;
pub mod units;

pub use data::{
    normalize_rotation, BedGroup, BedGroupGuiPosition, BedGroupId, GeoPosition, GuiPositions,
    LocationData,
};

pub use error::{Error, Result, ValidationError};

pub use geometry::{constrain_to_box, get_offset_bbox, transform_rect, AffineMatrix, Point, Rect};
