use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::units::cm_to_m;

/// Identifier of a bed group.
pub type BedGroupId = String;

/// Placement of every bed group on the canvas, keyed by bed group id.
pub type GuiPositions = BTreeMap<BedGroupId, BedGroupGuiPosition>;

/// A row of `count` identical rectangular beds separated by a fixed spacing.
///
/// Width and spacing are stored in centimeters, the bed length in meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BedGroup {
    pub id: BedGroupId,
    pub label: String,
    pub count: u32,
    pub spacing_in_centimeters: f64,
    pub width_in_centimeters: f64,
    pub length_in_meters: f64,
}

impl Default for BedGroup {
    fn default() -> Self {
        Self {
            id: String::new(),
            label: String::new(),
            count: 1,
            spacing_in_centimeters: 30.0,
            width_in_centimeters: 60.0,
            length_in_meters: 10.0,
        }
    }
}

impl BedGroup {
    /// Creates a bed group with default dimensions and a freshly generated id.
    pub fn with_new_id() -> Self {
        Self {
            id: uuid::Uuid::new_v4().simple().to_string(),
            ..Self::default()
        }
    }

    /// Bed width in meters.
    pub fn width_in_meters(&self) -> f64 {
        cm_to_m(self.width_in_centimeters)
    }

    /// Spacing between and around the beds in meters.
    pub fn spacing_in_meters(&self) -> f64 {
        cm_to_m(self.spacing_in_centimeters)
    }

    /// Checks the constraints the bed group form enforces.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.label.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "label".to_string(),
            });
        }
        if self.count < 1 {
            return Err(ValidationError::out_of_range("count", "must be at least 1"));
        }
        if self.length_in_meters.is_nan() || self.length_in_meters <= 0.0 {
            return Err(ValidationError::out_of_range(
                "lengthInMeters",
                "must be greater than 0",
            ));
        }
        if self.width_in_centimeters.is_nan() || self.width_in_centimeters <= 0.0 {
            return Err(ValidationError::out_of_range(
                "widthInCentimeters",
                "must be greater than 0",
            ));
        }
        if self.spacing_in_centimeters.is_nan() || self.spacing_in_centimeters < 0.0 {
            return Err(ValidationError::out_of_range(
                "spacingInCentimeters",
                "must not be negative",
            ));
        }
        Ok(())
    }
}

/// On-canvas placement of a bed group. Rotation is in degrees within `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BedGroupGuiPosition {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

impl BedGroupGuiPosition {
    pub fn new(x: f64, y: f64, rotation: f64) -> Self {
        Self {
            x,
            y,
            rotation: normalize_rotation(rotation),
        }
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
pub fn normalize_rotation(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
