use serde::{Deserialize, Serialize};

use crate::constants::{EARTH_CIRCUMFERENCE_M, SITE_IMAGE_SIZE_PX, TILE_SIZE_PX};

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Stable string key for this position, rounded to 6 decimals.
    pub fn cache_key(&self) -> String {
        format!("{:.6},{:.6}", self.latitude, self.longitude)
    }
}

/// The picked site: map position, basemap zoom and the resulting image size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationData {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_size_in_meters: Option<f64>,
}

impl LocationData {
    /// Builds location data for a picked position, deriving the site size
    /// covered by the satellite image at `zoom`.
    pub fn picked(position: GeoPosition, zoom: f64) -> Self {
        Self {
            longitude: position.longitude,
            latitude: position.latitude,
            zoom,
            total_size_in_meters: Some(meters_per_pixel(&position, zoom) * SITE_IMAGE_SIZE_PX),
        }
    }

    pub fn position(&self) -> GeoPosition {
        GeoPosition::new(self.latitude, self.longitude)
    }
}

/// Ground resolution of a web-mercator basemap at `zoom` for the given latitude.
pub fn meters_per_pixel(position: &GeoPosition, zoom: f64) -> f64 {
    EARTH_CIRCUMFERENCE_M * position.latitude.to_radians().cos() / (TILE_SIZE_PX * 2f64.powf(zoom))
}
