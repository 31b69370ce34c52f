//! Unit conversions between the stored bed dimensions and canvas units.
//!
//! Bed widths and spacings are entered in centimeters, bed lengths in
//! meters. The layout canvas works in meters throughout.

/// Converts centimeters to meters.
pub fn cm_to_m(value: f64) -> f64 {
    value / 100.0
}

/// Converts meters to centimeters.
pub fn m_to_cm(value: f64) -> f64 {
    value * 100.0
}
