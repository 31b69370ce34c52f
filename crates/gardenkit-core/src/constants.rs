//! Shared constants.

/// Hourly samples that make up one calendar day.
pub const HOURS_PER_DAY: usize = 24;

/// Width and height (pixels) of the satellite image the bed overlay is drawn over.
pub const SITE_IMAGE_SIZE_PX: f64 = 800.0;

/// Earth circumference (meters) used by the web-mercator scale formula.
pub const EARTH_CIRCUMFERENCE_M: f64 = 40_007_000.0;

/// Tile size (pixels) of the basemap provider.
pub const TILE_SIZE_PX: f64 = 512.0;

/// Maximum client-space travel (pixels) for a press/release pair to count as a click.
pub const CLICK_TOLERANCE_PX: f64 = 3.0;

/// Tolerance used when comparing floating point coordinates.
pub const EPSILON: f64 = 1e-9;
