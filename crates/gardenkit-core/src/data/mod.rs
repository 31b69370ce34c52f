//! Persisted garden model.
//!
//! - [`BedGroup`]: a row of identical beds, as entered by the user
//! - [`BedGroupGuiPosition`]: where a bed group sits on the layout canvas
//! - [`GeoPosition`] / [`LocationData`]: the site the garden is planned for

mod beds;
mod location;

pub use beds::{normalize_rotation, BedGroup, BedGroupGuiPosition, BedGroupId, GuiPositions};
pub use location::{meters_per_pixel, GeoPosition, LocationData};
