//! Keys the planner stores its state under.

/// `Vec<BedGroup>`
pub const BED_GROUPS: &str = "bedGroups";
/// `GuiPositions`, keyed by bed group id
pub const BED_GROUPS_GUI: &str = "bedGroupsGui";
/// `LocationData` of the picked site
pub const LOCATION: &str = "location";
/// Satellite image of the site as a data URL
pub const LOCATION_IMAGE: &str = "locationImage";
/// IANA time zone name of the site
pub const TIMEZONE: &str = "timezone";
/// Ground elevation of the site in meters
pub const ELEVATION: &str = "elevation";
/// Grouped hourly temperature history with its cache key
pub const RAW_TEMPERATURE_DATA: &str = "rawTemperatureData";
