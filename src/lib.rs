//! # GardenKit
//!
//! Garden planning over a satellite image of the site:
//! - Place bed groups on the site by dragging and rotating them
//! - Per-day temperature statistics from decades of hourly history
//! - Frost-free and low-risk planting windows
//!
//! ## Architecture
//!
//! GardenKit is organized as a workspace with multiple crates:
//!
//! 1. **gardenkit-core** - Geometry, bed group and location model, errors
//! 2. **gardenkit-designer** - Bed group controls, overlay, SVG rendering
//! 3. **gardenkit-weather** - Statistics, day-of-year aggregation, frost windows
//! 4. **gardenkit-settings** - Key-value persistence and configuration file
//! 5. **gardenkit** - [`PlannerSession`] tying them together, logging setup

pub mod session;

pub use gardenkit_core as core;
pub use gardenkit_designer as designer;
pub use gardenkit_settings as settings;
pub use gardenkit_weather as weather;

pub use gardenkit_core::{BedGroup, BedGroupGuiPosition, Error, GeoPosition, LocationData, Result};
pub use gardenkit_designer::{BedOverlay, OverlayEvent, PointerInput, Viewport};
pub use gardenkit_settings::{JsonFileStore, KeyValueStore, MemoryStore, PlannerConfig};
pub use gardenkit_weather::{FrostWindows, TemperatureHistory};
pub use session::PlannerSession;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
