//! # GardenKit Weather
//!
//! Turns decades of hourly temperatures of the site into per-day statistics
//! and frost risk information.
//!
//! ```text
//! WeatherDataProvider ──▶ HourlySeries
//!   └── group_by_day_of_year ──▶ GroupedData (cached per position)
//!         ├── get_grouped_stats ──▶ Stats per day ──▶ chart series, temperature table
//!         └── get_min_temperature_probabilities ──▶ frost probability per day
//!               ├── get_frost_windows
//!               └── get_probability_threshold_windows ──▶ chart annotations
//! ```

pub mod chart;
pub mod error;
pub mod history;
pub mod provider;
pub mod statistics;
pub mod temperature_table;
pub mod weather_data;

pub use chart::{ChartAxis, ChartPoint, ChartSeries, RiskThresholds, WindowAnnotation};
pub use error::{Result, WeatherError};
pub use history::{
    locate_site, refresh_temperature_history, RawWeatherDataCache, SiteDetails,
    TemperatureHistory,
};
pub use provider::{HourlySeries, SiteInfoProvider, WeatherDataProvider, WeatherRequest};
pub use statistics::{get_stats, quantile, Stats};
pub use temperature_table::{build_temperature_table, TemperatureRow};
pub use weather_data::{
    get_frost_windows, get_grouped_stats, get_min_temperature_probabilities,
    get_probability_threshold_windows, group_by_day_of_year, DailyValues, DayOfYear, DayWindow,
    FrostWindows, GroupedData,
};
