//! First and last day of the year a minimum temperature is reliably reached.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::statistics::Stats;
use crate::weather_data::{DailyValues, DayOfYear};

/// Temperatures (°C) the table has a row for.
pub const TABLE_TEMPERATURES: RangeInclusive<i32> = -5..=10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemperatureRow {
    pub temperature: i32,
    /// First day whose p5 temperature is at least `temperature`.
    pub start: Option<DayOfYear>,
    /// Last day whose p5 temperature is at least `temperature`.
    pub end: Option<DayOfYear>,
}

/// One row per temperature in [`TABLE_TEMPERATURES`].
pub fn build_temperature_table(stats: &DailyValues<Stats>) -> Vec<TemperatureRow> {
    TABLE_TEMPERATURES
        .map(|temperature| {
            let reached = |(_, s): &(&DayOfYear, &Stats)| s.p5 >= f64::from(temperature);
            TemperatureRow {
                temperature,
                start: stats.iter().find(reached).map(|(d, _)| d.clone()),
                end: stats.iter().rev().find(reached).map(|(d, _)| d.clone()),
            }
        })
        .collect()
}
