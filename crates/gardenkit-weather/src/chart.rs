//! Chart data derived from the per-day statistics.
//!
//! Only the data is produced here: series of `(x, y)` points with x in Unix
//! epoch milliseconds of the day in the leap year 2020, and box annotations
//! for frost risk windows. Drawing is left to the chart surface.

use gardenkit_core::constants::HOURS_PER_DAY;
use serde::{Deserialize, Serialize};

use crate::statistics::Stats;
use crate::weather_data::{get_probability_threshold_windows, DailyValues, DayOfYear, DayWindow};

pub const MEAN_TEMPERATURE: &str = "Mean Temperature";
pub const MAX_TEMPERATURE: &str = "Maximum Temperature (p95)";
pub const MIN_TEMPERATURE: &str = "Minimum Temperature (p5)";
pub const YEARS_WITH_DATA: &str = "Number of years with data";
pub const FROST_PROBABILITY: &str = "Frost Probability";

const FROST_FREE_COLOR: &str = "rgba(100, 256, 100, 0.1)";
const LOW_RISK_COLOR: &str = "rgba(100, 100, 200, 0.2)";
const HIGH_RISK_COLOR: &str = "rgba(0, 0, 200, 0.2)";

/// Y axis a series is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartAxis {
    /// Degrees Celsius.
    Temperature,
    /// Fraction in `[0, 1]`.
    Probability,
    /// Hidden auxiliary axis.
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: i64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub label: String,
    pub axis: ChartAxis,
    pub data: Vec<ChartPoint>,
}

/// Shaded day range with a short label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowAnnotation {
    pub window: DayWindow,
    pub x_min: i64,
    pub x_max: i64,
    pub color: String,
    pub label: String,
}

/// Probability bands the risk annotations are computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskThresholds {
    /// Upper bound (exclusive) of the low-risk band.
    pub low_risk: f64,
    /// Upper bound (exclusive) of the high-risk band.
    pub high_risk: f64,
    /// Shortest run of days that gets annotated.
    pub min_days: usize,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            low_risk: 0.1,
            high_risk: 0.5,
            min_days: 3,
        }
    }
}

/// Epoch milliseconds of the day in 2020, `None` for an invalid day.
pub fn day_timestamp(day: &DayOfYear) -> Option<i64> {
    Some(
        day.in_reference_year()?
            .and_hms_opt(0, 0, 0)?
            .and_utc()
            .timestamp_millis(),
    )
}

fn series<T>(
    label: &str,
    axis: ChartAxis,
    values: &DailyValues<T>,
    y: impl Fn(&T) -> f64,
) -> ChartSeries {
    ChartSeries {
        label: label.to_string(),
        axis,
        data: values
            .iter()
            .filter_map(|(day, value)| {
                Some(ChartPoint {
                    x: day_timestamp(day)?,
                    y: y(value),
                })
            })
            .collect(),
    }
}

/// Builds the temperature, coverage and frost probability series.
pub fn build_series(
    stats: &DailyValues<Stats>,
    frost_probabilities: &DailyValues<f64>,
) -> Vec<ChartSeries> {
    vec![
        series(MEAN_TEMPERATURE, ChartAxis::Temperature, stats, |s| s.mean),
        series(MAX_TEMPERATURE, ChartAxis::Temperature, stats, |s| s.p95),
        series(MIN_TEMPERATURE, ChartAxis::Temperature, stats, |s| s.p5),
        series(YEARS_WITH_DATA, ChartAxis::Count, stats, |s| {
            s.value_count as f64 / HOURS_PER_DAY as f64
        }),
        series(
            FROST_PROBABILITY,
            ChartAxis::Probability,
            frost_probabilities,
            |p| *p,
        ),
    ]
}

/// Builds frost-free, low-risk and high-risk window annotations.
///
/// Frost free means a probability of exactly zero; low risk covers
/// `(0, low_risk)` and high risk `[low_risk, high_risk)`.
pub fn build_window_annotations(
    frost_probabilities: &DailyValues<f64>,
    thresholds: &RiskThresholds,
) -> Vec<WindowAnnotation> {
    let bands = [
        (0.0, f64::MIN_POSITIVE, FROST_FREE_COLOR, "🌱"),
        (f64::MIN_POSITIVE, thresholds.low_risk, LOW_RISK_COLOR, "❄"),
        (thresholds.low_risk, thresholds.high_risk, HIGH_RISK_COLOR, "❄❄"),
    ];
    bands
        .iter()
        .flat_map(|&(min, max, color, label)| {
            get_probability_threshold_windows(frost_probabilities, min, max, thresholds.min_days)
                .into_iter()
                .filter_map(move |window| {
                    Some(WindowAnnotation {
                        x_min: day_timestamp(&window.first)?,
                        x_max: day_timestamp(&window.last)?,
                        window,
                        color: color.to_string(),
                        label: label.to_string(),
                    })
                })
        })
        .collect()
}
