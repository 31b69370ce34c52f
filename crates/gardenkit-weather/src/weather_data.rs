//! Aggregation of multi-year hourly weather samples by calendar day.
//!
//! Samples are bucketed under a [`DayOfYear`] key (`MM-dd`, year dropped), so
//! every bucket holds the hourly values of that calendar day across all
//! sampled years, 24 values per year.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use gardenkit_core::constants::HOURS_PER_DAY;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, WeatherError};
use crate::statistics::{get_stats, Stats};

/// Calendar day without year, formatted `MM-dd`.
///
/// The zero padding makes the lexicographic order chronological.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayOfYear(String);

impl DayOfYear {
    pub fn new(month: u32, day: u32) -> Self {
        DayOfYear(format!("{:02}-{:02}", month, day))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.month(), date.day())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The day in the leap year 2020, so `02-29` resolves as well.
    pub fn in_reference_year(&self) -> Option<NaiveDate> {
        let (month, day) = self.0.split_once('-')?;
        NaiveDate::from_ymd_opt(2020, month.parse().ok()?, day.parse().ok()?)
    }
}

impl fmt::Display for DayOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for DayOfYear {
    type Err = WeatherError;

    fn from_str(s: &str) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&format!("2020-{}", s), "%Y-%m-%d")
            .map_err(|_| WeatherError::InvalidTimestamp(s.to_string()))?;
        Ok(Self::from_date(date))
    }
}

/// Samples bucketed by calendar day, in chronological key order.
pub type GroupedData = BTreeMap<DayOfYear, Vec<f64>>;

/// A value per calendar day, in chronological key order.
pub type DailyValues<T> = BTreeMap<DayOfYear, T>;

/// Inclusive range of calendar days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    pub first: DayOfYear,
    pub last: DayOfYear,
}

impl DayWindow {
    pub fn new(first: DayOfYear, last: DayOfYear) -> Self {
        Self { first, last }
    }
}

/// Frost-free and low-risk windows around the middle of the year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrostWindows {
    /// Days with no frost in any sampled year.
    pub frost_free: DayWindow,
    /// Extends the frost-free window while the frost probability stays below
    /// the low-risk threshold.
    pub low_risk: DayWindow,
}

/// Buckets hourly samples by the calendar day of their timestamp.
pub fn group_by_day_of_year(
    samples: &[f64],
    timestamps: &[NaiveDateTime],
) -> Result<GroupedData> {
    if samples.len() != timestamps.len() {
        return Err(WeatherError::LengthMismatch {
            samples: samples.len(),
            timestamps: timestamps.len(),
        });
    }
    let mut grouped = GroupedData::new();
    for (value, timestamp) in samples.iter().zip(timestamps) {
        grouped
            .entry(DayOfYear::from_date(timestamp.date()))
            .or_default()
            .push(*value);
    }
    debug!("Grouped {} samples into {} days", samples.len(), grouped.len());
    Ok(grouped)
}

/// Summary statistics per calendar day. Days without samples are left out.
pub fn get_grouped_stats(grouped: &GroupedData) -> DailyValues<Stats> {
    grouped
        .iter()
        .filter_map(|(day, samples)| get_stats(samples).map(|stats| (day.clone(), stats)))
        .collect()
}

/// Fraction of sampled years in which the day's minimum was at or below
/// `max_temperature`.
///
/// Each bucket is split into consecutive runs of 24 hourly values, one run
/// per year. A trailing partial run counts as a year of its own.
pub fn get_min_temperature_probabilities(
    grouped: &GroupedData,
    max_temperature: f64,
) -> DailyValues<f64> {
    grouped
        .iter()
        .filter(|(_, samples)| !samples.is_empty())
        .map(|(day, samples)| {
            let mut years = 0usize;
            let mut hits = 0usize;
            for chunk in samples.chunks(HOURS_PER_DAY) {
                years += 1;
                let min = chunk.iter().copied().fold(f64::INFINITY, f64::min);
                if min <= max_temperature {
                    hits += 1;
                }
            }
            (day.clone(), hits as f64 / years as f64)
        })
        .collect()
}

/// Locates the frost-free run through the middle day of the sequence and the
/// low-risk run around it.
///
/// Only the single run containing the middle day is found, which fits a
/// climate with one winter per calendar year. Returns `None` for an empty
/// sequence or when the middle day itself has a non-zero probability.
pub fn get_frost_windows(
    probabilities: &DailyValues<f64>,
    low_risk_threshold: f64,
) -> Option<FrostWindows> {
    let days: Vec<(&DayOfYear, f64)> = probabilities.iter().map(|(d, p)| (d, *p)).collect();
    let middle = days.len() / 2;
    if days.get(middle)?.1 != 0.0 {
        debug!("Middle day {} is not frost free", days[middle].0);
        return None;
    }

    let (free_first, free_last) = expand_run(&days, middle, middle, |p| p == 0.0);
    let (low_first, low_last) = expand_run(&days, free_first, free_last, |p| p < low_risk_threshold);

    Some(FrostWindows {
        frost_free: DayWindow::new(days[free_first].0.clone(), days[free_last].0.clone()),
        low_risk: DayWindow::new(days[low_first].0.clone(), days[low_last].0.clone()),
    })
}

/// Grows `[first, last]` outward while the neighbouring days satisfy `keep`.
fn expand_run(
    days: &[(&DayOfYear, f64)],
    mut first: usize,
    mut last: usize,
    keep: impl Fn(f64) -> bool,
) -> (usize, usize) {
    while first > 0 && keep(days[first - 1].1) {
        first -= 1;
    }
    while last + 1 < days.len() && keep(days[last + 1].1) {
        last += 1;
    }
    (first, last)
}

/// Finds all runs of at least `min_size` consecutive days whose probability
/// lies in `[min_probability, max_probability)`.
pub fn get_probability_threshold_windows(
    probabilities: &DailyValues<f64>,
    min_probability: f64,
    max_probability: f64,
    min_size: usize,
) -> Vec<DayWindow> {
    let mut windows = Vec::new();
    let mut run: Option<(&DayOfYear, &DayOfYear, usize)> = None;

    for (day, p) in probabilities {
        if min_probability <= *p && *p < max_probability {
            run = Some(match run {
                Some((first, _, len)) => (first, day, len + 1),
                None => (day, day, 1),
            });
        } else if let Some((first, last, len)) = run.take() {
            if len >= min_size {
                windows.push(DayWindow::new(first.clone(), last.clone()));
            }
        }
    }
    if let Some((first, last, len)) = run {
        if len >= min_size {
            windows.push(DayWindow::new(first.clone(), last.clone()));
        }
    }
    windows
}
