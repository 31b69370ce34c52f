//! Cached temperature history of the site and everything derived from it.
//!
//! The grouped hourly temperatures are cached together with the key of the
//! position they were fetched for. A refresh only hits the provider when the
//! site is fully known and the position changed.

use gardenkit_core::{GeoPosition, LocationData};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chart::{
    build_series, build_window_annotations, ChartSeries, RiskThresholds, WindowAnnotation,
};
use crate::error::{Result, WeatherError};
use crate::provider::{SiteInfoProvider, WeatherDataProvider, WeatherRequest};
use crate::statistics::Stats;
use crate::temperature_table::{build_temperature_table, TemperatureRow};
use crate::weather_data::{
    get_frost_windows, get_grouped_stats, get_min_temperature_probabilities, group_by_day_of_year,
    DailyValues, FrostWindows, GroupedData,
};

/// Grouped hourly temperatures for the position identified by `cache_key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWeatherDataCache {
    pub cache_key: String,
    pub data: GroupedData,
}

/// Everything known about the picked site.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteDetails {
    pub location: LocationData,
    pub elevation: f64,
    pub timezone: String,
}

/// Looks up elevation and time zone of a picked map position.
pub async fn locate_site(
    provider: &dyn SiteInfoProvider,
    position: GeoPosition,
    zoom: f64,
) -> Result<SiteDetails> {
    let location = LocationData::picked(position, zoom);
    let elevation = provider.elevation(&position).await?;
    let timezone = provider.timezone(&position).await?;
    info!(
        "Located site {} at {:.0}m in {}",
        position.cache_key(),
        elevation,
        timezone
    );
    Ok(SiteDetails {
        location,
        elevation,
        timezone,
    })
}

/// Returns the request to issue, or `None` if the cache is current or the
/// site is not fully known yet (no location, zero elevation or no time zone).
pub fn pending_request(
    location: Option<&GeoPosition>,
    elevation: f64,
    timezone: &str,
    cache: Option<&RawWeatherDataCache>,
) -> Option<(String, WeatherRequest)> {
    let position = location?;
    if elevation == 0.0 || timezone.is_empty() {
        return None;
    }
    let cache_key = position.cache_key();
    if cache.is_some_and(|c| c.cache_key == cache_key) {
        return None;
    }
    Some((
        cache_key,
        WeatherRequest::temperature_history(position, elevation, timezone),
    ))
}

/// Fetches the temperature history if the cache is out of date.
///
/// Returns `Ok(None)` when nothing had to be fetched. On error the caller's
/// cache is left as it was.
pub async fn refresh_temperature_history(
    provider: &dyn WeatherDataProvider,
    location: Option<&GeoPosition>,
    elevation: f64,
    timezone: &str,
    cache: Option<&RawWeatherDataCache>,
) -> Result<Option<RawWeatherDataCache>> {
    let Some((cache_key, request)) = pending_request(location, elevation, timezone, cache) else {
        debug!("Temperature history is up to date");
        return Ok(None);
    };

    info!("Fetching temperature history for {}", cache_key);
    let series = provider.fetch_hourly(&request).await?;
    let data = group_by_day_of_year(&series.values, &series.timestamps)?;
    info!(
        "Fetched {} hourly samples covering {} days",
        series.len(),
        data.len()
    );
    Ok(Some(RawWeatherDataCache { cache_key, data }))
}

/// Views derived from a cached temperature history.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureHistory {
    pub stats: DailyValues<Stats>,
    pub frost_probabilities: DailyValues<f64>,
}

impl TemperatureHistory {
    /// Frost is a daily minimum at or below `frost_temperature`.
    pub fn from_grouped(data: &GroupedData, frost_temperature: f64) -> Self {
        Self {
            stats: get_grouped_stats(data),
            frost_probabilities: get_min_temperature_probabilities(data, frost_temperature),
        }
    }

    pub fn from_cache(cache: &RawWeatherDataCache, frost_temperature: f64) -> Self {
        Self::from_grouped(&cache.data, frost_temperature)
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    pub fn frost_windows(&self, low_risk_threshold: f64) -> Option<FrostWindows> {
        get_frost_windows(&self.frost_probabilities, low_risk_threshold)
    }

    pub fn chart_series(&self) -> Vec<ChartSeries> {
        build_series(&self.stats, &self.frost_probabilities)
    }

    pub fn annotations(&self, thresholds: &RiskThresholds) -> Vec<WindowAnnotation> {
        build_window_annotations(&self.frost_probabilities, thresholds)
    }

    pub fn temperature_table(&self) -> Vec<TemperatureRow> {
        build_temperature_table(&self.stats)
    }
}

/// Decodes a cache stored as JSON.
pub fn decode_cache(value: serde_json::Value) -> Result<RawWeatherDataCache> {
    serde_json::from_value(value).map_err(WeatherError::from)
}
