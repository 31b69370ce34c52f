//! Interfaces to the remote data sources.
//!
//! Implementations talk to the archive weather service and the elevation and
//! time zone lookups. Failures are reported once and never retried here.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use gardenkit_core::GeoPosition;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WeatherError};

/// Hourly temperature two meters above ground.
pub const TEMPERATURE_FIELD: &str = "temperature_2m";

/// Parameters of an hourly weather history request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub elevation: f64,
    pub timezone: String,
    pub field: String,
}

impl WeatherRequest {
    /// Hourly temperatures from 2000-01-01 through 2023-12-31.
    pub fn temperature_history(position: &GeoPosition, elevation: f64, timezone: &str) -> Self {
        Self {
            latitude: position.latitude,
            longitude: position.longitude,
            start_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN),
            end_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap_or(NaiveDate::MAX),
            elevation,
            timezone: timezone.to_string(),
            field: TEMPERATURE_FIELD.to_string(),
        }
    }
}

/// Parallel arrays of hourly timestamps (local time of the site) and values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlySeries {
    pub timestamps: Vec<NaiveDateTime>,
    pub values: Vec<f64>,
}

impl HourlySeries {
    /// Fails when the arrays do not line up.
    pub fn new(timestamps: Vec<NaiveDateTime>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(WeatherError::LengthMismatch {
                samples: values.len(),
                timestamps: timestamps.len(),
            });
        }
        Ok(Self { timestamps, values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Source of historical hourly weather data.
#[async_trait]
pub trait WeatherDataProvider: Send + Sync {
    /// Fetches the requested field at hourly resolution.
    async fn fetch_hourly(&self, request: &WeatherRequest) -> Result<HourlySeries>;
}

/// Source of static information about a site.
#[async_trait]
pub trait SiteInfoProvider: Send + Sync {
    /// Ground elevation in meters.
    async fn elevation(&self, position: &GeoPosition) -> Result<f64>;

    /// IANA time zone name, e.g. `Europe/Berlin`.
    async fn timezone(&self, position: &GeoPosition) -> Result<String>;
}
