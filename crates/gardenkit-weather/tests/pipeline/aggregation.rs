use chrono::{Duration, NaiveDate, NaiveDateTime};
use gardenkit_weather::chart::{FROST_PROBABILITY, YEARS_WITH_DATA};
use gardenkit_weather::{
    get_grouped_stats, get_min_temperature_probabilities, group_by_day_of_year, DayOfYear,
    TemperatureHistory,
};

/// Hourly timestamps covering `days` days starting at midnight of `start`.
fn hourly(start: NaiveDate, days: i64) -> Vec<NaiveDateTime> {
    let midnight = start.and_hms_opt(0, 0, 0).unwrap();
    (0..days * 24).map(|h| midnight + Duration::hours(h)).collect()
}

fn day(s: &str) -> DayOfYear {
    s.parse().unwrap()
}

#[test]
fn test_group_by_day_of_year_merges_years() {
    let mut timestamps = hourly(NaiveDate::from_ymd_opt(2001, 3, 1).unwrap(), 2);
    timestamps.extend(hourly(NaiveDate::from_ymd_opt(2002, 3, 1).unwrap(), 2));
    let samples: Vec<f64> = (0..timestamps.len()).map(|i| i as f64).collect();

    let grouped = group_by_day_of_year(&samples, &timestamps).unwrap();

    let keys: Vec<&str> = grouped.keys().map(DayOfYear::as_str).collect();
    assert_eq!(keys, vec!["03-01", "03-02"]);
    assert_eq!(grouped[&day("03-01")].len(), 48);
    assert_eq!(grouped[&day("03-01")][0], 0.0);
    assert_eq!(grouped[&day("03-01")][24], 48.0);
}

#[test]
fn test_keys_are_chronological() {
    // Timestamps deliberately out of order
    let mut timestamps = hourly(NaiveDate::from_ymd_opt(2001, 12, 31).unwrap(), 1);
    timestamps.extend(hourly(NaiveDate::from_ymd_opt(2001, 1, 1).unwrap(), 1));
    timestamps.extend(hourly(NaiveDate::from_ymd_opt(2001, 6, 15).unwrap(), 1));
    let samples = vec![0.0; timestamps.len()];

    let grouped = group_by_day_of_year(&samples, &timestamps).unwrap();
    let keys: Vec<&str> = grouped.keys().map(DayOfYear::as_str).collect();
    assert_eq!(keys, vec!["01-01", "06-15", "12-31"]);
}

#[test]
fn test_min_temperature_probability_counts_years() {
    // Four years of 1 March: one year dips to -1 at night, one hits exactly 0
    let mut samples = Vec::new();
    for night in [5.0, -1.0, 0.0, 3.0] {
        let mut year = vec![10.0; 24];
        year[3] = night;
        samples.extend(year);
    }
    let mut timestamps = Vec::new();
    for y in 2001..=2004 {
        timestamps.extend(hourly(NaiveDate::from_ymd_opt(y, 3, 1).unwrap(), 1));
    }
    let grouped = group_by_day_of_year(&samples, &timestamps).unwrap();

    let probabilities = get_min_temperature_probabilities(&grouped, 0.0);
    assert_eq!(probabilities[&day("03-01")], 0.5);
    let probabilities = get_min_temperature_probabilities(&grouped, -5.0);
    assert_eq!(probabilities[&day("03-01")], 0.0);
}

#[test]
fn test_grouped_stats_are_repeatable() {
    let timestamps = hourly(NaiveDate::from_ymd_opt(2010, 5, 1).unwrap(), 3);
    let samples: Vec<f64> = (0..timestamps.len()).map(|i| (i % 17) as f64 - 4.0).collect();
    let grouped = group_by_day_of_year(&samples, &timestamps).unwrap();

    let first = get_grouped_stats(&grouped);
    let second = get_grouped_stats(&grouped);
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
    assert!(first.values().all(|s| s.value_count == 24));
}

#[test]
fn test_history_series() {
    let mut timestamps = Vec::new();
    for y in 2001..=2003 {
        timestamps.extend(hourly(NaiveDate::from_ymd_opt(y, 2, 28).unwrap(), 2));
    }
    let samples = vec![1.5; timestamps.len()];
    let grouped = group_by_day_of_year(&samples, &timestamps).unwrap();
    let history = TemperatureHistory::from_grouped(&grouped, 0.0);

    let series = history.chart_series();
    assert_eq!(series.len(), 5);
    let years = series.iter().find(|s| s.label == YEARS_WITH_DATA).unwrap();
    // 2001-2003 have no 29 Feb, so 28 Feb and 1 Mar each hold three years
    assert!(years.data.iter().all(|p| p.y == 3.0));
    let frost = series.iter().find(|s| s.label == FROST_PROBABILITY).unwrap();
    assert!(frost.data.iter().all(|p| p.y == 0.0));
    assert!(years.data.windows(2).all(|w| w[0].x < w[1].x));
}
