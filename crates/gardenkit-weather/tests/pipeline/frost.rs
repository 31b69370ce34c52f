use gardenkit_weather::chart::build_window_annotations;
use gardenkit_weather::{
    get_frost_windows, DailyValues, DayOfYear, DayWindow, RiskThresholds, TemperatureHistory,
};

fn day(s: &str) -> DayOfYear {
    s.parse().unwrap()
}

fn january(probabilities: &[f64]) -> DailyValues<f64> {
    probabilities
        .iter()
        .enumerate()
        .map(|(i, p)| (DayOfYear::new(1, i as u32 + 1), *p))
        .collect()
}

#[test]
fn test_frost_windows_around_the_middle() {
    let probs = january(&[1.0, 1.0, 0.5, 0.1, 0.0, 0.0, 0.0, 0.05, 0.3, 1.0, 1.0]);
    let windows = get_frost_windows(&probs, 0.2).unwrap();

    assert_eq!(windows.frost_free, DayWindow::new(day("01-05"), day("01-07")));
    assert_eq!(windows.low_risk, DayWindow::new(day("01-04"), day("01-08")));
}

#[test]
fn test_frost_windows_reach_sequence_edges() {
    let probs = january(&[0.1, 0.0, 0.0, 0.0, 0.0]);
    let windows = get_frost_windows(&probs, 0.2).unwrap();

    assert_eq!(windows.frost_free, DayWindow::new(day("01-02"), day("01-05")));
    assert_eq!(windows.low_risk, DayWindow::new(day("01-01"), day("01-05")));
}

#[test]
fn test_only_the_middle_run_is_found() {
    let probs = january(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
    let windows = get_frost_windows(&probs, 0.2).unwrap();
    assert_eq!(windows.frost_free, DayWindow::new(day("01-04"), day("01-05")));
}

#[test]
fn test_risk_annotations() {
    let probs = january(&[0.9, 0.3, 0.3, 0.3, 0.05, 0.05, 0.05, 0.0, 0.0, 0.0, 0.0, 0.6]);
    let annotations = build_window_annotations(&probs, &RiskThresholds::default());

    let labels: Vec<&str> = annotations.iter().map(|a| a.label.as_str()).collect();
    assert_eq!(labels, vec!["🌱", "❄", "❄❄"]);
    assert_eq!(annotations[0].window, DayWindow::new(day("01-08"), day("01-11")));
    assert_eq!(annotations[0].color, "rgba(100, 256, 100, 0.1)");
    assert_eq!(annotations[1].window, DayWindow::new(day("01-05"), day("01-07")));
    assert_eq!(annotations[2].window, DayWindow::new(day("01-02"), day("01-04")));
    assert_eq!(annotations[2].x_max - annotations[2].x_min, 2 * 86_400_000);
}

#[test]
fn test_empty_history() {
    let history = TemperatureHistory::from_grouped(&Default::default(), 0.0);
    assert!(history.is_empty());
    assert!(history.frost_windows(0.2).is_none());
    assert!(history.annotations(&RiskThresholds::default()).is_empty());
    assert_eq!(history.temperature_table().len(), 16);
}
