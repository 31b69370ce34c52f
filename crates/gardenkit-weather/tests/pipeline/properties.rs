use gardenkit_weather::{get_stats, quantile};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-9;

proptest! {
    #[test]
    fn quantile_stays_within_sample_range(
        samples in prop::collection::vec(-50.0f64..50.0, 1..64),
        q in 0.0f64..=1.0,
    ) {
        let value = quantile(&samples, q).unwrap();
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(value >= min - TOLERANCE && value <= max + TOLERANCE);
    }

    #[test]
    fn quantile_is_monotonic(
        samples in prop::collection::vec(-50.0f64..50.0, 1..64),
        a in 0.0f64..=1.0,
        b in 0.0f64..=1.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(quantile(&samples, lo).unwrap() <= quantile(&samples, hi).unwrap() + TOLERANCE);
    }

    #[test]
    fn quantile_leaves_input_untouched(samples in prop::collection::vec(-50.0f64..50.0, 0..32)) {
        let before = samples.clone();
        let _ = quantile(&samples, 0.3);
        let _ = get_stats(&samples);
        prop_assert_eq!(samples, before);
    }

    #[test]
    fn stats_percentiles_are_ordered(samples in prop::collection::vec(-50.0f64..50.0, 1..64)) {
        let s = get_stats(&samples).unwrap();
        let ordered = [s.min, s.p1, s.p5, s.p10, s.mode, s.p90, s.p95, s.p99, s.max];
        prop_assert!(ordered.windows(2).all(|w| w[0] <= w[1] + TOLERANCE));
        prop_assert!(s.mean >= s.min - TOLERANCE && s.mean <= s.max + TOLERANCE);
        prop_assert_eq!(s.value_count, samples.len());
    }

    #[test]
    fn odd_median_is_middle_element(mut samples in prop::collection::vec(-50.0f64..50.0, 0..32)) {
        samples.push(0.0);
        if samples.len() % 2 == 0 {
            samples.push(1.0);
        }
        let mut sorted = samples.clone();
        sorted.sort_by(f64::total_cmp);
        prop_assert_eq!(quantile(&samples, 0.5), Some(sorted[sorted.len() / 2]));
    }
}
