//! Rainfall trend generator tests.
//!
//! Tests cover: series length per month, chronological order, the
//! rainfall floor, and the shape of the base curve.

use chrono::Month;
use plantready_core::{
    config::TrendConfig,
    rng::SimRng,
    trend::generate_trend,
};

const ALL_MONTHS: [Month; 12] = [
    Month::January, Month::February, Month::March, Month::April,
    Month::May, Month::June, Month::July, Month::August,
    Month::September, Month::October, Month::November, Month::December,
];

#[test]
fn length_is_one_to_six_and_ends_at_current_month() {
    let config = TrendConfig::default();
    let mut rng = SimRng::new(42);

    for month in ALL_MONTHS {
        let trend = generate_trend(month, &config, &mut rng);
        let expected = month.number_from_month().min(6) as usize;
        assert_eq!(trend.len(), expected, "Wrong length for {month:?}");
        assert_eq!(trend.points().last().map(|p| p.month), Some(month));
    }
}

#[test]
fn months_are_strictly_chronological_within_the_year() {
    let config = TrendConfig::default();
    let mut rng = SimRng::new(7);

    for month in ALL_MONTHS {
        let trend = generate_trend(month, &config, &mut rng);
        let numbers: Vec<u32> = trend.points().iter().map(|p| p.month.number_from_month()).collect();
        for pair in numbers.windows(2) {
            assert_eq!(pair[1], pair[0] + 1, "Not consecutive for {month:?}: {numbers:?}");
        }
    }
}

#[test]
fn rainfall_never_below_floor() {
    let config = TrendConfig::default();
    let mut rng = SimRng::new(0xF100);

    for _ in 0..500 {
        let trend = generate_trend(Month::December, &config, &mut rng);
        for p in trend.points() {
            assert!(p.rainfall_mm >= 20, "Rainfall below floor: {}", p.rainfall_mm);
        }
    }
}

#[test]
fn floor_applies_when_curve_dips() {
    let config = TrendConfig { base_mm: 0.0, amplitude_mm: 0.0, noise_mm: 0.0, ..TrendConfig::default() };
    let mut rng = SimRng::new(1);
    let trend = generate_trend(Month::June, &config, &mut rng);
    assert!(trend.points().iter().all(|p| p.rainfall_mm == 20));
}

#[test]
fn noiseless_curve_follows_sine() {
    let config = TrendConfig { noise_mm: 0.0, ..TrendConfig::default() };
    let mut rng = SimRng::new(1);
    let trend = generate_trend(Month::June, &config, &mut rng);
    let values: Vec<u32> = trend.points().iter().map(|p| p.rainfall_mm).collect();
    // round(80 + sin(i * 0.5) * 40) for i = 0..6
    assert_eq!(values, vec![80, 99, 114, 120, 116, 104]);
}

#[test]
fn noise_stays_within_fifteen_mm_of_curve() {
    let config = TrendConfig::default();
    let mut rng = SimRng::new(99);
    for _ in 0..200 {
        let trend = generate_trend(Month::June, &config, &mut rng);
        for (i, p) in trend.points().iter().enumerate() {
            let base = 80.0 + (i as f64 * 0.5).sin() * 40.0;
            let diff = (p.rainfall_mm as f64 - base).abs();
            assert!(diff <= 15.5, "Month {i} strayed {diff}mm from the curve");
        }
    }
}

#[test]
fn serializes_as_month_label_and_rainfall() {
    let config = TrendConfig { noise_mm: 0.0, ..TrendConfig::default() };
    let mut rng = SimRng::new(1);
    let trend = generate_trend(Month::February, &config, &mut rng);
    let json = serde_json::to_value(&trend).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "month": "Jan", "rainfall": 80 },
            { "month": "Feb", "rainfall": 99 },
        ])
    );
}
