//! Readiness scoring tests.
//!
//! Tests cover: tier boundaries, the all-optimal plateau, bounds over
//! the whole sampling domain, and non-finite inputs.

use plantready_core::{
    rng::SimRng,
    scoring::{score, Indicator, Tier},
};

#[test]
fn exact_optimal_lower_bounds_score_100() {
    // 35 + 30 + 20 + 15
    assert_eq!(score(30.0, 100.0, 0.4, 22.0), 100);
}

#[test]
fn exact_optimal_upper_bounds_score_100() {
    assert_eq!(score(50.0, 150.0, 0.7, 28.0), 100);
}

#[test]
fn sampling_floor_scores_35() {
    // moisture poor (5) + rainfall poor (5) + vegetation acceptable (15)
    // + temperature acceptable (10)
    assert_eq!(score(20.0, 50.0, 0.3, 20.0), 35);
}

#[test]
fn every_reading_inside_optimal_ranges_scores_100() {
    let mut rng = SimRng::new(0x5EED);
    for _ in 0..2_000 {
        let moisture = rng.uniform(30.0, 50.0);
        let rainfall = rng.uniform(100.0, 150.0);
        let ndvi = rng.uniform(0.4, 0.7);
        let temp = rng.uniform(22.0, 28.0);
        assert_eq!(
            score(moisture, rainfall, ndvi, temp),
            100,
            "Optimal readings should score 100: {moisture} {rainfall} {ndvi} {temp}"
        );
    }
}

#[test]
fn score_stays_in_bounds_for_any_input() {
    let mut rng = SimRng::new(0xB0B);
    for _ in 0..5_000 {
        let s = score(
            rng.uniform(-100.0, 300.0),
            rng.uniform(-100.0, 500.0),
            rng.uniform(-1.0, 2.0),
            rng.uniform(-40.0, 60.0),
        );
        assert!(s <= 100, "Score out of range: {s}");
    }
}

#[test]
fn worst_case_scores_18() {
    assert_eq!(score(0.0, 0.0, 0.0, 0.0), 5 + 5 + 5 + 3);
    assert_eq!(score(f64::NAN, f64::NAN, f64::NAN, f64::NAN), 18);
    assert_eq!(score(f64::INFINITY, f64::NEG_INFINITY, 9.0, 99.0), 18);
}

#[test]
fn acceptable_tier_edges() {
    assert_eq!(Indicator::SoilMoisture.classify(25.0), Tier::Acceptable);
    assert_eq!(Indicator::SoilMoisture.classify(55.0), Tier::Acceptable);
    assert_eq!(Indicator::SoilMoisture.classify(55.01), Tier::Poor);
    assert_eq!(Indicator::Rainfall.classify(80.0), Tier::Acceptable);
    assert_eq!(Indicator::Rainfall.classify(170.0), Tier::Acceptable);
    assert_eq!(Indicator::Rainfall.classify(79.9), Tier::Poor);
    assert_eq!(Indicator::VegetationIndex.classify(0.8), Tier::Acceptable);
    assert_eq!(Indicator::Temperature.classify(18.0), Tier::Acceptable);
    assert_eq!(Indicator::Temperature.classify(30.5), Tier::Poor);
}

#[test]
fn points_add_up_per_indicator() {
    // optimal moisture, acceptable rainfall, poor vegetation, poor temperature
    assert_eq!(score(40.0, 90.0, 0.9, 35.0), 35 + 20 + 5 + 3);
    assert_eq!(Indicator::Temperature.points(35.0), 3);
    assert_eq!(Indicator::VegetationIndex.points(0.5), 20);
}
