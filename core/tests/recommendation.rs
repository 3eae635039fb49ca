//! Recommendation selection tests.
//!
//! Tests cover: score tiers, tier boundaries, and the order of the
//! diagnostic priority chain.

use plantready_core::recommendation::{recommend, Recommendation};

#[test]
fn high_scores_always_get_excellent() {
    for (moisture, rainfall, ndvi) in [(0.0, 0.0, 0.0), (25.0, 60.0, 0.3), (99.0, 999.0, 1.0)] {
        assert_eq!(recommend(85, moisture, rainfall, ndvi), Recommendation::Excellent);
    }
    assert_eq!(recommend(80, 0.0, 0.0, 0.0), Recommendation::Excellent);
    assert_eq!(recommend(100, 40.0, 120.0, 0.5), Recommendation::Excellent);
}

#[test]
fn good_tier_ignores_readings() {
    assert_eq!(recommend(60, 10.0, 10.0, 0.1), Recommendation::Good);
    assert_eq!(recommend(79, 40.0, 120.0, 0.5), Recommendation::Good);
}

#[test]
fn dry_soil_wins_over_healthy_rain_and_vegetation() {
    assert_eq!(recommend(45, 25.0, 150.0, 0.6), Recommendation::IrrigationWait);
}

#[test]
fn dry_soil_wins_even_when_rain_is_also_low() {
    assert_eq!(recommend(45, 25.0, 60.0, 0.2), Recommendation::IrrigationWait);
}

#[test]
fn low_rainfall_checked_after_moisture() {
    assert_eq!(recommend(45, 35.0, 60.0, 0.6), Recommendation::RainfallWait);
    assert_eq!(recommend(59, 30.0, 79.9, 0.2), Recommendation::RainfallWait);
}

#[test]
fn low_vegetation_checked_last() {
    assert_eq!(recommend(50, 35.0, 90.0, 0.35), Recommendation::SoilHealthWait);
}

#[test]
fn marginal_when_no_check_fails() {
    assert_eq!(recommend(40, 30.0, 80.0, 0.4), Recommendation::Marginal);
}

#[test]
fn low_scores_not_recommended() {
    assert_eq!(recommend(39, 40.0, 120.0, 0.5), Recommendation::NotRecommended);
    assert_eq!(recommend(0, 25.0, 60.0, 0.2), Recommendation::NotRecommended);
}

#[test]
fn messages_are_the_dashboard_text() {
    assert_eq!(
        Recommendation::Excellent.to_string(),
        "Excellent conditions for planting. All key indicators are optimal. Proceed with planting operations."
    );
    assert_eq!(
        Recommendation::IrrigationWait.message(),
        "Wait until soil moisture improves. Consider irrigation or wait for rainfall before planting."
    );
    assert_eq!(
        Recommendation::NotRecommended.message(),
        "Not recommended for planting. Multiple indicators are unfavorable. Wait for better conditions and monitor daily updates."
    );
    assert_eq!(
        serde_json::to_string(&Recommendation::RainfallWait).unwrap(),
        "\"Rainfall levels are below optimal. Monitor weather forecasts and consider waiting for more rain.\""
    );
}
