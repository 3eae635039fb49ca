//! Data simulator: produces one complete FarmSnapshot per call.
//!
//! RULES:
//!   - The simulator holds configuration only. No call reads or writes
//!     state left behind by a previous call.
//!   - Randomness comes from the SimRng passed in; the current month
//!     is passed in too, so output is a pure function of (config, rng
//!     state, month).
//!
//! Draw order within one call is fixed: id, soil moisture, rainfall,
//! vegetation index, temperature, then one noise draw per trend month.

use crate::{
    config::{SampleRange, SimConfig},
    recommendation::recommend,
    rng::SimRng,
    scoring::score_readings,
    snapshot::{FarmSnapshot, Readings},
    trend::generate_trend,
};
use chrono::{Datelike, Local, Month};
use uuid::{Builder, Uuid};

#[derive(Debug, Clone, Default)]
pub struct DataSimulator {
    config: SimConfig,
}

impl DataSimulator {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }

    pub fn generate_snapshot(&self, rng: &mut SimRng, current_month: Month) -> FarmSnapshot {
        let id: Uuid = Builder::from_random_bytes(rng.next_bytes16()).into_uuid();
        let readings = self.draw_readings(rng);

        let readiness_score = score_readings(&readings);
        let recommendation = recommend(
            readiness_score,
            readings.soil_moisture,
            readings.rainfall,
            readings.vegetation_index,
        );
        let rainfall_trend = generate_trend(current_month, &self.config.trend, rng);

        log::debug!(
            "snapshot {id} [{}]: score={readiness_score} moisture={:.1} rain={:.0} ndvi={:.2} temp={:.1} trend_len={}",
            rng.name,
            readings.soil_moisture,
            readings.rainfall,
            readings.vegetation_index,
            readings.temperature,
            rainfall_trend.len()
        );

        FarmSnapshot {
            id,
            readiness_score,
            readings,
            recommendation,
            rainfall_trend,
        }
    }

    /// Same as `generate_snapshot`, reading the month from the local clock.
    pub fn generate_snapshot_now(&self, rng: &mut SimRng) -> FarmSnapshot {
        self.generate_snapshot(rng, current_month())
    }

    fn draw_readings(&self, rng: &mut SimRng) -> Readings {
        let ranges = &self.config.readings;
        Readings {
            soil_moisture:    draw(rng, ranges.soil_moisture),
            rainfall:         draw(rng, ranges.rainfall),
            vegetation_index: draw(rng, ranges.vegetation_index),
            temperature:      draw(rng, ranges.temperature),
        }
    }
}

fn draw(rng: &mut SimRng, range: SampleRange) -> f64 {
    rng.uniform(range.min, range.max)
}

/// The local calendar month.
pub fn current_month() -> Month {
    let n = Local::now().month();
    u8::try_from(n)
        .ok()
        .and_then(|n| Month::try_from(n).ok())
        .unwrap_or(Month::January)
}
