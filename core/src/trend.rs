//! Synthetic monthly rainfall series and the chart's summary statistics.
//!
//! The series ends at the current month and reaches back at most
//! `max_months - 1` months, clamped at January. It never wraps into
//! the previous year, so in March it has three entries.

use crate::{config::TrendConfig, rng::SimRng, types::month_label};
use chrono::Month;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RainfallPoint {
    pub month:       Month,
    /// Whole millimetres, never below the configured floor.
    pub rainfall_mm: u32,
}

impl Serialize for RainfallPoint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("RainfallPoint", 2)?;
        s.serialize_field("month", month_label(self.month))?;
        s.serialize_field("rainfall", &self.rainfall_mm)?;
        s.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RainfallTrend(Vec<RainfallPoint>);

impl RainfallTrend {
    pub fn points(&self) -> &[RainfallPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn stats(&self) -> Option<TrendStats> {
        TrendStats::from_points(&self.0)
    }
}

/// Months covered by a series ending at `current`, oldest first.
pub fn trend_months(current: Month, max_months: u32) -> Vec<Month> {
    let end = current.number_from_month();
    let start = end.saturating_sub(max_months.saturating_sub(1)).max(1);
    (start..=end)
        .filter_map(|n| u8::try_from(n).ok())
        .filter_map(|n| Month::try_from(n).ok())
        .collect()
}

pub fn generate_trend(current: Month, config: &TrendConfig, rng: &mut SimRng) -> RainfallTrend {
    let points = trend_months(current, config.max_months)
        .into_iter()
        .enumerate()
        .map(|(index, month)| {
            let base = config.base_mm + (index as f64 * config.frequency).sin() * config.amplitude_mm;
            let noise = rng.jitter(config.noise_mm);
            let rainfall = (base + noise).round().max(config.floor_mm);
            RainfallPoint { month, rainfall_mm: rainfall as u32 }
        })
        .collect();
    RainfallTrend(points)
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Up   => "↑",
            Self::Down => "↓",
        }
    }
}

/// Summary tiles under the rainfall chart.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TrendStats {
    pub average_mm: u32,
    pub peak_mm:    u32,
    /// Absolute first-to-last change, whole percent.
    pub change_pct: u32,
    /// Up only when the last month is strictly wetter than the first.
    pub direction:  TrendDirection,
}

impl TrendStats {
    pub fn from_points(points: &[RainfallPoint]) -> Option<Self> {
        let first = points.first()?.rainfall_mm as f64;
        let last = points.last()?.rainfall_mm as f64;

        let total: f64 = points.iter().map(|p| p.rainfall_mm as f64).sum();
        let average_mm = round_half_up(total / points.len() as f64) as u32;
        let peak_mm = points.iter().map(|p| p.rainfall_mm).max()?;

        let change_pct = if first > 0.0 {
            round_half_up((last - first) / first * 100.0).abs() as u32
        } else {
            0
        };
        let direction = if last > first { TrendDirection::Up } else { TrendDirection::Down };

        Some(Self { average_mm, peak_mm, change_pct, direction })
    }
}

// Halves round toward +inf, so -12.5% reads as 12%.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
