//! Simulation parameters: reading ranges and the rainfall curve.
//!
//! `SimConfig::default()` carries the production values. A JSON file
//! may override any subset of them; missing fields keep their defaults.
//! Map and display constants live in overlay.rs and are not configurable.

use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};

/// Inclusive bounds for one uniform draw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

impl SampleRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    fn validate(&self, field: &'static str) -> SimResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(SimError::InvalidRange { field, min: self.min, max: self.max });
        }
        Ok(())
    }
}

/// Where each simulated reading is drawn from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReadingRanges {
    /// Volumetric soil moisture, percent.
    pub soil_moisture:    SampleRange,
    /// 30-day rainfall, millimetres.
    pub rainfall:         SampleRange,
    /// NDVI-style vegetation index.
    pub vegetation_index: SampleRange,
    /// Air temperature, degrees Celsius.
    pub temperature:      SampleRange,
}

impl Default for ReadingRanges {
    fn default() -> Self {
        Self {
            soil_moisture:    SampleRange::new(20.0, 60.0),
            rainfall:         SampleRange::new(50.0, 200.0),
            vegetation_index: SampleRange::new(0.3, 0.8),
            temperature:      SampleRange::new(20.0, 30.0),
        }
    }
}

/// Shape of the synthetic monthly rainfall curve:
/// `max(floor, round(base + sin(i * frequency) * amplitude + noise))`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrendConfig {
    pub base_mm:      f64,
    pub amplitude_mm: f64,
    pub frequency:    f64,
    /// Noise is uniform in [-noise_mm, noise_mm).
    pub noise_mm:     f64,
    pub floor_mm:     f64,
    /// Longest series, ending at the current month.
    pub max_months:   u32,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            base_mm:      80.0,
            amplitude_mm: 40.0,
            frequency:    0.5,
            noise_mm:     15.0,
            floor_mm:     20.0,
            max_months:   6,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub readings: ReadingRanges,
    pub trend:    TrendConfig,
}

impl SimConfig {
    /// Load overrides from a JSON file and validate the result.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config = Self::from_json(&content)
            .map_err(|e| anyhow::anyhow!("Cannot load {path}: {e}"))?;
        log::debug!("Loaded config from {path}");
        Ok(config)
    }

    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SimResult<()> {
        self.readings.soil_moisture.validate("readings.soil_moisture")?;
        self.readings.rainfall.validate("readings.rainfall")?;
        self.readings.vegetation_index.validate("readings.vegetation_index")?;
        self.readings.temperature.validate("readings.temperature")?;

        let t = &self.trend;
        if t.max_months == 0 || t.max_months > 12 {
            return Err(SimError::InvalidConfig(format!(
                "trend.max_months must be in 1..=12, got {}",
                t.max_months
            )));
        }
        let curve = [t.base_mm, t.amplitude_mm, t.frequency, t.noise_mm, t.floor_mm];
        if curve.iter().any(|v| !v.is_finite()) || t.noise_mm < 0.0 || t.floor_mm < 0.0 {
            return Err(SimError::InvalidConfig(
                "trend parameters must be finite and noise/floor non-negative".into(),
            ));
        }
        Ok(())
    }
}
