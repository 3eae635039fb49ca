//! Readiness scoring.
//!
//! Each indicator is classified independently into one of three tiers
//! and awarded fixed points. The tier maxima sum to exactly 100:
//!
//!   indicator         optimal          acceptable       else
//!   soil moisture     [30, 50]   35    [25, 55]   20    5
//!   rainfall          [100, 150] 30    [80, 170]  20    5
//!   vegetation index  [0.4, 0.7] 20    [0.3, 0.8] 15    5
//!   temperature       [22, 28]   15    [18, 30]   10    3
//!
//! All ranges are inclusive. Every function here is total: a NaN
//! reading matches no range and lands in the last tier.

use crate::{snapshot::Readings, types::Score};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Optimal,
    Acceptable,
    Poor,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    SoilMoisture,
    Rainfall,
    VegetationIndex,
    Temperature,
}

/// Tier boundaries and points for one indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub optimal:           (f64, f64),
    pub acceptable:        (f64, f64),
    pub optimal_points:    u32,
    pub acceptable_points: u32,
    pub poor_points:       u32,
}

const SOIL_MOISTURE_BAND: Band = Band {
    optimal: (30.0, 50.0),
    acceptable: (25.0, 55.0),
    optimal_points: 35,
    acceptable_points: 20,
    poor_points: 5,
};

const RAINFALL_BAND: Band = Band {
    optimal: (100.0, 150.0),
    acceptable: (80.0, 170.0),
    optimal_points: 30,
    acceptable_points: 20,
    poor_points: 5,
};

const VEGETATION_BAND: Band = Band {
    optimal: (0.4, 0.7),
    acceptable: (0.3, 0.8),
    optimal_points: 20,
    acceptable_points: 15,
    poor_points: 5,
};

const TEMPERATURE_BAND: Band = Band {
    optimal: (22.0, 28.0),
    acceptable: (18.0, 30.0),
    optimal_points: 15,
    acceptable_points: 10,
    poor_points: 3,
};

pub const MAX_SCORE: Score = 100;

impl Band {
    pub fn classify(&self, value: f64) -> Tier {
        if within(value, self.optimal) {
            Tier::Optimal
        } else if within(value, self.acceptable) {
            Tier::Acceptable
        } else {
            Tier::Poor
        }
    }

    pub fn points(&self, value: f64) -> u32 {
        match self.classify(value) {
            Tier::Optimal    => self.optimal_points,
            Tier::Acceptable => self.acceptable_points,
            Tier::Poor       => self.poor_points,
        }
    }
}

fn within(value: f64, (lo, hi): (f64, f64)) -> bool {
    value >= lo && value <= hi
}

impl Indicator {
    /// Display order used by the metrics panel.
    pub const ALL: [Indicator; 4] = [
        Indicator::SoilMoisture,
        Indicator::Rainfall,
        Indicator::VegetationIndex,
        Indicator::Temperature,
    ];

    pub fn band(&self) -> &'static Band {
        match self {
            Self::SoilMoisture    => &SOIL_MOISTURE_BAND,
            Self::Rainfall        => &RAINFALL_BAND,
            Self::VegetationIndex => &VEGETATION_BAND,
            Self::Temperature     => &TEMPERATURE_BAND,
        }
    }

    pub fn classify(&self, value: f64) -> Tier {
        self.band().classify(value)
    }

    pub fn points(&self, value: f64) -> u32 {
        self.band().points(value)
    }

    /// This indicator's reading out of a snapshot.
    pub fn value_of(&self, readings: &Readings) -> f64 {
        match self {
            Self::SoilMoisture    => readings.soil_moisture,
            Self::Rainfall        => readings.rainfall,
            Self::VegetationIndex => readings.vegetation_index,
            Self::Temperature     => readings.temperature,
        }
    }
}

/// Readiness score from the four raw readings.
pub fn score(soil_moisture: f64, rainfall: f64, vegetation_index: f64, temperature: f64) -> Score {
    let sum = Indicator::SoilMoisture.points(soil_moisture)
        + Indicator::Rainfall.points(rainfall)
        + Indicator::VegetationIndex.points(vegetation_index)
        + Indicator::Temperature.points(temperature);
    sum.min(MAX_SCORE as u32) as Score
}

/// Readiness score for a set of readings.
pub fn score_readings(readings: &Readings) -> Score {
    score(
        readings.soil_moisture,
        readings.rainfall,
        readings.vegetation_index,
        readings.temperature,
    )
}
