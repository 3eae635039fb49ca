//! Farm snapshot: one immutable bundle of simulated conditions.
//!
//! A snapshot is created fresh for every simulation call and never
//! mutated. The dashboard drops it when the next one arrives.

use crate::{
    classification::ReadinessLevel,
    recommendation::Recommendation,
    trend::RainfallTrend,
    types::Score,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four raw environmental readings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Readings {
    pub soil_moisture:    f64,
    pub rainfall:         f64,
    pub vegetation_index: f64,
    pub temperature:      f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FarmSnapshot {
    pub id:              Uuid,
    pub readiness_score: Score,
    #[serde(flatten)]
    pub readings:        Readings,
    pub recommendation:  Recommendation,
    pub rainfall_trend:  RainfallTrend,
}

impl FarmSnapshot {
    pub fn level(&self) -> ReadinessLevel {
        ReadinessLevel::from_score(self.readiness_score as f64)
    }
}
