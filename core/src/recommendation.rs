//! Recommendation text selection.
//!
//! Tier by score: >= 80 excellent, >= 60 good, >= 40 diagnostic,
//! otherwise not recommended. The diagnostic tier is a priority chain:
//! the first failing check wins (soil moisture, then rainfall, then
//! vegetation), so a dry field is reported as dry even when rainfall
//! is also low.

use crate::types::Score;
use serde::{Serialize, Serializer};
use std::fmt;

pub const EXCELLENT_SCORE: Score = 80;
pub const GOOD_SCORE:      Score = 60;
pub const DIAGNOSTIC_SCORE: Score = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recommendation {
    Excellent,
    Good,
    IrrigationWait,
    RainfallWait,
    SoilHealthWait,
    Marginal,
    NotRecommended,
}

impl Recommendation {
    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent conditions for planting. All key indicators are optimal. \
                                Proceed with planting operations.",
            Self::Good => "Good conditions for planting. Most indicators are favorable. \
                           Consider planting within the next few days.",
            Self::IrrigationWait => "Wait until soil moisture improves. Consider irrigation or \
                                     wait for rainfall before planting.",
            Self::RainfallWait => "Rainfall levels are below optimal. Monitor weather forecasts \
                                   and consider waiting for more rain.",
            Self::SoilHealthWait => "Soil health indicators suggest waiting. Consider soil \
                                     preparation and nutrient management.",
            Self::Marginal => "Conditions are marginal. Monitor closely and prepare for \
                               planting when conditions improve.",
            Self::NotRecommended => "Not recommended for planting. Multiple indicators are \
                                     unfavorable. Wait for better conditions and monitor daily \
                                     updates.",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

// Serialized as the message itself; consumers only ever show the text.
impl Serialize for Recommendation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

pub fn recommend(
    score: Score,
    soil_moisture: f64,
    rainfall: f64,
    vegetation_index: f64,
) -> Recommendation {
    if score >= EXCELLENT_SCORE {
        Recommendation::Excellent
    } else if score >= GOOD_SCORE {
        Recommendation::Good
    } else if score >= DIAGNOSTIC_SCORE {
        if soil_moisture < 30.0 {
            Recommendation::IrrigationWait
        } else if rainfall < 80.0 {
            Recommendation::RainfallWait
        } else if vegetation_index < 0.4 {
            Recommendation::SoilHealthWait
        } else {
            Recommendation::Marginal
        }
    } else {
        Recommendation::NotRecommended
    }
}
