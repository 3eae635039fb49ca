//! Readiness levels: the one place the 70/50/30 breakpoints live.
//!
//! The readiness card label, the map overlay colors and the map legend
//! all bucket scores through `ReadinessLevel::from_score`.

use serde::{Deserialize, Serialize};

pub const READY_THRESHOLD:    f64 = 70.0;
pub const MODERATE_THRESHOLD: f64 = 50.0;
pub const MARGINAL_THRESHOLD: f64 = 30.0;

/// RGBA fill, alpha in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    NotReady,
    Marginal,
    Moderate,
    Ready,
}

impl ReadinessLevel {
    /// All levels, best first (legend order).
    pub const ALL: [ReadinessLevel; 4] = [
        ReadinessLevel::Ready,
        ReadinessLevel::Moderate,
        ReadinessLevel::Marginal,
        ReadinessLevel::NotReady,
    ];

    /// Bucket a score. Takes f64 so perturbed overlay scores
    /// share the same breakpoints as integer readiness scores.
    pub fn from_score(score: f64) -> Self {
        if score >= READY_THRESHOLD {
            Self::Ready
        } else if score >= MODERATE_THRESHOLD {
            Self::Moderate
        } else if score >= MARGINAL_THRESHOLD {
            Self::Marginal
        } else {
            Self::NotReady
        }
    }

    /// Qualitative label on the readiness card.
    pub fn card_label(&self) -> &'static str {
        match self {
            Self::Ready    => "Excellent",
            Self::Moderate => "Good",
            Self::Marginal => "Marginal",
            Self::NotReady => "Poor",
        }
    }

    /// Label in the map legend.
    pub fn legend_label(&self) -> &'static str {
        match self {
            Self::Ready    => "Ready",
            Self::Moderate => "Moderate",
            Self::Marginal => "Marginal",
            Self::NotReady => "Not Ready",
        }
    }

    /// Inclusive integer score range covered by this level.
    pub fn score_range(&self) -> (u8, u8) {
        match self {
            Self::Ready    => (70, 100),
            Self::Moderate => (50, 69),
            Self::Marginal => (30, 49),
            Self::NotReady => (0, 29),
        }
    }

    /// Overlay fill color.
    pub fn fill_color(&self) -> Rgba {
        match self {
            Self::Ready    => Rgba::new(34, 197, 94, 0.6),
            Self::Moderate => Rgba::new(251, 191, 36, 0.6),
            Self::Marginal => Rgba::new(251, 146, 60, 0.6),
            Self::NotReady => Rgba::new(239, 68, 68, 0.6),
        }
    }
}
