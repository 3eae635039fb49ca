//! Metrics panel view model.
//!
//! One row per indicator. Status is judged against the same optimal
//! range the scorer uses, so a row reads "Optimal" exactly when that
//! indicator earned its top points.

use crate::{
    scoring::{Indicator, Tier},
    snapshot::Readings,
};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MetricStatus {
    Optimal,
    Suboptimal,
}

impl MetricStatus {
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Optimal    => "Optimal",
            Self::Suboptimal => "Monitor",
        }
    }

    /// Width of the progress bar, percent.
    pub fn bar_fill_pct(&self) -> u8 {
        match self {
            Self::Optimal    => 85,
            Self::Suboptimal => 45,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricRow {
    pub indicator:     Indicator,
    pub label:         &'static str,
    pub value:         f64,
    pub display_value: String,
    pub optimal_range: &'static str,
    pub status:        MetricStatus,
}

impl MetricRow {
    pub fn new(indicator: Indicator, value: f64) -> Self {
        let status = match indicator.classify(value) {
            Tier::Optimal => MetricStatus::Optimal,
            Tier::Acceptable | Tier::Poor => MetricStatus::Suboptimal,
        };
        Self {
            indicator,
            label: label(indicator),
            value,
            display_value: format_value(indicator, value),
            optimal_range: optimal_range_label(indicator),
            status,
        }
    }
}

pub fn label(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::SoilMoisture    => "Soil Moisture",
        Indicator::Rainfall        => "Rainfall (30d)",
        Indicator::VegetationIndex => "Vegetation Index",
        Indicator::Temperature     => "Temperature",
    }
}

pub fn format_value(indicator: Indicator, value: f64) -> String {
    match indicator {
        Indicator::SoilMoisture    => format!("{value:.1}%"),
        Indicator::Rainfall        => format!("{value:.0}mm"),
        Indicator::VegetationIndex => format!("{value:.2}"),
        Indicator::Temperature     => format!("{value:.1}°C"),
    }
}

pub fn optimal_range_label(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::SoilMoisture    => "30-50%",
        Indicator::Rainfall        => "100-150mm",
        Indicator::VegetationIndex => "0.4-0.7",
        Indicator::Temperature     => "22-28°C",
    }
}

/// Rows in panel order: soil moisture, rainfall, vegetation, temperature.
pub fn metrics_panel(readings: &Readings) -> Vec<MetricRow> {
    Indicator::ALL
        .iter()
        .map(|&indicator| MetricRow::new(indicator, indicator.value_of(readings)))
        .collect()
}
