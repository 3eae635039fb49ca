//! Dashboard: the presentation state behind the map, metrics panel,
//! rainfall chart and readiness card.
//!
//! State is a single Option: no view while loading, one complete view
//! once a snapshot exists. Every refresh builds a whole new view from a
//! new snapshot; nothing is carried over from the previous one.
//!
//! Refresh N draws from streams (master_seed, slot, N), so a session
//! replays exactly under the same seed and selection sequence.

use crate::{
    classification::ReadinessLevel,
    error::{SimError, SimResult},
    metrics::{metrics_panel, MetricRow},
    overlay::{generate_overlay, legend, LegendEntry, MapOverlay},
    recommendation::Recommendation,
    rng::{RngBank, StreamSlot},
    simulator::{current_month, DataSimulator},
    snapshot::FarmSnapshot,
    trend::{RainfallTrend, TrendStats},
    types::{LonLat, Score},
};
use chrono::Month;
use serde::Serialize;

pub const LOADING_MESSAGE: &str = "Loading PlantReady...";
pub const UPDATE_NOTE: &str =
    "Data updates every 24 hours. Check back daily for the latest conditions and recommendations.";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReadinessCard {
    pub score:          Score,
    pub level:          ReadinessLevel,
    /// "Excellent Conditions", "Poor Conditions", ...
    pub headline:       String,
    pub recommendation: Recommendation,
    pub note:           &'static str,
}

impl ReadinessCard {
    pub fn from_snapshot(snapshot: &FarmSnapshot) -> Self {
        let level = snapshot.level();
        Self {
            score: snapshot.readiness_score,
            level,
            headline: format!("{} Conditions", level.card_label()),
            recommendation: snapshot.recommendation,
            note: UPDATE_NOTE,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RainfallChart {
    pub series: RainfallTrend,
    pub stats:  Option<TrendStats>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardView {
    pub generation: u64,
    pub snapshot:   FarmSnapshot,
    pub card:       ReadinessCard,
    pub metrics:    Vec<MetricRow>,
    pub chart:      RainfallChart,
    pub overlay:    MapOverlay,
    pub legend:     Vec<LegendEntry>,
}

/// What a UI renders right now.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardState<'a> {
    Loading { message: &'static str },
    Ready {
        selected_area: Option<&'a [LonLat]>,
        view:          &'a DashboardView,
    },
}

pub struct Dashboard {
    simulator:     DataSimulator,
    rng_bank:      RngBank,
    /// Fixed month for reproducible runs; None reads the local clock.
    month:         Option<Month>,
    generation:    u64,
    selected_area: Option<Vec<LonLat>>,
    view:          Option<DashboardView>,
}

impl Dashboard {
    pub fn new(simulator: DataSimulator, rng_bank: RngBank) -> Self {
        Self {
            simulator,
            rng_bank,
            month: None,
            generation: 0,
            selected_area: None,
            view: None,
        }
    }

    pub fn with_month(mut self, month: Month) -> Self {
        self.month = Some(month);
        self
    }

    pub fn seed(&self) -> u64 {
        self.rng_bank.master_seed()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn view(&self) -> Option<&DashboardView> {
        self.view.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.view.is_none()
    }

    /// The last area the user clicked. Recorded only; the simulator
    /// does not take location as input.
    pub fn selected_area(&self) -> Option<&[LonLat]> {
        self.selected_area.as_deref()
    }

    pub fn state(&self) -> DashboardState<'_> {
        match &self.view {
            None => DashboardState::Loading { message: LOADING_MESSAGE },
            Some(view) => DashboardState::Ready {
                selected_area: self.selected_area(),
                view,
            },
        }
    }

    /// Produce the first view. Calling again keeps the existing view.
    pub fn start(&mut self) -> &DashboardView {
        let view = match self.view.take() {
            Some(view) => view,
            None => {
                log::info!("Dashboard starting (seed={})", self.seed());
                self.build_view(self.generation)
            }
        };
        self.view.insert(view)
    }

    /// Map click: discard the current view and simulate a new one.
    pub fn on_area_select(&mut self, coordinates: &[LonLat]) -> SimResult<&DashboardView> {
        if coordinates.is_empty() {
            return Err(SimError::EmptySelection);
        }
        log::info!(
            "Area selected at {:?} ({} point(s)); refreshing",
            coordinates[0],
            coordinates.len()
        );
        self.selected_area = Some(coordinates.to_vec());
        self.view = None;
        self.generation += 1;

        let view = self.build_view(self.generation);
        let view: &DashboardView = self.view.insert(view);
        Ok(view)
    }

    fn build_view(&self, generation: u64) -> DashboardView {
        let month = self.month.unwrap_or_else(current_month);

        let mut snapshot_rng = self.rng_bank.for_stream(StreamSlot::Snapshot, generation);
        let snapshot = self.simulator.generate_snapshot(&mut snapshot_rng, month);

        let mut overlay_rng = self.rng_bank.for_stream(StreamSlot::Overlay, generation);
        let overlay = generate_overlay(snapshot.readiness_score, &mut overlay_rng);

        let card = ReadinessCard::from_snapshot(&snapshot);
        let metrics = metrics_panel(&snapshot.readings);
        let chart = RainfallChart {
            stats: snapshot.rainfall_trend.stats(),
            series: snapshot.rainfall_trend.clone(),
        };

        log::debug!(
            "generation {generation}: score={} level={:?}",
            snapshot.readiness_score,
            card.level
        );

        DashboardView {
            generation,
            snapshot,
            card,
            metrics,
            chart,
            overlay,
            legend: legend(),
        }
    }
}
