//! Map overlay view model.
//!
//! Each snapshot gets a fresh cluster of square polygons scattered
//! around a jittered center. Every polygon carries a locally perturbed
//! copy of the readiness score, bucketed into a fill color by
//! ReadinessLevel. The overlay is decorative: it does not feed back
//! into the simulation.

use crate::{
    classification::{ReadinessLevel, Rgba},
    rng::SimRng,
    types::{LonLat, Score},
};
use serde::Serialize;

// ── Map view constants ─────────────────────────────────────────────

pub const MAP_CENTER: LonLat = [28.0, -1.9];
pub const MAP_ZOOM: u8 = 8;
pub const MAP_MIN_ZOOM: u8 = 6;
pub const MAP_MAX_ZOOM: u8 = 14;
pub const BASEMAP: &str = "satellite";

// ── Overlay constants ──────────────────────────────────────────────

pub const POLYGON_COUNT: usize = 8;
/// Cluster center moves up to this many degrees from MAP_CENTER.
pub const CLUSTER_JITTER_DEG: f64 = 0.25;
/// Polygons sit up to this many degrees from the cluster center.
pub const POLYGON_SPREAD_DEG: f64 = 0.15;
pub const POLYGON_SIZE_DEG: f64 = 0.05;
/// Local score is the snapshot score plus up to this many points.
pub const LOCAL_SCORE_JITTER: f64 = 15.0;

pub const OUTLINE_COLOR: Rgba = Rgba::new(255, 255, 255, 0.3);
pub const OUTLINE_WIDTH: f32 = 1.0;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OverlayPolygon {
    /// Closed ring: five points, first == last.
    pub ring:        [LonLat; 5],
    pub local_score: f64,
    pub level:       ReadinessLevel,
    pub fill:        Rgba,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapOverlay {
    pub center:   LonLat,
    pub polygons: Vec<OverlayPolygon>,
}

impl MapOverlay {
    /// Polygon count per level, in legend order.
    pub fn level_counts(&self) -> Vec<(ReadinessLevel, usize)> {
        ReadinessLevel::ALL
            .iter()
            .map(|&level| (level, self.polygons.iter().filter(|p| p.level == level).count()))
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LegendEntry {
    pub level: ReadinessLevel,
    pub label: String,
    pub fill:  Rgba,
}

pub fn generate_overlay(score: Score, rng: &mut SimRng) -> MapOverlay {
    let center_lat = MAP_CENTER[1] + rng.jitter(CLUSTER_JITTER_DEG);
    let center_lon = MAP_CENTER[0] + rng.jitter(CLUSTER_JITTER_DEG);

    let polygons = (0..POLYGON_COUNT)
        .map(|_| {
            let lat = center_lat + rng.jitter(POLYGON_SPREAD_DEG);
            let lon = center_lon + rng.jitter(POLYGON_SPREAD_DEG);
            let local_score = (score as f64 + rng.jitter(LOCAL_SCORE_JITTER)).clamp(0.0, 100.0);
            let level = ReadinessLevel::from_score(local_score);
            OverlayPolygon {
                ring: square_ring(lon, lat, POLYGON_SIZE_DEG),
                local_score,
                level,
                fill: level.fill_color(),
            }
        })
        .collect();

    MapOverlay { center: [center_lon, center_lat], polygons }
}

fn square_ring(lon: f64, lat: f64, size: f64) -> [LonLat; 5] {
    [
        [lon, lat],
        [lon + size, lat],
        [lon + size, lat + size],
        [lon, lat + size],
        [lon, lat],
    ]
}

pub fn legend() -> Vec<LegendEntry> {
    ReadinessLevel::ALL
        .iter()
        .map(|&level| {
            let (lo, hi) = level.score_range();
            LegendEntry {
                level,
                label: format!("{} ({lo}-{hi})", level.legend_label()),
                fill: level.fill_color(),
            }
        })
        .collect()
}
