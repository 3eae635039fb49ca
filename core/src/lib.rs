//! PlantReady core: simulated planting-readiness data and the view
//! models a dashboard renders from it.
//!
//! Dependency order, leaf first:
//!   scoring, recommendation, trend  →  simulator  →  dashboard
//! with metrics, overlay and classification as pure view helpers.

pub mod classification;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod metrics;
pub mod overlay;
pub mod recommendation;
pub mod rng;
pub mod scoring;
pub mod simulator;
pub mod snapshot;
pub mod trend;
pub mod types;
