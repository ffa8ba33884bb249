//! Request and response shapes for the HTTP API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use signal_core::constants;
use signal_core::models::{LaneDensity, LaneDirection, LaneInput, SignalPhase, VehicleCounts};

fn default_source() -> Option<String> {
    Some(constants::SOURCE_MANUAL.to_string())
}

fn default_intersection_id() -> Option<String> {
    Some("default".to_string())
}

/// One lane as submitted by a camera, IoT sensor, or manual entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LaneData {
    pub direction: LaneDirection,
    pub vehicles: VehicleCounts,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// camera | iot | manual. Defaults to "manual" when omitted.
    #[serde(default = "default_source")]
    pub source: Option<String>,
}

impl From<LaneData> for LaneInput {
    fn from(lane: LaneData) -> Self {
        LaneInput {
            direction: lane.direction,
            vehicles: lane.vehicles,
            timestamp: lane.timestamp,
            source: lane.source,
        }
    }
}

/// Body of `POST /api/optimize`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TrafficInput {
    pub lanes: Vec<LaneData>,
    #[serde(default = "default_intersection_id")]
    pub intersection_id: Option<String>,
}

/// Body of `POST /api/optimize/vehicles`: car counts as [North, East, South, West].
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VehiclesRequest {
    pub vehicles: Vec<u32>,
}

/// Query of `POST /api/optimize/simple`. Missing directions count as zero.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SimpleQuery {
    pub north: u32,
    pub south: u32,
    pub east: u32,
    pub west: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaneDensityResponse {
    pub direction: LaneDirection,
    pub density_score: f64,
    pub vehicle_counts: VehicleCounts,
    pub weighted_equivalents: f64,
}

impl From<LaneDensity> for LaneDensityResponse {
    fn from(d: LaneDensity) -> Self {
        Self {
            direction: d.direction,
            density_score: d.density_score,
            vehicle_counts: d.vehicle_counts,
            weighted_equivalents: d.density_score,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalPhaseResponse {
    pub priority_lane: LaneDirection,
    pub green_duration_seconds: f64,
    pub yellow_duration_seconds: f64,
    pub all_red_duration_seconds: f64,
    pub density_scores: Vec<LaneDensityResponse>,
    pub reasoning: String,
}

impl From<SignalPhase> for SignalPhaseResponse {
    fn from(phase: SignalPhase) -> Self {
        Self {
            priority_lane: phase.priority_lane,
            green_duration_seconds: phase.green_duration_seconds,
            yellow_duration_seconds: phase.yellow_duration_seconds,
            all_red_duration_seconds: phase.all_red_duration_seconds,
            density_scores: phase.density_scores.into_iter().map(Into::into).collect(),
            reasoning: phase.reasoning,
        }
    }
}

/// Response of `POST /api/optimize/vehicles`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehiclesResponse {
    /// 0=North, 1=East, 2=South, 3=West.
    pub priority_lane_index: usize,
    pub priority_lane: LaneDirection,
    pub green_duration_ms: u64,
    pub green_duration_seconds: f64,
    pub density_scores: Vec<f64>,
    pub reasoning: String,
}

impl From<SignalPhase> for VehiclesResponse {
    fn from(phase: SignalPhase) -> Self {
        Self {
            priority_lane_index: phase.priority_lane.index(),
            priority_lane: phase.priority_lane,
            // Truncates toward zero.
            green_duration_ms: (phase.green_duration_seconds * 1000.0) as u64,
            green_duration_seconds: phase.green_duration_seconds,
            density_scores: phase.density_scores.iter().map(|d| d.density_score).collect(),
            reasoning: phase.reasoning,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Endpoints {
    pub optimize: String,
    pub health: String,
}

/// Response of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub endpoints: Endpoints,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: constants::SERVICE_NAME.to_string(),
            version: constants::API_VERSION.to_string(),
            endpoints: Endpoints {
                optimize: "POST /api/optimize".to_string(),
                health: "GET /health".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}
