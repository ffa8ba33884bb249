//! HTTP handlers. Each one validates, normalizes, and delegates to the
//! shared [`SignalTimer`](signal_core::traits::SignalTimer).

use axum::extract::{Query, State};
use axum::Json;

use signal_core::models::LaneInput;

use crate::dto::{
    HealthResponse, ServiceInfo, SignalPhaseResponse, SimpleQuery, TrafficInput,
    VehiclesRequest, VehiclesResponse,
};
use crate::error::ApiError;
use crate::normalize;
use crate::server::AppState;
use crate::validation;

/// `GET /`
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// `POST /api/optimize`
pub async fn optimize(
    State(state): State<AppState>,
    Json(input): Json<TrafficInput>,
) -> Result<Json<SignalPhaseResponse>, ApiError> {
    let span = tracing::info_span!(
        "optimize",
        intersection_id = input.intersection_id.as_deref().unwrap_or("default"),
        lanes = input.lanes.len()
    );
    span.in_scope(|| -> Result<Json<SignalPhaseResponse>, ApiError> {
        if let Err(e) = validation::validate_traffic_input(&input) {
            tracing::warn!(error = %e, "rejected optimize request");
            return Err(e);
        }

        let lanes: Vec<LaneInput> = input.lanes.into_iter().map(Into::into).collect();
        let lanes = normalize::complete_lane_set(lanes);
        let phase = state.timer.compute(&lanes)?;

        tracing::info!(
            priority = %phase.priority_lane,
            green = phase.green_duration_seconds,
            cycle = phase.cycle_seconds(),
            "signal phase computed"
        );
        Ok(Json(phase.into()))
    })
}

/// `POST /api/optimize/vehicles`
pub async fn optimize_vehicles(
    State(state): State<AppState>,
    Json(req): Json<VehiclesRequest>,
) -> Result<Json<VehiclesResponse>, ApiError> {
    let counts = validation::validate_vehicles_request(&req).inspect_err(|e| {
        tracing::warn!(error = %e, "rejected vehicles request");
    })?;

    let lanes = normalize::cars_in_cardinal_order(counts);
    let phase = state.timer.compute(&lanes)?;
    tracing::debug!(priority = %phase.priority_lane, "vehicles request served");
    Ok(Json(phase.into()))
}

/// `POST /api/optimize/simple?north=&south=&east=&west=`
pub async fn optimize_simple(
    State(state): State<AppState>,
    Query(query): Query<SimpleQuery>,
) -> Result<Json<SignalPhaseResponse>, ApiError> {
    let lanes =
        normalize::cars_in_cardinal_order([query.north, query.east, query.south, query.west]);
    let phase = state.timer.compute(&lanes)?;
    tracing::debug!(priority = %phase.priority_lane, "simple request served");
    Ok(Json(phase.into()))
}
