//! Request checks applied before the engine is called.

use signal_core::constants::MIN_REQUEST_LANES;

use crate::dto::{TrafficInput, VehiclesRequest};
use crate::error::ApiError;

/// Length of the `[North, East, South, West]` vehicles array.
pub const VEHICLES_ARRAY_LEN: usize = 4;

/// A full optimize request must name at least two lanes.
pub fn validate_traffic_input(input: &TrafficInput) -> Result<(), ApiError> {
    if input.lanes.len() < MIN_REQUEST_LANES {
        return Err(ApiError::BadRequest {
            message: format!("At least {MIN_REQUEST_LANES} lanes required for optimization"),
        });
    }
    Ok(())
}

/// The simplified body must carry exactly one count per cardinal direction.
pub fn validate_vehicles_request(req: &VehiclesRequest) -> Result<[u32; 4], ApiError> {
    <[u32; VEHICLES_ARRAY_LEN]>::try_from(req.vehicles.as_slice()).map_err(|_| {
        ApiError::Validation {
            message: format!(
                "vehicles must contain exactly {VEHICLES_ARRAY_LEN} counts [North, East, South, West], got {}",
                req.vehicles.len()
            ),
        }
    })
}
