//! Lane-set normalization ahead of the engine.

use std::collections::HashMap;

use signal_core::constants::SOURCE_DEFAULTED;
use signal_core::models::{LaneDirection, LaneInput, VehicleCounts};

/// Expand an arbitrary lane list to the four cardinal directions in
/// North, East, South, West order.
///
/// Supplied lanes pass through unchanged; on duplicate directions the last
/// one wins. Missing directions become empty lanes tagged "defaulted".
pub fn complete_lane_set(lanes: Vec<LaneInput>) -> Vec<LaneInput> {
    let mut by_direction: HashMap<LaneDirection, LaneInput> = HashMap::with_capacity(4);
    for lane in lanes {
        by_direction.insert(lane.direction, lane);
    }

    LaneDirection::CARDINAL_ORDER
        .iter()
        .map(|&direction| {
            by_direction
                .remove(&direction)
                .unwrap_or_else(|| LaneInput::empty(direction, SOURCE_DEFAULTED))
        })
        .collect()
}

/// Car-only lanes from counts given in North, East, South, West order.
pub fn cars_in_cardinal_order(counts: [u32; 4]) -> Vec<LaneInput> {
    LaneDirection::CARDINAL_ORDER
        .iter()
        .zip(counts)
        .map(|(&direction, cars)| LaneInput::new(direction, VehicleCounts::cars_only(cars)))
        .collect()
}
