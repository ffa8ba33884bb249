use signal_core::models::{LaneDensity, LaneInput, VehicleCategory, VehicleCounts};

/// Road-space occupancy weight per vehicle category, indexed by
/// [`VehicleCategory::index`]. Trucks and buses are weighted equally.
pub const VEHICLE_WEIGHTS: [f64; 4] = [
    0.5, // bike
    1.0, // car
    2.0, // truck
    2.0, // bus
];

/// Weight for a single category.
pub fn weight(category: VehicleCategory) -> f64 {
    VEHICLE_WEIGHTS[category.index()]
}

/// Weighted-equivalent vehicle units for one lane.
///
/// ```text
/// score = bikes × 0.5 + cars × 1.0 + trucks × 2.0 + buses × 2.0
/// ```
///
/// Non-negative and finite for any input.
pub fn density_score(counts: &VehicleCounts) -> f64 {
    VehicleCategory::ALL
        .iter()
        .map(|&c| f64::from(counts.count(c)) * weight(c))
        .sum()
}

/// Density record for one lane, carrying the counts it came from.
pub fn lane_density(lane: &LaneInput) -> LaneDensity {
    LaneDensity {
        direction: lane.direction,
        density_score: density_score(&lane.vehicles),
        vehicle_counts: lane.vehicles,
    }
}
