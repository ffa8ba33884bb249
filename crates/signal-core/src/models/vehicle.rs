use serde::{Deserialize, Serialize};

/// Vehicle classes the counters distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleCategory {
    Bike,
    Car,
    Truck,
    Bus,
}

impl VehicleCategory {
    /// All categories, in table order.
    pub const ALL: [VehicleCategory; 4] = [Self::Bike, Self::Car, Self::Truck, Self::Bus];

    /// Position of this category in per-category lookup tables.
    pub const fn index(self) -> usize {
        match self {
            Self::Bike => 0,
            Self::Car => 1,
            Self::Truck => 2,
            Self::Bus => 3,
        }
    }
}

/// Raw vehicle counts observed on one lane.
///
/// Fields are unsigned, so negative counts are rejected at deserialization.
/// Missing fields default to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleCounts {
    pub bikes: u32,
    pub cars: u32,
    pub trucks: u32,
    pub buses: u32,
}

impl VehicleCounts {
    /// Counts with only cars set. Used by the simplified request shapes.
    pub fn cars_only(cars: u32) -> Self {
        Self {
            cars,
            ..Self::default()
        }
    }

    /// Count for a single category.
    pub fn count(&self, category: VehicleCategory) -> u32 {
        match category {
            VehicleCategory::Bike => self.bikes,
            VehicleCategory::Car => self.cars,
            VehicleCategory::Truck => self.trucks,
            VehicleCategory::Bus => self.buses,
        }
    }

    /// Pairwise sum of two count sets (saturating).
    pub fn merged(&self, other: &VehicleCounts) -> VehicleCounts {
        VehicleCounts {
            bikes: self.bikes.saturating_add(other.bikes),
            cars: self.cars.saturating_add(other.cars),
            trucks: self.trucks.saturating_add(other.trucks),
            buses: self.buses.saturating_add(other.buses),
        }
    }
}
