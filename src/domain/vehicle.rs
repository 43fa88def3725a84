use std::fmt;
use std::str::FromStr;

use crate::error::{LotError, Result};

/// Vehicle size class, which fixes how many spots a vehicle needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleCategory {
    /// Bikes
    Compact,
    /// Cars
    Standard,
    /// Trucks, which need two adjacent spots
    Oversized,
}

impl VehicleCategory {
    pub const ALL: [VehicleCategory; 3] = [
        VehicleCategory::Compact,
        VehicleCategory::Standard,
        VehicleCategory::Oversized,
    ];

    /// Number of consecutive spots a vehicle of this category occupies
    pub const fn spot_demand(self) -> usize {
        match self {
            VehicleCategory::Compact | VehicleCategory::Standard => 1,
            VehicleCategory::Oversized => 2,
        }
    }

    /// Operator-facing name used on the console
    pub const fn name(self) -> &'static str {
        match self {
            VehicleCategory::Compact => "BIKE",
            VehicleCategory::Standard => "CAR",
            VehicleCategory::Oversized => "TRUCK",
        }
    }

    /// Classify an operator-entered name, ignoring case and surrounding whitespace
    pub fn from_name(name: &str) -> Option<VehicleCategory> {
        match name.trim().to_ascii_uppercase().as_str() {
            "BIKE" => Some(VehicleCategory::Compact),
            "CAR" => Some(VehicleCategory::Standard),
            "TRUCK" => Some(VehicleCategory::Oversized),
            _ => None,
        }
    }
}

impl FromStr for VehicleCategory {
    type Err = LotError;

    fn from_str(s: &str) -> Result<Self> {
        VehicleCategory::from_name(s).ok_or_else(|| LotError::InvalidCategory(s.to_string()))
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A vehicle identified by its license plate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    plate: String,
    category: VehicleCategory,
}

impl Vehicle {
    /// Create a vehicle, rejecting blank plates
    pub fn new(category: VehicleCategory, plate: impl Into<String>) -> Result<Self> {
        let plate = plate.into();
        if plate.trim().is_empty() {
            return Err(LotError::EmptyPlate);
        }
        Ok(Self { plate, category })
    }

    /// Build a vehicle from the raw category name and plate typed by an operator
    ///
    /// # Arguments
    /// * `category` - One of "BIKE", "CAR", "TRUCK" (any case)
    /// * `plate` - License plate, must not be blank
    pub fn from_parts(category: &str, plate: &str) -> Result<Self> {
        let category: VehicleCategory = category.parse()?;
        Vehicle::new(category, plate)
    }

    pub fn plate(&self) -> &str {
        &self.plate
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    pub fn spot_demand(&self) -> usize {
        self.category.spot_demand()
    }
}
