use std::fmt;
use std::sync::Arc;

use log::{Level, info, log};

use super::{Floor, Location};
use crate::domain::Vehicle;
use crate::error::{LotError, Result};

/// A full lot is an ordinary outcome, so it stays below the default `Warn` filter
pub(crate) const FULL_LOT_LEVEL: Level = Level::Info;

/// Text `describe_location` returns for a plate that is not parked
pub const NOT_FOUND: &str = "Vehicle Not Found";

/// Free spot count for one floor at the moment it was read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FloorAvailability {
    pub floor: u32,
    pub available: usize,
}

impl fmt::Display for FloorAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Floor {}: {} spots available", self.floor, self.available)
    }
}

/// The whole facility: floors tried in ascending order
///
/// Each floor guards its own spots, so the lot needs no lock of its own and
/// can be shared across threads by reference.
#[derive(Debug)]
pub struct Lot {
    floors: Vec<Floor>,
}

impl Lot {
    /// Build floors 1..=N from one group-size list per floor
    pub fn new<L: AsRef<[u32]>>(layouts: &[L]) -> Result<Self> {
        if layouts.is_empty() {
            return Err(LotError::InvalidLayout(
                "lot needs at least one floor".to_string(),
            ));
        }

        let floors = layouts
            .iter()
            .zip(1u32..)
            .map(|(layout, number)| Floor::new(number, layout.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { floors })
    }

    pub fn floors(&self) -> &[Floor] {
        &self.floors
    }

    pub fn floor_count(&self) -> usize {
        self.floors.len()
    }

    /// Park on the lowest floor with room; false if every floor is full for
    /// this vehicle's size
    pub fn park(&self, vehicle: Vehicle) -> bool {
        let vehicle = Arc::new(vehicle);

        match self.floors.iter().find(|floor| floor.park(&vehicle)) {
            Some(floor) => {
                info!(
                    "parked {} {} on floor {}",
                    vehicle.category(),
                    vehicle.plate(),
                    floor.number()
                );
                true
            }
            None => {
                log!(
                    FULL_LOT_LEVEL,
                    "no room for {} {}: lot full for this size",
                    vehicle.category(),
                    vehicle.plate()
                );
                false
            }
        }
    }

    /// Release the plate from the first floor holding it
    pub fn remove(&self, plate: &str) -> bool {
        match self.floors.iter().find(|floor| floor.remove(plate)) {
            Some(floor) => {
                info!("removed {} from floor {}", plate, floor.number());
                true
            }
            None => false,
        }
    }

    pub fn locate(&self, plate: &str) -> Option<Location> {
        self.floors.iter().find_map(|floor| floor.locate(plate))
    }

    /// `"Floor F Spot S"`, or `"Vehicle Not Found"`
    pub fn describe_location(&self, plate: &str) -> String {
        self.locate(plate)
            .map(|location| location.to_string())
            .unwrap_or_else(|| NOT_FOUND.to_string())
    }

    /// One entry per floor in floor order. Floors are read one at a time, so
    /// the report is not a lot-wide snapshot.
    pub fn available_report(&self) -> Vec<FloorAvailability> {
        self.floors
            .iter()
            .map(|floor| FloorAvailability {
                floor: floor.number(),
                available: floor.available_count(),
            })
            .collect()
    }

    pub fn total_available(&self) -> usize {
        self.floors.iter().map(Floor::available_count).sum()
    }
}
