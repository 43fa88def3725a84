use std::sync::Arc;

use super::Vehicle;
use crate::error::{LotError, Result};

/// A single parking slot, free or holding one vehicle
///
/// Oversized vehicles hold two spots; both spots share the same `Arc<Vehicle>`.
#[derive(Debug, Clone)]
pub struct Spot {
    id: u32,
    occupant: Option<Arc<Vehicle>>,
}

impl Spot {
    pub fn new(id: u32) -> Self {
        Self { id, occupant: None }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    pub fn occupant(&self) -> Option<&Arc<Vehicle>> {
        self.occupant.as_ref()
    }

    /// Place a vehicle in this spot
    ///
    /// Fails with `AlreadyOccupied` if the spot is taken. Callers check
    /// `is_free` first, so an error here means the allocator is broken.
    pub fn occupy(&mut self, vehicle: Arc<Vehicle>) -> Result<()> {
        if let Some(current) = &self.occupant {
            return Err(LotError::AlreadyOccupied {
                spot: self.id,
                plate: current.plate().to_string(),
            });
        }
        self.occupant = Some(vehicle);
        Ok(())
    }

    /// Clear the occupant, returning whoever was parked here
    pub fn vacate(&mut self) -> Option<Arc<Vehicle>> {
        self.occupant.take()
    }

    /// True iff a vehicle is present and its plate matches exactly
    pub fn occupied_by(&self, plate: &str) -> bool {
        self.occupant
            .as_ref()
            .is_some_and(|vehicle| vehicle.plate() == plate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VehicleCategory;

    fn car(plate: &str) -> Arc<Vehicle> {
        Arc::new(Vehicle::new(VehicleCategory::Standard, plate).unwrap())
    }

    #[test]
    fn test_new_spot_is_free() {
        let spot = Spot::new(101);
        assert_eq!(spot.id(), 101);
        assert!(spot.is_free());
        assert!(spot.occupant().is_none());
        assert!(!spot.occupied_by("ABC"));
    }

    #[test]
    fn test_occupy_and_vacate() {
        let mut spot = Spot::new(1);
        spot.occupy(car("ABC-123")).unwrap();

        assert!(!spot.is_free());
        assert!(spot.occupied_by("ABC-123"));
        assert!(!spot.occupied_by("abc-123"));

        let left = spot.vacate().unwrap();
        assert_eq!(left.plate(), "ABC-123");
        assert!(spot.is_free());
        assert!(spot.vacate().is_none());
    }

    #[test]
    fn test_occupy_taken_spot_fails() {
        let mut spot = Spot::new(7);
        spot.occupy(car("FIRST")).unwrap();

        let err = spot.occupy(car("SECOND")).unwrap_err();
        assert_eq!(
            err,
            LotError::AlreadyOccupied {
                spot: 7,
                plate: "FIRST".to_string()
            }
        );
        assert!(spot.occupied_by("FIRST"));
    }
}
