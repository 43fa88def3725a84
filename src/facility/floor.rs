use std::fmt;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::domain::{Spot, Vehicle};
use crate::error::{LotError, Result};

/// Spot ids are `group * GROUP_STRIDE + offset + 1`, so a group holds at most
/// this many spots before ids would run into the next group.
pub const GROUP_STRIDE: u32 = 100;

/// Id of the spot at `offset` within `group`, or `None` if it does not fit in a `u32`
fn spot_id(group: u32, offset: u32) -> Option<u32> {
    group
        .checked_mul(GROUP_STRIDE)?
        .checked_add(offset)?
        .checked_add(1)
}

/// Where a vehicle is parked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub floor: u32,
    pub spot: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Floor {} Spot {}", self.floor, self.spot)
    }
}

/// One level of the lot
///
/// The spot sequence sits behind a single lock: `park` and `remove` hold the
/// write side for the whole scan-and-claim, queries hold the read side, so no
/// caller ever sees a half-claimed oversized vehicle.
#[derive(Debug)]
pub struct Floor {
    number: u32,
    spots: RwLock<Vec<Spot>>,
}

impl Floor {
    /// Build a floor from its group sizes
    ///
    /// # Arguments
    /// * `number` - 1-based floor number
    /// * `groups` - Spot count per group, in allocation order
    ///
    /// # Returns
    /// * `Err(InvalidLayout)` if a group exceeds `GROUP_STRIDE` spots
    pub fn new(number: u32, groups: &[u32]) -> Result<Self> {
        let mut spots = Vec::new();

        for (group, &size) in groups.iter().enumerate() {
            if size > GROUP_STRIDE {
                return Err(LotError::InvalidLayout(format!(
                    "floor {} group {} has {} spots, max is {}",
                    number,
                    group + 1,
                    size,
                    GROUP_STRIDE
                )));
            }
            let too_many_groups =
                || LotError::InvalidLayout(format!("floor {} has too many groups", number));
            let group = u32::try_from(group).map_err(|_| too_many_groups())?;
            // the last id of the group bounds every other id in it
            if size > 0 {
                spot_id(group, size - 1).ok_or_else(too_many_groups)?;
            }
            spots.extend(
                (0..size).filter_map(|offset| spot_id(group, offset).map(Spot::new)),
            );
        }

        Ok(Self {
            number,
            spots: RwLock::new(spots),
        })
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn total_spots(&self) -> usize {
        self.spots.read().len()
    }

    pub fn available_count(&self) -> usize {
        self.spots.read().iter().filter(|s| s.is_free()).count()
    }

    pub fn occupied_count(&self) -> usize {
        self.spots.read().iter().filter(|s| !s.is_free()).count()
    }

    /// Spot ids in allocation order
    pub fn spot_ids(&self) -> Vec<u32> {
        self.spots.read().iter().map(Spot::id).collect()
    }

    /// Ids of every spot currently held by `plate`, in allocation order
    pub fn spots_held_by(&self, plate: &str) -> Vec<u32> {
        self.spots
            .read()
            .iter()
            .filter(|s| s.occupied_by(plate))
            .map(Spot::id)
            .collect()
    }

    /// First spot held by `plate`. For an oversized vehicle this is the
    /// lower of its two spots.
    pub fn locate(&self, plate: &str) -> Option<Location> {
        self.spots
            .read()
            .iter()
            .find(|s| s.occupied_by(plate))
            .map(|s| Location {
                floor: self.number,
                spot: s.id(),
            })
    }

    /// Claim the first run of free spots wide enough for the vehicle
    ///
    /// Adjacency is by position in the spot sequence, not by id, so the last
    /// spot of one group and the first of the next count as neighbours.
    /// Returns false without claiming anything when no run fits.
    pub fn park(&self, vehicle: &Arc<Vehicle>) -> bool {
        let demand = vehicle.spot_demand();
        let mut spots = self.spots.write();

        let Some(start) = spots
            .windows(demand)
            .position(|run| run.iter().all(Spot::is_free))
        else {
            debug!(
                "floor {}: no run of {} free spots for {}",
                self.number,
                demand,
                vehicle.plate()
            );
            return false;
        };

        for spot in &mut spots[start..start + demand] {
            if let Err(err) = spot.occupy(Arc::clone(vehicle)) {
                panic!("floor {}: allocation claimed a taken spot: {err}", self.number);
            }
        }

        debug!(
            "floor {}: {} {} took spots {:?}",
            self.number,
            vehicle.category(),
            vehicle.plate(),
            spots[start..start + demand]
                .iter()
                .map(Spot::id)
                .collect::<Vec<_>>()
        );
        true
    }

    /// Vacate every spot held by `plate`; true if anything was vacated
    pub fn remove(&self, plate: &str) -> bool {
        let mut spots = self.spots.write();
        let mut vacated = Vec::new();

        for spot in spots.iter_mut().filter(|s| s.occupied_by(plate)) {
            spot.vacate();
            vacated.push(spot.id());
        }

        if !vacated.is_empty() {
            debug!("floor {}: {} left spots {:?}", self.number, plate, vacated);
        }
        !vacated.is_empty()
    }
}
