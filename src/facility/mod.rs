pub mod floor;
pub mod lot;

pub use floor::{Floor, Location};
pub use lot::{FloorAvailability, Lot, NOT_FOUND};
