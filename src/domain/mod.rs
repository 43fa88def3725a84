pub mod spot;
pub mod vehicle;

pub use spot::Spot;
pub use vehicle::{Vehicle, VehicleCategory};
