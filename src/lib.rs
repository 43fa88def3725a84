//! parkade - Multi-floor parking lot allocator with an operator console

pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod facility;
pub mod logging;

pub use domain::{Spot, Vehicle, VehicleCategory};
pub use error::{LotError, Result};
pub use facility::{Floor, FloorAvailability, Location, Lot};
