//! Error types for lot construction and vehicle intake

use thiserror::Error;

/// Result type alias for lot operations
pub type Result<T> = std::result::Result<T, LotError>;

/// Errors raised by the allocation core.
///
/// A full lot or an unknown plate is not an error: those come back as
/// `false` / `None` from the lot operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LotError {
    /// Category string is not one of BIKE, CAR, TRUCK
    #[error("Invalid vehicle category: {0:?}")]
    InvalidCategory(String),

    /// License plate is empty or whitespace
    #[error("License plate must not be empty")]
    EmptyPlate,

    /// A claim was attempted on a spot that already holds a vehicle
    #[error("Spot {spot} is already occupied by {plate}")]
    AlreadyOccupied { spot: u32, plate: String },

    /// Floor layout cannot produce a valid spot sequence
    #[error("Invalid floor layout: {0}")]
    InvalidLayout(String),
}
