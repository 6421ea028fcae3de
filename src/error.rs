use thiserror::Error;

use crate::domain::utils::id::{AirportId, FlightId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Flight capacity of {0} reached, cannot add more flights")]
    CapacityExceeded(usize),

    #[error("No booking requests are pending")]
    EmptyQueue,

    #[error("Flight {0} is cancelled, booking request dropped")]
    FlightCancelled(FlightId),

    #[error("No seats left on flight {0}, booking request dropped")]
    NoSeats(FlightId),

    #[error("No path found between {from} and {to}")]
    NoPath { from: AirportId, to: AirportId },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
