use serde::Serialize;

use crate::domain::booking::booking_ledger::BookingKey;
use crate::domain::utils::id::{AirportId, FlightId};

/// Stable position of a flight inside the catalogue's flight array.
///
/// Flights are never removed from the array, so a slot stays valid for the
/// lifetime of the catalogue that issued it.
pub type FlightSlot = usize;

/// One scheduled flight and the head of its booking list.
#[derive(Debug, Clone, Serialize)]
pub struct FlightRecord {
    /// Unique, immutable once the record is created.
    id: FlightId,

    pub source: AirportId,
    pub destination: AirportId,

    /// Edge weight in the airport graph.
    pub distance: u32,

    pub(crate) seats: u32,

    /// `false` means cancelled. Cancelled flights stay indexed and can be looked up by id.
    pub(crate) active: bool,

    /// Most recent booking first. Keys point into the booking ledger arena.
    #[serde(skip)]
    pub(crate) booking_head: Option<BookingKey>,
}

impl FlightRecord {
    pub fn new(id: FlightId, source: AirportId, destination: AirportId, distance: u32, seats: u32) -> Self {
        Self { id, source, destination, distance, seats, active: true, booking_head: None }
    }

    pub fn id(&self) -> &FlightId {
        &self.id
    }

    pub fn seats(&self) -> u32 {
        self.seats
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn has_seats(&self) -> bool {
        self.seats > 0
    }
}

impl std::fmt::Display for FlightRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}, Dist: {}, Seats: {}", self.id, self.source, self.destination, self.distance, self.seats)
    }
}
