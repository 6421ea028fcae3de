use crate::config::CatalogueConfig;
use crate::domain::booking::booking_ledger::{BookingEntry, BookingIter, BookingLedger, PendingBookingRequest};
use crate::domain::flight::flight_index::FlightIndex;
use crate::domain::flight::flight_record::{FlightRecord, FlightSlot};
use crate::domain::graph::airport_graph::AirportGraph;
use crate::domain::graph::shortest_path::ShortestPath;
use crate::domain::graph::spanning_tree::MinimumSpanningTree;
use crate::domain::utils::id::{AirportId, BookingId, FlightId};
use crate::error::{Error, Result};

/// In-memory flight catalogue.
///
/// Owns the flight array, the identifier index over it, the airport graph built
/// from every added flight, the booking ledger with its pending request queue,
/// the stack of recent source searches and the booking id counter.
///
/// The catalogue is single-threaded state. Callers that share it between
/// threads wrap the whole instance in one lock.
#[derive(Debug)]
pub struct FlightCatalogue {
    config: CatalogueConfig,

    /// Backing array. Records are never removed, so slots stay valid.
    flights: Vec<FlightRecord>,

    /// Every record in `flights` is reachable here by its identifier.
    index: FlightIndex,

    graph: AirportGraph,

    ledger: BookingLedger,

    /// Search terms, most recent last.
    recent_searches: Vec<String>,

    /// Next booking id to hand out. Starts at 1 and only grows.
    next_booking_id: BookingId,
}

impl Default for FlightCatalogue {
    fn default() -> Self {
        Self::new()
    }
}

impl FlightCatalogue {
    pub fn new() -> Self {
        Self::with_config(CatalogueConfig::default())
    }

    pub fn with_config(config: CatalogueConfig) -> Self {
        Self {
            config,
            flights: Vec::new(),
            index: FlightIndex::new(),
            graph: AirportGraph::new(),
            ledger: BookingLedger::new(),
            recent_searches: Vec::new(),
            next_booking_id: BookingId::FIRST,
        }
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    pub fn graph(&self) -> &AirportGraph {
        &self.graph
    }

    //-------------------------
    // --- Flight lifecycle ---
    //-------------------------

    /// Stores a new active flight, indexes it and adds its route to the airport graph.
    ///
    /// Rejects a full catalogue with `CapacityExceeded`, and a blank or duplicate id,
    /// or a negative or out of range distance or seat count with `InvalidArgument`.
    /// Nothing is mutated when the call fails.
    ///
    /// # Returns
    /// Returns the slot of the new record in the flight array.
    pub fn add_flight(&mut self, id: &str, source: &str, destination: &str, distance: i64, seats: i64) -> Result<FlightSlot> {
        if self.flights.len() >= self.config.capacity {
            log::warn!("Flight {} rejected: capacity of {} reached", id, self.config.capacity);
            return Err(Error::CapacityExceeded(self.config.capacity));
        }

        if id.trim().is_empty() {
            return Err(Error::InvalidArgument("flight id must not be empty".to_string()));
        }
        if source.trim().is_empty() || destination.trim().is_empty() {
            return Err(Error::InvalidArgument(format!("flight {} needs a source and a destination airport", id)));
        }
        if self.index.contains(id) {
            log::warn!("Flight {} rejected: id already exists", id);
            return Err(Error::InvalidArgument(format!("flight id {} already exists", id)));
        }

        let distance = Self::non_negative(distance, "distance")?;
        let seats = Self::non_negative(seats, "seats")?;

        let slot = self.flights.len();
        let record = FlightRecord::new(FlightId::new(id), AirportId::new(source), AirportId::new(destination), distance, seats);

        self.index.insert(record.id().clone(), slot);
        self.graph.add_edge(source, destination, distance);
        self.flights.push(record);

        log::info!("Flight {} added at slot {}: {} -> {}, Dist: {}, Seats: {}", id, slot, source, destination, distance, seats);
        Ok(slot)
    }

    /// Marks the flight as cancelled. It stays in the index and the graph.
    pub fn cancel_flight(&mut self, id: &str) -> Result<()> {
        self.set_active(id, false)?;
        log::info!("Flight {} marked as cancelled", id);
        Ok(())
    }

    /// Marks a flight as active/scheduled again.
    pub fn reactivate_flight(&mut self, id: &str) -> Result<()> {
        self.set_active(id, true)?;
        log::info!("Flight {} marked as active", id);
        Ok(())
    }

    /// Exact lookup by identifier. Cancelled flights are found too.
    pub fn find_flight(&self, id: &str) -> Result<&FlightRecord> {
        let slot = self.slot_of(id)?;
        Ok(&self.flights[slot])
    }

    /// Active flights in ascending identifier order.
    pub fn list_active_flights(&self) -> impl Iterator<Item = &FlightRecord> {
        self.index.active_in_order(&self.flights)
    }

    /// Every stored flight in insertion order, cancelled ones included.
    pub fn list_flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    //-------------------------
    // --- Booking workflow ---
    //-------------------------

    /// Queues a booking request for an active flight.
    ///
    /// A cancelled flight is treated like an unknown one and fails with `NotFound`.
    pub fn queue_booking(&mut self, id: &str, passenger_name: &str) -> Result<()> {
        Self::require_passenger(passenger_name)?;

        let slot = self.slot_of(id)?;
        if !self.flights[slot].is_active() {
            log::warn!("Booking request for {} rejected: flight is not active", id);
            return Err(Error::NotFound(format!("active flight {}", id)));
        }

        self.ledger.enqueue(PendingBookingRequest { slot, passenger_name: passenger_name.to_string() });

        log::info!("Booking request queued for {} ({} pending)", id, self.ledger.pending_count());
        Ok(())
    }

    /// Commits the oldest pending request under `passenger_name`.
    ///
    /// The request is consumed even when it fails with `FlightCancelled` or `NoSeats`;
    /// it is not requeued.
    ///
    /// # Returns
    /// Returns the id of the committed booking.
    pub fn process_next_booking(&mut self, passenger_name: &str) -> Result<BookingId> {
        Self::require_passenger(passenger_name)?;

        let request = self.ledger.dequeue().ok_or(Error::EmptyQueue)?;

        let flight = self
            .flights
            .get_mut(request.slot)
            .ok_or_else(|| Error::NotFound(format!("flight at slot {}", request.slot)))?;

        if !flight.is_active() {
            log::warn!("Flight {} is cancelled. Cannot process booking.", flight.id());
            return Err(Error::FlightCancelled(flight.id().clone()));
        }
        if !flight.has_seats() {
            log::warn!("No seats left on flight {}.", flight.id());
            return Err(Error::NoSeats(flight.id().clone()));
        }

        let booking_id = self.next_booking_id;
        self.next_booking_id = booking_id.next();

        flight.seats -= 1;
        self.ledger.prepend(&mut flight.booking_head, BookingEntry { booking_id, passenger_name: passenger_name.to_string() });

        log::info!("Booking {} confirmed for {} on {}. Seats left: {}", booking_id, passenger_name, flight.id(), flight.seats);
        Ok(booking_id)
    }

    /// Removes a committed booking and gives its seat back. The booking id is not reused.
    pub fn cancel_booking(&mut self, id: &str, booking_id: BookingId) -> Result<()> {
        let slot = self.slot_of(id)?;
        let flight = &mut self.flights[slot];

        let removed = self
            .ledger
            .remove(&mut flight.booking_head, booking_id)
            .ok_or_else(|| Error::NotFound(format!("booking {} on flight {}", booking_id, id)))?;

        flight.seats += 1;

        log::info!("Booking {} ({}) cancelled, seat restored on flight {}", booking_id, removed.passenger_name, id);
        Ok(())
    }

    /// Committed bookings of a flight, most recent first.
    pub fn list_bookings(&self, id: &str) -> Result<BookingIter<'_>> {
        let slot = self.slot_of(id)?;
        Ok(self.ledger.iter(self.flights[slot].booking_head))
    }

    /// Pending requests, oldest first, as `(flight id, passenger name given at enqueue time)`.
    pub fn pending_bookings(&self) -> impl Iterator<Item = (&FlightId, &str)> {
        self.ledger.pending().map(move |request| (self.flights[request.slot].id(), request.passenger_name.as_str()))
    }

    //------------------
    // --- Searching ---
    //------------------

    /// Active flights departing from `source`, in insertion order.
    ///
    /// The search term is pushed on the recent search stack once per match.
    pub fn search_by_source(&mut self, source: &str) -> Vec<&FlightRecord> {
        let matches: Vec<FlightSlot> = self
            .flights
            .iter()
            .enumerate()
            .filter(|(_, flight)| flight.is_active() && flight.source.as_str() == source)
            .map(|(slot, _)| slot)
            .collect();

        for _ in &matches {
            self.recent_searches.push(source.to_string());
        }

        if matches.is_empty() {
            log::debug!("No active flights from {}", source);
        }

        matches.into_iter().map(|slot| &self.flights[slot]).collect()
    }

    /// Recent search terms, newest first. The stack itself is left untouched.
    pub fn recent_searches(&self) -> impl Iterator<Item = &str> {
        self.recent_searches.iter().rev().map(String::as_str)
    }

    //-------------------------
    // --- Route analytics ---
    //-------------------------

    pub fn shortest_path(&self, source: &str, destination: &str) -> Result<ShortestPath> {
        self.graph.shortest_path(source, destination)
    }

    pub fn traverse_dfs(&self, start: &str) -> Result<Vec<AirportId>> {
        self.graph.traverse_depth_first(start)
    }

    pub fn traverse_bfs(&self, start: &str) -> Result<Vec<AirportId>> {
        self.graph.traverse_breadth_first(start)
    }

    pub fn minimum_spanning_tree_prim(&self, start: &str) -> Result<MinimumSpanningTree> {
        self.graph.minimum_spanning_tree_prim(start)
    }

    pub fn minimum_spanning_tree_kruskal(&self) -> MinimumSpanningTree {
        self.graph.minimum_spanning_tree_kruskal()
    }

    //----------------
    // --- Helpers ---
    //----------------

    fn slot_of(&self, id: &str) -> Result<FlightSlot> {
        self.index.search(id).ok_or_else(|| Error::NotFound(format!("flight {}", id)))
    }

    fn set_active(&mut self, id: &str, active: bool) -> Result<()> {
        let slot = self.slot_of(id)?;
        self.flights[slot].active = active;
        Ok(())
    }

    fn non_negative(value: i64, field: &str) -> Result<u32> {
        u32::try_from(value).map_err(|_| Error::InvalidArgument(format!("{} must be between 0 and {}, got {}", field, u32::MAX, value)))
    }

    fn require_passenger(passenger_name: &str) -> Result<()> {
        if passenger_name.trim().is_empty() {
            return Err(Error::InvalidArgument("passenger name must not be empty".to_string()));
        }
        Ok(())
    }
}
