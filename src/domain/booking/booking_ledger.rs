use serde::Serialize;
use slotmap::{SlotMap, new_key_type};
use std::collections::VecDeque;

use crate::domain::flight::flight_record::FlightSlot;
use crate::domain::utils::id::BookingId;

new_key_type! {
    pub struct BookingKey;
}

/// A committed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingEntry {
    pub booking_id: BookingId,
    pub passenger_name: String,
}

#[derive(Debug, Clone)]
struct BookingNode {
    entry: BookingEntry,
    next: Option<BookingKey>,
}

/// A queued, not yet committed request to book a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingBookingRequest {
    /// Position in the flight array, resolved at enqueue time.
    pub slot: FlightSlot,

    /// Name given when the request was queued.
    pub passenger_name: String,
}

/// Storage for every flight's booking list plus the global request queue.
///
/// Each flight owns a singly-linked list whose head key is kept on the flight
/// record. The nodes of all lists share one arena; a node belongs to exactly
/// one list and is dropped from the arena when unlinked.
#[derive(Debug, Default)]
pub struct BookingLedger {
    nodes: SlotMap<BookingKey, BookingNode>,
    pending: VecDeque<PendingBookingRequest>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self { nodes: SlotMap::with_key(), pending: VecDeque::new() }
    }

    //------------------------
    // --- Booking lists ---
    //------------------------

    /// Links `entry` in front of the list starting at `head`.
    pub fn prepend(&mut self, head: &mut Option<BookingKey>, entry: BookingEntry) {
        let key = self.nodes.insert(BookingNode { entry, next: *head });
        *head = Some(key);
    }

    /// Unlinks the node carrying `booking_id` from the list starting at `head`.
    ///
    /// # Returns
    /// Returns the removed entry, or `None` if no node in this list has that id.
    pub fn remove(&mut self, head: &mut Option<BookingKey>, booking_id: BookingId) -> Option<BookingEntry> {
        let mut prev: Option<BookingKey> = None;
        let mut cur = *head;

        while let Some(key) = cur {
            let node = self.nodes.get(key)?;
            if node.entry.booking_id == booking_id {
                break;
            }
            prev = Some(key);
            cur = node.next;
        }

        let key = cur?;
        let node = self.nodes.remove(key)?;

        match prev {
            Some(prev_key) => {
                if let Some(prev_node) = self.nodes.get_mut(prev_key) {
                    prev_node.next = node.next;
                }
            }
            None => *head = node.next,
        }

        Some(node.entry)
    }

    /// Walks the list starting at `head`, most recent booking first.
    pub fn iter(&self, head: Option<BookingKey>) -> BookingIter<'_> {
        BookingIter { ledger: self, cursor: head }
    }

    /// Total number of committed bookings across all flights.
    pub fn committed_count(&self) -> usize {
        self.nodes.len()
    }

    //------------------------
    // --- Request queue ---
    //------------------------

    pub fn enqueue(&mut self, request: PendingBookingRequest) {
        self.pending.push_back(request);
    }

    pub fn dequeue(&mut self) -> Option<PendingBookingRequest> {
        self.pending.pop_front()
    }

    /// Pending requests, oldest first. Does not consume the queue.
    pub fn pending(&self) -> impl Iterator<Item = &PendingBookingRequest> {
        self.pending.iter()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

pub struct BookingIter<'a> {
    ledger: &'a BookingLedger,
    cursor: Option<BookingKey>,
}

impl<'a> Iterator for BookingIter<'a> {
    type Item = &'a BookingEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.ledger.nodes.get(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.entry)
    }
}
