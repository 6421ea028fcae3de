use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

/// String identifier tagged with the kind of entity it names.
///
/// Ordering is the byte-wise lexicographic order of the inner string, which is
/// the key order of the flight index.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Serialize)]
#[serde(transparent)]
pub struct Id<T> {
    pub id: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(id: impl Into<String>) -> Self {
        Id { id: id.into(), _marker: PhantomData }
    }

    pub fn as_str(&self) -> &str {
        &self.id
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> From<Id<T>> for String {
    fn from(id_wrapper: Id<T>) -> Self {
        id_wrapper.id
    }
}

impl<T> From<&str> for Id<T> {
    fn from(id: &str) -> Self {
        Id::new(id)
    }
}

// Hash and Eq only look at the inner string, so borrowing as `str` is consistent.
impl<T> Borrow<str> for Id<T> {
    fn borrow(&self) -> &str {
        &self.id
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full_name = std::any::type_name::<T>();
        let clean_name = full_name.split("::").last().unwrap_or(full_name);
        let display_name = clean_name.replace("Tag", "Id");

        write!(f, "{}: {:?}", display_name, self.id)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct FlightTag;
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct AirportTag;

pub type FlightId = Id<FlightTag>;
pub type AirportId = Id<AirportTag>;

/// Booking number handed out by the catalogue, starting at 1 and never reused.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Serialize)]
#[serde(transparent)]
pub struct BookingId(pub u64);

impl BookingId {
    pub const FIRST: BookingId = BookingId(1);

    pub fn next(self) -> BookingId {
        BookingId(self.0 + 1)
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
