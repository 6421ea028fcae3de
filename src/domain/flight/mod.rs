pub mod flight_index;
pub mod flight_record;
