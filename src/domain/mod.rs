pub mod booking;
pub mod catalogue;
pub mod flight;
pub mod graph;
pub mod utils;
