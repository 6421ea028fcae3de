pub mod config;
pub mod domain;
pub mod error;
pub mod logger;

pub use config::CatalogueConfig;
pub use domain::booking::booking_ledger::BookingEntry;
pub use domain::catalogue::flight_catalogue::FlightCatalogue;
pub use domain::flight::flight_record::FlightRecord;
pub use domain::graph::shortest_path::ShortestPath;
pub use domain::graph::spanning_tree::{MinimumSpanningTree, SpanningEdge};
pub use domain::utils::id::{AirportId, BookingId, FlightId};
pub use error::{Error, Result};
