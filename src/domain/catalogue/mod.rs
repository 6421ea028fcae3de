pub mod flight_catalogue;
