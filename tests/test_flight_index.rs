use flight_catalogue::{CatalogueConfig, Error, FlightCatalogue};

fn ids<'a>(flights: impl Iterator<Item = &'a flight_catalogue::FlightRecord>) -> Vec<String> {
    flights.map(|f| f.id().to_string()).collect()
}

#[test]
fn test_every_added_flight_is_found_by_id() {
    let mut catalogue = FlightCatalogue::new();
    let flight_ids = ["F300", "F100", "F250", "F050", "F400", "F175"];

    for (n, id) in flight_ids.iter().enumerate() {
        catalogue.add_flight(id, "Pune", "Mumbai", 100 + n as i64, 10).unwrap();
    }

    for id in flight_ids {
        let record = catalogue.find_flight(id).unwrap();
        assert_eq!(record.id().as_str(), id);
    }
    assert!(matches!(catalogue.find_flight("F999"), Err(Error::NotFound(_))));
}

#[test]
fn test_active_listing_is_sorted_by_id() {
    let mut catalogue = FlightCatalogue::new();
    for id in ["F300", "F100", "F250", "F050"] {
        catalogue.add_flight(id, "Pune", "Mumbai", 150, 10).unwrap();
    }

    assert_eq!(ids(catalogue.list_active_flights()), vec!["F050", "F100", "F250", "F300"]);
}

#[test]
fn test_cancelled_flight_hidden_from_listing_but_searchable() {
    let mut catalogue = FlightCatalogue::new();
    for id in ["B2", "A1", "C3"] {
        catalogue.add_flight(id, "Delhi", "Mumbai", 1400, 3).unwrap();
    }

    catalogue.cancel_flight("B2").unwrap();

    assert_eq!(ids(catalogue.list_active_flights()), vec!["A1", "C3"]);
    let cancelled = catalogue.find_flight("B2").unwrap();
    assert!(!cancelled.is_active());

    // Listing is restartable and reflects reactivation.
    catalogue.reactivate_flight("B2").unwrap();
    assert_eq!(ids(catalogue.list_active_flights()), vec!["A1", "B2", "C3"]);
    assert_eq!(ids(catalogue.list_active_flights()), vec!["A1", "B2", "C3"]);
}

#[test]
fn test_list_flights_keeps_insertion_order_and_cancelled_flights() {
    let mut catalogue = FlightCatalogue::new();
    for id in ["F3", "F1", "F2"] {
        catalogue.add_flight(id, "Pune", "Goa", 450, 1).unwrap();
    }
    catalogue.cancel_flight("F1").unwrap();

    assert_eq!(ids(catalogue.list_flights().iter()), vec!["F3", "F1", "F2"]);
}

#[test]
fn test_duplicate_id_is_rejected_without_side_effects() {
    let mut catalogue = FlightCatalogue::new();
    catalogue.add_flight("F101", "Pune", "Mumbai", 150, 5).unwrap();

    let result = catalogue.add_flight("F101", "Delhi", "Chennai", 2200, 9);

    assert!(matches!(result, Err(Error::InvalidArgument(_))));
    assert_eq!(catalogue.flight_count(), 1);
    assert_eq!(catalogue.find_flight("F101").unwrap().source.as_str(), "Pune");
    assert!(!catalogue.graph().contains("Chennai"));
}

#[test]
fn test_negative_values_rejected_zero_accepted() {
    let mut catalogue = FlightCatalogue::new();

    assert!(matches!(catalogue.add_flight("F1", "Pune", "Mumbai", -1, 5), Err(Error::InvalidArgument(_))));
    assert!(matches!(catalogue.add_flight("F1", "Pune", "Mumbai", 150, -5), Err(Error::InvalidArgument(_))));
    assert!(matches!(catalogue.add_flight("", "Pune", "Mumbai", 150, 5), Err(Error::InvalidArgument(_))));
    assert_eq!(catalogue.flight_count(), 0);
    assert_eq!(catalogue.graph().airport_count(), 0);

    catalogue.add_flight("F1", "Pune", "Mumbai", 0, 0).unwrap();
    let record = catalogue.find_flight("F1").unwrap();
    assert_eq!(record.distance, 0);
    assert_eq!(record.seats(), 0);
}

#[test]
fn test_capacity_is_enforced() {
    let mut catalogue = FlightCatalogue::with_config(CatalogueConfig::with_capacity(2));

    catalogue.add_flight("F1", "A", "B", 10, 1).unwrap();
    catalogue.add_flight("F2", "B", "C", 10, 1).unwrap();

    assert_eq!(catalogue.add_flight("F3", "C", "D", 10, 1), Err(Error::CapacityExceeded(2)));
    assert_eq!(catalogue.flight_count(), 2);
    assert!(!catalogue.graph().contains("D"));
}

#[test]
fn test_default_capacity() {
    let mut catalogue = FlightCatalogue::new();
    assert_eq!(catalogue.capacity(), 100);

    for n in 0..100 {
        catalogue.add_flight(&format!("F{:03}", n), "Pune", "Mumbai", 150, 1).unwrap();
    }

    assert!(matches!(catalogue.add_flight("F100", "Pune", "Mumbai", 150, 1), Err(Error::CapacityExceeded(100))));
}

#[test]
fn test_cancel_and_reactivate_unknown_flight() {
    let mut catalogue = FlightCatalogue::new();

    assert!(matches!(catalogue.cancel_flight("F404"), Err(Error::NotFound(_))));
    assert!(matches!(catalogue.reactivate_flight("F404"), Err(Error::NotFound(_))));
}

#[test]
fn test_flight_record_serializes_without_booking_head() {
    let mut catalogue = FlightCatalogue::new();
    catalogue.add_flight("F101", "Pune", "Mumbai", 150, 5).unwrap();

    let json = serde_json::to_value(catalogue.find_flight("F101").unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "id": "F101",
            "source": "Pune",
            "destination": "Mumbai",
            "distance": 150,
            "seats": 5,
            "active": true
        })
    );
}
