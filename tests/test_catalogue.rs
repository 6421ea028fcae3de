use flight_catalogue::{Error, FlightCatalogue};

fn create_sample_catalogue() -> FlightCatalogue {
    let mut catalogue = FlightCatalogue::new();
    catalogue.add_flight("AI101", "Mumbai", "Delhi", 1400, 10).unwrap();
    catalogue.add_flight("AI102", "Delhi", "Bangalore", 2150, 10).unwrap();
    catalogue.add_flight("AI103", "Mumbai", "Bangalore", 980, 10).unwrap();
    catalogue
}

fn names(airports: &[flight_catalogue::AirportId]) -> Vec<&str> {
    airports.iter().map(|a| a.as_str()).collect()
}

#[test]
fn test_added_flights_build_the_airport_graph() {
    let catalogue = create_sample_catalogue();

    assert_eq!(catalogue.graph().airport_count(), 3);
    assert_eq!(catalogue.graph().edge_count(), 3);
    assert_eq!(names(&catalogue.graph().airports()), vec!["Mumbai", "Delhi", "Bangalore"]);
}

#[test]
fn test_shortest_path_scenario() {
    let catalogue = create_sample_catalogue();

    let route = catalogue.shortest_path("Mumbai", "Bangalore").unwrap();

    assert_eq!(route.distance, 980);
    assert_eq!(names(&route.path), vec!["Mumbai", "Bangalore"]);

    let route = catalogue.shortest_path("Delhi", "Bangalore").unwrap();
    assert_eq!(route.distance, 2150);
}

#[test]
fn test_spanning_tree_scenario() {
    let catalogue = create_sample_catalogue();

    let kruskal = catalogue.minimum_spanning_tree_kruskal();
    let prim = catalogue.minimum_spanning_tree_prim("Bangalore").unwrap();

    assert_eq!(kruskal.total_weight, 2380);
    assert_eq!(prim.total_weight, 2380);
    assert!(kruskal.edges.iter().all(|e| e.weight != 2150));
}

#[test]
fn test_traversals_through_catalogue() {
    let catalogue = create_sample_catalogue();

    assert_eq!(names(&catalogue.traverse_dfs("Mumbai").unwrap()), vec!["Mumbai", "Delhi", "Bangalore"]);
    assert_eq!(names(&catalogue.traverse_bfs("Bangalore").unwrap()), vec!["Bangalore", "Delhi", "Mumbai"]);
    assert!(matches!(catalogue.traverse_dfs("Chennai"), Err(Error::NotFound(_))));
}

#[test]
fn test_cancelled_flight_keeps_its_route() {
    let mut catalogue = create_sample_catalogue();

    catalogue.cancel_flight("AI103").unwrap();

    assert_eq!(catalogue.shortest_path("Mumbai", "Bangalore").unwrap().distance, 980);
}

#[test]
fn test_search_by_source_pushes_once_per_match() {
    let mut catalogue = create_sample_catalogue();

    let from_mumbai: Vec<String> = catalogue.search_by_source("Mumbai").iter().map(|f| f.id().to_string()).collect();
    assert_eq!(from_mumbai, vec!["AI101", "AI103"]);

    assert!(catalogue.search_by_source("Chennai").is_empty());
    assert_eq!(catalogue.search_by_source("Delhi").len(), 1);

    assert_eq!(catalogue.recent_searches().collect::<Vec<_>>(), vec!["Delhi", "Mumbai", "Mumbai"]);
}

#[test]
fn test_search_by_source_skips_cancelled_and_is_case_sensitive() {
    let mut catalogue = create_sample_catalogue();
    catalogue.cancel_flight("AI101").unwrap();

    let results: Vec<String> = catalogue.search_by_source("Mumbai").iter().map(|f| f.id().to_string()).collect();
    assert_eq!(results, vec!["AI103"]);
    assert!(catalogue.search_by_source("mumbai").is_empty());
}

#[test]
fn test_recent_searches_is_a_snapshot() {
    let mut catalogue = create_sample_catalogue();
    catalogue.search_by_source("Delhi");

    let first: Vec<String> = catalogue.recent_searches().map(str::to_string).collect();
    let second: Vec<String> = catalogue.recent_searches().map(str::to_string).collect();

    assert_eq!(first, vec!["Delhi"]);
    assert_eq!(first, second);
}

#[test]
fn test_recent_searches_empty_initially() {
    let catalogue = FlightCatalogue::default();

    assert_eq!(catalogue.recent_searches().count(), 0);
    assert_eq!(catalogue.list_active_flights().count(), 0);
    assert_eq!(catalogue.minimum_spanning_tree_kruskal().total_weight, 0);
}

#[test]
fn test_errors_render_readable_messages() {
    let catalogue = create_sample_catalogue();

    let err = catalogue.shortest_path("Mumbai", "Chennai").unwrap_err();

    assert_eq!(err.to_string(), "No path found between Mumbai and Chennai");
    assert_eq!(Error::CapacityExceeded(100).to_string(), "Flight capacity of 100 reached, cannot add more flights");
}
