use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use flight_catalogue::{CatalogueConfig, FlightCatalogue, MinimumSpanningTree, logger};

/// Seeds a sample flight network and prints listings, a booking round and the route analytics.
#[derive(Debug, Parser)]
#[command(name = "flight-catalogue", version, about)]
struct Args {
    /// Maximum number of flights the catalogue accepts.
    #[arg(long, default_value_t = flight_catalogue::config::DEFAULT_CAPACITY)]
    capacity: usize,

    /// Source airport of the shortest path query.
    #[arg(long, default_value = "Pune")]
    from: String,

    /// Destination airport of the shortest path query.
    #[arg(long, default_value = "Delhi")]
    to: String,

    /// Start airport for traversals and Prim's MST.
    #[arg(long, default_value = "Mumbai")]
    mst_start: String,
}

const SAMPLE_FLIGHTS: &[(&str, &str, &str, i64, i64)] = &[
    ("F101", "Pune", "Mumbai", 150, 5),
    ("F102", "Delhi", "Mumbai", 1400, 3),
    ("F103", "Pune", "Bangalore", 840, 2),
    ("F104", "Mumbai", "Bangalore", 980, 4),
    ("F105", "Delhi", "Bangalore", 2150, 1),
    ("F106", "Bangalore", "Chennai", 350, 6),
];

fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    log::info!("Starting flight catalogue demo with capacity {}", args.capacity);

    let mut catalogue = FlightCatalogue::with_config(CatalogueConfig::with_capacity(args.capacity));
    for &(id, source, destination, distance, seats) in SAMPLE_FLIGHTS {
        if let Err(e) = catalogue.add_flight(id, source, destination, distance, seats) {
            log::warn!("Skipping sample flight {}: {}", id, e);
        }
    }

    println!("{}", "Active flights (by id):".bold());
    for flight in catalogue.list_active_flights() {
        println!("  {}", flight);
    }

    println!("{}", "Bookings:".bold());
    for (id, passenger) in [("F105", "Asha"), ("F105", "Ravi")] {
        catalogue.queue_booking(id, passenger).with_context(|| format!("queueing booking on {}", id))?;
    }
    while catalogue.pending_bookings().next().is_some() {
        let passenger = catalogue.pending_bookings().next().map(|(_, name)| name.to_string()).unwrap_or_default();
        match catalogue.process_next_booking(&passenger) {
            Ok(booking_id) => println!("  {} booking {} for {}", "confirmed".green(), booking_id, passenger),
            Err(e) => println!("  {} {}", "rejected".red(), e),
        }
    }

    let from_pune = catalogue.search_by_source("Pune").len();
    println!("{} {} flight(s) from Pune", "Search:".bold(), from_pune);
    println!("{} {:?}", "Recent searches:".bold(), catalogue.recent_searches().collect::<Vec<_>>());

    println!("{}", "Shortest path:".bold());
    match catalogue.shortest_path(&args.from, &args.to) {
        Ok(route) => {
            let hops: Vec<&str> = route.path.iter().map(|airport| airport.as_str()).collect();
            println!("  {} -> {} = {} via {}", args.from, args.to, route.distance, hops.join(" -> "));
        }
        Err(e) => println!("  {}", e),
    }

    let dfs = catalogue.traverse_dfs(&args.mst_start).context("depth-first traversal")?;
    let bfs = catalogue.traverse_bfs(&args.mst_start).context("breadth-first traversal")?;
    println!("{} {:?}", "DFS:".bold(), dfs.iter().map(|a| a.as_str()).collect::<Vec<_>>());
    println!("{} {:?}", "BFS:".bold(), bfs.iter().map(|a| a.as_str()).collect::<Vec<_>>());

    print_tree("Prim's MST:", &catalogue.minimum_spanning_tree_prim(&args.mst_start).context("prim")?);
    print_tree("Kruskal's MST:", &catalogue.minimum_spanning_tree_kruskal());

    Ok(())
}

fn print_tree(title: &str, tree: &MinimumSpanningTree) {
    println!("{}", title.bold());
    for edge in &tree.edges {
        println!("  {} - {} ({})", edge.from, edge.to, edge.weight);
    }
    println!("  Total MST weight = {}", tree.total_weight);
}
