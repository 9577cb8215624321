//! Shortest Path Demo
//!
//! Builds a small transit network, filters its edges by label with the edge
//! store and answers fewest-hop route queries with the path finder.
//!
//! Run with `cargo run --example shortest_path_demo`

use pathfinder::{EdgeStore, SearchConfig, ShortestPathFinder};

const CONNECTIONS: [(&str, &str, &str); 9] = [
    ("Harbor", "Market", "tram"),
    ("Market", "Station", "tram"),
    ("Station", "Airport", "rail"),
    ("Harbor", "Old Town", "bus"),
    ("Old Town", "University", "bus"),
    ("University", "Station", "bus"),
    ("Market", "Harbor", "tram"),
    ("Airport", "Station", "rail"),
    ("Harbor", "Island", "ferry"),
];

fn main() -> anyhow::Result<()> {
    // Initialize tracing; debug level shows adjacency and search events
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Pathfinder v{}", pathfinder::version());
    println!("==========================================");
    println!();

    let store: EdgeStore<&str, &str> = CONNECTIONS.into_iter().collect();
    println!("=== Network: {} connections ===", store.len());

    let trams: Vec<_> = store.find_matching(|mode| *mode == "tram").collect();
    println!("Tram connections:");
    for edge in &trams {
        println!("  {} -> {}", edge.source(), edge.target());
    }
    println!();

    let finder = ShortestPathFinder::new(store.endpoints());
    println!("=== Routes ===");
    for (from, to) in [("Harbor", "Airport"), ("Airport", "Harbor"), ("Island", "Harbor")] {
        let route = finder.shortest_path(&from, &to);
        if route.is_empty() {
            println!("{} -> {}: no route", from, to);
        } else {
            println!("{} -> {}: {} ({} hops)", from, to, route.join(" -> "), route.len() - 1);
        }
    }
    println!();

    // Bounded search: refuse to look further than two hops
    let bounded = ShortestPathFinder::with_config(
        store.endpoints(),
        SearchConfig::default().with_max_depth(2),
    );
    println!("=== Bounded search (max 2 hops) ===");
    match bounded.search(&"Harbor", &"Airport") {
        Ok(Some(result)) => println!("found in {} hops", result.hops),
        Ok(None) => println!("no route"),
        Err(e) => println!("gave up: {}", e),
    }

    let nearby = bounded.search(&"Harbor", &"Station")?;
    if let Some(result) = nearby {
        println!("Harbor -> Station: {}", result.path.join(" -> "));
    }

    Ok(())
}
