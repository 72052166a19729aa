//! Live search against the real lefrecce.it API.
//!
//! Run with: cargo run --example live_search

use lefrecce_core::{LefrecceApi, SolutionsQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api = LefrecceApi::new()?;

    println!("🔍 Looking up stations matching 'milano'...\n");

    let stations = api.locations("milano").await?;
    if let Some(items) = stations.as_array() {
        for (i, station) in items.iter().take(5).enumerate() {
            let name = station["name"].as_str().unwrap_or("?");
            println!("  {}. {}", i + 1, name);
        }
    }

    println!("\n🚄 Searching journeys Milano Centrale → Roma Termini...\n");

    let solutions = api
        .solutions(&SolutionsQuery::new("Milano Centrale", "Roma Termini"))
        .await?;

    if let Some(items) = solutions.as_array() {
        println!("Found {} solutions:", items.len());
        for solution in items.iter().take(10) {
            let departure = solution["departuretime"].as_i64().unwrap_or(0);
            let duration = solution["duration"].as_str().unwrap_or("?");
            let price = solution["minprice"]
                .as_f64()
                .map(|p| format!("{p:.2} €"))
                .unwrap_or_else(|| "—".to_string());
            println!("  • dep {departure}  {duration}  from {price}");
        }
    } else {
        println!("{solutions:#}");
    }

    Ok(())
}
