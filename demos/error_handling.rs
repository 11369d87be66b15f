//! Error handling example for easepark-rs
//!
//! This example demonstrates the failure modes of loading and the inputs
//! that degrade gracefully instead of failing.

use easepark_rs::prelude::*;

const SNAPSHOT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/crates/easepark-core/tests/data");

fn main() -> Result<()> {
    println!("=== EaseParkHK Error Handling Example ===\n");

    // Example 1: Missing snapshot directory
    println!("--- Example 1: Loading from a directory without feeds ---");
    match FeedSnapshot::load_from_dir("/nonexistent/snapshot") {
        Ok(snapshot) => println!("✓ unexpectedly loaded {} records", snapshot.into_records().len()),
        Err(EaseParkError::NotFound(what)) => println!("✗ not found: {what}"),
        Err(e) => println!("✗ other error: {e}"),
    }
    println!();

    // Example 2: Malformed feed text
    println!("--- Example 2: Parsing malformed JSON ---");
    match easepark_rs::parse_feeds("{\"car_park\": [", "{}") {
        Ok(records) => println!("✓ parsed {} records", records.len()),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 3: Malformed settings
    println!("--- Example 3: Settings with a bad language ---");
    match Settings::from_toml_str("lang = \"fr\"") {
        Ok(settings) => println!("✓ settings: {settings:?}"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 4: Route parameters never fail; unknown ones pass through
    println!("--- Example 4: Unknown and empty route parameters ---");
    for param in ["atlantis", "", "%E4%B8%AD%E7%92%B0", "%zz"] {
        let resolution = resolve(param, Language::En);
        println!(
            "{param:?} -> passthrough={} title={:?}",
            resolution.is_passthrough(),
            resolution.title()
        );
    }
    println!();

    // Example 5: Vehicle types the feed never reports
    println!("--- Example 5: Ranking for an unreported vehicle type ---");
    let records = FeedSnapshot::load_from_dir(SNAPSHOT_DIR)?.into_records();
    for record in rank(&records, "C") {
        println!("{:<10} {}", record.park_id, record.vacancy("C"));
    }

    Ok(())
}
