//! Basic usage example for easepark-rs
//!
//! This example demonstrates how to:
//! - Resolve route parameters into districts and page titles
//! - Load a feed snapshot from disk
//! - Rank car parks for a vehicle type

use easepark_rs::prelude::*;

const SNAPSHOT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/crates/easepark-core/tests/data");

fn main() -> Result<()> {
    println!("=== EaseParkHK Basic Usage Example ===\n");

    // Example 1: Region, district and unknown route parameters
    println!("--- Example 1: Resolving route parameters ---");
    for param in ["hong-kong-island", "Central%20%26%20Western", "tin-shui-wai"] {
        let resolution = resolve(param, Language::En);
        println!("{param:<28} -> {:?}", resolution.scope());
        println!("{:<28}    title: {}", "", resolution.title());
        println!("{:<28}    districts: {}", "", resolution.canonical_names().join(", "));
    }
    println!();

    // Example 2: Titles in every language
    println!("--- Example 2: Localized titles ---");
    for lang in Language::ALL {
        println!("[{lang}] {}", resolve("kowloon", lang).title());
    }
    println!();

    // Example 3: Load the snapshot and rank it
    println!("--- Example 3: Ranking private-car vacancies ---");
    let records = FeedSnapshot::load_from_dir(SNAPSHOT_DIR)?.into_records();
    println!("Loaded {} car parks", records.len());
    for (i, record) in rank(&records, "P").iter().enumerate() {
        println!(
            "{}. {:<32} {:<8} {:>4}",
            i + 1,
            record.name(Language::En),
            record.status.localized(Language::En),
            record.vacancy("P"),
        );
    }
    println!();

    // Example 4: Same data for motorcycles, in Traditional Chinese
    println!("--- Example 4: {} ---", VehicleType::MotorCycle.localized(Language::Tc));
    let ranker = CarparkRanker::new("M").lang(Language::Tc);
    for record in ranker.rank(&records) {
        println!("{} {}", record.name(Language::Tc), record.vacancy("M"));
    }

    Ok(())
}
