//! Advanced filtering example for easepark-rs
//!
//! This example demonstrates district filters, text search, the open-only
//! toggle and column sorting.

use easepark_rs::prelude::*;
use easepark_rs::RankKey;

const SNAPSHOT_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/crates/easepark-core/tests/data");

fn print_rows(records: &[&CarparkRecord], vehicle_type: &str, lang: Language) {
    for record in records {
        println!(
            "  {:<8} {:>4}  {:<20} {}",
            record.status.localized(lang),
            record.vacancy(vehicle_type),
            record.district(lang),
            record.name(lang),
        );
    }
    println!();
}

fn main() -> Result<()> {
    println!("=== EaseParkHK Advanced Filtering Example ===\n");

    let records = FeedSnapshot::load_from_dir(SNAPSHOT_DIR)?.into_records();

    // Example 1: Every car park on Hong Kong Island
    println!("--- Example 1: Region filter (Hong Kong Island) ---");
    let island = CarparkRanker::new("P")
        .filter(CarparkFilter::new().districts(resolve("hong_kong_island", Language::En)));
    print_rows(&island.rank(&records), "P", Language::En);

    // Example 2: Search by name or address, open car parks only
    println!("--- Example 2: Search 'central', open only ---");
    let search = CarparkRanker::new("P").filter(CarparkFilter::new().search("central").open_only(true));
    print_rows(&search.rank(&records), "P", Language::En);

    // Example 3: Chinese search text against Chinese labels
    println!("--- Example 3: Search '中環' in Traditional Chinese ---");
    let tc = CarparkRanker::new("P")
        .lang(Language::Tc)
        .filter(CarparkFilter::new().search("中環"));
    print_rows(&tc.rank(&records), "P", Language::Tc);

    // Example 4: Sort by name, reversed (status still comes first)
    println!("--- Example 4: Sort by name Z-A ---");
    let by_name = CarparkRanker::new("P").sort_by(SortColumn::Name, SortDirection::Reversed);
    print_rows(&by_name.rank(&records), "P", Language::En);

    // Example 5: Filter without ranking, then inspect the ranking keys
    println!("--- Example 5: Ranking keys for open car parks ---");
    let open = CarparkFilter::new().open_only(true).apply(&records, Language::En);
    for record in open {
        let key = RankKey::of(record, "P");
        println!(
            "  {:<10} status_rank={} vacancy_rank={}",
            record.park_id, key.status_rank, key.vacancy_rank
        );
    }

    Ok(())
}
