// crates/easepark-core/tests/resolve_and_rank.rs
//! End-to-end: load the bundled feed snapshot, resolve a route parameter,
//! filter and rank.

use easepark_core::prelude::*;
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

fn records() -> Vec<CarparkRecord> {
    FeedSnapshot::load_from_dir(data_dir())
        .expect("bundled snapshot loads")
        .into_records()
}

fn ids(ranked: &[&CarparkRecord]) -> Vec<String> {
    ranked.iter().map(|r| r.park_id.clone()).collect()
}

#[test]
fn ranks_whole_snapshot_for_private_cars() {
    let records = records();
    assert_eq!(records.len(), 5);
    assert_eq!(
        ids(&rank(&records, "P")),
        ["tdc5p1", "tdc1p1", "tdc3p1", "tdc4p1", "tdc2p1"]
    );
}

#[test]
fn district_route_filters_then_ranks() {
    let records = records();
    let resolution = resolve("Central-Western", Language::En);
    assert_eq!(resolution.title(), "Central and Western Parking Information");

    let ranker = CarparkRanker::new("P").filter(CarparkFilter::new().districts(resolution));
    // OPEN with 5, OPEN with no data, CLOSED with 10.
    assert_eq!(ids(&ranker.rank(&records)), ["tdc1p1", "tdc3p1", "tdc2p1"]);
}

#[test]
fn region_route_covers_its_districts() {
    let records = records();
    for raw in ["hong_kong_island", "Hong Kong Island", "hong-kong-island"] {
        let ranker = CarparkRanker::new("P")
            .filter(CarparkFilter::new().districts(resolve(raw, Language::En)));
        assert_eq!(
            ids(&ranker.rank(&records)),
            ["tdc1p1", "tdc3p1", "tdc4p1", "tdc2p1"],
            "{raw}"
        );
    }
}

#[test]
fn search_and_open_only() {
    let records = records();
    let search = CarparkRanker::new("P").filter(CarparkFilter::new().search("central"));
    assert_eq!(ids(&search.rank(&records)), ["tdc5p1", "tdc3p1", "tdc2p1"]);

    let open = CarparkRanker::new("P").filter(CarparkFilter::new().search("CENTRAL").open_only(true));
    assert_eq!(ids(&open.rank(&records)), ["tdc5p1", "tdc3p1"]);

    let chinese = CarparkRanker::new("P")
        .lang(Language::Tc)
        .filter(CarparkFilter::new().search("中環"));
    assert_eq!(ids(&chinese.rank(&records)), ["tdc3p1", "tdc2p1"]);
}

#[test]
fn unknown_route_yields_no_records_but_a_title() {
    let records = records();
    let resolution = resolve("Unknown Place X", Language::En);
    assert!(resolution.title().contains("Unknown Place X"));
    assert_eq!(resolution.districts().len(), 1);

    let ranker = CarparkRanker::new("P").filter(CarparkFilter::new().districts(resolution));
    assert!(ranker.rank(&records).is_empty());
}

#[test]
fn motor_cycle_column_is_independent() {
    let records = records();
    let ranked = rank(&records, "M");
    // Only tdc1p1 reports motor cycles, and it is full; every other open
    // car park has no data and therefore ranks above it.
    assert_eq!(ids(&ranked), ["tdc3p1", "tdc4p1", "tdc5p1", "tdc1p1", "tdc2p1"]);
    assert_eq!(ranked[3].vacancy("M").level(), VacancyLevel::Full);
}

#[test]
fn district_column_sort_in_chinese() {
    let records = records();
    let ranker = CarparkRanker::new("P")
        .lang(Language::Tc)
        .sort_by(SortColumn::District, SortDirection::Natural);
    // 沙田區 (sha) < 灣仔區 (wan) < 中西區 (zhong) by romanization; status first.
    assert_eq!(
        ids(&ranker.rank(&records)),
        ["tdc5p1", "tdc4p1", "tdc1p1", "tdc3p1", "tdc2p1"]
    );
}

#[test]
fn settings_drive_the_pipeline() {
    let records = records();
    let settings = Settings::from_toml_str("lang = \"tc\"\nopen_only = true\n").unwrap();
    let resolution = settings.resolver().resolve("港島", settings.lang);
    assert_eq!(resolution.title(), "港島停車場資訊");

    let ranked = settings.ranker().rank(&records);
    assert!(ranked.iter().all(|r| r.status == OpeningStatus::Open));
    assert_eq!(ranked.len(), 4);
}

#[test]
fn missing_snapshot_is_not_found() {
    let err = FeedSnapshot::load_from_dir(data_dir().join("nope")).unwrap_err();
    assert!(matches!(err, EaseParkError::NotFound(_)));
}
